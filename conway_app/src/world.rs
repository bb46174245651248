// world.rs - The running simulation: grid, timer, and user actions

use conway::{next_generation, patterns, Cell, Grid, GridError};
use egui::Vec2;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::render;

/// Owns the current generation and the automatic-advance timer.
///
/// All methods run on the UI thread, so a tick always completes before the
/// next input or timer event is handled.
pub struct World {
    grid: Grid,
    cell_size: f32,
    interval: Duration,
    running: bool,
    last_tick: Instant,
    generation: u64,
}

impl World {
    pub fn new(width: usize, height: usize, cell_size: f32, interval: Duration) -> Self {
        Self {
            grid: Grid::new(width, height),
            cell_size,
            interval,
            running: false,
            last_tick: Instant::now(),
            generation: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.width, config.height, config.cell_size, config.interval())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Begins automatic ticking; the first tick fires one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_tick = now;
        log::info!("started, ticking every {:?}", self.interval);
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("stopped at generation {}", self.generation);
        }
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        log::debug!(
            "generation {}: {} alive",
            self.generation,
            self.grid.population()
        );
    }

    /// Timer check. Performs at most one tick per call, and only when running
    /// and a full interval has passed since the previous tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running || now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.step();
        self.last_tick = now;
        true
    }

    /// Time left before the next tick is due, `None` when stopped.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.running.then(|| {
            self.interval
                .saturating_sub(now.saturating_duration_since(self.last_tick))
        })
    }

    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.generation = 0;
        log::info!("cleared");
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let (x, y) = (
            isize::try_from(x).unwrap_or(isize::MAX),
            isize::try_from(y).unwrap_or(isize::MAX),
        );
        let cell = self.grid.toggle(x, y)?;
        log::debug!("toggled ({x}, {y}) to {cell:?}");
        Ok(cell)
    }

    /// Toggles the cell under a canvas-local pointer position. Presses outside
    /// the grid are ignored and return `None`.
    pub fn press_at(&mut self, local: Vec2) -> Option<(usize, usize)> {
        let Some((x, y)) =
            render::pointer_to_cell(local, self.cell_size, self.grid.width(), self.grid.height())
        else {
            log::debug!("press at {local:?} is outside the grid");
            return None;
        };
        self.toggle(x, y).ok().map(|_| (x, y))
    }

    /// Replaces the grid with the pattern at `index` in [`patterns::PATTERNS`].
    pub fn apply_pattern(&mut self, index: usize) -> Option<usize> {
        let pattern = patterns::PATTERNS.get(index)?;
        let placed = patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        log::info!("loaded {} ({placed} cells)", pattern.name);
        Some(placed)
    }

    pub fn randomize(&mut self, seed: u64) {
        patterns::fill_random(&mut self.grid, seed);
        self.generation = 0;
        log::info!("random fill (seed {seed}): {} alive", self.grid.population());
    }
}
