// patterns.rs - Seed configurations for the grid

use crate::grid::{Cell, Grid};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A named configuration. `cells` are `(x, y)` offsets from the pattern's
/// top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Extent of the pattern as `(width, height)`.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Clears `grid` and stamps `pattern` in its centre. Cells that do not fit are
/// dropped. Returns the number of cells placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    grid.clear();

    let (w, h) = pattern.bounds();
    let origin_x = grid.width().saturating_sub(w) / 2;
    let origin_y = grid.height().saturating_sub(h) / 2;

    let mut placed = 0;
    for &(x, y) in pattern.cells {
        let (x, y) = ((origin_x + x) as isize, (origin_y + y) as isize);
        if grid.set(x, y, Cell::Alive).is_ok() {
            placed += 1;
        }
    }

    if placed < pattern.cells.len() {
        log::warn!(
            "pattern {:?} clipped: {} of {} cells fit a {}x{} grid",
            pattern.name,
            placed,
            pattern.cells.len(),
            grid.width(),
            grid.height()
        );
    }
    placed
}

/// Clears `grid` and fills roughly a third of it. The same seed always
/// produces the same grid.
pub fn fill_random(grid: &mut Grid, seed_value: u64) {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    *grid = Grid::from_fn(grid.width(), grid.height(), |_, _| {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        Cell::from(seed % 3 == 0)
    });
}
