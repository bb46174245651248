// grid.rs - Grid types for Conway's Game of Life

use crate::error::GridError;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead  => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size, bounded grid of cells stored row-major.
///
/// Dimensions are set by [`Grid::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `width` x `height` grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Builds a grid by evaluating `f(x, y)` at every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let cells = (0..width * height).map(|i| f(i % width, i / width)).collect();
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index of `(x, y)`, or `None` outside `[0, width) x [0, height)`.
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn checked_index(&self, x: isize, y: isize) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get(&self, x: isize, y: isize) -> Result<Cell, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> Result<(), GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Flips the cell at `(x, y)` and returns its new state.
    pub fn toggle(&mut self, x: isize, y: isize) -> Result<Cell, GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    /// Alive check that treats anything off the grid as dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i].is_alive())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// All positions with their state, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % self.width, i / self.width, cell))
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|&(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(7, 4);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.cells().count(), 28);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(5, 3);
        grid.set(4, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(4, 2).unwrap(), Cell::Alive);
        assert_eq!(grid.get(2, 2).unwrap(), Cell::Dead);
        assert_eq!(grid.iter_alive().collect::<Vec<_>>(), vec![(4, 2)]);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(4, 6);
        for (x, y) in [(-1, 0), (4, 0), (0, -1), (0, 6)] {
            assert!(matches!(grid.get(x, y), Err(GridError::OutOfBounds { .. })));
            assert!(matches!(
                grid.set(x, y, Cell::Alive),
                Err(GridError::OutOfBounds { .. })
            ));
        }
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn double_toggle_restores_cell() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.toggle(1, 1).unwrap(), Cell::Alive);
        assert_eq!(grid.toggle(1, 1).unwrap(), Cell::Dead);
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(4, 4);
        for (x, y) in [(0, 0), (1, 2), (3, 3)] {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        grid.clear();
        assert!(grid.cells().all(|(_, _, c)| c == Cell::Dead));
        assert_eq!((grid.width(), grid.height()), (4, 4));
    }

    #[test]
    fn off_grid_reads_as_dead() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Alive).unwrap();
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(-1, 0));
        assert!(!grid.is_alive(2, 1));
    }
}
