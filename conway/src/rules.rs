// rules.rs - Generation update for Conway's Game of Life

use crate::grid::{Cell, Grid};

// Offsets of the eight surrounding positions
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts alive neighbors of `(x, y)`. The grid is bounded: positions past an
/// edge are skipped, never wrapped.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| grid.is_alive(x + dx, y + dy))
        .count() as u8
}

pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
        (Cell::Dead, 3)                     => Cell::Alive,  // Birth
        _                                   => Cell::Dead,   // Death or stays dead
    }
}

/// Builds the successor of `grid` in a freshly allocated grid of the same size.
pub fn next_generation(grid: &Grid) -> Grid {
    let next = Grid::from_fn(grid.width(), grid.height(), |x, y| {
        let current = Cell::from(grid.is_alive(x as isize, y as isize));
        next_state(current, live_neighbors(grid, x, y))
    });
    log::trace!("generation advanced: population {}", next.population());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn input_is_left_untouched() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2), (0, 0)]);
        let before = grid.clone();
        let next = next_generation(&grid);
        assert_eq!(grid, before);
        assert_ne!(next, grid);
    }

    #[test]
    fn underpopulated_cells_die() {
        for state in [Cell::Alive, Cell::Dead] {
            assert_eq!(next_state(state, 0), Cell::Dead);
            assert_eq!(next_state(state, 1), Cell::Dead);
        }
        // Lone cell and a pair both vanish
        let grid = grid_with(6, 6, &[(1, 1), (4, 4), (4, 5)]);
        assert_eq!(next_generation(&grid).population(), 0);
    }

    #[test]
    fn overcrowded_cells_die() {
        for n in 4..=8 {
            assert_eq!(next_state(Cell::Alive, n), Cell::Dead);
            assert_eq!(next_state(Cell::Dead, n), Cell::Dead);
        }
        // Centre of a plus sign has four neighbors
        let grid = grid_with(5, 5, &[(2, 2), (2, 1), (1, 2), (3, 2), (2, 3)]);
        assert_eq!(live_neighbors(&grid, 2, 2), 4);
        assert_eq!(next_generation(&grid).get(2, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn survival_and_birth() {
        assert_eq!(next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
    }

    #[test]
    fn block_is_a_still_life() {
        let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let once = next_generation(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(next_generation(&once), horizontal);
    }

    #[test]
    fn edges_do_not_wrap() {
        // Corner cell only sees three positions
        let grid = grid_with(3, 3, &[(1, 0), (0, 1), (1, 1), (2, 2)]);
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 2, 0), 2);

        // Blinker on the left edge: column 3 would see births if columns wrapped
        let edge = grid_with(4, 4, &[(0, 0), (0, 1), (0, 2)]);
        let next = next_generation(&edge);
        assert_eq!(next.iter_alive().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn dimensions_are_preserved() {
        let grid = grid_with(7, 3, &[(6, 2)]);
        let next = next_generation(&grid);
        assert_eq!((next.width(), next.height()), (7, 3));
    }
}
