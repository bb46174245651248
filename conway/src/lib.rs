//! Conway's Game of Life on a bounded grid.
//!
//! - `grid`: fixed-size cell storage with bounds-checked access
//! - `rules`: neighbor counting and generation update
//! - `patterns`: named seed configurations and a seeded random fill
//!
//! ```rust
//! use conway::{next_generation, Cell, Grid};
//!
//! let mut grid = Grid::new(5, 5);
//! for x in 1..4 {
//!     grid.set(x, 2, Cell::Alive).unwrap();
//! }
//! let next = next_generation(&grid);
//! assert_eq!(next.get(2, 1).unwrap(), Cell::Alive);
//! assert_eq!(next_generation(&next), grid);
//! ```

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use error::GridError;
pub use grid::{Cell, Grid};
pub use patterns::{Pattern, PATTERNS};
pub use rules::next_generation;
