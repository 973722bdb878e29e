//! # grid_search
//!
//! Route finding on a rectangular grid of typed cells. A [Grid] is walled along its border and
//! holds one start and one goal cell; it can be searched with
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [greedy best-first](https://en.wikipedia.org/wiki/Best-first_search) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search. Movement is restricted to the
//! four axis-aligned neighbours and every step has unit cost.
//!
//! All four searches share one expansion loop (see [GridSolver::solve]) and differ only in how
//! the fringe is ordered. The grid clears its search bookkeeping after every call, so the same
//! instance can be searched again with another algorithm or after editing tiles.
//!
//! ```
//! use grid_search::{Grid, Tile};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_start(1, 1).unwrap();
//! grid.set_goal(3, 3).unwrap();
//! grid.set_cell(2, 2, Tile::Wall).unwrap();
//! let outcome = grid.astar_search();
//! assert_eq!(outcome.len(), 5);
//! ```
pub mod cell;
pub mod error;
pub mod fringe;
pub mod grid;
pub mod point;
pub mod solver;

pub use cell::{Cell, Tile};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use point::Point;
pub use solver::{Algorithm, GridSolver, SearchOutcome};

/// Chance for an interior cell to become a wall in [Grid::pepper_walls].
pub const WALL_PROBABILITY: f64 = 0.25;
/// Width of [Grid::default].
pub const DEFAULT_WIDTH: usize = 10;
/// Height of [Grid::default].
pub const DEFAULT_HEIGHT: usize = 10;
/// Seed for the start and goal placement of [Grid::default].
pub const DEFAULT_SEED: u64 = 0;
/// Smallest accepted width and height.
pub const MIN_DIMENSION: usize = 1;
/// Largest accepted width and height, so that every coordinate fits in an `i32`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;
