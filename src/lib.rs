//! # grid_bfs
//!
//! A grid-based pathfinding system. Computes unweighted shortest paths with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! over the 4-connected neighborhood of an occupancy grid whose cells can be
//! blocked and freed on the fly or scattered at random. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_bfs::{Grid, Point};
//!
//! let mut grid = Grid::new(3, 3, false);
//! grid.add_obstacle(Point::new(1, 1));
//! let path = grid
//!     .find_path(Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod bfs;
pub mod cache;
pub mod generator;
pub mod grid;
pub mod point;

pub use bfs::UNREACHABLE;
pub use cache::PathCache;
pub use grid::Grid;
pub use point::{Point, CARDINAL_DIRECTIONS};
