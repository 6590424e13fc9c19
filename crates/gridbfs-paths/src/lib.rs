//! Breadth-first shortest paths on 4-connected grids with obstacles.
//!
//! A [`Map`] of 0/1 values is turned into a [`Grid`] whose cells carry a
//! [`Distance`]. [`Pathfinder`] floods that grid backwards from the target
//! with BFS, then walks the resulting distance field down from the start:
//!
//! ```
//! use gridbfs_core::Point;
//! use gridbfs_paths::{Map, find_path};
//!
//! let map = Map::from_ascii("...\n.#.\n...\n").unwrap();
//! let out = find_path(Point::new(0, 0), Point::new(2, 2), &map).unwrap();
//! assert!(out.reachable);
//! assert_eq!(out.path, vec![1, 2, 5, 8]);
//! ```
//!
//! Neighbours are always visited left, right, up, down; where several
//! shortest paths exist, that order decides which one is returned.

mod bfs;
mod cell;
mod error;
mod grid;
mod map;
mod path;
mod traits;

pub use bfs::Pathfinder;
pub use cell::{Cell, Distance};
pub use error::{PathError, PathResult};
pub use grid::Grid;
pub use map::{Map, OBSTACLE, OPEN};
pub use path::PathOutcome;
pub use traits::Pather;

use gridbfs_core::Point;

/// Find a shortest path from `start` to `target` on `map`.
///
/// Convenience wrapper building a fresh [`Grid`] and [`Pathfinder`]. Use
/// them directly to inspect or [render](Grid::render) the distance field.
pub fn find_path(start: Point, target: Point, map: &Map) -> PathResult<PathOutcome> {
    let mut grid = Grid::new(map);
    Pathfinder::new().find_path(&mut grid, start, target)
}
