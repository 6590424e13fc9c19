//! Per-cell distance state.

use std::fmt;

use gridbfs_core::Point;

/// BFS distance state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    /// Traversable but not reached (yet).
    #[default]
    Unvisited,
    /// Obstacle. Never receives a distance.
    Blocked,
    /// Hop count to the search target.
    Steps(u32),
}

impl Distance {
    /// The hop count, if the cell has been reached.
    #[inline]
    pub const fn steps(self) -> Option<u32> {
        match self {
            Self::Steps(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    #[inline]
    pub const fn is_unvisited(self) -> bool {
        matches!(self, Self::Unvisited)
    }
}

impl fmt::Display for Distance {
    /// Three-character field: right-aligned steps, `xx` for obstacles and
    /// `--` for cells the search never reached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(n) => write!(f, "{n:3}"),
            Self::Blocked => f.write_str(" xx"),
            Self::Unvisited => f.write_str(" --"),
        }
    }
}

/// A grid cell: its position and current distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub distance: Distance,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, distance: Distance) -> Self {
        Self { pos, distance }
    }
}
