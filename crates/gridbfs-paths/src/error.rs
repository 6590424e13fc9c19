//! Pathfinding error type.

use thiserror::Error;

use gridbfs_core::Point;

/// Input errors that abort a pathfinding request.
///
/// An unreachable target is not an error; it is reported through
/// [`PathOutcome::reachable`](crate::PathOutcome::reachable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid map: {len} cells do not fill a {width}x{height} grid")]
    InvalidMap { width: i32, height: i32, len: usize },

    #[error("invalid map value {value} at index {index} (expected 0 or 1)")]
    InvalidMapValue { index: usize, value: u8 },

    #[error("map row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid map glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },

    #[error("coordinate {0} is outside the grid")]
    InvalidCoordinate(Point),

    #[error("endpoint {0} is an obstacle")]
    BlockedEndpoint(Point),
}

pub type PathResult<T> = Result<T, PathError>;
