//! **gridbfs-core**: geometry primitives shared by the *gridbfs* crates.
//!
//! Provides [`Point`], the half-open rectangle [`Range`] and the row-major
//! linear-index conversion used for flat cell storage.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
