//! The [`Grid`]: flat cell storage holding a BFS distance field.
//!
//! Cells live in one contiguous `Vec` indexed by `x + y * width`. Neighbours
//! are handed out as positions rather than references, so the distance field
//! can be updated while neighbours are being visited.

use std::fmt;

use gridbfs_core::{Point, Range};

use crate::cell::{Cell, Distance};
use crate::error::{PathError, PathResult};
use crate::map::{Map, OBSTACLE};
use crate::traits::Pather;

/// A rectangular grid of [`Cell`]s built from a [`Map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) rng: Range,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Build one cell per map entry: obstacles become [`Distance::Blocked`],
    /// everything else [`Distance::Unvisited`].
    pub fn new(map: &Map) -> Self {
        let rng = map.range();
        let cells = rng
            .iter()
            .zip(map.cells())
            .map(|(pos, &v)| {
                let distance = if v == OBSTACLE {
                    Distance::Blocked
                } else {
                    Distance::Unvisited
                };
                Cell::new(pos, distance)
            })
            .collect();
        Self { rng, cells }
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Linear index (`x + y * width`) of `p`.
    pub fn index_of(&self, p: Point) -> PathResult<usize> {
        self.rng.index(p).ok_or(PathError::InvalidCoordinate(p))
    }

    /// Position of the cell at linear index `idx`.
    #[inline]
    pub fn point_of(&self, idx: usize) -> Option<Point> {
        self.rng.point(idx)
    }

    pub fn cell_at(&self, p: Point) -> PathResult<&Cell> {
        let i = self.index_of(p)?;
        Ok(&self.cells[i])
    }

    pub fn cell_at_mut(&mut self, p: Point) -> PathResult<&mut Cell> {
        let i = self.index_of(p)?;
        Ok(&mut self.cells[i])
    }

    /// Distance currently stored at `p`.
    pub fn distance_at(&self, p: Point) -> PathResult<Distance> {
        self.cell_at(p).map(|c| c.distance)
    }

    /// Forget any distance field, keeping obstacles.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.distance.is_blocked() {
                c.distance = Distance::Unvisited;
            }
        }
    }

    /// Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub(crate) fn distance(&self, idx: usize) -> Distance {
        self.cells[idx].distance
    }

    #[inline]
    pub(crate) fn set_distance(&mut self, idx: usize, d: Distance) {
        self.cells[idx].distance = d;
    }
}

impl Pather for Grid {
    /// In-bounds, non-blocked neighbours in left, right, up, down order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.cardinal() {
            let Some(i) = self.rng.index(n) else {
                continue;
            };
            if !self.cells[i].distance.is_blocked() {
                buf.push(n);
            }
        }
    }
}

/// Text snapshot of the distance field, one line per row.
///
/// Every cell is written as its [`Distance`] field followed by ` |`, after a
/// leading `|`, e.g. `|  2 | xx |  0 |`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(0) as usize;
        if w == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(w) {
            f.write_str("|")?;
            for c in row {
                write!(f, "{} |", c.distance)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
