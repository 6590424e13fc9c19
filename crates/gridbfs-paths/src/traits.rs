use gridbfs_core::Point;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append the passable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// The push order is significant: searches that break ties take the
    /// first qualifying neighbour.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
