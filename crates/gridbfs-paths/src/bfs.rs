use std::collections::VecDeque;

use gridbfs_core::Point;

use crate::cell::Distance;
use crate::error::{PathError, PathResult};
use crate::grid::Grid;
use crate::path::PathOutcome;
use crate::traits::Pather;

/// Breadth-first search engine.
///
/// Owns the frontier queue and neighbour scratch buffer so that repeated
/// queries reuse their allocations. The distance field itself lives in the
/// [`Grid`] passed to each call, which stays inspectable afterwards.
#[derive(Debug, Default)]
pub struct Pathfinder {
    queue: VecDeque<usize>,
    nbuf: Vec<Point>,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Find a shortest path from `start` to `target`.
    ///
    /// Runs a backward BFS from `target` that stops as soon as `start`
    /// receives a distance, then walks the distance field down from `start`.
    /// The returned path excludes `start` and ends with `target`.
    ///
    /// Any previous distance field in `grid` is cleared first.
    pub fn find_path(
        &mut self,
        grid: &mut Grid,
        start: Point,
        target: Point,
    ) -> PathResult<PathOutcome> {
        let si = grid.index_of(start)?;
        let ti = grid.index_of(target)?;
        for (i, p) in [(si, start), (ti, target)] {
            if grid.distance(i).is_blocked() {
                return Err(PathError::BlockedEndpoint(p));
            }
        }

        grid.reset();
        self.flood(grid, ti, Some(si));

        if grid.distance(si).is_unvisited() {
            log::debug!("bfs: {target} not reachable from {start}");
            return Ok(PathOutcome::unreachable());
        }

        let path = self.descend(grid, si);
        log::debug!("bfs: {start} -> {target} in {} steps", path.len());
        Ok(PathOutcome::reached(path))
    }

    /// Compute the full distance field to `target`, without early exit.
    ///
    /// Returns the number of cells reached, `target` included.
    pub fn distance_map(&mut self, grid: &mut Grid, target: Point) -> PathResult<usize> {
        let ti = grid.index_of(target)?;
        if grid.distance(ti).is_blocked() {
            return Err(PathError::BlockedEndpoint(target));
        }
        grid.reset();
        Ok(self.flood(grid, ti, None))
    }

    /// Backward BFS from `target`. Each cell is queued at most once, on its
    /// `Unvisited -> Steps` transition. Stops early once `stop_at` is reached.
    fn flood(&mut self, grid: &mut Grid, target: usize, stop_at: Option<usize>) -> usize {
        self.queue.clear();
        grid.set_distance(target, Distance::Steps(0));
        self.queue.push_back(target);
        let mut reached = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            if let Some(si) = stop_at {
                if !grid.distance(si).is_unvisited() {
                    log::trace!("bfs: early exit with {} queued", self.queue.len() + 1);
                    break;
                }
            }
            let Distance::Steps(cd) = grid.distance(ci) else {
                continue;
            };
            let Some(cp) = grid.point_of(ci) else {
                continue;
            };

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.rng.index(np) else {
                    continue;
                };
                if !grid.distance(ni).is_unvisited() {
                    continue;
                }
                grid.set_distance(ni, Distance::Steps(cd + 1));
                self.queue.push_back(ni);
                reached += 1;
            }
        }

        self.nbuf = nbuf;
        log::trace!("bfs: reached {reached} cells");
        reached
    }

    /// Greedy descent of the distance field from `from` to the `Steps(0)`
    /// cell, taking the first neighbour (left, right, up, down) that is
    /// strictly closer.
    fn descend(&mut self, grid: &Grid, from: usize) -> Vec<usize> {
        let mut cur = from;
        let mut path = Vec::with_capacity(grid.distance(from).steps().unwrap_or(0) as usize);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Distance::Steps(d) = grid.distance(cur) {
            if d == 0 {
                break;
            }
            let Some(cp) = grid.point_of(cur) else {
                break;
            };
            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);
            let next = nbuf
                .iter()
                .filter_map(|&np| grid.rng.index(np))
                .find(|&ni| grid.distance(ni).steps().is_some_and(|nd| nd < d));
            // A reached cell with d > 0 always has a neighbour at d - 1.
            let Some(ni) = next else {
                break;
            };
            path.push(ni);
            cur = ni;
        }

        self.nbuf = nbuf;
        path
    }
}
