use gridbfs_core::Point;

use crate::grid::Grid;

/// Result of a pathfinding request.
///
/// `path` holds linear cell indices from the cell after the start up to and
/// including the target. It is empty when the target is unreachable, and
/// also when start and target coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathOutcome {
    pub reachable: bool,
    pub path: Vec<usize>,
}

impl PathOutcome {
    pub(crate) fn reached(path: Vec<usize>) -> Self {
        Self {
            reachable: true,
            path,
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self::default()
    }

    /// Number of steps from start to target.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The path as positions on `grid`.
    pub fn points(&self, grid: &Grid) -> Vec<Point> {
        self.path.iter().filter_map(|&i| grid.point_of(i)).collect()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let out = PathOutcome::reached(vec![1, 2, 5]);
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"{"reachable":true,"path":[1,2,5]}"#);
        let back: PathOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
    }
}
