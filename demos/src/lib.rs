//! Shared driver code for the gridbfs demo binary.
//!
//! Holds the built-in map data and the [`run`] routine that builds a grid,
//! times one pathfinding request and collects the console report.

use std::fmt;
use std::time::{Duration, Instant};

use gridbfs_core::Point;
use gridbfs_paths::{Grid, Map, PathOutcome, PathResult, Pathfinder};

pub const MAP_WIDTH: i32 = 12;
pub const MAP_HEIGHT: i32 = 8;

/// Built-in demo map, row-major: `0` obstacle, `1` traversable.
#[rustfmt::skip]
pub const MAP_DATA: [u8; (MAP_WIDTH * MAP_HEIGHT) as usize] = [
    1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1,
    1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1,
    1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1,
    1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1,
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1,
];

pub const START: Point = Point::new(0, 0);
pub const TARGET: Point = Point::new(2, 2);

/// Inputs for one pathfinding run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<u8>,
    pub start: Point,
    pub target: Point,
}

impl Scenario {
    /// The built-in map with its fixed start and target.
    pub fn builtin() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            cells: MAP_DATA.to_vec(),
            start: START,
            target: TARGET,
        }
    }
}

/// What the demo prints.
#[derive(Debug, Clone)]
pub struct Report {
    /// Distance field snapshot taken after the search.
    pub field: String,
    pub outcome: PathOutcome,
    pub points: Vec<Point>,
    pub elapsed: Duration,
}

/// Validate the scenario, run one search and collect the report.
///
/// The timing covers grid construction and the search itself, not rendering.
pub fn run(scenario: &Scenario) -> PathResult<Report> {
    let map = Map::new(scenario.width, scenario.height, scenario.cells.clone())?;
    log::info!(
        "searching {}x{} map from {} to {}",
        map.width(),
        map.height(),
        scenario.start,
        scenario.target
    );

    let started = Instant::now();
    let mut grid = Grid::new(&map);
    let outcome = Pathfinder::new().find_path(&mut grid, scenario.start, scenario.target)?;
    let elapsed = started.elapsed();

    Ok(Report {
        field: grid.render(),
        points: outcome.points(&grid),
        outcome,
        elapsed,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.field)?;
        if self.outcome.reachable {
            writeln!(f, "Target is reachable")?;
            let steps: Vec<String> = self.points.iter().map(Point::to_string).collect();
            writeln!(f, "Path ({} steps): {}", steps.len(), steps.join(" "))?;
        } else {
            writeln!(f, "Target is unreachable")?;
        }
        writeln!(f, "Time taken: {:.6} ms", self.elapsed.as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbfs_paths::PathError;

    #[test]
    fn builtin_scenario_is_reachable() {
        let report = run(&Scenario::builtin()).unwrap();
        assert!(report.outcome.reachable);
        // Along the top row, then down the short corridor at x = 3.
        assert_eq!(
            report.points,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(3, 1),
                Point::new(3, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(report.field.lines().count(), MAP_HEIGHT as usize);
    }

    #[test]
    fn report_lists_verdict_and_timing() {
        let text = run(&Scenario::builtin()).unwrap().to_string();
        assert!(text.contains("Target is reachable\n"));
        assert!(text.contains("Time taken: "));
        assert!(text.starts_with('|'));
    }

    #[test]
    fn unreachable_report() {
        let scenario = Scenario {
            width: 3,
            height: 3,
            cells: vec![1, 1, 1, 0, 0, 0, 1, 1, 1],
            start: Point::new(0, 0),
            target: Point::new(0, 2),
        };
        let report = run(&scenario).unwrap();
        assert!(!report.outcome.reachable);
        let text = report.to_string();
        assert!(text.contains("Target is unreachable\n"));
        assert!(!text.contains("Path"));
        assert!(text.starts_with("| -- | -- | -- |\n| xx | xx | xx |\n|  0 |  1 |  2 |\n"));
    }

    #[test]
    fn bad_map_length_fails_before_search() {
        let scenario = Scenario {
            width: 4,
            height: 4,
            cells: vec![1; 15],
            start: Point::new(0, 0),
            target: Point::new(1, 1),
        };
        assert!(matches!(run(&scenario), Err(PathError::InvalidMap { .. })));
    }
}
