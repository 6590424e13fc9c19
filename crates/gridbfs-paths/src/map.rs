//! The immutable obstacle [`Map`] a grid is built from.

use gridbfs_core::{Point, Range};

use crate::error::{PathError, PathResult};

/// Map value for an obstacle.
pub const OBSTACLE: u8 = 0;
/// Map value for a traversable cell.
pub const OPEN: u8 = 1;

/// A rectangular 0/1 map: `0` is an obstacle, `1` is traversable.
///
/// Cells are stored row-major, so the value for `(x, y)` lives at
/// `x + y * width`. A `Map` can only be built through [`Map::new`] (or the
/// helpers that call it), so its length always matches its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMap"))]
pub struct Map {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Map {
    /// Create a map, checking dimensions and values.
    ///
    /// Fails with [`PathError::InvalidMap`] if either dimension is not
    /// positive or `cells.len() != width * height`, and with
    /// [`PathError::InvalidMapValue`] if a value is neither 0 nor 1.
    pub fn new(width: i32, height: i32, cells: Vec<u8>) -> PathResult<Self> {
        let invalid = PathError::InvalidMap {
            width,
            height,
            len: cells.len(),
        };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        if (width as usize).checked_mul(height as usize) != Some(cells.len()) {
            return Err(invalid);
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != OBSTACLE && v != OPEN)
        {
            return Err(PathError::InvalidMapValue { index, value });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A map with no obstacles.
    pub fn open(width: i32, height: i32) -> PathResult<Self> {
        let len = if width > 0 && height > 0 {
            width as usize * height as usize
        } else {
            0
        };
        Self::new(width, height, vec![OPEN; len])
    }

    /// Parse a text picture of a map, one row per line.
    ///
    /// `#` marks an obstacle and `.` a traversable cell. Blank lines are
    /// ignored and trailing whitespace is trimmed.
    pub fn from_ascii(text: &str) -> PathResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(PathError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let value = match ch {
                    '#' => OBSTACLE,
                    '.' => OPEN,
                    _ => {
                        return Err(PathError::InvalidGlyph {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(value);
            }
        }

        Self::new(width as i32, rows.len() as i32, cells)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The map rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Raw row-major values.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Whether `p` is in bounds and not an obstacle.
    pub fn is_open(&self, p: Point) -> bool {
        self.range()
            .index(p)
            .is_some_and(|i| self.cells[i] == OPEN)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMap {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMap> for Map {
    type Error = PathError;

    fn try_from(raw: RawMap) -> PathResult<Self> {
        Map::new(raw.width, raw.height, raw.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_matching_length() {
        let m = Map::new(3, 2, vec![1, 0, 1, 1, 1, 0]).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert!(m.is_open(Point::new(0, 0)));
        assert!(!m.is_open(Point::new(1, 0)));
        assert!(!m.is_open(Point::new(2, 1)));
        assert!(!m.is_open(Point::new(3, 0)));
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = Map::new(3, 3, vec![1; 8]).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidMap {
                width: 3,
                height: 3,
                len: 8
            }
        );
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert!(matches!(
            Map::new(0, 3, vec![]),
            Err(PathError::InvalidMap { .. })
        ));
        assert!(matches!(
            Map::new(-2, -2, vec![1; 4]),
            Err(PathError::InvalidMap { .. })
        ));
        assert!(matches!(Map::open(4, 0), Err(PathError::InvalidMap { .. })));
    }

    #[test]
    fn new_rejects_values_other_than_zero_or_one() {
        let err = Map::new(2, 2, vec![1, 1, 2, 1]).unwrap_err();
        assert_eq!(err, PathError::InvalidMapValue { index: 2, value: 2 });
    }

    #[test]
    fn from_ascii_parses_rows() {
        let m = Map::from_ascii("...#\n.#..\n").unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 2);
        assert_eq!(m.cells(), &[1, 1, 1, 0, 1, 0, 1, 1]);
    }

    #[test]
    fn from_ascii_rejects_ragged_rows() {
        let err = Map::from_ascii("...\n..\n").unwrap_err();
        assert_eq!(
            err,
            PathError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn from_ascii_rejects_unknown_glyph() {
        let err = Map::from_ascii("..\n.x\n").unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidGlyph {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn from_ascii_empty_is_invalid() {
        assert!(matches!(
            Map::from_ascii("\n\n"),
            Err(PathError::InvalidMap { .. })
        ));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_round_trip() {
        let m = Map::from_ascii(".#\n..\n").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Map = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn deserialize_validates_length() {
        let json = r#"{"width":2,"height":2,"cells":[1,1,1]}"#;
        assert!(serde_json::from_str::<Map>(json).is_err());
    }
}
