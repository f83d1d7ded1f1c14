use glam::Vec2;

use super::level::LevelError;

/// Static tile grid of one level.
///
/// `0` is open floor, any other code `N` is a wall drawn with texture `N - 1`.
/// Cells are stored row-major: `cells[y * width + x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl GridMap {
    /// Build a grid from rows of decimal digits, one string per `y`.
    ///
    /// The outer border must be wall-coded so every ray is guaranteed to
    /// hit something.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LevelError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width < 3 || height < 3 {
            return Err(LevelError::TooSmall { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::Ragged {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let code = ch
                    .to_digit(10)
                    .ok_or(LevelError::BadCell { x, y, ch })?;
                cells.push(code as u8);
            }
        }

        let grid = Self {
            width,
            height,
            cells,
        };
        grid.check_sealed()?;
        Ok(grid)
    }

    fn check_sealed(&self) -> Result<(), LevelError> {
        for x in 0..self.width {
            for y in [0, self.height - 1] {
                if self.get(x as i32, y as i32) == 0 {
                    return Err(LevelError::UnsealedBorder { x, y });
                }
            }
        }
        for y in 0..self.height {
            for x in [0, self.width - 1] {
                if self.get(x as i32, y as i32) == 0 {
                    return Err(LevelError::UnsealedBorder { x, y });
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell code at `(x, y)`.  Anything outside the grid reads as solid.
    #[inline(always)]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return 1;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// True when the cell containing world point `p` is open floor.
    #[inline]
    pub fn is_open(&self, p: Vec2) -> bool {
        self.get(p.x.floor() as i32, p.y.floor() as i32) == 0
    }

    /// Largest wall code used anywhere in the grid.
    pub fn max_code(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const ROOM: [&str; 4] = ["3333", "3001", "3021", "3333"];

    #[test]
    fn parses_rows_and_indexes_by_xy() {
        let g = GridMap::from_rows(&ROOM).unwrap();
        assert_eq!((g.width(), g.height()), (4, 4));
        assert_eq!(g.get(3, 1), 1);
        assert_eq!(g.get(2, 2), 2);
        assert_eq!(g.get(1, 1), 0);
        assert_eq!(g.max_code(), 3);
    }

    #[test]
    fn outside_reads_as_wall() {
        let g = GridMap::from_rows(&ROOM).unwrap();
        assert_ne!(g.get(-1, 0), 0);
        assert_ne!(g.get(0, 99), 0);
        assert!(!g.is_open(vec2(-0.5, 1.5)));
        assert!(g.is_open(vec2(1.5, 1.5)));
    }

    #[test]
    fn unsealed_border_rejected() {
        let err = GridMap::from_rows(&["3333", "0001", "3001", "3333"]).unwrap_err();
        assert_eq!(err, LevelError::UnsealedBorder { x: 0, y: 1 });
    }

    #[test]
    fn ragged_and_garbage_rejected() {
        assert!(matches!(
            GridMap::from_rows(&["333", "30", "333"]),
            Err(LevelError::Ragged { row: 1, .. })
        ));
        assert!(matches!(
            GridMap::from_rows(&["333", "3x3", "333"]),
            Err(LevelError::BadCell { ch: 'x', .. })
        ));
    }
}
