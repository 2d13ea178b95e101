// patterns.rs - Well-known seed patterns
//
// Cells are (row, col) offsets from the pattern's top-left corner.

use crate::error::{Error, Result};
use crate::grid::Grid;

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Like [`find`], but unknown names are an error.
pub fn lookup(name: &str) -> Result<&'static Pattern> {
    find(name).ok_or_else(|| Error::UnknownPattern(name.to_string()))
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// An all-dead `rows x cols` grid with this pattern in the middle.
    pub fn centered_in(&self, rows: usize, cols: usize) -> Result<Grid> {
        let (height, width) = (self.height(), self.width());
        if height > rows || width > cols {
            return Err(Error::PatternTooLarge {
                name: self.name,
                height,
                width,
                rows,
                cols,
            });
        }

        let (top, left) = ((rows - height) / 2, (cols - width) / 2);
        let cells: Vec<_> = self.cells.iter().map(|&(row, col)| (top + row, left + col)).collect();
        Grid::from_alive(rows, cols, &cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents() {
        let gun = find("Gosper Glider Gun").unwrap();
        assert_eq!((gun.height(), gun.width()), (9, 36));
        assert_eq!(gun.cells.len(), 36);

        let pulsar = find("pulsar").unwrap();
        assert_eq!((pulsar.height(), pulsar.width()), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
    }

    #[test]
    fn test_centered_in() {
        let blinker = find("BLINKER").unwrap();
        let grid = blinker.centered_in(5, 5).unwrap();
        assert!(grid.is_alive(2, 1) && grid.is_alive(2, 2) && grid.is_alive(2, 3));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_too_large() {
        let beacon = find("beacon").unwrap();
        assert!(beacon.centered_in(4, 4).is_ok());
        assert!(matches!(
            beacon.centered_in(3, 10),
            Err(Error::PatternTooLarge { name: "Beacon", height: 4, width: 4, .. })
        ));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(matches!(lookup("spaceship"), Err(Error::UnknownPattern(name)) if name == "spaceship"));
    }
}
