use std::fmt;

/// Structural problems with maze data or endpoint selection.
///
/// A search that finds no route is not an error; it yields an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    EmptyGrid,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidCell {
        row: usize,
        col: usize,
        value: u8,
    },
    NotEnoughPassableCells {
        found: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::EmptyGrid => write!(f, "maze has no rows or no columns"),
            MazeError::RaggedRow { row, expected, found } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            MazeError::InvalidCell { row, col, value } => write!(
                f,
                "cell ({}, {}) has value {}, expected 0 (blocked) or 1 (passable)",
                row, col, value
            ),
            MazeError::NotEnoughPassableCells { found } => write!(
                f,
                "need at least 2 passable cells to pick distinct endpoints, found {}",
                found
            ),
        }
    }
}

impl std::error::Error for MazeError {}
