use crate::error::MazeError;
use rustc_hash::FxHashSet;
use std::fmt;

/// Orthogonal moves in expansion order: up, down, left, right, read
/// geometrically on (row, col). Row moves come before column moves, unlike
/// a column-first reading of the same labels.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance in orthogonal steps.
    pub fn distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the two positions differ by one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance(other) == 1
    }

    fn offset(&self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Passable,
    Blocked,
}

/// Immutable, bounds-checked passability map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from literal 0/1 rows, where 1 is passable and 0 is blocked.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = match value {
                    0 => Cell::Blocked,
                    1 => Cell::Passable,
                    _ => return Err(MazeError::InvalidCell { row, col, value }),
                };
                cells.push(cell);
            }
        }

        Ok(Grid {
            height,
            width,
            cells,
        })
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// The cell at `pos`, or `None` if it lies outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    /// Out-of-grid positions are never passable.
    pub fn passable(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Passable)
    }

    /// Passable orthogonal neighbors of `pos`, in up, down, left, right order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(move |&next| self.passable(next))
    }

    /// All passable positions in row-major order.
    pub fn passable_positions(&self) -> Vec<Position> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Position { row, col }))
            .filter(|&pos| self.passable(pos))
            .collect()
    }
}

/// An ordered walk of adjacent passable positions from a start to an end.
/// Empty means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn empty() -> Self {
        Path(Vec::new())
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Number of moves, one fewer than the number of positions.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    pub fn to_set(&self) -> FxHashSet<Position> {
        self.0.iter().copied().collect()
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Path(positions)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Grid {
        Grid::from_rows(&[[1u8, 1, 0], [0, 1, 1]]).unwrap()
    }

    #[test]
    fn dimensions_and_passability() {
        let grid = small();
        assert_eq!(grid.dimensions(), (2, 3));
        assert!(grid.passable(Position::new(0, 0)));
        assert!(!grid.passable(Position::new(0, 2)));
        assert!(!grid.passable(Position::new(2, 0)));
        assert!(!grid.passable(Position::new(0, 3)));
        assert_eq!(grid.cell(Position::new(5, 5)), None);
    }

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let grid = Grid::from_rows(&[[1u8, 1, 1], [1, 1, 1], [1, 1, 1]]).unwrap();
        let found: Vec<_> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            found,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_skip_edges_and_blocked_cells() {
        let grid = small();
        let found: Vec<_> = grid.neighbors(Position::new(0, 1)).collect();
        assert_eq!(found, vec![Position::new(1, 1), Position::new(0, 0)]);
    }

    #[test]
    fn rejects_malformed_rows() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(MazeError::EmptyGrid));

        let ragged: [&[u8]; 2] = [&[1, 1], &[1]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        assert_eq!(
            Grid::from_rows(&[[1u8, 2]]),
            Err(MazeError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
    }

    #[test]
    fn passable_positions_are_row_major() {
        assert_eq!(
            small().passable_positions(),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn path_steps() {
        assert_eq!(Path::empty().steps(), 0);
        let path = Path::from(vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(path.steps(), 1);
        assert_eq!(path.first(), Some(Position::new(0, 0)));
        assert_eq!(path.last(), Some(Position::new(0, 1)));
    }
}
