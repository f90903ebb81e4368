use crate::grid::{Grid, Path, Position};

pub const PATH_CHAR: char = 'X';
pub const PASSABLE_CHAR: char = '.';
pub const BLOCKED_CHAR: char = '#';

/// Draws the grid one row per line with space-separated cells: `X` on the
/// path, `.` for open cells, `#` for walls.
pub fn render_path(grid: &Grid, path: &Path) -> String {
    let on_path = path.to_set();
    let (height, width) = grid.dimensions();

    let mut out = String::with_capacity(height * width * 2);
    for row in 0..height {
        for col in 0..width {
            let pos = Position { row, col };
            let c = if on_path.contains(&pos) {
                PATH_CHAR
            } else if grid.passable(pos) {
                PASSABLE_CHAR
            } else {
                BLOCKED_CHAR
            };
            if col > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Bfs, PathfindingAlgorithm};
    use crate::mazes::{create_maze, MazePreset};

    #[test]
    fn renders_simple_solution() {
        let grid = create_maze(MazePreset::Simple).unwrap();
        let path = Bfs.find_path(&grid, Position::new(0, 0), Position::new(5, 5));
        let expected = "\
X . . . # .
X # # . # .
X # . # . .
X . . # . .
X # # # # .
X X X X X X
";
        assert_eq!(render_path(&grid, &path), expected);
    }

    #[test]
    fn empty_path_shows_only_the_maze() {
        let grid = Grid::from_rows(&[[1u8, 0]]).unwrap();
        assert_eq!(render_path(&grid, &Path::empty()), ". #\n");
    }
}
