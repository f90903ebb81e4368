use crate::algorithms::common::{endpoints_valid, PathfindingAlgorithm, SearchOutcome};
use crate::grid::{Grid, Path, Position};
use pathfinding::prelude::astar;

/// A* over the maze using the `pathfinding` crate. Every move costs 1, so
/// the result is a shortest path, though ties may resolve differently from
/// BFS.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome {
        if !endpoints_valid(grid, start, goal) {
            return SearchOutcome::exhausted(0);
        }

        let mut expanded = 0;
        let result = astar(
            &start,
            |p| {
                expanded += 1;
                grid.neighbors(*p)
                    .map(|successor| (successor, 1usize))
                    .collect::<Vec<_>>()
            },
            // Manhattan distance never overestimates on a 4-connected grid.
            |p| p.distance(&goal),
            |p| *p == goal,
        );

        match result {
            Some((path, _cost)) => SearchOutcome::found(Path::from(path), expanded),
            None => SearchOutcome::exhausted(expanded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::SearchState;
    use crate::mazes::{create_maze, MazePreset};

    #[test]
    fn matches_bfs_length_on_simple_maze() {
        let grid = create_maze(MazePreset::Simple).unwrap();
        let path = AStar.find_path(&grid, Position::new(0, 0), Position::new(5, 5));
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn blocked_goal_is_exhausted() {
        let grid = create_maze(MazePreset::Simple).unwrap();
        let outcome = AStar.search(&grid, Position::new(0, 0), Position::new(1, 1));
        assert_eq!(outcome.state, SearchState::Exhausted);
        assert_eq!(outcome.expanded, 0);
    }
}
