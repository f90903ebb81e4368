use crate::grid::{Grid, Path, Position};
use log::debug;
use rustc_hash::FxHashMap;

/// Lifecycle of a single search. `Found` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Expanding,
    Found,
    Exhausted,
}

/// Result of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Path,
    pub state: SearchState,
    /// Cells taken off the frontier and expanded.
    pub expanded: usize,
}

impl SearchOutcome {
    pub fn found(path: Path, expanded: usize) -> Self {
        SearchOutcome {
            path,
            state: SearchState::Found,
            expanded,
        }
    }

    pub fn exhausted(expanded: usize) -> Self {
        SearchOutcome {
            path: Path::empty(),
            state: SearchState::Exhausted,
            expanded,
        }
    }
}

pub trait PathfindingAlgorithm {
    /// Display name for reports.
    fn name(&self) -> &'static str;

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome;

    /// The path from `start` to `goal`, or an empty path if there is none.
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Path {
        self.search(grid, start, goal).path
    }
}

/// Both endpoints must be inside the grid and passable for a search to start.
pub fn endpoints_valid(grid: &Grid, start: Position, goal: Position) -> bool {
    if !grid.passable(start) {
        debug!("start {} is blocked or outside the grid", start);
        return false;
    }
    if !grid.passable(goal) {
        debug!("goal {} is blocked or outside the grid", goal);
        return false;
    }
    true
}

/// Walks the parent map back from `goal` to `start` and returns the path in
/// forward order.
pub fn reconstruct_path(
    parents: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Path {
    let mut positions = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                positions.push(parent);
                current = parent;
            }
            None => return Path::empty(),
        }
    }
    positions.reverse();
    Path::from(positions)
}
