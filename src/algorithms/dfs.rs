use crate::algorithms::common::{
    endpoints_valid, reconstruct_path, PathfindingAlgorithm, SearchOutcome, SearchState,
};
use crate::grid::{Grid, Path, Position};
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search. Finds a path whenever one exists, but not necessarily
/// a shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self {
        Dfs
    }
}

impl PathfindingAlgorithm for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome {
        DfsSearch::new(grid, start, goal).run()
    }
}

/// A single depth-first search over an explicit stack.
///
/// Stack entries carry the position that pushed them, and a position is only
/// marked visited (and given its parent) when it is popped. That keeps the
/// exploration deepest-first: the most recently discovered branch is always
/// followed before its siblings.
pub struct DfsSearch<'g> {
    grid: &'g Grid,
    start: Position,
    goal: Position,
    stack: Vec<(Position, Option<Position>)>,
    visited: FxHashSet<Position>,
    parents: FxHashMap<Position, Position>,
    state: SearchState,
    expanded: usize,
    path: Path,
}

impl<'g> DfsSearch<'g> {
    pub fn new(grid: &'g Grid, start: Position, goal: Position) -> Self {
        let mut stack = Vec::new();
        if endpoints_valid(grid, start, goal) {
            stack.push((start, None));
        }

        DfsSearch {
            grid,
            start,
            goal,
            stack,
            visited: FxHashSet::default(),
            parents: FxHashMap::default(),
            state: SearchState::Initialized,
            expanded: 0,
            path: Path::empty(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Pops one entry and either finishes, skips it, or expands it.
    pub fn step(&mut self) -> SearchState {
        if matches!(self.state, SearchState::Found | SearchState::Exhausted) {
            return self.state;
        }

        let Some((current, parent)) = self.stack.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.state = SearchState::Expanding;

        if !self.visited.insert(current) {
            return self.state;
        }
        if let Some(parent) = parent {
            self.parents.insert(current, parent);
        }

        if current == self.goal {
            self.path = reconstruct_path(&self.parents, self.start, self.goal);
            self.state = SearchState::Found;
            return self.state;
        }

        self.expanded += 1;
        // Pushed in reverse so the first direction (up) is popped first.
        let grid = self.grid;
        let unvisited: Vec<Position> = grid
            .neighbors(current)
            .filter(|next| !self.visited.contains(next))
            .collect();
        for next in unvisited.into_iter().rev() {
            self.stack.push((next, Some(current)));
        }
        self.state
    }

    pub fn run(mut self) -> SearchOutcome {
        loop {
            match self.step() {
                SearchState::Found => return SearchOutcome::found(self.path, self.expanded),
                SearchState::Exhausted => return SearchOutcome::exhausted(self.expanded),
                SearchState::Initialized | SearchState::Expanding => {}
            }
        }
    }
}
