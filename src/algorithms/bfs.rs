use crate::algorithms::common::{
    endpoints_valid, reconstruct_path, PathfindingAlgorithm, SearchOutcome, SearchState,
};
use crate::grid::{Grid, Path, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Breadth-first search. Returns a shortest path by step count, with ties
/// broken by the up, down, left, right expansion order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome {
        BfsSearch::new(grid, start, goal).run()
    }
}

/// A single breadth-first search that can be advanced one dequeue at a time.
///
/// Cells are marked visited when they are first discovered, so each one is
/// enqueued and expanded at most once.
pub struct BfsSearch<'g> {
    grid: &'g Grid,
    start: Position,
    goal: Position,
    queue: VecDeque<Position>,
    visited: FxHashSet<Position>,
    parents: FxHashMap<Position, Position>,
    state: SearchState,
    expanded: usize,
    path: Path,
}

impl<'g> BfsSearch<'g> {
    pub fn new(grid: &'g Grid, start: Position, goal: Position) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();
        // Invalid endpoints leave the frontier empty; the first step exhausts it.
        if endpoints_valid(grid, start, goal) {
            visited.insert(start);
            queue.push_back(start);
        }

        BfsSearch {
            grid,
            start,
            goal,
            queue,
            visited,
            parents: FxHashMap::default(),
            state: SearchState::Initialized,
            expanded: 0,
            path: Path::empty(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Dequeues one position and either finishes or expands it.
    pub fn step(&mut self) -> SearchState {
        if matches!(self.state, SearchState::Found | SearchState::Exhausted) {
            return self.state;
        }

        let Some(current) = self.queue.pop_front() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.state = SearchState::Expanding;

        if current == self.goal {
            self.path = reconstruct_path(&self.parents, self.start, self.goal);
            self.state = SearchState::Found;
            return self.state;
        }

        self.expanded += 1;
        let grid = self.grid;
        for next in grid.neighbors(current) {
            if self.visited.insert(next) {
                self.parents.insert(next, current);
                self.queue.push_back(next);
            }
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
