pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

use clap::ValueEnum;

pub use a_star::AStar;
pub use bfs::Bfs;
pub use common::{PathfindingAlgorithm, SearchOutcome, SearchState};
pub use dfs::Dfs;

/// Which algorithms a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bfs,
    Dfs,
    #[value(name = "a_star")]
    AStar,
    All,
}

impl Algorithm {
    /// The selected algorithms as trait objects, in report order.
    pub fn registry(self) -> Vec<Box<dyn PathfindingAlgorithm>> {
        match self {
            Algorithm::Bfs => vec![Box::new(Bfs::new())],
            Algorithm::Dfs => vec![Box::new(Dfs::new())],
            Algorithm::AStar => vec![Box::new(AStar::new())],
            Algorithm::All => vec![
                Box::new(Bfs::new()),
                Box::new(Dfs::new()),
                Box::new(AStar::new()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names() {
        let names: Vec<_> = Algorithm::All.registry().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["BFS", "DFS", "A*"]);
        assert_eq!(Algorithm::Dfs.registry()[0].name(), "DFS");
    }
}
