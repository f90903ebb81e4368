use crate::algorithms::Algorithm;
use crate::mazes::MazePreset;
use clap::Parser;

/// Runs pathfinding algorithms over the built-in mazes and prints the paths.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Maze to run; repeat for several. Defaults to every preset. Unknown
    /// names use the simple maze.
    #[arg(long = "maze", value_name = "NAME")]
    pub mazes: Vec<String>,

    #[arg(long, value_enum, default_value_t = Algorithm::All)]
    pub algorithm: Algorithm,

    /// Seed for endpoint selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Runs per maze, each with fresh endpoints
    #[arg(long, default_value_t = 1)]
    pub runs: usize,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn presets(&self) -> Vec<MazePreset> {
        if self.mazes.is_empty() {
            MazePreset::ALL.to_vec()
        } else {
            self.mazes.iter().map(|name| MazePreset::from_name(name)).collect()
        }
    }
}
