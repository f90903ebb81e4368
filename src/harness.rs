use crate::algorithms::PathfindingAlgorithm;
use anyhow::Context;
use crate::config::Config;
use crate::endpoints::select_endpoints;
use crate::error::MazeError;
use crate::grid::{Grid, Position};
use crate::mazes::{create_maze, MazePreset};
use crate::render::render_path;
use crate::statistics::{AlgorithmStats, RunResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::time::Instant;

/// A named maze queued for the harness. Loading may already have failed.
struct MazeEntry {
    name: String,
    grid: Result<Grid, MazeError>,
}

/// Drives every algorithm over every maze, timing each search and writing a
/// report.
pub struct Harness {
    mazes: Vec<MazeEntry>,
    algorithms: Vec<Box<dyn PathfindingAlgorithm>>,
    rng: StdRng,
    runs: usize,
    quiet: bool,
    results: Vec<RunResult>,
    skipped: Vec<(String, MazeError)>,
}

impl Harness {
    pub fn new(algorithms: Vec<Box<dyn PathfindingAlgorithm>>, rng: StdRng) -> Self {
        Harness {
            mazes: Vec::new(),
            algorithms,
            rng,
            runs: 1,
            quiet: false,
            results: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Harness::new(config.algorithm.registry(), rng)
            .with_presets(&config.presets())
            .runs(config.runs)
            .quiet(config.quiet)
    }

    pub fn with_presets(mut self, presets: &[MazePreset]) -> Self {
        for &preset in presets {
            self.mazes.push(MazeEntry {
                name: preset.name().to_string(),
                grid: create_maze(preset),
            });
        }
        self
    }

    pub fn with_grid(mut self, name: &str, grid: Result<Grid, MazeError>) -> Self {
        self.mazes.push(MazeEntry {
            name: name.to_string(),
            grid,
        });
        self
    }

    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    /// Mazes that could not be run, with the reason.
    pub fn skipped(&self) -> &[(String, MazeError)] {
        &self.skipped
    }

    /// Runs every maze. A maze with bad data or too few open cells is logged
    /// and skipped; the remaining mazes still run.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // Handed back even when writing fails, so a later run still has mazes.
        let mazes = std::mem::take(&mut self.mazes);
        let result = self.run_mazes(out, &mazes);
        self.mazes = mazes;
        result
    }

    fn run_mazes<W: Write>(&mut self, out: &mut W, mazes: &[MazeEntry]) -> io::Result<()> {
        info!(
            "Running {} algorithm(s) over {} maze(s), {} run(s) each",
            self.algorithms.len(),
            mazes.len(),
            self.runs
        );

        for maze in mazes {
            let grid = match &maze.grid {
                Ok(grid) => grid,
                Err(e) => {
                    warn!("Skipping maze {}: {}", maze.name, e);
                    self.skipped.push((maze.name.clone(), e.clone()));
                    continue;
                }
            };

            for run in 0..self.runs {
                let (start, end) = match select_endpoints(grid, &mut self.rng) {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!("Skipping maze {}: {}", maze.name, e);
                        self.skipped.push((maze.name.clone(), e));
                        break;
                    }
                };
                debug!("Maze {} run {}: {} -> {}", maze.name, run + 1, start, end);
                self.run_maze(out, &maze.name, grid, start, end)?;
            }
        }
        Ok(())
    }

    fn run_maze<W: Write>(
        &mut self,
        out: &mut W,
        name: &str,
        grid: &Grid,
        start: Position,
        end: Position,
    ) -> io::Result<()> {
        if !self.quiet {
            writeln!(out, "Maze Type: {}", name)?;
            writeln!(out, "Start: {}, End: {}", start, end)?;
        }

        for algorithm in &self.algorithms {
            let timer = Instant::now();
            let outcome = algorithm.search(grid, start, end);
            let elapsed = timer.elapsed();

            debug!(
                "{} on {}: {:?} after expanding {} cells",
                algorithm.name(),
                name,
                outcome.state,
                outcome.expanded
            );

            if !self.quiet {
                writeln!(out, "{} took {:.2?}", algorithm.name(), elapsed)?;
                if outcome.path.is_empty() {
                    writeln!(out, "{} Path: none", algorithm.name())?;
                } else {
                    writeln!(
                        out,
                        "{} Path ({} steps, {} cells expanded):",
                        algorithm.name(),
                        outcome.path.steps(),
                        outcome.expanded
                    )?;
                }
                writeln!(out, "{}", render_path(grid, &outcome.path))?;
            }

            self.results.push(RunResult {
                maze: name.to_string(),
                algorithm: algorithm.name(),
                start,
                end,
                outcome,
                elapsed,
            });
        }

        if !self.quiet {
            writeln!(out, "----------------")?;
        }
        Ok(())
    }

    /// Runs every maze, then writes the summary and flushes `out`.
    pub fn report<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        self.run(out).context("failed to write maze report")?;
        self.write_summary(out).context("failed to write summary")?;
        out.flush().context("failed to flush report")?;
        Ok(())
    }

    /// Writes the per-algorithm comparison table.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== ALGORITHM COMPARISON ===")?;
        writeln!(
            out,
            "{:<10} {:<6} {:<8} {:<10} {:<14} {:<12}",
            "Algorithm", "Runs", "Found", "Avg Steps", "Avg Expanded", "Avg Time"
        )?;
        writeln!(out, "{}", "-".repeat(65))?;
        for stats in AlgorithmStats::collect(&self.results) {
            writeln!(out, "{}", stats)?;
        }

        for (name, reason) in &self.skipped {
            writeln!(out, "Skipped maze {}: {}", name, reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Algorithm, Bfs, Dfs};

    /// Accepts a fixed number of writes, then fails every one after that.
    struct FailingWriter {
        writes_left: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.writes_left -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn harness(seed: u64) -> Harness {
        Harness::new(Algorithm::All.registry(), StdRng::seed_from_u64(seed))
            .with_presets(&MazePreset::ALL)
    }

    #[test]
    fn runs_every_algorithm_on_every_preset() {
        let mut harness = harness(3);
        let mut out = Vec::new();
        harness.run(&mut out).unwrap();

        assert_eq!(harness.results().len(), 4 * 3);
        assert!(harness.skipped().is_empty());

        let text = String::from_utf8(out).unwrap();
        for preset in MazePreset::ALL {
            assert!(text.contains(&format!("Maze Type: {}", preset.name())));
        }
        assert!(text.contains("BFS took"));
        assert!(text.contains("DFS took"));
        assert!(text.contains("A* took"));
    }

    #[test]
    fn quiet_runs_write_nothing_and_algorithms_agree() {
        let mut harness = harness(11).runs(5).quiet(true);
        let mut out = Vec::new();
        harness.run(&mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(harness.results().len(), 4 * 5 * 3);
        for run in harness.results().chunks(3) {
            let found: Vec<bool> = run.iter().map(RunResult::success).collect();
            assert!(found.iter().all(|&f| f == found[0]), "{:?}", run);
            // Only open_center has a sealed-off region.
            if run[0].maze != "open_center" {
                assert!(found[0]);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_paths() {
        let paths = |seed| {
            let mut harness = harness(seed).quiet(true);
            harness.run(&mut io::sink()).unwrap();
            harness
                .results()
                .iter()
                .map(|r| (r.start, r.end, r.outcome.path.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(paths(99), paths(99));
    }

    #[test]
    fn bad_mazes_are_skipped_and_the_rest_still_run() {
        let algorithms: Vec<Box<dyn PathfindingAlgorithm>> =
            vec![Box::new(Bfs::new()), Box::new(Dfs::new())];
        let mut harness = Harness::new(algorithms, StdRng::seed_from_u64(0))
            .with_grid("walled", Grid::from_rows(&[[0u8, 0], [0, 1]]))
            .with_grid("ragged", Err(MazeError::EmptyGrid))
            .with_presets(&[MazePreset::VerticalBars])
            .quiet(true);
        harness.run(&mut io::sink()).unwrap();

        assert_eq!(harness.results().len(), 2);
        assert_eq!(
            harness.skipped(),
            &[
                (
                    "walled".to_string(),
                    MazeError::NotEnoughPassableCells { found: 1 }
                ),
                ("ragged".to_string(), MazeError::EmptyGrid),
            ]
        );

        let mut summary = Vec::new();
        harness.write_summary(&mut summary).unwrap();
        let summary = String::from_utf8(summary).unwrap();
        assert!(summary.contains("BFS"));
        assert!(summary.contains("Skipped maze walled"));
    }

    #[test]
    fn failed_write_keeps_mazes_for_the_next_run() {
        let mut harness =
            Harness::new(Algorithm::Bfs.registry(), StdRng::seed_from_u64(1))
                .with_presets(&MazePreset::ALL);

        let mut failing = FailingWriter { writes_left: 3 };
        assert!(harness.run(&mut failing).is_err());
        assert!(harness.results().is_empty());

        harness.run(&mut io::sink()).unwrap();
        assert_eq!(harness.results().len(), 4);
    }

    #[test]
    fn report_surfaces_write_errors_after_collecting_results() {
        let mut harness = harness(5).quiet(true);
        let mut failing = FailingWriter { writes_left: 0 };
        let err = harness.report(&mut failing).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to write summary"));
        assert_eq!(harness.results().len(), 4 * 3);
    }
}
