use crate::algorithms::SearchOutcome;
use crate::grid::Position;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct TimingData {
    pub find_path_times: Vec<Duration>,
}

impl TimingData {
    pub fn new() -> Self {
        TimingData {
            find_path_times: Vec::new(),
        }
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.find_path_times.push(elapsed);
    }

    pub fn average_find_path_time(&self) -> Duration {
        if self.find_path_times.is_empty() {
            Duration::from_nanos(0)
        } else {
            self.total_find_path_time() / self.find_path_times.len() as u32
        }
    }

    pub fn total_find_path_time(&self) -> Duration {
        self.find_path_times.iter().sum()
    }

    pub fn total_calls(&self) -> usize {
        self.find_path_times.len()
    }
}

/// One algorithm run on one maze with one pair of endpoints.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub maze: String,
    pub algorithm: &'static str,
    pub start: Position,
    pub end: Position,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

impl RunResult {
    pub fn success(&self) -> bool {
        !self.outcome.path.is_empty()
    }
}

/// Totals for one algorithm across every run.
#[derive(Debug, Clone)]
pub struct AlgorithmStats {
    pub name: &'static str,
    pub paths_found: usize,
    pub total_steps: usize,
    pub total_expanded: usize,
    pub timing_data: TimingData,
}

impl AlgorithmStats {
    pub fn new(name: &'static str) -> Self {
        AlgorithmStats {
            name,
            paths_found: 0,
            total_steps: 0,
            total_expanded: 0,
            timing_data: TimingData::new(),
        }
    }

    pub fn add(&mut self, result: &RunResult) {
        if result.success() {
            self.paths_found += 1;
            self.total_steps += result.outcome.path.steps();
        }
        self.total_expanded += result.outcome.expanded;
        self.timing_data.record(result.elapsed);
    }

    /// Mean path length in steps over the runs that found a path.
    pub fn average_steps(&self) -> f64 {
        if self.paths_found > 0 {
            self.total_steps as f64 / self.paths_found as f64
        } else {
            0.0
        }
    }

    pub fn average_expanded(&self) -> f64 {
        let runs = self.timing_data.total_calls();
        if runs > 0 {
            self.total_expanded as f64 / runs as f64
        } else {
            0.0
        }
    }

    /// Groups results by algorithm, keeping first-seen order.
    pub fn collect(results: &[RunResult]) -> Vec<AlgorithmStats> {
        let mut stats: Vec<AlgorithmStats> = Vec::new();
        for result in results {
            match stats.iter_mut().find(|s| s.name == result.algorithm) {
                Some(entry) => entry.add(result),
                None => {
                    let mut entry = AlgorithmStats::new(result.algorithm);
                    entry.add(result);
                    stats.push(entry);
                }
            }
        }
        stats
    }
}

impl fmt::Display for AlgorithmStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg_time_str = format!("{:.2?}", self.timing_data.average_find_path_time());
        write!(
            f,
            "{:<10} {:<6} {:<8} {:<10.2} {:<14.2} {:<12}",
            self.name,
            self.timing_data.total_calls(),
            self.paths_found,
            self.average_steps(),
            self.average_expanded(),
            avg_time_str
        )
    }
}
