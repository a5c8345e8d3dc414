//! End-of-run path-length summary
//!
//! Built once when the last ball stops; printed as text or JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance covered by a single ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallPath {
    /// 1-based ball number, in rack order
    pub ball: usize,
    pub path_length: f64,
}

/// Final results of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub steps: u64,
    /// Simulated seconds until the last ball stopped
    pub elapsed: f64,
    pub balls: Vec<BallPath>,
    pub total: f64,
}

impl Report {
    pub fn new(steps: u64, elapsed: f64, path_lengths: &[f64]) -> Self {
        let balls: Vec<BallPath> = path_lengths
            .iter()
            .enumerate()
            .map(|(i, &path_length)| BallPath {
                ball: i + 1,
                path_length,
            })
            .collect();
        let total = path_lengths.iter().sum();

        Self {
            steps,
            elapsed,
            balls,
            total,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{rule}")?;
        writeln!(f, "SIMULATION RESULTS")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "All balls stopped after {:.2} s ({} steps)", self.elapsed, self.steps)?;
        for b in &self.balls {
            writeln!(f, "Ball {}: path = {:.2} units", b.ball, b.path_length)?;
        }
        writeln!(f)?;
        writeln!(f, "TOTAL PATH OF ALL BALLS: {:.2} units", self.total)?;
        write!(f, "{rule}")
    }
}
