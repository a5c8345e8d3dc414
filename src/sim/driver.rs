//! Fixed timestep simulation loop
//!
//! Steps the arena until every ball is at rest, then freezes.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::snapshot::Snapshot;
use crate::error::{Error, Result};
use crate::report::Report;

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverPhase {
    /// Balls still moving; each `run_step` advances the arena
    Running,
    /// Terminal; further steps are ignored
    Stopped,
}

/// Path lengths derived from the current trajectories
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub path_lengths: Vec<f64>,
    pub total: f64,
}

/// Runs one arena at a fixed `dt`
#[derive(Debug, Clone)]
pub struct Driver {
    arena: Arena,
    dt: f64,
    elapsed: f64,
    steps: u64,
    phase: DriverPhase,
    /// Written once, when the last ball stops
    report: Option<Report>,
}

impl Driver {
    pub fn new(arena: Arena, dt: f64) -> Self {
        Self {
            arena,
            dt,
            elapsed: 0.0,
            steps: 0,
            phase: DriverPhase::Running,
            report: None,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == DriverPhase::Running
    }

    /// Final report, present only if the run ended with every ball at rest
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Advance one step. Returns the phase after the step.
    pub fn run_step(&mut self) -> DriverPhase {
        if self.phase == DriverPhase::Stopped {
            return self.phase;
        }

        self.arena.step(self.dt);
        self.elapsed += self.dt;
        self.steps += 1;

        if self.arena.all_at_rest() {
            self.phase = DriverPhase::Stopped;
            let report = Report::new(self.steps, self.elapsed, &self.arena.path_lengths());
            log::info!(
                "all balls at rest after {:.2} s ({} steps), total path {:.2}",
                self.elapsed,
                self.steps,
                report.total
            );
            self.report = Some(report);
        }

        self.phase
    }

    /// Step until every ball stops, at most `max_steps` more times.
    ///
    /// `on_step` sees the driver after each step, including the final one;
    /// an error from it ends the run.
    pub fn run_to_completion<F>(&mut self, max_steps: u64, mut on_step: F) -> Result<&Report>
    where
        F: FnMut(&Self) -> Result<()>,
    {
        let mut taken = 0;
        while self.is_running() {
            if taken >= max_steps {
                return Err(Error::StepLimit { steps: self.steps });
            }
            self.run_step();
            taken += 1;
            on_step(self)?;
        }

        self.report.as_ref().ok_or(Error::StepLimit { steps: self.steps })
    }

    /// Stop between steps without producing a report
    pub fn halt(&mut self) {
        if self.phase == DriverPhase::Running {
            log::info!("halted after {} steps", self.steps);
            self.phase = DriverPhase::Stopped;
        }
    }

    /// Current path lengths (final only once stopped)
    pub fn metrics(&self) -> Metrics {
        let path_lengths = self.arena.path_lengths();
        let total = path_lengths.iter().sum();
        Metrics {
            path_lengths,
            total,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.arena.snapshot(self.steps, self.elapsed)
    }
}
