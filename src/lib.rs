//! Billiard Sim - friction-damped balls on a rectangular table
//!
//! Core modules:
//! - `sim`: Deterministic fixed-timestep physics (particles, arena, driver)
//! - `rack`: Triangular start layout
//! - `launch`: Per-ball launch parameters
//! - `prompt`: Interactive parameter collection
//! - `config`: Data-driven run configuration
//! - `report`: Final path-length summary

pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod prompt;
pub mod rack;
pub mod report;
pub mod sim;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use launch::LaunchParams;
pub use report::Report;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (20 Hz)
    pub const SIM_DT: f64 = 0.05;
    /// Guard on the number of steps a single run may take
    pub const MAX_STEPS: u64 = 100_000;

    /// Table dimensions
    pub const TABLE_WIDTH: f64 = 10.0;
    pub const TABLE_HEIGHT: f64 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 0.3;
    /// Friction coefficient for exponential velocity decay (1/s)
    pub const BALL_FRICTION: f64 = 0.2;
    /// Below this speed a ball comes to rest
    pub const STOP_SPEED: f64 = 0.02;

    /// Input ranges accepted from the parameter collector
    pub const MIN_BALLS: usize = 1;
    pub const MAX_BALLS: usize = 15;
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 10.0;
    pub const MIN_ANGLE_DEG: f64 = 0.0;
    pub const MAX_ANGLE_DEG: f64 = 360.0;
}

/// Convert a speed and a launch angle in degrees into a velocity vector
#[inline]
pub fn launch_velocity(speed: f64, angle_deg: f64) -> DVec2 {
    let theta = angle_deg.to_radians();
    DVec2::new(speed * theta.cos(), speed * theta.sin())
}

/// Euclidean length of the polyline through `points`
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
