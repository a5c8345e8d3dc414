//! Run configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! reference table.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::launch::LaunchParams;
use crate::sim::Bounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Table ===
    pub table_width: f64,
    pub table_height: f64,

    // === Balls ===
    pub ball_radius: f64,
    /// Friction coefficient (1/s)
    pub friction: f64,
    /// Launch parameters in rack order; empty means ask for them
    pub balls: Vec<LaunchParams>,

    // === Stepping ===
    /// Seconds per step
    pub dt: f64,
    /// Safety guard for a single run
    pub max_steps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            table_width: TABLE_WIDTH,
            table_height: TABLE_HEIGHT,

            ball_radius: BALL_RADIUS,
            friction: BALL_FRICTION,
            balls: Vec::new(),

            dt: SIM_DT,
            max_steps: MAX_STEPS,
        }
    }
}

impl SimConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.table_width, self.table_height)
    }

    pub fn validate(&self) -> Result<()> {
        positive("table_width", self.table_width)?;
        positive("table_height", self.table_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("friction", self.friction)?;
        positive("dt", self.dt)?;

        if self.table_width < 2.0 * self.ball_radius || self.table_height < 2.0 * self.ball_radius {
            return Err(Error::InvalidParam(
                "table must be at least one ball diameter in each dimension".into(),
            ));
        }
        if self.max_steps == 0 {
            return Err(Error::InvalidParam("max_steps must be > 0".into()));
        }
        if self.balls.len() > MAX_BALLS {
            return Err(Error::InvalidParam(format!(
                "at most {} balls, got {}",
                MAX_BALLS,
                self.balls.len()
            )));
        }
        for (i, ball) in self.balls.iter().enumerate() {
            ball.validate()
                .map_err(|e| Error::InvalidParam(format!("ball {}: {e}", i + 1)))?;
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParam(format!("{name} must be finite and > 0, got {value}")))
    }
}
