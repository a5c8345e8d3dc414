//! Per-ball launch parameters
//!
//! A ball is launched with a speed and a direction in degrees, measured
//! counter-clockwise from +x.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::launch_velocity;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Length units per second
    pub speed: f64,
    /// Degrees
    pub angle_deg: f64,
}

impl LaunchParams {
    pub fn new(speed: f64, angle_deg: f64) -> Self {
        Self { speed, angle_deg }
    }

    pub fn velocity(&self) -> DVec2 {
        launch_velocity(self.speed, self.angle_deg)
    }

    /// Check against the ranges the parameter collector accepts
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(Error::InvalidParam(format!(
                "speed {} outside {}..={}",
                self.speed, MIN_SPEED, MAX_SPEED
            )));
        }
        if !(MIN_ANGLE_DEG..=MAX_ANGLE_DEG).contains(&self.angle_deg) {
            return Err(Error::InvalidParam(format!(
                "angle {} outside {}..={}",
                self.angle_deg, MIN_ANGLE_DEG, MAX_ANGLE_DEG
            )));
        }
        Ok(())
    }
}

/// `count` launches drawn uniformly from the accepted ranges; same seed, same launches
pub fn random_launches(count: usize, seed: u64) -> Vec<LaunchParams> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let speed = rng.random_range(MIN_SPEED..=MAX_SPEED);
            let angle_deg = rng.random_range(MIN_ANGLE_DEG..MAX_ANGLE_DEG);
            LaunchParams::new(speed, angle_deg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ranges() {
        assert!(LaunchParams::new(0.1, 0.0).validate().is_ok());
        assert!(LaunchParams::new(10.0, 360.0).validate().is_ok());
        assert!(LaunchParams::new(0.05, 45.0).validate().is_err());
        assert!(LaunchParams::new(11.0, 45.0).validate().is_err());
        assert!(LaunchParams::new(1.0, -1.0).validate().is_err());
        assert!(LaunchParams::new(f64::NAN, 10.0).validate().is_err());
    }

    #[test]
    fn test_random_launches_deterministic() {
        let a = random_launches(8, 42);
        let b = random_launches(8, 42);
        assert_eq!(a, b);
        assert_ne!(a, random_launches(8, 43));
        assert!(a.iter().all(|l| l.validate().is_ok()));
    }

    #[test]
    fn test_velocity_from_params() {
        let v = LaunchParams::new(3.0, 270.0).velocity();
        assert!(v.x.abs() < 1e-12);
        assert!((v.y + 3.0).abs() < 1e-12);
    }
}
