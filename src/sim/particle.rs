//! Ball kinematics
//!
//! A particle owns its position, velocity and full trajectory. Every update
//! primitive is a no-op once the ball has come to rest.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::STOP_SPEED;
use crate::polyline_length;

/// Axis-aligned table rectangle with its corner at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if a circle of `radius` at `pos` touches no wall
    pub fn contains(&self, pos: DVec2, radius: f64) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// A billiard ball
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u32,
    pos: DVec2,
    vel: DVec2,
    radius: f64,
    /// Friction coefficient (1/s)
    mu: f64,
    at_rest: bool,
    /// Recorded positions, oldest first, starting with the initial position
    trajectory: Vec<DVec2>,
}

impl Particle {
    pub fn new(id: u32, pos: DVec2, vel: DVec2, radius: f64, mu: f64) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            mu,
            at_rest: false,
            trajectory: vec![pos],
        }
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn trajectory(&self) -> &[DVec2] {
        &self.trajectory
    }

    /// Length of the recorded trajectory polyline
    pub fn path_length(&self) -> f64 {
        polyline_length(&self.trajectory)
    }

    /// Advance position by one step and record it
    pub fn integrate_position(&mut self, dt: f64) {
        if self.at_rest {
            return;
        }
        self.pos += self.vel * dt;
        self.trajectory.push(self.pos);
    }

    /// Exponential friction decay; stops the ball once it is slow enough
    pub fn apply_friction(&mut self, dt: f64) {
        if self.at_rest {
            return;
        }
        if self.speed() < STOP_SPEED {
            self.vel = DVec2::ZERO;
            self.at_rest = true;
            log::debug!("ball {} at rest at ({:.3}, {:.3})", self.id, self.pos.x, self.pos.y);
            return;
        }
        self.vel *= (-self.mu * dt).exp();
    }

    /// Clamp to the table and send the offending velocity component back inside
    pub fn contain_within(&mut self, bounds: &Bounds) {
        if self.at_rest {
            return;
        }
        let r = self.radius;

        if self.pos.x - r <= 0.0 {
            self.pos.x = r;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x + r >= bounds.width {
            self.pos.x = bounds.width - r;
            self.vel.x = -self.vel.x.abs();
        }

        if self.pos.y - r <= 0.0 {
            self.pos.y = r;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y + r >= bounds.height {
            self.pos.y = bounds.height - r;
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Post-collision velocity (ignored at rest)
    pub(crate) fn set_velocity(&mut self, vel: DVec2) {
        if !self.at_rest {
            self.vel = vel;
        }
    }

    /// Positional correction from a collision (ignored at rest)
    pub(crate) fn displace(&mut self, offset: DVec2) {
        if !self.at_rest {
            self.pos += offset;
        }
    }
}
