//! Post-step state copies for observers (renderers, trace files)
//!
//! Snapshots are only ever taken between steps, never mid-step.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::particle::Particle;

/// One ball as seen after a completed step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub at_rest: bool,
    pub trajectory: Vec<DVec2>,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            pos: p.pos(),
            vel: p.vel(),
            radius: p.radius(),
            at_rest: p.is_at_rest(),
            trajectory: p.trajectory().to_vec(),
        }
    }
}

/// The whole table after a completed step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Steps completed so far
    pub step: u64,
    /// Simulated seconds elapsed
    pub elapsed: f64,
    /// Balls not yet at rest
    pub moving: usize,
    pub particles: Vec<ParticleSnapshot>,
}
