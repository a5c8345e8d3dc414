//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by particle index)
//! - No I/O or rendering dependencies

pub mod arena;
pub mod collision;
pub mod driver;
pub mod particle;
pub mod snapshot;

pub use arena::Arena;
pub use collision::{ContactResult, ball_ball_contact, exchange_normal_velocity, resolve_pair};
pub use driver::{Driver, DriverPhase, Metrics};
pub use particle::{Bounds, Particle};
pub use snapshot::{ParticleSnapshot, Snapshot};
