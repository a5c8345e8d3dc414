//! Ball-ball contact detection and response
//!
//! Balls have unit mass and no spin, so an impact simply exchanges the
//! velocity components along the line of centers and leaves the tangential
//! components alone.

use glam::DVec2;

use super::particle::Particle;

/// Normal used when two centers coincide exactly
pub const FALLBACK_NORMAL: DVec2 = DVec2::new(1.0, 0.0);

/// Result of a contact check
#[derive(Debug, Clone)]
pub struct ContactResult {
    /// Whether the balls overlap
    pub hit: bool,
    /// Unit normal pointing from the first ball toward the second
    pub normal: DVec2,
    /// Overlap depth (for position correction)
    pub penetration: f64,
}

impl ContactResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: DVec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check whether circles at `pos_a` and `pos_b` overlap.
///
/// Touching exactly (`distance == contact_distance`) is not a hit.
pub fn ball_ball_contact(pos_a: DVec2, pos_b: DVec2, contact_distance: f64) -> ContactResult {
    let delta = pos_b - pos_a;
    let distance = delta.length();

    if distance >= contact_distance {
        return ContactResult::miss();
    }

    let normal = if distance > 0.0 {
        delta / distance
    } else {
        FALLBACK_NORMAL
    };

    ContactResult {
        hit: true,
        normal,
        penetration: contact_distance - distance,
    }
}

/// Swap the normal components of two velocities
pub fn exchange_normal_velocity(vel_a: DVec2, vel_b: DVec2, normal: DVec2) -> (DVec2, DVec2) {
    let va_n = vel_a.dot(normal);
    let vb_n = vel_b.dot(normal);
    (
        vel_a + (vb_n - va_n) * normal,
        vel_b + (va_n - vb_n) * normal,
    )
}

/// Resolve one pair: exchange normal velocities, then push both balls half
/// the overlap apart. Returns true if the pair was in contact.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle) -> bool {
    if a.is_at_rest() || b.is_at_rest() {
        return false;
    }

    let contact = ball_ball_contact(a.pos(), b.pos(), a.radius() + b.radius());
    if !contact.hit {
        return false;
    }

    let n = contact.normal;
    let (va, vb) = exchange_normal_velocity(a.vel(), b.vel(), n);
    a.set_velocity(va);
    b.set_velocity(vb);

    // Coincident centers still get pushed, along FALLBACK_NORMAL
    let push = n * (contact.penetration * 0.5);
    a.displace(-push);
    b.displace(push);

    log::trace!(
        "contact {}-{}: depth {:.4}, normal ({:.3}, {:.3})",
        a.id,
        b.id,
        contact.penetration,
        n.x,
        n.y
    );
    true
}
