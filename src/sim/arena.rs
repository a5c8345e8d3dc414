//! The table and everything on it
//!
//! One step is two phases with a hard barrier between them: every ball is
//! integrated, slowed and contained on its own, then a single collision pass
//! runs over the whole set.

use super::collision::resolve_pair;
use super::particle::{Bounds, Particle};
use super::snapshot::{ParticleSnapshot, Snapshot};
use crate::config::SimConfig;
use crate::error::Result;
use crate::launch::LaunchParams;
use crate::rack;

/// Table bounds plus the balls on it (ordered; order drives collision tie-breaks)
#[derive(Debug, Clone)]
pub struct Arena {
    bounds: Bounds,
    particles: Vec<Particle>,
}

impl Arena {
    pub fn new(bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self { bounds, particles }
    }

    /// Rack one ball per launch and give each its initial velocity
    pub fn from_launches(config: &SimConfig, launches: &[LaunchParams]) -> Result<Self> {
        let bounds = config.bounds();
        let positions = rack::triangle(launches.len(), &bounds, config.ball_radius)?;

        let particles = positions
            .into_iter()
            .zip(launches)
            .enumerate()
            .map(|(i, (pos, launch))| {
                Particle::new(
                    i as u32,
                    pos,
                    launch.velocity(),
                    config.ball_radius,
                    config.friction,
                )
            })
            .collect();

        Ok(Self::new(bounds, particles))
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every ball by `dt`, then resolve contacts once
    pub fn step(&mut self, dt: f64) {
        for particle in &mut self.particles {
            particle.integrate_position(dt);
            particle.apply_friction(dt);
            particle.contain_within(&self.bounds);
        }

        let contacts = self.resolve_collisions();
        if contacts > 0 {
            log::trace!("{} contacts resolved", contacts);
        }
    }

    /// One sequential pass over all pairs in ascending (i, j) order.
    /// Returns the number of pairs found in contact.
    pub fn resolve_collisions(&mut self) -> usize {
        let n = self.particles.len();
        let mut contacts = 0;

        for i in 0..n {
            if self.particles[i].is_at_rest() {
                continue;
            }
            for j in (i + 1)..n {
                // i < j, so i lives in the left half and j heads the right half
                let (left, right) = self.particles.split_at_mut(j);
                if resolve_pair(&mut left[i], &mut right[0]) {
                    contacts += 1;
                }
            }
        }

        contacts
    }

    pub fn all_at_rest(&self) -> bool {
        self.particles.iter().all(Particle::is_at_rest)
    }

    pub fn moving_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_at_rest()).count()
    }

    /// Per-ball trajectory length, in collection order
    pub fn path_lengths(&self) -> Vec<f64> {
        self.particles.iter().map(Particle::path_length).collect()
    }

    pub fn total_path_length(&self) -> f64 {
        self.particles.iter().map(Particle::path_length).sum()
    }

    /// Copy of the current state for observers
    pub fn snapshot(&self, step: u64, elapsed: f64) -> Snapshot {
        Snapshot {
            step,
            elapsed,
            moving: self.moving_count(),
            particles: self.particles.iter().map(ParticleSnapshot::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::DVec2;
    use proptest::prelude::*;

    fn table() -> Bounds {
        Bounds::new(TABLE_WIDTH, TABLE_HEIGHT)
    }

    fn ball(id: u32, x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle::new(id, DVec2::new(x, y), DVec2::new(vx, vy), BALL_RADIUS, BALL_FRICTION)
    }

    #[test]
    fn test_head_on_collision_scenario() {
        let gap = 2.0 * BALL_RADIUS - 1e-6;
        let mut arena = Arena::new(
            table(),
            vec![ball(0, 4.0, 3.0, 1.0, 0.0), ball(1, 4.0 + gap, 3.0, 0.0, 0.0)],
        );

        assert_eq!(arena.resolve_collisions(), 1);
        let p = arena.particles();
        assert!(p[0].vel().length() < 1e-9);
        assert!((p[1].vel() - DVec2::new(1.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_wall_reflection_visible_to_collision_pass() {
        // Ball 0 is pushed off the wall, then overlaps ball 1 in the same step
        let mut arena = Arena::new(
            table(),
            vec![ball(0, 0.25, 3.0, -1.0, 0.0), ball(1, 0.75, 3.0, -0.5, 0.0)],
        );
        arena.step(0.01);

        let p = arena.particles();
        // 0 was reflected to +x then took ball 1's normal velocity
        assert!(p[0].vel().x < 0.0);
        assert!(p[1].vel().x > 0.0);
    }

    #[test]
    fn test_pair_with_resting_ball_skipped() {
        let mut arena = Arena::new(
            table(),
            vec![ball(0, 4.0, 3.0, 0.001, 0.0), ball(1, 4.2, 3.0, 1.0, 0.0)],
        );
        arena.step(SIM_DT);

        let p = arena.particles();
        assert!(p[0].is_at_rest());
        assert_eq!(p[0].pos(), DVec2::new(4.0 + 0.001 * SIM_DT, 3.0));
        assert!(p[1].vel().x > 0.9);
        assert_eq!(arena.moving_count(), 1);
    }

    #[test]
    fn test_three_ball_chain_resolves_in_index_order() {
        let mut arena = Arena::new(
            table(),
            vec![
                ball(0, 4.0, 3.0, 1.0, 0.0),
                ball(1, 4.55, 3.0, 0.0, 0.0),
                ball(2, 5.1, 3.0, 0.0, 0.0),
            ],
        );

        // (0,1) and (1,2) overlap; (0,2) does not
        assert_eq!(arena.resolve_collisions(), 2);
        let p = arena.particles();
        assert!(p[0].vel().length() < 1e-9);
        assert!(p[1].vel().length() < 1e-9);
        assert!((p[2].vel().x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_length_totals() {
        let mut arena = Arena::new(
            table(),
            vec![ball(0, 2.0, 2.0, 1.0, 0.0), ball(1, 6.0, 4.0, 0.0, -1.0)],
        );
        for _ in 0..10 {
            arena.step(SIM_DT);
        }

        let lengths = arena.path_lengths();
        assert_eq!(lengths.len(), 2);
        assert!(lengths.iter().all(|&l| l > 0.0));
        assert!((arena.total_path_length() - lengths.iter().sum::<f64>()).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut arena = Arena::new(table(), vec![ball(0, 5.0, 3.0, 1.0, 1.0)]);
        arena.step(SIM_DT);
        let snap = arena.snapshot(1, SIM_DT);
        arena.step(SIM_DT);

        assert_eq!(snap.step, 1);
        assert_eq!(snap.moving, 1);
        assert_eq!(snap.particles[0].trajectory.len(), 2);
        assert_ne!(snap.particles[0].pos, arena.particles()[0].pos());
    }

    #[test]
    fn test_from_launches_racks_balls() -> Result<()> {
        let config = SimConfig::default();
        let launches = vec![LaunchParams::new(2.0, 180.0); 6];
        let arena = Arena::from_launches(&config, &launches)?;

        assert_eq!(arena.particles().len(), 6);
        for (i, p) in arena.particles().iter().enumerate() {
            assert_eq!(p.id, i as u32);
            assert!((p.vel().x + 2.0).abs() < 1e-12);
            assert!(arena.bounds().contains(p.pos(), p.radius()));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_rest_state_is_idempotent(
            vx in -3.0f64..3.0,
            vy in -3.0f64..3.0,
            extra_steps in 1usize..50,
        ) {
            let mut arena = Arena::new(table(), vec![
                ball(0, 5.0, 3.0, vx, vy),
                ball(1, 2.0, 2.0, -vy, vx),
            ]);
            let mut steps = 0;
            while !arena.all_at_rest() && steps < 10_000 {
                arena.step(SIM_DT);
                steps += 1;
            }
            prop_assert!(arena.all_at_rest());

            let frozen: Vec<_> = arena.particles().iter().map(|p| (p.pos(), p.vel())).collect();
            for _ in 0..extra_steps {
                arena.step(SIM_DT);
            }
            let after: Vec<_> = arena.particles().iter().map(|p| (p.pos(), p.vel())).collect();
            prop_assert_eq!(frozen, after);
        }
    }
}
