use crate::config::FieldConfig;
use crate::particle::{Particle, Viewport};
use crate::sim;
use crate::spawn;
use crate::tier::DeviceTier;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// The simulation context: the authoritative particle set plus the latest
/// pointer sample. The host owns it and drives [`ParticleField::step`] from
/// its own frame scheduler.
pub struct ParticleField {
    pub config: FieldConfig,
    particles: Vec<Particle>,
    viewport: Viewport,
    tier: DeviceTier,
    pointer: Option<Vec2>,
    wave_clock: Duration,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, viewport: Viewport, tier: DeviceTier, seed: u64) -> Self {
        let mut field = Self {
            config,
            particles: Vec::new(),
            viewport,
            tier,
            pointer: None,
            wave_clock: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reinitialize();
        field
    }

    /// Replace the whole particle set with fresh draws for the current
    /// viewport and tier.
    pub fn reinitialize(&mut self) {
        self.particles = spawn::spawn_particles(&self.config, self.viewport, self.tier, &mut self.rng);
        log::debug!(
            "[field] spawned {} particles for {:.0}x{:.0} ({:?})",
            self.particles.len(),
            self.viewport.width,
            self.viewport.height,
            self.tier
        );
    }

    /// Adopt a new viewport. Returns `false` (and keeps the current set) when
    /// the size did not actually change.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            log::trace!("[field] resize to same viewport ignored");
            return false;
        }
        self.viewport = viewport;
        self.reinitialize();
        true
    }

    /// Switch device tier, reallocating for its population. Returns `false`
    /// when the tier is unchanged.
    pub fn set_tier(&mut self, tier: DeviceTier) -> bool {
        if tier == self.tier {
            return false;
        }
        self.tier = tier;
        self.reinitialize();
        true
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// Forget the pointer; no particle is repelled until the next move.
    #[inline]
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Advance one frame. `dt` only moves the ambient wave clock; velocities
    /// are per-frame increments.
    pub fn step(&mut self, dt: Duration) {
        self.wave_clock += dt;
        let t = self.wave_clock.as_secs_f32();
        sim::apply_forces(&mut self.particles, self.pointer, t, &self.config, &mut self.rng);
        sim::relax_overlaps(
            &mut self.particles,
            self.config.relax_iterations,
            self.config.relax_factor,
        );
        sim::integrate_and_clamp(&mut self.particles, self.viewport);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tier(&self) -> DeviceTier {
        self.tier
    }
}
