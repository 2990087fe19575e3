//! Per-frame physics: pointer repulsion, ambient drift, overlap relaxation
//! and integration with an inelastic viewport clamp.

use crate::config::FieldConfig;
use crate::constants::{WAVE_X_FREQ, WAVE_X_PHASE_MUL, WAVE_Y_FREQ, WAVE_Y_PHASE_MUL};
use crate::particle::{Particle, Viewport};
use glam::Vec2;
use rand::Rng;

/// Repulsive velocity increment for a particle of diameter `size` at `pos`.
///
/// Falls off linearly from `push_strength` at the pointer to zero at
/// `push_radius + size / 2`. Returns `None` outside that reach and when the
/// particle sits exactly on the pointer (no defined direction).
pub fn repulsion(pos: Vec2, size: f32, pointer: Vec2, config: &FieldConfig) -> Option<Vec2> {
    let away = pos - pointer;
    let dist = away.length();
    let reach = config.push_radius + size * 0.5;
    if dist < reach && dist > 0.0 {
        let force = config.push_strength * (1.0 - dist / reach);
        Some(away / dist * force)
    } else {
        None
    }
}

/// Deterministic part of the floating motion at wave time `t` (seconds).
pub fn ambient_drift(phase: f32, t: f32, config: &FieldConfig) -> Vec2 {
    let (a1, a2) = (config.wave_primary_amp, config.wave_secondary_amp);
    let x = (t * WAVE_X_FREQ[0] + phase * WAVE_X_PHASE_MUL[0]).sin() * a1
        + (t * WAVE_X_FREQ[1] + phase * WAVE_X_PHASE_MUL[1]).sin() * a2;
    let y = (t * WAVE_Y_FREQ[0] + phase * WAVE_Y_PHASE_MUL[0]).cos() * a1
        + (t * WAVE_Y_FREQ[1] + phase * WAVE_Y_PHASE_MUL[1]).cos() * a2;
    Vec2::new(x, y)
}

#[inline]
fn condition_axis(v: f32, config: &FieldConfig) -> f32 {
    let v = v * config.damping;
    if v.abs() < config.velocity_floor {
        v * config.floor_attenuation
    } else {
        v
    }
}

/// Accumulate velocity changes for every particle, then damp.
pub fn apply_forces<R: Rng + ?Sized>(
    particles: &mut [Particle],
    pointer: Option<Vec2>,
    t: f32,
    config: &FieldConfig,
    rng: &mut R,
) {
    let half = config.jitter_span * 0.5;
    for p in particles.iter_mut() {
        match pointer.and_then(|ptr| repulsion(p.pos, p.size, ptr, config)) {
            Some(push) => p.vel += push,
            None => {
                let jitter = Vec2::new(
                    rng.gen::<f32>() * config.jitter_span - half,
                    rng.gen::<f32>() * config.jitter_span - half,
                );
                p.vel += ambient_drift(p.phase, t, config) + jitter;
            }
        }
        p.vel.x = condition_axis(p.vel.x, config);
        p.vel.y = condition_axis(p.vel.y, config);
    }
}

/// One Gauss-Seidel pass over every unordered pair. Each particle of an
/// overlapping pair moves `factor * overlap / 2` along the contact normal.
/// A softer `factor = 0.5` would still leave about 5% of a deep overlap after
/// three passes.
pub fn relax_once(particles: &mut [Particle], factor: f32) {
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = particles.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            let delta = b.pos - a.pos;
            let dist = delta.length();
            let min_dist = (a.size + b.size) * 0.5;
            if dist < min_dist && dist > 0.0 {
                let shift = delta / dist * ((min_dist - dist) * 0.5 * factor);
                a.pos -= shift;
                b.pos += shift;
            }
        }
    }
}

pub fn relax_overlaps(particles: &mut [Particle], iterations: usize, factor: f32) {
    for _ in 0..iterations {
        relax_once(particles, factor);
    }
}

/// Sum of `max(0, min_dist - dist)` over all unordered pairs.
pub fn total_penetration(particles: &[Particle]) -> f32 {
    let mut sum = 0.0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let min_dist = (a.size + b.size) * 0.5;
            sum += (min_dist - a.pos.distance(b.pos)).max(0.0);
        }
    }
    sum
}

#[inline]
fn clamp_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) {
    let hi = extent - radius;
    if hi < radius {
        // Wider than the viewport on this axis: pin to the center.
        *pos = extent * 0.5;
        *vel = 0.0;
    } else if *pos < radius {
        *pos = radius;
        *vel = 0.0;
    } else if *pos > hi {
        *pos = hi;
        *vel = 0.0;
    }
}

/// Advance positions by velocity and clamp to the viewport, zeroing the
/// velocity component that hit a wall.
pub fn integrate_and_clamp(particles: &mut [Particle], viewport: Viewport) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        let r = p.radius();
        clamp_axis(&mut p.pos.x, &mut p.vel.x, r, viewport.width);
        clamp_axis(&mut p.pos.y, &mut p.vel.y, r, viewport.height);
    }
}
