//! Field initialization: sizes, colors, phases and spawn positions.

use crate::color::PaletteColor;
use crate::config::FieldConfig;
use crate::particle::{Particle, Viewport};
use crate::tier::DeviceTier;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Uniform in `[lo, hi)`, or `lo` when the range is empty.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Draw `count` diameters. On the constrained tier at most
/// `max_large_count` of them land in `[large_threshold, max_size]`.
pub fn sample_sizes<R: Rng + ?Sized>(
    config: &FieldConfig,
    tier: DeviceTier,
    count: usize,
    rng: &mut R,
) -> Vec<f32> {
    if !tier.is_constrained() {
        return (0..count)
            .map(|_| uniform(rng, config.min_size, config.max_size))
            .collect();
    }
    let mut large = 0usize;
    (0..count)
        .map(|_| {
            if large < config.max_large_count && rng.gen::<f32>() < config.large_probability {
                large += 1;
                uniform(rng, config.large_threshold, config.max_size)
            } else {
                uniform(rng, config.min_size, config.large_threshold)
            }
        })
        .collect()
}

/// Allocate a fresh particle set for `viewport`. Overlaps are allowed here;
/// the first few simulation steps separate them.
pub fn spawn_particles<R: Rng + ?Sized>(
    config: &FieldConfig,
    viewport: Viewport,
    tier: DeviceTier,
    rng: &mut R,
) -> Vec<Particle> {
    let count = config.count_for(tier);
    // A particle never exceeds the viewport's smaller side.
    let fit = viewport.min_extent();
    sample_sizes(config, tier, count, rng)
        .into_iter()
        .map(|size| {
            let size = size.min(fit);
            let r = size * 0.5;
            let x = (r + rng.gen::<f32>() * (viewport.width - size)).clamp(r, viewport.width - r);
            let y = (r + rng.gen::<f32>() * (viewport.height - size)).clamp(r, viewport.height - r);
            let color = *PaletteColor::ALL
                .choose(rng)
                .unwrap_or(&PaletteColor::Blue);
            Particle {
                pos: Vec2::new(x, y),
                vel: Vec2::ZERO,
                size,
                color,
                phase: uniform(rng, 0.0, TAU),
            }
        })
        .collect()
}
