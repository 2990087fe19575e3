//! Frame paint plan: what to draw for each particle, independent of the
//! drawing backend. The web renderer executes it on a 2D canvas context.

use crate::color::PaletteColor;
use crate::constants::{DEFAULT_GRAIN_ALPHA, GRAIN_BLIT_SCALE, LIGHT_OFFSET_FACTOR};
use crate::particle::Particle;
use crate::tier::DeviceTier;
use glam::Vec2;

/// A radial-gradient stop: `lighten` is added to each channel of the base
/// color (0 means the base color itself).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadingStop {
    pub offset: f32,
    pub lighten: u8,
}

/// The highlight stop at 0 is immediately overridden by the base color, which
/// leaves a hard-edged core and a bright rim.
pub const SHADING_STOPS: [ShadingStop; 4] = [
    ShadingStop { offset: 0.0, lighten: 85 },
    ShadingStop { offset: 0.0, lighten: 0 },
    ShadingStop { offset: 0.85, lighten: 55 },
    ShadingStop { offset: 1.0, lighten: 90 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PaintOptions {
    pub grain: bool,
    pub grain_alpha: f32,
    pub light_offset: f32,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            grain: true,
            grain_alpha: DEFAULT_GRAIN_ALPHA,
            light_offset: LIGHT_OFFSET_FACTOR,
        }
    }
}

impl PaintOptions {
    /// Grain is skipped on constrained devices.
    pub fn for_tier(tier: DeviceTier) -> Self {
        Self {
            grain: !tier.is_constrained(),
            ..Self::default()
        }
    }

    /// Alpha as a `[0, 1]` fraction. Values above 1 are read as 0-255 byte
    /// alphas.
    pub fn effective_grain_alpha(&self) -> f32 {
        let a = self.grain_alpha;
        if !a.is_finite() || a <= 0.0 {
            0.0
        } else if a > 1.0 {
            (a / 255.0).min(1.0)
        } else {
            a
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDraw {
    pub center: Vec2,
    pub radius: f32,
    /// Gradient focal point, offset up and to the left of the center.
    pub focus: Vec2,
    pub color: PaletteColor,
    pub grain: Option<Rect>,
}

/// Fill `out` with one draw per particle, in particle order.
pub fn plan_frame(particles: &[Particle], options: &PaintOptions, out: &mut Vec<CircleDraw>) {
    out.clear();
    out.extend(particles.iter().map(|p| {
        let r = p.radius();
        let offset = r * options.light_offset;
        let edge = r * GRAIN_BLIT_SCALE;
        CircleDraw {
            center: p.pos,
            radius: r,
            focus: p.pos - Vec2::splat(offset),
            color: p.color,
            grain: options.grain.then_some(Rect {
                x: p.pos.x - r,
                y: p.pos.y - r,
                w: edge,
                h: edge,
            }),
        }
    }));
}
