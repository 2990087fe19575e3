use crate::color::PaletteColor;
use crate::error::FieldError;
use glam::Vec2;

/// Logical (CSS pixel) viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(FieldError::InvalidViewport { width, height })
        }
    }

    #[inline]
    pub fn min_extent(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True when a circle of `radius` centered at `pos` lies fully inside.
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Diameter in logical px.
    pub size: f32,
    pub color: PaletteColor,
    /// Wave offset in `[0, 2π)`.
    pub phase: f32,
}

impl Particle {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }
}
