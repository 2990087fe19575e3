use crate::constants::*;
use crate::tier::DeviceTier;

/// Tuning for one particle field. Defaults reproduce the site's look.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub constrained_count: usize,
    pub standard_count: usize,
    pub min_size: f32,
    pub max_size: f32,
    pub large_threshold: f32,
    pub max_large_count: usize,
    pub large_probability: f32,

    pub push_radius: f32,
    pub push_strength: f32,

    pub wave_primary_amp: f32,
    pub wave_secondary_amp: f32,
    pub jitter_span: f32,

    pub damping: f32,
    pub velocity_floor: f32,
    pub floor_attenuation: f32,

    pub relax_iterations: usize,
    pub relax_factor: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            constrained_count: CONSTRAINED_COUNT,
            standard_count: STANDARD_COUNT,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            large_threshold: MAX_SIZE_THRESHOLD,
            max_large_count: MAX_LARGE_COUNT,
            large_probability: LARGE_PROBABILITY,
            push_radius: PUSH_RADIUS,
            push_strength: PUSH_STRENGTH,
            wave_primary_amp: WAVE_PRIMARY_AMP,
            wave_secondary_amp: WAVE_SECONDARY_AMP,
            jitter_span: JITTER_SPAN,
            damping: DAMPING,
            velocity_floor: VELOCITY_FLOOR,
            floor_attenuation: FLOOR_ATTENUATION,
            relax_iterations: RELAX_ITERATIONS,
            relax_factor: RELAX_FACTOR,
        }
    }
}

impl FieldConfig {
    pub fn count_for(&self, tier: DeviceTier) -> usize {
        match tier {
            DeviceTier::Constrained => self.constrained_count,
            DeviceTier::Standard => self.standard_count,
        }
    }
}
