// Shared tuning constants for the particle field.

// Population per device tier
pub const CONSTRAINED_COUNT: usize = 10;
pub const STANDARD_COUNT: usize = 36;

// Particle diameters (logical px)
pub const MIN_SIZE: f32 = 80.0;
pub const MAX_SIZE: f32 = 280.0;
pub const MAX_SIZE_THRESHOLD: f32 = 270.0; // lower edge of the "large" band
pub const MAX_LARGE_COUNT: usize = 2; // cap on large particles, constrained tier only
pub const LARGE_PROBABILITY: f32 = 0.15; // per-particle chance to try the large band

// Pointer repulsion
pub const PUSH_RADIUS: f32 = 600.0;
pub const PUSH_STRENGTH: f32 = 2.5;

// Ambient drift: two sinusoids per axis, amplitudes and angular frequencies
pub const WAVE_PRIMARY_AMP: f32 = 0.08;
pub const WAVE_SECONDARY_AMP: f32 = 0.04;
pub const WAVE_X_FREQ: [f32; 2] = [1.1, 0.7];
pub const WAVE_Y_FREQ: [f32; 2] = [0.9, 0.6];
pub const WAVE_X_PHASE_MUL: [f32; 2] = [1.0, 1.5];
pub const WAVE_Y_PHASE_MUL: [f32; 2] = [1.2, 0.8];
pub const JITTER_SPAN: f32 = 0.06; // uniform in [-span/2, span/2]

// Velocity conditioning
pub const DAMPING: f32 = 0.9;
pub const VELOCITY_FLOOR: f32 = 0.02;
pub const FLOOR_ATTENUATION: f32 = 0.5;

// Overlap relaxation
pub const RELAX_ITERATIONS: usize = 3;
pub const RELAX_FACTOR: f32 = 0.8; // fraction of overlap/2 each particle moves per pass

// Shading
pub const LIGHT_OFFSET_FACTOR: f32 = 0.65; // focal point offset, fraction of radius
pub const GRAIN_BLIT_SCALE: f32 = 4.0; // grain destination edge, multiple of radius
pub const DEFAULT_GRAIN_ALPHA: f32 = 0.1;

// Grain texture pixel statistics
pub const GRAIN_LUMA_MID: f32 = 128.0;
pub const GRAIN_LUMA_SPAN: f32 = 60.0;
pub const GRAIN_ALPHA_MIN: u8 = 4;
pub const GRAIN_ALPHA_MAX: u8 = 27;
