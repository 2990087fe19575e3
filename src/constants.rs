// Front-end wiring constants

// Element the background mounts onto when the module starts
pub const CANVAS_ELEMENT_ID: &str = "bg-canvas";

// Quiet window before a resize reallocates the field
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

// Grain bitmap edge (px); drawn scaled, so it only needs to be large enough
// to avoid visible repetition on big particles
pub const GRAIN_TEXTURE_SIZE: u32 = 1024;

// Grain overlay opacity as a 0..1 fraction
pub const GRAIN_ALPHA: f32 = 0.1;

// Longest frame delta fed to the wave clock (s); keeps drift continuous after
// the tab was in the background
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
