// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use driftfield_core::PaintOptions;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(!CANVAS_ELEMENT_ID.is_empty());
    // Long enough to coalesce a drag-resize, short enough to feel immediate
    assert!(RESIZE_DEBOUNCE_MS >= 50 && RESIZE_DEBOUNCE_MS <= 500);
    assert!(GRAIN_TEXTURE_SIZE.is_power_of_two());
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 1.0);
}

#[test]
fn grain_alpha_is_a_fraction() {
    assert!(GRAIN_ALPHA > 0.0 && GRAIN_ALPHA <= 1.0);
    let opts = PaintOptions {
        grain_alpha: GRAIN_ALPHA,
        ..PaintOptions::default()
    };
    assert_eq!(opts.effective_grain_alpha(), GRAIN_ALPHA);
}
