// Backing-store math for a DPR-aware canvas. Pure, so it can be tested on host.

/// Usable device pixel ratio, or `None` when the browser reports nothing
/// sensible.
#[inline]
pub fn effective_dpr(reported: f64) -> Option<f64> {
    (reported.is_finite() && reported > 0.0).then_some(reported)
}

/// Physical backing-store size for a logical viewport.
#[inline]
pub fn backing_size(width: f32, height: f32, dpr: f64) -> (u32, u32) {
    let w = (width as f64 * dpr).round().max(1.0) as u32;
    let h = (height as f64 * dpr).round().max(1.0) as u32;
    (w, h)
}

#[inline]
pub fn css_px(v: f32) -> String {
    format!("{}px", v)
}
