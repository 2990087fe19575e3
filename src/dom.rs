use crate::surface;
use driftfield_core::{classify_user_agent, DeviceTier, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Logical viewport from `innerWidth`/`innerHeight`.
pub fn viewport(window: &web::Window) -> Option<Viewport> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Viewport::new(w as f32, h as f32).ok()
}

/// Classify the device from `navigator.userAgentData.mobile` and the UA string.
pub fn device_tier(window: &web::Window) -> DeviceTier {
    let navigator = window.navigator();
    let ua = navigator.user_agent().unwrap_or_default();
    let ua_data_mobile = js_sys::Reflect::get(&navigator, &JsValue::from_str("userAgentData"))
        .ok()
        .filter(|d| d.is_object())
        .and_then(|d| js_sys::Reflect::get(&d, &JsValue::from_str("mobile")).ok())
        .and_then(|m| m.as_bool());
    classify_user_agent(&ua, ua_data_mobile)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Size the canvas backing store to `viewport * dpr`, keep its CSS size
/// logical, and scale the context so drawing stays in logical pixels.
/// Skipped entirely when the pixel ratio is unusable.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: Option<&web::CanvasRenderingContext2d>,
    viewport: Viewport,
    reported_dpr: f64,
) {
    let Some(dpr) = surface::effective_dpr(reported_dpr) else {
        log::warn!("[resize] device pixel ratio unavailable, backing store left as is");
        return;
    };
    let (w_px, h_px) = surface::backing_size(viewport.width, viewport.height, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &surface::css_px(viewport.width));
    _ = style.set_property("height", &surface::css_px(viewport.height));
    if let Some(ctx) = ctx {
        // Resizing the canvas resets its transform.
        if let Err(e) = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("[resize] set_transform failed: {:?}", e);
        }
    }
}
