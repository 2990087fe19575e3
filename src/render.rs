use crate::constants::{GRAIN_ALPHA, GRAIN_TEXTURE_SIZE};
use crate::dom;
use driftfield_core::{
    plan_frame, CircleDraw, ColorStops, DeviceTier, PaintOptions, Particle, Viewport,
    SHADING_STOPS,
};
use rand::Rng;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

mod grain;

/// Draws the particle set onto a 2D context: a lit radial gradient per
/// circle, then the grain texture multiplied in, clipped to the circle.
pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
    grain: Option<web::HtmlCanvasElement>,
    options: PaintOptions,
    stops: ColorStops,
    plan: Vec<CircleDraw>,
}

impl Renderer {
    /// `None` when the canvas has no 2D context; the caller keeps simulating
    /// and simply draws nothing.
    pub fn new<R: Rng + ?Sized>(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        tier: DeviceTier,
        rng: &mut R,
    ) -> Option<Self> {
        let ctx = dom::context_2d(canvas)?;
        let mut options = PaintOptions {
            grain_alpha: GRAIN_ALPHA,
            ..PaintOptions::for_tier(tier)
        };
        let grain = if options.grain {
            match grain::build_grain_canvas(document, GRAIN_TEXTURE_SIZE, rng) {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("[render] grain texture unavailable: {:?}", e);
                    None
                }
            }
        } else {
            None
        };
        options.grain = grain.is_some();
        Some(Self {
            ctx,
            grain,
            options,
            stops: ColorStops::new(),
            plan: Vec::new(),
        })
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn draw(&mut self, particles: &[Particle], viewport: Viewport) {
        let Self {
            ctx,
            grain,
            options,
            stops,
            plan,
        } = self;
        ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        plan_frame(particles, options, plan);
        let alpha = options.effective_grain_alpha() as f64;
        for d in plan.iter() {
            if let Err(e) = fill_lit_circle(ctx, stops, d) {
                log::debug!("[render] circle skipped: {:?}", e);
                continue;
            }
            if let (Some(tex), Some(_)) = (grain.as_ref(), d.grain) {
                if let Err(e) = overlay_grain(ctx, tex, alpha, d) {
                    log::debug!("[render] grain skipped: {:?}", e);
                }
            }
        }
    }
}

fn trace_circle(ctx: &web::CanvasRenderingContext2d, d: &CircleDraw) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(d.center.x as f64, d.center.y as f64, d.radius as f64, 0.0, TAU)
}

fn fill_lit_circle(
    ctx: &web::CanvasRenderingContext2d,
    stops: &mut ColorStops,
    d: &CircleDraw,
) -> Result<(), JsValue> {
    let g = ctx.create_radial_gradient(
        d.focus.x as f64,
        d.focus.y as f64,
        0.0,
        d.center.x as f64,
        d.center.y as f64,
        d.radius as f64,
    )?;
    for s in SHADING_STOPS {
        g.add_color_stop(s.offset, stops.get(d.color, s.lighten))?;
    }
    trace_circle(ctx, d)?;
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.fill();
    Ok(())
}

fn overlay_grain(
    ctx: &web::CanvasRenderingContext2d,
    tex: &web::HtmlCanvasElement,
    alpha: f64,
    d: &CircleDraw,
) -> Result<(), JsValue> {
    let Some(dst) = d.grain else {
        return Ok(());
    };
    ctx.save();
    let res = (|| {
        trace_circle(ctx, d)?;
        ctx.clip();
        ctx.set_global_composite_operation("multiply")?;
        ctx.set_global_alpha(alpha);
        let edge = tex.width() as f64;
        ctx.draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            tex,
            0.0,
            0.0,
            edge,
            edge,
            dst.x as f64,
            dst.y as f64,
            dst.w as f64,
            dst.h as f64,
        )
    })();
    ctx.restore();
    res
}
