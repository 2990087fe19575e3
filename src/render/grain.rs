use anyhow::anyhow;
use driftfield_core::GrainTexture;
use rand::Rng;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// Render a fresh grain texture into an offscreen canvas once, so every frame
/// can blit it with `drawImage`.
pub fn build_grain_canvas<R: Rng + ?Sized>(
    document: &web::Document,
    edge: u32,
    rng: &mut R,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_width(edge);
    canvas.set_height(edge);
    let ctx = crate::dom::context_2d(&canvas).ok_or_else(|| anyhow!("no 2d context for grain"))?;

    let texture = GrainTexture::generate(edge, rng);
    let image = web::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(texture.as_bytes()),
        texture.edge(),
        texture.edge(),
    )
    .map_err(|e| anyhow!("{:?}", e))?;
    ctx.put_image_data(&image, 0.0, 0.0)
        .map_err(|e| anyhow!("{:?}", e))?;
    log::debug!("[render] grain texture {}x{}", edge, edge);
    Ok(canvas)
}
