#![cfg(target_arch = "wasm32")]
use driftfield_core::{FieldConfig, ParticleField, ResizeDebouncer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod surface;

use constants::{CANVAS_ELEMENT_ID, RESIZE_DEBOUNCE_MS};

struct Mounted {
    field: Rc<RefCell<ParticleField>>,
    debouncer: Rc<RefCell<ResizeDebouncer>>,
    listeners: events::Listeners,
    frame_loop: frame::LoopHandle,
}

/// A particle background attached to a canvas. Dropping it (or calling
/// `unmount`) stops the frame loop and detaches every listener.
#[wasm_bindgen]
pub struct Background {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Background {
    pub fn unmount(&mut self) {
        if let Some(mut m) = self.mounted.take() {
            m.frame_loop.cancel();
            m.listeners.remove_all();
            m.debouncer.borrow_mut().cancel();
            log::info!("[field] unmounted");
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .and_then(|m| m.field.try_borrow().ok().map(|f| f.particles().len()))
            .unwrap_or(0)
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.unmount();
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<Background>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("driftfield starting");

    let present = dom::window_document()
        .and_then(|(_, d)| d.get_element_by_id(CANVAS_ELEMENT_ID))
        .is_some();
    if present {
        match mount(CANVAS_ELEMENT_ID) {
            Ok(bg) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(bg)),
            Err(e) => log::error!("mount error: {:?}", e),
        }
    } else {
        log::info!("no #{} element, waiting for mountBackground()", CANVAS_ELEMENT_ID);
    }
    Ok(())
}

#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background(canvas_id: &str) -> Result<Background, JsValue> {
    mount(canvas_id).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear down the background mounted automatically at start, if any.
#[wasm_bindgen(js_name = unmountBackground)]
pub fn unmount_background() {
    AUTO_MOUNTED.with(|slot| drop(slot.borrow_mut().take()));
}

fn mount(canvas_id: &str) -> anyhow::Result<Background> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::viewport(&window).ok_or_else(|| anyhow::anyhow!("viewport unavailable"))?;
    let tier = dom::device_tier(&window);
    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldConfig::default(),
        viewport,
        tier,
        rand::random(),
    )));

    let renderer = render::Renderer::new(&document, &canvas, tier, &mut rand::thread_rng());
    if renderer.is_none() {
        log::warn!("[render] no 2d context on #{}, drawing disabled", canvas_id);
    }
    dom::sync_canvas_backing_size(
        &canvas,
        renderer.as_ref().map(|r| r.context()),
        viewport,
        window.device_pixel_ratio(),
    );

    let origin = Instant::now();
    let debouncer = Rc::new(RefCell::new(ResizeDebouncer::new(Duration::from_millis(
        RESIZE_DEBOUNCE_MS,
    ))));
    let mut listeners = events::Listeners::default();
    events::wire_pointer_handlers(&window, &document, &field, &mut listeners)?;
    events::wire_resize(&window, &debouncer, origin, &mut listeners)?;

    let frame_loop = frame::start_loop(frame::FrameContext {
        field: field.clone(),
        debouncer: debouncer.clone(),
        canvas,
        renderer,
        origin,
        last_instant: origin,
    });

    log::info!(
        "[field] mounted on #{}: {} particles, {:?} tier, {} listeners",
        canvas_id,
        field.borrow().particles().len(),
        tier,
        listeners.len()
    );
    Ok(Background {
        mounted: Some(Mounted {
            field,
            debouncer,
            listeners,
            frame_loop,
        }),
    })
}
