use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::render;
use driftfield_core::{ParticleField, ResizeDebouncer, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub debouncer: Rc<RefCell<ResizeDebouncer>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Option<render::Renderer>,
    pub origin: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let settled = self.debouncer.borrow_mut().poll(now - self.origin);
        if let Some(vp) = settled {
            self.apply_resize(vp);
        }

        let Ok(mut field) = self.field.try_borrow_mut() else {
            return;
        };
        field.step(dt);
        if let Some(r) = &mut self.renderer {
            r.draw(field.particles(), field.viewport());
        }
    }

    fn apply_resize(&mut self, vp: Viewport) {
        let mut field = self.field.borrow_mut();
        if let Some(w) = web::window() {
            dom::sync_canvas_backing_size(
                &self.canvas,
                self.renderer.as_ref().map(|r| r.context()),
                vp,
                w.device_pixel_ratio(),
            );
            // Devtools emulation can flip the tier without a reload.
            if field.set_tier(dom::device_tier(&w)) {
                log::info!("[resize] device tier now {:?}", field.tier());
            }
        }
        if field.resize(vp) {
            log::info!("[resize] field reallocated for {:.0}x{:.0}", vp.width, vp.height);
        }
    }
}

/// Keeps the requestAnimationFrame chain alive; [`LoopHandle::cancel`] stops
/// it and releases the frame context.
pub struct LoopHandle {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Dropping the closure breaks its self-reference and frees the context.
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let cb = tick.borrow();
    w.request_animation_frame(cb.as_ref()?.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(mut ctx: FrameContext) -> LoopHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        ctx.frame();
        raf_clone.set(schedule(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(schedule(&tick));
    LoopHandle { tick, raf_id }
}
