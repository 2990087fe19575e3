use crate::events::Listeners;
use driftfield_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse and single-touch positions feed the field's pointer; leaving the
/// page or lifting the finger clears it. Coordinates are client (viewport)
/// pixels, which match the full-viewport canvas.
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    field: &Rc<RefCell<ParticleField>>,
    listeners: &mut Listeners,
) -> anyhow::Result<()> {
    let f = field.clone();
    listeners.add(window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            if let Ok(mut field) = f.try_borrow_mut() {
                field.set_pointer(ev.client_x() as f32, ev.client_y() as f32);
            }
        }
    })?;

    let f = field.clone();
    listeners.add_passive(window, "touchmove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        // An empty touch list carries no position; keep the previous one.
        if let Some(t) = ev.touches().get(0) {
            if let Ok(mut field) = f.try_borrow_mut() {
                field.set_pointer(t.client_x() as f32, t.client_y() as f32);
            }
        }
    })?;

    // `mouseleave` only fires on elements, so listen on the root element.
    if let Some(root) = document.document_element() {
        let f = field.clone();
        listeners.add(&root, "mouseleave", move |_| clear(&f))?;
    }
    for kind in ["touchend", "touchcancel"] {
        let f = field.clone();
        listeners.add(window, kind, move |_| clear(&f))?;
    }
    Ok(())
}

fn clear(field: &Rc<RefCell<ParticleField>>) {
    if let Ok(mut field) = field.try_borrow_mut() {
        field.clear_pointer();
    }
}
