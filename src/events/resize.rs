use crate::dom;
use crate::events::Listeners;
use driftfield_core::ResizeDebouncer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Queue every window resize into the debouncer; the frame loop applies the
/// last one once the quiet window has passed.
pub fn wire_resize(
    window: &web::Window,
    debouncer: &Rc<RefCell<ResizeDebouncer>>,
    origin: Instant,
    listeners: &mut Listeners,
) -> anyhow::Result<()> {
    let d = debouncer.clone();
    let w = window.clone();
    listeners.add(window, "resize", move |_| match dom::viewport(&w) {
        Some(vp) => d.borrow_mut().request(vp, origin.elapsed()),
        None => log::debug!("[resize] viewport unavailable, event ignored"),
    })
}
