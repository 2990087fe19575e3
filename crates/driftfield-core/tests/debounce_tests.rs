// Resize coalescing.

use driftfield_core::{ResizeDebouncer, Viewport};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn vp(w: f32, h: f32) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn burst_delivers_only_the_last_size() {
    let mut d = ResizeDebouncer::new(ms(150));
    d.request(vp(800.0, 600.0), ms(0));
    d.request(vp(900.0, 600.0), ms(50));
    d.request(vp(1000.0, 600.0), ms(100));

    // Each request restarts the window.
    assert_eq!(d.poll(ms(200)), None);
    assert!(d.is_pending());
    assert_eq!(d.poll(ms(250)), Some(vp(1000.0, 600.0)));
    assert_eq!(d.poll(ms(400)), None);
    assert!(!d.is_pending());
}

#[test]
fn nothing_pending_means_nothing_delivered() {
    let mut d = ResizeDebouncer::new(ms(150));
    assert_eq!(d.poll(ms(10_000)), None);
}

#[test]
fn cancel_drops_pending_resize() {
    let mut d = ResizeDebouncer::new(ms(150));
    d.request(vp(640.0, 480.0), ms(0));
    d.cancel();
    assert_eq!(d.poll(ms(1_000)), None);
}
