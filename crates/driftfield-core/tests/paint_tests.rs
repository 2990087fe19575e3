// Paint plan layout and grain options.

use driftfield_core::{
    plan_frame, CircleDraw, DeviceTier, FieldConfig, PaintOptions, ParticleField, Rect, Viewport,
    SHADING_STOPS,
};
use glam::Vec2;

fn field() -> ParticleField {
    ParticleField::new(
        FieldConfig::default(),
        Viewport::new(1200.0, 900.0).unwrap(),
        DeviceTier::Standard,
        31,
    )
}

#[test]
fn plan_follows_particle_order() {
    let field = field();
    let mut out = Vec::new();
    plan_frame(field.particles(), &PaintOptions::default(), &mut out);
    assert_eq!(out.len(), field.particles().len());
    for (draw, p) in out.iter().zip(field.particles()) {
        assert_eq!(draw.center, p.pos);
        assert_eq!(draw.radius, p.radius());
        assert_eq!(draw.color, p.color);
    }
}

#[test]
fn focus_sits_up_and_left_of_center() {
    let field = field();
    let mut out = Vec::new();
    plan_frame(field.particles(), &PaintOptions::default(), &mut out);
    for d in &out {
        let off = d.center - d.focus;
        assert!(off.x > 0.0 && off.y > 0.0);
        assert!((off.x - d.radius * 0.65).abs() < 1e-3);
        assert!((d.focus - d.center).length() < d.radius);
    }
}

#[test]
fn grain_rect_anchors_at_top_left_of_circle() {
    let field = field();
    let mut out: Vec<CircleDraw> = Vec::new();
    plan_frame(field.particles(), &PaintOptions::default(), &mut out);
    let d = out[0];
    let r = d.radius;
    assert_eq!(
        d.grain,
        Some(Rect {
            x: d.center.x - r,
            y: d.center.y - r,
            w: r * 4.0,
            h: r * 4.0,
        })
    );
}

#[test]
fn constrained_tier_skips_grain() {
    let field = field();
    let mut out = Vec::new();
    plan_frame(
        field.particles(),
        &PaintOptions::for_tier(DeviceTier::Constrained),
        &mut out,
    );
    assert!(out.iter().all(|d| d.grain.is_none()));
    assert!(PaintOptions::for_tier(DeviceTier::Standard).grain);
}

#[test]
fn plan_buffer_is_reused() {
    let field = field();
    let mut out = vec![
        CircleDraw {
            center: Vec2::ZERO,
            radius: 1.0,
            focus: Vec2::ZERO,
            color: driftfield_core::PaletteColor::Red,
            grain: None,
        };
        100
    ];
    plan_frame(field.particles(), &PaintOptions::default(), &mut out);
    assert_eq!(out.len(), 36);
}

#[test]
fn grain_alpha_is_a_fraction() {
    let byte_style = PaintOptions {
        grain_alpha: 25.0,
        ..PaintOptions::default()
    };
    assert!((byte_style.effective_grain_alpha() - 25.0 / 255.0).abs() < 1e-6);
    assert_eq!(PaintOptions::default().effective_grain_alpha(), 0.1);
    let bogus = PaintOptions {
        grain_alpha: f32::NAN,
        ..PaintOptions::default()
    };
    assert_eq!(bogus.effective_grain_alpha(), 0.0);
}

#[test]
fn base_color_stop_follows_highlight_at_center() {
    assert_eq!(SHADING_STOPS[0].offset, 0.0);
    assert_eq!(SHADING_STOPS[1].lighten, 0);
    assert!(SHADING_STOPS
        .windows(2)
        .all(|w| w[0].offset <= w[1].offset));
    assert_eq!(SHADING_STOPS[3].offset, 1.0);
}
