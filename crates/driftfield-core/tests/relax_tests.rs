// Overlap relaxation and pointer repulsion properties.

use driftfield_core::sim::{relax_once, relax_overlaps, repulsion, total_penetration};
use driftfield_core::{FieldConfig, PaletteColor, Particle, RELAX_FACTOR, RELAX_ITERATIONS};
use glam::Vec2;

fn particle(x: f32, y: f32, size: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        size,
        color: PaletteColor::Blue,
        phase: 0.0,
    }
}

fn assert_non_increasing(mut ps: Vec<Particle>, passes: usize) {
    let mut prev = total_penetration(&ps);
    for pass in 0..passes {
        relax_once(&mut ps, RELAX_FACTOR);
        let now = total_penetration(&ps);
        assert!(
            now <= prev + 1e-3,
            "penetration grew on pass {}: {} -> {}",
            pass,
            prev,
            now
        );
        prev = now;
    }
}

#[test]
fn two_overlapping_particles_separate_without_overshoot() {
    let mut ps = vec![particle(200.0, 200.0, 100.0), particle(260.0, 200.0, 100.0)];

    relax_once(&mut ps, RELAX_FACTOR);
    let d1 = ps[0].pos.distance(ps[1].pos);
    assert!(d1 > 60.0 && d1 < 100.0, "first pass distance {}", d1);

    relax_once(&mut ps, RELAX_FACTOR);
    relax_once(&mut ps, RELAX_FACTOR);
    let d3 = ps[0].pos.distance(ps[1].pos);
    assert!(d3 >= 99.0 && d3 <= 100.0, "third pass distance {}", d3);

    // Symmetric: the midpoint does not move.
    let mid = (ps[0].pos + ps[1].pos) * 0.5;
    assert!((mid - Vec2::new(230.0, 200.0)).length() < 1e-3);
}

#[test]
fn relaxation_edits_position_only() {
    let mut ps = vec![particle(0.0, 0.0, 100.0), particle(30.0, 40.0, 100.0)];
    ps[0].vel = Vec2::new(1.5, -0.5);
    relax_overlaps(&mut ps, RELAX_ITERATIONS, RELAX_FACTOR);
    assert_eq!(ps[0].vel, Vec2::new(1.5, -0.5));
    assert_eq!(ps[1].vel, Vec2::ZERO);
    // Pushed apart along the 3-4-5 normal.
    let dir = (ps[1].pos - ps[0].pos).normalize();
    assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-4);
}

#[test]
fn separated_particles_are_untouched() {
    let mut ps = vec![particle(0.0, 0.0, 100.0), particle(150.0, 0.0, 100.0)];
    let before = ps.clone();
    relax_overlaps(&mut ps, RELAX_ITERATIONS, RELAX_FACTOR);
    assert_eq!(ps, before);
    assert_eq!(total_penetration(&ps), 0.0);
}

#[test]
fn penetration_non_increasing_on_a_row() {
    let ps = (0..5).map(|i| particle(i as f32 * 80.0, 0.0, 100.0)).collect();
    assert_non_increasing(ps, 6);
}

#[test]
fn penetration_non_increasing_on_a_dense_grid() {
    let ps = (0..16)
        .map(|k| particle(100.0 + 70.0 * (k / 4) as f32, 100.0 + 70.0 * (k % 4) as f32, 100.0))
        .collect();
    assert_non_increasing(ps, 6);
}

#[test]
fn penetration_non_increasing_on_mixed_sizes() {
    let ps = (0..8)
        .map(|i| {
            particle(
                300.0 + 25.0 * i as f32,
                300.0 + 13.0 * ((i * 7) % 5) as f32,
                80.0 + 10.0 * i as f32,
            )
        })
        .collect();
    assert_non_increasing(ps, 6);
}

#[test]
fn repulsion_decreases_with_distance_and_vanishes_at_reach() {
    let cfg = FieldConfig::default();
    let size = 120.0;
    let reach = cfg.push_radius + size / 2.0;
    let pointer = Vec2::new(0.0, 0.0);

    let mut prev = f32::INFINITY;
    let mut d = 1.0;
    while d < reach {
        let push = repulsion(Vec2::new(d, 0.0), size, pointer, &cfg)
            .expect("inside reach must repel");
        // Directed away from the pointer.
        assert!(push.x > 0.0);
        assert!(push.y.abs() < 1e-6);
        let mag = push.length();
        assert!(mag < prev, "magnitude {} at {} not below {}", mag, d, prev);
        prev = mag;
        d += 25.0;
    }
    assert!(repulsion(Vec2::new(reach, 0.0), size, pointer, &cfg).is_none());
    assert!(repulsion(Vec2::new(reach + 50.0, 0.0), size, pointer, &cfg).is_none());
}

#[test]
fn repulsion_is_linear_in_distance() {
    let cfg = FieldConfig::default();
    let size = 100.0;
    let reach = cfg.push_radius + size / 2.0;
    let half = repulsion(Vec2::new(0.0, reach / 2.0), size, Vec2::ZERO, &cfg).unwrap();
    assert!((half.length() - cfg.push_strength * 0.5).abs() < 1e-4);
    assert!(half.y > 0.0);
}

#[test]
fn repulsion_undefined_on_the_pointer() {
    let cfg = FieldConfig::default();
    assert!(repulsion(Vec2::new(5.0, 5.0), 100.0, Vec2::new(5.0, 5.0), &cfg).is_none());
}
