// Host-side tests for the doodle field: generation, per-frame motion,
// resize behavior and alpha handling.

mod common;

use cinematch_web::constants::*;
use cinematch_web::{Doodle, DoodleField, DoodleKind, DrawingSurface, FieldOptions};
use common::{Op, RecordingSurface};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::{FRAC_PI_2, TAU};

fn seeded_field(count: usize, seed: u64) -> DoodleField<RecordingSurface> {
    let mut rng = StdRng::seed_from_u64(seed);
    DoodleField::new(RecordingSurface::new(1, 1), (800, 600), count, &mut rng)
}

fn star_at_100() -> Doodle {
    Doodle {
        position: DVec2::new(100.0, 100.0),
        size: 40.0,
        kind: DoodleKind::Star,
        rotation_angle: 0.0,
        rotation_speed: 0.01,
        float_phase_offset: 0.0,
        float_speed: 1.0,
        opacity: 0.2,
    }
}

#[test]
fn creates_exactly_count_doodles_and_keeps_them() {
    for n in [0usize, 1, 15, 40] {
        let mut field = seeded_field(n, 3);
        assert_eq!(field.doodles().len(), n);
        for frame in 0..25 {
            field.render_frame(frame as f64 / 60.0);
            if frame % 7 == 0 {
                field.resize(320 + frame, 240);
            }
        }
        assert_eq!(field.doodles().len(), n, "count changed for n={n}");
        assert_eq!(field.frames(), 25);
    }
}

#[test]
fn new_sizes_surface_to_viewport() {
    let field = seeded_field(3, 1);
    assert_eq!(field.surface().width(), 800);
    assert_eq!(field.surface().height(), 600);
}

#[test]
fn generated_doodles_stay_within_configured_ranges() {
    let field = seeded_field(200, 11);
    for d in field.doodles() {
        assert!(d.position.x >= 0.0 && d.position.x < 800.0);
        assert!(d.position.y >= 0.0 && d.position.y < 600.0);
        assert!(d.size >= DOODLE_SIZE_MIN && d.size < DOODLE_SIZE_MIN + DOODLE_SIZE_SPAN);
        assert!(d.rotation_angle >= 0.0 && d.rotation_angle < TAU);
        assert!(d.rotation_speed.abs() <= ROTATION_SPEED_SPAN / 2.0);
        assert!(d.float_phase_offset >= 0.0 && d.float_phase_offset < TAU);
        assert!(
            d.float_speed >= FLOAT_SPEED_MIN
                && d.float_speed < FLOAT_SPEED_MIN + FLOAT_SPEED_SPAN
        );
        assert!(d.opacity >= OPACITY_MIN && d.opacity < OPACITY_MIN + OPACITY_SPAN);
    }
}

#[test]
fn all_kinds_show_up_in_a_large_field() {
    let field = seeded_field(300, 5);
    for kind in DoodleKind::ALL {
        assert!(
            field.doodles().iter().any(|d| d.kind == kind),
            "{kind:?} never generated"
        );
    }
}

#[test]
fn zero_sized_viewport_still_generates() {
    let mut rng = StdRng::seed_from_u64(9);
    let field = DoodleField::new(RecordingSurface::new(0, 0), (0, 0), 4, &mut rng);
    assert_eq!(field.doodles().len(), 4);
    assert!(field.doodles().iter().all(|d| d.position == DVec2::ZERO));
}

#[test]
fn same_seed_gives_identical_doodles() {
    let a = seeded_field(15, 42);
    let b = seeded_field(15, 42);
    assert_eq!(a.doodles(), b.doodles());

    let c = seeded_field(15, 43);
    assert_ne!(a.doodles(), c.doodles());
}

#[test]
fn field_options_seed_is_reproducible() {
    let options = FieldOptions {
        seed: Some(1234),
        ..FieldOptions::default()
    };
    assert_eq!(options.count, DEFAULT_DOODLE_COUNT);
    let a = DoodleField::new(
        RecordingSurface::new(1, 1),
        (640, 480),
        options.count,
        &mut options.rng(),
    );
    let b = DoodleField::new(
        RecordingSurface::new(1, 1),
        (640, 480),
        options.count,
        &mut options.rng(),
    );
    assert_eq!(a.doodles(), b.doodles());
}

#[test]
fn rotation_advances_by_speed_per_frame_regardless_of_time() {
    let mut field = seeded_field(10, 8);
    let initial: Vec<(f64, f64)> = field
        .doodles()
        .iter()
        .map(|d| (d.rotation_angle, d.rotation_speed))
        .collect();
    // irregular clock: the angle must only depend on the frame count
    let times = [0.0, 0.001, 5.0, 5.0, 100.25, 3.0, 1e6];
    for (k, t) in times.iter().enumerate() {
        field.render_frame(*t);
        for (d, (a0, speed)) in field.doodles().iter().zip(&initial) {
            let expected = a0 + (k as f64 + 1.0) * speed;
            assert!((d.rotation_angle - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn drawn_x_is_fixed_and_y_only_floats() {
    let field = seeded_field(12, 21);
    for d in field.doodles() {
        for t in [0.0, 0.3, 1.7, 12.5, 999.0] {
            let p = d.drawn_position(t);
            assert_eq!(p.x, d.position.x);
            let phase = t * d.float_speed + d.float_phase_offset;
            let expected = d.position.y + phase.sin() * FLOAT_AMPLITUDE;
            assert!((p.y - expected).abs() < 1e-9);
            assert!((p.y - d.position.y).abs() <= FLOAT_AMPLITUDE + 1e-9);
        }
    }
}

#[test]
fn resize_only_touches_surface() {
    let mut field = seeded_field(15, 77);
    let before: Vec<Doodle> = field.doodles().to_vec();
    field.resize(200, 100);
    assert_eq!(field.surface().width(), 200);
    assert_eq!(field.surface().height(), 100);
    assert_eq!(field.doodles(), &before[..]);
    // doodles outside the shrunken surface are left where they are
    assert!(field
        .doodles()
        .iter()
        .any(|d| d.position.x > 200.0 || d.position.y > 100.0));
}

#[test]
fn frames_leave_everything_but_rotation_untouched() {
    let mut field = seeded_field(15, 4);
    let before: Vec<Doodle> = field.doodles().to_vec();
    for i in 0..30 {
        field.render_frame(i as f64 * 0.016);
    }
    for (a, b) in before.iter().zip(field.doodles()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.size, b.size);
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.rotation_speed, b.rotation_speed);
        assert_eq!(a.float_phase_offset, b.float_phase_offset);
        assert_eq!(a.float_speed, b.float_speed);
        assert_eq!(a.opacity, b.opacity);
    }
}

#[test]
fn star_scenario() {
    let mut field = DoodleField::from_doodles(RecordingSurface::new(800, 600), vec![star_at_100()]);
    let star = &field.doodles()[0];
    assert_eq!(star.drawn_position(0.0), DVec2::new(100.0, 100.0));
    assert_eq!(star.rotation_angle, 0.0);
    assert!((star.drawn_position(FRAC_PI_2).y - 110.0).abs() < 1e-9);

    field.render_frame(0.0);
    assert!((field.doodles()[0].rotation_angle - 0.01).abs() < 1e-12);
    let ops = &field.surface().ops;
    assert!(ops.contains(&Op::Translate(100.0, 100.0)));
    assert!(ops.contains(&Op::Rotate(0.01)));
}

#[test]
fn frame_clears_first_and_scopes_alpha_per_doodle() {
    let mut field = seeded_field(6, 13);
    field.surface_mut().take_ops();
    field.render_frame(2.0);
    let ops = &field.surface().ops;
    assert_eq!(ops.first(), Some(&Op::Clear));
    assert_eq!(ops.last(), Some(&Op::Alpha(1.0)));
    assert_eq!(field.surface().alpha, 1.0);

    // one set + one restore per doodle, plus the final reset
    let alphas: Vec<f64> = ops
        .iter()
        .filter_map(|op| match op {
            Op::Alpha(a) => Some(*a),
            _ => None,
        })
        .collect();
    assert_eq!(alphas.len(), field.doodles().len() * 2 + 1);
    for (i, d) in field.doodles().iter().enumerate() {
        assert_eq!(alphas[2 * i], d.opacity);
        assert_eq!(alphas[2 * i + 1], 1.0);
    }
    assert_eq!(field.surface().count(|op| *op == Op::Save), field.doodles().len());
    assert_eq!(field.surface().count(|op| *op == Op::Restore), field.doodles().len());
}

#[test]
fn empty_field_still_clears_each_frame() {
    let mut field = seeded_field(0, 1);
    field.render_frame(1.0);
    field.render_frame(2.0);
    assert_eq!(field.surface().count(|op| *op == Op::Clear), 2);
}
