// Pointer smoothing and parallax offsets.

use glam::Vec2;
use starfield_core::pointer::depth_factor;
use starfield_core::PointerTracker;

#[test]
fn starts_centered() {
    let t = PointerTracker::new(0.08, false);
    assert_eq!(t.raw(), Vec2::new(0.5, 0.5));
    assert_eq!(t.smoothed(), Vec2::new(0.5, 0.5));
    assert_eq!(t.parallax_offset(2, 36.0), Vec2::ZERO);
}

#[test]
fn pointer_move_normalizes_and_clamps() {
    let mut t = PointerTracker::new(0.08, false);
    t.on_pointer_move(200.0, 150.0, 800.0, 600.0);
    assert_eq!(t.raw(), Vec2::new(0.25, 0.25));
    t.on_pointer_move(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(t.raw(), Vec2::new(0.0, 1.0));
    // Moving does not touch the smoothed position until a tick
    assert_eq!(t.smoothed(), Vec2::new(0.5, 0.5));
}

#[test]
fn pointer_move_on_empty_viewport_is_ignored() {
    let mut t = PointerTracker::new(0.08, false);
    t.on_pointer_move(10.0, 10.0, 0.0, 600.0);
    assert_eq!(t.raw(), Vec2::new(0.5, 0.5));
}

#[test]
fn pointer_leave_changes_nothing() {
    let mut t = PointerTracker::new(0.08, false);
    t.on_pointer_move(800.0, 600.0, 800.0, 600.0);
    t.tick();
    let (raw, smoothed) = (t.raw(), t.smoothed());
    t.on_pointer_leave();
    assert_eq!(t.raw(), raw);
    assert_eq!(t.smoothed(), smoothed);
}

#[test]
fn one_tick_toward_corner_matches_lag() {
    let mut t = PointerTracker::new(0.08, false);
    t.on_pointer_move(800.0, 600.0, 800.0, 600.0);
    t.tick();
    let s = t.smoothed();
    assert!((s.x - 0.54).abs() < 1e-6);
    assert!((s.y - 0.54).abs() < 1e-6);
}

#[test]
fn smoothing_converges_geometrically() {
    let c = 0.08_f32;
    let p0 = 0.5_f32;
    let p1 = 0.9_f32;
    let mut t = PointerTracker::new(c, false);
    t.on_pointer_move(p1 * 1000.0, p1 * 1000.0, 1000.0, 1000.0);
    for n in 1..=200 {
        t.tick();
        let expected = p1 - (p1 - p0) * (1.0 - c).powi(n);
        assert!(
            (t.smoothed().x - expected).abs() < 1e-4,
            "tick {n}: {} vs {expected}",
            t.smoothed().x
        );
    }
    assert!((t.smoothed().x - p1).abs() < 1e-5);
}

#[test]
fn reduced_motion_snaps_in_one_tick() {
    let mut t = PointerTracker::new(0.08, true);
    t.on_pointer_move(120.0, 480.0, 800.0, 600.0);
    t.tick();
    assert_eq!(t.smoothed(), t.raw());
    assert_eq!(t.effective_lag(), 1.0);
}

#[test]
fn parallax_scales_with_depth() {
    assert!(depth_factor(0) < depth_factor(1));
    assert!(depth_factor(1) < depth_factor(2));

    let mut t = PointerTracker::new(1.0, false);
    t.on_pointer_move(800.0, 0.0, 800.0, 600.0);
    t.tick();
    let offsets = t.parallax_offsets(36.0);
    assert!((offsets[0].x - 0.5 * 36.0 * 0.2).abs() < 1e-5);
    assert!((offsets[1].x - 0.5 * 36.0 * 0.65).abs() < 1e-5);
    assert!((offsets[2].x - 0.5 * 36.0 * 1.1).abs() < 1e-5);
    assert!((offsets[2].y + 0.5 * 36.0 * 1.1).abs() < 1e-5);
}
