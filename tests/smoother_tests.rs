// Host-side tests for exponential pointer smoothing and velocity.

use glam::Vec2;
use proptest::prelude::*;
use reveal_core::PointerState;

#[test]
fn closes_fixed_fraction_of_gap() {
    let mut p = PointerState::new(Vec2::ZERO);
    p.update(Vec2::new(100.0, 0.0), 0.25);
    assert_eq!(p.display, Vec2::new(25.0, 0.0));
    assert_eq!(p.velocity, 25.0);
    p.update(Vec2::new(100.0, 0.0), 0.25);
    assert!((p.display.x - 43.75).abs() < 1e-4);
    assert!((p.velocity - 18.75).abs() < 1e-4);
}

#[test]
fn full_smoothing_tracks_target_exactly() {
    let mut p = PointerState::new(Vec2::ZERO);
    p.update(Vec2::new(30.0, 40.0), 1.0);
    assert_eq!(p.display, Vec2::new(30.0, 40.0));
    assert_eq!(p.velocity, 50.0);
}

#[test]
fn velocity_zero_when_display_unchanged() {
    let mut p = PointerState::new(Vec2::new(12.0, 34.0));
    p.update(Vec2::new(12.0, 34.0), 0.12);
    assert_eq!(p.velocity, 0.0);
    p.update(Vec2::new(12.0, 34.0), 0.12);
    assert_eq!(p.velocity, 0.0);
}

#[test]
fn snap_resets_velocity_and_history() {
    let mut p = PointerState::new(Vec2::ZERO);
    p.update(Vec2::new(500.0, 500.0), 0.5);
    p.snap(Vec2::new(10.0, 10.0));
    assert_eq!(p.display, Vec2::new(10.0, 10.0));
    assert_eq!(p.prev, Vec2::new(10.0, 10.0));
    assert_eq!(p.velocity, 0.0);
    p.update(Vec2::new(10.0, 10.0), 0.5);
    assert_eq!(p.velocity, 0.0);
}

fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

proptest! {
    #[test]
    fn converges_without_overshoot(
        sx in coord(), sy in coord(),
        tx in coord(), ty in coord(),
        smoothing in 0.05f32..=1.0,
    ) {
        let target = Vec2::new(tx, ty);
        let mut p = PointerState::new(Vec2::new(sx, sy));
        let mut gap = p.display.distance(target);
        for _ in 0..2000 {
            if gap < 0.5 {
                break;
            }
            let before = target - p.display;
            p.update(target, smoothing);
            let after = target - p.display;
            let next_gap = p.display.distance(target);
            prop_assert!(next_gap < gap, "gap grew from {} to {}", gap, next_gap);
            // Never crosses the target on either axis.
            prop_assert!(after.x.abs() < 1e-3 || before.x.signum() == after.x.signum());
            prop_assert!(after.y.abs() < 1e-3 || before.y.signum() == after.y.signum());
            prop_assert!(p.velocity >= 0.0);
            gap = next_gap;
        }
        prop_assert!(gap < 0.5);
    }
}
