// Host-side tests for per-frame sequencing in the reveal engine.

use glam::Vec2;
use reveal_core::{InputDevice, RevealConfig, RevealEngine, SurfaceMetrics};

const SIZE: Vec2 = Vec2::new(400.0, 300.0);

fn engine_with(config: RevealConfig, ui_count: usize) -> RevealEngine {
    let mut engine = RevealEngine::new(config, InputDevice::Mouse, ui_count);
    engine.set_surface(SurfaceMetrics::new(SIZE, 1.0));
    engine
}

#[test]
fn starts_parked_and_inactive() {
    let engine = engine_with(RevealConfig::default(), 0);
    assert!(!engine.is_active());
    assert_eq!(engine.pointer().display, Vec2::new(-1000.0, -1000.0));
    assert!(engine.mask_plan(true).is_none());
    assert!(engine.parallax().is_none());
}

#[test]
fn spotlight_profile_matches_configured_radii() {
    let mut config = RevealConfig::default();
    config.spotlight.radius = 160.0;
    config.spotlight.edge_softness = 80.0;
    let mut engine = engine_with(config, 0);
    let mut input = engine.pointer_input();

    let center = SIZE * 0.5;
    input.mouse_enter(center, 0.0);
    engine.tick(&input, 0.0);

    let plan = engine.mask_plan(true).expect("active spotlight paints");
    let spot = plan.discs.last().unwrap();
    assert_eq!(spot.center, center);
    assert_eq!(spot.radius, 240.0);
    assert_eq!(plan.alpha_at(center), 1.0);
    assert_eq!(plan.alpha_at(center + Vec2::new(56.0, 0.0)), 1.0);
    assert_eq!(plan.alpha_at(center + Vec2::new(0.0, 240.0)), 0.0);
    assert_eq!(plan.alpha_at(center + Vec2::new(300.0, 0.0)), 0.0);
}

#[test]
fn activation_snaps_without_velocity() {
    let mut engine = engine_with(RevealConfig::default(), 0);
    let mut input = engine.pointer_input();
    input.mouse_enter(Vec2::new(100.0, 100.0), 0.0);
    let report = engine.tick(&input, 0.0);

    assert!(report.active);
    assert!(!report.spawned);
    assert_eq!(engine.pointer().display, Vec2::new(100.0, 100.0));
    assert_eq!(engine.pointer().velocity, 0.0);
    assert!(engine.echoes().is_empty());
}

#[test]
fn fast_movement_spawns_echoes_at_the_interval() {
    let mut config = RevealConfig::default();
    config.spotlight.smoothing = 1.0;
    config.echoes.spawn_interval_ms = 40.0;
    let mut engine = engine_with(config, 0);
    let mut input = engine.pointer_input();

    let mut pos = Vec2::new(100.0, 100.0);
    input.mouse_enter(pos, 0.0);
    engine.tick(&input, 0.0);

    let mut spawn_times = Vec::new();
    let mut t = 8.0;
    while t <= 200.0 {
        pos.x += 50.0;
        input.mouse_move(pos, 0.0);
        let report = engine.tick(&input, t);
        if report.spawned {
            spawn_times.push(t);
            let newest = engine.echoes().newest().unwrap();
            assert_eq!(newest.opacity, 0.5);
            assert_eq!(newest.center, pos);
            assert_eq!(newest.radius, 80.0 * 0.8);
        }
        assert!(engine.echoes().len() <= 8);
        t += 8.0;
    }
    assert_eq!(spawn_times, vec![8.0, 56.0, 104.0, 152.0, 200.0]);
}

#[test]
fn slow_movement_spawns_nothing() {
    let mut config = RevealConfig::default();
    config.spotlight.smoothing = 1.0;
    let mut engine = engine_with(config, 0);
    let mut input = engine.pointer_input();

    let mut pos = Vec2::new(100.0, 100.0);
    input.mouse_enter(pos, 0.0);
    engine.tick(&input, 0.0);
    for frame in 1..100 {
        pos.x += 2.0;
        input.mouse_move(pos, 0.0);
        assert!(!engine.tick(&input, frame as f64 * 16.0).spawned);
    }
    assert!(engine.echoes().is_empty());
}

#[test]
fn echoes_paint_before_the_spotlight() {
    let mut config = RevealConfig::default();
    config.spotlight.smoothing = 1.0;
    let mut engine = engine_with(config, 0);
    let mut input = engine.pointer_input();

    input.mouse_enter(Vec2::new(50.0, 150.0), 0.0);
    engine.tick(&input, 0.0);
    input.mouse_move(Vec2::new(200.0, 150.0), 0.0);
    assert!(engine.tick(&input, 16.0).spawned);

    let plan = engine.mask_plan(true).unwrap();
    assert_eq!(plan.discs.len(), 2);
    assert_eq!(plan.discs[0].radius, 64.0);
    assert_eq!(plan.discs[1].radius, 120.0);
}

#[test]
fn leaving_parks_and_goes_transparent() {
    let mut engine = engine_with(RevealConfig::default(), 0);
    let mut input = engine.pointer_input();

    input.mouse_enter(SIZE * 0.5, 0.0);
    engine.tick(&input, 0.0);
    assert!(engine.mask_plan(true).is_some());

    input.mouse_leave();
    let report = engine.tick(&input, 16.0);
    assert!(!report.active);
    assert!(!engine.is_active());
    assert!(engine.parallax().is_none());

    let mut t = 16.0;
    for _ in 0..200 {
        t += 16.0;
        engine.tick(&input, t);
    }
    let park = Vec2::new(-1000.0, -1000.0);
    assert!(engine.pointer().display.distance(park) < 1.0);
    assert!(engine.echoes().is_empty());
    assert!(engine.mask_plan(true).is_none());
}

#[test]
fn mask_needs_a_ready_image_and_a_real_surface() {
    let mut engine = engine_with(RevealConfig::default(), 0);
    let mut input = engine.pointer_input();
    input.mouse_enter(SIZE * 0.5, 0.0);
    engine.tick(&input, 0.0);

    assert!(engine.mask_plan(false).is_none());
    engine.set_surface(SurfaceMetrics::new(Vec2::new(0.0, 300.0), 2.0));
    assert!(engine.mask_plan(true).is_none());
}

#[test]
fn deactivation_clears_inversion_in_the_same_tick() {
    let mut engine = engine_with(RevealConfig::default(), 2);
    let mut input = engine.pointer_input();
    input.mouse_enter(Vec2::new(100.0, 100.0), 0.0);
    engine.tick(&input, 0.0);

    let centers = [Some(Vec2::new(110.0, 100.0)), Some(Vec2::new(390.0, 290.0))];
    let changes = engine.update_inversion(&centers);
    assert_eq!(changes.len(), 1);
    assert!(engine.ui().is_element_inverted(0));

    input.mouse_leave();
    let report = engine.tick(&input, 16.0);
    assert_eq!(report.cleared.len(), 1);
    assert_eq!(report.cleared[0].index, 0);
    assert!(!report.cleared[0].inverted);
    assert!(!engine.ui().any_inverted());
    assert!(engine.update_inversion(&centers).is_empty());
}

#[test]
fn reentry_between_frames_resends_inversion() {
    let mut engine = engine_with(RevealConfig::default(), 1);
    let mut input = engine.pointer_input();
    let at = Vec2::new(100.0, 100.0);
    let centers = [Some(Vec2::new(110.0, 100.0))];

    input.mouse_enter(at, 0.0);
    engine.tick(&input, 0.0);
    assert_eq!(engine.update_inversion(&centers).len(), 1);

    input.mouse_leave();
    input.mouse_enter(at, 10.0);
    let report = engine.tick(&input, 16.0);
    assert!(report.active);
    assert_eq!(report.cleared.len(), 1);
    assert!(!engine.ui().any_inverted());

    let changes = engine.update_inversion(&centers);
    assert_eq!(changes.len(), 1);
    assert!(changes[0].inverted);
    assert!(engine.ui().is_element_inverted(0));
}

#[test]
fn tap_then_compat_mouse_events_leave_spotlight_parked() {
    let mut engine = RevealEngine::new(RevealConfig::default(), InputDevice::Touch, 0);
    engine.set_surface(SurfaceMetrics::new(SIZE, 1.0));
    let mut input = engine.pointer_input();
    let tap = Vec2::new(200.0, 150.0);

    input.touch_start(tap);
    engine.tick(&input, 0.0);
    input.touch_end(16.0);
    input.mouse_enter(tap, 20.0);
    input.mouse_move(tap, 20.0);

    let mut t = 16.0;
    for _ in 0..200 {
        t += 16.0;
        engine.tick(&input, t);
    }
    assert!(!engine.is_active());
    assert!(engine.pointer().display.distance(Vec2::new(-1000.0, -1000.0)) < 1.0);
    assert!(engine.mask_plan(true).is_none());
}

#[test]
fn grid_follows_pointer_only_while_active() {
    let mut config = RevealConfig::default();
    config.spotlight.smoothing = 1.0;
    let mut engine = engine_with(config, 0);
    assert_eq!(engine.grid().offset, Vec2::ZERO);

    let mut input = engine.pointer_input();
    input.mouse_enter(Vec2::new(400.0, 150.0), 0.0);
    engine.tick(&input, 0.0);
    let offset = engine.grid().offset;
    assert!((offset.x - 9.0).abs() < 1e-4);
    assert!(offset.y.abs() < 1e-4);

    let parallax = engine.parallax().unwrap();
    assert!((parallax.x + 8.0).abs() < 1e-4);
}

#[test]
fn touch_uses_the_touch_radius() {
    let mut engine = RevealEngine::new(RevealConfig::default(), InputDevice::Touch, 0);
    engine.set_surface(SurfaceMetrics::new(SIZE, 1.0));
    assert_eq!(engine.active_radius(), 60.0);
    assert_eq!(engine.outer_radius(), 100.0);

    let mut input = engine.pointer_input();
    input.touch_start(Vec2::new(10.0, 10.0));
    engine.tick(&input, 0.0);
    assert!(engine.is_active());
    input.touch_end(16.0);
    engine.tick(&input, 16.0);
    assert!(!engine.is_active());
}

#[test]
fn reset_drops_transient_state() {
    let mut config = RevealConfig::default();
    config.spotlight.smoothing = 1.0;
    let mut engine = engine_with(config, 1);
    let mut input = engine.pointer_input();
    input.mouse_enter(Vec2::new(50.0, 50.0), 0.0);
    engine.tick(&input, 0.0);
    input.mouse_move(Vec2::new(150.0, 50.0), 0.0);
    engine.tick(&input, 16.0);
    engine.update_inversion(&[Some(Vec2::new(150.0, 50.0))]);
    assert!(!engine.echoes().is_empty());

    let cleared = engine.reset();
    assert_eq!(cleared.len(), 1);
    assert!(engine.echoes().is_empty());
    assert!(!engine.is_active());
    assert_eq!(engine.pointer().display, Vec2::new(-1000.0, -1000.0));
}
