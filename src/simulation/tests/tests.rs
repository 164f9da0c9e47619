use super::*;
use crate::domain::ripple::RippleKind;

#[test]
fn movement_spawn_needs_both_distance_and_interval() {
    let mut core = EngineCore::new(800, 600);

    // First qualifying move: far from the origin reference, never time-gated.
    assert!(core.pointer_move(100.0, 100.0, 1_000.0));
    assert_eq!(core.ripple_count(), 1);

    // 5px away within the time window: neither gate passes.
    assert!(!core.pointer_move(103.0, 104.0, 1_040.0));

    // Far enough but inside the 50ms window: distance alone is not enough.
    assert!(!core.pointer_move(150.0, 100.0, 1_049.0));

    // Window elapsed but only 5px from the last spawn point: time alone is
    // not enough either.
    assert!(!core.pointer_move(105.0, 100.0, 1_200.0));
    assert_eq!(core.ripple_count(), 1);

    // Both gates pass.
    assert!(core.pointer_move(150.0, 100.0, 1_200.0));
    assert_eq!(core.ripple_count(), 2);
}

#[test]
fn rejected_moves_do_not_advance_the_gate() {
    let mut core = EngineCore::new(800, 600);
    assert!(core.pointer_move(100.0, 100.0, 1_000.0));

    // A rejected move must not move the reference point: drifting away in
    // sub-threshold hops never spawns while inside the window.
    assert!(!core.pointer_move(108.0, 100.0, 1_010.0));
    assert!(!core.pointer_move(116.0, 100.0, 1_020.0));

    // Once the window elapses, distance is measured from the last SPAWN
    // point (100,100), not the last event, so 16px of drift qualifies.
    assert!(core.pointer_move(116.0, 100.0, 1_050.0));
    assert_eq!(core.ripple_count(), 2);
}

#[test]
fn first_move_is_referenced_to_the_origin() {
    let mut core = EngineCore::new(800, 600);

    // 7.07px from (0,0): below the distance threshold.
    assert!(!core.pointer_move(5.0, 5.0, 0.0));
    // 20px from (0,0): spawns even at now=0.
    assert!(core.pointer_move(20.0, 0.0, 0.0));
}

#[test]
fn every_click_spawns_exactly_one_ripple() {
    let mut core = EngineCore::new(800, 600);

    // Unthrottled: five clicks at the same spot, same instant.
    for _ in 0..5 {
        core.pointer_click(10.0, 10.0);
    }
    assert_eq!(core.ripple_count(), 5);
    assert!(core
        .ripples
        .iter()
        .all(|r| r.kind() == RippleKind::Click));

    // Clicks leave the movement gate untouched: a qualifying move right
    // after still spawns.
    assert!(core.pointer_move(30.0, 0.0, 10.0));
    assert_eq!(core.ripple_count(), 6);
}

#[test]
fn click_ripple_fades_out_on_frame_75() {
    let mut core = EngineCore::new(800, 600);
    core.pointer_click(100.0, 100.0);

    // ceil(0.6 / 0.008) = 75 frames of life; still drawn on frame 74.
    for _ in 0..74 {
        core.step();
    }
    assert_eq!(core.ripple_count(), 1);
    let draw = core.draw_list()[0];
    assert!(draw.opacity > 0.0);
    assert!(draw.opacity < 0.01);

    core.step();
    assert_eq!(core.ripple_count(), 0);
    assert!(core.draw_list().is_empty());

    // Removal is idempotent: the ripple never reappears.
    core.step();
    assert_eq!(core.ripple_count(), 0);
    assert!(core.draw_list().is_empty());
}

#[test]
fn movement_ripple_fades_out_on_frame_38() {
    let mut core = EngineCore::new(800, 600);
    assert!(core.pointer_move(50.0, 50.0, 0.0));

    for _ in 0..37 {
        core.step();
    }
    assert_eq!(core.ripple_count(), 1);
    assert!(core.draw_list()[0].opacity > 0.0);

    core.step();
    assert_eq!(core.ripple_count(), 0);
}

#[test]
fn radius_grows_by_the_profile_rate_with_no_cap() {
    let mut core = EngineCore::new(800, 600);
    assert!(core.pointer_move(50.0, 50.0, 0.0));
    core.pointer_click(100.0, 100.0);

    for _ in 0..10 {
        core.step();
    }
    let draws = core.draw_list();
    assert_eq!(draws[0].radius, 20.0); // movement: 2/frame
    assert_eq!(draws[1].radius, 30.0); // click: 3/frame

    // max_radius never clamps: a click ripple sails past 120 while its
    // opacity still holds it alive.
    let mut core = EngineCore::new(800, 600);
    core.pointer_click(0.0, 0.0);
    for _ in 0..70 {
        core.step();
    }
    assert_eq!(core.ripple_count(), 1);
    assert_eq!(core.draw_list()[0].radius, 210.0);
}

#[test]
fn secondary_ring_is_click_only_and_gated_on_radius() {
    // Click: hidden at radius 18, shown at 21.
    let mut core = EngineCore::new(800, 600);
    core.pointer_click(100.0, 100.0);
    for _ in 0..6 {
        core.step();
    }
    assert_eq!(core.draw_list()[0].radius, 18.0);
    assert!(!core.draw_list()[0].secondary_ring);

    core.step();
    assert_eq!(core.draw_list()[0].radius, 21.0);
    assert!(core.draw_list()[0].secondary_ring);

    // Movement: never, even well past the radius gate.
    let mut core = EngineCore::new(800, 600);
    assert!(core.pointer_move(50.0, 50.0, 0.0));
    for _ in 0..20 {
        core.step();
    }
    let draw = core.draw_list()[0];
    assert!(draw.radius > 20.0);
    assert!(!draw.secondary_ring);
}

#[test]
fn draw_list_preserves_creation_order() {
    let mut core = EngineCore::new(800, 600);
    core.pointer_click(1.0, 0.0);
    core.pointer_click(2.0, 0.0);
    assert!(core.pointer_move(50.0, 50.0, 0.0));
    core.pointer_click(3.0, 0.0);

    core.step();
    let xs: Vec<f32> = core.draw_list().iter().map(|d| d.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 50.0, 3.0]);
}

#[test]
fn resize_keeps_inflight_ripples_and_coordinates() {
    let mut core = EngineCore::new(800, 600);
    core.pointer_click(100.0, 100.0);
    core.step();

    core.resize(300, 200);
    assert_eq!(core.width(), 300);
    assert_eq!(core.height(), 200);

    core.step();
    assert_eq!(core.ripple_count(), 1);
    let draw = core.draw_list()[0];
    assert_eq!(draw.x, 100.0);
    assert_eq!(draw.y, 100.0);
}

#[test]
fn clear_drops_ripples_and_rearms_the_gate() {
    let mut core = EngineCore::new(800, 600);
    assert!(core.pointer_move(100.0, 100.0, 1_000.0));
    core.pointer_click(10.0, 10.0);
    core.step();

    core.clear();
    assert_eq!(core.ripple_count(), 0);
    assert!(core.draw_list().is_empty());
    assert_eq!(core.frame(), 0);

    // Gate is back to its initial reference: a move 20px from the origin
    // spawns immediately regardless of the old timestamps.
    assert!(core.pointer_move(20.0, 0.0, 1_001.0));
}

#[test]
fn perf_stats_snapshot_last_step() {
    let mut core = EngineCore::new(800, 600);
    core.enable_perf_metrics(true);

    assert!(core.pointer_move(100.0, 100.0, 0.0));
    core.pointer_click(10.0, 10.0);
    core.step();

    let stats = core.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.spawned_move(), 1);
    assert_eq!(stats.spawned_click(), 1);
    assert_eq!(stats.live_ripples(), 2);
    assert_eq!(stats.draw_calls(), 2);
    assert_eq!(stats.retired(), 0);

    // Spawn counters cover only the window since the previous step.
    core.step();
    let stats = core.get_perf_stats();
    assert_eq!(stats.spawned_move(), 0);
    assert_eq!(stats.spawned_click(), 0);
}

#[test]
fn theme_bundle_swaps_colors_and_rejects_garbage() {
    let mut core = EngineCore::new(800, 600);
    assert!(core
        .load_theme_json(r#"{"base":{"r":255,"g":0,"b":0},"halo":{"r":255,"g":128,"b":128}}"#)
        .is_ok());
    assert_eq!(core.theme().base.r, 255);

    assert!(core.load_theme_json("not json").is_err());
}

#[test]
fn pack_draws_is_stride_5_per_entry() {
    let mut core = EngineCore::new(800, 600);
    core.pointer_click(7.0, 9.0);
    for _ in 0..7 {
        core.step();
    }

    let _ = core.pack_draws();
    assert_eq!(core.draw_count(), 1);
    assert_eq!(
        core.draw_transfer,
        vec![7.0, 9.0, 21.0, core.draw_list()[0].opacity, 1.0]
    );
}
