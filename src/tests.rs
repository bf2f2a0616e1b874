use crate::*;

use std::sync::{Arc, Mutex};

type ScrollLog = Arc<Mutex<Vec<ScrollUpdate>>>;
type RenderLog = Arc<Mutex<Vec<RenderCommand>>>;

/// A viewport/content pair whose metrics yield exactly the given scroll range
/// (200x200 client, no padding/margins, content larger by the range).
fn boxes(max_x: f64, max_y: f64) -> (ViewBox, ContentBox) {
    (
        ViewBox {
            client: Vec2::new(200.0, 200.0),
            padding: EdgeInsets::default(),
        },
        ContentBox {
            size: Vec2::new(200.0 + max_x, 200.0 + max_y),
            margin: EdgeInsets::default(),
        },
    )
}

fn harness(caps: Capabilities, use_transition: bool) -> (Scrollable, ScrollLog, RenderLog) {
    let scrolls: ScrollLog = Arc::new(Mutex::new(Vec::new()));
    let renders: RenderLog = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&scrolls);
    let r = Arc::clone(&renders);
    let options = ScrollerOptions::new()
        .with_use_transition(use_transition)
        .with_on_scroll(Some(move |u: ScrollUpdate| s.lock().unwrap().push(u)))
        .with_on_render(Some(move |c: RenderCommand| r.lock().unwrap().push(c)));
    (Scrollable::new(options, caps), scrolls, renders)
}

fn sized_harness(max_x: f64, max_y: f64, caps: Capabilities, use_transition: bool) -> (Scrollable, ScrollLog, RenderLog) {
    let (mut s, scrolls, renders) = harness(caps, use_transition);
    let (view, content) = boxes(max_x, max_y);
    s.init_size(&view, &content);
    (s, scrolls, renders)
}

/// Closed-form unconstrained travel: `v·T/2 + f·T/2` with `T = v/f`.
fn expected_travel(v: f64, f: f64) -> f64 {
    let t = v / f;
    v * t / 2.0 + f * t / 2.0
}

// ---------------------------------------------------------------- metrics

#[test]
fn compute_range_is_deterministic() {
    let (view, content) = boxes(123.0, 45.0);
    let a = Metrics::compute(&view, &content, RenderMode::Transform);
    let b = Metrics::compute(&view, &content, RenderMode::Transform);
    assert_eq!(a, b);
    assert_eq!(a.scroll_max, Vec2::new(123.0, 45.0));
}

#[test]
fn degenerate_range_clamps_min_to_max() {
    // Content fits inside the viewport: no scrolling on either axis.
    let view = ViewBox {
        client: Vec2::new(200.0, 200.0),
        padding: EdgeInsets::default(),
    };
    let content = ContentBox {
        size: Vec2::new(120.0, 80.0),
        margin: EdgeInsets::default(),
    };
    let m = Metrics::compute(&view, &content, RenderMode::Transform);
    assert_eq!(m.position_min, m.position_max);
    assert_eq!(m.scroll_max, Vec2::ZERO);
}

#[test]
fn position_offset_depends_on_render_mode() {
    let view = ViewBox {
        client: Vec2::new(200.0, 200.0),
        padding: EdgeInsets::uniform(5.0),
    };
    let content = ContentBox {
        size: Vec2::new(400.0, 400.0),
        margin: EdgeInsets::uniform(3.0),
    };
    let transform = Metrics::compute(&view, &content, RenderMode::Transform);
    let offsets = Metrics::compute(&view, &content, RenderMode::Offsets);

    // Translate is relative to the padding box, left/top already include it.
    assert_eq!(transform.position_offset.x, 8.0);
    assert_eq!(offsets.position_offset.x, 3.0);
    assert_eq!(transform.position_max.x, 8.0);
    assert_eq!(offsets.position_max.x, 8.0);
    assert_eq!(transform.scroll_max, offsets.scroll_max);
}

#[test]
fn offset_position_conversions_are_inverse() {
    let (view, content) = boxes(300.0, 150.0);
    let m = Metrics::compute(&view, &content, RenderMode::Transform);
    for offset in [Vec2::ZERO, Vec2::new(42.0, 17.0), Vec2::new(300.0, 150.0)] {
        let back = m.position_to_offset(m.offset_to_position(offset));
        assert!((back.x - offset.x).abs() < 1e-9);
        assert!((back.y - offset.y).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------- controller

#[test]
fn requested_offsets_are_clamped_to_range() {
    let (mut s, _, _) = sized_harness(100.0, 50.0, Capabilities::FULL, false);

    assert_eq!(s.scroll_to(ScrollTarget::both(500.0, -40.0)), Vec2::new(100.0, 0.0));
    assert_eq!(s.scroll_to(ScrollTarget::both(-1e9, 1e9)), Vec2::new(0.0, 50.0));
    assert_eq!(s.set_scroll_x(33.5), 33.5);
    assert_eq!(s.scroll_y(), 50.0);
}

#[test]
fn omitted_axis_keeps_its_value() {
    let (mut s, _, _) = sized_harness(100.0, 100.0, Capabilities::FULL, false);
    s.scroll_to(ScrollTarget::both(40.0, 60.0));
    assert_eq!(s.scroll_to(ScrollTarget::horizontal(10.0)), Vec2::new(10.0, 60.0));
    assert_eq!(s.scroll_to(ScrollTarget::vertical(5.0)), Vec2::new(10.0, 5.0));
}

#[test]
fn setting_the_same_offset_emits_nothing() {
    let (mut s, scrolls, renders) = sized_harness(100.0, 50.0, Capabilities::FULL, false);
    s.scroll_to(ScrollTarget::both(30.0, 10.0));
    let scroll_count = scrolls.lock().unwrap().len();
    let render_count = renders.lock().unwrap().len();

    s.scroll_to(ScrollTarget::both(30.0, 10.0));
    assert_eq!(scrolls.lock().unwrap().len(), scroll_count);
    assert_eq!(renders.lock().unwrap().len(), render_count);
}

#[test]
fn resize_rerenders_without_notifying_when_offset_unchanged() {
    let (mut s, scrolls, renders) = sized_harness(100.0, 50.0, Capabilities::FULL, false);
    let scroll_count = scrolls.lock().unwrap().len();
    let render_count = renders.lock().unwrap().len();

    // Same geometry: the offset survives the re-clamp, but the position is
    // force-rendered anyway.
    let (view, content) = boxes(100.0, 50.0);
    s.init_size(&view, &content);
    assert_eq!(scrolls.lock().unwrap().len(), scroll_count);
    assert_eq!(renders.lock().unwrap().len(), render_count + 1);
}

#[test]
fn shrinking_range_reclamps_without_inertial_tag() {
    let (mut s, scrolls, _) = sized_harness(100.0, 0.0, Capabilities::FULL, false);
    s.scroll_to(ScrollTarget::horizontal(80.0));

    let (view, content) = boxes(50.0, 0.0);
    s.init_size(&view, &content);
    assert_eq!(s.scroll_x(), 50.0);
    let last = *scrolls.lock().unwrap().last().unwrap();
    assert_eq!(last.offset.x, 50.0);
    assert!(!last.inertial);
}

#[test]
fn disabled_scrollable_ignores_everything() {
    let (mut s, scrolls, renders) = sized_harness(100.0, 100.0, Capabilities::FULL, false);
    s.scroll_to(ScrollTarget::both(10.0, 10.0));
    s.set_enabled(false);
    let scroll_count = scrolls.lock().unwrap().len();
    let render_count = renders.lock().unwrap().len();

    assert_eq!(s.scroll_to(ScrollTarget::both(90.0, 90.0)), Vec2::new(10.0, 10.0));
    s.on_pan(&PanEvent::start(50.0, 50.0, 0));
    s.on_pan(&PanEvent::moved(10.0, 10.0, 1.0, 1.0, 16));
    s.on_pan(&PanEvent::end(10.0, 10.0, 1.0, 1.0, 32));
    s.tick(100);
    assert!(!s.is_coasting());
    assert_eq!(scrolls.lock().unwrap().len(), scroll_count);
    assert_eq!(renders.lock().unwrap().len(), render_count);
}

#[test]
fn unsupported_environment_degrades_to_disabled() {
    let (mut s, scrolls, _) = harness(Capabilities::UNSUPPORTED, true);
    assert!(!s.enabled());

    let (view, content) = boxes(100.0, 100.0);
    s.init_size(&view, &content);
    assert_eq!(s.scroll_to(ScrollTarget::both(10.0, 10.0)), Vec2::ZERO);
    assert!(scrolls.lock().unwrap().is_empty());

    // The kill switch cannot resurrect an unsupported instance.
    s.set_enabled(true);
    assert!(!s.enabled());
}

#[test]
fn snapshot_restore_reclamps_against_current_metrics() {
    let (mut s, _, _) = sized_harness(100.0, 100.0, Capabilities::FULL, false);
    s.scroll_to(ScrollTarget::both(30.0, 70.0));
    let snap = s.snapshot();
    assert_eq!(snap.offset, Vec2::new(30.0, 70.0));
    assert!(!snap.coasting);

    s.scroll_to(ScrollTarget::both(90.0, 10.0));
    s.restore(snap);
    assert_eq!(s.offset(), Vec2::new(30.0, 70.0));

    let (view, content) = boxes(20.0, 20.0);
    s.init_size(&view, &content);
    s.restore(snap);
    assert_eq!(s.offset(), Vec2::new(20.0, 20.0));
}

// ---------------------------------------------------------------- gestures

#[test]
fn drag_inverts_pointer_delta_and_clamps() {
    let (mut s, scrolls, _) = sized_harness(100.0, 100.0, Capabilities::FULL, false);
    s.on_pan(&PanEvent::start(50.0, 50.0, 0));
    s.on_pan(&PanEvent::moved(30.0, 45.0, -1.0, -0.2, 16));
    assert_eq!(s.offset(), Vec2::new(20.0, 5.0));
    assert!(!scrolls.lock().unwrap().last().unwrap().inertial);

    // Dragging far past the range pins at the boundary.
    s.on_pan(&PanEvent::moved(-500.0, 50.0, -1.0, 0.0, 32));
    assert_eq!(s.offset(), Vec2::new(100.0, 0.0));
}

#[test]
fn stale_velocity_sample_falls_back_to_end_event() {
    // The finger rested >100ms before lifting: the cached fast sample must
    // not produce a fling.
    let (mut s, _, _) = sized_harness(1000.0, 0.0, Capabilities::LEGACY, false);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::moved(80.0, 0.0, -2.0, 0.0, 100));
    s.on_pan(&PanEvent::end(80.0, 0.0, 0.0, 0.0, 300));
    assert!(!s.is_coasting());

    // A fresh sample wins over the end event's reading.
    s.on_pan(&PanEvent::start(100.0, 0.0, 1000));
    s.on_pan(&PanEvent::moved(80.0, 0.0, -2.0, 0.0, 1016));
    s.on_pan(&PanEvent::end(80.0, 0.0, 0.0, 0.0, 1060));
    assert!(s.is_coasting());
}

#[test]
fn diagonal_fling_splits_friction_by_velocity_angle() {
    // 3-4-5 triangle: cos = 3/5, sin = 4/5.
    let fling = Fling::from_velocity(3.0, 4.0, 0.001);
    assert!((fling.x.friction - 0.0006).abs() < 1e-12);
    assert!((fling.y.friction - 0.0008).abs() < 1e-12);
    // Both axes stop at the same time.
    let tx = fling.x.velocity / fling.x.friction;
    let ty = fling.y.velocity / fling.y.friction;
    assert!((tx - ty).abs() < 1e-6);
}

#[test]
fn friction_is_floored_at_a_positive_minimum() {
    assert!(ScrollerOptions::new().with_friction(0.0).friction > 0.0);
    assert!(ScrollerOptions::new().with_friction(-0.5).friction > 0.0);
    assert_eq!(ScrollerOptions::new().with_friction(0.002).friction, 0.002);

    // A floored fling still comes to rest in finite time.
    let friction = ScrollerOptions::new().with_friction(0.0).friction;
    let fling = Fling::from_velocity(1.0, 0.0, friction);
    let t = build_trajectory(Vec2::ZERO, Vec2::new(1e12, 0.0), &fling);
    assert!(!t.is_empty());
    assert!(t.total_ms.is_finite());
}

#[test]
fn single_axis_fling_takes_the_whole_friction_constant() {
    let fling = Fling::from_velocity(0.0, -1.5, 0.001);
    assert_eq!(fling.x.friction, 0.0);
    assert_eq!(fling.x.velocity, 0.0);
    assert_eq!(fling.y.friction, 0.001);
    assert_eq!(fling.y.velocity, 1.5);
    assert_eq!(fling.y.direction, -1.0);
}

// ---------------------------------------------------------------- trajectory

#[test]
fn unconstrained_travel_matches_closed_form() {
    // v = 2 px/ms, f = 0.001 px/ms² => distance ~ 2000px, stop time 2000ms.
    let fling = Fling::from_velocity(2.0, 0.0, 0.001);
    let t = build_trajectory(Vec2::ZERO, Vec2::new(1e9, 1e9), &fling);

    assert_eq!(t.keyframes.len(), 1);
    let kf = t.keyframes[0];
    assert!((kf.duration_ms - 2000.0).abs() < 1e-6);
    assert!((kf.target.x - 2000.0).abs() <= 2.0);
    assert_eq!(kf.target.y, 0.0);
    // The single unconstrained segment keeps the canonical ease-out shape.
    assert_eq!(kf.easing, DECELERATION_CURVE.normalized());
}

#[test]
fn boundary_split_rests_exactly_on_the_limit() {
    // Unconstrained travel ~500px, but only 10px of range remain.
    let v = (2.0_f64 * 0.001 * 500.0).sqrt();
    let fling = Fling::from_velocity(v, 0.0, 0.001);
    let t = build_trajectory(Vec2::new(90.0, 0.0), Vec2::new(100.0, 0.0), &fling);

    assert_eq!(t.keyframes.len(), 1);
    let kf = t.keyframes[0];
    assert_eq!(kf.target.x, 100.0);
    // Cut short well before the natural stop time.
    let natural = v / 0.001;
    assert!(kf.duration_ms > 0.0 && kf.duration_ms < natural / 2.0);
}

#[test]
fn negative_direction_split_rests_exactly_on_zero() {
    let fling = Fling::from_velocity(-1.0, 0.0, 0.001);
    let t = build_trajectory(Vec2::new(25.0, 0.0), Vec2::new(100.0, 0.0), &fling);
    assert_eq!(t.final_offset().unwrap().x, 0.0);
}

#[test]
fn fling_outward_at_boundary_creates_no_trajectory() {
    let fling = Fling::from_velocity(1.0, 0.0, 0.001);
    assert!(build_trajectory(Vec2::new(100.0, 0.0), Vec2::new(100.0, 0.0), &fling).is_empty());

    let fling = Fling::from_velocity(-1.0, 0.0, 0.001);
    assert!(build_trajectory(Vec2::ZERO, Vec2::new(100.0, 0.0), &fling).is_empty());
}

#[test]
fn mixed_axes_merge_into_a_shared_timeline() {
    // X hits its boundary early, Y runs free: two segments, X pinned in the
    // second one, total duration equal to the natural stop time.
    let fling = Fling::from_velocity(1.0, 1.0, 0.001);
    let offset = Vec2::new(90.0, 0.0);
    let scroll_max = Vec2::new(100.0, 1e9);
    let t = build_trajectory(offset, scroll_max, &fling);

    assert_eq!(t.keyframes.len(), 2);
    let first = t.keyframes[0];
    let last = t.keyframes[1];
    assert_eq!(first.target.x, 100.0);
    assert_eq!(last.target.x, 100.0);

    let full_y = expected_travel(fling.y.velocity, fling.y.friction);
    assert!((last.target.y - full_y).abs() < 1e-6);
    // The first segment advances Y proportionally to the shared ratio.
    let ratio = 10.0 / expected_travel(fling.x.velocity, fling.x.friction);
    assert!((first.target.y - full_y * ratio).abs() < 1e-6);

    let natural = fling.x.velocity / fling.x.friction;
    assert!((t.total_ms - natural).abs() < 1e-6);
    assert!(first.duration_ms > 0.0 && last.duration_ms > 0.0);
}

#[test]
fn both_axes_clamped_independently() {
    let fling = Fling::from_velocity(2.0, 2.0, 0.001);
    let offset = Vec2::new(95.0, 50.0);
    let scroll_max = Vec2::new(100.0, 100.0);
    let t = build_trajectory(offset, scroll_max, &fling);

    let rest = t.final_offset().unwrap();
    assert_eq!(rest, Vec2::new(100.0, 100.0));
    // Different crossing ratios: one segment per crossing.
    assert_eq!(t.keyframes.len(), 2);
    // Targets never leave the range along the way.
    for kf in &t.keyframes {
        assert!(kf.target.x <= 100.0 && kf.target.y <= 100.0);
    }
}

// ---------------------------------------------------------------- polling

#[test]
fn polling_fling_undershoots_but_never_overshoots() {
    let (mut s, _, _) = sized_harness(10000.0, 0.0, Capabilities::LEGACY, false);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));
    assert!(s.is_coasting());

    let limit = expected_travel(1.0, 0.001);
    let mut prev = 0.0;
    let mut now = 0;
    while s.is_coasting() && now < 5000 {
        now += 16;
        s.tick(now);
        let x = s.scroll_x();
        assert!(x >= prev, "displacement must be monotone");
        assert!(x <= limit, "discrete integration must not overshoot");
        prev = x;
    }
    assert!(!s.is_coasting());
    assert!(s.scroll_x() > limit * 0.95, "undershoot should be slight");
}

#[test]
fn polling_zeroes_velocity_on_boundary_hit() {
    let (mut s, scrolls, _) = sized_harness(100.0, 0.0, Capabilities::LEGACY, false);
    s.scroll_to(ScrollTarget::horizontal(90.0));
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));

    let mut now = 0;
    while s.is_coasting() && now < 5000 {
        now += 16;
        s.tick(now);
    }
    assert_eq!(s.scroll_x(), 100.0);
    assert!(!s.is_coasting());

    let last = *scrolls.lock().unwrap().last().unwrap();
    assert_eq!(last.offset.x, 100.0);
    assert!(last.inertial);
}

#[test]
fn polling_fling_outward_at_boundary_creates_no_session() {
    let (mut s, _, _) = sized_harness(100.0, 0.0, Capabilities::LEGACY, false);
    s.scroll_to(ScrollTarget::horizontal(100.0));
    s.on_pan(&PanEvent::start(0.0, 0.0, 0));
    s.on_pan(&PanEvent::end(0.0, 0.0, 2.0, 0.0, 0));
    assert!(!s.is_coasting());
    assert_eq!(s.scroll_x(), 100.0);
}

#[test]
fn new_gesture_interrupts_inertial_playback() {
    let (mut s, scrolls, _) = sized_harness(10000.0, 0.0, Capabilities::LEGACY, false);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));
    s.tick(16);
    s.tick(32);
    assert!(s.is_coasting());
    let frozen = s.offset();

    s.on_pan(&PanEvent::start(50.0, 0.0, 40));
    assert!(!s.is_coasting());
    assert_eq!(s.offset(), frozen);

    // The dead session produces no further offset changes.
    let scroll_count = scrolls.lock().unwrap().len();
    s.tick(48);
    s.tick(64);
    assert_eq!(s.offset(), frozen);
    assert_eq!(scrolls.lock().unwrap().len(), scroll_count);
}

#[test]
fn programmatic_scroll_interrupts_inertial_playback() {
    let (mut s, _, _) = sized_harness(10000.0, 0.0, Capabilities::LEGACY, false);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));
    s.tick(16);
    assert!(s.is_coasting());

    assert_eq!(s.set_scroll_x(5.0), 5.0);
    assert!(!s.is_coasting());
    s.tick(32);
    assert_eq!(s.scroll_x(), 5.0);
}

// ---------------------------------------------------------------- timeline

fn animate_targets(renders: &RenderLog, metrics: &Metrics) -> Vec<Vec2> {
    renders
        .lock()
        .unwrap()
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Animate { position, .. } => Some(metrics.position_to_offset(*position)),
            RenderCommand::Place(_) => None,
        })
        .collect()
}

#[test]
fn timeline_advances_on_completion_signals() {
    let (mut s, _, renders) = sized_harness(100.0, 1e9, Capabilities::FULL, true);
    s.scroll_to(ScrollTarget::both(90.0, 0.0));
    s.on_pan(&PanEvent::start(100.0, 100.0, 0));
    s.on_pan(&PanEvent::end(100.0, 100.0, 1.0, 1.0, 0));
    assert!(s.is_coasting());

    // First segment is playing; complete it.
    s.notify_transition_end(500, None);
    assert!(s.is_coasting());
    assert_eq!(s.scroll_x(), 100.0, "first keyframe pins X at its boundary");

    // Second (final) segment; completing it drains the queue.
    s.notify_transition_end(1500, None);
    assert!(!s.is_coasting());
    assert_eq!(s.scroll_x(), 100.0);
    let fling = Fling::from_velocity(1.0, 1.0, 0.001);
    let expected_y = expected_travel(fling.y.velocity, fling.y.friction);
    assert!((s.scroll_y() - expected_y).abs() < 1e-6);

    let targets = animate_targets(&renders, s.metrics());
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].x, 100.0);
    assert!((targets[1].y - expected_y).abs() < 1e-6);
}

#[test]
fn timeline_session_ends_with_a_snap_in_place() {
    let (mut s, _, renders) = sized_harness(10000.0, 0.0, Capabilities::FULL, true);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));
    s.notify_transition_end(1000, None);
    assert!(!s.is_coasting());

    // Finalize snaps the rendered position back to the canonical offset.
    let last = *renders.lock().unwrap().last().unwrap();
    assert_eq!(
        last,
        RenderCommand::Place(s.metrics().offset_to_position(s.offset()))
    );
}

#[test]
fn timeline_backstop_finalizes_from_measured_state() {
    let (mut s, _, _) = sized_harness(10000.0, 0.0, Capabilities::FULL, true);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));
    assert!(s.is_coasting());

    // Natural stop time is 1000ms; no completion signal before the deadline.
    s.tick_with_rendered(500, None);
    assert!(s.is_coasting(), "backstop must not fire early");

    let measured = s.metrics().offset_to_position(Vec2::new(321.0, 0.0));
    s.tick_with_rendered(1001, Some(measured));
    assert!(!s.is_coasting());
    assert_eq!(s.offset(), Vec2::new(321.0, 0.0));
}

#[test]
fn timeline_interrupt_snaps_to_canonical_offset() {
    let (mut s, _, renders) = sized_harness(100.0, 1e9, Capabilities::FULL, true);
    s.scroll_to(ScrollTarget::both(90.0, 0.0));
    s.on_pan(&PanEvent::start(100.0, 100.0, 0));
    s.on_pan(&PanEvent::end(100.0, 100.0, 1.0, 1.0, 0));
    s.notify_transition_end(100, None);
    assert!(s.is_coasting());
    let committed = s.offset();

    s.on_pan(&PanEvent::start(10.0, 10.0, 200));
    assert!(!s.is_coasting());
    assert_eq!(s.offset(), committed);
    let last = *renders.lock().unwrap().last().unwrap();
    assert_eq!(
        last,
        RenderCommand::Place(s.metrics().offset_to_position(committed))
    );
}

#[test]
fn timeline_interrupt_commits_the_measured_position() {
    let (mut s, scrolls, renders) = sized_harness(10000.0, 0.0, Capabilities::FULL, true);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));
    assert!(s.is_coasting());

    // Mid-keyframe the content sits between the fling's origin and the
    // segment target; the host measures it when the new touch lands.
    let measured = s.metrics().offset_to_position(Vec2::new(321.0, 0.0));
    s.on_pan_with_rendered(&PanEvent::start(60.0, 0.0, 500), Some(measured));
    assert!(!s.is_coasting());
    assert_eq!(s.offset(), Vec2::new(321.0, 0.0));
    assert_eq!(
        *renders.lock().unwrap().last().unwrap(),
        RenderCommand::Place(measured)
    );
    assert_eq!(scrolls.lock().unwrap().last().unwrap().offset.x, 321.0);

    // The drag picks up from the committed position, not the fling's origin.
    s.on_pan(&PanEvent::moved(50.0, 0.0, -0.5, 0.0, 516));
    assert_eq!(s.scroll_x(), 331.0);
}

#[test]
fn stop_with_rendered_reconciles_before_snapping() {
    let (mut s, _, renders) = sized_harness(10000.0, 0.0, Capabilities::FULL, true);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));

    let measured = s.metrics().offset_to_position(Vec2::new(123.5, 0.0));
    s.stop_with_rendered(Some(measured));
    assert!(!s.is_coasting());
    assert_eq!(s.scroll_x(), 123.5);
    assert_eq!(
        *renders.lock().unwrap().last().unwrap(),
        RenderCommand::Place(measured)
    );
}

#[test]
fn scroll_to_with_rendered_keeps_the_measured_axis() {
    let (mut s, _, _) = sized_harness(10000.0, 50.0, Capabilities::FULL, true);
    s.on_pan(&PanEvent::start(100.0, 0.0, 0));
    s.on_pan(&PanEvent::end(100.0, 0.0, 1.0, 0.0, 0));

    let measured = s.metrics().offset_to_position(Vec2::new(200.0, 0.0));
    let offset = s.scroll_to_with_rendered(ScrollTarget::vertical(30.0), Some(measured));
    assert_eq!(offset, Vec2::new(200.0, 30.0));
}

#[test]
fn timeline_fling_at_boundary_creates_no_session() {
    let (mut s, scrolls, _) = sized_harness(100.0, 0.0, Capabilities::FULL, true);
    s.scroll_to(ScrollTarget::horizontal(100.0));
    let scroll_count = scrolls.lock().unwrap().len();

    s.on_pan(&PanEvent::start(0.0, 0.0, 0));
    s.on_pan(&PanEvent::end(0.0, 0.0, 2.0, 0.0, 0));
    assert!(!s.is_coasting());
    assert_eq!(s.scroll_x(), 100.0);
    assert_eq!(scrolls.lock().unwrap().len(), scroll_count);
}

// ---------------------------------------------------------------- bezier

#[test]
fn split_halves_share_the_split_point() {
    let (left, right) = DECELERATION_CURVE.split(0.3);
    assert_eq!(left.p3, right.p0);

    let direct = DECELERATION_CURVE.point_at(0.3);
    assert!((left.p3.x - direct.x).abs() < 1e-12);
    assert!((left.p3.y - direct.y).abs() < 1e-12);

    // The halves trace the same path as the original.
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let a = left.point_at(t);
        let b = DECELERATION_CURVE.point_at(t * 0.3);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}

#[test]
fn horizontal_intersection_finds_the_crossing() {
    for line_y in [0.1, 0.25, 0.5, 0.75, 0.9] {
        let roots = DECELERATION_CURVE.intersect_horizontal(line_y);
        assert_eq!(roots.len(), 1, "monotone curve crosses once (y={line_y})");
        let p = DECELERATION_CURVE.point_at(roots[0]);
        assert!((p.y - line_y).abs() < 1e-7);
        assert!((0.0..=1.0).contains(&p.x));
    }
}

#[test]
fn cubic_roots_finds_three_known_roots() {
    // (t - 0.25)(t - 0.5)(t - 0.75)
    let roots = cubic_roots(1.0, -1.5, 0.6875, -0.09375);
    assert_eq!(roots.len(), 3);
    for (root, expected) in roots.iter().zip([0.25, 0.5, 0.75]) {
        assert!((root - expected).abs() < 1e-9);
    }
}

#[test]
fn cubic_roots_degenerates_to_quadratic_and_linear() {
    // t² - t = 0
    let roots = cubic_roots(0.0, 1.0, -1.0, 0.0);
    assert_eq!(roots.len(), 2);
    assert!((roots[0] - 0.0).abs() < 1e-12);
    assert!((roots[1] - 1.0).abs() < 1e-12);

    // 2t - 1 = 0
    let roots = cubic_roots(0.0, 0.0, 2.0, -1.0);
    assert_eq!(roots, vec![0.5]);

    // No real solution in range.
    assert!(cubic_roots(0.0, 1.0, 0.0, 1.0).is_empty());
}

#[test]
fn normalized_recovers_css_parameters() {
    let easing = DECELERATION_CURVE.normalized();
    assert_eq!(
        easing,
        Easing {
            x1: 0.0,
            y1: 0.0,
            x2: 0.4,
            y2: 1.0
        }
    );

    // A translated and scaled sub-curve normalizes into the unit square.
    let curve = CubicBezier {
        p0: Point::new(2.0, 3.0),
        p1: Point::new(2.5, 3.8),
        p2: Point::new(3.0, 6.0),
        p3: Point::new(4.0, 7.0),
    };
    let e = curve.normalized();
    assert!((e.x1 - 0.25).abs() < 1e-12);
    assert!((e.y1 - 0.2).abs() < 1e-12);
    assert!((e.x2 - 0.5).abs() < 1e-12);
    assert!((e.y2 - 0.75).abs() < 1e-12);
}

#[test]
fn split_easings_chain_back_into_the_full_curve() {
    // Split the canonical curve at a distance ratio, as the trajectory
    // builder does, and check the sub-curves still describe a curve ending
    // where the original does.
    let ratio = 0.3;
    let t = DECELERATION_CURVE.intersect_horizontal(ratio)[0];
    let (head, tail) = DECELERATION_CURVE.split(t);
    assert!((head.p3.y - ratio).abs() < 1e-7);
    assert_eq!(tail.p3, DECELERATION_CURVE.p3);

    // Normalized head easing starts and ends in the unit square corners by
    // construction.
    let e = head.normalized();
    assert!(e.x1.is_finite() && e.y1.is_finite() && e.x2.is_finite() && e.y2.is_finite());
}
