use crate::*;

use alloc::vec::Vec;
use reorder::{CancelPolicy, GeometrySnapshot, Move, Point, ReorderList, ReorderOptions, Size};

fn list_of(items: &str) -> ReorderList<char, char> {
    ReorderList::new(items.chars().collect(), |c: &char| *c)
}

fn all_visible(count: usize) -> GeometrySnapshot {
    GeometrySnapshot::uniform(Size::new(360.0, count as f32 * 100.0), count, 100.0, 0.0)
}

fn down(x: f32, y: f32, now_ms: u64) -> PointerEvent {
    PointerEvent::Down {
        id: 1,
        pos: Point::new(x, y),
        now_ms,
    }
}

fn moved(x: f32, y: f32, now_ms: u64) -> PointerEvent {
    PointerEvent::Move {
        id: 1,
        pos: Point::new(x, y),
        now_ms,
    }
}

fn up(x: f32, y: f32, now_ms: u64) -> PointerEvent {
    PointerEvent::Up {
        id: 1,
        pos: Point::new(x, y),
        now_ms,
    }
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn tap_is_not_a_gesture() {
    let mut r = LongPressRecognizer::new(GestureConfig::default());
    assert_eq!(r.process(down(350.0, 50.0, 0)), None);
    assert!(r.is_pressed());
    assert_eq!(r.tick(200), None);
    assert_eq!(r.process(up(350.0, 50.0, 250)), None);
    assert!(!r.is_pressed());
    assert_eq!(r.tick(1000), None);
}

#[test]
fn long_press_fires_on_tick_then_reports_deltas() {
    let mut r = LongPressRecognizer::new(GestureConfig::default());
    r.process(down(350.0, 50.0, 0));
    assert_eq!(r.tick(499), None);
    assert_eq!(
        r.tick(500),
        Some(GestureEvent::LongPress {
            pos: Point::new(350.0, 50.0)
        })
    );
    // Fires once.
    assert_eq!(r.tick(600), None);

    assert_eq!(
        r.process(moved(350.0, 80.0, 610)),
        Some(GestureEvent::DragMove { delta: 30.0 })
    );
    // Horizontal-only movement is not a drag delta.
    assert_eq!(r.process(moved(300.0, 80.0, 620)), None);
    assert_eq!(
        r.process(moved(300.0, 60.0, 630)),
        Some(GestureEvent::DragMove { delta: -20.0 })
    );
    assert_eq!(r.process(up(300.0, 60.0, 640)), Some(GestureEvent::DragEnd));
    assert!(!r.is_dragging());
}

#[test]
fn long_press_can_fire_on_a_move_within_slop() {
    let mut r = LongPressRecognizer::new(GestureConfig::default());
    r.process(down(350.0, 50.0, 0));
    assert_eq!(r.process(moved(353.0, 54.0, 200)), None);
    assert_eq!(
        r.process(moved(352.0, 53.0, 510)),
        Some(GestureEvent::LongPress {
            pos: Point::new(350.0, 50.0)
        })
    );
    assert_eq!(
        r.process(moved(352.0, 63.0, 520)),
        Some(GestureEvent::DragMove { delta: 10.0 })
    );
}

#[test]
fn moving_beyond_slop_abandons_the_press() {
    let mut r = LongPressRecognizer::new(GestureConfig::default().with_touch_slop(8.0));
    r.process(down(350.0, 50.0, 0));
    assert_eq!(r.process(moved(350.0, 59.0, 100)), None);
    assert_eq!(r.tick(800), None);
    assert_eq!(r.process(moved(350.0, 200.0, 900)), None);
    assert_eq!(r.process(up(350.0, 200.0, 950)), None);

    // The next pointer starts fresh.
    r.process(down(350.0, 50.0, 1000));
    assert!(r.tick(1500).is_some());
}

#[test]
fn elapsed_delay_fires_on_first_move_without_tick() {
    let mut r = LongPressRecognizer::new(GestureConfig::default());
    r.process(down(300.0, 50.0, 0));
    // Held still past the delay, then moved beyond slop before any tick.
    assert_eq!(
        r.process(moved(300.0, 70.0, 600)),
        Some(GestureEvent::LongPress {
            pos: Point::new(300.0, 50.0)
        })
    );
    assert!(r.is_dragging());
    // Deltas are measured from the position the long-press fired at.
    assert_eq!(
        r.process(moved(300.0, 85.0, 620)),
        Some(GestureEvent::DragMove { delta: 15.0 })
    );
}

#[test]
fn controller_starts_drag_when_move_arrives_before_tick() {
    let geo = all_visible(5);
    let mut c = DragController::new(list_of("ABCDE"), GestureConfig::default());

    c.on_pointer(down(350.0, 50.0, 0), &geo);
    let out = c.on_pointer(moved(350.0, 70.0, 600), &geo);
    assert_eq!(out.started.map(|s| s.start_index), Some(0));
    assert!(c.is_dragging());

    c.on_pointer(moved(350.0, 131.0, 620), &geo);
    assert_eq!(c.list().items(), &['B', 'A', 'C', 'D', 'E']);
}

#[test]
fn other_pointers_are_ignored() {
    let mut r = LongPressRecognizer::new(GestureConfig::default());
    r.process(down(350.0, 50.0, 0));
    let second = PointerEvent::Down {
        id: 2,
        pos: Point::new(10.0, 10.0),
        now_ms: 10,
    };
    assert_eq!(r.process(second), None);
    assert!(r.tick(500).is_some());

    let other_move = PointerEvent::Move {
        id: 2,
        pos: Point::new(10.0, 300.0),
        now_ms: 510,
    };
    assert_eq!(r.process(other_move), None);
    let other_up = PointerEvent::Up {
        id: 2,
        pos: Point::new(10.0, 300.0),
        now_ms: 520,
    };
    assert_eq!(r.process(other_up), None);
    assert!(r.is_dragging());

    let cancel = PointerEvent::Cancel { id: 1, now_ms: 530 };
    assert_eq!(r.process(cancel), Some(GestureEvent::DragCancel));
}

#[test]
fn settle_glides_to_zero() {
    let s = Settle::new(-40.0, 100, 100, Easing::Linear);
    assert_close(s.sample(100), -40.0);
    assert_close(s.sample(150), -20.0);
    assert_close(s.sample(200), 0.0);
    assert_close(s.sample(1000), 0.0);
    assert!(!s.is_done(199));
    assert!(s.is_done(200));

    // Zero durations are bumped to one millisecond.
    assert_eq!(Settle::new(5.0, 0, 0, Easing::Linear).duration_ms, 1);

    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_close(easing.sample(0.0), 0.0);
        assert_close(easing.sample(1.0), 1.0);
        assert_close(easing.sample(0.5), 0.5);
    }
}

#[test]
fn controller_drag_reorders_commits_and_settles() {
    let geo = all_visible(5);
    let mut c = DragController::new(list_of("ABCDE"), GestureConfig::default());

    assert_eq!(c.on_pointer(down(350.0, 50.0, 0), &geo), ControllerOutput::default());
    assert_eq!(c.tick(100, &geo).started, None);
    let out = c.tick(500, &geo);
    assert_eq!(out.started.map(|s| s.start_index), Some(0));
    assert!(c.is_dragging());

    c.on_pointer(moved(350.0, 111.0, 520), &geo);
    assert_close(c.row_offset(1), -39.0);
    c.on_pointer(moved(350.0, 211.0, 540), &geo);
    assert_eq!(c.list().items(), &['B', 'C', 'A', 'D', 'E']);

    let out = c.on_pointer(up(350.0, 211.0, 600), &geo);
    assert_eq!(out.committed, Some(Move::new(0, 2)));
    assert!(!c.is_dragging());

    // The dropped row glides home from its residual offset.
    assert!(c.is_animating());
    assert_close(c.row_offset(2), -39.0);
    assert_close(c.row_offset(1), 0.0);
    c.tick(675, &geo);
    assert_close(c.row_offset(2), -19.5);
    c.tick(750, &geo);
    assert!(!c.is_animating());
    assert_close(c.row_offset(2), 0.0);
}

#[test]
fn controller_long_press_off_handle_is_ignored() {
    let geo = all_visible(5);
    let mut c = DragController::new(list_of("ABCDE"), GestureConfig::default());

    c.on_pointer(down(100.0, 50.0, 0), &geo);
    assert_eq!(c.tick(500, &geo).started, None);
    assert!(!c.is_dragging());

    let out = c.on_pointer(moved(100.0, 400.0, 520), &geo);
    assert_eq!(out, ControllerOutput::default());
    assert_eq!(c.on_pointer(up(100.0, 400.0, 540), &geo).committed, None);
    assert_eq!(c.list().items(), &['A', 'B', 'C', 'D', 'E']);
}

#[test]
fn controller_forwards_auto_scroll_requests() {
    // Rows 0..=2 of 10 visible.
    let geo = GeometrySnapshot::uniform(Size::new(360.0, 300.0), 10, 100.0, 0.0);
    let mut c = DragController::new(list_of("ABCDEFGHIJ"), GestureConfig::default());

    c.on_pointer(down(350.0, 250.0, 0), &geo);
    c.tick(500, &geo);
    let out = c.on_pointer(moved(350.0, 280.0, 520), &geo);
    assert_close(out.scroll_request.unwrap(), 12.0);
    let out = c.on_pointer(moved(350.0, 270.0, 540), &geo);
    assert_eq!(out.scroll_request, None);
}

#[test]
fn controller_cancel_follows_policy() {
    let geo = all_visible(5);

    let mut commit = DragController::new(list_of("ABCDE"), GestureConfig::default());
    commit.on_pointer(down(350.0, 450.0, 0), &geo);
    commit.tick(500, &geo);
    commit.on_pointer(moved(350.0, 380.0, 520), &geo);
    let out = commit.on_pointer(PointerEvent::Cancel { id: 1, now_ms: 540 }, &geo);
    assert_eq!(out.committed, Some(Move::new(4, 3)));
    assert!(commit.is_animating());

    let list = list_of("ABCDE")
        .with_options(ReorderOptions::new().with_cancel_policy(CancelPolicy::Revert));
    let mut revert = DragController::new(list, GestureConfig::default());
    revert.on_pointer(down(350.0, 450.0, 0), &geo);
    revert.tick(500, &geo);
    revert.on_pointer(moved(350.0, 380.0, 520), &geo);
    let out = revert.on_pointer(PointerEvent::Cancel { id: 1, now_ms: 540 }, &geo);
    assert_eq!(out.committed, None);
    assert!(!revert.is_animating());
    assert_eq!(revert.list().items(), &['A', 'B', 'C', 'D', 'E']);
}

#[test]
fn new_drag_cancels_running_settle() {
    let geo = all_visible(5);
    let config = GestureConfig::default().with_settle(10_000, Easing::Linear);
    let mut c = DragController::new(list_of("ABCDE"), config);

    c.on_pointer(down(350.0, 50.0, 0), &geo);
    c.tick(500, &geo);
    c.on_pointer(moved(350.0, 80.0, 520), &geo);
    c.on_pointer(up(350.0, 80.0, 540), &geo);
    assert!(c.is_animating());

    c.on_pointer(down(350.0, 250.0, 560), &geo);
    // Still settling while the new press waits.
    assert!(c.tick(600, &geo).started.is_none());
    assert!(c.is_animating());
    assert!(c.tick(1060, &geo).started.is_some());
    assert!(!c.is_animating());

    let items: Vec<char> = c.into_list().into_items();
    assert_eq!(items, alloc::vec!['A', 'B', 'C', 'D', 'E']);
}
