//! Integration tests: recording → render → verify frames and bounds.
//!
//! Exercises the full `easel-core` pipeline through the public `Easel` API.

use easel_core::{
    Action, Affine, CursorCommand, Discard, Easel, EaselConfig, MonospaceMetrics, Point,
    Primitive, Rect, ReplayPass, Replayer,
};
use pretty_assertions::assert_eq;

const CANVAS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::default()
}

fn assert_near(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

fn assert_rect_near(actual: Rect, expected: Rect) {
    assert_near(actual.origin(), expected.origin());
    assert_near(Point::new(actual.x1, actual.y1), Point::new(expected.x1, expected.y1));
}

fn set_cursor(easel: &Easel, value: i64) {
    easel.apply(CursorCommand::Start);
    for _ in 0..value {
        easel.apply(CursorCommand::Next);
    }
}

// ─── Bounds ─────────────────────────────────────────────────────────────

#[test]
fn moves_and_turns_only_bound_the_visited_positions() {
    let easel = Easel::default();
    easel.move_forward(20.0);
    easel.rotate(-90.0);
    easel.move_forward(8.0);
    easel.rotate(180.0);
    easel.move_forward(3.0);

    let frame = easel.render(CANVAS, &metrics()).unwrap();
    assert_eq!(easel.draws(), 0);
    assert!(frame.is_empty());
    // (0,0) → (0,-20) → (-8,-20) → (-5,-20)
    assert_rect_near(frame.bounds, Rect::new(-8.0, -20.0, 0.0, 0.0));
}

#[test]
fn l_shaped_path_end_to_end() {
    let easel = Easel::default();
    easel.move_forward(10.0);
    easel.rotate(90.0);
    easel.draw_forward(5.0);
    easel.push();
    easel.rotate(90.0);
    easel.draw_forward(5.0);
    easel.pop();
    easel.draw_forward(5.0);

    assert_eq!(easel.draws(), 3);

    let frame = easel.render(CANVAS, &metrics()).unwrap();
    // (0,0) → (0,-10) → (5,-10) → branch down to (5,-5) → back, on to (10,-10)
    assert_rect_near(frame.bounds, Rect::new(0.0, -10.0, 10.0, 0.0));
    assert_near(frame.camera * frame.bounds.center(), CANVAS.center());
}

// ─── Round trips ─────────────────────────────────────────────────────────

#[test]
fn draw_then_move_back_restores_pose_but_keeps_the_stroke() {
    let easel = Easel::default();
    easel.draw_forward(12.0);
    easel.move_forward(-12.0);
    assert_eq!(easel.draws(), 1);

    let metrics = metrics();
    let replayer = Replayer::new(&metrics, 4.0);
    let stats = replayer
        .replay(&easel.actions(), &ReplayPass::bounds(), &mut Discard, None)
        .unwrap();
    assert_near(stats.pose * Point::ORIGIN, Point::ORIGIN);
    assert_near(stats.pose * Point::new(0.0, -1.0), Point::new(0.0, -1.0));

    let frame = easel.render(CANVAS, &metrics).unwrap();
    assert_eq!(frame.lines().count(), 1);
}

#[test]
fn push_rotate_pop_matches_unrotated_segment() {
    let plain = Easel::default();
    plain.draw_forward(10.0);

    let restored = Easel::default();
    restored.record([
        Action::Push,
        Action::Rotate(90.0),
        Action::Pop,
        Action::DrawForward(10.0),
    ]);

    let a = plain.render(CANVAS, &metrics()).unwrap();
    let b = restored.render(CANVAS, &metrics()).unwrap();
    let (a_from, a_to) = a.lines().next().unwrap();
    let (b_from, b_to) = b.lines().next().unwrap();
    assert_near(b_to - b_from.to_vec2(), a_to - a_from.to_vec2());
}

// ─── Cursor ─────────────────────────────────────────────────────────────

fn five_draws() -> Easel {
    let easel = Easel::default();
    easel.draw_forward(10.0);
    easel.draw_text_label("A");
    easel.rotate(90.0);
    easel.draw_forward(10.0);
    easel.draw_text_label("B");
    easel.draw_forward(10.0);
    easel
}

#[test]
fn cursor_three_reveals_first_three_draws() {
    let easel = five_draws();
    assert_eq!(easel.draws(), 5);
    set_cursor(&easel, 3);

    let frame = easel.render(CANVAS, &metrics()).unwrap();
    assert_eq!(frame.primitives.len(), 3);

    let texts: Vec<_> = frame.labels().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["A"]);

    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), 2);
    // Second revealed line starts where the first ended.
    assert_near(lines[1].0, lines[0].1);
}

#[test]
fn cursor_zero_reveals_nothing() {
    let easel = five_draws();
    easel.apply(CursorCommand::Start);
    let frame = easel.render(CANVAS, &metrics()).unwrap();
    assert!(frame.is_empty());
}

#[test]
fn labels_are_layered_above_lines() {
    let easel = Easel::default();
    easel.draw_text_label("first");
    easel.draw_forward(30.0);
    easel.apply(CursorCommand::End);

    let frame = easel.render(CANVAS, &metrics()).unwrap();
    assert!(matches!(
        frame.primitives.as_slice(),
        [Primitive::Line { .. }, Primitive::Label(_)]
    ));
}

#[test]
fn end_then_back_matches_direct_cursor() {
    let easel = five_draws();
    for n in 0..=5 {
        easel.apply(CursorCommand::End);
        for _ in 0..n {
            easel.apply(CursorCommand::Back);
        }
        let stepped = easel.render(CANVAS, &metrics()).unwrap();

        set_cursor(&easel, 5 - n);
        let direct = easel.render(CANVAS, &metrics()).unwrap();
        assert_eq!(stepped, direct);
        assert_eq!(easel.cursor(), 5 - n);
    }
}

#[test]
fn cursor_past_end_reveals_everything() {
    let easel = five_draws();
    set_cursor(&easel, 9);
    let frame = easel.render(CANVAS, &metrics()).unwrap();
    assert_eq!(frame.primitives.len(), 5);
}

// ─── Labels ─────────────────────────────────────────────────────────────

#[test]
fn label_margin_comes_from_config() {
    let easel = Easel::new(EaselConfig {
        label_margin: 10.0,
        initial_cursor: 1,
    });
    easel.draw_text_label("x");
    let frame = easel.render(CANVAS, &metrics()).unwrap();
    let label = frame.labels().next().unwrap();
    assert_eq!(label.frame.width(), label.text_rect.width() + 20.0);
    assert_eq!(label.frame.height(), label.text_rect.height() + 20.0);
}

#[test]
fn labels_ignore_heading() {
    let easel = Easel::default();
    easel.record([
        Action::Rotate(45.0),
        Action::MoveForward(10.0),
        Action::DrawTextLabel("tilt".into()),
    ]);
    let frame = easel.render(CANVAS, &metrics()).unwrap();
    let label = frame.labels().next().unwrap();
    // Axis-aligned box, horizontal baseline on its bottom edge.
    assert_eq!(label.baseline.y, label.text_rect.y1);
    assert_eq!(label.baseline.x, label.text_rect.x0);

    let camera_free = Affine::translate(-frame.camera.translation());
    let center = camera_free * label.text_rect.center();
    let expected = Point::new(10.0 * 45f64.to_radians().sin(), -10.0 * 45f64.to_radians().cos());
    assert!((center.x - expected.x).abs() <= 1.0);
    assert!((center.y - expected.y).abs() <= 1.0);
}

// ─── Concurrency ────────────────────────────────────────────────────────

#[test]
fn recording_from_many_threads_is_serialized() {
    let easel = std::sync::Arc::new(Easel::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let easel = std::sync::Arc::clone(&easel);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    easel.draw_forward(1.0);
                    easel.rotate(7.0);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(easel.len(), 400);
    assert_eq!(easel.draws(), 200);
    easel.apply(CursorCommand::End);
    let frame = easel.render(CANVAS, &metrics()).unwrap();
    assert_eq!(frame.lines().count(), 200);
}
