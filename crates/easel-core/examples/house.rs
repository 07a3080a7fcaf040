//! Records a small labelled house, then steps through it frame by frame.
//!
//! Run with `RUST_LOG=debug cargo run -p easel-core --example house`.

use easel_core::{CursorCommand, Easel, MonospaceMetrics, Primitive, Rect};

fn main() {
    env_logger::init();

    let easel = Easel::default();

    // Walls
    for _ in 0..4 {
        easel.draw_forward(80.0);
        easel.rotate(90.0);
    }

    // Roof
    easel.move_forward(80.0);
    easel.rotate(30.0);
    easel.draw_forward(80.0);
    easel.rotate(120.0);
    easel.draw_forward(80.0);

    // Door, drawn from a saved position so the turtle returns afterwards
    easel.push();
    easel.rotate(120.0);
    easel.move_forward(50.0);
    easel.rotate(90.0);
    easel.move_forward(20.0);
    easel.draw_text_label("door");
    easel.pop();

    let canvas = Rect::new(0.0, 0.0, 320.0, 240.0);
    let metrics = MonospaceMetrics::default();

    easel.apply(CursorCommand::Start);
    for step in 0..=easel.draws() {
        match easel.render(canvas, &metrics) {
            Ok(frame) => {
                println!("step {step}: {} primitives", frame.primitives.len());
                if let Some(Primitive::Label(label)) = frame.primitives.last() {
                    println!("  label {:?} at {:?}", label.text, label.frame);
                }
            }
            Err(e) => {
                log::warn!("render failed: {e}");
                return;
            }
        }
        easel.apply(CursorCommand::Next);
    }
}
