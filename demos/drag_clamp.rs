//! Drives the continuous-timeline strategy into a scroll boundary.
//!
//! A drag pins the offset at the right edge, then a diagonal fling back
//! toward the origin crosses both axes' boundaries at different points of the
//! deceleration curve. The curve is split at each crossing, so the host
//! receives one `Animate` command per segment with its own duration and
//! cubic-bezier easing.
//!
//! ```sh
//! cargo run --example drag_clamp
//! ```

use overscroll::{
    Capabilities, ContentBox, EdgeInsets, PanEvent, RenderCommand, Scrollable, ScrollerOptions,
    Vec2, ViewBox,
};

fn main() {
    let options = ScrollerOptions::new()
        .with_use_transition(true)
        .with_on_render(Some(|command: RenderCommand| match command {
            RenderCommand::Place(p) => {
                println!("place   ({:8.2}, {:8.2})", p.x, p.y);
            }
            RenderCommand::Animate {
                position,
                duration_ms,
                easing,
            } => {
                println!(
                    "animate ({:8.2}, {:8.2})  {:7.1} ms  cubic-bezier({:.3}, {:.3}, {:.3}, {:.3})",
                    position.x, position.y, duration_ms, easing.x1, easing.y1, easing.x2, easing.y2
                );
            }
        }));
    let mut scrollable = Scrollable::new(options, Capabilities::FULL);

    // 100px of horizontal range, plenty of vertical.
    let view = ViewBox {
        client: Vec2::new(320.0, 480.0),
        padding: EdgeInsets::default(),
    };
    let content = ContentBox {
        size: Vec2::new(420.0, 3000.0),
        margin: EdgeInsets::default(),
    };
    scrollable.init_size(&view, &content);

    // Drag well past the right edge: the offset pins at the 100px boundary.
    scrollable.on_pan(&PanEvent::start(300.0, 400.0, 0));
    scrollable.on_pan(&PanEvent::moved(150.0, 390.0, -1.2, -0.1, 32));
    println!(
        "after drag: ({:.2}, {:.2})",
        scrollable.scroll_x(),
        scrollable.scroll_y()
    );

    // Release flinging back toward the origin; both axes run out of room
    // before the velocity decays.
    scrollable.on_pan(&PanEvent::end(150.0, 390.0, -1.2, -0.1, 40));

    let mut now = 40;
    while scrollable.is_coasting() {
        now += 250;
        scrollable.notify_transition_end(now, None);
    }
    println!(
        "at rest: ({:.2}, {:.2})",
        scrollable.scroll_x(),
        scrollable.scroll_y()
    );
}
