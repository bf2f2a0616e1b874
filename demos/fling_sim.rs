//! Simulates a swipe-and-fling on the discrete polling strategy and prints
//! the decaying displacement frame by frame.
//!
//! ```sh
//! cargo run --example fling_sim
//! ```

use std::sync::{Arc, Mutex};

use overscroll::{
    Capabilities, ContentBox, EdgeInsets, PanEvent, ScrollUpdate, Scrollable, ScrollerOptions,
    Vec2, ViewBox,
};

fn main() {
    let log: Arc<Mutex<Vec<ScrollUpdate>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let options = ScrollerOptions::new()
        .with_on_scroll(Some(move |update: ScrollUpdate| {
            sink.lock().unwrap().push(update);
        }));
    let mut scrollable = Scrollable::new(options, Capabilities::LEGACY);

    // A 320x480 viewport over a 2000px-wide strip: 1680px of horizontal range.
    let view = ViewBox {
        client: Vec2::new(320.0, 480.0),
        padding: EdgeInsets::default(),
    };
    let content = ContentBox {
        size: Vec2::new(2000.0, 480.0),
        margin: EdgeInsets::default(),
    };
    scrollable.init_size(&view, &content);

    // Press, drag 40px, release at 0.9 px/ms.
    scrollable.on_pan(&PanEvent::start(200.0, 240.0, 0));
    scrollable.on_pan(&PanEvent::moved(160.0, 240.0, 0.9, 0.0, 40));
    scrollable.on_pan(&PanEvent::end(160.0, 240.0, 0.9, 0.0, 48));

    let step = scrollable.tick_interval_ms().round() as u64;
    let mut now = 48;
    while scrollable.is_coasting() {
        now += step;
        scrollable.tick(now);
    }

    for update in log.lock().unwrap().iter() {
        let tag = if update.inertial { "coast" } else { "drag " };
        println!("{tag} {:8.2} px", update.offset.x);
    }
    println!("at rest: {:.2} px after {now} ms", scrollable.scroll_x());
}
