// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling a window and let it coast.
//!
//! The window is thrown toward the right screen edge and bounces softly off the work
//! area. Settings are loaded from JSON to show the configuration format.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_examples --example slide`

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_glide::{Host, Settings, SimDesktop, SlideTick};
use understory_magnet::{PixelPoint, PixelRect};
use understory_session::{AppliedPosition, PositionChange, SessionEnd, SessionRegistry};

const SETTINGS: &str = r#"{
    "snap-enabled": true,
    "slide-enabled": true,
    "slide-with-snap": false,
    "slide-slowdown": 10
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_json(SETTINGS)?;
    let mut desk = SimDesktop::new();
    desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
    let me = desk.add_window(PixelRect::new(800, 300, 1200, 600));
    desk.set_cursor(PixelPoint::new(1000, 310));

    let mut sessions: SessionRegistry = SessionRegistry::new(settings);
    sessions.on_session_enter(&desk, me);
    for _ in 0..5 {
        desk.advance(Duration::from_millis(16));
        let cursor = desk.cursor_position();
        desk.set_cursor(PixelPoint::new(cursor.x + 40, cursor.y + 8));
        let cur = desk.bounds(me).ok_or("window vanished")?;
        let mut change = PositionChange::moved(cur.left + 40, cur.top + 8);
        sessions.on_position_changing(&desk, me, &mut change);
        desk.set_bounds(
            me,
            PixelRect::from_xywh(change.x, change.y, cur.width(), cur.height()),
        );
        sessions.on_position_changed(&desk, me, &AppliedPosition::moved(change.x, change.y));
    }

    if sessions.on_session_exit(&desk, me) == SessionEnd::Release {
        println!("released too slowly to slide");
        return Ok(());
    }

    println!("== Sliding ==");
    loop {
        let tick = sessions.on_slide_tick(&mut desk, me);
        let pos = desk.window_position(me).ok_or("window vanished")?;
        println!("  ({:5}, {:5})", pos.x, pos.y);
        if let SlideTick::Finished(end) = tick {
            println!("slide ended: {end:?}");
            break;
        }
    }
    Ok(())
}
