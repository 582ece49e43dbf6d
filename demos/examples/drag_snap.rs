// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a window past a neighbor and watch it stick.
//!
//! The dragged window carries a 7px drop shadow, so its outer bounds snap 7px past
//! the neighbor's edge while the visible frames line up exactly.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_examples --example drag_snap`

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_glide::{Host, Settings, SimDesktop};
use understory_magnet::{Insets, PixelPoint, PixelRect};
use understory_session::{AppliedPosition, PositionChange, SessionRegistry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut desk = SimDesktop::new();
    desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
    let neighbor = desk.add_window(PixelRect::new(100, 100, 600, 700));
    let me = desk.add_window(PixelRect::new(900, 200, 1400, 600));
    desk.set_shadow(me, Insets::new(7, 0, 7, 7));
    desk.set_cursor(PixelPoint::new(1100, 210));

    let mut sessions: SessionRegistry = SessionRegistry::new(Settings {
        slide_enabled: false,
        ..Settings::default()
    });
    sessions.on_session_enter(&desk, me);

    println!("== Dragging left toward window {neighbor:?} ==");
    for _ in 0..12 {
        desk.advance(Duration::from_millis(16));
        let cursor = desk.cursor_position();
        desk.set_cursor(PixelPoint::new(cursor.x - 25, cursor.y));
        let Some(cur) = desk.bounds(me) else {
            return;
        };
        let mut change = PositionChange::moved(cur.left - 25, cur.top);
        sessions.on_position_changing(&desk, me, &mut change);
        desk.set_bounds(
            me,
            PixelRect::from_xywh(change.x, change.y, cur.width(), cur.height()),
        );
        sessions.on_position_changed(&desk, me, &AppliedPosition::moved(change.x, change.y));
        println!("  proposed x={:4}  applied x={:4}", cur.left - 25, change.x);
    }
    sessions.on_session_exit(&desk, me);

    let frame = desk
        .extended_frame_bounds(me)
        .unwrap_or(PixelRect::new(0, 0, 0, 0));
    println!("visible frame left edge: {}", frame.left);
}
