// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize a window's right edge across a neighbor's left edge.
//!
//! Inside the magnet zone the width locks to the neighbor; outside it tracks the
//! pointer again.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_examples --example resize_snap`

use tracing_subscriber::EnvFilter;
use understory_glide::{Settings, SimDesktop};
use understory_magnet::PixelRect;
use understory_session::{LiveEdge, SessionRegistry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut desk = SimDesktop::new();
    desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
    desk.add_window(PixelRect::new(600, 0, 1200, 1040));
    let me = desk.add_window(PixelRect::new(100, 200, 400, 600));

    let mut sessions: SessionRegistry = SessionRegistry::new(Settings::default());
    sessions.on_session_enter(&desk, me);

    println!("== Dragging the right edge ==");
    for right in (540..=660).step_by(15) {
        let mut rect = PixelRect::new(100, 200, right, 600);
        sessions.on_live_resize(&desk, me, LiveEdge::Right, &mut rect);
        desk.set_bounds(me, rect);
        println!("  pointer at {right:4}  right edge {:4}", rect.right);
    }
    sessions.on_session_exit(&desk, me);
}
