// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move and resize adjusters against generated desktops.

use proptest::prelude::*;
use understory_glide::{
    ModifierKeys, Placement, ResizeEdges, Settings, SimDesktop, VelocityTracker, WindowMagnet,
    WindowState,
};
use understory_magnet::{PixelPoint, PixelRect};

fn desktop(neighbors: &[PixelRect]) -> SimDesktop {
    let mut desk = SimDesktop::new();
    desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
    for r in neighbors {
        desk.add_window(*r);
    }
    desk
}

fn rect_strategy() -> impl Strategy<Value = PixelRect> {
    (0i32..1600, 0i32..900, 20i32..400, 20i32..400)
        .prop_map(|(x, y, w, h)| PixelRect::from_xywh(x, y, w, h))
}

fn edges_strategy() -> impl Strategy<Value = ResizeEdges> {
    (0u8..16).prop_map(ResizeEdges::from_bits_truncate)
}

proptest! {
    #[test]
    fn resize_never_goes_below_minimum(
        neighbors in prop::collection::vec(rect_strategy(), 0..8),
        (x, y, cx, cy) in (0i32..1600, 0i32..900, 136i32..500, 39i32..500),
        edges in edges_strategy(),
        distance in 0i32..200,
    ) {
        let mut desk = desktop(&neighbors);
        let me = desk.add_window(PixelRect::from_xywh(x, y, cx, cy));
        let settings = Settings { snap_distance: distance, ..Settings::default() };
        let mut magnet: WindowMagnet = WindowMagnet::build(&desk, me, &settings);
        let mut p = Placement::new(x, y, cx, cy);
        magnet.magnet_resize(&desk, me, &settings, &mut p, edges);
        prop_assert!(p.cx >= 136, "width {} below minimum", p.cx);
        prop_assert!(p.cy >= 39, "height {} below minimum", p.cy);
    }

    #[test]
    fn move_is_idempotent_once_snapped(
        neighbors in prop::collection::vec(rect_strategy(), 0..8),
        (x, y, cx, cy) in (-50i32..1600, -50i32..950, 40i32..400, 40i32..400),
        distance in 0i32..80,
    ) {
        let mut desk = desktop(&neighbors);
        let me = desk.add_window(PixelRect::from_xywh(x, y, cx, cy));
        let settings = Settings { snap_distance: distance, ..Settings::default() };
        let mut magnet: WindowMagnet = WindowMagnet::build(&desk, me, &settings);
        let mut p = Placement::new(x, y, cx, cy);
        if magnet.magnet_move(&desk, me, &settings, &mut p) {
            let snapped = p;
            prop_assert!(!magnet.magnet_move(&desk, me, &settings, &mut p), "{snapped:?} moved again");
            prop_assert_eq!(p, snapped);
        }
    }

    #[test]
    fn velocity_sign_follows_motion(
        steps in prop::collection::vec((0i32..40, 5u64..30), 2..12),
    ) {
        let state = WindowState::default();
        let mut t = VelocityTracker::new();
        let mut now = std::time::Duration::from_secs(5);
        let mut x = 0;
        t.update(now, state, PixelPoint::new(x, 0));
        for (dx, dt) in &steps {
            now += std::time::Duration::from_millis(*dt);
            x += dx;
            t.update(now, state, PixelPoint::new(x, 0));
        }
        if let Some(release) = t.complete(now) {
            prop_assert!(release.velocity.x >= 0.0);
            prop_assert_eq!(release.velocity.y, 0.0);
        }
    }
}

#[test]
fn alt_disables_move_and_resize() {
    let mut desk = desktop(&[PixelRect::new(0, 0, 100, 100)]);
    let me = desk.add_window(PixelRect::new(300, 50, 400, 150));
    let settings = Settings::default();
    let mut magnet: WindowMagnet = WindowMagnet::build(&desk, me, &settings);
    desk.hold(ModifierKeys::ALT);

    let mut p = Placement::new(105, 50, 100, 100);
    assert!(!magnet.magnet_move(&desk, me, &settings, &mut p));
    assert_eq!(p, Placement::new(105, 50, 100, 100));

    let mut p = Placement::new(105, 50, 100, 100);
    assert!(!magnet.magnet_resize(&desk, me, &settings, &mut p, ResizeEdges::all()));
    assert_eq!(p, Placement::new(105, 50, 100, 100));

    desk.hold(ModifierKeys::empty());
    assert!(magnet.magnet_move(&desk, me, &settings, &mut p));
    assert_eq!(p.x, 100);
}

#[test]
fn occluded_edges_do_not_attract() {
    // Back window's right edge at x=500 is covered by the front window.
    let back = PixelRect::new(100, 100, 500, 500);
    let front = PixelRect::new(400, 50, 800, 600);
    let mut desk = desktop(&[back, front]);
    let me = desk.add_window(PixelRect::new(1000, 200, 1200, 400));
    let settings = Settings::default();
    let mut magnet: WindowMagnet = WindowMagnet::build(&desk, me, &settings);

    let mut p = Placement::new(510, 200, 200, 200);
    magnet.magnet_move(&desk, me, &settings, &mut p);
    assert_eq!(p.x, 510, "hidden edge ignored");
}
