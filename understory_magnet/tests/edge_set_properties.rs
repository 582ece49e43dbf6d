// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for interval punching and nearest-target search.

use std::collections::BTreeSet;

use proptest::prelude::*;
use understory_magnet::{Backend, EdgeSet, OrderedSet, PixelRect, SnapTarget, SortedVec, TargetIndex};

fn target_strategy() -> impl Strategy<Value = SnapTarget> {
    (0i32..20, 0i32..40, 1i32..20).prop_map(|(c, s, len)| SnapTarget::new(c, s, s + len))
}

/// Unit cells `(coord, k)` covered by the set, where `k` stands for `k..k+1`.
fn cells<B: Backend>(set: &EdgeSet<B>) -> BTreeSet<(i32, i32)> {
    let mut out = BTreeSet::new();
    for t in set.iter() {
        for k in t.start..t.end {
            out.insert((t.coord, k));
        }
    }
    out
}

fn total_len<B: Backend>(set: &EdgeSet<B>) -> usize {
    set.iter().map(|t| usize::try_from(t.len()).unwrap()).sum()
}

proptest! {
    #[test]
    fn punch_leaves_exact_remainder(
        targets in prop::collection::vec(target_strategy(), 0..30),
        (start, extent) in (0i32..20, 0i32..10),
        (other_start, other_len) in (0i32..40, 1i32..30),
    ) {
        let mut set: EdgeSet = EdgeSet::new();
        for t in &targets {
            set.insert(*t);
        }
        let before = cells(&set);
        let end = start + extent;
        let other_end = other_start + other_len;
        set.punch(start, end, other_start, other_end);

        let expected: BTreeSet<_> = before
            .into_iter()
            .filter(|&(c, k)| !(start <= c && c <= end && other_start <= k && k < other_end))
            .collect();
        let after = cells(&set);
        prop_assert_eq!(&after, &expected);
        // No two surviving segments overlap at the same coordinate.
        prop_assert_eq!(total_len(&set), after.len());
        prop_assert!(set.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn closest_matches_brute_force(
        targets in prop::collection::vec(target_strategy(), 0..30),
        source in -5i32..30,
        (other_start, other_len) in (0i32..40, 1i32..20),
        within in 0i32..10,
    ) {
        let mut set: EdgeSet = EdgeSet::new();
        for t in &targets {
            set.insert(*t);
        }
        let other_end = other_start + other_len;
        let best_distance = set
            .iter()
            .filter(|t| t.overlaps(other_start, other_end))
            .map(|t| source.abs_diff(t.coord))
            .filter(|d| *d <= within.unsigned_abs())
            .min();
        let got = set.closest(source, other_start, other_end, within);
        prop_assert_eq!(got.map(|c| source.abs_diff(c)), best_distance);
        if let Some(c) = got {
            prop_assert!(set.iter().any(|t| t.coord == c && t.overlaps(other_start, other_end)));
        }
    }

    #[test]
    fn backends_build_identical_indexes(
        rects in prop::collection::vec(
            (0i32..500, 0i32..500, 1i32..300, 1i32..300)
                .prop_map(|(x, y, w, h)| PixelRect::from_xywh(x, y, w, h)),
            0..12,
        ),
    ) {
        let mut ordered: EdgeSet<OrderedSet> = EdgeSet::new();
        let mut sorted: EdgeSet<SortedVec> = EdgeSet::new();
        for r in rects.iter().rev() {
            ordered.punch(r.left, r.right, r.top, r.bottom);
            sorted.punch(r.left, r.right, r.top, r.bottom);
            ordered.insert(SnapTarget::new(r.left, r.top, r.bottom));
            sorted.insert(SnapTarget::new(r.left, r.top, r.bottom));
        }
        prop_assert!(ordered.iter().eq(sorted.iter()));
    }
}

#[test]
fn topmost_window_edge_survives_in_full() {
    let rects = [
        PixelRect::new(100, 100, 300, 300),
        PixelRect::new(0, 0, 400, 400),
        PixelRect::new(50, 50, 500, 120),
    ];
    let idx = TargetIndex::from_snapshot(&rects, &[]);
    let top = rects[0];
    for edge in understory_magnet::Edge::ALL {
        let (start, end) = top.span(edge);
        let want = SnapTarget::new(top.edge(edge), start, end);
        assert!(
            idx.set(edge).iter().any(|t| t == want),
            "frontmost {edge:?} edge must be intact"
        );
    }
}
