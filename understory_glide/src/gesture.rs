// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One interactive move or resize gesture.

use understory_magnet::{Backend, OrderedSet};

use crate::host::{Host, window_state};
use crate::magnet::WindowMagnet;
use crate::settings::Settings;
use crate::smoother::MoveSmoother;
use crate::types::{Placement, ResizeEdges, WindowId};

/// Smoother and magnet for a window between enter and exit of a size/move loop.
#[derive(Debug)]
pub struct MoveGesture<B: Backend = OrderedSet> {
    smoother: MoveSmoother,
    magnet: WindowMagnet<B>,
}

impl<B: Backend> MoveGesture<B> {
    /// Start a gesture with a fresh desktop snapshot.
    pub fn begin<H: Host + ?Sized>(host: &H, window: WindowId, settings: &Settings) -> Self {
        Self::with_magnet(WindowMagnet::build(host, window, settings))
    }

    /// Start a gesture around an existing magnet.
    pub fn with_magnet(magnet: WindowMagnet<B>) -> Self {
        Self {
            smoother: MoveSmoother::new(),
            magnet,
        }
    }

    /// Smooth and snap a proposed move. Returns whether the snap moved the window.
    pub fn pre_process_pos<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        settings: &Settings,
        placement: &mut Placement,
    ) -> bool {
        let state = window_state(host, window);
        let p = self
            .smoother
            .smooth(state, host.cursor_position(), placement.origin());
        placement.x = p.x;
        placement.y = p.y;
        self.magnet.magnet_move(host, window, settings, placement)
    }

    /// Snap a proposed resize. Move smoothing is dropped so it cannot skew the next
    /// move frame.
    pub fn resize<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        settings: &Settings,
        placement: &mut Placement,
        edges: ResizeEdges,
    ) -> bool {
        self.smoother.forget();
        self.magnet
            .magnet_resize(host, window, settings, placement, edges)
    }

    /// The gesture's magnet.
    pub fn magnet_mut(&mut self) -> &mut WindowMagnet<B> {
        &mut self.magnet
    }

    /// The gesture's smoother.
    pub fn smoother(&self) -> &MoveSmoother {
        &self.smoother
    }

    /// End the gesture, keeping the magnet for a slide.
    pub fn into_magnet(self) -> WindowMagnet<B> {
        self.magnet
    }
}
