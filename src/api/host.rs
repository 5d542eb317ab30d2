use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of one "run before next repaint" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameRequestId(pub u64);

/// Element size reported by a resize notification, in CSS/logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Platform services the engine relies on but never implements itself:
/// frame scheduling, size observation and the device pixel ratio.
pub trait TickHost {
    /// Handle of an element whose size the engine can follow.
    type Element: Clone + PartialEq;

    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);

    fn observe(&mut self, element: &Self::Element);
    fn unobserve(&mut self, element: &Self::Element);
}

/// In-process host for headless use and tests.
///
/// Frame requests are only recorded; the caller decides when a frame fires
/// and forwards it with `TickEngine::on_animation_frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessHost {
    device_pixel_ratio: f64,
    next_frame_id: u64,
    pending_frames: BTreeSet<FrameRequestId>,
    observed: Vec<u64>,
    requested_total: usize,
    cancelled_total: usize,
}

impl HeadlessHost {
    #[must_use]
    pub fn new(device_pixel_ratio: f64) -> Self {
        Self {
            device_pixel_ratio,
            next_frame_id: 1,
            pending_frames: BTreeSet::new(),
            observed: Vec::new(),
            requested_total: 0,
            cancelled_total: 0,
        }
    }

    #[must_use]
    pub fn pending_frames(&self) -> Vec<FrameRequestId> {
        self.pending_frames.iter().copied().collect()
    }

    /// Fires every pending request, returning their ids in request order.
    pub fn take_due_frames(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending_frames).into_iter().collect()
    }

    #[must_use]
    pub fn observed(&self) -> &[u64] {
        &self.observed
    }

    #[must_use]
    pub fn requested_total(&self) -> usize {
        self.requested_total
    }

    #[must_use]
    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TickHost for HeadlessHost {
    type Element = u64;

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_frame_id);
        self.next_frame_id += 1;
        self.requested_total += 1;
        self.pending_frames.insert(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.pending_frames.remove(&id) {
            self.cancelled_total += 1;
        }
    }

    fn observe(&mut self, element: &u64) {
        if !self.observed.contains(element) {
            self.observed.push(*element);
        }
    }

    fn unobserve(&mut self, element: &u64) {
        self.observed.retain(|observed| observed != element);
    }
}
