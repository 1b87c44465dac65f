//! Fixed-capacity trail buffers for tracked world points.

use glam::DVec3;

/// Bounded history of a tracked point's recent world positions.
///
/// An index-based circular buffer: `push` overwrites the oldest slot in O(1)
/// and the buffer never grows. Slots holding `None` have not been written
/// since the last reset; snapshots keep them so a renderer can skip drawing
/// segments into the gap.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    slots: Vec<Option<DVec3>>,
    /// Oldest slot; the next push lands here.
    head: usize,
}

impl TrailBuffer {
    /// Create a trail with a fixed capacity of `length` slots, all empty.
    ///
    /// `length` must be at least 1; config validation enforces this before
    /// any trail is constructed.
    pub fn new(length: usize) -> Self {
        debug_assert!(length >= 1, "trail capacity must be at least 1");
        Self {
            slots: vec![None; length],
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drop the oldest entry and append `point` as the newest. Never fails.
    pub fn push(&mut self, point: DVec3) {
        self.slots[self.head] = Some(point);
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Revert every slot to the empty sentinel.
    pub fn reset(&mut self) {
        self.slots.fill(None);
    }

    /// The full window, oldest first, empty slots included.
    pub fn snapshot(&self) -> Vec<Option<DVec3>> {
        let len = self.slots.len();
        (0..len).map(|i| self.slots[(self.head + i) % len]).collect()
    }
}
