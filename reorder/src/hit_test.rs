use crate::{GeometryProvider, Point};

/// Gates drag start to a handle band along the trailing edge of each row.
///
/// A press starts a drag only when it lands inside a visible row *and* within the rightmost
/// `handle_width` units of the viewport. Everything else on the row stays free for ordinary
/// taps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleHitTester {
    pub handle_width: f32,
}

impl HandleHitTester {
    pub const fn new(handle_width: f32) -> Self {
        Self { handle_width }
    }

    pub fn in_handle_band(&self, x: f32, viewport_width: f32) -> bool {
        x.is_finite() && x >= viewport_width - self.handle_width
    }

    /// Returns the index of the row under `press`, or `None` when the press is not a drag.
    pub fn hit_test<G: GeometryProvider + ?Sized>(&self, press: Point, geometry: &G) -> Option<usize> {
        if !press.y.is_finite() {
            return None;
        }
        let viewport = geometry.viewport();
        if !self.in_handle_band(press.x, viewport.width) {
            return None;
        }
        geometry.row_at(press.y).map(|row| row.index)
    }
}
