use crate::GeometryProvider;

/// Nudges the host list while the dragged row sits on a viewport edge.
///
/// The request is proportional to this event's drag delta, so scroll speed follows how hard
/// the user pushes toward the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScroller {
    pub damping: f32,
}

impl AutoScroller {
    pub const fn new(damping: f32) -> Self {
        Self { damping }
    }

    /// Returns the signed scroll delta to apply to the host list, if any.
    ///
    /// A request is made only when `current_index` is the first visible row and `delta` points
    /// up, or the last visible row and `delta` points down.
    pub fn scroll_request<G: GeometryProvider + ?Sized>(
        &self,
        current_index: usize,
        delta: f32,
        geometry: &G,
    ) -> Option<f32> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        let at_top = delta < 0.0 && geometry.first_visible_index() == Some(current_index);
        let at_bottom = delta > 0.0 && geometry.last_visible_index() == Some(current_index);
        if !(at_top || at_bottom) {
            return None;
        }
        let request = delta * self.damping;
        rtrace!(current_index, delta, request, "AutoScroller: scroll request");
        Some(request)
    }
}
