/// What `on_drag_cancel` does with a session that moved its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CancelPolicy {
    /// Treat a cancel like a release: the move is committed.
    #[default]
    Commit,
    /// Restore the order from before the drag and report nothing.
    Revert,
}

/// Configuration for [`crate::ReorderEngine`].
///
/// All fields are plain data, so options can be stored, compared and (with
/// `feature = "serde"`) persisted alongside the rest of a screen's settings.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    /// Width of the drag handle band at the trailing edge of the viewport.
    pub handle_width: f32,
    /// Fraction of a row's size the drag offset must exceed before the row swaps.
    ///
    /// Values are clamped into `0.5..=1.0` when used; below one half a swap would
    /// immediately qualify for swapping back.
    pub swap_threshold: f32,
    /// Row size used when the geometry snapshot has no usable rows.
    pub fallback_row_size: f32,
    /// Multiplier applied to the drag delta when auto-scrolling.
    pub scroll_damping: f32,
    pub cancel_policy: CancelPolicy,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            handle_width: 48.0,
            swap_threshold: 0.6,
            fallback_row_size: 48.0,
            scroll_damping: 0.4,
            cancel_policy: CancelPolicy::Commit,
        }
    }
}

impl ReorderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handle_width(mut self, handle_width: f32) -> Self {
        self.handle_width = handle_width;
        self
    }

    pub fn with_swap_threshold(mut self, swap_threshold: f32) -> Self {
        self.swap_threshold = swap_threshold;
        self
    }

    pub fn with_fallback_row_size(mut self, fallback_row_size: f32) -> Self {
        self.fallback_row_size = fallback_row_size;
        self
    }

    pub fn with_scroll_damping(mut self, scroll_damping: f32) -> Self {
        self.scroll_damping = scroll_damping;
        self
    }

    pub fn with_cancel_policy(mut self, cancel_policy: CancelPolicy) -> Self {
        self.cancel_policy = cancel_policy;
        self
    }

    pub(crate) fn effective_swap_threshold(&self) -> f32 {
        if !self.swap_threshold.is_finite() {
            rwarn!(
                swap_threshold = self.swap_threshold,
                "ReorderOptions: non-finite swap_threshold, using default"
            );
            return Self::default().swap_threshold;
        }
        self.swap_threshold.clamp(0.5, 1.0)
    }
}
