use crate::types::move_item;
use crate::{
    AutoScroller, CancelPolicy, DragSession, GeometryProvider, HandleHitTester, Move, Point,
    ReorderOptions,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Result of one drag-move event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragUpdate {
    /// The session after this event, or `None` if no drag is active.
    pub session: Option<DragSession>,
    /// Signed scroll delta the host should apply to its list.
    pub scroll_request: Option<f32>,
    /// Number of single-position swaps performed by this event.
    pub swaps: usize,
}

/// The drag-to-reorder state machine.
///
/// The engine holds no items: callers pass the sequence into [`ReorderEngine::on_drag_move`]
/// and must not mutate it between `begin_drag` and `end_drag`/`cancel_drag`.
///
/// For a version that owns the items and reports commits through a callback, see
/// [`crate::ReorderList`].
#[derive(Clone, Debug, Default)]
pub struct ReorderEngine {
    options: ReorderOptions,
    state: DragState,
}

impl ReorderEngine {
    pub fn new(options: ReorderOptions) -> Self {
        Self {
            options,
            state: DragState::Idle,
        }
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// Replaces the options. Takes effect on the next event, including mid-drag.
    pub fn set_options(&mut self, options: ReorderOptions) {
        self.options = options;
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn hit_tester(&self) -> HandleHitTester {
        HandleHitTester::new(self.options.handle_width)
    }

    pub fn auto_scroller(&self) -> AutoScroller {
        AutoScroller::new(self.options.scroll_damping)
    }

    /// Starts a drag if `press` hits a row handle.
    ///
    /// Returns `None` (and stays idle) when the press misses every visible row, falls outside
    /// the handle band, or hits a row at or beyond `item_count`. A press while a drag is
    /// already active is ignored.
    pub fn begin_drag<G: GeometryProvider + ?Sized>(
        &mut self,
        press: Point,
        geometry: &G,
        item_count: usize,
    ) -> Option<DragSession> {
        if self.is_dragging() {
            rdebug!("ReorderEngine::begin_drag: already dragging");
            return None;
        }
        let index = self.hit_tester().hit_test(press, geometry)?;
        if index >= item_count {
            rwarn!(index, item_count, "ReorderEngine::begin_drag: row beyond item count");
            return None;
        }
        let session = DragSession::new(index);
        self.state = DragState::Dragging(session);
        rdebug!(index, "ReorderEngine::begin_drag");
        Some(session)
    }

    /// Applies one vertical drag delta.
    ///
    /// Swaps the dragged item through `items` as the offset crosses the threshold, then asks
    /// the auto-scroller whether the host list should scroll. Idle engines return an empty
    /// update.
    pub fn on_drag_move<T, G: GeometryProvider + ?Sized>(
        &mut self,
        items: &mut [T],
        delta: f32,
        geometry: &G,
    ) -> DragUpdate {
        let DragState::Dragging(mut session) = self.state else {
            return DragUpdate::default();
        };
        if !delta.is_finite() {
            rwarn!(delta, "ReorderEngine::on_drag_move: ignoring non-finite delta");
            return DragUpdate {
                session: Some(session),
                ..DragUpdate::default()
            };
        }
        if session.current_index >= items.len() {
            rwarn!(
                current_index = session.current_index,
                count = items.len(),
                "ReorderEngine::on_drag_move: items changed during drag, dropping session"
            );
            debug_assert!(
                session.current_index < items.len(),
                "items must not be resized during a drag (index={}, count={})",
                session.current_index,
                items.len()
            );
            self.state = DragState::Idle;
            return DragUpdate::default();
        }

        let row_size = geometry.row_size_or(session.current_index, self.options.fallback_row_size);
        let threshold = self.options.effective_swap_threshold();
        let swaps = session.advance(delta, row_size, threshold, items.len(), |from, to| {
            rtrace!(from, to, "ReorderEngine: swap");
            move_item(items, from, to);
        });
        let scroll_request = self
            .auto_scroller()
            .scroll_request(session.current_index, delta, geometry);

        self.state = DragState::Dragging(session);
        DragUpdate {
            session: Some(session),
            scroll_request,
            swaps,
        }
    }

    /// Ends the drag (release) and returns the move to commit, if the row changed position.
    ///
    /// The session is always cleared.
    pub fn end_drag(&mut self) -> Option<Move> {
        let session = self.take_session()?;
        let mv = session.pending_move();
        rdebug!(
            start_index = session.start_index,
            current_index = session.current_index,
            "ReorderEngine::end_drag"
        );
        mv
    }

    /// Ends the drag because the gesture was interrupted.
    ///
    /// With [`CancelPolicy::Commit`] this behaves like [`ReorderEngine::end_drag`]. With
    /// [`CancelPolicy::Revert`] the dragged item is moved back to its start index and nothing
    /// is reported.
    pub fn cancel_drag<T>(&mut self, items: &mut [T]) -> Option<Move> {
        let session = self.take_session()?;
        let mv = session.pending_move();
        rdebug!(
            start_index = session.start_index,
            current_index = session.current_index,
            policy = ?self.options.cancel_policy,
            "ReorderEngine::cancel_drag"
        );
        match self.options.cancel_policy {
            CancelPolicy::Commit => mv,
            CancelPolicy::Revert => {
                if let Some(mv) = mv {
                    mv.inverse().apply(items);
                }
                None
            }
        }
    }

    fn take_session(&mut self) -> Option<DragSession> {
        match core::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }
}
