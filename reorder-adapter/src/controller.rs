use reorder::{CancelPolicy, DragSession, GeometryProvider, Move, ReorderKey, ReorderList};

use crate::{GestureConfig, GestureEvent, LongPressRecognizer, PointerEvent, Settle};

/// What the host should do after feeding the controller an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerOutput {
    /// A drag started on this event.
    pub started: Option<DragSession>,
    /// Signed scroll delta to apply to the host list.
    pub scroll_request: Option<f32>,
    /// A drag ended with a net move; persist it.
    pub committed: Option<Move>,
}

/// A framework-neutral controller that wraps a [`ReorderList`] and provides the usual adapter
/// workflow (long-press recognition, drag, drop animation).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer` for every raw pointer event over the list
/// - `tick(now_ms)` each frame (long-press timeout and the drop animation)
///
/// and render each row shifted by `row_offset(index)`.
#[derive(Clone)]
pub struct DragController<T, K> {
    list: ReorderList<T, K>,
    recognizer: LongPressRecognizer,
    settle: Option<(K, Settle)>,
    now_ms: u64,
}

impl<T, K: ReorderKey + Clone> DragController<T, K> {
    pub fn new(list: ReorderList<T, K>, config: GestureConfig) -> Self {
        Self {
            list,
            recognizer: LongPressRecognizer::new(config),
            settle: None,
            now_ms: 0,
        }
    }

    pub fn list(&self) -> &ReorderList<T, K> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ReorderList<T, K> {
        &mut self.list
    }

    pub fn into_list(self) -> ReorderList<T, K> {
        self.list
    }

    pub fn config(&self) -> &GestureConfig {
        self.recognizer.config()
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.recognizer.set_config(config);
    }

    pub fn is_dragging(&self) -> bool {
        self.list.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.settle = None;
    }

    /// Feeds one raw pointer event.
    pub fn on_pointer<G: GeometryProvider + ?Sized>(
        &mut self,
        event: PointerEvent,
        geometry: &G,
    ) -> ControllerOutput {
        self.now_ms = self.now_ms.max(event.now_ms());
        let gesture = self.recognizer.process(event);
        self.apply(gesture, geometry)
    }

    /// Advances time: fires a pending long-press and finishes the drop animation.
    pub fn tick<G: GeometryProvider + ?Sized>(
        &mut self,
        now_ms: u64,
        geometry: &G,
    ) -> ControllerOutput {
        self.now_ms = self.now_ms.max(now_ms);
        if self
            .settle
            .as_ref()
            .is_some_and(|(_, s)| s.is_done(self.now_ms))
        {
            self.settle = None;
        }
        let gesture = self.recognizer.tick(self.now_ms);
        self.apply(gesture, geometry)
    }

    /// Visual offset to render the row at `index` with.
    pub fn row_offset(&self, index: usize) -> f32 {
        if self.list.is_dragging() {
            return self.list.row_offset(index);
        }
        match &self.settle {
            Some((key, settle)) if self.list.key_for(index).as_ref() == Some(key) => {
                settle.sample(self.now_ms)
            }
            _ => 0.0,
        }
    }

    fn apply<G: GeometryProvider + ?Sized>(
        &mut self,
        gesture: Option<GestureEvent>,
        geometry: &G,
    ) -> ControllerOutput {
        let mut out = ControllerOutput::default();
        match gesture {
            None => {}
            Some(GestureEvent::LongPress { pos }) => match self.list.begin_drag(pos, geometry) {
                Some(session) => {
                    self.settle = None;
                    out.started = Some(session);
                }
                None => {
                    atrace!(x = pos.x, y = pos.y, "DragController: long press off handle");
                    self.recognizer.ignore_current();
                }
            },
            Some(GestureEvent::DragMove { delta }) => {
                out.scroll_request = self.list.on_drag_move(delta, geometry).scroll_request;
            }
            Some(GestureEvent::DragEnd) => {
                self.start_settle();
                out.committed = self.list.on_drag_end();
            }
            Some(GestureEvent::DragCancel) => {
                if self.list.options().cancel_policy == CancelPolicy::Commit {
                    self.start_settle();
                }
                out.committed = self.list.on_drag_cancel();
            }
        }
        out
    }

    fn start_settle(&mut self) {
        let (Some(session), Some(key)) = (self.list.session(), self.list.dragged_key()) else {
            return;
        };
        if session.accumulated_offset == 0.0 {
            return;
        }
        let config = self.recognizer.config();
        self.settle = Some((
            key,
            Settle::new(
                session.accumulated_offset,
                self.now_ms,
                config.settle_ms,
                config.settle_easing,
            ),
        ));
    }
}

impl<T: core::fmt::Debug, K: core::fmt::Debug> core::fmt::Debug for DragController<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragController")
            .field("list", &self.list)
            .field("recognizer", &self.recognizer)
            .field("settle", &self.settle)
            .field("now_ms", &self.now_ms)
            .finish()
    }
}
