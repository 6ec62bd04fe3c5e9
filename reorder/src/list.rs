use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::keys_are_unique;
use crate::{
    CommitController, DragSession, DragUpdate, GeometryProvider, Move, Point, ReorderEngine,
    ReorderKey, ReorderOptions,
};

/// A keyed item sequence together with the reorder state machine that edits it.
///
/// This is the usual entry point for adapters:
/// - `begin_drag` on a long-press recognized at the press position
/// - `on_drag_move` for every vertical pointer delta; apply the returned scroll request
/// - `on_drag_end` on release (or `on_drag_cancel` when the system interrupts the gesture)
///
/// While a drag is active the list is the only writer of its items: `set_items` and
/// `update_items` refuse to run and return `false`.
pub struct ReorderList<T, K> {
    items: Vec<T>,
    get_key: Arc<dyn Fn(&T) -> K + Send + Sync>,
    engine: ReorderEngine,
    commit: CommitController<T>,
}

impl<T, K: ReorderKey> ReorderList<T, K> {
    /// Creates a list from `items` and a key function.
    ///
    /// `get_key` must return a distinct key for every item. Duplicates are debug-asserted.
    pub fn new(items: Vec<T>, get_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        let list = Self {
            items,
            get_key: Arc::new(get_key),
            engine: ReorderEngine::default(),
            commit: CommitController::new(),
        };
        list.debug_assert_unique_keys();
        list
    }

    pub fn with_options(mut self, options: ReorderOptions) -> Self {
        self.engine.set_options(options);
        self
    }

    pub fn with_on_move(mut self, on_move: impl Fn(&[T], Move) + Send + Sync + 'static) -> Self {
        self.commit = self.commit.with_on_move(on_move);
        self
    }

    pub fn options(&self) -> &ReorderOptions {
        self.engine.options()
    }

    pub fn set_options(&mut self, options: ReorderOptions) {
        self.engine.set_options(options);
    }

    pub fn set_on_move(&mut self, on_move: Option<impl Fn(&[T], Move) + Send + Sync + 'static>) {
        self.commit.set_on_move(on_move);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key_for(&self, index: usize) -> Option<K> {
        self.items.get(index).map(|item| (self.get_key)(item))
    }

    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|item| (self.get_key)(item) == *key)
    }

    pub fn keys(&self) -> Vec<K> {
        self.items.iter().map(|item| (self.get_key)(item)).collect()
    }

    /// Replaces the items. Refused (returns `false`) while dragging.
    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        if self.guard_mutation("set_items") {
            return false;
        }
        self.items = items;
        self.debug_assert_unique_keys();
        true
    }

    /// Runs `f` on the items. Refused (returns `false`) while dragging.
    pub fn update_items(&mut self, f: impl FnOnce(&mut Vec<T>)) -> bool {
        if self.guard_mutation("update_items") {
            return false;
        }
        f(&mut self.items);
        self.debug_assert_unique_keys();
        true
    }

    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    pub fn session(&self) -> Option<DragSession> {
        self.engine.session()
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// Key of the item currently being dragged.
    pub fn dragged_key(&self) -> Option<K> {
        let session = self.engine.session()?;
        self.key_for(session.current_index)
    }

    /// Visual offset to render the row at `index` with.
    ///
    /// Only the dragged row is offset; every other row renders at its laid-out position.
    pub fn row_offset(&self, index: usize) -> f32 {
        match self.engine.session() {
            Some(session) if session.current_index == index => session.accumulated_offset,
            _ => 0.0,
        }
    }

    pub fn begin_drag<G: GeometryProvider + ?Sized>(
        &mut self,
        press: Point,
        geometry: &G,
    ) -> Option<DragSession> {
        self.engine.begin_drag(press, geometry, self.items.len())
    }

    pub fn on_drag_move<G: GeometryProvider + ?Sized>(
        &mut self,
        delta: f32,
        geometry: &G,
    ) -> DragUpdate {
        self.engine.on_drag_move(&mut self.items, delta, geometry)
    }

    /// Ends the drag on release and commits the move, if the row changed position.
    pub fn on_drag_end(&mut self) -> Option<Move> {
        let mv = self.engine.end_drag()?;
        Some(self.commit.commit(&self.items, mv))
    }

    /// Ends the drag on interruption, following the configured [`crate::CancelPolicy`].
    pub fn on_drag_cancel(&mut self) -> Option<Move> {
        let mv = self.engine.cancel_drag(&mut self.items)?;
        Some(self.commit.commit(&self.items, mv))
    }

    fn guard_mutation(&self, _op: &'static str) -> bool {
        if !self.engine.is_dragging() {
            return false;
        }
        rwarn!(op = _op, "ReorderList: refusing to mutate items during a drag");
        true
    }

    fn debug_assert_unique_keys(&self) {
        if cfg!(debug_assertions) {
            let keys = self.keys();
            let unique = keys_are_unique(&keys);
            if !unique {
                rwarn!(count = keys.len(), "ReorderList: duplicate item keys");
            }
            debug_assert!(unique, "ReorderList: item keys must be unique");
        }
    }
}

impl<T: Clone, K> Clone for ReorderList<T, K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            get_key: Arc::clone(&self.get_key),
            engine: self.engine.clone(),
            commit: self.commit.clone(),
        }
    }
}

impl<T: core::fmt::Debug, K> core::fmt::Debug for ReorderList<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReorderList")
            .field("items", &self.items)
            .field("engine", &self.engine)
            .field("commit", &self.commit)
            .finish_non_exhaustive()
    }
}
