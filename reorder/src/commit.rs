use alloc::sync::Arc;

use crate::Move;

/// A callback fired when a drag session ends with a net position change.
///
/// It receives the already-reordered items and the `(from, to)` move. Persisting the new
/// order is up to the callback.
pub type OnMoveCallback<T> = Arc<dyn Fn(&[T], Move) + Send + Sync>;

/// Turns the end of a drag session into a move notification.
///
/// The controller neither validates nor rolls back moves: a caller that rejects a move is
/// responsible for restoring its own copy of the sequence.
pub struct CommitController<T> {
    on_move: Option<OnMoveCallback<T>>,
}

impl<T> CommitController<T> {
    pub fn new() -> Self {
        Self { on_move: None }
    }

    pub fn with_on_move(mut self, on_move: impl Fn(&[T], Move) + Send + Sync + 'static) -> Self {
        self.on_move = Some(Arc::new(on_move));
        self
    }

    pub fn set_on_move(&mut self, on_move: Option<impl Fn(&[T], Move) + Send + Sync + 'static>) {
        self.on_move = on_move.map(|f| Arc::new(f) as _);
    }

    pub fn has_on_move(&self) -> bool {
        self.on_move.is_some()
    }

    /// Reports `mv` to the move callback and returns it.
    ///
    /// Called at most once per drag session, and never for a no-op move.
    pub fn commit(&self, items: &[T], mv: Move) -> Move {
        debug_assert!(!mv.is_noop(), "commit called with from == to ({})", mv.from);
        rdebug!(from = mv.from, to = mv.to, "CommitController::commit");
        if let Some(cb) = &self.on_move {
            cb(items, mv);
        }
        mv
    }
}

impl<T> Default for CommitController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CommitController<T> {
    fn clone(&self) -> Self {
        Self {
            on_move: self.on_move.clone(),
        }
    }
}

impl<T> core::fmt::Debug for CommitController<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommitController")
            .field("on_move", &self.on_move.as_ref().map(|_| ".."))
            .finish()
    }
}
