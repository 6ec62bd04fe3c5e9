//! A headless drag-to-reorder engine for scrollable lists.
//!
//! A user long-presses the handle of a row, drags it up or down, sees the row swap places
//! with its neighbours as it goes, gets the list auto-scrolled when pushing past a viewport
//! edge, and commits one `(from, to)` move on release.
//!
//! The crate is UI-agnostic. A host list is expected to provide:
//! - a geometry snapshot of the visible rows and the viewport (see [`GeometryProvider`])
//! - the press position of a recognized long-press
//! - vertical pointer deltas while the pointer is held
//!
//! In return it gets scroll requests for its viewport and a [`Move`] to persist. For
//! long-press recognition and drop animation, see the `reorder-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod auto_scroll;
mod commit;
mod engine;
mod geometry;
mod hit_test;
mod key;
mod list;
mod options;
mod types;


pub use auto_scroll::AutoScroller;
pub use commit::{CommitController, OnMoveCallback};
pub use engine::{DragState, DragUpdate, ReorderEngine};
pub use geometry::{GeometryProvider, GeometrySnapshot};
pub use hit_test::HandleHitTester;
pub use key::ReorderKey;
pub use list::ReorderList;
pub use options::{CancelPolicy, ReorderOptions};
pub use types::{DragSession, Move, Point, RowGeometry, Size};
