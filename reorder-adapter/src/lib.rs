//! Adapter utilities for the `reorder` crate.
//!
//! The `reorder` crate is UI-agnostic and focuses on the drag state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Long-press recognition over raw pointer events
//! - A settle tween that glides the dropped row into its slot (adapter-driven)
//! - [`DragController`], which wires both to a [`reorder::ReorderList`]
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod gesture;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{ControllerOutput, DragController};
pub use gesture::{GestureConfig, GestureEvent, LongPressRecognizer, PointerEvent};
pub use tween::{Easing, Settle};
