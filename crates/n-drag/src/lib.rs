// SPDX-License-Identifier: MIT
//
// n-drag — Pointer drag sessions for n-picker.
//
// A color picker's saturation panel and hue slider both need the same
// thing from the pointer: "tell me when a drag starts on this element,
// every time it moves over it, and when it ends". This crate turns the
// host's raw press / move / release events into exactly that.
//
//   host UI runtime ─▶ PointerHub::dispatch ─▶ listeners ─▶ DragSession
//                                                              │
//                                         on_start / on_move / on_end
//
// The global move / release listeners a browser widget would hang on the
// document are registered on an injected `EventSource` instead, so any
// number of sessions can share one hub (or each get their own in tests)
// without process-wide mutable state.
//
// Everything is single-threaded (`Rc` / `RefCell`), matching the UI
// dispatch loop it runs on.

pub mod event;
pub mod session;
pub mod source;

pub use event::{Modifiers, MouseButton, PointerEvent, PointerEventKind, TargetId};
pub use session::{Callback, DragConfig, DragSession};
pub use source::{Channel, EventSource, Handler, ListenerId, PointerHub};
