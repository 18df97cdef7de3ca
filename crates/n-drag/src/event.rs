// SPDX-License-Identifier: MIT
//
// Pointer event types.
//
// The host UI runtime translates its native press / move / release
// notifications into `PointerEvent`s and feeds them to an event source.
// Every event names the element it originated on by `TargetId`; a drag
// session compares that identity against the element it was attached to.

use bitflags::bitflags;

/// Identity of an interactive element.
///
/// Opaque to this crate: two events come from the same element exactly
/// when their ids are equal. Hosts typically hand out one id per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
        const SUPER = 0b0000_1000;
    }
}

/// Pointer event classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed.
    Press,
    /// Pointer moved (with or without a button held).
    Move,
    /// Button released.
    Release,
}

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// A pointer event with position, button, modifiers and originating element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened (press, move, release).
    pub kind: PointerEventKind,
    /// Which button the event concerns. Left for plain moves.
    pub button: MouseButton,
    /// Horizontal position in host coordinates.
    pub x: f64,
    /// Vertical position in host coordinates.
    pub y: f64,
    /// Active modifier keys.
    pub modifiers: Modifiers,
    /// The element the event originated on.
    pub target: TargetId,
}

impl PointerEvent {
    /// A left-button press on `target` at (`x`, `y`).
    #[must_use]
    pub const fn press(target: TargetId, x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Press, target, x, y)
    }

    /// A pointer move over `target` at (`x`, `y`).
    #[must_use]
    pub const fn moved(target: TargetId, x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, target, x, y)
    }

    /// A left-button release over `target` at (`x`, `y`).
    #[must_use]
    pub const fn release(target: TargetId, x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Release, target, x, y)
    }

    const fn new(kind: PointerEventKind, target: TargetId, x: f64, y: f64) -> Self {
        Self {
            kind,
            button: MouseButton::Left,
            x,
            y,
            modifiers: Modifiers::empty(),
            target,
        }
    }

    /// Return a copy reporting a different button.
    #[must_use]
    pub const fn with_button(self, button: MouseButton) -> Self {
        Self { button, ..self }
    }

    /// Return a copy with the given modifiers held.
    #[must_use]
    pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }
}
