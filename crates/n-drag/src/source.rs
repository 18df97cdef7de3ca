// SPDX-License-Identifier: MIT
//
// Pointer event sources — where drag sessions register their listeners.
//
// A browser widget would hang its press listener on an element and its
// move / release listeners on the document. Here both live behind the
// `EventSource` trait, which a session receives at construction. Tests and
// hosts that want isolation create their own `PointerHub`; hosts that
// want one process-wide source share a single hub handle.
//
// # Dispatch
//
// `PointerHub::dispatch` routes by event kind:
//
//   Press   → listeners on `Channel::Press(event.target)`
//   Move    → every `Channel::Move` listener
//   Release → every `Channel::Release` listener
//
// Matching handlers are snapshotted before any runs, so a handler may
// register or remove listeners mid-dispatch. Listeners added during a
// dispatch first see the next event; listeners removed during a dispatch
// are skipped if they have not run yet.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::event::{PointerEvent, PointerEventKind, TargetId};

/// Which events a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Presses that originate on one element.
    Press(TargetId),
    /// Every pointer move, wherever it originates.
    Move,
    /// Every button release, wherever it originates.
    Release,
}

/// Handle returned by [`EventSource::listen`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A registered event callback.
pub type Handler = Rc<dyn Fn(&PointerEvent)>;

/// Registration interface for pointer listeners.
///
/// Methods take `&self`: handlers run synchronously inside dispatch and
/// commonly register or remove listeners while doing so, so implementations
/// use interior mutability.
pub trait EventSource {
    /// Register `handler` on `channel`.
    fn listen(&self, channel: Channel, handler: Handler) -> ListenerId;

    /// Remove a listener. Returns `false` if it was not registered.
    fn unlisten(&self, id: ListenerId) -> bool;
}

impl<S: EventSource + ?Sized> EventSource for Rc<S> {
    fn listen(&self, channel: Channel, handler: Handler) -> ListenerId {
        (**self).listen(channel, handler)
    }

    fn unlisten(&self, id: ListenerId) -> bool {
        (**self).unlisten(id)
    }
}

// ─── PointerHub ──────────────────────────────────────────────────────────────

/// In-process [`EventSource`] with explicit dispatch.
///
/// Cloning yields another handle to the same registry.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use n_drag::{Channel, EventSource, PointerEvent, PointerHub, TargetId};
///
/// let hub = PointerHub::new();
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// hub.listen(Channel::Move, Rc::new(move |_: &PointerEvent| counter.set(counter.get() + 1)));
///
/// hub.dispatch(&PointerEvent::moved(TargetId(1), 0.0, 0.0));
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

struct Listener {
    id: ListenerId,
    channel: Channel,
    handler: Handler,
}

impl PointerHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every matching listener.
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let channel = match event.kind {
            PointerEventKind::Press => Channel::Press(event.target),
            PointerEventKind::Move => Channel::Move,
            PointerEventKind::Release => Channel::Release,
        };

        let matched: Vec<(ListenerId, Handler)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.channel == channel)
            .map(|l| (l.id, Rc::clone(&l.handler)))
            .collect();

        let mut ran = 0;
        for (id, handler) in matched {
            if self.is_registered(id) {
                handler(event);
                ran += 1;
            }
        }
        ran
    }

    /// Number of listeners registered on `channel`.
    #[must_use]
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.channel == channel)
            .count()
    }

    /// Total number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.registry.borrow().listeners.iter().any(|l| l.id == id)
    }
}

impl EventSource for PointerHub {
    fn listen(&self, channel: Channel, handler: Handler) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push(Listener { id, channel, handler });
        id
    }

    fn unlisten(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|l| l.id != id);
        registry.listeners.len() != before
    }
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("PointerHub")
            .field(
                "listeners",
                &registry.listeners.iter().map(|l| (l.id, l.channel)).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
