// SPDX-License-Identifier: MIT
//
// Drag sessions — press / move / release on one element, reported as
// start / move / end callbacks.
//
// Lifecycle:
//
//   attach(target)          press listener on Channel::Press(target)
//        │
//   press on target  ──▶    on_start, then Move + Release listeners
//        │
//   move             ──▶    on_move   (only if event.target == target)
//        │
//   release          ──▶    on_end    (only if event.target == target),
//                           then Move + Release listeners removed
//
// The origin check gates the user callbacks, never the cleanup: a release
// that lands on another element still tears the listener pair down.
// `detach()` removes the press listener and any pair still in flight.
//
// Listener closures hold a `Weak` back-reference to the session, so the
// event source never keeps a dropped session alive.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use crate::event::{PointerEvent, TargetId};
use crate::source::{Channel, EventSource, ListenerId};

/// A user callback for one drag phase.
pub type Callback = Box<dyn FnMut(&PointerEvent)>;

// ─── DragConfig ──────────────────────────────────────────────────────────────

/// Callbacks for the three drag phases. All are optional.
///
/// ```
/// use n_drag::DragConfig;
///
/// let config = DragConfig::new()
///     .on_start(|e| println!("start at {},{}", e.x, e.y))
///     .on_move(|e| println!("move to {},{}", e.x, e.y));
/// assert!(config.has_start() && !config.has_end());
/// ```
#[derive(Default)]
pub struct DragConfig {
    on_start: Option<Callback>,
    on_move: Option<Callback>,
    on_end: Option<Callback>,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Start,
    Move,
    End,
}

impl DragConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on every press on the attached element.
    #[must_use]
    pub fn on_start(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Called on every move that originates on the attached element.
    #[must_use]
    pub fn on_move(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_move = Some(Box::new(f));
        self
    }

    /// Called on a release that originates on the attached element.
    #[must_use]
    pub fn on_end(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    #[must_use]
    pub const fn has_start(&self) -> bool {
        self.on_start.is_some()
    }

    #[must_use]
    pub const fn has_move(&self) -> bool {
        self.on_move.is_some()
    }

    #[must_use]
    pub const fn has_end(&self) -> bool {
        self.on_end.is_some()
    }

    fn callback_mut(&mut self, phase: Phase) -> Option<&mut Callback> {
        match phase {
            Phase::Start => self.on_start.as_mut(),
            Phase::Move => self.on_move.as_mut(),
            Phase::End => self.on_end.as_mut(),
        }
    }
}

impl fmt::Debug for DragConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfig")
            .field("on_start", &self.has_start())
            .field("on_move", &self.has_move())
            .field("on_end", &self.has_end())
            .finish()
    }
}

// ─── DragSession ─────────────────────────────────────────────────────────────

/// Tracks drags that start on one element.
///
/// Single-threaded: the session and its listeners run on the host's UI
/// dispatch loop. Dropping the session detaches it.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use n_drag::{DragConfig, DragSession, PointerEvent, PointerHub, TargetId};
///
/// let hub = PointerHub::new();
/// let moves = Rc::new(Cell::new(0));
/// let seen = Rc::clone(&moves);
///
/// let panel = TargetId(1);
/// let session = DragSession::new(
///     hub.clone(),
///     DragConfig::new().on_move(move |_| seen.set(seen.get() + 1)),
/// );
/// session.attach(panel);
///
/// hub.dispatch(&PointerEvent::press(panel, 10.0, 10.0));
/// hub.dispatch(&PointerEvent::moved(panel, 12.0, 10.0));
/// hub.dispatch(&PointerEvent::release(panel, 12.0, 10.0));
///
/// assert_eq!(moves.get(), 1);
/// assert!(!session.is_dragging());
/// ```
pub struct DragSession<S: EventSource + 'static> {
    shared: Rc<Shared<S>>,
}

struct Shared<S> {
    source: S,
    config: RefCell<DragConfig>,
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    target: Option<TargetId>,
    press: Option<ListenerId>,
    drag: Option<ActiveDrag>,
}

/// The move / release listener pair of an in-flight drag.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    on_move: ListenerId,
    on_release: ListenerId,
}

impl<S: EventSource + 'static> DragSession<S> {
    /// Create a detached session that will register listeners on `source`.
    #[must_use]
    pub fn new(source: S, config: DragConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                source,
                config: RefCell::new(config),
                state: RefCell::new(State::default()),
            }),
        }
    }

    /// Start listening for presses on `target`.
    ///
    /// A session tracks one element at a time; attaching again detaches
    /// from the previous element first.
    pub fn attach(&self, target: TargetId) {
        self.detach();

        let weak = Rc::downgrade(&self.shared);
        let press = self.shared.source.listen(
            Channel::Press(target),
            Rc::new(move |event: &PointerEvent| {
                if let Some(shared) = weak.upgrade() {
                    Shared::pressed(&shared, event);
                }
            }),
        );

        let mut state = self.shared.state.borrow_mut();
        state.target = Some(target);
        state.press = Some(press);
        debug!(element = target.0, "drag session attached");
    }

    /// Stop listening for presses and cancel any drag in flight.
    ///
    /// A cancelled drag gets no `on_end` callback.
    pub fn detach(&self) {
        let (press, target) = {
            let mut state = self.shared.state.borrow_mut();
            (state.press.take(), state.target.take())
        };

        if let Some(id) = press {
            self.shared.source.unlisten(id);
        }
        if self.shared.end_drag() {
            debug!(element = ?target.map(|t| t.0), "in-flight drag cancelled by detach");
        }
        if let Some(target) = target {
            debug!(element = target.0, "drag session detached");
        }
    }

    /// Whether a press listener is registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.shared.state.borrow().press.is_some()
    }

    /// Whether a move / release listener pair is registered.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.shared.state.borrow().drag.is_some()
    }

    /// The element this session is attached to.
    #[must_use]
    pub fn target(&self) -> Option<TargetId> {
        self.shared.state.borrow().target
    }

    /// The event source listeners are registered on.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.shared.source
    }
}

impl<S: EventSource + 'static> Drop for DragSession<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<S: EventSource + 'static> fmt::Debug for DragSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("DragSession")
            .field("target", &state.target)
            .field("attached", &state.press.is_some())
            .field("dragging", &state.drag.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: EventSource + 'static> Shared<S> {
    fn pressed(this: &Rc<Self>, event: &PointerEvent) {
        debug!(element = event.target.0, x = event.x, y = event.y, "drag start");
        this.invoke(Phase::Start, event);

        // A press without a matching release leaves a stale pair behind.
        this.end_drag();

        let on_move = this.source.listen(Channel::Move, Self::forward(this, Self::moved));
        let on_release = this
            .source
            .listen(Channel::Release, Self::forward(this, Self::released));
        this.state.borrow_mut().drag = Some(ActiveDrag {
            on_move,
            on_release,
        });
    }

    fn moved(&self, event: &PointerEvent) {
        if self.is_origin(event) {
            self.invoke(Phase::Move, event);
        } else {
            trace!(element = event.target.0, "move off target ignored");
        }
    }

    fn released(&self, event: &PointerEvent) {
        if self.is_origin(event) {
            self.invoke(Phase::End, event);
        }
        self.end_drag();
        debug!(element = event.target.0, x = event.x, y = event.y, "drag end");
    }

    /// Wrap a phase handler in a listener that holds only a weak reference.
    fn forward(this: &Rc<Self>, handler: fn(&Self, &PointerEvent)) -> Rc<dyn Fn(&PointerEvent)> {
        let weak: Weak<Self> = Rc::downgrade(this);
        Rc::new(move |event: &PointerEvent| {
            if let Some(shared) = weak.upgrade() {
                handler(&shared, event);
            }
        })
    }

    fn is_origin(&self, event: &PointerEvent) -> bool {
        self.state.borrow().target == Some(event.target)
    }

    /// Remove the move / release pair. Returns `false` if none was active.
    fn end_drag(&self) -> bool {
        let drag = self.state.borrow_mut().drag.take();
        match drag {
            Some(ActiveDrag {
                on_move,
                on_release,
            }) => {
                self.source.unlisten(on_move);
                self.source.unlisten(on_release);
                true
            }
            None => false,
        }
    }

    fn invoke(&self, phase: Phase, event: &PointerEvent) {
        let Ok(mut config) = self.config.try_borrow_mut() else {
            warn!(?phase, "re-entrant drag callback skipped");
            return;
        };
        if let Some(callback) = config.callback_mut(phase) {
            callback(event);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PointerHub;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    const A: TargetId = TargetId(1);
    const B: TargetId = TargetId(2);

    /// Records which callbacks fired, in order.
    #[derive(Clone, Default)]
    struct Log(Rc<RefCell<Vec<&'static str>>>);

    impl Log {
        fn config(&self) -> DragConfig {
            let (start, mv, end) = (self.clone(), self.clone(), self.clone());
            DragConfig::new()
                .on_start(move |_| start.0.borrow_mut().push("start"))
                .on_move(move |_| mv.0.borrow_mut().push("move"))
                .on_end(move |_| end.0.borrow_mut().push("end"))
        }

        fn take(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    fn session(hub: &PointerHub, log: &Log, target: TargetId) -> DragSession<PointerHub> {
        let session = DragSession::new(hub.clone(), log.config());
        session.attach(target);
        session
    }

    fn globals(hub: &PointerHub) -> (usize, usize) {
        (
            hub.listener_count(Channel::Move),
            hub.listener_count(Channel::Release),
        )
    }

    // ── Basic Drag ───────────────────────────────────────────────────────

    #[test]
    fn attach_registers_only_press_listener() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        assert!(s.is_attached());
        assert!(!s.is_dragging());
        assert_eq!(s.target(), Some(A));
        assert_eq!(hub.listener_count(Channel::Press(A)), 1);
        assert_eq!(globals(&hub), (0, 0));
    }

    #[test]
    fn press_starts_drag_and_registers_globals() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        assert_eq!(log.take(), vec!["start"]);
        assert!(s.is_dragging());
        assert_eq!(globals(&hub), (1, 1));
    }

    #[test]
    fn press_elsewhere_is_ignored() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(B, 0.0, 0.0));
        assert_eq!(log.take(), Vec::<&str>::new());
        assert!(!s.is_dragging());
    }

    #[test]
    fn full_drag_on_target() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::moved(A, 1.0, 0.0));
        hub.dispatch(&PointerEvent::moved(A, 2.0, 0.0));
        hub.dispatch(&PointerEvent::release(A, 2.0, 0.0));

        assert_eq!(log.take(), vec!["start", "move", "move", "end"]);
        assert!(!s.is_dragging());
        assert_eq!(globals(&hub), (0, 0));
    }

    // ── Origin Filter ────────────────────────────────────────────────────

    #[test]
    fn move_off_target_is_ignored() {
        let hub = PointerHub::new();
        let log = Log::default();
        let _s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::moved(B, 5.0, 5.0));
        hub.dispatch(&PointerEvent::moved(A, 1.0, 1.0));

        assert_eq!(log.take(), vec!["start", "move"]);
    }

    #[test]
    fn release_off_target_skips_end_but_still_cleans_up() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::release(B, 9.0, 9.0));

        assert_eq!(log.take(), vec!["start"]);
        assert!(!s.is_dragging());
        assert_eq!(globals(&hub), (0, 0));

        // Later moves reach nobody.
        hub.dispatch(&PointerEvent::moved(A, 1.0, 1.0));
        assert_eq!(log.take(), Vec::<&str>::new());
    }

    #[test]
    fn moves_before_press_are_not_tracked() {
        let hub = PointerHub::new();
        let log = Log::default();
        let _s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::moved(A, 1.0, 1.0));
        hub.dispatch(&PointerEvent::release(A, 1.0, 1.0));
        assert_eq!(log.take(), Vec::<&str>::new());
    }

    // ── Listener Invariants ──────────────────────────────────────────────

    #[test]
    fn repeated_press_keeps_one_listener_pair() {
        let hub = PointerHub::new();
        let log = Log::default();
        let _s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        assert_eq!(globals(&hub), (1, 1));

        hub.dispatch(&PointerEvent::moved(A, 1.0, 0.0));
        assert_eq!(log.take(), vec!["start", "start", "move"]);
    }

    #[test]
    fn detach_removes_press_listener() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        s.detach();
        assert!(!s.is_attached());
        assert_eq!(s.target(), None);
        assert!(hub.is_empty());

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        assert_eq!(log.take(), Vec::<&str>::new());
    }

    #[test]
    fn detach_mid_drag_cancels_without_end() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        s.detach();
        assert!(!s.is_dragging());
        assert!(hub.is_empty());

        hub.dispatch(&PointerEvent::moved(A, 1.0, 0.0));
        hub.dispatch(&PointerEvent::release(A, 1.0, 0.0));
        assert_eq!(log.take(), vec!["start"]);
    }

    #[test]
    fn reattach_moves_to_new_target() {
        let hub = PointerHub::new();
        let log = Log::default();
        let s = session(&hub, &log, A);

        s.attach(B);
        assert_eq!(hub.listener_count(Channel::Press(A)), 0);
        assert_eq!(hub.listener_count(Channel::Press(B)), 1);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::press(B, 0.0, 0.0));
        hub.dispatch(&PointerEvent::moved(B, 0.0, 0.0));
        assert_eq!(log.take(), vec!["start", "move"]);
    }

    #[test]
    fn drop_detaches() {
        let hub = PointerHub::new();
        let log = Log::default();
        {
            let _s = session(&hub, &log, A);
            hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
            assert_eq!(hub.len(), 3);
        }
        assert!(hub.is_empty());
    }

    // ── Composition ──────────────────────────────────────────────────────

    #[test]
    fn callbacks_are_optional() {
        let hub = PointerHub::new();
        let s = DragSession::new(hub.clone(), DragConfig::default());
        s.attach(A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::moved(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::release(A, 0.0, 0.0));
        assert!(!s.is_dragging());
        assert_eq!(hub.len(), 1);
    }

    #[test]
    fn sessions_on_one_hub_track_independently() {
        let hub = PointerHub::new();
        let log_a = Log::default();
        let log_b = Log::default();
        let a = session(&hub, &log_a, A);
        let b = session(&hub, &log_b, B);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        assert!(a.is_dragging());
        assert!(!b.is_dragging());

        hub.dispatch(&PointerEvent::press(B, 0.0, 0.0));
        assert_eq!(globals(&hub), (2, 2));

        hub.dispatch(&PointerEvent::moved(B, 0.0, 0.0));
        hub.dispatch(&PointerEvent::release(A, 0.0, 0.0));

        assert_eq!(log_a.take(), vec!["start", "end"]);
        assert_eq!(log_b.take(), vec!["start", "move"]);
        assert!(!a.is_dragging());
        assert!(!b.is_dragging());
        assert_eq!(globals(&hub), (0, 0));
    }

    #[test]
    fn callback_sees_event_coordinates() {
        let hub = PointerHub::new();
        let last = Rc::new(Cell::new((0.0, 0.0)));
        let seen = Rc::clone(&last);
        let s = DragSession::new(
            hub.clone(),
            DragConfig::new().on_move(move |e| seen.set((e.x, e.y))),
        );
        s.attach(A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::moved(A, 3.5, -2.0));
        assert_eq!(last.get(), (3.5, -2.0));
    }

    #[test]
    fn reentrant_callback_is_skipped() {
        let hub = PointerHub::new();
        let moves = Rc::new(Cell::new(0));
        let (inner_hub, seen) = (hub.clone(), Rc::clone(&moves));
        let s = DragSession::new(
            hub.clone(),
            DragConfig::new().on_move(move |e| {
                seen.set(seen.get() + 1);
                inner_hub.dispatch(&PointerEvent::moved(e.target, e.x + 1.0, e.y));
            }),
        );
        s.attach(A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::moved(A, 0.0, 0.0));
        assert_eq!(moves.get(), 1);
        assert!(s.is_dragging());
    }

    #[test]
    fn session_keeps_working_through_rc_source() {
        let hub = Rc::new(PointerHub::new());
        let log = Log::default();
        let s = DragSession::new(Rc::clone(&hub), log.config());
        s.attach(A);

        hub.dispatch(&PointerEvent::press(A, 0.0, 0.0));
        hub.dispatch(&PointerEvent::release(A, 0.0, 0.0));
        assert_eq!(log.take(), vec!["start", "end"]);
        assert_eq!(s.source().len(), 1);
    }
}
