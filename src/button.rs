//! Button composition and event dispatch
//!
//! [`Button`] ties a [`GestureTracker`] to a stable identifier and an
//! optional event callback. The callback is a plain function pointer taking
//! the event and the button id; it runs synchronously inside `poll` on the
//! polling thread and must not block or call back into the same button.

use crate::circuit::Circuit;
use crate::config::Config;
use crate::error::Error;
use crate::gesture::{Edge, GestureTracker};
use crate::interface::InputInterface;

/// Events reported through a button callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The button's `begin()` completed.
    Begin,
    /// The debounced state changed to pressed.
    Pressed,
    /// The debounced state changed to released.
    Released,
    /// The button crossed the held threshold.
    Held,
    /// The button crossed the idle threshold.
    Idle,
    /// A click stood alone past the double-click window.
    SingleClicked,
    /// A second click landed inside the double-click window.
    DoubleClicked,
}

/// Callback invoked with an event and the id of the button raising it.
pub type Callback = fn(Event, u8);

/// Explicit id allocator for buttons.
///
/// Hands out identifiers counting up from 1. Keep one allocator per program
/// (or per collection) instead of relying on any global counter, so tests
/// and multi-collection setups stay deterministic.
#[derive(Clone, Copy, Debug)]
pub struct IdSequence {
    next: u8,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the next identifier, advancing the sequence.
    pub fn next_id(&mut self) -> u8 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// One push-button: debounce, gestures, identity and callback dispatch.
///
/// Created once at program start and polled every cycle. All state is owned
/// by the button and mutated only from its own `poll`/`reset_*` calls; on a
/// multi-threaded host, serialize access externally.
pub struct Button<I> {
    tracker: GestureTracker<I>,
    id: u8,
    callback: Option<Callback>,
    /// Last dispatched event, to fire held/idle/single-click once per
    /// qualifying transition rather than every cycle the condition holds.
    last_event: Event,
}

impl<I> Button<I>
where
    I: InputInterface,
{
    /// Create a button over the given input.
    ///
    /// Buttons sharing a collection must be created with the same circuit
    /// and the same configuration.
    pub fn new(interface: I, circuit: Circuit, config: Config, id: u8) -> Self {
        Self {
            tracker: GestureTracker::new(interface, circuit, config),
            id,
            callback: None,
            last_event: Event::Begin,
        }
    }

    /// Create a button that reports events to `callback`.
    pub fn with_callback(
        interface: I,
        circuit: Circuit,
        config: Config,
        id: u8,
        callback: Callback,
    ) -> Self {
        let mut button = Self::new(interface, circuit, config, id);
        button.callback = Some(callback);
        button
    }

    /// Initialise the button: configure the pin, then report [`Event::Begin`].
    ///
    /// # Errors
    ///
    /// Fails fast on a pin that cannot be configured; no event is reported
    /// in that case.
    pub fn begin(&mut self) -> Result<(), Error<I>> {
        self.tracker.begin()?;
        self.fire(Event::Begin);
        Ok(())
    }

    /// Poll the button and dispatch any resulting event.
    ///
    /// On a state change the press/release event fires, followed by a
    /// double-click event when the release completed one. With no state
    /// change, at most one of newly-held, newly-idle or newly-single-clicked
    /// fires.
    pub fn poll(&mut self, now_ms: u32) -> Result<(), Error<I>> {
        match self.tracker.poll(now_ms)? {
            Some(Edge::Pressed) => self.fire(Event::Pressed),
            Some(Edge::Released) => {
                self.fire(Event::Released);
                if self.tracker.is_double_clicked() {
                    self.fire(Event::DoubleClicked);
                }
            }
            None => {
                if self.tracker.is_held(now_ms) {
                    if self.last_event != Event::Held {
                        self.fire(Event::Held);
                    }
                } else if self.tracker.is_idle(now_ms) {
                    if self.last_event != Event::Idle {
                        self.fire(Event::Idle);
                    }
                } else if self.tracker.is_single_clicked(now_ms)
                    && self.last_event != Event::SingleClicked
                {
                    self.fire(Event::SingleClicked);
                }
            }
        }
        Ok(())
    }

    fn fire(&mut self, event: Event) {
        self.last_event = event;
        log::debug!("button {} event {event:?}", self.id);
        if let Some(callback) = self.callback {
            callback(event, self.id);
        }
    }

    /// The stable identifier of this button.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Replace or clear the event callback.
    pub fn set_callback(&mut self, callback: Option<Callback>) {
        self.callback = callback;
    }

    /// The timing configuration this button runs with.
    pub fn config(&self) -> &Config {
        self.tracker.config()
    }

    pub fn is_pressed(&self) -> bool {
        self.tracker.is_pressed()
    }

    pub fn is_released(&self) -> bool {
        self.tracker.is_released()
    }

    pub fn is_held(&self, now_ms: u32) -> bool {
        self.tracker.is_held(now_ms)
    }

    pub fn is_idle(&self, now_ms: u32) -> bool {
        self.tracker.is_idle(now_ms)
    }

    pub fn is_clicked(&self) -> bool {
        self.tracker.is_clicked()
    }

    pub fn is_single_clicked(&self, now_ms: u32) -> bool {
        self.tracker.is_single_clicked(now_ms)
    }

    pub fn is_double_clicked(&self) -> bool {
        self.tracker.is_double_clicked()
    }

    /// Return the clicked state, clearing it when set.
    pub fn reset_clicked(&mut self) -> bool {
        self.tracker.reset_clicked()
    }

    /// Return the single-clicked state, clearing it when set.
    pub fn reset_single_clicked(&mut self, now_ms: u32) -> bool {
        self.tracker.reset_single_clicked(now_ms)
    }

    /// Return the double-clicked state, clearing it when set.
    pub fn reset_double_clicked(&mut self) -> bool {
        self.tracker.reset_double_clicked()
    }
}
