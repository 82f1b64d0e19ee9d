//! Click, double-click, hold and idle detection
//!
//! [`GestureTracker`] layers transition history on top of a [`Debouncer`].
//! It counts accepted transitions inside a rolling double-click window and
//! timestamps the last transition, which together answer every gesture
//! query:
//!
//! - a *click* is a full press-then-release cycle;
//! - a *double click* is two clicks whose four transitions all land inside
//!   the window;
//! - a *single click* is one click after which the window elapsed with no
//!   second click, distinguishing a deliberate click from the first half of
//!   a double click;
//! - *held* and *idle* are time overlays on the pressed/released state, not
//!   separate states.

use crate::circuit::{Circuit, Level};
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::error::Error;
use crate::interface::InputInterface;

/// A debounced state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Gesture state machine over one debounced input.
///
/// Time-dependent queries (`is_held`, `is_idle`, `is_single_clicked`) take
/// the current time and are re-evaluated on every call; nothing is cached
/// between calls.
pub struct GestureTracker<I> {
    debouncer: Debouncer<I>,
    config: Config,
    /// Stable level immediately before the last accepted transition.
    previous: Level,
    /// Accepted transitions inside the current double-click window.
    transitions: u8,
    /// Anchor of the rolling double-click window.
    window_start: u32,
    /// Time of the last accepted transition, for held/idle thresholds.
    last_transition: u32,
}

impl<I> GestureTracker<I>
where
    I: InputInterface,
{
    /// Create a tracker assuming the button starts released.
    pub fn new(interface: I, circuit: Circuit, config: Config) -> Self {
        Self {
            debouncer: Debouncer::new(interface, circuit, config.debounce_ms),
            config,
            previous: circuit.released_level(),
            transitions: 0,
            window_start: 0,
            last_transition: 0,
        }
    }

    /// Configure the pin direction. See [`Debouncer::begin`].
    pub fn begin(&mut self) -> Result<(), Error<I>> {
        self.debouncer.begin()
    }

    /// Poll the debouncer and record any accepted transition.
    ///
    /// Returns the edge when the stable state changed this cycle.
    pub fn poll(&mut self, now_ms: u32) -> Result<Option<Edge>, Error<I>> {
        let before = self.debouncer.stable_level();
        let Some(level) = self.debouncer.poll(now_ms)? else {
            return Ok(None);
        };

        self.previous = before;
        self.last_transition = now_ms;

        if now_ms.wrapping_sub(self.window_start) < u32::from(self.config.double_click_ms) {
            self.transitions = self.transitions.saturating_add(1);
        } else {
            self.transitions = 1;
            self.window_start = now_ms;
        }

        Ok(Some(if level == self.debouncer.circuit().pressed_level() {
            Edge::Pressed
        } else {
            Edge::Released
        }))
    }

    /// Whether the button is currently pressed.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    /// Whether the button is currently released.
    pub fn is_released(&self) -> bool {
        !self.is_pressed()
    }

    /// Whether the button has been pressed for at least the held threshold.
    pub fn is_held(&self, now_ms: u32) -> bool {
        self.is_pressed()
            && now_ms.wrapping_sub(self.last_transition) >= u32::from(self.config.held_ms)
    }

    /// Whether the button has been released for at least the idle threshold.
    pub fn is_idle(&self, now_ms: u32) -> bool {
        !self.is_pressed()
            && now_ms.wrapping_sub(self.last_transition) >= self.config.idle_ms
    }

    /// Whether a full press-then-release cycle has completed.
    pub fn is_clicked(&self) -> bool {
        let circuit = self.debouncer.circuit();
        self.debouncer.stable_level() == circuit.released_level()
            && self.previous == circuit.pressed_level()
    }

    /// Whether exactly one click happened and the double-click window has
    /// since elapsed without a second one.
    pub fn is_single_clicked(&self, now_ms: u32) -> bool {
        self.transitions == 2
            && now_ms.wrapping_sub(self.window_start) >= u32::from(self.config.double_click_ms)
    }

    /// Whether two clicks landed inside the double-click window.
    pub fn is_double_clicked(&self) -> bool {
        self.transitions >= 4
    }

    /// Return the clicked state, clearing it when set.
    pub fn reset_clicked(&mut self) -> bool {
        let clicked = self.is_clicked();
        if clicked {
            self.previous = self.debouncer.stable_level();
        }
        clicked
    }

    /// Return the single-clicked state, clearing it when set.
    pub fn reset_single_clicked(&mut self, now_ms: u32) -> bool {
        let clicked = self.is_single_clicked(now_ms);
        if clicked {
            self.transitions = 0;
        }
        clicked
    }

    /// Return the double-clicked state, clearing it when set.
    pub fn reset_double_clicked(&mut self) -> bool {
        let clicked = self.is_double_clicked();
        if clicked {
            self.transitions = 0;
        }
        clicked
    }

    /// The timing configuration this tracker runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The wiring circuit of the underlying pin.
    pub fn circuit(&self) -> Circuit {
        self.debouncer.circuit()
    }
}
