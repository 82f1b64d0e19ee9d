//! Debounced push-button driver for embedded-hal v1.0
//!
//! Reads momentary push-buttons from noisy digital inputs: debounces raw
//! readings, classifies pressed/held/idle state and detects click,
//! single-click and double-click gestures, optionally reporting events
//! through a callback. Groups of buttons can be polled together through
//! [`ButtonList`].
//!
//! The driver is polling-based and non-blocking: call `poll` every cycle of
//! a fixed-rate loop, passing the current millisecond counter. No timers,
//! interrupts or background threads are used, and the counter may wrap.
//!
//! ## Example
//!
//! ```rust,ignore
//! use momentary::{Button, Circuit, Config, Interface};
//!
//! let pin = gpio.into_pull_up_input();
//! let mut button = Button::new(Interface::new(pin), Circuit::PullUp, Config::default(), 1);
//! button.begin()?;
//!
//! loop {
//!     let now = timer.millis();
//!     button.poll(now)?;
//!     if button.reset_clicked() {
//!         led.toggle();
//!     }
//! }
//! ```
#![cfg_attr(not(test), no_std)]

mod button;
mod circuit;
mod collection;
mod config;
mod debounce;
mod error;
mod gesture;
mod interface;

#[cfg(test)]
mod sim;

pub use button::{Button, Callback, Event, IdSequence};
pub use circuit::{Circuit, Level, PinMode};
pub use collection::ButtonList;
pub use config::{
    Builder, Config, DEFAULT_DEBOUNCE_MS, DEFAULT_DOUBLE_CLICK_MS, DEFAULT_HELD_MS,
    DEFAULT_IDLE_MS,
};
pub use debounce::Debouncer;
pub use error::{ConfigError, Error};
pub use gesture::{Edge, GestureTracker};
pub use interface::{InputInterface, Interface};
