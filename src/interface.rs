//! Hardware interface abstraction
//!
//! This module provides the [`InputInterface`] trait and the [`Interface`]
//! struct for reading a momentary push-button from a digital input.
//!
//! ## Hardware Requirements
//!
//! A button needs one GPIO pin, wired either:
//! - through a pull-down resistor (pin reads high on a press), or
//! - through a pull-up resistor, typically the controller's internal one
//!   (pin reads low on a press).
//!
//! ## Example
//!
//! ```rust,ignore
//! use momentary::Interface;
//!
//! // Wrap an embedded-hal input pin
//! let interface = Interface::new(gpio_pin);
//!
//! // Use with Button
//! let button = Button::new(interface, Circuit::PullUp, config, 1);
//! ```

use core::fmt::Debug;

use crate::circuit::{Level, PinMode};

/// Trait for the digital input a button reads from.
///
/// This trait abstracts over different hardware implementations, allowing
/// [`Button`](crate::Button) to work with anything that can report a
/// logic level. Both operations must return immediately; the polling loop
/// calls [`read_level`](InputInterface::read_level) every cycle.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct over an embedded-hal
/// input pin. If you need custom behavior (e.g. register-level GPIO access,
/// an I/O expander, a simulated input), implement this trait on your own
/// type. A type that cannot apply the requested [`PinMode`] in
/// [`configure`](InputInterface::configure) should return an error there, so
/// a mis-wired button fails at `begin()` rather than reading junk forever.
pub trait InputInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Apply the pin direction mode. Called once during `begin()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be configured as requested. This is
    /// treated as a configuration error and is not retried.
    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error>;

    /// Take one instantaneous reading of the pin.
    ///
    /// Readings are raw and may bounce; debouncing happens in the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the level cannot be read.
    fn read_level(&mut self) -> Result<Level, Self::Error>;
}

/// Input interface implementation for embedded-hal v1.0 pins.
///
/// Wraps any [`embedded_hal::digital::InputPin`]. The pull mode of an
/// embedded-hal pin is fixed when the HAL constructs it, so
/// [`configure`](InputInterface::configure) is a no-op here; pass the pin
/// already set up for the circuit the button uses.
///
/// ## Example
///
/// ```rust,ignore
/// use momentary::Interface;
///
/// let pin = gpio.into_pull_up_input();
/// let interface = Interface::new(pin);
/// ```
pub struct Interface<P> {
    pin: P,
}

impl<P> Interface<P>
where
    P: embedded_hal::digital::InputPin,
{
    /// Create a new Interface over an embedded-hal input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Consume the interface, returning the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> InputInterface for Interface<P>
where
    P: embedded_hal::digital::InputPin,
{
    type Error = P::Error;

    fn configure(&mut self, _mode: PinMode) -> Result<(), Self::Error> {
        // Pull selection already happened when the HAL built the pin.
        Ok(())
    }

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        Ok(Level::from(self.pin.is_high()?))
    }
}
