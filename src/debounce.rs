//! Raw-reading debounce
//!
//! Mechanical switch contacts bounce: for a few milliseconds around a press
//! or release the pin reads an arbitrary mix of levels. [`Debouncer`] turns
//! that noisy stream into a stable level that only changes once the raw
//! reading has sat still for a full debounce interval.

use crate::circuit::{Circuit, Level};
use crate::error::Error;
use crate::interface::InputInterface;

/// Debounced reader over one digital input.
///
/// `poll` must be called every cycle of the host's polling loop; it never
/// blocks. All interval arithmetic uses wrapping subtraction, so a single
/// wraparound of the millisecond counter does not corrupt the window.
pub struct Debouncer<I> {
    interface: I,
    circuit: Circuit,
    debounce_ms: u8,
    /// Accepted, settled level.
    stable: Level,
    /// Most recent raw reading, to detect reading changes.
    last_reading: Level,
    /// Start of the current settle window.
    window_start: u32,
}

impl<I> Debouncer<I>
where
    I: InputInterface,
{
    /// Create a debouncer assuming the button starts released.
    pub fn new(interface: I, circuit: Circuit, debounce_ms: u8) -> Self {
        let released = circuit.released_level();
        Self {
            interface,
            circuit,
            debounce_ms,
            stable: released,
            last_reading: released,
            window_start: 0,
        }
    }

    /// Configure the pin direction for the wiring circuit.
    ///
    /// # Errors
    ///
    /// Fails fast if the pin cannot be configured; the debouncer is unusable
    /// in that case and the error should not be retried.
    pub fn begin(&mut self) -> Result<(), Error<I>> {
        self.interface.configure(self.circuit.pin_mode()).map_err(Error::Pin)
    }

    /// Take one raw reading and update the stable level.
    ///
    /// Returns the newly accepted level when the stable state changes this
    /// cycle, otherwise `None`. A reading change restarts the settle window;
    /// there is no partial credit for a reading that was briefly stable.
    pub fn poll(&mut self, now_ms: u32) -> Result<Option<Level>, Error<I>> {
        let reading = self.interface.read_level().map_err(Error::Pin)?;

        let mut accepted = None;
        if reading != self.last_reading {
            // New reading, so start the settle window.
            self.window_start = now_ms;
        } else if reading != self.stable
            && now_ms.wrapping_sub(self.window_start) >= u32::from(self.debounce_ms)
        {
            // Same reading for a full interval; accept it.
            self.stable = reading;
            accepted = Some(reading);
            log::trace!("debounced transition to {reading:?} at {now_ms}ms");
        }
        self.last_reading = reading;

        Ok(accepted)
    }

    /// Whether the settled state is the pressed level for this circuit.
    pub fn is_pressed(&self) -> bool {
        self.stable == self.circuit.pressed_level()
    }

    /// The settled level.
    pub fn stable_level(&self) -> Level {
        self.stable
    }

    /// The wiring circuit this debouncer was built for.
    pub fn circuit(&self) -> Circuit {
        self.circuit
    }

    /// The debounce interval in milliseconds.
    pub fn debounce_ms(&self) -> u8 {
        self.debounce_ms
    }
}
