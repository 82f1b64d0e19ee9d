//! Simulated input pin shared by the unit tests.

use core::cell::Cell;
use std::rc::Rc;

use crate::circuit::{Level, PinMode};
use crate::interface::InputInterface;

/// An [`InputInterface`] whose raw level tests drive directly.
#[derive(Debug)]
pub struct SimPin {
    level: Rc<Cell<Level>>,
    configured: Option<PinMode>,
    fail_configure: bool,
}

impl SimPin {
    /// A pin whose `configure` always fails, for fail-fast tests.
    pub fn failing() -> Self {
        Self {
            level: Rc::new(Cell::new(Level::Low)),
            configured: None,
            fail_configure: true,
        }
    }

    pub fn configured_mode(&self) -> Option<PinMode> {
        self.configured
    }
}

/// Create a pin plus the shared handle used to set its raw level.
pub fn sim_pin(initial: Level) -> (SimPin, Rc<Cell<Level>>) {
    let level = Rc::new(Cell::new(initial));
    let pin = SimPin {
        level: Rc::clone(&level),
        configured: None,
        fail_configure: false,
    };
    (pin, level)
}

impl InputInterface for SimPin {
    type Error = &'static str;

    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err("pin unavailable");
        }
        self.configured = Some(mode);
        Ok(())
    }

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        Ok(self.level.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_driven_level() {
        let (mut pin, level) = sim_pin(Level::Low);
        assert_eq!(pin.read_level(), Ok(Level::Low));
        level.set(Level::High);
        assert_eq!(pin.read_level(), Ok(Level::High));
    }

    #[test]
    fn remembers_the_configured_mode() {
        let (mut pin, _level) = sim_pin(Level::High);
        pin.configure(PinMode::InputPullup).unwrap();
        assert_eq!(pin.configured_mode(), Some(PinMode::InputPullup));
    }
}
