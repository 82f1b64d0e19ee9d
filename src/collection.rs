//! Polling and aggregate queries over a group of buttons
//!
//! [`ButtonList`] borrows an ordered slice of buttons and drives them
//! together: one `begin`, one `poll` per cycle, plus all/any queries over
//! the whole group. The list does not own the buttons and cannot outlive
//! them. All buttons in one list share the same interface type and should
//! share the same circuit and configuration; mixing classes means keeping
//! separate lists.

use crate::button::Button;
use crate::error::Error;
use crate::interface::InputInterface;

/// An ordered, borrowed group of buttons polled together.
///
/// Aggregate queries are evaluated live at call time over every button; two
/// calls in the same expression may observe different states if a
/// time-dependent threshold is crossed between them.
pub struct ButtonList<'a, I> {
    buttons: &'a mut [Button<I>],
}

impl<'a, I> ButtonList<'a, I>
where
    I: InputInterface,
{
    /// Create a list over the given buttons. Order is insertion order and
    /// determines begin/poll/callback ordering.
    pub fn new(buttons: &'a mut [Button<I>]) -> Self {
        Self { buttons }
    }

    /// Number of buttons in the list.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Initialise every button in list order.
    ///
    /// # Errors
    ///
    /// Stops at the first button whose pin cannot be configured.
    pub fn begin(&mut self) -> Result<(), Error<I>> {
        for button in self.buttons.iter_mut() {
            button.begin()?;
        }
        Ok(())
    }

    /// Poll every button in list order, dispatching callbacks as they fire.
    ///
    /// There is no cross-button atomicity: an earlier button's callback runs
    /// before later buttons have been polled for this cycle.
    pub fn poll(&mut self, now_ms: u32) -> Result<(), Error<I>> {
        for button in self.buttons.iter_mut() {
            button.poll(now_ms)?;
        }
        Ok(())
    }

    /// Find the first button with the given id.
    pub fn find(&self, id: u8) -> Option<&Button<I>> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Find the first button with the given id, mutably.
    pub fn find_mut(&mut self, id: u8) -> Option<&mut Button<I>> {
        self.buttons.iter_mut().find(|b| b.id() == id)
    }

    /// Whether every button is pressed. Vacuously true when empty.
    pub fn all_pressed(&self) -> bool {
        self.buttons.iter().all(|b| b.is_pressed())
    }

    /// Whether any button is pressed.
    pub fn any_pressed(&self) -> bool {
        self.buttons.iter().any(|b| b.is_pressed())
    }

    /// Whether every button is held. Vacuously true when empty.
    pub fn all_held(&self, now_ms: u32) -> bool {
        self.buttons.iter().all(|b| b.is_held(now_ms))
    }

    /// Whether any button is held.
    pub fn any_held(&self, now_ms: u32) -> bool {
        self.buttons.iter().any(|b| b.is_held(now_ms))
    }

    /// Whether every button is idle. Vacuously true when empty.
    pub fn all_idle(&self, now_ms: u32) -> bool {
        self.buttons.iter().all(|b| b.is_idle(now_ms))
    }

    /// Whether any button is idle.
    pub fn any_idle(&self, now_ms: u32) -> bool {
        self.buttons.iter().any(|b| b.is_idle(now_ms))
    }

    /// Whether every button is clicked. Vacuously true when empty.
    pub fn all_clicked(&self) -> bool {
        self.buttons.iter().all(|b| b.is_clicked())
    }

    /// Whether any button is clicked.
    pub fn any_clicked(&self) -> bool {
        self.buttons.iter().any(|b| b.is_clicked())
    }

    /// Whether every button is single-clicked. Vacuously true when empty.
    pub fn all_single_clicked(&self, now_ms: u32) -> bool {
        self.buttons.iter().all(|b| b.is_single_clicked(now_ms))
    }

    /// Whether any button is single-clicked.
    pub fn any_single_clicked(&self, now_ms: u32) -> bool {
        self.buttons.iter().any(|b| b.is_single_clicked(now_ms))
    }

    /// Whether every button is double-clicked. Vacuously true when empty.
    pub fn all_double_clicked(&self) -> bool {
        self.buttons.iter().all(|b| b.is_double_clicked())
    }

    /// Whether any button is double-clicked.
    pub fn any_double_clicked(&self) -> bool {
        self.buttons.iter().any(|b| b.is_double_clicked())
    }

    /// Reset the clicked state of every button, returning true if any were
    /// clicked. Consumes the whole group's clicks in one call.
    pub fn reset_clicked(&mut self) -> bool {
        let mut any = false;
        for button in self.buttons.iter_mut() {
            if button.reset_clicked() {
                any = true;
            }
        }
        any
    }

    /// Reset the single-clicked state of every button, returning true if any
    /// were single-clicked.
    pub fn reset_single_clicked(&mut self, now_ms: u32) -> bool {
        let mut any = false;
        for button in self.buttons.iter_mut() {
            if button.reset_single_clicked(now_ms) {
                any = true;
            }
        }
        any
    }

    /// Reset the double-clicked state of every button, returning true if any
    /// were double-clicked.
    pub fn reset_double_clicked(&mut self) -> bool {
        let mut any = false;
        for button in self.buttons.iter_mut() {
            if button.reset_double_clicked() {
                any = true;
            }
        }
        any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Circuit, Level};
    use crate::config::Config;
    use crate::sim::{sim_pin, SimPin};
    use core::cell::Cell;
    use std::rc::Rc;

    fn two_buttons() -> ([Button<SimPin>; 2], [Rc<Cell<Level>>; 2]) {
        let (pin1, level1) = sim_pin(Level::Low);
        let (pin2, level2) = sim_pin(Level::Low);
        let config = Config::default();
        let buttons = [
            Button::new(pin1, Circuit::PullDown, config, 1),
            Button::new(pin2, Circuit::PullDown, config, 2),
        ];
        (buttons, [level1, level2])
    }

    /// Settle both raw levels and poll the list once per millisecond.
    fn run(
        list: &mut ButtonList<'_, SimPin>,
        levels: &[Rc<Cell<Level>>; 2],
        from_ms: u32,
        until_ms: u32,
        raw: [Level; 2],
    ) {
        levels[0].set(raw[0]);
        levels[1].set(raw[1]);
        for t in from_ms..until_ms {
            list.poll(t).unwrap();
        }
    }

    #[test]
    fn empty_list_all_is_vacuously_true_and_any_false() {
        let mut none: [Button<SimPin>; 0] = [];
        let list = ButtonList::new(&mut none);

        assert!(list.is_empty());
        assert!(list.all_pressed());
        assert!(!list.any_pressed());
        assert!(list.all_held(0));
        assert!(!list.any_held(0));
        assert!(list.all_clicked());
        assert!(!list.any_clicked());
        assert!(list.all_double_clicked());
        assert!(!list.any_double_clicked());
    }

    #[test]
    fn one_pressed_button_in_a_pair() {
        let (mut buttons, levels) = two_buttons();
        let mut list = ButtonList::new(&mut buttons);
        list.begin().unwrap();

        // Press only button 1.
        run(&mut list, &levels, 0, 100, [Level::High, Level::Low]);

        assert!(!list.all_pressed());
        assert!(list.any_pressed());
        assert!(list.find(1).unwrap().is_pressed());
        assert!(!list.find(2).unwrap().is_pressed());
    }

    #[test]
    fn aggregates_match_per_button_queries() {
        let (mut buttons, levels) = two_buttons();
        let mut list = ButtonList::new(&mut buttons);

        run(&mut list, &levels, 0, 100, [Level::High, Level::High]);
        assert!(list.all_pressed());
        assert!(list.any_pressed());

        // Hold both past the held threshold.
        run(&mut list, &levels, 100, 1_200, [Level::High, Level::High]);
        assert!(list.all_held(1_200));
        assert!(list.any_held(1_200));

        // all implies any on a non-empty list.
        assert!(!list.all_held(1_200) || list.any_held(1_200));
    }

    #[test]
    fn find_returns_first_match_or_none() {
        let (mut buttons, _levels) = two_buttons();
        let list = ButtonList::new(&mut buttons);

        assert_eq!(list.find(1).map(|b| b.id()), Some(1));
        assert_eq!(list.find(2).map(|b| b.id()), Some(2));
        assert!(list.find(9).is_none());
    }

    #[test]
    fn collection_reset_clicked_consumes_all_clicks() {
        let (mut buttons, levels) = two_buttons();
        let mut list = ButtonList::new(&mut buttons);

        // Click both buttons together.
        run(&mut list, &levels, 0, 100, [Level::High, Level::High]);
        run(&mut list, &levels, 100, 161, [Level::Low, Level::Low]);

        assert!(list.all_clicked());
        assert!(list.reset_clicked());
        assert!(!list.any_clicked());
        assert!(!list.reset_clicked());
    }

    #[test]
    fn idle_together_after_inactivity() {
        let (mut buttons, levels) = two_buttons();
        let mut list = ButtonList::new(&mut buttons);

        run(&mut list, &levels, 0, 10, [Level::Low, Level::Low]);
        assert!(!list.any_idle(10));
        assert!(list.all_idle(60_000));
    }
}
