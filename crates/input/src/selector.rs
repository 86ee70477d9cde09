//! Pending point selection, held by the host until the throw is confirmed.
//!
//! Digits build the value keypad-style: a digit that extends the current
//! selection into a valid value (`1` then `0`..`2`) forms 10-12, any other
//! digit replaces the selection.

use crate::types::{MatchAction, MAX_PINS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointSelector {
    selected: Option<u8>,
}

impl PointSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn push_digit(&mut self, digit: u8) {
        let digit = digit.min(9);
        let extended = self
            .selected
            .filter(|&s| s > 0)
            .map(|s| s * 10 + digit)
            .filter(|&v| v <= MAX_PINS);
        self.selected = Some(extended.unwrap_or(digit));
    }

    /// Step up; from nothing selected this starts at 0. Saturates at 12.
    pub fn increment(&mut self) {
        self.selected = Some(match self.selected {
            None => 0,
            Some(s) => (s + 1).min(MAX_PINS),
        });
    }

    /// Step down; from nothing selected this starts at 12. Saturates at 0.
    pub fn decrement(&mut self) {
        self.selected = Some(match self.selected {
            None => MAX_PINS,
            Some(s) => s.saturating_sub(1),
        });
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Hand the selection to the engine, leaving nothing pending.
    pub fn take(&mut self) -> Option<u8> {
        self.selected.take()
    }

    /// Apply a selection action. Returns `false` for actions that are not
    /// about the pending selection.
    pub fn handle(&mut self, action: MatchAction) -> bool {
        match action {
            MatchAction::Digit(d) => self.push_digit(d),
            MatchAction::NextPoints => self.increment(),
            MatchAction::PrevPoints => self.decrement(),
            MatchAction::ClearSelection => self.clear(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(digits: &[u8]) -> Option<u8> {
        let mut s = PointSelector::new();
        for &d in digits {
            s.push_digit(d);
        }
        s.selected()
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(typed(&[0]), Some(0));
        assert_eq!(typed(&[7]), Some(7));
    }

    #[test]
    fn test_two_digit_values() {
        assert_eq!(typed(&[1, 0]), Some(10));
        assert_eq!(typed(&[1, 1]), Some(11));
        assert_eq!(typed(&[1, 2]), Some(12));
    }

    #[test]
    fn test_invalid_extension_replaces() {
        assert_eq!(typed(&[1, 5]), Some(5));
        assert_eq!(typed(&[1, 2, 3]), Some(3));
        // A leading zero never extends: 0 then 5 is 5, not 05.
        assert_eq!(typed(&[0, 5]), Some(5));
    }

    #[test]
    fn test_step_saturates() {
        let mut s = PointSelector::new();
        s.decrement();
        assert_eq!(s.selected(), Some(12));
        s.increment();
        assert_eq!(s.selected(), Some(12));

        s.clear();
        s.increment();
        assert_eq!(s.selected(), Some(0));
        s.decrement();
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn test_take_clears() {
        let mut s = PointSelector::new();
        s.push_digit(4);
        assert_eq!(s.take(), Some(4));
        assert_eq!(s.take(), None);
    }

    #[test]
    fn test_handle_ignores_other_actions() {
        let mut s = PointSelector::new();
        assert!(s.handle(MatchAction::Digit(3)));
        assert!(!s.handle(MatchAction::Undo));
        assert_eq!(s.selected(), Some(3));
    }
}
