//! Staff PIN Authentication
//!
//! Keypad buffer for PIN entry and the directory PINs are matched against.

use crate::error::LoginError;
use crate::models::{Staff, StaffRole};

pub const PIN_LENGTH: usize = 4;

/// Staff known to the demo till.
const DEMO_STAFF: &[(&str, &str, StaffRole)] = &[
    ("1234", "Alice", StaffRole::Cashier),
    ("5678", "Bob", StaffRole::Cashier),
    ("0000", "Manager", StaffRole::Manager),
];

/// Source of (pin, name, role) triples.
pub trait StaffDirectory {
    fn find(&self, pin: &str) -> Option<Staff>;

    /// Shown under the keypad.
    fn hint(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoStaffDirectory;

impl StaffDirectory for DemoStaffDirectory {
    fn find(&self, pin: &str) -> Option<Staff> {
        DEMO_STAFF
            .iter()
            .find(|(known, _, _)| *known == pin)
            .map(|(pin, name, role)| Staff {
                pin: pin.to_string(),
                name: name.to_string(),
                role: *role,
            })
    }

    fn hint(&self) -> Option<String> {
        let pins: Vec<&str> = DEMO_STAFF.iter().map(|(pin, _, _)| *pin).collect();
        Some(format!("Demo PINs: {}", pins.join(", ")))
    }
}

pub fn validate_pin(pin: &str) -> Result<(), LoginError> {
    if pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LoginError::InvalidFormat)
    }
}

/// Digits typed on the login keypad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinEntry {
    digits: String,
}

impl PinEntry {
    pub fn push_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.digits.len() < PIN_LENGTH {
            self.digits.push(digit);
        }
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_caps_at_four_digits() {
        let mut entry = PinEntry::default();
        for d in "123456".chars() {
            entry.push_digit(d);
        }
        assert_eq!(entry.as_str(), "1234");
        assert!(entry.is_complete());
    }

    #[test]
    fn keypad_ignores_non_digits() {
        let mut entry = PinEntry::default();
        entry.push_digit('a');
        entry.push_digit('7');
        assert_eq!(entry.as_str(), "7");
    }

    #[test]
    fn keypad_backspace_and_clear() {
        let mut entry = PinEntry::default();
        entry.push_digit('1');
        entry.push_digit('2');
        entry.backspace();
        assert_eq!(entry.as_str(), "1");

        entry.clear();
        assert_eq!(entry.len(), 0);
        entry.backspace();
        assert_eq!(entry.len(), 0);
    }

    #[test]
    fn validate_pin_requires_four_digits() {
        assert_eq!(validate_pin("0000"), Ok(()));
        assert_eq!(validate_pin("123"), Err(LoginError::InvalidFormat));
        assert_eq!(validate_pin("12a4"), Err(LoginError::InvalidFormat));
        assert_eq!(validate_pin("12345"), Err(LoginError::InvalidFormat));
    }

    #[test]
    fn demo_directory_matches_exact_pin() {
        let directory = DemoStaffDirectory;
        let manager = directory.find("0000").unwrap();
        assert_eq!(manager.name, "Manager");
        assert_eq!(manager.role, StaffRole::Manager);

        assert!(directory.find("9999").is_none());
        assert!(directory.find("123").is_none());
        assert_eq!(directory.hint().as_deref(), Some("Demo PINs: 1234, 5678, 0000"));
    }
}
