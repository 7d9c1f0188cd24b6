//! Weekly recurrence tags and teaching-week parity.
//!
//! Alternate-week sections (typically labs) run on odd or even teaching
//! weeks. Parity is derived from the continuous week number computed by
//! [`calculate_academic_week`](crate::resolver::calculate_academic_week).
//!
//! Both types keep the upstream integer codes:
//!
//! | Code | Recurrence | Parity |
//! |------|------------|--------|
//! | 0 | `Weekly` | `None` (no teaching week) |
//! | 1 | `OddWeeks` | `Odd` |
//! | 2 | `EvenWeeks` | `Even` |

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// Odd/even classification of a teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekParity {
    /// No parity: the date lies in no academic period, or before the
    /// fallback anchor.
    None,
    /// Odd week number (1, 3, 5, ...).
    Odd,
    /// Even week number (0, 2, 4, ...).
    Even,
}

impl WeekParity {
    /// Integer code: 0 none, 1 odd, 2 even.
    pub fn code(self) -> u8 {
        match self {
            WeekParity::None => 0,
            WeekParity::Odd => 1,
            WeekParity::Even => 2,
        }
    }

    /// Whether this is a teaching week at all.
    #[inline]
    pub fn is_teaching(self) -> bool {
        self != WeekParity::None
    }
}

/// How often a weekly course slot occurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    /// Every teaching week.
    #[default]
    Weekly,
    /// Odd teaching weeks only.
    OddWeeks,
    /// Even teaching weeks only.
    EvenWeeks,
}

impl Recurrence {
    /// Parses the upstream `frequency` code.
    pub fn from_code(code: i64) -> Result<Self, TimetableError> {
        match code {
            0 => Ok(Recurrence::Weekly),
            1 => Ok(Recurrence::OddWeeks),
            2 => Ok(Recurrence::EvenWeeks),
            other => Err(TimetableError::InvalidRecurrence(other.to_string())),
        }
    }

    /// Upstream `frequency` code.
    pub fn code(self) -> u8 {
        match self {
            Recurrence::Weekly => 0,
            Recurrence::OddWeeks => 1,
            Recurrence::EvenWeeks => 2,
        }
    }

    /// The parity an alternating recurrence is tied to. `None` for weekly.
    pub fn implied_parity(self) -> Option<WeekParity> {
        match self {
            Recurrence::Weekly => None,
            Recurrence::OddWeeks => Some(WeekParity::Odd),
            Recurrence::EvenWeeks => Some(WeekParity::Even),
        }
    }

    /// Whether a slot with this recurrence runs in a week of `parity`.
    ///
    /// Nothing runs outside teaching weeks, not even weekly slots.
    pub fn matches(self, parity: WeekParity) -> bool {
        if !parity.is_teaching() {
            return false;
        }
        match self.implied_parity() {
            None => true,
            Some(p) => p == parity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_codes() {
        assert_eq!(WeekParity::None.code(), 0);
        assert_eq!(WeekParity::Odd.code(), 1);
        assert_eq!(WeekParity::Even.code(), 2);
    }

    #[test]
    fn test_recurrence_codes() {
        assert_eq!(Recurrence::from_code(0), Ok(Recurrence::Weekly));
        assert_eq!(Recurrence::from_code(1), Ok(Recurrence::OddWeeks));
        assert_eq!(Recurrence::from_code(2), Ok(Recurrence::EvenWeeks));
        assert_eq!(
            Recurrence::from_code(3),
            Err(TimetableError::InvalidRecurrence("3".into()))
        );
        assert_eq!(Recurrence::EvenWeeks.code(), 2);
    }

    #[test]
    fn test_recurrence_matches() {
        assert!(Recurrence::Weekly.matches(WeekParity::Odd));
        assert!(Recurrence::Weekly.matches(WeekParity::Even));
        assert!(!Recurrence::Weekly.matches(WeekParity::None));

        assert!(Recurrence::OddWeeks.matches(WeekParity::Odd));
        assert!(!Recurrence::OddWeeks.matches(WeekParity::Even));
        assert!(Recurrence::EvenWeeks.matches(WeekParity::Even));
        assert!(!Recurrence::EvenWeeks.matches(WeekParity::None));
    }
}
