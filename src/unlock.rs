//! One-way reveal of locked experience entries.

use std::time::Duration;

/// Delay before focus moves onto freshly revealed details, so the overlay has
/// left the DOM first.
pub const FOCUS_DELAY: Duration = Duration::from_millis(100);

/// Per-card state. Every card starts `Locked`; only entries carrying the lock
/// flag are obscured by it (see [`CardVisibility::of`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnlockState {
    #[default]
    Locked,
    Unlocked,
}

impl UnlockState {
    /// Moves to `Unlocked`. Returns whether anything changed; there is no way
    /// back to `Locked`.
    pub fn reveal(&mut self) -> bool {
        match self {
            UnlockState::Locked => {
                *self = UnlockState::Unlocked;
                true
            }
            UnlockState::Unlocked => false,
        }
    }

    pub fn is_locked(self) -> bool {
        self == UnlockState::Locked
    }
}

/// Keyboard or pointer input that counts as pressing the unlock control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Enter,
    Space,
}

impl Activation {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Activation::Enter),
            " " | "Spacebar" => Some(Activation::Space),
            _ => None,
        }
    }
}

/// How a timeline card presents its details for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardVisibility {
    /// Details are blurred, unselectable, inert and hidden from assistive tech.
    pub obscured: bool,
    pub show_unlock_control: bool,
}

impl CardVisibility {
    pub fn of(is_locked: bool, state: UnlockState) -> Self {
        let obscured = is_locked && state.is_locked();
        Self {
            obscured,
            show_unlock_control: obscured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ExperienceItem, DATA_PT};

    #[test]
    fn test_locked_entry_reveals_once() {
        let mut state = UnlockState::default();
        assert_eq!(state, UnlockState::Locked);

        assert!(state.reveal());
        assert_eq!(state, UnlockState::Unlocked);

        // second activation changes nothing
        assert!(!state.reveal());
        assert_eq!(state, UnlockState::Unlocked);
    }

    #[test]
    fn test_unflagged_entry_is_never_obscured() {
        for state in [UnlockState::Locked, UnlockState::Unlocked] {
            assert_eq!(
                CardVisibility::of(false, state),
                CardVisibility {
                    obscured: false,
                    show_unlock_control: false
                }
            );
        }
    }

    #[test]
    fn test_card_stays_locked_when_its_entry_becomes_flagged() {
        // a card first showing an unflagged entry, then a flagged one after a
        // language switch moved the locked entry to its position
        let state = UnlockState::default();
        assert!(!CardVisibility::of(false, state).obscured);

        let visibility = CardVisibility::of(true, state);
        assert!(visibility.obscured);
        assert!(visibility.show_unlock_control);
    }

    #[test]
    fn test_locked_entries_are_independent() {
        let mut first = UnlockState::default();
        let second = UnlockState::default();
        first.reveal();
        assert_eq!(first, UnlockState::Unlocked);
        assert_eq!(second, UnlockState::Locked);
    }

    #[test]
    fn test_activation_keys() {
        assert_eq!(Activation::from_key("Enter"), Some(Activation::Enter));
        assert_eq!(Activation::from_key(" "), Some(Activation::Space));
        assert_eq!(Activation::from_key("Spacebar"), Some(Activation::Space));
        assert_eq!(Activation::from_key("Escape"), None);
        assert_eq!(Activation::from_key("a"), None);
    }

    #[test]
    fn test_timeline_hides_only_the_locked_entry() {
        let entries: &[ExperienceItem] = DATA_PT.experience;
        let mut states = vec![UnlockState::default(); entries.len()];
        let visibility = entries
            .iter()
            .zip(&states)
            .map(|(e, s)| CardVisibility::of(e.is_locked, *s))
            .collect::<Vec<_>>();

        assert_eq!(visibility.len(), entries.len());
        assert_eq!(visibility.iter().filter(|v| v.obscured).count(), 1);
        let locked_index = entries.iter().position(|e| e.is_locked).unwrap();
        assert!(visibility[locked_index].obscured);
        assert!(visibility[locked_index].show_unlock_control);

        states[locked_index].reveal();
        assert!(entries
            .iter()
            .zip(&states)
            .all(|(e, s)| !CardVisibility::of(e.is_locked, *s).obscured));
    }
}
