//! Mobile menu state.
//!
//! Two states, no terminal state. The overlay must never stay open after the
//! visitor picks a destination, so link selection always closes it.

/// Visibility of the full-screen mobile menu overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Menu / close button.
    pub fn toggle(self) -> Self {
        Self::set_open(!self.is_open())
    }

    /// Unconditional set.
    pub fn set_open(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// A nav link inside the overlay was followed.
    pub fn select_link(self) -> Self {
        MenuState::Closed
    }

    /// Escape key while the overlay is up.
    pub fn close(self) -> Self {
        MenuState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        let state = MenuState::Closed.toggle();
        assert!(state.is_open());
        assert_eq!(state.toggle(), MenuState::Closed);
    }

    #[test]
    fn link_selection_closes_open_menu() {
        assert_eq!(MenuState::Open.select_link(), MenuState::Closed);
        assert_eq!(MenuState::Closed.select_link(), MenuState::Closed);
    }

    #[test]
    fn set_open_is_unconditional() {
        assert_eq!(MenuState::set_open(true), MenuState::Open);
        assert_eq!(MenuState::set_open(false), MenuState::Closed);
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
    }

    #[test]
    fn escape_close_is_idempotent() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.toggle(), MenuState::set_open(!state.is_open()));
        }
    }
}
