//! Track whether the menu is open, closed, or in between.
use crate::gesture::Direction;

/// The state of the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// The menu is hidden.
    #[default]
    Closed,
    /// The menu is being presented.
    Opening,
    /// The menu is fully visible.
    Open,
    /// The menu is being dismissed.
    Closing,
}

impl MenuState {
    /// Returns `true` if the menu is fully open.
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Returns `true` if a transition is in flight.
    pub fn is_transitioning(self) -> bool {
        matches!(self, MenuState::Opening | MenuState::Closing)
    }
}

/// The lifecycle of the side menu.
///
/// Guards against duplicate open and close requests and remembers the
/// state to return to when a transition is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lifecycle {
    state: MenuState,
    previous: MenuState,
}

impl Lifecycle {
    /// Creates a new [`Lifecycle`] in the [`MenuState::Closed`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current [`MenuState`].
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Moves to [`MenuState::Opening`].
    ///
    /// Returns `false` without changing anything if the menu is already
    /// opening or open.
    pub fn begin_open(&mut self) -> bool {
        if matches!(self.state, MenuState::Opening | MenuState::Open) {
            return false;
        }

        self.enter(MenuState::Opening);
        true
    }

    /// Moves to [`MenuState::Closing`].
    ///
    /// Returns `false` without changing anything if the menu is already
    /// closing or closed.
    pub fn begin_close(&mut self) -> bool {
        if matches!(self.state, MenuState::Closing | MenuState::Closed) {
            return false;
        }

        self.enter(MenuState::Closing);
        true
    }

    /// Moves to the [`MenuState`] matching the beginning of a transition in
    /// the given [`Direction`].
    pub fn begin(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Present => self.begin_open(),
            Direction::Dismiss => self.begin_close(),
        }
    }

    /// Completes the in-flight transition.
    ///
    /// A committed transition lands on [`MenuState::Open`] or
    /// [`MenuState::Closed`]; a cancelled one goes back to the state that
    /// preceded it. Returns the new state.
    pub fn finish(&mut self, committed: bool) -> MenuState {
        let next = match (self.state, committed) {
            (MenuState::Opening, true) => MenuState::Open,
            (MenuState::Closing, true) => MenuState::Closed,
            (MenuState::Opening | MenuState::Closing, false) => self.previous,
            (state, _) => state,
        };

        self.enter(next);
        next
    }

    /// Restores the state that preceded the in-flight transition.
    ///
    /// Used when a transition is withdrawn before it started.
    pub fn revert(&mut self) -> MenuState {
        self.finish(false)
    }

    fn enter(&mut self, state: MenuState) {
        if self.state != state {
            log::debug!("Lifecycle: {:?} -> {:?}", self.state, state);
        }

        self.previous = self.state;
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), MenuState::Closed);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut lifecycle = Lifecycle::new();

        assert!(lifecycle.begin_open());
        assert!(!lifecycle.begin_open());
        assert_eq!(lifecycle.state(), MenuState::Opening);

        assert_eq!(lifecycle.finish(true), MenuState::Open);
        assert!(!lifecycle.begin_open());
        assert_eq!(lifecycle.state(), MenuState::Open);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.begin_close());

        assert!(lifecycle.begin_open());
        assert_eq!(lifecycle.finish(true), MenuState::Open);

        assert!(lifecycle.begin_close());
        assert!(!lifecycle.begin_close());
        assert_eq!(lifecycle.finish(true), MenuState::Closed);
    }

    #[test]
    fn test_cancel_restores_previous_state() {
        let mut lifecycle = Lifecycle::new();

        assert!(lifecycle.begin(Direction::Present));
        assert_eq!(lifecycle.finish(false), MenuState::Closed);

        assert!(lifecycle.begin(Direction::Present));
        assert_eq!(lifecycle.finish(true), MenuState::Open);

        assert!(lifecycle.begin(Direction::Dismiss));
        assert_eq!(lifecycle.revert(), MenuState::Open);
    }

    #[test]
    fn test_finish_without_transition_is_noop() {
        let mut lifecycle = Lifecycle::new();

        assert_eq!(lifecycle.finish(true), MenuState::Closed);
        assert_eq!(lifecycle.state(), MenuState::Closed);
    }
}
