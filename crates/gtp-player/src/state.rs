/// A failure waiting for the move count to reach `move_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedError {
    pub move_number: u64,
    pub args: Vec<String>,
}

/// Everything the player remembers between commands. Lives for the whole
/// session; `clear_board` does not reset it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub(crate) move_count: u64,
    pub(crate) delayed_error: Option<DelayedError>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn delayed_error(&self) -> Option<&DelayedError> {
        self.delayed_error.as_ref()
    }

    pub(crate) fn record_move(&mut self) -> u64 {
        self.move_count += 1;
        self.move_count
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn new_state_is_idle_at_move_zero() {
        let state = PlayerState::new();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.delayed_error(), None);
    }

    #[test]
    fn record_move_counts_by_one() {
        let mut state = PlayerState::new();
        assert_eq!(state.record_move(), 1);
        assert_eq!(state.record_move(), 2);
        assert_eq!(state.move_count(), 2);
    }
}
