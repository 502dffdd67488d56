use gtp_core::{interpret_int, required_arg, GtpError};
use tracing::info;

use crate::state::{DelayedError, PlayerState};

impl PlayerState {
    /// Arms `args[0]` as the move number and keeps the remaining tokens for
    /// `force_error`. A bad move number leaves the current arm in place.
    pub fn arm_delayed_error(&mut self, args: &[String]) -> Result<(), GtpError> {
        let move_number = interpret_int(required_arg(args, 0)?)?;
        // Thresholds at or below zero fire on the next genmove, same as 1.
        let armed = DelayedError {
            move_number: move_number.max(1).unsigned_abs(),
            args: args[1..].to_vec(),
        };
        info!(
            move_number = armed.move_number,
            args = ?armed.args,
            "delayed error armed"
        );
        self.delayed_error = Some(armed);
        Ok(())
    }

    /// Disarms and returns the delayed error once the move count has reached
    /// its threshold.
    pub fn take_due_delayed_error(&mut self) -> Option<DelayedError> {
        let move_count = self.move_count;
        let due = self
            .delayed_error
            .as_ref()
            .is_some_and(|armed| move_count >= armed.move_number);
        if !due {
            return None;
        }
        let fired = self.delayed_error.take();
        if let Some(fired) = &fired {
            info!(
                move_count,
                move_number = fired.move_number,
                "delayed error fired"
            );
        }
        fired
    }
}
