use std::io::{self, Write};

use gtp_core::{GtpError, GtpResult};
use gtp_engine::{CommandTable, GtpHandler};
use tracing::{debug, warn};

use crate::commands::{dispatch_table, PlayerCommand};
use crate::injector::ErrorInjector;
use crate::process::ProcessControl;
use crate::state::PlayerState;

pub const PLAYER_NAME: &str = "GTP test player";
pub const PLAYER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GENMOVE_RESPONSE: &str = "pass";
pub const MOVE_LIMIT_MESSAGE: &str = "move limit reached";

#[derive(Debug, Clone, Default)]
pub struct PlayerOptions {
    /// Write `genmove: <moves so far>` to the chat output on every genmove.
    pub chat_stderr: bool,
    /// The first genmove asked for once this many moves have been played
    /// ends the session instead of answering.
    pub move_limit: Option<u64>,
    /// At the move limit, exit the process without a response.
    pub exit_uncleanly: bool,
}

pub struct TestPlayer {
    table: CommandTable<PlayerCommand>,
    state: PlayerState,
    injector: ErrorInjector,
    chat_output: Box<dyn Write>,
    options: PlayerOptions,
}

impl TestPlayer {
    pub fn new(
        options: PlayerOptions,
        process: Box<dyn ProcessControl>,
        raw_output: Box<dyn Write>,
    ) -> Self {
        Self {
            table: dispatch_table(),
            state: PlayerState::new(),
            injector: ErrorInjector::new(process, raw_output),
            chat_output: Box::new(io::stderr()),
            options,
        }
    }

    pub fn with_chat_output(mut self, chat_output: Box<dyn Write>) -> Self {
        self.chat_output = chat_output;
        self
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    fn handle_name(&self) -> GtpResult {
        Ok(PLAYER_NAME.to_string())
    }

    fn handle_version(&self) -> GtpResult {
        Ok(PLAYER_VERSION.to_string())
    }

    fn handle_play(&mut self) -> GtpResult {
        self.state.record_move();
        Ok(String::new())
    }

    fn handle_genmove(&mut self) -> GtpResult {
        let move_count = self.state.record_move();
        let moves_before = move_count - 1;
        if self.options.chat_stderr {
            self.chat(&format!("genmove: {}", moves_before))?;
        }
        if self
            .options
            .move_limit
            .is_some_and(|limit| moves_before >= limit)
        {
            warn!(moves_before, "move limit reached");
            if self.options.exit_uncleanly {
                self.injector.process().exit_uncleanly();
            }
            return Err(GtpError::fatal(MOVE_LIMIT_MESSAGE));
        }
        if let Some(fired) = self.state.take_due_delayed_error() {
            return self.injector.inject(&fired.args);
        }
        debug!(move_count, "genmove");
        Ok(GENMOVE_RESPONSE.to_string())
    }

    fn chat(&mut self, line: &str) -> Result<(), GtpError> {
        writeln!(self.chat_output, "{}", line)
            .and_then(|()| self.chat_output.flush())
            .map_err(|error| GtpError::fatal(format!("chat output failed: {}", error)))
    }

    fn handle_ignored(&self) -> GtpResult {
        Ok(String::new())
    }

    fn handle_force_error(&mut self, args: &[String]) -> GtpResult {
        self.injector.inject(args)
    }

    fn handle_delayed_error(&mut self, args: &[String]) -> GtpResult {
        self.state.arm_delayed_error(args)?;
        Ok(String::new())
    }
}

impl GtpHandler for TestPlayer {
    type Command = PlayerCommand;

    fn commands(&self) -> &CommandTable<PlayerCommand> {
        &self.table
    }

    fn handle(&mut self, command: PlayerCommand, args: &[String]) -> GtpResult {
        match command {
            PlayerCommand::Name => self.handle_name(),
            PlayerCommand::Version => self.handle_version(),
            PlayerCommand::Genmove => self.handle_genmove(),
            PlayerCommand::Play => self.handle_play(),
            PlayerCommand::Boardsize | PlayerCommand::ClearBoard | PlayerCommand::Komi => {
                self.handle_ignored()
            }
            PlayerCommand::ForceError => self.handle_force_error(args),
            PlayerCommand::DelayedError => self.handle_delayed_error(args),
        }
    }
}
