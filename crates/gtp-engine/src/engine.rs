use gtp_core::{GtpError, GtpResult};
use tracing::{debug, warn};

use crate::command_table::{CommandName, CommandTable};

pub const PROTOCOL_VERSION: &str = "2";
pub const FAIL_COMMAND_MESSAGE: &str = "forced to fail from command line";

pub const PROTOCOL_COMMANDS: [&str; 4] =
    ["known_command", "list_commands", "protocol_version", "quit"];

/// Implemented by whatever sits behind the engine: it hands over its command
/// table once and then receives the commands the engine looks up in it.
pub trait GtpHandler {
    type Command: CommandName;

    fn commands(&self) -> &CommandTable<Self::Command>;

    fn handle(&mut self, command: Self::Command, args: &[String]) -> GtpResult;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub is_failure: bool,
    pub response: String,
    pub end_session: bool,
}

impl CommandOutcome {
    fn success(response: impl Into<String>) -> Self {
        Self {
            is_failure: false,
            response: response.into(),
            end_session: false,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            is_failure: true,
            response: message.into(),
            end_session: false,
        }
    }

    fn from_result(result: GtpResult) -> Self {
        match result {
            Ok(response) => Self::success(response),
            Err(error) => Self {
                is_failure: true,
                end_session: error.is_fatal(),
                response: error.message().to_string(),
            },
        }
    }
}

#[derive(Debug)]
pub struct GtpEngine<H> {
    handler: H,
    failing_command: Option<String>,
}

impl<H: GtpHandler> GtpEngine<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            failing_command: None,
        }
    }

    /// Makes `command` fail whatever it is, protocol commands included.
    pub fn with_failing_command(mut self, command: Option<String>) -> Self {
        self.failing_command = command;
        self
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub fn is_known(&self, name: &str) -> bool {
        PROTOCOL_COMMANDS.contains(&name) || self.handler.commands().contains(name)
    }

    pub fn list_commands(&self) -> Vec<&'static str> {
        let mut names = PROTOCOL_COMMANDS.to_vec();
        names.extend(self.handler.commands().names());
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Runs a single command. Panics raised by the handler are not caught.
    pub fn run_command(&mut self, command: &str, args: &[String]) -> CommandOutcome {
        debug!(command, ?args, "running command");
        let outcome = match command {
            _ if self.failing_command.as_deref() == Some(command) => {
                CommandOutcome::failure(FAIL_COMMAND_MESSAGE)
            }
            "protocol_version" => CommandOutcome::success(PROTOCOL_VERSION),
            "list_commands" => CommandOutcome::success(self.list_commands().join("\n")),
            "known_command" => match args.first() {
                Some(name) => CommandOutcome::success(self.is_known(name).to_string()),
                None => CommandOutcome::from_result(Err(GtpError::invalid_arguments())),
            },
            "quit" => CommandOutcome {
                is_failure: false,
                response: String::new(),
                end_session: true,
            },
            _ => match self.handler.commands().lookup(command) {
                Some(resolved) => CommandOutcome::from_result(self.handler.handle(resolved, args)),
                None => CommandOutcome::failure("unknown command"),
            },
        };

        if outcome.is_failure && outcome.end_session {
            warn!(command, error = %outcome.response, "fatal error, ending session");
        } else if outcome.is_failure {
            debug!(command, error = %outcome.response, "command failed");
        }
        outcome
    }
}
