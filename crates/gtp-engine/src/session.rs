use std::io::{BufRead, Write};

use gtp_core::EngineError;
use tracing::{info, warn};

use crate::engine::{CommandOutcome, GtpEngine, GtpHandler};
use crate::framing::parse_command_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    EndOfInput,
    Quit,
    Fatal,
    ExitedUncleanly,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Leave `quit` unanswered, as if the engine died on the way out.
    pub exit_uncleanly: bool,
}

pub fn format_response(id: Option<&str>, outcome: &CommandOutcome) -> String {
    let prefix = if outcome.is_failure { '?' } else { '=' };
    let id = id.unwrap_or_default();
    if outcome.response.is_empty() {
        format!("{}{}\n\n", prefix, id)
    } else {
        format!("{}{} {}\n\n", prefix, id, outcome.response)
    }
}

pub fn run_session<H: GtpHandler>(
    engine: &mut GtpEngine<H>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    options: SessionOptions,
) -> Result<SessionEnd, EngineError> {
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw).map_err(map_session_read)? == 0 {
            info!("end of command stream");
            return Ok(SessionEnd::EndOfInput);
        }

        let line = String::from_utf8_lossy(&raw);
        let Some(command_line) = parse_command_line(&line) else {
            continue;
        };

        if options.exit_uncleanly && command_line.command == "quit" {
            warn!("quit received, exiting without a response");
            return Ok(SessionEnd::ExitedUncleanly);
        }

        let outcome = engine.run_command(&command_line.command, &command_line.args);
        writer
            .write_all(format_response(command_line.id.as_deref(), &outcome).as_bytes())
            .map_err(map_session_write)?;
        writer.flush().map_err(map_session_write)?;

        if outcome.end_session {
            let end = if outcome.is_failure {
                SessionEnd::Fatal
            } else {
                SessionEnd::Quit
            };
            info!(?end, "session ended");
            return Ok(end);
        }
    }
}

fn map_session_read(error: std::io::Error) -> EngineError {
    EngineError::new("SESSION_READ", error.to_string())
}

fn map_session_write(error: std::io::Error) -> EngineError {
    EngineError::new("SESSION_WRITE", error.to_string())
}
