use std::fmt::Display;

use gtp_core::EngineError;

fn map_error(code: &'static str, error: impl Display) -> EngineError {
    EngineError::new(code, error.to_string())
}

/// Reports on stderr; stdout belongs to the protocol.
pub(crate) fn emit_error(error: EngineError) -> i32 {
    eprintln!("gtp-test-player: {}", error);
    1
}

pub(crate) fn map_cli_logging(error: tracing_subscriber::util::TryInitError) -> EngineError {
    map_error("CLI_LOGGING", error)
}
