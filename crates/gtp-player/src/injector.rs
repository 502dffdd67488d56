use std::io::Write;

use gtp_core::{GtpError, GtpResult};
use tracing::info;

use crate::process::ProcessControl;

pub const FORCED_ERROR_MESSAGE: &str = "forced GTP error";
pub const FORCED_EXIT_MESSAGE: &str = "forced GTP error; exiting";
pub const UNKNOWN_ERROR_TYPE_MESSAGE: &str = "unknown force_error argument";
pub const MALFORMED_RESPONSE_LINE: &str = "!! forced ill-formed GTP response";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForcedError {
    Error,
    Exit,
    Internal,
    Kill,
    Protocol,
    Unknown(String),
}

impl ForcedError {
    pub fn from_args(args: &[String]) -> Self {
        match args.first().map(String::as_str) {
            None | Some("error") => Self::Error,
            Some("exit") => Self::Exit,
            Some("internal") => Self::Internal,
            Some("kill") => Self::Kill,
            Some("protocol") => Self::Protocol,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

pub struct ErrorInjector {
    process: Box<dyn ProcessControl>,
    raw_output: Box<dyn Write>,
}

impl ErrorInjector {
    /// `raw_output` must reach the same stream as the engine's responses,
    /// since the `protocol` variant writes around the response formatter.
    pub fn new(process: Box<dyn ProcessControl>, raw_output: Box<dyn Write>) -> Self {
        Self {
            process,
            raw_output,
        }
    }

    pub fn process(&self) -> &dyn ProcessControl {
        self.process.as_ref()
    }

    pub fn inject(&mut self, args: &[String]) -> GtpResult {
        let forced = ForcedError::from_args(args);
        info!(?forced, "injecting error");
        match forced {
            ForcedError::Error => Err(GtpError::failure(FORCED_ERROR_MESSAGE)),
            ForcedError::Exit => Err(GtpError::fatal(FORCED_EXIT_MESSAGE)),
            ForcedError::Internal => self.process.fault(),
            ForcedError::Kill => self.process.terminate(),
            ForcedError::Protocol => {
                self.write_malformed_line()?;
                Ok(String::new())
            }
            ForcedError::Unknown(_) => Err(GtpError::failure(UNKNOWN_ERROR_TYPE_MESSAGE)),
        }
    }

    fn write_malformed_line(&mut self) -> Result<(), GtpError> {
        writeln!(self.raw_output, "{}", MALFORMED_RESPONSE_LINE)
            .and_then(|()| self.raw_output.flush())
            .map_err(|error| GtpError::fatal(format!("raw output failed: {}", error)))
    }
}
