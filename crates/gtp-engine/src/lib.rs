mod command_table;
mod engine;
mod framing;
mod session;

pub use command_table::{CommandName, CommandTable};
pub use engine::{
    CommandOutcome, GtpEngine, GtpHandler, FAIL_COMMAND_MESSAGE, PROTOCOL_COMMANDS,
    PROTOCOL_VERSION,
};
pub use framing::{parse_command_line, sanitize_line, CommandLine};
pub use session::{format_response, run_session, SessionEnd, SessionOptions};
