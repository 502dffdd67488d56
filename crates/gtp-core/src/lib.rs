pub mod args;
pub mod error;

pub use args::{interpret_int, required_arg};
pub use error::{EngineError, GtpError, GtpResult};
