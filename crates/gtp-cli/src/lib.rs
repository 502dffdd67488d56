use std::ffi::OsString;
use std::io;

use clap::Parser;
use gtp_core::EngineError;
use gtp_engine::{run_session, GtpEngine, SessionEnd, SessionOptions};
use gtp_player::{HostProcess, PlayerOptions, TestPlayer};
use tracing::info;

mod cli_args;
mod error_map;
mod logging;

pub(crate) use cli_args::Cli;
pub(crate) use error_map::{emit_error, map_cli_logging};
pub(crate) use logging::init_logging;
#[cfg(test)]
pub(crate) use logging::log_filter_from_verbosity;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, EngineError> {
    init_logging(cli.verbose)?;

    let player = TestPlayer::new(
        player_options(&cli),
        Box::new(HostProcess),
        Box::new(io::stdout()),
    );
    let mut engine = GtpEngine::new(player).with_failing_command(cli.fail_command.clone());

    info!(
        fail_command = ?cli.fail_command,
        move_limit = ?cli.move_limit,
        exit_uncleanly = cli.exit_uncleanly,
        "session started"
    );
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    let end = run_session(
        &mut engine,
        &mut reader,
        &mut writer,
        session_options(&cli),
    )?;

    Ok(exit_code_for(end))
}

fn player_options(cli: &Cli) -> PlayerOptions {
    PlayerOptions {
        chat_stderr: cli.chat_stderr,
        move_limit: cli.move_limit,
        exit_uncleanly: cli.exit_uncleanly,
    }
}

fn session_options(cli: &Cli) -> SessionOptions {
    SessionOptions {
        exit_uncleanly: cli.exit_uncleanly,
    }
}

fn exit_code_for(end: SessionEnd) -> i32 {
    match end {
        SessionEnd::EndOfInput | SessionEnd::Quit | SessionEnd::Fatal => 0,
        SessionEnd::ExitedUncleanly => 1,
    }
}
