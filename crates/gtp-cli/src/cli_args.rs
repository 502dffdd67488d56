use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "gtp-test-player")]
#[command(about = "GTP engine that misbehaves on request, for testing controllers")]
pub(crate) struct Cli {
    /// Make this command always fail.
    #[arg(long = "fail-command", value_name = "COMMAND")]
    pub(crate) fail_command: Option<String>,
    /// Exit without answering `quit`, or the genmove at the move limit.
    #[arg(long = "exit-uncleanly")]
    pub(crate) exit_uncleanly: bool,
    /// Report the move count on stderr at every genmove.
    #[arg(long = "chat-stderr")]
    pub(crate) chat_stderr: bool,
    /// Stop at the first genmove after this many moves.
    #[arg(long = "move-limit", value_name = "MOVES")]
    pub(crate) move_limit: Option<u64>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub(crate) verbose: u8,
}
