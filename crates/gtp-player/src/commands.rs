use gtp_engine::{CommandName, CommandTable};

pub const VENDOR_PREFIX: &str = "gomill-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Name,
    Version,
    Genmove,
    Play,
    Boardsize,
    ClearBoard,
    Komi,
    ForceError,
    DelayedError,
}

impl PlayerCommand {
    pub const ALL: [PlayerCommand; 9] = [
        PlayerCommand::Name,
        PlayerCommand::Version,
        PlayerCommand::Genmove,
        PlayerCommand::Play,
        PlayerCommand::Boardsize,
        PlayerCommand::ClearBoard,
        PlayerCommand::Komi,
        PlayerCommand::ForceError,
        PlayerCommand::DelayedError,
    ];
}

impl CommandName for PlayerCommand {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Version => "version",
            Self::Genmove => "genmove",
            Self::Play => "play",
            Self::Boardsize => "boardsize",
            Self::ClearBoard => "clear_board",
            Self::Komi => "komi",
            Self::ForceError => "gomill-force_error",
            Self::DelayedError => "gomill-delayed_error",
        }
    }
}

pub fn dispatch_table() -> CommandTable<PlayerCommand> {
    CommandTable::from_commands(&PlayerCommand::ALL)
}
