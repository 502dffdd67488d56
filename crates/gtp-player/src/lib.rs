mod commands;
mod injector;
mod player;
mod process;
mod scheduler;
mod state;

pub use commands::{dispatch_table, PlayerCommand, VENDOR_PREFIX};
pub use injector::{
    ErrorInjector, ForcedError, FORCED_ERROR_MESSAGE, FORCED_EXIT_MESSAGE,
    MALFORMED_RESPONSE_LINE, UNKNOWN_ERROR_TYPE_MESSAGE,
};
pub use player::{
    PlayerOptions, TestPlayer, GENMOVE_RESPONSE, MOVE_LIMIT_MESSAGE, PLAYER_NAME,
    PLAYER_VERSION,
};
pub use process::{HostProcess, ProcessControl};
pub use state::{DelayedError, PlayerState};
