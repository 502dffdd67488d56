/// Process-level failures the player can be told to produce. None returns:
/// they stand in for an engine that crashes or vanishes mid-command.
pub trait ProcessControl {
    fn terminate(&self) -> !;

    fn fault(&self) -> !;

    /// Leaves with a failure status; anything already flushed stays written.
    fn exit_uncleanly(&self) -> !;
}

/// Acts on the real hosting process.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProcess;

impl ProcessControl for HostProcess {
    fn terminate(&self) -> ! {
        kill_self()
    }

    fn fault(&self) -> ! {
        let divisor = std::hint::black_box(0u32);
        let quotient = 1 / divisor;
        unreachable!("division by zero produced {}", quotient)
    }

    fn exit_uncleanly(&self) -> ! {
        std::process::exit(1)
    }
}

#[cfg(unix)]
fn kill_self() -> ! {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    if let Err(error) = kill(Pid::this(), Signal::SIGKILL) {
        tracing::error!(%error, "SIGKILL to self failed, aborting instead");
    }
    std::process::abort()
}

#[cfg(not(unix))]
fn kill_self() -> ! {
    std::process::abort()
}
