use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `debug` wins over `verbose` when both are given.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (_, true) => Self::Debug,
            (true, false) => Self::Verbose,
            (false, false) => Self::Quiet,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }
}

/// Colour codes only go to an interactive terminal.
pub fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::new(verbosity.level().as_str().to_ascii_lowercase());
    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi_enabled(&io::stderr()))
        .with_target(false);

    match verbosity {
        Verbosity::Quiet => builder.without_time().with_level(false).init(),
        Verbosity::Verbose | Verbosity::Debug => builder.compact().init(),
    }
}
