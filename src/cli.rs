//! Command-line flags.

use clap::Parser;

use crate::logging::Verbosity;

#[derive(Parser, Debug, Default)]
#[command(name = "spm-monitor-generator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SPM Monitor Generator", long_about = None)]
pub struct Args {
    /// Verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Debug logging
    #[arg(long)]
    pub debug: bool,

    /// Check if it is possible to generate services without writing any unit file
    #[arg(long)]
    pub check: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.debug)
    }
}
