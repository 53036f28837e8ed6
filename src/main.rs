use clap::Parser;
use spm_monitor_generator::{
    cli::Args, config::Config, domain::java::FsProbe, logging, Generator, Mode,
};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_logging(args.verbosity());

    let config = Config::from_env()?;
    let mode = if args.check { Mode::Check } else { Mode::Write };

    let report = Generator::new(&config, FsProbe)
        .run(mode)
        .inspect_err(|err| match err.path() {
            Some(path) => error!(path = %path.display(), "monitor unit generation failed"),
            None => error!("monitor unit generation failed"),
        })?;

    info!(
        java = %report.java_bin,
        generated = report.generated.len(),
        skipped = report.skipped.len(),
        written = report.written.len(),
        check = args.check,
        "monitor units processed"
    );
    Ok(())
}
