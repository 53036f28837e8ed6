use std::{fs, path::PathBuf};

use tracing::{debug, info, info_span, warn};

use crate::{
    config::Config,
    domain::{
        discovery::discover_monitors,
        java::{load_java_properties, locate_java, ExecutableProbe},
        merge::{prepare_monitor, SkipReason},
        properties::read_properties,
    },
    errors::{GeneratorError, Result},
    units::{monitor_unit, starter_unit},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    Check,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub java_bin: String,
    pub generated: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
    pub written: Vec<PathBuf>,
}

pub struct Generator<'a, P> {
    config: &'a Config,
    probe: P,
}

impl<'a, P: ExecutableProbe> Generator<'a, P> {
    pub fn new(config: &'a Config, probe: P) -> Self {
        Self { config, probe }
    }

    pub fn run(&self, mode: Mode) -> Result<GenerationReport> {
        let config = self.config;

        debug!("looking for JAVA binary");
        let java_properties = load_java_properties(&config.java_properties_file)?;
        let java_bin = locate_java(config, &java_properties, &self.probe);
        debug!(java = %java_bin, "found JAVA binary");

        debug!("getting monitor properties file names");
        let monitors = discover_monitors(&config.monitor_conf_dir, &config.properties_suffix)?;

        let mut report = GenerationReport {
            java_bin,
            ..GenerationReport::default()
        };

        for monitor in monitors {
            let _span = info_span!("monitor", name = %monitor.name).entered();

            let properties_path = config.monitor_conf_dir.join(&monitor.file_name);
            let properties = read_properties(&properties_path)?;

            let effective = match prepare_monitor(config, &report.java_bin, &properties) {
                Ok(effective) => effective,
                Err(reason) => {
                    log_skip(&monitor.name, reason);
                    report.skipped.push((monitor.name, reason));
                    continue;
                }
            };

            if mode == Mode::Write {
                info!(properties = %properties_path.display(), "generating unit file");
                let unit_path = config.unit_dir.join(monitor.unit_file_name());
                let content = monitor_unit(&monitor.name, &properties_path, &effective);
                fs::write(&unit_path, content)
                    .map_err(|err| GeneratorError::write(&unit_path, err))?;
                report.written.push(unit_path);
            }

            report.generated.push(monitor.name);
        }

        if mode == Mode::Write {
            info!("generating unit file for monitor starter");
            let starter_path = config.starter_unit_path();
            let content = starter_unit(&report.generated);
            fs::write(&starter_path, content)
                .map_err(|err| GeneratorError::write(&starter_path, err))?;
            report.written.push(starter_path);
        }

        Ok(report)
    }
}

/// In-process monitors are expected and only logged at info level.
fn log_skip(name: &str, reason: SkipReason) {
    match reason {
        SkipReason::InProcess => info!(monitor = %name, %reason, "skipping monitor"),
        SkipReason::Disabled | SkipReason::InProcessMissing => {
            warn!(monitor = %name, %reason, "skipping monitor")
        }
    }
}
