//! Effective configuration for one monitor and the rules deciding whether it gets a unit

use std::fmt;

use tracing::info;

use crate::{config::Config, domain::properties::Properties};

pub const JAVA: &str = "JAVA";
pub const JAVA_DEFAULTS: &str = "JAVA_DEFAULTS";
pub const SPM_HOME: &str = "SPM_HOME";
pub const SPM_MONITOR_HOME: &str = "SPM_MONITOR_HOME";
pub const SPM_MONITOR_USER: &str = "SPM_MONITOR_USER";
pub const SPM_MONITOR_JAR: &str = "SPM_MONITOR_JAR";
pub const SPM_MONITOR_JMX_PARAMS: &str = "SPM_MONITOR_JMX_PARAMS";
pub const SPM_MONITOR_STANDALONE_CLASS: &str = "SPM_MONITOR_STANDALONE_CLASS";
pub const SPM_MONITOR_ENABLED: &str = "SPM_MONITOR_ENABLED";
pub const SPM_MONITOR_IN_PROCESS: &str = "SPM_MONITOR_IN_PROCESS";

pub const OOM_MARKER: &str = "-XX:OnOutOfMemoryError";
pub const OOM_KILL_FLAG: &str = r#"-XX:OnOutOfMemoryError="kill -9 %%p""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    InProcessMissing,
    InProcess,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Disabled => "SPM_MONITOR_ENABLED is false",
            Self::InProcessMissing => "SPM_MONITOR_IN_PROCESS was not found",
            Self::InProcess => "monitor runs in-process",
        };
        f.write_str(text)
    }
}

/// Defaults, then the java binary, then the monitor's own properties; later layers win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    values: Properties,
}

impl EffectiveConfig {
    pub fn merge(config: &Config, java_bin: &str, monitor: &Properties) -> Self {
        let mut values = Properties::new();
        values.insert(JAVA_DEFAULTS.to_string(), config.java_defaults.clone());
        values.insert(SPM_HOME.to_string(), config.spm_home.clone());
        values.insert(SPM_MONITOR_HOME.to_string(), config.spm_monitor_home.clone());
        values.insert(SPM_MONITOR_USER.to_string(), config.monitor_user.clone());
        values.insert(SPM_MONITOR_JAR.to_string(), config.monitor_jar.clone());
        values.insert(SPM_MONITOR_JMX_PARAMS.to_string(), config.jmx_params.clone());
        values.insert(
            SPM_MONITOR_STANDALONE_CLASS.to_string(),
            config.standalone_class.clone(),
        );
        values.insert(JAVA.to_string(), java_bin.to_string());

        for (key, value) in monitor {
            values.insert(key.clone(), value.clone());
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of a key seeded by [`EffectiveConfig::merge`]; empty if a caller built the map otherwise.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        if self.get(SPM_MONITOR_ENABLED) == Some("false") {
            return Some(SkipReason::Disabled);
        }

        match self.get(SPM_MONITOR_IN_PROCESS) {
            None => Some(SkipReason::InProcessMissing),
            Some("false") => None,
            Some(_) => Some(SkipReason::InProcess),
        }
    }

    /// Appends the forced kill on out-of-memory unless the java flags already handle it.
    pub fn ensure_oom_kill(&mut self) {
        let defaults = self.value(JAVA_DEFAULTS);
        if defaults.contains(OOM_MARKER) {
            return;
        }

        let updated = format!("{defaults} {OOM_KILL_FLAG}");
        self.values.insert(JAVA_DEFAULTS.to_string(), updated);
    }
}

/// Merges and filters one monitor; `Err` carries why it was left out and is not logged here.
pub fn prepare_monitor(
    config: &Config,
    java_bin: &str,
    monitor: &Properties,
) -> Result<EffectiveConfig, SkipReason> {
    let mut effective = EffectiveConfig::merge(config, java_bin, monitor);
    if let Some(reason) = effective.skip_reason() {
        return Err(reason);
    }

    if effective.get(SPM_MONITOR_ENABLED).is_some() {
        info!("ignoring SPM_MONITOR_ENABLED not set to \"false\"");
    }

    effective.ensure_oom_kill();
    Ok(effective)
}
