use std::{env, path::PathBuf};

use thiserror::Error;

pub const CONF_DIR_ENV: &str = "SPM_GENERATOR_CONF_DIR";
pub const UNIT_DIR_ENV: &str = "SPM_GENERATOR_UNIT_DIR";
pub const JAVA_PROPERTIES_ENV: &str = "SPM_GENERATOR_JAVA_PROPERTIES";

/// Fixed locations and launch defaults for one generator run.
///
/// Built once in `main` and borrowed by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub java_defaults: String,
    pub spm_home: String,
    pub spm_monitor_home: String,
    pub monitor_user: String,
    pub jmx_params: String,
    pub standalone_class: String,
    pub monitor_jar: String,
    pub java_properties_file: PathBuf,
    pub monitor_conf_dir: PathBuf,
    pub properties_suffix: String,
    pub unit_dir: PathBuf,
    pub starter_unit_name: String,
    pub java_candidates: Vec<PathBuf>,
    pub java_not_found: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty when set")]
    BlankOverride(&'static str),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            java_defaults: "-server -Xmx192m -Xms64m -Xss256k".to_string(),
            spm_home: "/opt/spm".to_string(),
            spm_monitor_home: "/opt/spm/spm-monitor".to_string(),
            monitor_user: "spmmon".to_string(),
            jmx_params: String::new(),
            standalone_class: "com.sematext.spm.client.StandaloneMonitorAgent".to_string(),
            monitor_jar: "/opt/spm/spm-monitor/lib/spm-monitor-generic.jar".to_string(),
            java_properties_file: PathBuf::from("/opt/spm/properties/java.properties"),
            monitor_conf_dir: PathBuf::from("/opt/spm/spm-monitor/conf"),
            properties_suffix: ".properties".to_string(),
            unit_dir: PathBuf::from("/lib/systemd/system"),
            starter_unit_name: "spm-monitor-starter.service".to_string(),
            java_candidates: vec![
                PathBuf::from("/usr/local/bin/java"),
                PathBuf::from("/usr/bin/java"),
                PathBuf::from("/bin/java"),
            ],
            java_not_found: "/not/found/java".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Applies the directory overrides returned by `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path_override = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .map(|value| {
                    if value.is_empty() {
                        Err(ConfigError::BlankOverride(name))
                    } else {
                        Ok(PathBuf::from(value))
                    }
                })
                .transpose()
        };

        let mut config = Self::default();
        if let Some(dir) = path_override(CONF_DIR_ENV)? {
            config.monitor_conf_dir = dir;
        }
        if let Some(dir) = path_override(UNIT_DIR_ENV)? {
            config.unit_dir = dir;
        }
        if let Some(file) = path_override(JAVA_PROPERTIES_ENV)? {
            config.java_properties_file = file;
        }

        Ok(config)
    }

    pub fn starter_unit_path(&self) -> PathBuf {
        self.unit_dir.join(&self.starter_unit_name)
    }
}
