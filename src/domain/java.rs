//! Java binary discovery
//!
//! Checked in order: `JAVA` and `JAVA_HOME` from the java properties file,
//! then the well-known install locations, then a placeholder path.

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    config::Config,
    domain::properties::{read_properties, Properties},
    errors::Result,
};

pub const JAVA_KEY: &str = "JAVA";
pub const JAVA_HOME_KEY: &str = "JAVA_HOME";

pub trait ExecutableProbe {
    fn is_executable(&self, path: &Path) -> bool;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl ExecutableProbe for FsProbe {
    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        path.metadata()
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Reads the java properties file, treating a missing file as empty.
pub fn load_java_properties(path: &Path) -> Result<Properties> {
    if path.is_file() {
        read_properties(path)
    } else {
        warn!(path = %path.display(), "JAVA properties file not found");
        Ok(Properties::new())
    }
}

pub fn locate_java(
    config: &Config,
    java_properties: &Properties,
    probe: &impl ExecutableProbe,
) -> String {
    if let Some(java) = non_empty(java_properties, JAVA_KEY) {
        debug!(java, "using JAVA from java properties");
        return java.to_string();
    }

    if let Some(java_home) = non_empty(java_properties, JAVA_HOME_KEY) {
        let java = Path::new(java_home).join("bin").join("java");
        debug!(java = %java.display(), "using JAVA_HOME from java properties");
        return java.display().to_string();
    }

    for candidate in &config.java_candidates {
        if probe.is_executable(candidate) {
            return candidate.display().to_string();
        }
        debug!(candidate = %candidate.display(), "no executable java");
    }

    config.java_not_found.clone()
}

fn non_empty<'a>(properties: &'a Properties, key: &str) -> Option<&'a str> {
    properties
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
