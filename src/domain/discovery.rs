use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::errors::{GeneratorError, Result};

/// A monitor properties file, named by its logical (suffix-stripped) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorDescriptor {
    pub file_name: String,
    pub name: String,
}

impl MonitorDescriptor {
    /// Returns `None` unless `file_name` ends in `suffix` with something in front of it.
    pub fn from_file_name(file_name: &str, suffix: &str) -> Option<Self> {
        let name = file_name.strip_suffix(suffix)?;
        if name.is_empty() {
            return None;
        }

        Some(Self {
            file_name: file_name.to_string(),
            name: name.to_string(),
        })
    }

    pub fn unit_file_name(&self) -> String {
        format!("{}.service", self.name)
    }
}

/// Entry names in `directory` ending in `suffix`, sorted.
pub fn list_file_names(directory: &Path, suffix: &str) -> Result<Vec<String>> {
    debug!(directory = %directory.display(), suffix, "listing directory");

    let entries = fs::read_dir(directory).map_err(|err| GeneratorError::list_dir(directory, err))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| GeneratorError::list_dir(directory, err))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(entry = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };

        if name.ends_with(suffix) {
            debug!(file = %name, "found file");
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

pub fn discover_monitors(directory: &Path, suffix: &str) -> Result<Vec<MonitorDescriptor>> {
    let monitors = list_file_names(directory, suffix)?
        .iter()
        .filter_map(|file_name| {
            let descriptor = MonitorDescriptor::from_file_name(file_name, suffix);
            if descriptor.is_none() {
                warn!(file = %file_name, "skipping properties file without a monitor name");
            }
            descriptor
        })
        .collect();

    Ok(monitors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").expect("create file");
    }

    #[test]
    fn lists_matching_names_sorted() {
        let dir = tempfile::tempdir().expect("temp dir");
        for name in ["zeta.properties", "alpha.properties", "notes.txt", "beta.properties.bak"] {
            touch(dir.path(), name);
        }

        let names = list_file_names(dir.path(), ".properties").expect("listing should work");
        assert_eq!(names, vec!["alpha.properties", "zeta.properties"]);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("conf");

        let err = list_file_names(&missing, ".properties").expect_err("expected listing error");
        assert!(matches!(err, GeneratorError::ListDir { .. }));
    }

    #[test]
    fn descriptor_strips_suffix() {
        let descriptor = MonitorDescriptor::from_file_name(
            "spm-monitor-solr-config-abc.properties",
            ".properties",
        )
        .expect("descriptor");

        assert_eq!(descriptor.name, "spm-monitor-solr-config-abc");
        assert_eq!(descriptor.unit_file_name(), "spm-monitor-solr-config-abc.service");
        assert!(MonitorDescriptor::from_file_name(".properties", ".properties").is_none());
        assert!(MonitorDescriptor::from_file_name("foo.conf", ".properties").is_none());
    }

    #[test]
    fn discover_skips_nameless_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        touch(dir.path(), ".properties");
        touch(dir.path(), "foo.properties");

        let monitors = discover_monitors(dir.path(), ".properties").expect("discovery");
        assert_eq!(monitors.len(), 1);
        assert_eq!(monitors[0].name, "foo");
        assert_eq!(monitors[0].file_name, "foo.properties");
    }
}
