//! Reader for flat `KEY="value"` properties files

use std::{fs, path::Path, str, sync::OnceLock};

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, info};

use crate::errors::{GeneratorError, Result};

/// Key/value pairs in the order they were first seen.
pub type Properties = IndexMap<String, String>;

fn property_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(\w+)\s*=\s*"*(.*?)"*$"#).expect("property line pattern is valid")
    })
}

pub fn read_properties(path: &Path) -> Result<Properties> {
    debug!(path = %path.display(), "reading properties file");
    let content = fs::read(path).map_err(|err| GeneratorError::read(path, err))?;

    info!(path = %path.display(), "parsing properties file");
    Ok(parse_properties_bytes(&content))
}

/// Lines that are not `KEY=value` assignments are ignored; a repeated key keeps its last value.
pub fn parse_properties(content: &str) -> Properties {
    parse_properties_bytes(content.as_bytes())
}

/// Like [`parse_properties`], but a line that is not valid UTF-8 is dropped on its own.
pub fn parse_properties_bytes(content: &[u8]) -> Properties {
    let mut properties = Properties::new();

    for raw in content.split(|byte| *byte == b'\n') {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let Ok(line) = str::from_utf8(raw) else {
            debug!("skipping line that is not valid UTF-8");
            continue;
        };

        let Some(captures) = property_line().captures(line) else {
            continue;
        };

        let key = &captures[1];
        let value = &captures[2];
        debug!(key, value, "found property");
        properties.insert(key.to_string(), value.to_string());
    }

    properties
}
