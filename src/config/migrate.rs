//! Keeps an existing YAML config file in line with the current `Config`
//! fields: reports and fills in missing keys with their defaults.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key the current configuration knows about.
pub const KNOWN_FIELDS: &[&str] = &["database", "show_weekday", "separator_char", "show_date"];

const WEEKDAY_DOC: &str = "  # show_weekday parameter options:\n\
                           #   None   → do not show weekday\n\
                           #   Short  → Mo, Tu, We, Th, Fr, Sa, Su\n\
                           #   Medium → Mon, Tue, Wed, Thu, Fri, Sat, Sun\n\
                           #   Long   → Monday, Tuesday, ...\n";

/// Inject the documentation comment right after the `show_weekday` line.
pub fn annotate(yaml: &str) -> String {
    let mut out = String::new();
    for line in yaml.lines() {
        out.push_str(line);
        out.push('\n');
        if line.starts_with("show_weekday:") {
            out.push_str(WEEKDAY_DOC);
        }
    }
    out
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

/// Keys of [`KNOWN_FIELDS`] absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add every missing key with its default value and rewrite the file.
/// Existing values are kept untouched. Returns the keys that were added.
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;

    let defaults = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    let Value::Mapping(defaults) = defaults else {
        return Err(AppError::ConfigSave);
    };

    let mut added = Vec::new();
    for key in KNOWN_FIELDS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(*key);
        }
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, annotate(&serialized)).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
