//! Bring an existing config file up to date with the current `Config`
//! fields, keeping the values the user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys that every config file should define.
pub const KNOWN_KEYS: [&str; 5] = [
    "log_level",
    "color_output",
    "confirm_delete",
    "default_export_format",
    "prompt",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Return the known keys missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(KNOWN_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Add default values for missing keys and rewrite the file.
///
/// Returns the keys that were added; an up-to-date file is left untouched.
pub fn migrate(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        if !map.contains_key(key)
            && let Some(v) = defaults.get(key)
        {
            map.insert(Value::String(key.to_string()), v.clone());
            added.push(key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))
            .map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))?;
        fs::write(path, serialized)
            .map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))?;
    }

    Ok(added)
}
