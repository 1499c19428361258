use std::path::Path;

use serde_json::Value;

use crate::error::{AppError, AppResult, ConfigError};

/// Key of the script section that carries `plugins`.
const SCRIPT_CONFIG_KEY: &str = "config";

/// Loads a script file and returns its `config` section.
///
/// Scripts that have no top-level `config` table are treated as the config
/// section themselves.
///
/// # Errors
///
/// Returns an error when the file cannot be read, has an unsupported
/// extension, or fails to parse.
pub fn load_script_config(path: &Path) -> AppResult<Value> {
    let document = load_config_file(path)?;
    Ok(script_config_section(document))
}

#[must_use]
pub fn script_config_section(document: Value) -> Value {
    match document {
        Value::Object(mut root) => match root.remove(SCRIPT_CONFIG_KEY) {
            Some(section) => section,
            None => Value::Object(root),
        },
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            document
        }
    }
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
