use serde_json::{Map, Value};

use crate::error::ConfigError;

use super::types::{DimensionConfig, PluginConfig};

/// Name of the plugin section under `config.plugins`.
pub const PLUGIN_NAME: &str = "cloudwatch";

const PARAM_NAMESPACE: &str = "namespace";
const PARAM_REGION: &str = "region";
const PARAM_DIMENSIONS: &str = "dimensions";

#[derive(Debug, Clone, Copy)]
enum RequiredParam {
    Namespace,
    Region,
}

impl RequiredParam {
    const fn key(self) -> &'static str {
        match self {
            Self::Namespace => PARAM_NAMESPACE,
            Self::Region => PARAM_REGION,
        }
    }

    const fn missing(self) -> ConfigError {
        match self {
            Self::Namespace => ConfigError::NamespaceMissing,
            Self::Region => ConfigError::RegionMissing,
        }
    }

    const fn not_string(self) -> ConfigError {
        match self {
            Self::Namespace => ConfigError::NamespaceNotString,
            Self::Region => ConfigError::RegionNotString,
        }
    }

    const fn empty(self) -> ConfigError {
        match self {
            Self::Namespace => ConfigError::NamespaceEmpty,
            Self::Region => ConfigError::RegionEmpty,
        }
    }
}

/// Validates the `plugins.cloudwatch` section of a script config and builds
/// the typed plugin config from it.
///
/// Checks run in a fixed order: section presence, namespace, region, then
/// dimensions. The first failure is returned.
///
/// # Errors
///
/// Returns the [`ConfigError`] describing the first structural problem found.
pub fn validate_config(script_config: &Value) -> Result<PluginConfig, ConfigError> {
    let section = script_config
        .get("plugins")
        .and_then(Value::as_object)
        .and_then(|plugins| plugins.get(PLUGIN_NAME))
        .and_then(Value::as_object)
        .ok_or(ConfigError::ConfigMissing)?;

    let namespace = required_string(section, RequiredParam::Namespace)?;
    let region = required_string(section, RequiredParam::Region)?;
    let dimensions = optional_dimensions(section)?;

    Ok(PluginConfig::new(namespace, region, dimensions))
}

fn required_string(
    section: &Map<String, Value>,
    param: RequiredParam,
) -> Result<String, ConfigError> {
    match section.get(param.key()) {
        None => Err(param.missing()),
        Some(Value::String(value)) if value.is_empty() => Err(param.empty()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_)) => {
            Err(param.not_string())
        }
    }
}

fn optional_dimensions(
    section: &Map<String, Value>,
) -> Result<Option<DimensionConfig>, ConfigError> {
    let Some(raw) = section.get(PARAM_DIMENSIONS) else {
        return Ok(None);
    };
    let Value::Object(entries) = raw else {
        return Err(ConfigError::DimensionsNotObject);
    };

    entries
        .iter()
        .map(|(name, value)| match value {
            Value::String(value) => Ok((name.clone(), value.clone())),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
                Err(ConfigError::DimensionValueNotString { name: name.clone() })
            }
        })
        .collect::<Result<DimensionConfig, ConfigError>>()
        .map(Some)
}
