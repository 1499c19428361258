use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error(
        "The \"cloudwatch\" plugin requires configuration under <script>.config.plugins.cloudwatch"
    )]
    ConfigMissing,
    #[error("The \"namespace\" parameter is required")]
    NamespaceMissing,
    #[error("The \"namespace\" param must have a string value")]
    NamespaceNotString,
    #[error("The \"namespace\" param must have a length of at least one")]
    NamespaceEmpty,
    #[error("The \"region\" parameter is required")]
    RegionMissing,
    #[error("The \"region\" param must have a string value")]
    RegionNotString,
    #[error("The \"region\" param must have a length of at least one")]
    RegionEmpty,
    #[error("The \"dimensions\" param must have an object value")]
    DimensionsNotObject,
    #[error("The \"dimensions.{name}\" param must have a string value")]
    DimensionValueNotString { name: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
