//! Script configuration loading and plugin config validation.
mod loader;
pub mod types;
mod validate;


pub use loader::{load_script_config, script_config_section};
pub use types::{DimensionConfig, PluginConfig};
pub use validate::{PLUGIN_NAME, validate_config};

#[cfg(test)]
pub(crate) use loader::load_config_file;
