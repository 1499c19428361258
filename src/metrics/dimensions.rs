use crate::config::DimensionConfig;

use super::Dimension;

/// Builds the dimension list attached to every datum in a batch.
#[must_use]
pub fn build_dimensions(config: Option<&DimensionConfig>) -> Vec<Dimension> {
    config.map_or_else(Vec::new, |dimensions| {
        dimensions
            .iter()
            .map(|(name, value)| Dimension {
                name: name.to_owned(),
                value: value.to_owned(),
            })
            .collect()
    })
}
