/// Validated `cloudwatch` plugin settings.
///
/// Only [`validate_config`](super::validate_config) builds this value; it is
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    namespace: String,
    region: String,
    dimensions: Option<DimensionConfig>,
}

impl PluginConfig {
    pub(super) const fn new(
        namespace: String,
        region: String,
        dimensions: Option<DimensionConfig>,
    ) -> Self {
        Self {
            namespace,
            region,
            dimensions,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub const fn dimensions(&self) -> Option<&DimensionConfig> {
        self.dimensions.as_ref()
    }
}

/// Dimension name/value pairs in the order they appear in the script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionConfig {
    entries: Vec<(String, String)>,
}

impl DimensionConfig {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for DimensionConfig {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
