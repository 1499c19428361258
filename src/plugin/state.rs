use std::fmt;

/// Observable lifecycle of a reporting plugin.
///
/// A plugin value only exists once its configuration has been validated, so
/// there is no pre-validation state to observe: a failed
/// [`ReportingPlugin::init`](super::ReportingPlugin::init) yields no plugin.
/// `Active` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    Validated,
    Active,
}

impl PluginState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validated => "validated",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for PluginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
