use serde::{Deserialize, Serialize};

/// Optional integrations toggled from `config.toml`.
///
/// Every field defaults to `false` so a missing or partial `[features]`
/// table leaves the integration off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
}
