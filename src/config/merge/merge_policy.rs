//! Merge rules: defaults and override order.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.base_url", crate::request::DEFAULT_BASE_URL)?
        .set_default("api.connect_timeout_secs", 10)?
        .set_default("api.request_timeout_secs", 30)
}

/// Environment overrides, e.g. `RESTFUL_API__BASE_URL`. Applied last.
pub fn environment_source() -> Environment {
    Environment::with_prefix("RESTFUL")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
