//! Config loading facade: assembles sources in precedence order.

use super::merge::merge_policy;
use super::sources::global_file;
use super::RestfulConfig;
use crate::error::ClientError;
use config::File;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, and environment overrides.
    pub fn load() -> Result<RestfulConfig, ClientError> {
        Self::load_layers(None)
    }

    /// Like `load`, with `path` layered above the global file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<RestfulConfig, ClientError> {
        Self::load_layers(Some(path))
    }

    fn load_layers(explicit: Option<&Path>) -> Result<RestfulConfig, ClientError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder);
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(merge_policy::environment_source());

        let config: RestfulConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(ClientError::ConfigError)?;
        Ok(config)
    }
}
