#![warn(clippy::indexing_slicing)]

//! Configuration of the vick Service controller.
//!
//! Values are resolved in this order, first one wins:
//! 1. environment variables (e.g. [`VICK_LABEL_OVERRIDE_ENV`]);
//! 2. the config file (json or yaml), see [`ControllerFileConfig::from_path`];
//! 3. defaults.

pub mod config;
pub mod labels;
#[cfg(test)]
pub(crate) mod util;

use std::{ffi::OsStr, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::{from_env::FromEnv, source::ConfigSource, ConfigError, Result, VickConfig},
    labels::LabelOverridePolicy,
};

/// Path of the config file, used when no path is given explicitly.
pub const VICK_CONFIG_FILE_ENV: &str = "VICK_CONFIG_FILE";

/// Overrides [`ControllerFileConfig::label_override`].
pub const VICK_LABEL_OVERRIDE_ENV: &str = "VICK_LABEL_OVERRIDE";

/// Config as written in the config file, every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ControllerFileConfig {
    /// How the Service's own labels interact with the reserved labels of generated objects.
    ///
    /// Defaults to `user-wins`.
    pub label_override: Option<LabelOverridePolicy>,
}

impl ControllerFileConfig {
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let contents = std::fs::read_to_string(path.as_ref())?;

        match path.as_ref().extension().and_then(OsStr::to_str) {
            // No Extension? assume json
            Some("json") | None => Ok(serde_json::from_str::<Self>(&contents)?),
            Some("yaml" | "yml") => Ok(serde_yaml::from_str::<Self>(&contents)?),
            ext => Err(ConfigError::UnsupportedFormat(ext.map(String::from))),
        }
    }
}

impl VickConfig for ControllerFileConfig {
    type Generated = ControllerConfig;

    fn generate_config(self) -> Result<Self::Generated> {
        let label_override = FromEnv::<LabelOverridePolicy>::new(VICK_LABEL_OVERRIDE_ENV)
            .or(self.label_override)
            .source_value()
            .transpose()?
            .unwrap_or_default();

        Ok(ControllerConfig { label_override })
    }
}

/// Resolved controller configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControllerConfig {
    pub label_override: LabelOverridePolicy,
}

impl ControllerConfig {
    /// Loads the config file at `path`, or the one named by [`VICK_CONFIG_FILE_ENV`], then
    /// applies env overrides and defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let file_config = match path {
            Some(path) => Some(ControllerFileConfig::from_path(path)?),
            None => match std::env::var_os(VICK_CONFIG_FILE_ENV) {
                Some(path) => Some(ControllerFileConfig::from_path(path)?),
                None => None,
            },
        };

        let config = file_config.generate_config()?;
        tracing::debug!(?config, "resolved controller config");

        Ok(config)
    }
}
