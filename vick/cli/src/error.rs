use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use vick_config::config::ConfigError;
use vick_controller::manifest::ManifestError;

pub(crate) type CliResult<T, E = CliError> = core::result::Result<T, E>;

const MANIFEST_HELP: &str = "The file should hold a single `vick.wso2.com/v1alpha1` Service, \
                             as json (`.json`) or yaml (`.yaml`, `.yml`).";

#[derive(Debug, Error, Diagnostic)]
pub(crate) enum CliError {
    #[error("Failed to resolve the controller config: {0}")]
    #[diagnostic(help(
        "Check the config file and the `VICK_CONFIG_FILE` and `VICK_LABEL_OVERRIDE` \
         environment variables."
    ))]
    Config(#[from] ConfigError),

    #[error("Failed to read Service manifest `{0}`: {1}")]
    ServiceManifestRead(PathBuf, std::io::Error),

    #[error("Failed to parse Service manifest `{0}`: {1}")]
    #[diagnostic(help("{MANIFEST_HELP}"))]
    ServiceManifestYaml(PathBuf, serde_yaml::Error),

    #[error("Failed to parse Service manifest `{0}`: {1}")]
    #[diagnostic(help("{MANIFEST_HELP}"))]
    ServiceManifestJson(PathBuf, serde_json::Error),

    #[error("Unsupported Service manifest format `{0}`")]
    #[diagnostic(help("{MANIFEST_HELP}"))]
    UnsupportedManifestFormat(PathBuf),

    #[error("Failed to write manifests: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Failed to create output file `{0}`: {1}")]
    OutputFile(PathBuf, std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_yaml::Error),
}
