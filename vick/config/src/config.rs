pub mod from_env;
pub mod source;

use thiserror::Error;

/// Error that would be returned from [VickConfig::generate_config] or while reading a config
/// file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("value {0:?} for {1:?} is invalid.")]
    InvalidValue(String, &'static str),

    #[error("vick-config: IO operation failed with `{0}`")]
    Io(#[from] std::io::Error),

    #[error("vick-config: `{0}`!")]
    SerdeJson(#[from] serde_json::Error),

    #[error("vick-config: `{0}`!")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("vick-config: unsupported configuration file format {0:?}!")]
    UnsupportedFormat(Option<String>),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Main configuration creation trait of vick-config
pub trait VickConfig {
    /// The resulting struct you plan on using in the rest of your code
    type Generated;

    /// Load configuration from all sources and output as [Self::Generated]
    fn generate_config(self) -> Result<Self::Generated>;
}

impl<T> VickConfig for Option<T>
where
    T: VickConfig + Default,
{
    type Generated = T::Generated;

    fn generate_config(self) -> Result<Self::Generated> {
        self.unwrap_or_default().generate_config()
    }
}
