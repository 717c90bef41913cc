use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Decides which value a child object gets when one of the Service's own labels uses a reserved
/// label key (service name, cell name or cell service type).
///
/// ```yaml
/// label_override: reserved-wins
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LabelOverridePolicy {
    /// The Service's labels are applied last and replace the reserved values.
    ///
    /// A Service labelled with a reserved key changes what its selector matches on, so use with
    /// care.
    #[default]
    UserWins,

    /// Colliding user labels are dropped, the reserved keys always carry the derived values.
    ReservedWins,
}

impl LabelOverridePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelOverridePolicy::UserWins => "user-wins",
            LabelOverridePolicy::ReservedWins => "reserved-wins",
        }
    }
}

impl fmt::Display for LabelOverridePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelOverridePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "user-wins" | "user" => Ok(LabelOverridePolicy::UserWins),
            "reserved-wins" | "reserved" => Ok(LabelOverridePolicy::ReservedWins),
            _ => Err(ConfigError::InvalidValue(value.to_owned(), "label_override")),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("user-wins", LabelOverridePolicy::UserWins)]
    #[case("USER", LabelOverridePolicy::UserWins)]
    #[case("reserved-wins", LabelOverridePolicy::ReservedWins)]
    #[case("reserved", LabelOverridePolicy::ReservedWins)]
    fn parse(#[case] value: &str, #[case] expected: LabelOverridePolicy) {
        assert_eq!(value.parse::<LabelOverridePolicy>().unwrap(), expected);
    }

    #[rstest]
    fn parse_unknown() {
        assert!(matches!(
            "whoever-wins".parse::<LabelOverridePolicy>(),
            Err(ConfigError::InvalidValue(_, "label_override"))
        ));
    }
}
