//! How a plugin answers requests for operational state.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// State-retrieval mode advertised by a model plugin.
///
/// In `metadata.toml` this may be given either as its numeric code or by
/// name, e.g. `get_state_mode = 2` or `get_state_mode = "explicit-ro-paths"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawStateMode")]
pub enum GetStateMode {
    /// Operational state is not served by the plugin
    #[default]
    None,
    /// Operational state is fetched with a single `state` request
    OpState,
    /// Each read-only path is requested explicitly
    ExplicitRoPaths,
    /// Like `ExplicitRoPaths`, with list wildcards expanded first
    ExplicitRoPathsExpandWildcards,
}

impl GetStateMode {
    /// All modes, in code order.
    pub const ALL: [GetStateMode; 4] = [
        GetStateMode::None,
        GetStateMode::OpState,
        GetStateMode::ExplicitRoPaths,
        GetStateMode::ExplicitRoPathsExpandWildcards,
    ];

    /// Numeric code used on the wire and in rendered templates.
    pub fn code(self) -> u32 {
        match self {
            GetStateMode::None => 0,
            GetStateMode::OpState => 1,
            GetStateMode::ExplicitRoPaths => 2,
            GetStateMode::ExplicitRoPathsExpandWildcards => 3,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GetStateMode::None => "none",
            GetStateMode::OpState => "op-state",
            GetStateMode::ExplicitRoPaths => "explicit-ro-paths",
            GetStateMode::ExplicitRoPathsExpandWildcards => "explicit-ro-paths-expand-wildcards",
        }
    }
}

impl Serialize for GetStateMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.code())
    }
}

impl fmt::Display for GetStateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GetStateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown state mode '{}', expected one of: none, op-state, explicit-ro-paths, explicit-ro-paths-expand-wildcards",
                    s
                )
            })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStateMode {
    Code(u32),
    Name(String),
}

impl TryFrom<RawStateMode> for GetStateMode {
    type Error = String;

    fn try_from(raw: RawStateMode) -> Result<Self, Self::Error> {
        match raw {
            RawStateMode::Code(code) => Self::from_code(code)
                .ok_or_else(|| format!("unknown state mode code {}, expected 0 to 3", code)),
            RawStateMode::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(GetStateMode::None.code(), 0);
        assert_eq!(GetStateMode::OpState.code(), 1);
        assert_eq!(GetStateMode::ExplicitRoPaths.code(), 2);
        assert_eq!(GetStateMode::ExplicitRoPathsExpandWildcards.code(), 3);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "op-state".parse::<GetStateMode>().unwrap(),
            GetStateMode::OpState
        );
        assert_eq!(
            "EXPLICIT_RO_PATHS".parse::<GetStateMode>().unwrap(),
            GetStateMode::ExplicitRoPaths
        );
        assert!("sometimes".parse::<GetStateMode>().is_err());
    }

    #[test]
    fn test_deserialize_code_or_name() {
        let by_code: GetStateMode = serde_json::from_str("3").unwrap();
        assert_eq!(by_code, GetStateMode::ExplicitRoPathsExpandWildcards);

        let by_name: GetStateMode = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(by_name, GetStateMode::None);

        assert!(serde_json::from_str::<GetStateMode>("7").is_err());
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&GetStateMode::ExplicitRoPaths).unwrap();
        assert_eq!(json, "2");
    }
}
