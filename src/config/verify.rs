//! Server certificate verification policy.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the gateway's server certificate is checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyMode {
    /// Verify against the built-in trust roots
    #[default]
    Enabled,
    /// Accept any server certificate
    Disabled,
    /// Verify against the CA certificates in this PEM bundle only
    CustomBundle(PathBuf),
}

impl VerifyMode {
    /// Interpret a `GATEWAY_VERIFY`-style value.
    ///
    /// Empty means enabled; `false`/`0`/`off`/`no` disable and
    /// `true`/`1`/`on`/`yes` enable (case-insensitive). Anything else is a
    /// CA bundle path.
    pub fn parse_env(value: &str) -> Self {
        if value.is_empty() {
            return VerifyMode::Enabled;
        }
        match value.to_ascii_lowercase().as_str() {
            "false" | "0" | "off" | "no" => VerifyMode::Disabled,
            "true" | "1" | "on" | "yes" => VerifyMode::Enabled,
            _ => VerifyMode::CustomBundle(PathBuf::from(value)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, VerifyMode::Disabled)
    }
}

impl From<bool> for VerifyMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            VerifyMode::Enabled
        } else {
            VerifyMode::Disabled
        }
    }
}

impl From<PathBuf> for VerifyMode {
    fn from(bundle: PathBuf) -> Self {
        VerifyMode::CustomBundle(bundle)
    }
}

impl fmt::Display for VerifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyMode::Enabled => f.write_str("enabled"),
            VerifyMode::Disabled => f.write_str("disabled"),
            VerifyMode::CustomBundle(path) => write!(f, "bundle:{}", path.display()),
        }
    }
}
