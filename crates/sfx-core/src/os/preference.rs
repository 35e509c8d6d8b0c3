use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Which native path convention drag export should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsPreference {
    Windows,
    Mac,
    Linux,
}

/// The stored path field a preference selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathConvention {
    /// `native_path_alternate`, UNC style.
    Unc,
    /// `native_path_primary`, Unix style.
    Unix,
}

impl OsPreference {
    pub const ALL: [OsPreference; 3] = [OsPreference::Windows, OsPreference::Mac, OsPreference::Linux];

    /// `mac` and `linux` share the Unix-style field.
    pub fn path_convention(self) -> PathConvention {
        match self {
            OsPreference::Windows => PathConvention::Unc,
            OsPreference::Mac | OsPreference::Linux => PathConvention::Unix,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OsPreference::Windows => "Windows (UNC Path)",
            OsPreference::Mac => "macOS (Unix Path)",
            OsPreference::Linux => "Linux (Unix Path)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown OS preference: {0:?} (expected windows, mac or linux)")]
pub struct ParseOsPreferenceError(pub String);

impl FromStr for OsPreference {
    type Err = ParseOsPreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(OsPreference::Windows),
            "mac" | "macos" => Ok(OsPreference::Mac),
            "linux" => Ok(OsPreference::Linux),
            _ => Err(ParseOsPreferenceError(s.to_string())),
        }
    }
}

impl Display for OsPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsPreference::Windows => write!(f, "windows"),
            OsPreference::Mac => write!(f, "mac"),
            OsPreference::Linux => write!(f, "linux"),
        }
    }
}
