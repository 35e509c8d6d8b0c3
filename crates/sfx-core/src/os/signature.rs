use super::OsPreference;

const WINDOWS_MARKERS: &[&str] = &["windows", "win32", "win64"];
const MAC_MARKERS: &[&str] = &["mac", "darwin"];

/// Free-form platform signature of the requesting client, e.g. a user agent
/// string or `std::env::consts::OS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSignature(String);

impl ClientSignature {
    pub fn new(signature: impl Into<String>) -> Self {
        Self(signature.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Infer a preference by substring match. Windows markers win over macOS
    /// markers; anything else is Linux.
    pub fn detect(&self) -> OsPreference {
        let lowered = self.0.to_ascii_lowercase();
        if WINDOWS_MARKERS.iter().any(|m| lowered.contains(m)) {
            OsPreference::Windows
        } else if MAC_MARKERS.iter().any(|m| lowered.contains(m)) {
            OsPreference::Mac
        } else {
            OsPreference::Linux
        }
    }
}
