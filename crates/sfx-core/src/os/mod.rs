//! Operating-system path convention preference.

mod preference;
mod signature;

pub use preference::{OsPreference, ParseOsPreferenceError, PathConvention};
pub use signature::ClientSignature;
