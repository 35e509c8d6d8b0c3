//! Native path resolution.
//!
//! Turns a catalog record plus an [`OsPreference`](crate::OsPreference) into a
//! URI a receiving desktop application can open, degrading to the catalog's
//! HTTP audio endpoint when no native path is usable.

mod endpoint;
mod native;
mod resolver;

pub use endpoint::CatalogEndpoint;
pub use native::NativePath;
pub use resolver::{PathResolver, TransferUri, UriKind};
