//! Catalog domain models.
//!
//! Records are owned by the external catalog service and read-only here.

mod record;
mod query;

pub use query::FileQuery;
pub use record::FileRecord;
