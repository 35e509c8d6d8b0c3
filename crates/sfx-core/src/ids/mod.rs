//! ID type wrappers for type safety.

mod file_id;
mod session_id;

pub use file_id::FileId;
pub use session_id::SessionId;
