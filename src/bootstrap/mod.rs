//! Host bootstrap: logging, configuration and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_host_config, resolve_config_path};
pub use wiring::{wire_host, HostContext};
