//! Tracing configuration for sfxdrag.
//!
//! - Env filter from `RUST_LOG`, falling back to per-crate defaults
//! - fmt layer on stderr so command output on stdout stays clean
//! - Daily rolling file under the app log directory, when it can be created

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const WORKSPACE_CRATES: &[&str] = &["sfxdrag", "sfx_core", "sfx_app", "sfx_infra", "sfx_platform"];

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };

    let mut directives = vec![
        "warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
    ];
    directives.extend(WORKSPACE_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives
}

/// Register the global subscriber. Call once, before any command runs.
///
/// `log_dir` is where the rolling file goes; `None` (or a directory that
/// cannot be created) leaves stderr as the only sink.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    let file_layer = match log_dir.map(build_file_writer) {
        Some(Ok(writer)) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, using stderr only: {err}");
            None
        }
        None => None,
    };

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "sfxdrag.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
