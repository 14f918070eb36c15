//! File-based tracing setup.
//!
//! Log lines go to `$XDG_STATE_HOME/vivace/vivace.log` (or
//! `~/.local/state/vivace/vivace.log`) so they never corrupt the alternate
//! screen. The filter is read from `VIVACE_LOG` and defaults to `info`.

use std::{env, fs, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn state_dir() -> Option<PathBuf> {
    let base = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("state")
    } else {
        return None;
    };
    Some(base.join("vivace"))
}

/// Initialize the global subscriber. The returned guard must stay alive for
/// the duration of the program; dropping it flushes pending log lines.
/// Returns `None` (and logs nowhere) when no writable state dir exists.
pub fn init() -> Option<WorkerGuard> {
    let dir = state_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, "vivace.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("VIVACE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
