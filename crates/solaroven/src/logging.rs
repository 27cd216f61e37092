use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file written next to exported results
pub const LOG_FILE_NAME: &str = "solaroven.log";

/// Initialize logging.
///
/// Logs always go to stderr so stdout carries only the report. When an
/// output directory is given, the run is also logged to
/// `{out_dir}/solaroven.log`, replacing any previous log.
/// The level can be controlled via `level` or the `RUST_LOG` environment variable.
pub fn init_logging(out_dir: Option<&Path>, level: &str) -> color_eyre::Result<()> {
    let file_layer = match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file = File::create(dir.join(LOG_FILE_NAME))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false),
            )
        }
        None => None,
    };

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("solaroven={level},solaroven_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .init();

    tracing::debug!(file_logging = out_dir.is_some(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_receives_events() {
        let dir = tempfile::tempdir().unwrap();
        init_logging(Some(dir.path()), "info").unwrap();
        tracing::info!("log file check");

        let contents = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("log file check"));
    }
}
