use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing::Level;

/// Initialize the global tracing subscriber. With a log file the output
/// goes there without ANSI escapes (stderr is unusable while the
/// alternate screen is active); without one, logs go to stderr. Safe to
/// call more than once; later calls are no-ops.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_writer(file)
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::WARN)
                .with_writer(io::stderr)
                .with_target(false)
                .try_init();
        }
    }
    Ok(())
}
