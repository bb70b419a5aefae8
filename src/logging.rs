use std::path::Path;
use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_BASENAME: &str = "pin";
const MAX_LOG_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

// Held for the life of the process so buffered log lines get flushed.
static HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

/// Start file logging under `<data_dir>/logs`. Level comes from `RUST_LOG`
/// when set, else "info". A second call is a no-op.
///
/// Failures are returned for the caller to report; nothing here should
/// ever stop the program from doing its job.
pub fn init(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if HANDLE.get().is_some() {
        return Ok(());
    }

    let log_dir = data_dir.join("logs");
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(&log_dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()?;

    let _ = HANDLE.set(handle);
    Ok(())
}
