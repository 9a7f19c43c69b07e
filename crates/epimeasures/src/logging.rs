//! Tracing setup for both front ends.
//!
//! The terminal owns stdout, so native builds log to `epimeasures.log` in the
//! data directory. Web builds log to the browser console.

#[cfg(feature = "native")]
use std::fs::{self, File, OpenOptions};
#[cfg(feature = "native")]
use std::io::{Read, Seek, SeekFrom, Write};
#[cfg(feature = "native")]
use std::path::Path;
#[cfg(feature = "native")]
use std::sync::{Arc, Mutex, PoisonError};
#[cfg(feature = "native")]
use tracing_subscriber::fmt::MakeWriter;
#[cfg(feature = "native")]
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "epimeasures.log";

/// Maximum log file size before rotation (5 MB)
#[cfg(feature = "native")]
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
#[cfg(feature = "native")]
const KEEP_SIZE: u64 = 1024 * 1024;

#[cfg(feature = "native")]
const ROTATED_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Rotate the log file once it grows past `max_size`, keeping roughly the
/// last `keep` bytes starting at a line boundary.
#[cfg(feature = "native")]
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep: u64) -> std::io::Result<bool> {
    if !log_path.exists() {
        return Ok(false);
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(false);
    }

    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep);
    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid partial lines
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATED_MARKER)?;
    file.write_all(&buffer[skip..])?;

    Ok(true)
}

/// A writer factory that produces writers for the shared log file
#[cfg(feature = "native")]
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

#[cfg(feature = "native")]
struct LogWriter {
    file: Arc<Mutex<File>>,
}

#[cfg(feature = "native")]
impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()
    }
}

#[cfg(feature = "native")]
impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: Arc::clone(&self.file),
        }
    }
}

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> String {
    format!("epimeasures={level},epimeasures_core=warn")
}

/// Initialize logging to `{data_dir}/epimeasures.log`.
///
/// When the log exceeds 5MB, older entries are removed keeping only the last 1MB.
/// `RUST_LOG` overrides `level`.
#[cfg(feature = "native")]
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer_factory = LogWriterFactory {
        file: Arc::new(Mutex::new(file)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(())
}

/// Send tracing output to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn default_filter_quiets_core() {
        assert_eq!(
            default_filter("debug"),
            "epimeasures=debug,epimeasures_core=warn"
        );
    }

    #[test]
    fn small_log_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert!(!rotate_log_if_needed(&path, 100, 10).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn missing_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        assert!(!rotate_log_if_needed(&path, 100, 10).unwrap());
    }

    #[test]
    fn oversized_log_keeps_whole_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let content: String = (0..50).map(|i| format!("line {i:02}\n")).collect();
        fs::write(&path, &content).unwrap();

        // Each line is 8 bytes; keeping 20 lands mid-line
        assert!(rotate_log_if_needed(&path, 100, 20).unwrap());
        let rotated = fs::read_to_string(&path).unwrap();
        assert_eq!(
            rotated,
            "--- Log rotated (older entries removed) ---\nline 48\nline 49\n"
        );
    }
}
