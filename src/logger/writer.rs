//! Log writer module
//!
//! Thread-safe line writer for the info and error channels. Each channel goes
//! to stdout/stderr unless a file path is configured.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    info: LogTarget,
    error: LogTarget,
}

impl LogWriter {
    fn new(info_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        let info = match info_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };

        Ok(Self { info, error })
    }

    pub fn write_info(&self, message: &str) {
        write_to_target(&self.info, message);
    }

    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Prefix a message with the local wall-clock time
pub fn timestamped(message: &str) -> String {
    format!("{} {message}", Local::now().format("%Y/%m/%d %H:%M:%S%.3f"))
}

fn write_to_target(target: &LogTarget, message: &str) {
    let line = timestamped(message);
    match target {
        LogTarget::Stdout => println!("{line}"),
        LogTarget::Stderr => eprintln!("{line}"),
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(info_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(info_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if `init()` has been called
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamped_keeps_message() {
        let line = timestamped("Send Response: 200");
        assert!(line.ends_with(" Send Response: 200"));
        // "YYYY/MM/DD HH:MM:SS.mmm " prefix
        assert_eq!(line.len(), "Send Response: 200".len() + 24);
    }

    #[test]
    fn test_file_target_appends_lines() {
        let path = std::env::temp_dir().join(format!(
            "mock_endpoint_server_writer_{}.log",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        let writer = LogWriter::new(Some(&path_str), None).unwrap();
        writer.write_info("first");
        writer.write_info("second");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));

        let _ = std::fs::remove_file(&path);
    }
}
