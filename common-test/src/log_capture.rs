use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record};

/// Global logger keeping every `info` (and above) line in memory.
pub struct LogCapture {
    lines: Mutex<Vec<String>>,
}

static CAPTURE: OnceLock<LogCapture> = OnceLock::new();

/// Installs the capture as the global logger on first use.
pub fn capture_logs() -> &'static LogCapture {
    let capture = CAPTURE.get_or_init(|| LogCapture {
        lines: Mutex::new(vec![]),
    });
    if log::set_logger(capture).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
    capture
}

impl LogCapture {
    /// Captured lines containing `needle`, oldest first. Tests running in
    /// parallel share the capture, so they filter on names of their own.
    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| {
                lines
                    .iter()
                    .filter(|line| line.contains(needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Log for LogCapture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LevelFilter::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}
