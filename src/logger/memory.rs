//! In-memory `Log` used by unit tests to assert on emitted lines

use super::Log;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl Log for MemoryLog {
    fn print(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn error(&self, err: &dyn std::error::Error, context: &str) {
        self.errors.lock().unwrap().push(format!("{context}: {err}"));
    }
}
