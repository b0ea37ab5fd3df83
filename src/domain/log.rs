//! Learner-facing log entries.
//!
//! The console panel renders these; only `message` matters to the runtime,
//! the remaining fields are the fixed shape the panel expects from a "log" block.

use serde::{Deserialize, Serialize};

use crate::core::clock;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: u64,
    pub block_type: String,
    pub message: String,
    pub selected_id: Option<u64>,
    pub selected_index: u32,
    pub selected_key: Option<String>,
    pub use_index: bool,
    pub use_key: bool,
    pub selected_type: String,
}

impl LogEntry {
    /// An `Error: ...` entry stamped with the current time.
    pub fn error(detail: &str) -> Self {
        Self {
            id: clock::now_ms(),
            block_type: "log".to_string(),
            message: format!("Error: {}", detail),
            selected_id: None,
            selected_index: 0,
            selected_key: None,
            use_index: false,
            use_key: false,
            selected_type: "string".to_string(),
        }
    }
}

/// Append-only destination for [`LogEntry`] values.
pub trait LogSink {
    fn append(&mut self, entry: LogEntry);
}

impl LogSink for Vec<LogEntry> {
    fn append(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}
