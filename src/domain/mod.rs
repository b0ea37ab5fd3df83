//! Domain data: colors, editor records and log entries

pub mod colors;
pub mod log;
pub mod variables;
