/// 12-hour clock formatting for base hours and converted times
pub mod format;
/// Structured logging helpers with consistent event tags
pub mod logging;
