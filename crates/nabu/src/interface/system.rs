use super::types::LogLevel;

/// System services capability handed to the toolkit.
///
/// Clock, log forwarding, cursor shape, and clipboard. Every operation
/// delegates to host facilities and none of them can fail across the
/// boundary.
pub trait SystemInterface {
    /// Monotonic seconds since the bridge was constructed.
    fn elapsed_time(&self) -> f64;

    /// Forwards a toolkit log message to the host logger.
    ///
    /// Always returns `true` ("continue"); the bridge never turns a log call
    /// into a failure.
    fn log_message(&mut self, level: LogLevel, message: &str) -> bool;

    /// Selects the mouse cursor shape by toolkit cursor name.
    ///
    /// Unrecognized names fall back to the default arrow.
    fn set_mouse_cursor(&mut self, cursor_name: &str);

    /// Replaces the host clipboard contents with UTF-8 text.
    fn set_clipboard_text(&mut self, text: &str);

    /// Reads the host clipboard; empty string when unavailable.
    fn get_clipboard_text(&mut self) -> String;
}
