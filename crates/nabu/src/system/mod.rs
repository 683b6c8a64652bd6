//! System services shim: clock, log forwarding, cursor shape, clipboard.

use std::time::Instant;

use winit::window::CursorIcon;

use crate::host::SystemHost;
use crate::interface::{LogLevel, SystemInterface};

/// Log target used for forwarded toolkit messages.
const LOG_TARGET: &str = "toolkit";

/// Cursor-name prefix the toolkit uses while dragging scrollable content.
const SCROLL_CURSOR_PREFIX: &str = "rmlui-scroll-";

/// System capability implementation over a host [`SystemHost`].
///
/// The clock baseline is taken at construction; elapsed time is monotonic
/// from that point.
pub struct SystemBridge<H: SystemHost> {
    host: H,
    started: Instant,
}

impl<H: SystemHost> SystemBridge<H> {
    pub fn new(host: H) -> Self {
        Self { host, started: Instant::now() }
    }
}

impl<H: SystemHost> SystemInterface for SystemBridge<H> {
    fn elapsed_time(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn log_message(&mut self, level: LogLevel, message: &str) -> bool {
        log::log!(target: LOG_TARGET, host_level(level), "{message}");
        true
    }

    fn set_mouse_cursor(&mut self, cursor_name: &str) {
        self.host.set_cursor(cursor_for_name(cursor_name));
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.host.clipboard_set(text);
    }

    fn get_clipboard_text(&mut self) -> String {
        self.host.clipboard_get().unwrap_or_default()
    }
}

/// Maps the toolkit's seven log severities onto the host logger's five.
///
/// `Always` has no host counterpart and lands on `Info`; toolkit assertion
/// failures land on `Error`.
fn host_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Always => log::Level::Info,
        LogLevel::Error => log::Level::Error,
        LogLevel::Assert => log::Level::Error,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Trace => log::Level::Trace,
    }
}

/// Maps a toolkit cursor name to a host cursor shape.
///
/// Unrecognized names fall back to the default arrow.
pub fn cursor_for_name(name: &str) -> CursorIcon {
    if name.starts_with(SCROLL_CURSOR_PREFIX) {
        return CursorIcon::AllScroll;
    }

    match name {
        "" => CursorIcon::Default,
        "text" => CursorIcon::Text,
        "crosshair" => CursorIcon::Crosshair,
        "pointer" | "hand" => CursorIcon::Pointer,
        "col-resize" => CursorIcon::ColResize,
        "row-resize" => CursorIcon::RowResize,
        "ew-resize" => CursorIcon::EwResize,
        "ns-resize" => CursorIcon::NsResize,
        "nwse-resize" => CursorIcon::NwseResize,
        "nesw-resize" => CursorIcon::NeswResize,
        "all-scroll" => CursorIcon::AllScroll,
        "move" => CursorIcon::Move,
        "not-allowed" => CursorIcon::NotAllowed,
        _ => CursorIcon::Default,
    }
}
