use anyhow::{Context as _, Result};
use winit::window::{CursorIcon, Window};

/// Windowing-layer services supplied by the host.
///
/// The system shim maps toolkit vocabulary (cursor names, UTF-8 clipboard
/// text) onto these calls. Implementations must not panic; clipboard
/// failures degrade to `None`/no-op.
pub trait SystemHost {
    /// Sets the mouse cursor shape for the toolkit's window.
    fn set_cursor(&mut self, cursor: CursorIcon);

    /// Reads the clipboard as UTF-8 text, `None` when unavailable.
    fn clipboard_get(&mut self) -> Option<String>;

    /// Replaces the clipboard contents with UTF-8 text.
    fn clipboard_set(&mut self, text: &str);
}

/// Stock desktop host: winit window cursor plus arboard clipboard.
///
/// Borrows the window for its own lifetime; the window must outlive the
/// bridge objects built on top of this host.
pub struct DesktopHost<'w> {
    window: &'w Window,
    clipboard: Option<arboard::Clipboard>,
}

impl<'w> DesktopHost<'w> {
    /// Creates a desktop host with a live clipboard connection.
    pub fn new(window: &'w Window) -> Result<Self> {
        let clipboard = arboard::Clipboard::new().context("failed to open system clipboard")?;
        Ok(Self { window, clipboard: Some(clipboard) })
    }

    /// Creates a desktop host without clipboard support.
    ///
    /// Useful on platforms where no clipboard is reachable (e.g. headless
    /// sessions); get/set become no-ops.
    pub fn without_clipboard(window: &'w Window) -> Self {
        Self { window, clipboard: None }
    }
}

impl SystemHost for DesktopHost<'_> {
    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.window.set_cursor(cursor);
    }

    fn clipboard_get(&mut self) -> Option<String> {
        let clipboard = self.clipboard.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("clipboard read failed: {err}");
                None
            }
        }
    }

    fn clipboard_set(&mut self, text: &str) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        if let Err(err) = clipboard.set_text(text) {
            log::warn!("clipboard write failed: {err}");
        }
    }
}
