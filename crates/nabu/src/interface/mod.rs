//! Capability contracts consumed by the UI toolkit.
//!
//! The toolkit never sees the host directly; at startup it is handed one
//! implementation of each of these traits and calls through them for the
//! lifetime of its context. The traits deliberately mirror the toolkit's own
//! interface surface: plain synchronous calls, result values instead of
//! panics, no downcasting.

mod file;
mod render;
mod system;
mod types;

pub use file::{FileId, FileInterface};
pub use render::RenderInterface;
pub use system::SystemInterface;
pub use types::{ColorU8, LogLevel, Matrix4, TextureHandle, Vertex};
