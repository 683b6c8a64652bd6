//! Render side of the bridge.
//!
//! [`RenderBridge`] implements the toolkit's render capability over a host
//! [`Pipeline`](crate::host::Pipeline): per-frame batching, geometry
//! emission, scissor state, transform stack discipline, and texture
//! lifecycle via [`TextureRegistry`].

mod bridge;
mod texture;

pub use bridge::RenderBridge;
pub use texture::{TextureError, TextureRegistry};
