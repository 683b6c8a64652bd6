//! Coordinate types shared across the bridge.
//!
//! Canonical space follows the toolkit:
//! - framebuffer pixels
//! - origin top-left
//! - +X right, +Y down

mod vec2;

pub use vec2::{Vec2, Vec2i};
