//! Nabu bridge crate.
//!
//! This crate adapts a retained-mode UI toolkit to a host engine that owns its
//! own window, input polling, and immediate-mode rendering primitives. The
//! toolkit side sees three capability contracts ([`interface`]); the host side
//! supplies primitive emission and desktop services ([`host`]); everything in
//! between — geometry batching, texture lifetimes, scissor state, key-code
//! translation — lives here.

pub mod coords;
pub mod host;
pub mod input;
pub mod interface;
pub mod render;
pub mod system;

pub mod file;
pub mod logging;

mod context;

pub use context::Bridges;
