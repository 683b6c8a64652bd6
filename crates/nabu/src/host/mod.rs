//! Contracts the host engine supplies to the bridge.
//!
//! The bridge never talks to a concrete graphics or windowing API;
//! it drives these traits. The host implements [`Pipeline`] over its
//! immediate-mode renderer and [`SystemHost`] over its windowing layer.
//! [`DesktopHost`] is the stock desktop implementation (winit cursor +
//! arboard clipboard).

mod pipeline;
mod services;

pub use pipeline::{Pipeline, RawTextureId};
pub use services::{DesktopHost, SystemHost};
