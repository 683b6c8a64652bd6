use crate::coords::Vec2;

/// Straight-alpha RGBA color, one byte per channel.
///
/// This is the toolkit's wire format for per-vertex color; the bridge forwards
/// it untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorU8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

/// One toolkit vertex: position, texture coordinate, color.
///
/// Vertices are owned by the toolkit and borrowed by the bridge for the
/// duration of a single [`RenderInterface::render_geometry`] call.
///
/// [`RenderInterface::render_geometry`]: super::RenderInterface::render_geometry
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub tex_coord: Vec2,
    pub color: ColorU8,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, tex_coord: Vec2, color: ColorU8) -> Self {
        Self { position, tex_coord, color }
    }
}

/// Column-major 4x4 transform matrix.
///
/// Copied (not borrowed) when the toolkit sets it, so the bridge never holds a
/// reference into toolkit memory across calls.
pub type Matrix4 = [f32; 16];

/// Opaque, generation-checked texture handle.
///
/// Minted by the texture registry; meaningless to the toolkit beyond
/// equality/identity. A handle stays valid from creation until release. After
/// release the generation check catches reuse: a stale handle resolves to
/// nothing even if its slot has since been recycled for a new texture.
///
/// "Untextured" is expressed as `Option::<TextureHandle>::None`, not a zero
/// sentinel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// Toolkit log severity.
///
/// Forwarded one-to-one onto the host logger by the system shim.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LogLevel {
    /// Unconditional message.
    Always,
    Error,
    /// Failed toolkit-internal assertion.
    Assert,
    Warning,
    Info,
    Debug,
    /// Maximum verbosity.
    Trace,
}
