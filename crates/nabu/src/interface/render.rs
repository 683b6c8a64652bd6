use crate::coords::{Vec2, Vec2i};
use crate::render::TextureError;

use super::types::{Matrix4, TextureHandle, Vertex};

/// Render capability handed to the toolkit.
///
/// All calls happen on the thread driving the render loop. Geometry calls are
/// only valid between `begin_frame` and `end_frame` on the implementing
/// bridge; issuing one outside that bracket is a programming error, not a
/// recoverable condition.
pub trait RenderInterface {
    /// Submits one draw call: indexed, textured, colored triangles.
    ///
    /// Indices are consumed in consecutive triples, one triangle each.
    /// `texture` of `None` draws with the default white texture so untextured
    /// geometry takes the same path as textured geometry. `translation` is
    /// applied on top of any transform set via [`set_transform`].
    ///
    /// [`set_transform`]: Self::set_transform
    fn render_geometry(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<TextureHandle>,
        translation: Vec2,
    );

    /// Toggles scissor clipping for subsequent draw calls.
    ///
    /// Takes effect at the next `render_geometry` call; no immediate GPU
    /// effect.
    fn enable_scissor_region(&mut self, enable: bool);

    /// Sets the scissor rectangle in framebuffer pixels.
    ///
    /// May be called before or after [`enable_scissor_region`]; latest write
    /// wins at draw time.
    ///
    /// [`enable_scissor_region`]: Self::enable_scissor_region
    fn set_scissor_region(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Decodes the image resource at `source` and uploads it as a texture.
    ///
    /// Returns the new handle and the decoded pixel dimensions.
    fn load_texture(&mut self, source: &str) -> Result<(TextureHandle, Vec2i), TextureError>;

    /// Uploads caller-supplied RGBA8 pixel data as a texture.
    fn generate_texture(
        &mut self,
        pixels: &[u8],
        dimensions: Vec2i,
    ) -> Result<TextureHandle, TextureError>;

    /// Frees the texture behind `handle` and invalidates the handle.
    fn release_texture(&mut self, handle: TextureHandle);

    /// Sets (or clears) the transform applied to subsequent draw calls.
    ///
    /// The matrix is copied; the caller's storage is not borrowed past this
    /// call.
    fn set_transform(&mut self, transform: Option<&Matrix4>);
}
