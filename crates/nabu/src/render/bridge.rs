use crate::coords::{Vec2, Vec2i};
use crate::host::{Pipeline, RawTextureId};
use crate::interface::{Matrix4, RenderInterface, TextureHandle, Vertex};

use super::texture::{TextureError, TextureRegistry};

/// Render capability implementation over a host [`Pipeline`].
///
/// Owns the texture registry and the scissor/transform state the toolkit
/// mutates between draw calls. Geometry flows through a private host batch
/// opened by [`begin_frame`] and closed by [`end_frame`]; the bridge restores
/// matrix stack, texture binding, and scissor test around every call so no
/// state leaks into the host's own rendering.
///
/// [`begin_frame`]: Self::begin_frame
/// [`end_frame`]: Self::end_frame
pub struct RenderBridge<P: Pipeline> {
    pipeline: P,
    textures: TextureRegistry,

    scissor_enabled: bool,
    scissor: (i32, i32, i32, i32),
    transform: Option<Matrix4>,

    /// Default (white) texture of the active batch; `Some` exactly while a
    /// frame bracket is open.
    frame: Option<RawTextureId>,
}

impl<P: Pipeline> RenderBridge<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            textures: TextureRegistry::new(),
            scissor_enabled: false,
            scissor: (0, 0, 0, 0),
            transform: None,
            frame: None,
        }
    }

    /// Opens the per-frame bracket: activates the private batch and records
    /// its default texture for untextured draw calls.
    ///
    /// # Panics
    ///
    /// If a frame bracket is already open. Brackets must pair exactly once
    /// per frame.
    pub fn begin_frame(&mut self) {
        assert!(self.frame.is_none(), "begin_frame while a frame bracket is already open");
        self.frame = Some(self.pipeline.activate_batch());
    }

    /// Closes the per-frame bracket, restoring the host's previous batch.
    ///
    /// # Panics
    ///
    /// If no frame bracket is open.
    pub fn end_frame(&mut self) {
        assert!(self.frame.take().is_some(), "end_frame without a matching begin_frame");
        self.pipeline.deactivate_batch();
    }

    /// Number of live textures held by the registry.
    pub fn live_textures(&self) -> usize {
        self.textures.live()
    }

    /// Host pipeline access, for host-side work between frames.
    pub fn pipeline_mut(&mut self) -> &mut P {
        &mut self.pipeline
    }

    fn upload(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<TextureHandle, TextureError> {
        let raw = self
            .pipeline
            .upload_texture(pixels, width, height)
            .ok_or(TextureError::Allocation { width, height })?;
        Ok(self.textures.insert(raw))
    }
}

impl<P: Pipeline> RenderInterface for RenderBridge<P> {
    fn render_geometry(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<TextureHandle>,
        translation: Vec2,
    ) {
        let Some(default_texture) = self.frame else {
            panic!("render_geometry outside the begin_frame/end_frame bracket");
        };

        let bound = match texture {
            None => default_texture,
            Some(handle) => match self.textures.resolve(handle) {
                Some(raw) => raw,
                None => {
                    debug_assert!(false, "stale texture handle {handle:?}");
                    log::error!("render_geometry: stale texture handle {handle:?}, call skipped");
                    return;
                }
            },
        };

        if self.scissor_enabled {
            let (x, y, w, h) = self.scissor;
            self.pipeline.begin_scissor(x, y, w, h);
        }

        self.pipeline.push_matrix();
        self.pipeline.translate(translation.x, translation.y);
        if let Some(transform) = &self.transform {
            self.pipeline.mult_matrix(transform);
        }

        self.pipeline.begin_quads();
        self.pipeline.set_texture(Some(bound));

        for (position, &index) in indices.iter().enumerate() {
            // Out-of-range indices are skipped, not fatal.
            let Some(vertex) = vertices.get(index as usize) else {
                continue;
            };

            self.pipeline.color(vertex.color);
            self.pipeline.tex_coord(vertex.tex_coord.x, vertex.tex_coord.y);
            self.pipeline.vertex(vertex.position.x, vertex.position.y);

            // The host primitive is quad-only: re-emitting the closing vertex
            // of each triangle degenerates the quad into a triangle pair.
            if position % 3 == 2 {
                self.pipeline.vertex(vertex.position.x, vertex.position.y);
            }
        }

        self.pipeline.end();
        self.pipeline.pop_matrix();

        // Clear the binding so later host rendering in the same frame cannot
        // sample a UI texture.
        self.pipeline.set_texture(None);

        if self.scissor_enabled {
            self.pipeline.end_scissor();
        }
    }

    fn enable_scissor_region(&mut self, enable: bool) {
        self.scissor_enabled = enable;
    }

    fn set_scissor_region(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.scissor = (x, y, width, height);
    }

    fn load_texture(&mut self, source: &str) -> Result<(TextureHandle, Vec2i), TextureError> {
        let bytes = std::fs::read(source)?;
        let decoded = image::load_from_memory(&bytes)?.into_rgba8();
        let (width, height) = decoded.dimensions();

        let handle = self.upload(decoded.as_raw(), width, height)?;
        Ok((handle, Vec2i::new(width as i32, height as i32)))
    }

    fn generate_texture(
        &mut self,
        pixels: &[u8],
        dimensions: Vec2i,
    ) -> Result<TextureHandle, TextureError> {
        if dimensions.x <= 0 || dimensions.y <= 0 {
            return Err(TextureError::InvalidDimensions {
                width: dimensions.x,
                height: dimensions.y,
            });
        }

        let (width, height) = (dimensions.x as u32, dimensions.y as u32);
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(TextureError::PixelSizeMismatch {
                expected,
                actual: pixels.len(),
                width,
                height,
            });
        }

        self.upload(pixels, width, height)
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        match self.textures.remove(handle) {
            Some(raw) => self.pipeline.destroy_texture(raw),
            None => {
                // Policy: releasing a stale/unknown handle is a programming
                // error; assert in debug, ignore in release.
                debug_assert!(false, "release of stale texture handle {handle:?}");
                log::error!("release_texture: stale handle {handle:?} ignored");
            }
        }
    }

    fn set_transform(&mut self, transform: Option<&Matrix4>) {
        self.transform = transform.copied();
    }
}
