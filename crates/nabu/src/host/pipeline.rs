use crate::interface::ColorU8;

/// Host-native texture identifier.
///
/// Opaque to the bridge; only ever obtained from [`Pipeline::upload_texture`]
/// or [`Pipeline::activate_batch`] and handed back unchanged.
pub type RawTextureId = u32;

/// Immediate-mode rendering primitives supplied by the host.
///
/// Models a quad-only immediate pipeline: geometry is emitted vertex by
/// vertex between [`begin_quads`] and [`end`], with color/texcoord state set
/// ahead of each position. The transform stack, texture binding, and scissor
/// test are host-global state; the bridge is responsible for restoring all
/// three around every draw call.
///
/// All methods must be called from the thread that owns the rendering
/// context; the bridge adds no synchronization.
///
/// [`begin_quads`]: Self::begin_quads
/// [`end`]: Self::end
pub trait Pipeline {
    /// Activates the bridge's private render batch, isolating UI emission
    /// from the host's own batch for the current frame.
    ///
    /// Returns the batch's default (1x1 white) texture id, used for
    /// untextured geometry.
    fn activate_batch(&mut self) -> RawTextureId;

    /// Deactivates the private batch, restoring whatever batch the host was
    /// using before [`activate_batch`].
    ///
    /// [`activate_batch`]: Self::activate_batch
    fn deactivate_batch(&mut self);

    /// Pushes the current transform onto the host matrix stack.
    fn push_matrix(&mut self);

    /// Pops the host matrix stack.
    fn pop_matrix(&mut self);

    /// Post-multiplies the current transform by a 2D translation.
    fn translate(&mut self, x: f32, y: f32);

    /// Post-multiplies the current transform by a column-major 4x4 matrix.
    fn mult_matrix(&mut self, matrix: &[f32; 16]);

    /// Opens a quad primitive group.
    fn begin_quads(&mut self);

    /// Closes the current primitive group.
    fn end(&mut self);

    /// Binds `texture` for subsequent vertices; `None` clears the binding.
    fn set_texture(&mut self, texture: Option<RawTextureId>);

    /// Sets the current vertex color.
    fn color(&mut self, color: ColorU8);

    /// Sets the current texture coordinate.
    fn tex_coord(&mut self, u: f32, v: f32);

    /// Emits one vertex at the given position with the current color and
    /// texture coordinate.
    fn vertex(&mut self, x: f32, y: f32);

    /// Enables the scissor test with the given rectangle, in framebuffer
    /// pixels.
    fn begin_scissor(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Disables the scissor test.
    fn end_scissor(&mut self);

    /// Uploads tightly packed RGBA8 pixels as a new host texture.
    ///
    /// `None` when the host cannot allocate the texture.
    fn upload_texture(&mut self, pixels: &[u8], width: u32, height: u32) -> Option<RawTextureId>;

    /// Destroys a host texture previously returned by [`upload_texture`].
    ///
    /// [`upload_texture`]: Self::upload_texture
    fn destroy_texture(&mut self, texture: RawTextureId);
}
