/// What a renderer needs from the device for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Format of the surface being drawn into; pipelines are built for it.
    pub surface_format: wgpu::TextureFormat,
    /// Largest texture edge the device accepts.
    pub max_texture_dimension: u32,
}

/// Where to record draw commands this frame.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
