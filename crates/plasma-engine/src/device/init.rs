/// GPU setup options for the viewer surface.
///
/// Device limits are not configurable: they are taken from the adapter so
/// that the largest window the platform allows can still be blitted.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when the platform offers one.
    ///
    /// Pixel buffers hold sRGB-encoded bytes; an sRGB surface paired with an
    /// sRGB texture displays them unchanged.
    pub prefer_srgb: bool,

    /// Requested present mode. Falls back to FIFO when unsupported.
    pub present_mode: wgpu::PresentMode,

    pub power_preference: wgpu::PowerPreference,

    /// Maximum queued frames. A hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}
