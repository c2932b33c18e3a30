use wgpu::{CompositeAlphaMode, PresentMode, TextureFormat};
use winit::dpi::PhysicalSize;

/// What the caller should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can proceed.
    Reconfigured,
    /// Transient error or zero-sized surface; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); the runtime exits.
    Fatal,
}

impl SurfaceErrorAction {
    /// Whether the skipped frame should be drawn again.
    #[inline]
    pub fn retries_frame(self) -> bool {
        matches!(self, Self::Reconfigured | Self::SkipFrame)
    }
}

/// First sRGB format if preferred and available, else the platform's first.
pub(crate) fn choose_surface_format(
    formats: &[TextureFormat],
    prefer_srgb: bool,
) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or_else(|| formats.first().copied())
}

/// The plasma is fully opaque; ask the compositor not to blend it.
pub(crate) fn choose_alpha_mode(modes: &[CompositeAlphaMode]) -> CompositeAlphaMode {
    if modes.contains(&CompositeAlphaMode::Opaque) {
        return CompositeAlphaMode::Opaque;
    }
    modes.first().copied().unwrap_or(CompositeAlphaMode::Auto)
}

pub(crate) fn choose_present_mode(modes: &[PresentMode], requested: PresentMode) -> PresentMode {
    if modes.contains(&requested) {
        requested
    } else {
        log::warn!("present mode {requested:?} unsupported; using Fifo");
        PresentMode::Fifo
    }
}

/// Applies `new_size` to `config`.
///
/// wgpu rejects 0x0 surfaces (minimized windows), so those are recorded in
/// `size` but leave `config` alone. Returns whether the surface needs
/// reconfiguring.
pub(crate) fn resize_config(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;

    if new_size.width == 0 || new_size.height == 0 {
        log::debug!("surface resize to zero size deferred");
        return false;
    }
    if config.width == new_size.width && config.height == new_size.height {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

/// Classifies `err`. `Reconfigured` means the caller must configure the
/// surface again before the next frame.
pub(crate) fn classify_surface_error(
    size: PhysicalSize<u32>,
    err: &wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width == 0 || size.height == 0 {
                SurfaceErrorAction::SkipFrame
            } else {
                SurfaceErrorAction::Reconfigured
            }
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
