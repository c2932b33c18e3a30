//! GPU rendering subsystem.
//!
//! Each renderer is responsible for its own GPU resources (pipelines,
//! textures, buffers) and creates them lazily on first use.
//!
//! Convention:
//! - CPU pixel data is RGBA8, sRGB-encoded, row-major, top-left origin.
//! - Quad geometry is in unit space `0..1` (+Y down); the vertex shader maps
//!   it onto the whole surface.

mod blit;
mod ctx;

pub use blit::BlitRenderer;
pub use ctx::{RenderCtx, RenderTarget};

/// Background color for the clear pass.
pub type ClearColor = wgpu::Color;
