//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - picking a surface format, alpha and present mode for an opaque image
//! - reconfiguring the surface on resize, deferring zero sizes
//! - acquiring and presenting frames

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
