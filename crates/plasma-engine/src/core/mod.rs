//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the application. It avoids leaking runtime internals into user code and
//! provides consistent per-event and per-frame contexts.

mod app;
mod ctx;
mod size;

pub use app::{App, AppControl};
pub use ctx::{EventCtx, FrameCtx, WindowCtx};
pub use size::SurfaceSize;
