//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s via `platform`.

pub(crate) mod platform;
mod types;

pub use types::{InputEvent, Key, KeyState};
