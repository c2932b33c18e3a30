//! Plasma engine crate.
//!
//! Owns the platform + GPU runtime pieces used to put a CPU-rendered pixel
//! buffer on screen: the winit event loop, the wgpu surface, resize
//! debouncing and a texture blit renderer.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
