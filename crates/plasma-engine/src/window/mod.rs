//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer and
//! debounces resize notifications before the app re-renders.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
