use crate::input::InputEvent;

use super::ctx::{EventCtx, FrameCtx};
use super::size::SurfaceSize;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for translated input events.
    fn on_input(&mut self, ctx: &mut EventCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called once the drawable size is known and has stopped changing.
    ///
    /// Fires immediately after the window is created, then once per burst of
    /// resize notifications after the runtime's debounce window has elapsed.
    /// Never called with a zero-sized surface. A redraw is requested
    /// afterwards.
    fn on_size_settled(&mut self, ctx: &mut EventCtx<'_>, size: SurfaceSize) -> AppControl;

    /// Called for every redraw of the window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
