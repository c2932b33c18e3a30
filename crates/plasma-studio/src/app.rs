use std::path::PathBuf;

use plasma_engine::core::{App, AppControl, EventCtx, FrameCtx, SurfaceSize};
use plasma_engine::input::{InputEvent, Key};
use plasma_engine::render::{BlitRenderer, ClearColor};
use plasma_field::{FieldState, PixelBuffer, PlasmaRenderer};

use crate::export;

/// Viewer state: one field, its last rendered image, and the GPU blit.
pub struct PlasmaApp {
    field: FieldState,
    renderer: PlasmaRenderer,
    buffer: PixelBuffer,
    blit: BlitRenderer,
    /// `buffer` changed since the last upload.
    dirty: bool,
    snapshot_dir: PathBuf,
}

/// What a key press asks the viewer to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Action {
    Reseed,
    Snapshot,
    Quit,
}

fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::R | Key::Space => Some(Action::Reseed),
        Key::S => Some(Action::Snapshot),
        Key::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Hands `buffer` to `upload` if it changed since the last upload.
///
/// `dirty` is cleared only here, once the upload has run.
fn upload_if_dirty(buffer: &PixelBuffer, dirty: &mut bool, upload: impl FnOnce(&PixelBuffer)) {
    if !*dirty {
        return;
    }
    if !buffer.is_empty() {
        upload(buffer);
    }
    *dirty = false;
}

impl PlasmaApp {
    pub fn new(field: FieldState, renderer: PlasmaRenderer, snapshot_dir: PathBuf) -> Self {
        Self {
            field,
            renderer,
            buffer: PixelBuffer::new(0, 0),
            blit: BlitRenderer::new(),
            dirty: false,
            snapshot_dir,
        }
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Renders the current field at `width` x `height` into the CPU buffer.
    pub fn rerender(&mut self, width: u32, height: u32) {
        if let Err(err) = self.buffer.reset(width, height) {
            log::error!("render skipped: {err}");
            return;
        }
        self.renderer.render(width, height, &self.field, &mut self.buffer);
        self.dirty = true;
    }

    /// Draws fresh seeds and re-renders at the current size.
    pub fn reseed(&mut self) {
        self.field.reset();
        let (w, h) = (self.buffer.width(), self.buffer.height());
        self.rerender(w, h);
    }

    fn title(&self) -> String {
        let [c0, c1, c2, c3] = self.field.corners();
        format!(
            "plasma {}x{}  [{c0:.3} {c1:.3} {c2:.3} {c3:.3}]",
            self.buffer.width(),
            self.buffer.height()
        )
    }

    fn snapshot(&self) {
        if self.buffer.is_empty() {
            log::warn!("nothing rendered yet; snapshot skipped");
            return;
        }
        let path = export::snapshot_path(&self.snapshot_dir, &self.buffer, &self.field);
        if let Err(err) = export::save_png(&self.buffer, &path) {
            log::error!("snapshot failed: {err:#}");
        }
    }
}

impl App for PlasmaApp {
    fn on_input(&mut self, ctx: &mut EventCtx<'_>, event: &InputEvent) -> AppControl {
        let Some(action) = event.pressed_key().and_then(action_for) else {
            return AppControl::Continue;
        };

        match action {
            Action::Reseed => {
                self.reseed();
                ctx.window.set_title(&self.title());
                ctx.runtime.request_redraw();
            }
            Action::Snapshot => self.snapshot(),
            Action::Quit => return AppControl::Exit,
        }

        AppControl::Continue
    }

    fn on_size_settled(&mut self, ctx: &mut EventCtx<'_>, size: SurfaceSize) -> AppControl {
        self.rerender(size.width, size.height);
        ctx.window.set_title(&self.title());
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Self { blit, buffer, dirty, .. } = self;

        // `render` may skip the frame without calling us; `dirty` then stays
        // set and the next drawn frame uploads.
        ctx.render(ClearColor::BLACK, |rctx, target| {
            upload_if_dirty(buffer, dirty, |b| {
                blit.upload(rctx, b.width(), b.height(), b.as_bytes());
            });
            blit.render(rctx, target);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PlasmaApp {
        PlasmaApp::new(
            FieldState::new(0.1, 0.2, 0.3, 0.4),
            PlasmaRenderer::new(),
            PathBuf::from("unused"),
        )
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(action_for(Key::R), Some(Action::Reseed));
        assert_eq!(action_for(Key::Space), Some(Action::Reseed));
        assert_eq!(action_for(Key::S), Some(Action::Snapshot));
        assert_eq!(action_for(Key::Escape), Some(Action::Quit));
        assert_eq!(action_for(Key::Unknown(0)), None);
    }

    #[test]
    fn rerender_keeps_seeds_and_matches_fresh_render() {
        let mut app = app();
        app.rerender(40, 30);
        let before = *app.field();

        app.rerender(64, 48);
        assert_eq!(*app.field(), before);

        let expected = PlasmaRenderer::new().render_to_buffer(64, 48, &before);
        assert_eq!(app.buffer(), &expected);
    }

    #[test]
    fn reseed_keeps_size_and_marks_dirty() {
        let mut app = app();
        app.rerender(16, 12);
        app.dirty = false;

        app.reseed();
        assert_eq!((app.buffer().width(), app.buffer().height()), (16, 12));
        assert!(app.dirty);
        assert!(app.field().corners().iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn pending_upload_survives_skipped_frames() {
        let mut app = app();
        app.rerender(8, 6);
        assert!(app.dirty);

        // A skipped frame never reaches the draw closure; nothing changes.
        // The next drawn frame uploads exactly once.
        let mut uploads = Vec::new();
        upload_if_dirty(&app.buffer, &mut app.dirty, |b| uploads.push((b.width(), b.height())));
        assert_eq!(uploads, vec![(8, 6)]);
        assert!(!app.dirty);

        upload_if_dirty(&app.buffer, &mut app.dirty, |b| uploads.push((b.width(), b.height())));
        assert_eq!(uploads.len(), 1);
    }

    #[test]
    fn reseed_while_undrawn_keeps_upload_pending() {
        let mut app = app();
        app.rerender(8, 6);
        app.reseed();
        assert!(app.dirty);

        let mut uploaded = None;
        upload_if_dirty(&app.buffer, &mut app.dirty, |b| uploaded = Some(b.clone()));
        assert_eq!(uploaded.as_ref(), Some(app.buffer()));
    }

    #[test]
    fn empty_buffer_is_never_uploaded() {
        let mut app = app();
        app.dirty = true;

        let mut called = false;
        upload_if_dirty(&app.buffer, &mut app.dirty, |_| called = true);
        assert!(!called);
        assert!(!app.dirty);
    }

    #[test]
    fn oversized_rerender_keeps_previous_image() {
        let mut app = app();
        app.rerender(4, 4);
        let before = app.buffer().clone();
        app.dirty = false;

        app.rerender(u32::MAX, u32::MAX);
        assert_eq!(app.buffer(), &before);
        assert!(!app.dirty);
    }

    #[test]
    fn title_shows_size_and_seeds() {
        let mut app = app();
        app.rerender(8, 6);
        assert_eq!(app.title(), "plasma 8x6  [0.100 0.200 0.300 0.400]");
    }
}
