use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, EventCtx, FrameCtx, SurfaceSize, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::InputEvent;
use crate::time::{Debouncer, DEFAULT_RESIZE_DEBOUNCE};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Quiet period after the last resize notification before
    /// `App::on_size_settled` fires.
    pub resize_debounce: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "plasma".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are buffered and applied after the current callback returns.
/// Exiting is signalled through [`AppControl::Exit`].
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    redraw: bool,
}

impl RuntimeCtx {
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[inline]
    pub fn redraw_requested(&self) -> bool {
        self.redraw
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    resize: Debouncer,

    exit_requested: bool,
    /// First unrecoverable error; reported by `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let resize = Debouncer::new(config.resize_debounce);
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            resize,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.request_exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        self.entry = Some(entry);
        Ok(())
    }

    fn apply_runtime(&mut self, ctx: RuntimeCtx) {
        if !ctx.redraw_requested() {
            return;
        }
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn apply_control(&mut self, control: AppControl) {
        if control == AppControl::Exit {
            self.request_exit();
        }
    }

    /// Delivers a translated input event to the app.
    fn dispatch_input(&mut self, event: InputEvent) {
        let Some(entry) = self.entry.as_ref() else { return };

        let mut runtime = RuntimeCtx::default();
        let control = entry.with(|fields| {
            let mut ctx = EventCtx {
                window: WindowCtx { id: fields.window.id(), window: fields.window },
                runtime: &mut runtime,
            };
            self.app.on_input(&mut ctx, &event)
        });

        self.apply_control(control);
        self.apply_runtime(runtime);
    }

    /// Tells the app the surface size is stable and asks for a redraw.
    fn settle_size(&mut self) {
        let Some(entry) = self.entry.as_ref() else { return };

        let size: SurfaceSize = entry.with_gpu(|gpu| gpu.size()).into();
        if size.is_empty() {
            log::debug!("size settled on an empty surface; waiting for a real size");
            return;
        }

        log::debug!("size settled at {}x{}", size.width, size.height);

        let mut runtime = RuntimeCtx::default();
        let control = entry.with(|fields| {
            let mut ctx = EventCtx {
                window: WindowCtx { id: fields.window.id(), window: fields.window },
                runtime: &mut runtime,
            };
            self.app.on_size_settled(&mut ctx, size)
        });
        runtime.request_redraw();

        self.apply_control(control);
        self.apply_runtime(runtime);
    }

    /// Reconfigures the surface and (re)starts the debounce window.
    fn surface_resized(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else { return };

        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        let task = self.resize.schedule(Instant::now());
        log::trace!(
            "resize to {}x{}; redraw task {} scheduled",
            new_size.width,
            new_size.height,
            task.id()
        );

        // Present the previous image stretched until the settled redraw.
        entry.with_window(|w| w.request_redraw());
    }

    fn redraw(&mut self) {
        let Some(entry) = self.entry.as_mut() else { return };

        let mut runtime = RuntimeCtx::default();
        let app = &mut self.app;
        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { id: fields.window.id(), window: fields.window },
                gpu: fields.gpu,
                runtime: &mut runtime,
            };
            app.on_frame(&mut ctx)
        });

        self.apply_control(control);
        self.apply_runtime(runtime);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(e.context("failed to create initial window"));
            event_loop.exit();
            return;
        }

        // First draw is not debounced.
        self.settle_size();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.resize.poll(Instant::now()).is_some() {
            self.settle_size();
        }

        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Redraws are on demand; only a pending resize needs a timed wake-up.
        match self.resize.deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            self.dispatch_input(ev);
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.resize.cancel();
                self.entry = None;
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => self.surface_resized(*new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.entry.as_ref().map(|e| e.with_window(|w| w.inner_size())) {
                    self.surface_resized(size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
