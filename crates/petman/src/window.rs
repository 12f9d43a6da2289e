use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use banner::{BannerLayout, LayoutResult, RelayoutDebouncer, Viewport};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Icon, Window, WindowBuilder};

use crate::gpu::GpuState;

/// Window parameters resolved from config and CLI overrides.
pub struct WindowSettings {
    pub title: String,
    pub size: (u32, u32),
    pub debounce: Duration,
    pub icon: Option<PathBuf>,
}

/// Aggregates the window, GPU surface, and the most recent layout.
///
/// Holding the `LayoutResult` here ties the lifetime of the rendered rasters
/// to the display surface: they are only released when the next relayout
/// replaces them or the window closes.
struct WindowState {
    window: Arc<Window>,
    gpu: GpuState,
    current: LayoutResult,
}

impl WindowState {
    fn new(window: Arc<Window>, layout: &BannerLayout, viewport: Viewport) -> Result<Self> {
        let current = layout.recompute(viewport);
        let frame = current.compose();
        let gpu = GpuState::new(window.as_ref(), window.inner_size(), &frame)?;

        Ok(Self {
            window,
            gpu,
            current,
        })
    }

    fn window(&self) -> &Window {
        self.window.as_ref()
    }

    fn size(&self) -> PhysicalSize<u32> {
        self.gpu.size()
    }

    fn resize_surface(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Recomputes bands and rasters for the new geometry and re-uploads the
    /// composed frame. Runs only after the debounce window has quieted.
    fn relayout(&mut self, layout: &BannerLayout, viewport: Viewport) {
        let result = layout.recompute(viewport);
        let bands = result.bands();
        tracing::debug!(
            width = viewport.width(),
            height = viewport.height(),
            top = bands.top,
            middle = bands.middle,
            bottom = bands.bottom,
            "applied banner relayout"
        );
        let frame = result.compose();
        self.gpu.upload_frame(&frame);
        self.current = result;
    }

    fn render_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.gpu.render()
    }
}

/// Opens the main window and drives the winit event loop until close.
///
/// Resize notifications feed the debouncer; `AboutToWait` either fires the
/// pending relayout or parks the loop until its deadline with
/// `ControlFlow::WaitUntil`, so a burst of resize events costs one recompute.
pub fn run(settings: WindowSettings, layout: BannerLayout) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize event loop")?;
    let window_size = PhysicalSize::new(settings.size.0.max(1), settings.size.1.max(1));

    let mut builder = WindowBuilder::new()
        .with_title(settings.title.clone())
        .with_inner_size(window_size);
    if let Some(icon) = settings.icon.as_deref().and_then(load_window_icon) {
        builder = builder.with_window_icon(Some(icon));
    }

    let window = builder
        .build(&event_loop)
        .context("failed to create main window")?;
    let window = Arc::new(window);

    let initial = {
        let size = window.inner_size();
        Viewport::new(size.width, size.height)
    };
    let mut state = WindowState::new(window.clone(), &layout, initial)?;
    let mut debouncer = RelayoutDebouncer::new(settings.debounce);
    state.window().request_redraw();

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent { window_id, event } if window_id == state.window().id() => {
                    match event {
                        WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                            elwt.exit();
                        }
                        WindowEvent::Resized(new_size) => {
                            state.resize_surface(new_size);
                            let viewport = Viewport::new(new_size.width, new_size.height);
                            debouncer.notify(viewport, Instant::now());
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            let _ = inner_size_writer.request_inner_size(state.size());
                        }
                        WindowEvent::RedrawRequested => match state.render_frame() {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                state.resize_surface(state.size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                eprintln!("surface out of memory; exiting");
                                elwt.exit();
                            }
                            Err(wgpu::SurfaceError::Timeout) => {
                                eprintln!("surface timeout; retrying next frame");
                            }
                            Err(other) => {
                                eprintln!("surface error: {other:?}; retrying next frame");
                            }
                        },
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    if let Some(viewport) = debouncer.fire(now) {
                        state.relayout(&layout, viewport);
                        state.window().request_redraw();
                        elwt.set_control_flow(ControlFlow::Wait);
                    } else if let Some(deadline) = debouncer.deadline() {
                        elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                    } else {
                        elwt.set_control_flow(ControlFlow::Wait);
                    }
                }
                _ => {}
            }
        })
        .map_err(|err| anyhow!("event loop error: {err}"))
}

/// Loads the window icon, logging and continuing when it cannot be used.
fn load_window_icon(path: &std::path::Path) -> Option<Icon> {
    let rgba = match banner::load_rgba(path) {
        Ok(rgba) => rgba,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "window icon unavailable");
            return None;
        }
    };

    let (width, height) = rgba.dimensions();
    match Icon::from_rgba(rgba.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "window icon rejected");
            None
        }
    }
}
