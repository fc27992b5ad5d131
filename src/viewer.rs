//! Standalone camera-driven window backed by winit.
//!
//! The viewer owns the event loop, the input processor, and the
//! camera controller; the embedding application supplies a render
//! hook that receives the frame's matrices. Drawing stays on the
//! host's side of the seam.
//!
//! ```no_run
//! # use flycam::Viewer;
//! Viewer::builder()
//!     .with_title("space walk")
//!     .build()
//!     .run(|frame| {
//!         // upload frame.uniform, issue draw calls...
//!         let _ = frame.view_projection;
//!     })
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::Mat4;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{CameraController, CameraUniform},
    error::FlycamError,
    input::{InputEvent, InputProcessor},
    options::Options,
    util::FrameTiming,
    FlycamCommand,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    const fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title (overrides the options' display title).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.display.title = title;
        }
        Viewer { options }
    }
}

// ── Render hook payload ──────────────────────────────────────────────────

/// Everything the host needs to draw one frame.
///
/// Produced after all of the frame's input has been applied, so the
/// matrices are consistent with each other and with the uniform block.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame {
    /// World-to-eye view matrix.
    pub view: Mat4,
    /// Perspective projection matrix.
    pub projection: Mat4,
    /// Combined view-projection matrix.
    pub view_projection: Mat4,
    /// View matrix with translation stripped, for skybox-style
    /// backdrops.
    pub backdrop_view: Mat4,
    /// GPU-ready camera uniform block.
    pub uniform: CameraUniform,
    /// Seconds elapsed since the previous frame.
    pub dt: f32,
    /// Smoothed frames per second.
    pub fps: f32,
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that flies a camera over the host's scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run)
/// with a render hook to enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub const fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop, invoking `on_frame`
    /// once per rendered frame. Blocks until the window is closed.
    pub fn run<F>(self, on_frame: F) -> Result<(), FlycamError>
    where
        F: FnMut(&RenderFrame),
    {
        let event_loop =
            EventLoop::new().map_err(|e| FlycamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let timing = FrameTiming::new(self.options.display.target_fps);
        let mut app = ViewerApp {
            window: None,
            controller: None,
            processor: InputProcessor::with_bindings(
                self.options.keybindings.clone(),
            ),
            timing,
            options: self.options,
            on_frame,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FlycamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<F> {
    window: Option<Arc<Window>>,
    controller: Option<CameraController>,
    processor: InputProcessor,
    timing: FrameTiming,
    options: Options,
    on_frame: F,
}

impl<F: FnMut(&RenderFrame)> ViewerApp<F> {
    /// Route a command to the controller, intercepting `Quit`.
    fn dispatch(&mut self, command: FlycamCommand, event_loop: &ActiveEventLoop) {
        if command == FlycamCommand::Quit {
            event_loop.exit();
            return;
        }
        if let Some(controller) = &mut self.controller {
            controller.apply(command);
        }
    }

    /// Advance held movement, refresh matrices, and hand the frame to
    /// the host.
    fn step_frame(&mut self) {
        let Some(controller) = &mut self.controller else {
            return;
        };

        let dt = self.timing.begin_frame();
        for direction in self.processor.held_directions() {
            controller.move_along(direction, dt);
        }
        controller.refresh_uniform();

        let camera = controller.camera();
        let frame = RenderFrame {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            view_projection: camera.view_projection(),
            backdrop_view: camera.backdrop_view_matrix(),
            uniform: *controller.uniform(),
            dt,
            fps: self.timing.fps(),
        };
        (self.on_frame)(&frame);
    }
}

impl<F: FnMut(&RenderFrame)> ApplicationHandler for ViewerApp<F> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let display = &self.options.display;
        let attrs = Window::default_attributes()
            .with_title(&display.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                display.width,
                display.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        // Keep the cursor inside the window so look deltas keep
        // arriving; not every platform supports confinement.
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
            log::warn!("cursor confinement unavailable: {e}");
        }

        let inner = window.inner_size();
        self.controller = Some(CameraController::new(
            &self.options.camera,
            inner.width.max(1),
            inner.height.max(1),
        ));

        log::info!(
            "viewer started: {}x{} \"{}\"",
            inner.width,
            inner.height,
            display.title
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() || self.controller.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(controller) = &mut self.controller {
                    controller.resize(size.width.max(1), size.height.max(1));
                }
            }

            WindowEvent::Focused(false) => {
                // Release events for held keys will never arrive.
                self.processor.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                let command =
                    self.processor.handle_key(&format!("{code:?}"), pressed);
                if let Some(command) = command {
                    self.dispatch(command, event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let command = self.processor.handle_event(
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                );
                if let Some(command) = command {
                    self.dispatch(command, event_loop);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let command =
                    self.processor.handle_event(InputEvent::MouseButton {
                        button: button.into(),
                        pressed: state == ElementState::Pressed,
                    });
                if let Some(command) = command {
                    self.dispatch(command, event_loop);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                let command = self
                    .processor
                    .handle_event(InputEvent::Scroll { delta: scroll });
                if let Some(command) = command {
                    self.dispatch(command, event_loop);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.timing.should_render() {
                    self.step_frame();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
