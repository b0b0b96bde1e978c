mod lifecycle;
mod paint;
mod state;

use std::sync::Arc;

use anyhow::Context as _;
use softbuffer::{Context, Surface};
use winit::dpi::LogicalSize;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowButtons};

use crate::config::WindowConfig;

use self::state::{App, ShellState, ShellWindow};

/// Translates the fixed configuration into winit window attributes.
pub(crate) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let size = LogicalSize::new(config.size.width as f64, config.size.height as f64);
    let mut buttons = WindowButtons::CLOSE | WindowButtons::MINIMIZE;
    if config.resizable {
        buttons |= WindowButtons::MAXIMIZE;
    }
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(size)
        .with_resizable(config.resizable)
        .with_enabled_buttons(buttons)
        .with_visible(true)
}

impl App {
    fn new(config: WindowConfig) -> Self {
        App {
            config,
            state: ShellState::Open,
            shell: None,
            error: None,
        }
    }

    /// Creates the window and attaches a softbuffer surface to it.
    ///
    /// Surface failures are logged and leave painting to the platform.
    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ShellWindow> {
        let window = event_loop
            .create_window(window_attributes(&self.config))
            .context("failed to create window")?;
        let window = Arc::new(window);

        let context = Context::new(event_loop.owned_display_handle())
            .map_err(|err| eprintln!("[twilight] Failed to create rendering context: {err}"))
            .ok();
        let surface = context.as_ref().and_then(|context| {
            Surface::new(context, window.clone())
                .map_err(|err| eprintln!("[twilight] Failed to create surface: {err}"))
                .ok()
        });

        Ok(ShellWindow {
            window,
            surface,
            _context: context,
        })
    }
}

pub fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(WindowConfig::updater());
    event_loop
        .run_app(&mut app)
        .context("application error")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_window.rs"]
mod tests;
