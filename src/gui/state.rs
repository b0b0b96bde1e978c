use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::event_loop::OwnedDisplayHandle;
use winit::window::Window;

use crate::config::WindowConfig;

/// Lifecycle of the shell. `Terminated` is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) enum ShellState {
    #[default]
    Open,
    Terminated,
}

/// The subset of window events the shell distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ShellEvent {
    CloseRequested,
    Redraw,
    Other,
}

impl ShellState {
    pub(super) fn on_event(self, event: ShellEvent) -> ShellState {
        match (self, event) {
            (ShellState::Open, ShellEvent::CloseRequested) => ShellState::Terminated,
            (state, _) => state,
        }
    }

    pub(super) fn is_terminated(self) -> bool {
        self == ShellState::Terminated
    }
}

impl From<&winit::event::WindowEvent> for ShellEvent {
    fn from(event: &winit::event::WindowEvent) -> Self {
        use winit::event::WindowEvent;
        match event {
            WindowEvent::CloseRequested => ShellEvent::CloseRequested,
            WindowEvent::RedrawRequested => ShellEvent::Redraw,
            _ => ShellEvent::Other,
        }
    }
}

/// The live window together with its paint surface.
pub(super) struct ShellWindow {
    pub(super) window: Arc<Window>,
    /// `None` when softbuffer could not attach; the window still works, it is
    /// just left to the platform's default paint.
    pub(super) surface: Option<Surface<OwnedDisplayHandle, Arc<Window>>>,
    pub(super) _context: Option<Context<OwnedDisplayHandle>>,
}

pub(super) struct App {
    pub(super) config: WindowConfig,
    pub(super) state: ShellState,
    pub(super) shell: Option<ShellWindow>,
    /// Setup error raised inside the event loop, returned from `run`.
    pub(super) error: Option<anyhow::Error>,
}

#[cfg(test)]
#[path = "../../tests/unit/gui_state.rs"]
mod tests;
