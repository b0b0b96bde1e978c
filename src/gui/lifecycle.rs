use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::state::{App, ShellEvent};

/// What the event loop does after an event has been applied to the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ShellFlow {
    Continue,
    Paint,
    Exit,
}

impl App {
    /// True until the window has been created or the shell has terminated.
    pub(super) fn needs_window(&self) -> bool {
        self.shell.is_none() && !self.state.is_terminated()
    }

    /// Advances the state machine. Termination drops the window.
    pub(super) fn apply_event(&mut self, event: ShellEvent) -> ShellFlow {
        self.state = self.state.on_event(event);
        if self.state.is_terminated() {
            self.shell = None;
            return ShellFlow::Exit;
        }
        match event {
            ShellEvent::Redraw => ShellFlow::Paint,
            ShellEvent::CloseRequested | ShellEvent::Other => ShellFlow::Continue,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.needs_window() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(shell) => {
                shell.window.request_redraw();
                self.shell = Some(shell);
            }
            Err(err) => {
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.shell.as_ref().map(|shell| shell.window.id()) != Some(window_id) {
            return;
        }

        match self.apply_event(ShellEvent::from(&event)) {
            ShellFlow::Exit => event_loop.exit(),
            ShellFlow::Paint => {
                let background = self.config.background;
                if let Some(shell) = self.shell.as_mut() {
                    shell.paint(background);
                }
            }
            ShellFlow::Continue => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_lifecycle.rs"]
mod tests;
