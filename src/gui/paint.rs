use std::num::NonZeroU32;

use super::state::ShellWindow;

impl ShellWindow {
    /// Clears the client area with `background` and presents the frame.
    pub(super) fn paint(&mut self, background: u32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };

        if let Err(err) = surface.resize(w, h) {
            eprintln!("[twilight] Failed to resize surface: {err}");
            return;
        }
        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                eprintln!("[twilight] Failed to acquire frame buffer: {err}");
                return;
            }
        };
        fill(&mut buffer, background);
        if let Err(err) = buffer.present() {
            eprintln!("[twilight] Failed to present frame: {err}");
        }
    }
}

/// Fills every pixel with `color`, masked to `0x00RRGGBB`.
pub(super) fn fill(pixels: &mut [u32], color: u32) {
    pixels.fill(color & 0x00FF_FFFF);
}

#[cfg(test)]
#[path = "../../tests/unit/gui_paint.rs"]
mod tests;
