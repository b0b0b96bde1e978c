/// Fixed configuration of the updater window.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub size: WindowSize,
    pub resizable: bool,
    /// Declared display font. Nothing is drawn with it yet.
    #[allow(dead_code)]
    pub font: FontSpec,
    /// Client-area clear color, `0x00RRGGBB`.
    pub background: u32,
}

impl WindowConfig {
    pub const TITLE: &'static str = "Codename Twilight updater";

    pub(crate) fn updater() -> Self {
        Self {
            title: Self::TITLE.to_string(),
            size: WindowSize::default(),
            resizable: false,
            font: FontSpec::default(),
            background: 0xEEEEEE,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::updater()
    }
}

/// Logical inner size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 550,
            height: 400,
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FontSpec {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "serif".to_string(),
            style: FontStyle {
                bold: true,
                italic: true,
            },
            size: 36.0,
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/config_model.rs"]
mod tests;
