use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    /// Redraw the status line in place
    pub live: bool,
    pub width: u16,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
            live: !json && caps.is_stderr_tty && !caps.is_ci,
            width: caps.width,
        }
    }
}
