//! Theme system for consistent widget styling.

use trellis_types::color::{Color, parse_hex_color};
use trellis_types::config::{ThemeVariant, UiConfig};

/// Visual parameters shared by every widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Window and container background.
    pub background: Color,
    /// Button face color.
    pub button: Color,
    /// Primary text color.
    pub text: Color,
    /// Placeholder text in empty inputs.
    pub placeholder: Color,
    /// Text on disabled widgets.
    pub disabled_text: Color,
    /// Accent color (primary buttons, selections).
    pub primary: Color,
    /// Border drawn around the focused widget.
    pub focus: Color,

    /// Text size in points.
    pub text_size: u16,
    /// Inner padding in pixels.
    pub padding: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(18, 18, 24),
            button: Color::rgb(50, 50, 70),
            text: Color::rgb(230, 230, 240),
            placeholder: Color::rgb(130, 130, 150),
            disabled_text: Color::rgb(100, 100, 120),
            primary: Color::rgb(80, 160, 255),
            focus: Color::rgb(110, 180, 255),

            text_size: 14,
            padding: 4,
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(245, 245, 250),
            button: Color::rgb(230, 230, 240),
            text: Color::rgb(20, 20, 30),
            placeholder: Color::rgb(130, 130, 145),
            disabled_text: Color::rgb(170, 170, 180),
            primary: Color::rgb(50, 120, 220),
            focus: Color::rgb(70, 140, 240),

            text_size: 14,
            padding: 4,
        }
    }

    /// Build a theme from a loaded config: the named variant first, then any
    /// overrides. Unparseable colors are skipped with a warning.
    pub fn from_config(config: &UiConfig) -> Self {
        let mut theme = match config.theme {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        };
        if let Some(size) = config.text_size {
            theme.text_size = size;
        }
        if let Some(padding) = config.padding {
            theme.padding = padding;
        }

        let c = &config.colors;
        let overrides = [
            ("background", &c.background, &mut theme.background),
            ("button", &c.button, &mut theme.button),
            ("text", &c.text, &mut theme.text),
            ("placeholder", &c.placeholder, &mut theme.placeholder),
            ("disabled_text", &c.disabled_text, &mut theme.disabled_text),
            ("primary", &c.primary, &mut theme.primary),
            ("focus", &c.focus, &mut theme.focus),
        ];
        for (name, value, slot) in overrides {
            let Some(raw) = value else { continue };
            match parse_hex_color(raw) {
                Some(color) => *slot = color,
                None => log::warn!("Ignoring invalid {name} color {raw:?}"),
            }
        }
        theme
    }
}
