// ui/theme.rs - Theme system for UI styling

use ratatui::style::Color;

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub toolbar: ToolbarTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct ToolbarTheme {
    pub background: Color,
    pub button_fg: Color,
    pub active_bg: Color,
    pub active_fg: Color,
    pub disabled_fg: Color,
    pub divider_fg: Color,
    pub hover_bg: Color,
    pub tooltip_bg: Color,
    pub tooltip_fg: Color,
    pub tooltip_border: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::Rgb(248, 248, 242), // Light gray for better contrast
        }
    }
}

impl Default for ToolbarTheme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            button_fg: Color::Rgb(248, 248, 242),
            active_bg: Color::Rgb(80, 250, 123), // Green
            active_fg: Color::Black,
            disabled_fg: Color::DarkGray,
            divider_fg: Color::Rgb(98, 114, 164),
            hover_bg: Color::Rgb(68, 71, 90),
            tooltip_bg: Color::Rgb(33, 34, 44),
            tooltip_fg: Color::White,
            tooltip_border: Color::Rgb(139, 233, 253), // Cyan
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            general: GeneralTheme {
                background: Color::White,
                foreground: Color::Black,
            },
            toolbar: ToolbarTheme {
                background: Color::Rgb(240, 240, 240),
                button_fg: Color::Rgb(40, 40, 40),
                active_bg: Color::Rgb(0, 120, 215),
                active_fg: Color::White,
                disabled_fg: Color::Gray,
                divider_fg: Color::Gray,
                hover_bg: Color::Rgb(220, 220, 220),
                tooltip_bg: Color::Rgb(50, 50, 50),
                tooltip_fg: Color::White,
                tooltip_border: Color::Rgb(50, 50, 50),
            },
            ui: UiTheme {
                status_bar_bg: Color::Rgb(0, 120, 215),
                status_bar_fg: Color::White,
            },
        }
    }

    /// Look up a theme by name; unknown names fall back to the dark default
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::default(),
        }
    }
}
