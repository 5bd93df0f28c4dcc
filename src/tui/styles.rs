//! TUI theme and styling

use ratatui::style::Color;
use tracing::warn;

pub const AVAILABLE_THEMES: &[&str] = &["harbor", "paper"];

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task states
    pub done: Color,
    pub due: Color,
    pub overdue: Color,
    pub grabbed: Color,

    // UI elements
    pub search: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::harbor()
    }
}

impl Theme {
    /// Look up a theme by name, falling back to the default on unknown names.
    pub fn by_name(name: &str) -> Self {
        match name {
            "harbor" => Self::harbor(),
            "paper" => Self::paper(),
            _ => {
                warn!("Unknown theme '{}', falling back to harbor", name);
                Self::harbor()
            }
        }
    }

    pub fn harbor() -> Self {
        Self {
            background: Color::Rgb(18, 22, 28),
            border: Color::Rgb(50, 62, 80),
            selection: Color::Rgb(34, 44, 58),

            title: Color::Rgb(96, 175, 255),
            text: Color::Rgb(200, 210, 220),
            dimmed: Color::Rgb(95, 110, 125),
            hint: Color::Rgb(130, 150, 170),

            done: Color::Rgb(100, 200, 130),
            due: Color::Rgb(240, 200, 90),
            overdue: Color::Rgb(255, 105, 90),
            grabbed: Color::Rgb(255, 180, 70),

            search: Color::Rgb(170, 220, 255),
            accent: Color::Rgb(96, 175, 255),
        }
    }

    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(245, 243, 238),
            border: Color::Rgb(180, 175, 165),
            selection: Color::Rgb(225, 220, 210),

            title: Color::Rgb(40, 70, 130),
            text: Color::Rgb(50, 50, 55),
            dimmed: Color::Rgb(150, 145, 135),
            hint: Color::Rgb(110, 120, 140),

            done: Color::Rgb(40, 130, 80),
            due: Color::Rgb(160, 120, 20),
            overdue: Color::Rgb(190, 50, 40),
            grabbed: Color::Rgb(200, 120, 30),

            search: Color::Rgb(70, 110, 170),
            accent: Color::Rgb(40, 70, 130),
        }
    }
}
