use ratatui::style::Color;

/// Color palette for the game screen
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub correct: Color,
    pub wrong: Color,
    pub skipped: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
            correct: Color::Rgb(158, 206, 106), // #9ECE6A
            wrong: Color::Rgb(247, 118, 142),   // #F7768E
            skipped: Color::Rgb(86, 95, 137),   // #565F89
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn correct() -> Color {
        Theme::current().correct
    }
    pub fn wrong() -> Color {
        Theme::current().wrong
    }
    pub fn skipped() -> Color {
        Theme::current().skipped
    }
}
