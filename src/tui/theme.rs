use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl Theme {
    /// The primary color for borders, focuses, and active elements.
    pub const PRIMARY: Color = Color::Rgb(46, 204, 113); // Emerald Green
    /// The secondary color for highlights and accents.
    pub const SECONDARY: Color = Color::Rgb(26, 188, 156); // Turquoise / Mint
    /// Chip background.
    pub const CHIP: Color = Color::Rgb(68, 71, 90);

    pub const ERROR: Color = Color::Red;

    // Text colors
    pub const TEXT_NORMAL: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;

    pub fn new() -> Self {
        Self
    }

    // --- Block / Border Styles ---

    pub fn block_active(&self) -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn block_inactive(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    // --- Text Styles ---

    pub fn text_normal(&self) -> Style {
        Style::default().fg(Self::TEXT_NORMAL)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    // --- Dropdown Styles ---

    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(Self::TEXT_DIM)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn chip(&self) -> Style {
        Style::default().bg(Self::CHIP).fg(Self::TEXT_NORMAL)
    }

    pub fn chip_remove(&self) -> Style {
        Style::default()
            .bg(Self::CHIP)
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn checkbox_checked(&self) -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn checkbox_unchecked(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn chevron(&self) -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    // --- Input / Edit Styles ---

    pub fn input_cursor(&self) -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }
}
