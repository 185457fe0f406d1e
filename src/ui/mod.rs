pub mod overlay;
pub mod panel;

use ratatui::style::Color;

/// Colors shared by the board and the side panel.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub food: Color,
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
}

/// Deep navy board with a red head and amber food.
pub const PALETTE: Palette = Palette {
    background: Color::Rgb(0x1a, 0x1a, 0x2e),
    border: Color::Rgb(0x16, 0x21, 0x3e),
    snake_body: Color::Rgb(0x0f, 0x34, 0x60),
    snake_head: Color::Rgb(0xe9, 0x45, 0x60),
    food: Color::Rgb(0xf3, 0x9c, 0x12),
    text: Color::White,
    accent: Color::Green,
    muted: Color::DarkGray,
};
