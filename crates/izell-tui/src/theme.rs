use ratatui::style::Color;

/// Runtime color theme.
///
/// The defaults mirror the brand palette: dark charcoal backgrounds with a
/// warm orange accent.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub accent_dim: Color,
    pub selection: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x1a, 0x1a, 0x1e),
            bg1: Color::Rgb(0x24, 0x24, 0x2a),
            bg2: Color::Rgb(0x32, 0x32, 0x3a),
            fg0: Color::Rgb(0xea, 0xe6, 0xdd),
            fg1: Color::Rgb(0xc8, 0xc3, 0xb8),
            muted: Color::Rgb(0x8a, 0x86, 0x7d),
            accent: Color::Rgb(0xf9, 0x73, 0x16),
            accent_dim: Color::Rgb(0xb4, 0x54, 0x10),
            selection: Color::Rgb(0x3a, 0x32, 0x2a),
            success: Color::Rgb(0x7f, 0xb0, 0x69),
            warning: Color::Rgb(0xe0, 0xa4, 0x58),
            error: Color::Rgb(0xd9, 0x5c, 0x4f),
            info: Color::Rgb(0x6f, 0xa7, 0xc7),
        }
    }
}
