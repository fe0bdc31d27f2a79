//! Page theme, installed once per process

use ratatui::style::Color;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Colors for the page's visual states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    /// Border of a field marked invalid
    pub error: Color,
    pub success: Color,
    /// Header bottom edge once the page is scrolled
    pub shadow: Color,
    /// Start and end of the reveal fade
    pub reveal_from: (u8, u8, u8),
    pub reveal_to: (u8, u8, u8),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0xe6, 0x7e, 0x22),
            text: Color::Rgb(0xec, 0xf0, 0xf1),
            muted: Color::DarkGray,
            error: Color::Rgb(0xe7, 0x4c, 0x3c),
            success: Color::Rgb(0x27, 0xae, 0x60),
            shadow: Color::Rgb(0x55, 0x55, 0x55),
            reveal_from: (0x20, 0x20, 0x20),
            reveal_to: (0xec, 0xf0, 0xf1),
        }
    }
}

impl Theme {
    fn with_accent(accent: Option<&str>) -> Self {
        let mut theme = Self::default();
        if let Some(hex) = accent {
            match parse_hex(hex) {
                Some(color) => theme.accent = color,
                None => tracing::warn!("Ignoring invalid accent color {hex:?}"),
            }
        }
        theme
    }

    /// Text color part way through the reveal fade
    pub fn fade(&self, progress: f32) -> Color {
        let p = progress.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * p).round() as u8;
        Color::Rgb(
            mix(self.reveal_from.0, self.reveal_to.0),
            mix(self.reveal_from.1, self.reveal_to.1),
            mix(self.reveal_from.2, self.reveal_to.2),
        )
    }
}

/// Install the theme; later calls return the first installed theme
pub fn install(accent: Option<&str>) -> &'static Theme {
    THEME.get_or_init(|| Theme::with_accent(accent))
}

/// The installed theme, or the default one if nothing was installed
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Parse `#rrggbb`
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
