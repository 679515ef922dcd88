pub mod presets;

use iced::Color;

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // App background (deepest)
    pub bg_surface: Color,  // Cards, panels
    pub bg_elevated: Color, // Inputs, buttons
    pub bg_hover: Color,    // Hover states
    pub bg_active: Color,   // Active/selected states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Less important text
    pub fg_muted: Color,     // Disabled/placeholder text
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,       // Brand/primary actions
    pub accent_hover: Color, // Hovered accent
    pub success: Color,      // Advantages, allowed traffic, solutions
    pub warning: Color,      // Symptoms, medium severity
    pub danger: Color,       // Disadvantages, blocked traffic, high severity
    pub info: Color,         // Informational, low severity

    // === Borders & Dividers ===
    pub border: Color,  // Default borders
    pub divider: Color, // Separators

    // === Code Example Block ===
    pub code_bg: Color, // Dark terminal-style background
    pub code_fg: Color, // Snippet text

    // === Shadows ===
    pub shadow_color: Color,
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        bg_active: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        success: u32,
        warning: u32,
        danger: u32,
        info: u32,
        border: u32,
        divider: u32,
        code_bg: u32,
        code_fg: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            bg_active: hex_to_color(bg_active),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            success: hex_to_color(success),
            warning: hex_to_color(warning),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            border: hex_to_color(border),
            divider: hex_to_color(divider),
            code_bg: hex_to_color(code_bg),
            code_fg: hex_to_color(code_fg),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }

    /// Rough luminance check used by gradient/hover helpers
    pub fn is_light(&self) -> bool {
        let l = 0.299 * self.bg_base.r + 0.587 * self.bg_base.g + 0.114 * self.bg_base.b;
        l > 0.5
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Available built-in themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
pub enum ThemeChoice {
    #[default]
    #[strum(serialize = "dark")]
    Slate,
    #[strum(serialize = "light")]
    Daylight,
}

impl ThemeChoice {
    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Slate => presets::slate(),
            Self::Daylight => presets::daylight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        let c = hex_to_color(0x00FF_8000);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!(c.b.abs() < f32::EPSILON);
    }

    #[test]
    fn test_preset_lightness() {
        assert!(!presets::slate().is_light());
        assert!(presets::daylight().is_light());
    }
}
