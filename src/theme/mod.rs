pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Semantic color palette shared by every widget style
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: &'static str,

    // === Background Layers ===
    pub bg_base: Color,     // Window background
    pub bg_sidebar: Color,  // Sidebar and navbar
    pub bg_surface: Color,  // Cards, comment rows
    pub bg_elevated: Color, // Inputs, secondary buttons
    pub bg_hover: Color,
    pub bg_active: Color, // Selected section, pressed buttons

    // === Foreground ===
    pub fg_primary: Color,
    pub fg_secondary: Color, // Channel names, view counts
    pub fg_muted: Color,     // Placeholders, disabled
    pub fg_on_accent: Color,

    // === Semantic Colors ===
    pub accent: Color, // Brand red, like highlight
    pub accent_hover: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // === Borders ===
    pub border: Color,
    pub border_strong: Color,
    pub divider: Color,

    // === Shadows ===
    pub shadow_color: Color,
    pub shadow_strong: Color, // Modals
}

impl AppTheme {
    /// Builds a theme from 0xRRGGBB values
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: &'static str,
        bg_base: u32,
        bg_sidebar: u32,
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
        border_strong: u32,
        divider: u32,
    ) -> Self {
        Self {
            name,
            bg_base: hex_to_color(bg_base),
            bg_sidebar: hex_to_color(bg_sidebar),
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
            border_strong: hex_to_color(border_strong),
            divider: hex_to_color(divider),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, 0.8),
        }
    }

    /// Light palettes get darker hover shades and the light iced base theme
    pub fn is_light(&self) -> bool {
        let c = self.bg_base;
        0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b > 0.5
    }

    /// Translucent surface for the glass panels over the base layer
    pub fn glass(&self, alpha: f32) -> Color {
        Color {
            a: alpha,
            ..self.bg_surface
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Built-in themes, in picker order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    #[default]
    GlassRed,
    GlassLight,
    Midnight,
    Nord,
}

impl ThemeChoice {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GlassRed => "Glass Red",
            Self::GlassLight => "Glass Light",
            Self::Midnight => "Midnight",
            Self::Nord => "Nord",
        }
    }

    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::GlassRed => presets::glass_red(),
            Self::GlassLight => presets::glass_light(),
            Self::Midnight => presets::midnight(),
            Self::Nord => presets::nord(),
        }
    }

    /// Next theme in picker order, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
