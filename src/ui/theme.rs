//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavors; custom themes are read
//! from TOML files with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! error_fg = "#1e1e2e"
//! error_bg = "#f38ba8"
//! liked_fg = "#f38ba8"
//! accent_fg = "#89b4fa"
//! input_border = "#f5c2e7"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use lurkforwork::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{LurkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card or row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text: dates, counts, footer.
    pub text_dim: String,

    pub border: String,

    /// Error banner.
    pub error_fg: String,
    pub error_bg: String,

    /// Filled heart on liked jobs.
    pub liked_fg: String,

    /// Names and titles that open something.
    pub accent_fg: String,

    /// Border of forms and overlays.
    pub input_border: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LurkError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LurkError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| LurkError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Plain palette used if the bundled default cannot be parsed.
    fn fallback() -> Self {
        let c = |hex: &str| hex.to_string();
        Self {
            name: "fallback".to_string(),
            colors: ThemeColors {
                header_fg: c("#ffffff"),
                header_bg: None,
                selection_fg: c("#000000"),
                selection_bg: c("#c0c0c0"),
                text_normal: c("#ffffff"),
                text_dim: c("#808080"),
                border: c("#808080"),
                error_fg: c("#ffffff"),
                error_bg: c("#aa0000"),
                liked_fg: c("#ff5555"),
                accent_fg: c("#5555ff"),
                input_border: c("#c0c0c0"),
                empty_state_fg: c("#5555ff"),
            },
        }
    }

    /// `(r, g, b)` of a hex color; white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// ```rust
    /// use lurkforwork::ui::Theme;
    ///
    /// assert_eq!(Theme::default().name, "catppuccin-mocha");
    /// ```
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#f38ba8"), "\u{1b}[38;2;243;139;168m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_errors_are_theme_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \"x\"\n").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(LurkError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(LurkError::Theme(_))
        ));
    }
}
