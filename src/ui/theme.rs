use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use tracing::warn;

use crate::constants::custom_theme_path;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "classic", "gruvbox", "nord"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub bg_dark: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub danger: Color,
    pub warning: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            accent: Color::Rgb(99, 179, 237),
            bg_dark: Color::Rgb(22, 22, 30),
            text_primary: Color::Rgb(220, 220, 235),
            text_dim: Color::Rgb(120, 120, 145),
            text_muted: Color::Rgb(80, 80, 100),
            danger: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 193, 69),
            border: Color::Rgb(55, 55, 75),
        }
    }

    /// Terminal palette only: black-on-red headline, default foreground.
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            accent: Color::Cyan,
            bg_dark: Color::Black,
            text_primary: Color::Reset,
            text_dim: Color::Gray,
            text_muted: Color::DarkGray,
            danger: Color::Red,
            warning: Color::Yellow,
            border: Color::DarkGray,
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            accent: Color::Rgb(215, 153, 33),        // yellow
            bg_dark: Color::Rgb(40, 40, 40),         // bg0
            text_primary: Color::Rgb(235, 219, 178), // fg
            text_dim: Color::Rgb(168, 153, 132),     // fg4
            text_muted: Color::Rgb(102, 92, 84),     // bg4
            danger: Color::Rgb(251, 73, 52),         // red
            warning: Color::Rgb(250, 189, 47),       // yellow bright
            border: Color::Rgb(80, 73, 69),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent: Color::Rgb(136, 192, 208),       // nord8 frost
            bg_dark: Color::Rgb(46, 52, 64),         // nord0
            text_primary: Color::Rgb(229, 233, 240), // nord5
            text_dim: Color::Rgb(182, 191, 204),
            text_muted: Color::Rgb(107, 112, 127),
            danger: Color::Rgb(191, 97, 106),  // nord11 red
            warning: Color::Rgb(235, 203, 139), // nord13 yellow
            border: Color::Rgb(76, 86, 106),   // nord3
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "classic" => Some(Self::classic()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Built-in theme, else ~/.config/alertdeck/themes/<name>.toml, else default.
    pub fn resolve(name: &str) -> Self {
        if let Some(theme) = Self::by_name(name) {
            return theme;
        }
        Self::from_toml_file(&custom_theme_path(name)).unwrap_or_else(|| {
            warn!(theme = name, "unknown theme, using default");
            Self::default_dark()
        })
    }

    /// Load a custom theme from a TOML file, falling back to default for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    // ── Computed Styles ──────────────────────────────────────

    /// Reverse-color banner for the active alert's headline.
    pub fn headline_style(&self) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn emphasis_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// When the alert stops applying.
    pub fn expiry_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Key-hint labels in the status bar.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional — missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    bg_dark: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    danger: Option<String>,
    warning: Option<String>,
    border: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        Theme {
            name: name.to_string(),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            danger: parse_color(&self.danger).unwrap_or(base.danger),
            warning: parse_color(&self.warning).unwrap_or(base.warning),
            border: parse_color(&self.border).unwrap_or(base.border),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_color ───────────────────────────────────────────────

    #[test]
    fn parse_color_with_and_without_hash() {
        assert_eq!(
            parse_color(&Some("#FF8800".to_string())),
            Some(Color::Rgb(255, 136, 0))
        );
        assert_eq!(
            parse_color(&Some("ff8800".to_string())),
            Some(Color::Rgb(255, 136, 0))
        );
    }

    #[test]
    fn parse_color_rejects_bad_input() {
        assert_eq!(parse_color(&None), None);
        assert_eq!(parse_color(&Some("#FFF".to_string())), None);
        assert_eq!(parse_color(&Some("#GGHHII".to_string())), None);
        assert_eq!(parse_color(&Some("éééé".to_string())), None);
    }

    // ── by_name / resolve ─────────────────────────────────────────

    #[test]
    fn by_name_all_builtins() {
        for &name in BUILTIN_THEME_NAMES {
            let theme = Theme::by_name(name);
            assert!(theme.is_some(), "Theme '{}' should exist", name);
            assert_eq!(theme.unwrap().name, name);
        }
    }

    #[test]
    fn by_name_case_insensitive_and_unknown() {
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
        assert!(Theme::by_name("").is_none());
    }

    #[test]
    fn resolve_unknown_falls_back_to_default() {
        assert_eq!(Theme::resolve("no-such-theme-anywhere").name, "default");
        assert_eq!(Theme::resolve("Gruvbox").name, "gruvbox");
    }

    // ── custom themes ─────────────────────────────────────────────

    #[test]
    fn custom_theme_inherits_missing_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunset.toml");
        std::fs::write(&path, "danger = \"#112233\"\n").unwrap();

        let theme = Theme::from_toml_file(&path).unwrap();
        let base = Theme::default_dark();
        assert_eq!(theme.name, "sunset");
        assert_eq!(theme.danger, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.accent, base.accent);
    }

    #[test]
    fn headline_style_is_reverse_banner() {
        let t = Theme::classic();
        let s = t.headline_style();
        assert_eq!(s.bg, Some(Color::Red));
        assert_eq!(s.fg, Some(Color::Black));
        assert!(s.add_modifier.contains(Modifier::BOLD));
    }
}
