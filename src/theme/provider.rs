//! Theme provider - the host's static UI configuration
//!
//! Produces the immutable configuration consumed once at startup: two
//! named themes (light, dark), the default-theme selector, a structural
//! blueprint and the opaque component/directive registries passed
//! through to the UI library. Construction is pure; there is no I/O and
//! no failure path.

use std::collections::HashMap;

use crate::theme::{Color, ThemeDefinition};

/// Structural/visual preset selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blueprint {
    Md1,
    Md2,
    #[default]
    Md3,
}

/// Immutable UI configuration handed to the render root
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Name of the theme activated at startup
    pub default_theme: String,
    /// Declared themes by name
    pub themes: HashMap<String, ThemeDefinition>,
    /// Structural preset
    pub blueprint: Blueprint,
    /// Renderable units passed through to the UI library
    pub components: Vec<String>,
    /// Behavioral extensions passed through to the UI library
    pub directives: Vec<String>,
}

impl UiConfig {
    /// Resolve a theme by name
    pub fn theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.get(name)
    }

    /// Resolve the default theme
    ///
    /// Returns `None` only if the configuration was hand-built with a
    /// dangling default-theme name; `ui_config()` never produces that.
    pub fn default_theme(&self) -> Option<&ThemeDefinition> {
        self.themes.get(&self.default_theme)
    }
}

/// Name of the light theme
pub const LIGHT_THEME: &str = "light";
/// Name of the dark theme
pub const DARK_THEME: &str = "dark";

fn light_theme() -> ThemeDefinition {
    ThemeDefinition::new(false)
        .with_color("background", Color::rgb(0xF2, 0xF2, 0xF2))
        .with_color("surface", Color::rgb(0xE8, 0xE8, 0xE8))
        .with_color("primary", Color::rgb(0xE5, 0x39, 0x35))
        .with_color("primary-darken-1", Color::rgb(0x37, 0x00, 0xB3))
        .with_color("secondary-darken-1", Color::rgb(0x01, 0x87, 0x86))
        .with_color("error", Color::rgb(0xB0, 0x00, 0x20))
        .with_color("info", Color::rgb(0x21, 0x96, 0xF3))
        .with_color("success", Color::rgb(0x4C, 0xAF, 0x50))
        .with_color("warning", Color::rgb(0xFB, 0x8C, 0x00))
        .with_color("nav-success", Color::rgb(0x7A, 0x28, 0xFF))
        .with_color("nav-success-2", Color::rgb(0xB7, 0x35, 0xFF))
        .with_color("segement-panel", Color::rgb(0xFF, 0xF8, 0xE1))
        .with_color("three-d-panel", Color::rgb(0xFF, 0xF8, 0xE1))
        .with_color("split-line", Color::rgb(0xFF, 0x8F, 0x00))
        .with_color("switcher", Color::rgb(0xFF, 0x57, 0x22))
}

fn dark_theme() -> ThemeDefinition {
    ThemeDefinition::new(true)
        .with_color("background", Color::rgb(0x28, 0x2c, 0x34))
        .with_color("surface", Color::rgb(0x23, 0x23, 0x24))
        .with_color("image_view", Color::BLACK)
        .with_color("primary", Color::rgb(0xff, 0xf8, 0xec))
        .with_color("primary-font", Color::rgb(0xff, 0xf8, 0xec))
        .with_color("secondary-font", Color::rgb(0x00, 0x96, 0x88))
        .with_color("error", Color::rgb(0xf4, 0x43, 0x36))
        .with_color("info", Color::rgb(0x21, 0x96, 0xF3))
        .with_color("success", Color::rgb(0x4c, 0xaf, 0x50))
        .with_color("warning", Color::rgb(0xfb, 0x8c, 0x00))
        .with_color("calculator", Color::rgb(0x1D, 0xE9, 0xB6))
        .with_color("nav-success", Color::rgb(0x00, 0x96, 0x88))
        .with_color("nav-success-2", Color::rgb(0x26, 0xC6, 0xDA))
        .with_color("segement-panel", Color::rgb(0xF4, 0x51, 0x1E))
        .with_color("three-d-panel", Color::rgb(0x43, 0xA0, 0x47))
        .with_color("split-line", Color::rgb(0x00, 0x96, 0x88))
        .with_color("switcher", Color::rgb(0xFF, 0x57, 0x22))
}

/// Build the host's UI configuration
///
/// The light and dark role sets deliberately differ (e.g. `primary-font`
/// exists only in dark); consumers use `ThemeDefinition::color_or` for
/// roles that may be absent.
pub fn ui_config() -> UiConfig {
    let mut themes = HashMap::new();
    themes.insert(LIGHT_THEME.to_string(), light_theme());
    themes.insert(DARK_THEME.to_string(), dark_theme());

    UiConfig {
        default_theme: DARK_THEME.to_string(),
        themes,
        blueprint: Blueprint::Md3,
        components: Vec::new(),
        directives: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_resolves() {
        let config = ui_config();
        let theme = config.default_theme().unwrap();
        assert_eq!(config.default_theme, DARK_THEME);
        assert!(theme.dark);
    }

    #[test]
    fn test_both_themes_declared() {
        let config = ui_config();
        assert!(!config.theme(LIGHT_THEME).unwrap().dark);
        assert!(config.theme(DARK_THEME).unwrap().dark);
        assert_eq!(config.themes.len(), 2);
    }

    #[test]
    fn test_palette_values() {
        let config = ui_config();
        let dark = config.theme(DARK_THEME).unwrap();
        assert_eq!(dark.color("background"), Some(Color::rgb(0x28, 0x2c, 0x34)));
        assert_eq!(dark.color("primary"), Some(Color::rgb(0xff, 0xf8, 0xec)));

        let light = config.theme(LIGHT_THEME).unwrap();
        assert_eq!(light.color("primary"), Some(Color::rgb(0xE5, 0x39, 0x35)));
    }

    #[test]
    fn test_asymmetric_role_sets() {
        let config = ui_config();
        let light = config.theme(LIGHT_THEME).unwrap();
        let dark = config.theme(DARK_THEME).unwrap();

        // Known asymmetries, intentional fallback-by-omission
        assert!(light.has_role("primary-darken-1"));
        assert!(!dark.has_role("primary-darken-1"));
        assert!(dark.has_role("primary-font"));
        assert!(!light.has_role("primary-font"));

        // Roles shared by both themes
        for role in ["background", "surface", "primary", "error", "info", "success", "warning"] {
            assert!(light.has_role(role), "light missing {role}");
            assert!(dark.has_role(role), "dark missing {role}");
        }
    }

    #[test]
    fn test_blueprint_default() {
        assert_eq!(ui_config().blueprint, Blueprint::Md3);
    }
}
