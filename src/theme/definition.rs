//! Theme definition - a named set of semantic color roles
//!
//! A theme is a dark/light flag plus a mapping from role names
//! ("primary", "background", ...) to colors. The light and dark role
//! sets overlap but are not required to match; lookups take an explicit
//! fallback so omission stays well-defined.

use std::collections::HashMap;

use crate::theme::Color;

/// One visual theme: dark flag plus color roles
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeDefinition {
    /// Whether this is a dark theme
    pub dark: bool,
    colors: HashMap<String, Color>,
}

impl ThemeDefinition {
    /// Create an empty theme
    pub fn new(dark: bool) -> Self {
        Self {
            dark,
            colors: HashMap::new(),
        }
    }

    /// Builder-style role assignment
    pub fn with_color(mut self, role: &str, color: Color) -> Self {
        self.colors.insert(role.to_string(), color);
        self
    }

    /// Set a color role
    pub fn set_color(&mut self, role: &str, color: Color) {
        self.colors.insert(role.to_string(), color);
    }

    /// Look up a color role
    pub fn color(&self, role: &str) -> Option<Color> {
        self.colors.get(role).copied()
    }

    /// Look up a color role with fallback
    pub fn color_or(&self, role: &str, default: Color) -> Color {
        self.color(role).unwrap_or(default)
    }

    /// Whether the role is defined in this theme
    pub fn has_role(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    /// All defined role names
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Number of defined roles
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no roles are defined
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
