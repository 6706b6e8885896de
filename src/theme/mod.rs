//! Theme module - color types and the static theme configuration

pub mod color;
pub mod definition;
pub mod provider;

// Public API re-exports
pub use color::{Color, ColorParseError};
pub use definition::ThemeDefinition;
pub use provider::{ui_config, Blueprint, UiConfig, DARK_THEME, LIGHT_THEME};
