//! Configuration errors
//!
//! Every variant here is a startup-time failure: a registry or config that
//! produces one must not be used. A modifier that simply has no fragment is
//! not an error and never shows up here.

use crate::registry::{ComponentKind, ModifierCategory};
use thiserror::Error;

/// Errors raised while building or querying the style registry
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Kind was never registered
    #[error("Component kind '{0}' is not registered")]
    UnregisteredKind(ComponentKind),

    /// Kind name does not match any component kind
    #[error("Unknown component kind: {0}")]
    UnknownKind(String),

    /// Category name is not variant, size or state
    #[error("Unknown modifier category: {0}")]
    UnknownCategory(String),

    /// Effect name does not match any glass level
    #[error("Unknown glass effect level: {0}")]
    UnknownEffect(String),

    /// Kind registered more than once
    #[error("Component kind '{0}' is already registered")]
    DuplicateKind(ComponentKind),

    /// Modifier name repeated within one category
    #[error("Duplicate {category} '{name}' for component '{kind}'")]
    DuplicateModifier {
        /// Owning kind
        kind: ComponentKind,
        /// Category of the repeated name
        category: ModifierCategory,
        /// Repeated name
        name: String,
    },

    /// Modifier registered under an empty name
    #[error("Empty {category} name for component '{kind}'")]
    EmptyModifierName {
        /// Owning kind
        kind: ComponentKind,
        /// Category with the empty name
        category: ModifierCategory,
    },

    /// Config fragment style uses a key no style domain knows
    #[error("Unknown style key '{key}' in config fragment '{name}'")]
    UnknownStyleKey {
        /// Fragment name
        name: String,
        /// Unrecognised key
        key: String,
    },

    /// Font scale outside the supported range
    #[error("Font scale {0} is outside the supported range 0.5..=2.0")]
    InvalidFontScale(f32),

    /// Config file could not be read
    #[error("Failed to read design system config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the config schema
    #[error("Failed to parse design system config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for registry and configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
