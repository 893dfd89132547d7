//! Glass design system for SpringBok ERP
//!
//! This crate turns a logical style name such as
//! "button, variant=primary, size=lg" into a concrete style object built
//! from layered partial fragments.
//!
//! # Layers
//!
//! Leaves first:
//! - [`colors`], [`tokens`], [`typography`] - Token store (read-only scales)
//! - [`effects`] - Glass effect composer
//! - [`registry`], [`stylesheet`] - Component style registry
//! - [`composer`] - Ordered fold of base and modifier fragments
//!
//! Around them:
//! - [`config`] - JSON configuration (font scale, extra fragments)
//! - [`system`] - [`DesignSystem`], the object view code holds
//! - [`components`] - Typed props that map to modifiers
//! - [`showcase`] - Serializable catalog of every style
//!
//! # Example
//!
//! ```rust
//! use design_system::{ComponentKind, DesignSystem, Modifier};
//! use design_system::colors::primary;
//!
//! let system = DesignSystem::new().unwrap();
//! let style = system
//!     .resolve(
//!         ComponentKind::Button,
//!         &[Modifier::variant("primary"), Modifier::size("lg")],
//!     )
//!     .unwrap();
//!
//! assert_eq!(style.color.background_color.as_deref(), Some(primary::GLASS));
//! let props = style.to_properties();
//! assert_eq!(props["paddingHorizontal"], 24.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod colors;
pub mod components;
pub mod composer;
pub mod config;
pub mod effects;
pub mod error;
pub mod registry;
pub mod showcase;
pub mod style;
pub mod stylesheet;
pub mod system;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use composer::{resolve, resolve_named};
pub use config::{DesignSystemConfig, FragmentConfig};
pub use effects::{compose_effect, GlassEffect, GlassLevel};
pub use error::{ConfigError, Result};
pub use registry::{
    ComponentKind, ComponentStyleDescriptor, Modifier, ModifierCategory, StyleRegistry,
    StyleRegistryBuilder,
};
pub use showcase::Catalog;
pub use style::{ResolvedStyle, StyleFragment};
pub use stylesheet::{glass_registry, glass_stylesheet};
pub use system::DesignSystem;
