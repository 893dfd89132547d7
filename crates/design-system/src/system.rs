//! Design system entry point
//!
//! [`DesignSystem`] owns a built registry. Construct it once at startup and
//! hand it to view code by reference (or inside an `Arc`); every method
//! takes `&self`.

use crate::composer;
use crate::config::DesignSystemConfig;
use crate::effects::{compose_effect, GlassEffect, GlassLevel};
use crate::error::Result;
use crate::registry::{ComponentKind, Modifier, StyleRegistry};
use crate::style::ResolvedStyle;
use crate::stylesheet::glass_stylesheet;
use tracing::info;

/// Immutable style resolver for the whole app
#[derive(Debug, Clone)]
pub struct DesignSystem {
    registry: StyleRegistry,
    font_scale: f32,
}

impl DesignSystem {
    /// The stock glass stylesheet with default configuration
    pub fn new() -> Result<Self> {
        Self::from_config(&DesignSystemConfig::default())
    }

    /// The glass stylesheet with `config` applied
    pub fn from_config(config: &DesignSystemConfig) -> Result<Self> {
        let registry = config.apply(glass_stylesheet())?.build()?;
        info!(
            "Design system ready (font scale {}, {} config fragments)",
            config.font_scale,
            config.fragments.len()
        );
        Ok(Self {
            registry,
            font_scale: config.font_scale,
        })
    }

    /// Wrap an already built registry
    pub fn with_registry(registry: StyleRegistry) -> Self {
        Self {
            registry,
            font_scale: 1.0,
        }
    }

    /// Resolve a kind with modifiers applied in order
    pub fn resolve(
        &self,
        kind: ComponentKind,
        modifiers: &[Modifier<'_>],
    ) -> Result<ResolvedStyle> {
        composer::resolve(&self.registry, kind, modifiers)
    }

    /// Resolve from string names
    pub fn resolve_named(&self, kind: &str, modifiers: &[(&str, &str)]) -> Result<ResolvedStyle> {
        composer::resolve_named(&self.registry, kind, modifiers)
    }

    /// Compose a glass effect
    pub fn effect(&self, level: GlassLevel) -> GlassEffect {
        compose_effect(level)
    }

    /// The underlying registry
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Font scale the registry was built with
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }
}
