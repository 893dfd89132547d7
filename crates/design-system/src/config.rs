//! Design system configuration
//!
//! Loaded from camelCase JSON:
//!
//! ```json
//! {
//!   "fontScale": 1.25,
//!   "fragments": [
//!     {
//!       "kind": "badge",
//!       "category": "variant",
//!       "name": "brand",
//!       "effect": "subtle",
//!       "style": { "backgroundColor": "rgba(120, 40, 200, 0.25)" }
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Unknown keys, including style keys, are rejected
//! on load and names are checked when the config is applied, so a typo fails
//! startup instead of producing a silently unstyled element.

use crate::effects::{effect_fragment, GlassLevel};
use crate::error::{ConfigError, Result};
use crate::registry::{ComponentKind, ModifierCategory, StyleRegistryBuilder};
use crate::style::StyleFragment;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::debug;

/// Accepted font scale range
pub const FONT_SCALE_RANGE: RangeInclusive<f32> = 0.5..=2.0;

fn default_font_scale() -> f32 {
    1.0
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DesignSystemConfig {
    /// Multiplier applied to every font size
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
    /// Extra or replacement modifier fragments
    #[serde(default)]
    pub fragments: Vec<FragmentConfig>,
}

impl Default for DesignSystemConfig {
    fn default() -> Self {
        Self {
            font_scale: default_font_scale(),
            fragments: Vec::new(),
        }
    }
}

/// One modifier fragment supplied by configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FragmentConfig {
    /// Component kind name, e.g. `"button"`
    pub kind: String,
    /// `"variant"`, `"size"` or `"state"`
    pub category: String,
    /// Modifier name
    pub name: String,
    /// Glass level applied under `style`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    /// Style keys, applied last
    #[serde(default)]
    pub style: StyleFragment,
}

impl FragmentConfig {
    /// Build the fragment: the effect first, then `style` on top
    pub fn to_fragment(&self) -> Result<StyleFragment> {
        let base = match self.effect.as_deref() {
            Some(name) => effect_fragment(name.parse::<GlassLevel>()?),
            None => StyleFragment::new(),
        };
        Ok(base.layer(&self.style))
    }
}

impl DesignSystemConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if !FONT_SCALE_RANGE.contains(&self.font_scale) {
            return Err(ConfigError::InvalidFontScale(self.font_scale));
        }
        for entry in &self.fragments {
            if let Some(key) = entry.style.unknown_keys().next() {
                return Err(ConfigError::UnknownStyleKey {
                    name: entry.name.clone(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply fragments and font scaling to an unbuilt stylesheet
    ///
    /// Fragments are added before scaling, so configured font sizes are
    /// scaled as well.
    pub fn apply(&self, mut builder: StyleRegistryBuilder) -> Result<StyleRegistryBuilder> {
        self.validate()?;

        for entry in &self.fragments {
            let kind: ComponentKind = entry.kind.parse()?;
            let category: ModifierCategory = entry.category.parse()?;
            let fragment = entry.to_fragment()?;

            let replaced = builder
                .descriptor_mut(kind)?
                .upsert(category, entry.name.clone(), fragment);
            if replaced {
                debug!("Config replaced {} '{}' on {}", category, entry.name, kind);
            }
        }

        if self.font_scale != 1.0 {
            let scale = self.font_scale;
            builder.for_each_fragment_mut(|fragment| fragment.scale_fonts(scale));
        }

        Ok(builder)
    }
}
