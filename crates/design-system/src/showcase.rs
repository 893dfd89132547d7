//! Design system catalog
//!
//! A serializable snapshot of everything the design system can produce:
//! token palettes, the five glass effects and every registered modifier
//! resolved over its kind's base. Used to render a showcase screen or to
//! diff stylesheet changes.

use crate::colors::{self, ColorRamp, RAMP_NAMES};
use crate::effects::{compose_effect, GlassEffect, GlassLevel};
use crate::error::Result;
use crate::registry::{ComponentKind, Modifier, ModifierCategory};
use crate::style::ResolvedStyle;
use crate::system::DesignSystem;
use crate::tokens::duration;
use crate::typography::font_size;
use serde::Serialize;
use std::collections::BTreeMap;

const FONT_SIZE_NAMES: [&str; 10] = [
    "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

/// Every style the system can produce
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Semantic color ramps by name
    pub ramps: BTreeMap<&'static str, ColorRamp>,
    /// Font size scale by name
    pub font_sizes: BTreeMap<&'static str, f32>,
    /// Animation durations in milliseconds
    pub durations: BTreeMap<&'static str, u32>,
    /// One entry per glass level
    pub effects: Vec<GlassEffect>,
    /// One entry per registered kind
    pub components: Vec<ComponentEntry>,
}

/// Showcase entry for one kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentEntry {
    /// Kind
    pub kind: ComponentKind,
    /// Base fragment
    pub base: ResolvedStyle,
    /// Each variant over the base
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, ResolvedStyle>,
    /// Each size over the base
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sizes: BTreeMap<String, ResolvedStyle>,
    /// Each state over the base
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<String, ResolvedStyle>,
}

impl ComponentEntry {
    /// Number of modifiers across all categories
    pub fn modifier_count(&self) -> usize {
        self.variants.len() + self.sizes.len() + self.states.len()
    }
}

impl Catalog {
    /// Collect the catalog from a built system
    pub fn collect(system: &DesignSystem) -> Result<Self> {
        let ramps = RAMP_NAMES
            .iter()
            .filter_map(|name| colors::ramp(name).map(|ramp| (*name, ramp)))
            .collect();

        let font_sizes = FONT_SIZE_NAMES
            .iter()
            .filter_map(|name| font_size::get(name).map(|size| (*name, size * system.font_scale())))
            .collect();

        let durations = BTreeMap::from([
            ("fast", duration::FAST),
            ("normal", duration::NORMAL),
            ("slow", duration::SLOW),
        ]);

        let effects = GlassLevel::ALL.iter().map(|level| compose_effect(*level)).collect();

        let components = system
            .registry()
            .kinds()
            .map(|kind| collect_entry(system, kind))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ramps,
            font_sizes,
            durations,
            effects,
            components,
        })
    }

    /// Entry for one kind
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentEntry> {
        self.components.iter().find(|entry| entry.kind == kind)
    }
}

fn collect_entry(system: &DesignSystem, kind: ComponentKind) -> Result<ComponentEntry> {
    let descriptor = system.registry().descriptor(kind)?;

    let resolve_all = |category: ModifierCategory| -> Result<BTreeMap<String, ResolvedStyle>> {
        descriptor
            .names(category)
            .map(|name| {
                let style = system.resolve(kind, &[Modifier::new(category, name)])?;
                Ok((name.to_string(), style))
            })
            .collect()
    };

    Ok(ComponentEntry {
        kind,
        base: descriptor.base().clone(),
        variants: resolve_all(ModifierCategory::Variant)?,
        sizes: resolve_all(ModifierCategory::Size)?,
        states: resolve_all(ModifierCategory::State)?,
    })
}
