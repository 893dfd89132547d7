//! Style composer
//!
//! Folds a kind's base fragment with the caller's modifiers, in order.
//! A modifier with no fragment is skipped and leaves the accumulator as it
//! was; an unregistered kind is an error.

use crate::error::Result;
use crate::registry::{ComponentKind, Modifier, ModifierCategory, StyleRegistry};
use crate::style::ResolvedStyle;
use tracing::debug;

/// Resolve the style of `kind` with `modifiers` applied left to right
pub fn resolve(
    registry: &StyleRegistry,
    kind: ComponentKind,
    modifiers: &[Modifier<'_>],
) -> Result<ResolvedStyle> {
    let descriptor = registry.descriptor(kind)?;

    let resolved = modifiers
        .iter()
        .fold(descriptor.base().clone(), |mut acc, modifier| {
            match descriptor.fragment(modifier.category, modifier.name) {
                Some(fragment) => acc.merge(fragment),
                None => debug!("No {} fragment for {}, skipping", modifier, kind),
            }
            acc
        });

    Ok(resolved)
}

/// Resolve from string names, e.g. `("variant", "primary")`
///
/// Kind and category names are parsed first, so a misspelled kind or
/// category is reported as an error rather than silently skipped.
pub fn resolve_named(
    registry: &StyleRegistry,
    kind: &str,
    modifiers: &[(&str, &str)],
) -> Result<ResolvedStyle> {
    let kind: ComponentKind = kind.parse()?;
    let modifiers = modifiers
        .iter()
        .map(|(category, name)| {
            category
                .parse::<ModifierCategory>()
                .map(|category| Modifier::new(category, name))
        })
        .collect::<Result<Vec<_>>>()?;

    resolve(registry, kind, &modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::error::ConfigError;
    use crate::registry::ComponentStyleDescriptor;
    use crate::style::StyleFragment;
    use crate::stylesheet::glass_registry;
    use crate::tokens::{borders, spacing};

    fn chip_registry() -> StyleRegistry {
        StyleRegistry::builder()
            .register(
                ComponentKind::Badge,
                ComponentStyleDescriptor::new(StyleFragment::new().padding(2.0).border_radius(4.0))
                    .variant("info", StyleFragment::new().border_radius(8.0).opacity(0.9))
                    .size("lg", StyleFragment::new().border_radius(12.0))
                    .state("disabled", StyleFragment::new().opacity(0.5)),
            )
            .build()
            .unwrap()
    }

    // ==========================================================================
    // Fold Semantics
    // ==========================================================================

    #[test]
    fn test_base_only() {
        let registry = chip_registry();
        let resolved = resolve(&registry, ComponentKind::Badge, &[]).unwrap();
        assert_eq!(&resolved, registry.base(ComponentKind::Badge).unwrap());
    }

    #[test]
    fn test_later_modifier_wins() {
        let registry = chip_registry();
        let resolved = resolve(
            &registry,
            ComponentKind::Badge,
            &[Modifier::variant("info"), Modifier::size("lg")],
        )
        .unwrap();
        assert_eq!(resolved.border.border_radius, Some(12.0));
        assert_eq!(resolved.color.opacity, Some(0.9));
        assert_eq!(resolved.spacing.padding, Some(2.0));

        let reversed = resolve(
            &registry,
            ComponentKind::Badge,
            &[Modifier::size("lg"), Modifier::variant("info")],
        )
        .unwrap();
        assert_eq!(reversed.border.border_radius, Some(8.0));
    }

    #[test]
    fn test_unknown_modifier_is_noop() {
        let registry = chip_registry();
        let plain = resolve(&registry, ComponentKind::Badge, &[]).unwrap();
        let unknown = resolve(
            &registry,
            ComponentKind::Badge,
            &[Modifier::variant("doesNotExist")],
        )
        .unwrap();
        assert_eq!(plain, unknown);
    }

    #[test]
    fn test_unknown_modifier_between_known_ones() {
        let registry = chip_registry();
        let with_gap = resolve(
            &registry,
            ComponentKind::Badge,
            &[Modifier::variant("info"), Modifier::size("huge"), Modifier::state("disabled")],
        )
        .unwrap();
        let without = resolve(
            &registry,
            ComponentKind::Badge,
            &[Modifier::variant("info"), Modifier::state("disabled")],
        )
        .unwrap();
        assert_eq!(with_gap, without);
        assert_eq!(with_gap.color.opacity, Some(0.5));
    }

    #[test]
    fn test_name_in_wrong_category_is_skipped() {
        let registry = chip_registry();
        let resolved = resolve(&registry, ComponentKind::Badge, &[Modifier::state("lg")]).unwrap();
        assert_eq!(resolved.border.border_radius, Some(4.0));
    }

    #[test]
    fn test_unregistered_kind_is_error() {
        let registry = chip_registry();
        let err = resolve(&registry, ComponentKind::Tooltip, &[]).unwrap_err();
        assert!(matches!(err, ConfigError::UnregisteredKind(ComponentKind::Tooltip)));
    }

    #[test]
    fn test_deterministic() {
        let registry = glass_registry().unwrap();
        let modifiers = [
            Modifier::variant("success"),
            Modifier::size("sm"),
            Modifier::state("disabled"),
        ];
        let first = resolve(&registry, ComponentKind::Button, &modifiers).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve(&registry, ComponentKind::Button, &modifiers).unwrap(), first);
        }
    }

    // ==========================================================================
    // Named Resolution
    // ==========================================================================

    #[test]
    fn test_resolve_named_matches_typed() {
        let registry = glass_registry().unwrap();
        let named =
            resolve_named(&registry, "button", &[("variant", "primary"), ("size", "lg")]).unwrap();
        let typed = resolve(
            &registry,
            ComponentKind::Button,
            &[Modifier::variant("primary"), Modifier::size("lg")],
        )
        .unwrap();
        assert_eq!(named, typed);
    }

    #[test]
    fn test_resolve_named_rejects_unknown_kind_and_category() {
        let registry = glass_registry().unwrap();
        assert!(matches!(
            resolve_named(&registry, "carousel", &[]),
            Err(ConfigError::UnknownKind(_))
        ));
        assert!(matches!(
            resolve_named(&registry, "button", &[("shape", "round")]),
            Err(ConfigError::UnknownCategory(_))
        ));
    }

    // ==========================================================================
    // Scenarios
    // ==========================================================================

    #[test]
    fn test_primary_large_button() {
        let registry = glass_registry().unwrap();
        let style = resolve(
            &registry,
            ComponentKind::Button,
            &[Modifier::variant("primary"), Modifier::size("lg")],
        )
        .unwrap();

        assert_eq!(style.color.background_color.as_deref(), Some(colors::primary::GLASS));
        assert_eq!(style.border.border_color.as_deref(), Some(colors::primary::BORDER));
        assert_eq!(style.spacing.padding_vertical, Some(spacing::MD));
        assert_eq!(style.spacing.padding_horizontal, Some(spacing::LG));
        assert_eq!(style.border.border_radius, Some(borders::radius::LG));
    }

    #[test]
    fn test_small_size_overrides_variant_radius() {
        let registry = glass_registry().unwrap();
        let style =
            resolve_named(&registry, "button", &[("variant", "primary"), ("size", "sm")]).unwrap();
        // medium glass sets radius lg, the size applied after it wins
        assert_eq!(style.border.border_radius, Some(borders::radius::SM));
    }

    #[test]
    fn test_error_alert() {
        let registry = glass_registry().unwrap();
        let style =
            resolve(&registry, ComponentKind::Alert, &[Modifier::variant("error")]).unwrap();
        assert_eq!(style.border.border_left_width, Some(borders::width::THICK));
        assert_eq!(style.color.background_color.as_deref(), Some(colors::error::GLASS));
        assert_eq!(style.border.border_color.as_deref(), Some(colors::error::BORDER));
    }
}
