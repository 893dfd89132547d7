//! Glass stylesheet
//!
//! Registers the descriptor of every component kind. The returned builder is
//! not yet validated, so configuration can layer extra fragments on top
//! before [`StyleRegistryBuilder::build`] is called.

use crate::colors::{self, glass, neutral, ColorRamp};
use crate::effects::{effect_fragment, GlassLevel};
use crate::error::Result;
use crate::registry::{ComponentKind, ComponentStyleDescriptor, StyleRegistry, StyleRegistryBuilder};
use crate::style::{
    Alignment, Dimension, FlexDirection, JustifyContent, Overflow, StyleFragment, TextAlign,
};
use crate::tokens::{borders, dimension, shadows, spacing};
use crate::typography::{font_family, font_size};

/// Full glass stylesheet, ready to build
pub fn glass_stylesheet() -> StyleRegistryBuilder {
    let builder = StyleRegistry::builder();
    let builder = register_buttons(builder);
    let builder = register_cards(builder);
    let builder = register_inputs(builder);
    let builder = register_modals(builder);
    let builder = register_navigation(builder);
    let builder = register_lists(builder);
    let builder = register_badges(builder);
    let builder = register_alerts(builder);
    register_controls(builder)
}

/// Build the glass stylesheet with no configuration applied
pub fn glass_registry() -> Result<StyleRegistry> {
    glass_stylesheet().build()
}

/// Ramps shared by buttons and badges
const STATUS_RAMPS: [(&str, ColorRamp); 6] = [
    ("primary", colors::primary::RAMP),
    ("secondary", colors::secondary::RAMP),
    ("success", colors::success::RAMP),
    ("warning", colors::warning::RAMP),
    ("error", colors::error::RAMP),
    ("info", colors::info::RAMP),
];

/// Tinted fill and edge from a ramp
fn tinted(ramp: &ColorRamp) -> StyleFragment {
    StyleFragment::new()
        .background_color(ramp.glass)
        .border_color(ramp.border)
}

/// Tinted with a thin outline, for pills and controls
fn outlined(ramp: &ColorRamp) -> StyleFragment {
    tinted(ramp).border_width(borders::width::THIN)
}

fn text(family: &str, size: f32, color: &str) -> StyleFragment {
    StyleFragment::new()
        .font_family(family)
        .font_size(size)
        .text_color(color)
}

// =============================================================================
// Buttons
// =============================================================================

fn register_buttons(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let base = StyleFragment::new()
        .padding_vertical(spacing::SM)
        .padding_horizontal(spacing::MD)
        .border_radius(borders::radius::MD)
        .flex_direction(FlexDirection::Row)
        .align_items(Alignment::Center)
        .justify_content(JustifyContent::Center);

    let mut button = ComponentStyleDescriptor::new(base);
    for (name, ramp) in STATUS_RAMPS.iter() {
        button = button.variant(*name, effect_fragment(GlassLevel::Medium).layer(&tinted(ramp)));
    }
    button = button.variant(
        "ghost",
        effect_fragment(GlassLevel::Subtle).layer(
            &StyleFragment::new()
                .background_color("rgba(255, 255, 255, 0.05)")
                .border_color("rgba(255, 255, 255, 0.15)"),
        ),
    );

    let sizes = [
        ("xs", spacing::XXS, spacing::XS, borders::radius::XS),
        ("sm", spacing::XS, spacing::SM, borders::radius::SM),
        ("md", spacing::SM, spacing::MD, borders::radius::MD),
        ("lg", spacing::MD, spacing::LG, borders::radius::LG),
        ("xl", spacing::LG, spacing::XL, borders::radius::XL),
    ];
    for (name, vertical, horizontal, radius) in sizes {
        button = button.size(
            name,
            StyleFragment::new()
                .padding_vertical(vertical)
                .padding_horizontal(horizontal)
                .border_radius(radius),
        );
    }

    button = button
        .state("full-width", StyleFragment::new().width(Dimension::percent(100.0)))
        .state("disabled", StyleFragment::new().opacity(0.6));

    let label =
        text(font_family::MEDIUM, font_size::MD, neutral::WHITE).text_align(TextAlign::Center);

    builder
        .register(ComponentKind::Button, button)
        .register(ComponentKind::ButtonText, ComponentStyleDescriptor::new(label))
}

// =============================================================================
// Cards
// =============================================================================

fn register_cards(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let base = StyleFragment::new()
        .padding(spacing::MD)
        .margin_vertical(spacing::SM)
        .margin_horizontal(spacing::SM)
        .layer(&effect_fragment(GlassLevel::Medium));

    let card = ComponentStyleDescriptor::new(base)
        .variant(
            "raised",
            effect_fragment(GlassLevel::Strong).padding(spacing::LG),
        )
        .variant(
            "flat",
            effect_fragment(GlassLevel::Subtle).shadow_opacity(0.1),
        )
        .variant(
            "frosted",
            effect_fragment(GlassLevel::Frosted).padding(spacing::LG),
        )
        .variant(
            "highlight",
            effect_fragment(GlassLevel::Medium)
                .border_color(colors::primary::BORDER)
                .border_left_width(borders::width::THICK),
        );

    builder.register(ComponentKind::Card, card)
}

// =============================================================================
// Inputs
// =============================================================================

fn register_inputs(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let base = StyleFragment::new()
        .height(dimension::INPUT_HEIGHT)
        .padding_horizontal(spacing::MD)
        .layer(&effect_fragment(GlassLevel::Subtle))
        .background_color("rgba(255, 255, 255, 0.08)")
        .text_color(neutral::WHITE)
        .font_size(font_size::MD)
        .font_family(font_family::REGULAR);

    let input = ComponentStyleDescriptor::new(base)
        .state(
            "focused",
            StyleFragment::new()
                .border_color(colors::primary::MAIN)
                .background_color("rgba(255, 255, 255, 0.12)"),
        )
        .state("error", StyleFragment::new().border_color(colors::error::MAIN))
        .state("disabled", StyleFragment::new().opacity(0.6));

    let label = text(font_family::MEDIUM, font_size::SM, neutral::LIGHT).margin_bottom(spacing::XS);
    let helper = text(font_family::REGULAR, font_size::XS, neutral::MEDIUM).margin_top(spacing::XS);
    let error =
        text(font_family::MEDIUM, font_size::XS, colors::error::MAIN).margin_top(spacing::XS);

    builder
        .register(ComponentKind::Input, input)
        .register(ComponentKind::InputLabel, ComponentStyleDescriptor::new(label))
        .register(ComponentKind::InputHelperText, ComponentStyleDescriptor::new(helper))
        .register(ComponentKind::InputErrorText, ComponentStyleDescriptor::new(error))
}

// =============================================================================
// Modals
// =============================================================================

fn register_modals(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let backdrop = StyleFragment::new()
        .flex(1.0)
        .background_color("rgba(0, 0, 0, 0.5)")
        .backdrop_filter("blur(5px)")
        .justify_content(JustifyContent::Center)
        .align_items(Alignment::Center);

    let container = StyleFragment::new()
        .width(Dimension::percent(85.0))
        .max_width(dimension::MODAL_MAX_WIDTH)
        .max_height(Dimension::percent(80.0))
        .layer(&effect_fragment(GlassLevel::Strong))
        .padding(0.0)
        .overflow(Overflow::Hidden);

    let header = StyleFragment::new()
        .flex_direction(FlexDirection::Row)
        .justify_content(JustifyContent::SpaceBetween)
        .align_items(Alignment::Center)
        .padding_horizontal(spacing::LG)
        .padding_vertical(spacing::MD)
        .border_bottom_width(borders::width::THIN)
        .border_bottom_color(glass::DIVIDER);

    let title = text(font_family::SEMI_BOLD, font_size::XL2, neutral::WHITE);

    let footer = StyleFragment::new()
        .flex_direction(FlexDirection::Row)
        .justify_content(JustifyContent::FlexEnd)
        .padding(spacing::MD)
        .border_top_width(borders::width::THIN)
        .border_top_color(glass::DIVIDER);

    builder
        .register(ComponentKind::ModalBackdrop, ComponentStyleDescriptor::new(backdrop))
        .register(ComponentKind::ModalContainer, ComponentStyleDescriptor::new(container))
        .register(ComponentKind::ModalHeader, ComponentStyleDescriptor::new(header))
        .register(ComponentKind::ModalTitle, ComponentStyleDescriptor::new(title))
        .register(
            ComponentKind::ModalContent,
            ComponentStyleDescriptor::new(StyleFragment::new().padding(spacing::LG)),
        )
        .register(ComponentKind::ModalFooter, ComponentStyleDescriptor::new(footer))
}

// =============================================================================
// Navigation Chrome
// =============================================================================

fn register_navigation(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let tab_bar = effect_fragment(GlassLevel::Strong)
        .height(dimension::BAR_HEIGHT)
        .padding_bottom(spacing::XS)
        .border_top_width(0.0);

    let drawer = effect_fragment(GlassLevel::Blurred).width(dimension::DRAWER_WIDTH);

    let drawer_item = StyleFragment::new()
        .padding(spacing::MD)
        .margin_vertical(spacing::XS)
        .margin_horizontal(spacing::SM)
        .border_radius(borders::radius::SM);

    let header = effect_fragment(GlassLevel::Frosted)
        .height(dimension::BAR_HEIGHT)
        .border_bottom_width(0.0);

    builder
        .register(ComponentKind::TabBar, ComponentStyleDescriptor::new(tab_bar))
        .register(
            ComponentKind::TabBarItem,
            ComponentStyleDescriptor::new(StyleFragment::new().padding_top(spacing::XS)),
        )
        .register(
            ComponentKind::TabBarLabel,
            ComponentStyleDescriptor::new(
                StyleFragment::new()
                    .font_family(font_family::MEDIUM)
                    .font_size(font_size::XS),
            ),
        )
        .register(ComponentKind::Drawer, ComponentStyleDescriptor::new(drawer))
        .register(ComponentKind::DrawerItem, ComponentStyleDescriptor::new(drawer_item))
        .register(
            ComponentKind::DrawerLabel,
            ComponentStyleDescriptor::new(text(font_family::MEDIUM, font_size::MD, neutral::WHITE)),
        )
        .register(ComponentKind::NavHeader, ComponentStyleDescriptor::new(header))
        .register(
            ComponentKind::NavHeaderTitle,
            ComponentStyleDescriptor::new(text(
                font_family::SEMI_BOLD,
                font_size::LG,
                neutral::WHITE,
            )),
        )
}

// =============================================================================
// Lists
// =============================================================================

fn register_lists(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let item = effect_fragment(GlassLevel::Subtle)
        .padding(spacing::MD)
        .margin_vertical(spacing::XS)
        .margin_horizontal(spacing::SM)
        .flex_direction(FlexDirection::Row)
        .align_items(Alignment::Center);

    let separator = StyleFragment::new()
        .height(Dimension::px(1.0))
        .background_color(glass::DIVIDER)
        .margin_left(spacing::LG);

    builder
        .register(
            ComponentKind::ListContainer,
            ComponentStyleDescriptor::new(StyleFragment::new().margin_vertical(spacing::SM)),
        )
        .register(ComponentKind::ListItem, ComponentStyleDescriptor::new(item))
        .register(ComponentKind::ListSeparator, ComponentStyleDescriptor::new(separator))
        .register(
            ComponentKind::ListTitle,
            ComponentStyleDescriptor::new(text(font_family::MEDIUM, font_size::MD, neutral::WHITE)),
        )
        .register(
            ComponentKind::ListSubtitle,
            ComponentStyleDescriptor::new(
                text(font_family::REGULAR, font_size::SM, neutral::LIGHT).margin_top(spacing::XXS),
            ),
        )
}

// =============================================================================
// Badges & Alerts
// =============================================================================

fn register_badges(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let base = StyleFragment::new()
        .padding_horizontal(spacing::XS)
        .padding_vertical(spacing::XXS)
        .border_radius(borders::radius::FULL)
        .align_self(Alignment::FlexStart);

    let mut badge = ComponentStyleDescriptor::new(base);
    for (name, ramp) in STATUS_RAMPS.iter() {
        badge = badge.variant(*name, outlined(ramp));
    }

    builder.register(ComponentKind::Badge, badge).register(
        ComponentKind::BadgeText,
        ComponentStyleDescriptor::new(text(font_family::MEDIUM, font_size::XS, neutral::WHITE)),
    )
}

fn register_alerts(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let base = effect_fragment(GlassLevel::Strong)
        .padding_horizontal(spacing::MD)
        .padding_vertical(spacing::SM)
        .margin_vertical(spacing::SM)
        .margin_horizontal(spacing::MD)
        .flex_direction(FlexDirection::Row)
        .align_items(Alignment::Center);

    let mut alert = ComponentStyleDescriptor::new(base);
    for (name, ramp) in [
        ("success", colors::success::RAMP),
        ("warning", colors::warning::RAMP),
        ("error", colors::error::RAMP),
        ("info", colors::info::RAMP),
    ] {
        alert = alert.variant(name, tinted(&ramp).border_left_width(borders::width::THICK));
    }

    builder
        .register(ComponentKind::Alert, alert)
        .register(
            ComponentKind::AlertTitle,
            ComponentStyleDescriptor::new(text(
                font_family::SEMI_BOLD,
                font_size::MD,
                neutral::WHITE,
            )),
        )
        .register(
            ComponentKind::AlertMessage,
            ComponentStyleDescriptor::new(
                text(font_family::REGULAR, font_size::SM, neutral::LIGHT).margin_top(spacing::XXS),
            ),
        )
        .register(
            ComponentKind::AlertIcon,
            ComponentStyleDescriptor::new(StyleFragment::new().margin_right(spacing::SM)),
        )
}

// =============================================================================
// Controls (toggle, checkbox, progress, tooltip)
// =============================================================================

fn register_controls(builder: StyleRegistryBuilder) -> StyleRegistryBuilder {
    let toggle = ComponentStyleDescriptor::new(
        StyleFragment::new()
            .width(dimension::TOGGLE_WIDTH)
            .height(dimension::TOGGLE_HEIGHT)
            .border_radius(borders::radius::FULL)
            .padding(2.0),
    )
    .variant("primary", outlined(&colors::primary::RAMP))
    .variant("secondary", outlined(&colors::secondary::RAMP))
    .state(
        "inactive",
        StyleFragment::new()
            .background_color("rgba(189, 195, 199, 0.3)")
            .border_color("rgba(189, 195, 199, 0.5)"),
    );

    let thumb = StyleFragment::new()
        .width(dimension::TOGGLE_THUMB)
        .height(dimension::TOGGLE_THUMB)
        .border_radius(borders::radius::FULL)
        .background_color(neutral::WHITE)
        .shadow_preset(shadows::SM);

    let checkbox = ComponentStyleDescriptor::new(
        StyleFragment::new()
            .width(dimension::CHECKBOX)
            .height(dimension::CHECKBOX)
            .border_radius(borders::radius::XS)
            .justify_content(JustifyContent::Center)
            .align_items(Alignment::Center)
            .margin_right(spacing::XS),
    )
    .variant("primary", outlined(&colors::primary::RAMP))
    .variant("secondary", outlined(&colors::secondary::RAMP))
    .state(
        "unchecked",
        StyleFragment::new()
            .background_color("rgba(255, 255, 255, 0.08)")
            .border_color("rgba(255, 255, 255, 0.3)")
            .border_width(borders::width::THIN),
    );

    let mut progress = ComponentStyleDescriptor::new(
        StyleFragment::new()
            .height(dimension::PROGRESS_HEIGHT)
            .border_radius(borders::radius::FULL)
            .background_color("rgba(255, 255, 255, 0.1)")
            .overflow(Overflow::Hidden),
    );
    for (name, ramp) in [
        ("primary", colors::primary::RAMP),
        ("secondary", colors::secondary::RAMP),
        ("success", colors::success::RAMP),
        ("error", colors::error::RAMP),
    ] {
        progress = progress.variant(name, StyleFragment::new().background_color(ramp.glass));
    }

    let tooltip = effect_fragment(GlassLevel::Strong)
        .padding_horizontal(spacing::SM)
        .padding_vertical(spacing::XS)
        .border_radius(borders::radius::SM)
        .max_width(dimension::TOOLTIP_MAX_WIDTH);

    let arrow = StyleFragment::new()
        .width(dimension::TOOLTIP_ARROW)
        .height(dimension::TOOLTIP_ARROW)
        .background_color(glass::OVERLAY);

    builder
        .register(ComponentKind::Toggle, toggle)
        .register(ComponentKind::ToggleThumb, ComponentStyleDescriptor::new(thumb))
        .register(ComponentKind::Checkbox, checkbox)
        .register(
            ComponentKind::CheckboxCheckmark,
            ComponentStyleDescriptor::new(StyleFragment::new().text_color(neutral::WHITE)),
        )
        .register(ComponentKind::Progress, progress)
        .register(ComponentKind::Tooltip, ComponentStyleDescriptor::new(tooltip))
        .register(ComponentKind::TooltipArrow, ComponentStyleDescriptor::new(arrow))
        .register(
            ComponentKind::TooltipText,
            ComponentStyleDescriptor::new(text(
                font_family::REGULAR,
                font_size::XS,
                neutral::WHITE,
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModifierCategory;

    #[test]
    fn test_every_kind_is_registered() {
        let registry = glass_registry().unwrap();
        assert_eq!(registry.len(), ComponentKind::ALL.len());
        for kind in ComponentKind::ALL {
            assert!(registry.contains(kind), "{} missing", kind);
        }
    }

    #[test]
    fn test_button_tables() {
        let registry = glass_registry().unwrap();
        let button = registry.descriptor(ComponentKind::Button).unwrap();
        assert_eq!(
            button.names(ModifierCategory::Variant).collect::<Vec<_>>(),
            vec!["error", "ghost", "info", "primary", "secondary", "success", "warning"]
        );
        assert_eq!(button.names(ModifierCategory::Size).count(), 5);

        let primary = button.fragment(ModifierCategory::Variant, "primary").unwrap();
        assert_eq!(primary.color.background_color.as_deref(), Some(colors::primary::GLASS));
        assert_eq!(primary.border.border_color.as_deref(), Some(colors::primary::BORDER));
        assert!(primary.shadow.is_complete());
    }

    #[test]
    fn test_card_variants_carry_effects() {
        let registry = glass_registry().unwrap();
        let raised = registry
            .get_fragment(ComponentKind::Card, ModifierCategory::Variant, "raised")
            .unwrap()
            .unwrap();
        assert_eq!(raised.color.background_color.as_deref(), Some(glass::OVERLAY));
        assert_eq!(raised.spacing.padding, Some(spacing::LG));

        let flat = registry
            .get_fragment(ComponentKind::Card, ModifierCategory::Variant, "flat")
            .unwrap()
            .unwrap();
        assert_eq!(flat.shadow.shadow_opacity, Some(0.1));
        assert_eq!(flat.shadow.shadow_radius, Some(shadows::SM.radius));

        assert!(registry
            .get_fragment(ComponentKind::Card, ModifierCategory::Variant, "default")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_input_base_overrides_glass_fill() {
        let registry = glass_registry().unwrap();
        let base = registry.base(ComponentKind::Input).unwrap();
        assert_eq!(base.color.background_color.as_deref(), Some("rgba(255, 255, 255, 0.08)"));
        assert_eq!(base.border.border_color.as_deref(), Some(glass::BORDER));
        assert_eq!(base.layout.height, Some(Dimension::px(48.0)));
    }

    #[test]
    fn test_modal_container_padding_zero_after_effect() {
        let registry = glass_registry().unwrap();
        let container = registry.base(ComponentKind::ModalContainer).unwrap();
        assert_eq!(container.spacing.padding, Some(0.0));
        assert_eq!(container.layout.overflow, Some(Overflow::Hidden));
        assert_eq!(container.layout.width, Some(Dimension::percent(85.0)));
    }

    #[test]
    fn test_chrome_overrides_effect_edges() {
        let registry = glass_registry().unwrap();
        let tab_bar = registry.base(ComponentKind::TabBar).unwrap();
        assert_eq!(tab_bar.border.border_top_width, Some(0.0));
        assert_eq!(tab_bar.border.border_width, Some(borders::width::REGULAR));

        let drawer = registry.base(ComponentKind::Drawer).unwrap();
        assert_eq!(drawer.color.backdrop_filter.as_deref(), Some("blur(10px)"));
        assert_eq!(drawer.layout.width, Some(Dimension::px(280.0)));

        let header = registry.base(ComponentKind::NavHeader).unwrap();
        assert_eq!(header.border.border_bottom_width, Some(0.0));
    }

    #[test]
    fn test_controls_states() {
        let registry = glass_registry().unwrap();
        assert!(registry
            .get_fragment(ComponentKind::Toggle, ModifierCategory::State, "inactive")
            .unwrap()
            .is_some());
        assert!(registry
            .get_fragment(ComponentKind::Checkbox, ModifierCategory::State, "unchecked")
            .unwrap()
            .is_some());
        assert!(registry
            .get_fragment(ComponentKind::Progress, ModifierCategory::Variant, "warning")
            .unwrap()
            .is_none());
        assert!(registry.base(ComponentKind::ToggleThumb).unwrap().shadow.is_complete());
    }
}
