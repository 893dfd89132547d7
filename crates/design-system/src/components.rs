//! Typed component props
//!
//! View code describes a component with a props struct and asks for its
//! computed styles. Each props type knows which modifiers it maps to, so no
//! caller builds `(category, name)` strings by hand.
//!
//! # Available Components
//!
//! - [`Button`] - pressable with variant, size and state modifiers
//! - [`Card`] - glass content panel
//! - [`Input`] - text field with label and helper/error line
//! - [`Alert`] - tinted inline message with an icon
//! - [`Badge`] - status pill
//! - [`Toggle`], [`Checkbox`], [`Progress`] - form controls
//!
//! ```rust
//! use design_system::components::{Button, ButtonSize, ButtonVariant};
//! use design_system::DesignSystem;
//!
//! let system = DesignSystem::new().unwrap();
//! let styles = Button::new("Save")
//!     .with_variant(ButtonVariant::Success)
//!     .with_size(ButtonSize::Lg)
//!     .computed_styles(&system)
//!     .unwrap();
//! assert!(styles.container.color.background_color.is_some());
//! ```

use crate::colors;
use crate::error::Result;
use crate::registry::{ComponentKind, Modifier};
use crate::style::{Dimension, ResolvedStyle, StyleFragment};
use crate::system::DesignSystem;
use serde::{Deserialize, Serialize};

/// Opacity applied to non-interactive controls
pub const DISABLED_OPACITY: f32 = 0.6;

/// Horizontal travel of the toggle thumb when on
pub const TOGGLE_THUMB_TRAVEL: f32 = 22.0;

// =============================================================================
// Button
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary brand tint
    #[default]
    Primary,
    /// Secondary tint
    Secondary,
    /// Positive action
    Success,
    /// Cautionary action
    Warning,
    /// Destructive action
    Error,
    /// Informational action
    Info,
    /// Barely-there glass
    Ghost,
}

impl ButtonVariant {
    /// Modifier name
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Error => "error",
            ButtonVariant::Info => "info",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
}

impl ButtonSize {
    /// Modifier name
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Xs => "xs",
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
            ButtonSize::Xl => "xl",
        }
    }
}

/// Button props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Label text
    pub label: String,
    /// Visual variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Size step
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether an action is in flight
    #[serde(default)]
    pub loading: bool,
    /// Stretch to the parent's width
    #[serde(default)]
    pub full_width: bool,
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyles {
    /// Pressable surface
    pub container: ResolvedStyle,
    /// Label
    pub text: ResolvedStyle,
    /// Show a spinner instead of the label
    pub show_spinner: bool,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            full_width: false,
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to full width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Whether presses should be handled
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Modifiers in application order: variant, size, then states
    pub fn modifiers(&self) -> Vec<Modifier<'static>> {
        let mut modifiers = vec![
            Modifier::variant(self.variant.as_str()),
            Modifier::size(self.size.as_str()),
        ];
        if self.full_width {
            modifiers.push(Modifier::state("full-width"));
        }
        // loading looks disabled too
        if !self.is_interactive() {
            modifiers.push(Modifier::state("disabled"));
        }
        modifiers
    }

    /// Get the computed styles for this button
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<ButtonStyles> {
        Ok(ButtonStyles {
            container: system.resolve(ComponentKind::Button, &self.modifiers())?,
            text: system.resolve(ComponentKind::ButtonText, &[])?,
            show_spinner: self.loading,
        })
    }
}

// =============================================================================
// Card
// =============================================================================

/// Card variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Base card only
    #[default]
    Default,
    /// Heavier strong-glass card
    Raised,
    /// Subtle card with a faint shadow
    Flat,
    /// Frosted edge card
    Frosted,
    /// Primary accent on the left edge
    Highlight,
}

impl CardVariant {
    /// Modifier name; `None` for the default card
    pub fn as_modifier(&self) -> Option<&'static str> {
        match self {
            CardVariant::Default => None,
            CardVariant::Raised => Some("raised"),
            CardVariant::Flat => Some("flat"),
            CardVariant::Frosted => Some("frosted"),
            CardVariant::Highlight => Some("highlight"),
        }
    }
}

/// Card props
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    /// Visual variant
    #[serde(default)]
    pub variant: CardVariant,
}

impl Card {
    /// Create a card with the given variant
    pub fn new(variant: CardVariant) -> Self {
        Self { variant }
    }

    /// Modifiers for this card
    pub fn modifiers(&self) -> Vec<Modifier<'static>> {
        self.variant.as_modifier().map(Modifier::variant).into_iter().collect()
    }

    /// Get the computed style for this card
    pub fn computed_style(&self, system: &DesignSystem) -> Result<ResolvedStyle> {
        system.resolve(ComponentKind::Card, &self.modifiers())
    }
}

// =============================================================================
// Input
// =============================================================================

/// Text input props
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    /// Label above the field
    pub label: Option<String>,
    /// Helper line below the field
    pub helper_text: Option<String>,
    /// Validation message; replaces the helper line
    pub error: Option<String>,
    /// Whether the field has focus
    pub focused: bool,
    /// Whether the field is read-only
    pub disabled: bool,
    /// Mask the entered text
    pub secure: bool,
    /// Whether masked text is currently revealed
    pub password_visible: bool,
}

/// Which line is shown below the field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum InputFooter {
    /// Helper text
    Helper {
        /// Text to show
        text: String,
        /// Its style
        style: ResolvedStyle,
    },
    /// Error text
    Error {
        /// Text to show
        text: String,
        /// Its style
        style: ResolvedStyle,
    },
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyles {
    /// The text field
    pub field: ResolvedStyle,
    /// Label, when one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<ResolvedStyle>,
    /// Helper or error line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<InputFooter>,
    /// Reveal/mask icon for secure fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_icon: Option<&'static str>,
}

impl Input {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the helper text
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the validation error
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mask input (passwords)
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Reveal masked text
    pub fn password_visible(mut self, visible: bool) -> Self {
        self.password_visible = visible;
        self
    }

    /// Modifiers in application order: focused, error, disabled
    pub fn modifiers(&self) -> Vec<Modifier<'static>> {
        [
            (self.focused, "focused"),
            (self.error.is_some(), "error"),
            (self.disabled, "disabled"),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| Modifier::state(name))
        .collect()
    }

    /// Get the computed styles for this input
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<InputStyles> {
        let field = system.resolve(ComponentKind::Input, &self.modifiers())?;

        let label = match self.label {
            Some(_) => {
                let mut style = system.resolve(ComponentKind::InputLabel, &[])?;
                if self.error.is_some() {
                    style.merge(&StyleFragment::new().text_color(colors::error::MAIN));
                }
                Some(style)
            }
            None => None,
        };

        let footer = match (&self.error, &self.helper_text) {
            (Some(error), _) => Some(InputFooter::Error {
                text: error.clone(),
                style: system.resolve(ComponentKind::InputErrorText, &[])?,
            }),
            (None, Some(helper)) => Some(InputFooter::Helper {
                text: helper.clone(),
                style: system.resolve(ComponentKind::InputHelperText, &[])?,
            }),
            (None, None) => None,
        };

        let visibility_icon = self
            .secure
            .then_some(if self.password_visible { "eye-off" } else { "eye" });

        Ok(InputStyles {
            field,
            label,
            footer,
            visibility_icon,
        })
    }
}

// =============================================================================
// Alert
// =============================================================================

/// Alert kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Operation succeeded
    Success,
    /// Needs attention
    Warning,
    /// Operation failed
    Error,
    /// Neutral information
    #[default]
    Info,
}

impl AlertKind {
    /// Modifier name
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }

    /// Icon glyph name
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "checkmark-circle",
            AlertKind::Warning => "warning",
            AlertKind::Error => "close-circle",
            AlertKind::Info => "information-circle",
        }
    }
}

/// Alert props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Severity
    #[serde(default)]
    pub kind: AlertKind,
    /// Optional bold title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text
    pub message: String,
    /// Show a close control
    #[serde(default)]
    pub dismissible: bool,
}

/// Computed alert styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStyles {
    /// Tinted panel
    pub container: ResolvedStyle,
    /// Icon slot
    pub icon: ResolvedStyle,
    /// Icon glyph name
    pub icon_name: &'static str,
    /// Title, when one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ResolvedStyle>,
    /// Body text
    pub message: ResolvedStyle,
}

impl Alert {
    /// Create an info alert
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::default(),
            title: None,
            message: message.into(),
            dismissible: false,
        }
    }

    /// Set the kind
    pub fn with_kind(mut self, kind: AlertKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Show a close control
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Get the computed styles for this alert
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<AlertStyles> {
        let title = match self.title {
            Some(_) => Some(system.resolve(ComponentKind::AlertTitle, &[])?),
            None => None,
        };
        Ok(AlertStyles {
            container: system
                .resolve(ComponentKind::Alert, &[Modifier::variant(self.kind.as_str())])?,
            icon: system.resolve(ComponentKind::AlertIcon, &[])?,
            icon_name: self.kind.icon(),
            title,
            message: system.resolve(ComponentKind::AlertMessage, &[])?,
        })
    }
}

// =============================================================================
// Badge
// =============================================================================

/// Badge tints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Primary tint
    #[default]
    Primary,
    /// Secondary tint
    Secondary,
    /// Success tint
    Success,
    /// Warning tint
    Warning,
    /// Error tint
    Error,
    /// Info tint
    Info,
}

impl BadgeVariant {
    /// Modifier name
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Info => "info",
        }
    }
}

/// Badge props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Pill text
    pub label: String,
    /// Tint
    #[serde(default)]
    pub variant: BadgeVariant,
}

/// Computed badge styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStyles {
    /// Pill
    pub container: ResolvedStyle,
    /// Pill text
    pub text: ResolvedStyle,
}

impl Badge {
    /// Create a badge
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Get the computed styles for this badge
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<BadgeStyles> {
        Ok(BadgeStyles {
            container: system
                .resolve(ComponentKind::Badge, &[Modifier::variant(self.variant.as_str())])?,
            text: system.resolve(ComponentKind::BadgeText, &[])?,
        })
    }
}

// =============================================================================
// Form Controls
// =============================================================================

/// Tint shared by toggles and checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlVariant {
    /// Primary tint
    #[default]
    Primary,
    /// Secondary tint
    Secondary,
}

impl ControlVariant {
    /// Modifier name
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlVariant::Primary => "primary",
            ControlVariant::Secondary => "secondary",
        }
    }
}

/// Switch props
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Toggle {
    /// Tint when on
    #[serde(default)]
    pub variant: ControlVariant,
    /// Switch position
    #[serde(default)]
    pub on: bool,
}

/// Computed switch styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleStyles {
    /// Track
    pub track: ResolvedStyle,
    /// Thumb
    pub thumb: ResolvedStyle,
    /// Horizontal thumb offset
    pub thumb_offset: f32,
}

impl Toggle {
    /// Create a switch
    pub fn new(variant: ControlVariant, on: bool) -> Self {
        Self { variant, on }
    }

    /// Variant, then `inactive` when off
    pub fn modifiers(&self) -> Vec<Modifier<'static>> {
        let mut modifiers = vec![Modifier::variant(self.variant.as_str())];
        if !self.on {
            modifiers.push(Modifier::state("inactive"));
        }
        modifiers
    }

    /// Get the computed styles for this switch
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<ToggleStyles> {
        Ok(ToggleStyles {
            track: system.resolve(ComponentKind::Toggle, &self.modifiers())?,
            thumb: system.resolve(ComponentKind::ToggleThumb, &[])?,
            thumb_offset: if self.on { TOGGLE_THUMB_TRAVEL } else { 0.0 },
        })
    }
}

/// Checkbox props
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Checkbox {
    /// Tint when checked
    #[serde(default)]
    pub variant: ControlVariant,
    /// Whether the box is ticked
    #[serde(default)]
    pub checked: bool,
}

/// Computed checkbox styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckboxStyles {
    /// The box
    pub container: ResolvedStyle,
    /// Tick, only when checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkmark: Option<ResolvedStyle>,
}

impl Checkbox {
    /// Create a checkbox
    pub fn new(variant: ControlVariant, checked: bool) -> Self {
        Self { variant, checked }
    }

    /// Variant, then `unchecked` when not ticked
    pub fn modifiers(&self) -> Vec<Modifier<'static>> {
        let mut modifiers = vec![Modifier::variant(self.variant.as_str())];
        if !self.checked {
            modifiers.push(Modifier::state("unchecked"));
        }
        modifiers
    }

    /// Get the computed styles for this checkbox
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<CheckboxStyles> {
        let checkmark = if self.checked {
            Some(system.resolve(ComponentKind::CheckboxCheckmark, &[])?)
        } else {
            None
        };
        Ok(CheckboxStyles {
            container: system.resolve(ComponentKind::Checkbox, &self.modifiers())?,
            checkmark,
        })
    }
}

/// Progress tints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressVariant {
    /// Primary tint
    #[default]
    Primary,
    /// Secondary tint
    Secondary,
    /// Success tint
    Success,
    /// Error tint
    Error,
}

impl ProgressVariant {
    /// Modifier name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressVariant::Primary => "primary",
            ProgressVariant::Secondary => "secondary",
            ProgressVariant::Success => "success",
            ProgressVariant::Error => "error",
        }
    }
}

/// Progress bar props
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Tint
    #[serde(default)]
    pub variant: ProgressVariant,
    /// Completion, clamped to `0.0..=1.0`
    #[serde(default)]
    pub value: f32,
}

/// Computed progress styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStyles {
    /// Track
    pub track: ResolvedStyle,
    /// Filled portion
    pub fill: ResolvedStyle,
}

impl Progress {
    /// Create a progress bar; `value` is clamped
    pub fn new(variant: ProgressVariant, value: f32) -> Self {
        Self {
            variant,
            value: clamp_unit(value),
        }
    }

    /// Completion in `0.0..=1.0`
    pub fn fraction(&self) -> f32 {
        clamp_unit(self.value)
    }

    /// Get the computed styles for this progress bar
    pub fn computed_styles(&self, system: &DesignSystem) -> Result<ProgressStyles> {
        let track = system.resolve(ComponentKind::Progress, &[])?;
        let mut fill = system.resolve(
            ComponentKind::Progress,
            &[Modifier::variant(self.variant.as_str())],
        )?;
        fill.merge(&StyleFragment::new().width(Dimension::percent(self.fraction() * 100.0)));
        Ok(ProgressStyles { track, fill })
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModifierCategory;
    use crate::tokens::borders;

    fn system() -> DesignSystem {
        DesignSystem::new().unwrap()
    }

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_defaults() {
        let button = Button::new("Save");
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Md);
        assert!(button.is_interactive());
        assert_eq!(
            button.modifiers(),
            vec![Modifier::variant("primary"), Modifier::size("md")]
        );
    }

    #[test]
    fn test_button_modifier_order() {
        let button = Button::new("Go").full_width(true).disabled(true);
        let categories: Vec<ModifierCategory> =
            button.modifiers().iter().map(|m| m.category).collect();
        assert_eq!(
            categories,
            vec![
                ModifierCategory::Variant,
                ModifierCategory::Size,
                ModifierCategory::State,
                ModifierCategory::State
            ]
        );
        assert_eq!(button.modifiers()[2].name, "full-width");
    }

    #[test]
    fn test_loading_button_looks_disabled() {
        let system = system();
        let styles = Button::new("Wait").loading(true).computed_styles(&system).unwrap();
        assert!(styles.show_spinner);
        assert_eq!(styles.container.color.opacity, Some(DISABLED_OPACITY));
    }

    #[test]
    fn test_full_width_button() {
        let styles = Button::new("Wide").full_width(true).computed_styles(&system()).unwrap();
        assert_eq!(styles.container.layout.width, Some(Dimension::percent(100.0)));
        assert_eq!(styles.container.color.opacity, None);
    }

    #[test]
    fn test_ghost_button() {
        let styles = Button::new("Skip")
            .with_variant(ButtonVariant::Ghost)
            .computed_styles(&system())
            .unwrap();
        assert_eq!(
            styles.container.color.background_color.as_deref(),
            Some("rgba(255, 255, 255, 0.05)")
        );
        assert_eq!(styles.text.text.font_family.as_deref(), Some("Inter-Medium"));
    }

    // ==========================================================================
    // Card & Input Tests
    // ==========================================================================

    #[test]
    fn test_default_card_is_base() {
        let system = system();
        let card = Card::default();
        assert!(card.modifiers().is_empty());
        assert_eq!(
            &card.computed_style(&system).unwrap(),
            system.registry().base(ComponentKind::Card).unwrap()
        );
    }

    #[test]
    fn test_highlight_card() {
        let style = Card::new(CardVariant::Highlight).computed_style(&system()).unwrap();
        assert_eq!(style.border.border_left_width, Some(borders::width::THICK));
        assert_eq!(style.border.border_color.as_deref(), Some(colors::primary::BORDER));
    }

    #[test]
    fn test_input_state_order() {
        let input = Input::new().focused(true).with_error("Required").disabled(true);
        let names: Vec<&str> = input.modifiers().iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["focused", "error", "disabled"]);

        let styles = input.computed_styles(&system()).unwrap();
        // error is applied after focused, so its border wins
        assert_eq!(styles.field.border.border_color.as_deref(), Some(colors::error::MAIN));
        assert_eq!(
            styles.field.color.background_color.as_deref(),
            Some("rgba(255, 255, 255, 0.12)")
        );
        assert_eq!(styles.field.color.opacity, Some(0.6));
    }

    #[test]
    fn test_input_error_replaces_helper() {
        let input = Input::new()
            .with_label("Email")
            .with_helper_text("We never share it")
            .with_error("Invalid email");
        let styles = input.computed_styles(&system()).unwrap();

        match styles.footer {
            Some(InputFooter::Error { ref text, .. }) => assert_eq!(text, "Invalid email"),
            other => panic!("expected error footer, got {:?}", other),
        }
        let label = styles.label.unwrap();
        assert_eq!(label.color.color.as_deref(), Some(colors::error::MAIN));
    }

    #[test]
    fn test_input_helper_and_secure() {
        let input = Input::new().with_helper_text("8+ characters").secure(true);
        let styles = input.computed_styles(&system()).unwrap();
        assert!(matches!(styles.footer, Some(InputFooter::Helper { .. })));
        assert!(styles.label.is_none());
        assert_eq!(styles.visibility_icon, Some("eye"));
    }

    #[test]
    fn test_input_revealed_password() {
        let revealed = Input::new().secure(true).password_visible(true);
        let styles = revealed.computed_styles(&system()).unwrap();
        assert_eq!(styles.visibility_icon, Some("eye-off"));

        let plain = Input::new().password_visible(true);
        assert_eq!(plain.computed_styles(&system()).unwrap().visibility_icon, None);
    }

    // ==========================================================================
    // Alert & Badge Tests
    // ==========================================================================

    #[test]
    fn test_alert_icons() {
        assert_eq!(AlertKind::Success.icon(), "checkmark-circle");
        assert_eq!(AlertKind::Warning.icon(), "warning");
        assert_eq!(AlertKind::Error.icon(), "close-circle");
        assert_eq!(AlertKind::Info.icon(), "information-circle");
        assert_eq!(AlertKind::default(), AlertKind::Info);
    }

    #[test]
    fn test_alert_styles() {
        let alert = Alert::new("Saved").with_kind(AlertKind::Success);
        let styles = alert.computed_styles(&system()).unwrap();
        assert_eq!(
            styles.container.color.background_color.as_deref(),
            Some(colors::success::GLASS)
        );
        assert!(styles.title.is_none());
        assert_eq!(styles.icon_name, "checkmark-circle");

        let titled = alert.with_title("Done").computed_styles(&system()).unwrap();
        assert!(titled.title.is_some());
    }

    #[test]
    fn test_badge_styles() {
        let styles = Badge::new("Paid", BadgeVariant::Success)
            .computed_styles(&system())
            .unwrap();
        assert_eq!(styles.container.border.border_width, Some(borders::width::THIN));
        assert_eq!(styles.container.border.border_radius, Some(borders::radius::FULL));
    }

    // ==========================================================================
    // Control Tests
    // ==========================================================================

    #[test]
    fn test_toggle_off_is_inactive() {
        let system = system();
        let off = Toggle::new(ControlVariant::Primary, false).computed_styles(&system).unwrap();
        assert_eq!(
            off.track.color.background_color.as_deref(),
            Some("rgba(189, 195, 199, 0.3)")
        );
        assert_eq!(off.thumb_offset, 0.0);

        let on = Toggle::new(ControlVariant::Primary, true).computed_styles(&system).unwrap();
        assert_eq!(on.track.color.background_color.as_deref(), Some(colors::primary::GLASS));
        assert_eq!(on.thumb_offset, TOGGLE_THUMB_TRAVEL);
    }

    #[test]
    fn test_checkbox_checkmark_only_when_checked() {
        let system = system();
        let checked = Checkbox::new(ControlVariant::Secondary, true)
            .computed_styles(&system)
            .unwrap();
        assert!(checked.checkmark.is_some());

        let unchecked = Checkbox::new(ControlVariant::Secondary, false)
            .computed_styles(&system)
            .unwrap();
        assert!(unchecked.checkmark.is_none());
        assert_eq!(
            unchecked.container.border.border_color.as_deref(),
            Some("rgba(255, 255, 255, 0.3)")
        );
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(ProgressVariant::Primary, 1.7).fraction(), 1.0);
        assert_eq!(Progress::new(ProgressVariant::Primary, -0.2).fraction(), 0.0);
        assert_eq!(Progress::new(ProgressVariant::Primary, f32::NAN).fraction(), 0.0);

        let styles = Progress::new(ProgressVariant::Success, 0.25)
            .computed_styles(&system())
            .unwrap();
        assert_eq!(styles.fill.layout.width, Some(Dimension::percent(25.0)));
        assert_eq!(
            styles.fill.color.background_color.as_deref(),
            Some(colors::success::GLASS)
        );
        assert_eq!(
            styles.track.color.background_color.as_deref(),
            Some("rgba(255, 255, 255, 0.1)")
        );
    }
}
