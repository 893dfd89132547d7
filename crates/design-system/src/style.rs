//! Style fragments and the ordered merge
//!
//! A [`StyleFragment`] is a partial style: every key is optional. Keys are
//! grouped by style domain (color, spacing, border, shadow, layout, text) and
//! each domain owns its merge, so precedence can be checked per domain.
//!
//! Merging is shallow and last-write-wins per key: a key set in the later
//! fragment replaces the earlier value, a key left unset keeps it.
//!
//! ```rust
//! use design_system::style::StyleFragment;
//!
//! let base = StyleFragment::new().padding_vertical(8.0).border_radius(8.0);
//! let large = StyleFragment::new().padding_vertical(16.0);
//!
//! let merged = base.layer(&large);
//! assert_eq!(merged.spacing.padding_vertical, Some(16.0));
//! assert_eq!(merged.border.border_radius, Some(8.0));
//! ```

use crate::tokens::{Shadow, ShadowOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Overwrite `slot` when `value` is set
fn overlay<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

// =============================================================================
// Value Types
// =============================================================================

/// Dimension value (pixels or percentage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent, e.g. `"85%"`
    Percent(String),
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Pixels(value)
    }
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    Column,
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
    /// Stretch to fill
    Stretch,
}

/// Main-axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack at start
    FlexStart,
    /// Center
    Center,
    /// Pack at end
    FlexEnd,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// Overflow behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Content may draw outside the bounds
    Visible,
    /// Content is clipped
    Hidden,
}

// =============================================================================
// Style Domains
// =============================================================================

/// Fill, text color and translucency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorStyle {
    /// Background fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Foreground (text/icon) color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Backdrop filter, e.g. `blur(10px)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
}

impl ColorStyle {
    /// Overlay every key set in `other`
    pub fn merge_from(&mut self, other: &ColorStyle) {
        overlay(&mut self.background_color, &other.background_color);
        overlay(&mut self.color, &other.color);
        overlay(&mut self.opacity, &other.opacity);
        overlay(&mut self.backdrop_filter, &other.backdrop_filter);
    }
}

/// Padding and margins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingStyle {
    /// Padding on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Top and bottom padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    /// Left and right padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    /// Top padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    /// Bottom padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    /// Top and bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    /// Left and right margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<f32>,
    /// Top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Left margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
    /// Right margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
}

impl SpacingStyle {
    /// Overlay every key set in `other`
    pub fn merge_from(&mut self, other: &SpacingStyle) {
        overlay(&mut self.padding, &other.padding);
        overlay(&mut self.padding_vertical, &other.padding_vertical);
        overlay(&mut self.padding_horizontal, &other.padding_horizontal);
        overlay(&mut self.padding_top, &other.padding_top);
        overlay(&mut self.padding_bottom, &other.padding_bottom);
        overlay(&mut self.margin_vertical, &other.margin_vertical);
        overlay(&mut self.margin_horizontal, &other.margin_horizontal);
        overlay(&mut self.margin_top, &other.margin_top);
        overlay(&mut self.margin_bottom, &other.margin_bottom);
        overlay(&mut self.margin_left, &other.margin_left);
        overlay(&mut self.margin_right, &other.margin_right);
    }
}

/// Stroke widths, colors and corner radius
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderStyle {
    /// Width on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Top width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<f32>,
    /// Right width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right_width: Option<f32>,
    /// Bottom width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    /// Left width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<f32>,
    /// Color on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Top color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_color: Option<String>,
    /// Bottom color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<String>,
    /// Corner radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
}

impl BorderStyle {
    /// Overlay every key set in `other`
    pub fn merge_from(&mut self, other: &BorderStyle) {
        overlay(&mut self.border_width, &other.border_width);
        overlay(&mut self.border_top_width, &other.border_top_width);
        overlay(&mut self.border_right_width, &other.border_right_width);
        overlay(&mut self.border_bottom_width, &other.border_bottom_width);
        overlay(&mut self.border_left_width, &other.border_left_width);
        overlay(&mut self.border_color, &other.border_color);
        overlay(&mut self.border_top_color, &other.border_top_color);
        overlay(&mut self.border_bottom_color, &other.border_bottom_color);
        overlay(&mut self.border_radius, &other.border_radius);
    }
}

/// Native shadow parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowStyle {
    /// Shadow color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    /// Shadow offset (replaced as a whole)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<ShadowOffset>,
    /// Shadow opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f32>,
    /// Shadow blur radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f32>,
    /// Android elevation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
}

impl ShadowStyle {
    /// Overlay every key set in `other`
    pub fn merge_from(&mut self, other: &ShadowStyle) {
        overlay(&mut self.shadow_color, &other.shadow_color);
        overlay(&mut self.shadow_offset, &other.shadow_offset);
        overlay(&mut self.shadow_opacity, &other.shadow_opacity);
        overlay(&mut self.shadow_radius, &other.shadow_radius);
        overlay(&mut self.elevation, &other.elevation);
    }

    /// Whether all five shadow keys are set
    pub fn is_complete(&self) -> bool {
        self.shadow_color.is_some()
            && self.shadow_offset.is_some()
            && self.shadow_opacity.is_some()
            && self.shadow_radius.is_some()
            && self.elevation.is_some()
    }
}

/// Size and flex layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutStyle {
    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Maximum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    /// Maximum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    /// Flex grow shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Flex direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// Cross-axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Cross-axis alignment of self
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    /// Main-axis distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Overflow clipping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
}

impl LayoutStyle {
    /// Overlay every key set in `other`
    pub fn merge_from(&mut self, other: &LayoutStyle) {
        overlay(&mut self.width, &other.width);
        overlay(&mut self.height, &other.height);
        overlay(&mut self.max_width, &other.max_width);
        overlay(&mut self.max_height, &other.max_height);
        overlay(&mut self.flex, &other.flex);
        overlay(&mut self.flex_direction, &other.flex_direction);
        overlay(&mut self.align_items, &other.align_items);
        overlay(&mut self.align_self, &other.align_self);
        overlay(&mut self.justify_content, &other.justify_content);
        overlay(&mut self.overflow, &other.overflow);
    }
}

/// Font and text layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight (300 - 700)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Line height multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Letter spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Text alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl TextStyle {
    /// Overlay every key set in `other`
    pub fn merge_from(&mut self, other: &TextStyle) {
        overlay(&mut self.font_family, &other.font_family);
        overlay(&mut self.font_size, &other.font_size);
        overlay(&mut self.font_weight, &other.font_weight);
        overlay(&mut self.line_height, &other.line_height);
        overlay(&mut self.letter_spacing, &other.letter_spacing);
        overlay(&mut self.text_align, &other.text_align);
    }
}

// =============================================================================
// Style Fragment
// =============================================================================

/// A partial style, serialized as a flat camelCase property bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFragment {
    /// Fill and translucency keys
    #[serde(flatten)]
    pub color: ColorStyle,
    /// Padding and margin keys
    #[serde(flatten)]
    pub spacing: SpacingStyle,
    /// Border keys
    #[serde(flatten)]
    pub border: BorderStyle,
    /// Shadow keys
    #[serde(flatten)]
    pub shadow: ShadowStyle,
    /// Size and flex keys
    #[serde(flatten)]
    pub layout: LayoutStyle,
    /// Font keys
    #[serde(flatten)]
    pub text: TextStyle,
    /// Keys no domain recognised while deserializing
    #[serde(flatten)]
    pub(crate) unknown: Map<String, Value>,
}

/// The merged style handed to the rendering layer
pub type ResolvedStyle = StyleFragment;

impl StyleFragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` into this fragment, domain by domain
    pub fn merge(&mut self, other: &StyleFragment) {
        self.color.merge_from(&other.color);
        self.spacing.merge_from(&other.spacing);
        self.border.merge_from(&other.border);
        self.shadow.merge_from(&other.shadow);
        self.layout.merge_from(&other.layout);
        self.text.merge_from(&other.text);
    }

    /// Builder form of [`merge`](Self::merge): `other` wins on shared keys
    pub fn layer(mut self, other: &StyleFragment) -> Self {
        self.merge(other);
        self
    }

    /// Whether no key is set
    pub fn is_empty(&self) -> bool {
        self == &StyleFragment::default()
    }

    /// Multiply the font size, if any, by `factor`
    pub fn scale_fonts(&mut self, factor: f32) {
        if let Some(size) = self.text.font_size.as_mut() {
            *size *= factor;
        }
    }

    /// Keys that were present in deserialized input but match no style key
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    /// Flatten into the property bag consumed by the rendering layer
    pub fn to_properties(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            other => unreachable!("style fragment serialized to {:?}", other),
        }
    }

    /// Names of every key that is set, in camelCase
    pub fn keys(&self) -> Vec<String> {
        self.to_properties().keys().cloned().collect()
    }

    // -------------------------------------------------------------------------
    // Color setters
    // -------------------------------------------------------------------------

    /// Set the background fill
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.color.background_color = Some(color.into());
        self
    }

    /// Set the foreground color
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.color.color = Some(color.into());
        self
    }

    /// Set the opacity
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.color.opacity = Some(opacity);
        self
    }

    /// Set the backdrop filter
    pub fn backdrop_filter(mut self, filter: impl Into<String>) -> Self {
        self.color.backdrop_filter = Some(filter.into());
        self
    }

    // -------------------------------------------------------------------------
    // Spacing setters
    // -------------------------------------------------------------------------

    /// Set padding on all sides
    pub fn padding(mut self, value: f32) -> Self {
        self.spacing.padding = Some(value);
        self
    }

    /// Set top and bottom padding
    pub fn padding_vertical(mut self, value: f32) -> Self {
        self.spacing.padding_vertical = Some(value);
        self
    }

    /// Set left and right padding
    pub fn padding_horizontal(mut self, value: f32) -> Self {
        self.spacing.padding_horizontal = Some(value);
        self
    }

    /// Set top padding
    pub fn padding_top(mut self, value: f32) -> Self {
        self.spacing.padding_top = Some(value);
        self
    }

    /// Set bottom padding
    pub fn padding_bottom(mut self, value: f32) -> Self {
        self.spacing.padding_bottom = Some(value);
        self
    }

    /// Set top and bottom margin
    pub fn margin_vertical(mut self, value: f32) -> Self {
        self.spacing.margin_vertical = Some(value);
        self
    }

    /// Set left and right margin
    pub fn margin_horizontal(mut self, value: f32) -> Self {
        self.spacing.margin_horizontal = Some(value);
        self
    }

    /// Set top margin
    pub fn margin_top(mut self, value: f32) -> Self {
        self.spacing.margin_top = Some(value);
        self
    }

    /// Set bottom margin
    pub fn margin_bottom(mut self, value: f32) -> Self {
        self.spacing.margin_bottom = Some(value);
        self
    }

    /// Set left margin
    pub fn margin_left(mut self, value: f32) -> Self {
        self.spacing.margin_left = Some(value);
        self
    }

    /// Set right margin
    pub fn margin_right(mut self, value: f32) -> Self {
        self.spacing.margin_right = Some(value);
        self
    }

    // -------------------------------------------------------------------------
    // Border setters
    // -------------------------------------------------------------------------

    /// Set width on all sides
    pub fn border_width(mut self, value: f32) -> Self {
        self.border.border_width = Some(value);
        self
    }

    /// Set top width
    pub fn border_top_width(mut self, value: f32) -> Self {
        self.border.border_top_width = Some(value);
        self
    }

    /// Set right width
    pub fn border_right_width(mut self, value: f32) -> Self {
        self.border.border_right_width = Some(value);
        self
    }

    /// Set bottom width
    pub fn border_bottom_width(mut self, value: f32) -> Self {
        self.border.border_bottom_width = Some(value);
        self
    }

    /// Set left width
    pub fn border_left_width(mut self, value: f32) -> Self {
        self.border.border_left_width = Some(value);
        self
    }

    /// Set color on all sides
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border.border_color = Some(color.into());
        self
    }

    /// Set top color
    pub fn border_top_color(mut self, color: impl Into<String>) -> Self {
        self.border.border_top_color = Some(color.into());
        self
    }

    /// Set bottom color
    pub fn border_bottom_color(mut self, color: impl Into<String>) -> Self {
        self.border.border_bottom_color = Some(color.into());
        self
    }

    /// Set corner radius
    pub fn border_radius(mut self, value: f32) -> Self {
        self.border.border_radius = Some(value);
        self
    }

    // -------------------------------------------------------------------------
    // Shadow setters
    // -------------------------------------------------------------------------

    /// Set all five shadow keys from a preset
    pub fn shadow_preset(mut self, shadow: Shadow) -> Self {
        self.shadow = ShadowStyle {
            shadow_color: Some(shadow.color.to_string()),
            shadow_offset: Some(shadow.offset),
            shadow_opacity: Some(shadow.opacity),
            shadow_radius: Some(shadow.radius),
            elevation: Some(shadow.elevation),
        };
        self
    }

    /// Set only the shadow opacity
    pub fn shadow_opacity(mut self, opacity: f32) -> Self {
        self.shadow.shadow_opacity = Some(opacity);
        self
    }

    // -------------------------------------------------------------------------
    // Layout setters
    // -------------------------------------------------------------------------

    /// Set width
    pub fn width(mut self, value: impl Into<Dimension>) -> Self {
        self.layout.width = Some(value.into());
        self
    }

    /// Set height
    pub fn height(mut self, value: impl Into<Dimension>) -> Self {
        self.layout.height = Some(value.into());
        self
    }

    /// Set maximum width
    pub fn max_width(mut self, value: impl Into<Dimension>) -> Self {
        self.layout.max_width = Some(value.into());
        self
    }

    /// Set maximum height
    pub fn max_height(mut self, value: impl Into<Dimension>) -> Self {
        self.layout.max_height = Some(value.into());
        self
    }

    /// Set flex grow
    pub fn flex(mut self, value: f32) -> Self {
        self.layout.flex = Some(value);
        self
    }

    /// Set flex direction
    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.layout.flex_direction = Some(direction);
        self
    }

    /// Set child alignment
    pub fn align_items(mut self, alignment: Alignment) -> Self {
        self.layout.align_items = Some(alignment);
        self
    }

    /// Set self alignment
    pub fn align_self(mut self, alignment: Alignment) -> Self {
        self.layout.align_self = Some(alignment);
        self
    }

    /// Set main-axis distribution
    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.layout.justify_content = Some(justify);
        self
    }

    /// Set overflow
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.layout.overflow = Some(overflow);
        self
    }

    // -------------------------------------------------------------------------
    // Text setters
    // -------------------------------------------------------------------------

    /// Set font family
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.text.font_family = Some(family.into());
        self
    }

    /// Set font size
    pub fn font_size(mut self, size: f32) -> Self {
        self.text.font_size = Some(size);
        self
    }

    /// Set font weight
    pub fn font_weight(mut self, weight: u16) -> Self {
        self.text.font_weight = Some(weight);
        self
    }

    /// Set text alignment
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text.text_align = Some(align);
        self
    }
}
