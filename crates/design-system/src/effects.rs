//! Glass effect composer
//!
//! Derives the five glassmorphism treatments from primitive tokens. Each
//! level is a complete, renderable effect: fill, edge, corner radius and a
//! full shadow are mandatory fields, so an incomplete effect cannot be built.

use crate::colors::{glass, Color};
use crate::error::ConfigError;
use crate::style::StyleFragment;
use crate::tokens::{borders, shadows, Shadow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glass intensity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassLevel {
    /// Faint panel, thin edge, small shadow
    Subtle,
    /// Default card treatment
    Medium,
    /// Opaque overlay with a heavier edge
    Strong,
    /// Light-catching top/left edge only
    Frosted,
    /// Backdrop-blurred panel with a highlight edge
    Blurred,
}

impl GlassLevel {
    /// Every level, from lightest to heaviest treatment
    pub const ALL: [GlassLevel; 5] = [
        GlassLevel::Subtle,
        GlassLevel::Medium,
        GlassLevel::Strong,
        GlassLevel::Frosted,
        GlassLevel::Blurred,
    ];

    /// Level name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            GlassLevel::Subtle => "subtle",
            GlassLevel::Medium => "medium",
            GlassLevel::Strong => "strong",
            GlassLevel::Frosted => "frosted",
            GlassLevel::Blurred => "blurred",
        }
    }
}

impl fmt::Display for GlassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlassLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subtle" => Ok(GlassLevel::Subtle),
            "medium" => Ok(GlassLevel::Medium),
            "strong" => Ok(GlassLevel::Strong),
            "frosted" => Ok(GlassLevel::Frosted),
            "blurred" => Ok(GlassLevel::Blurred),
            _ => Err(ConfigError::UnknownEffect(s.to_string())),
        }
    }
}

/// Per-side border widths
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderWidths {
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Left edge
    pub left: f32,
}

impl BorderWidths {
    /// Same width on every side
    pub const fn uniform(width: f32) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }

    /// Whether every side has the same width
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

/// A complete glass treatment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlassEffect {
    /// Which level produced this effect
    pub level: GlassLevel,
    /// Translucent fill
    pub background_color: Color,
    /// Edge color
    pub border_color: Color,
    /// Edge widths
    pub border_widths: BorderWidths,
    /// Corner radius
    pub border_radius: f32,
    /// Drop shadow
    pub shadow: Shadow,
    /// Backdrop filter, only for the blurred level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<&'static str>,
}

impl GlassEffect {
    /// Convert into a style fragment
    ///
    /// Uniform edges become `borderWidth`; anything else is written out
    /// side by side.
    pub fn to_fragment(&self) -> StyleFragment {
        let mut fragment = StyleFragment::new()
            .background_color(self.background_color)
            .border_color(self.border_color)
            .border_radius(self.border_radius)
            .shadow_preset(self.shadow);

        fragment = if self.border_widths.is_uniform() {
            fragment.border_width(self.border_widths.top)
        } else {
            fragment
                .border_top_width(self.border_widths.top)
                .border_right_width(self.border_widths.right)
                .border_bottom_width(self.border_widths.bottom)
                .border_left_width(self.border_widths.left)
        };

        if let Some(filter) = self.backdrop_filter {
            fragment = fragment.backdrop_filter(filter);
        }
        fragment
    }
}

/// Compose the effect for a glass level
pub fn compose_effect(level: GlassLevel) -> GlassEffect {
    match level {
        GlassLevel::Subtle => GlassEffect {
            level,
            background_color: glass::BACKGROUND,
            border_color: glass::BORDER,
            border_widths: BorderWidths::uniform(borders::width::THIN),
            border_radius: borders::radius::MD,
            shadow: shadows::SM,
            backdrop_filter: None,
        },
        GlassLevel::Medium => GlassEffect {
            level,
            background_color: glass::CARD,
            border_color: glass::BORDER,
            border_widths: BorderWidths::uniform(borders::width::THIN),
            border_radius: borders::radius::LG,
            shadow: shadows::MD,
            backdrop_filter: None,
        },
        GlassLevel::Strong => GlassEffect {
            level,
            background_color: glass::OVERLAY,
            border_color: glass::BORDER,
            border_widths: BorderWidths::uniform(borders::width::REGULAR),
            border_radius: borders::radius::XL,
            shadow: shadows::LG,
            backdrop_filter: None,
        },
        GlassLevel::Frosted => GlassEffect {
            level,
            background_color: "rgba(255, 255, 255, 0.08)",
            border_color: "rgba(255, 255, 255, 0.5)",
            border_widths: BorderWidths {
                top: borders::width::THIN,
                right: borders::width::NONE,
                bottom: borders::width::NONE,
                left: borders::width::THIN,
            },
            border_radius: borders::radius::LG,
            shadow: shadows::MD,
            backdrop_filter: None,
        },
        GlassLevel::Blurred => GlassEffect {
            level,
            background_color: "rgba(255, 255, 255, 0.1)",
            border_color: glass::HIGHLIGHT,
            border_widths: BorderWidths::uniform(borders::width::THIN),
            border_radius: borders::radius::XL,
            shadow: shadows::LG,
            backdrop_filter: Some("blur(10px)"),
        },
    }
}

/// Shorthand for `compose_effect(level).to_fragment()`
pub fn effect_fragment(level: GlassLevel) -> StyleFragment {
    compose_effect(level).to_fragment()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::parse_rgba;

    #[test]
    fn test_level_round_trips_through_name() {
        for level in GlassLevel::ALL {
            assert_eq!(level.as_str().parse::<GlassLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_level_is_config_error() {
        let err = "liquid".parse::<GlassLevel>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEffect(ref name) if name == "liquid"));
    }

    #[test]
    fn test_every_level_is_complete() {
        for level in GlassLevel::ALL {
            let effect = compose_effect(level);
            assert_eq!(effect.level, level);
            assert!(parse_rgba(effect.background_color).is_some());
            assert!(parse_rgba(effect.border_color).is_some());
            assert!(effect.border_radius > 0.0);
            assert!(effect.shadow.opacity > 0.0);

            let fragment = effect.to_fragment();
            assert!(fragment.color.background_color.is_some());
            assert!(fragment.border.border_color.is_some());
            assert!(fragment.border.border_radius.is_some());
            assert!(fragment.shadow.is_complete());
            assert!(
                fragment.border.border_width.is_some()
                    || fragment.border.border_top_width.is_some(),
                "{} has no border width",
                level
            );
        }
    }

    #[test]
    fn test_levels_are_distinct() {
        let fragments: Vec<StyleFragment> =
            GlassLevel::ALL.iter().map(|l| effect_fragment(*l)).collect();
        for (i, a) in fragments.iter().enumerate() {
            for b in fragments.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_frosted_writes_per_side_widths() {
        let fragment = effect_fragment(GlassLevel::Frosted);
        assert_eq!(fragment.border.border_width, None);
        assert_eq!(fragment.border.border_top_width, Some(borders::width::THIN));
        assert_eq!(fragment.border.border_left_width, Some(borders::width::THIN));
        assert_eq!(fragment.border.border_right_width, Some(0.0));
        assert_eq!(fragment.border.border_bottom_width, Some(0.0));
    }

    #[test]
    fn test_only_blurred_has_backdrop() {
        for level in GlassLevel::ALL {
            let fragment = effect_fragment(level);
            assert_eq!(
                fragment.color.backdrop_filter.is_some(),
                level == GlassLevel::Blurred
            );
        }
    }

    #[test]
    fn test_strong_is_heavier_than_subtle() {
        let subtle = compose_effect(GlassLevel::Subtle);
        let strong = compose_effect(GlassLevel::Strong);
        assert!(strong.border_widths.top > subtle.border_widths.top);
        assert!(strong.border_radius > subtle.border_radius);
        assert!(strong.shadow.elevation > subtle.shadow.elevation);
    }
}
