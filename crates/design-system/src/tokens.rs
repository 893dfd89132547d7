//! Design tokens for SpringBok ERP
//!
//! This module provides the primitive scales every style fragment is built
//! from: spacing, borders (radius, width, style), shadows and a handful of
//! fixed component dimensions. Color tokens live in [`crate::colors`] and
//! font tokens in [`crate::typography`].

use crate::colors::{glass, Color};
use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on an 8px grid with t-shirt sizes
pub mod spacing {
    /// 0px - No spacing
    pub const NONE: f32 = 0.0;
    /// 2px - Extra extra small
    pub const XXS: f32 = 2.0;
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 16px - Medium
    pub const MD: f32 = 16.0;
    /// 24px - Large
    pub const LG: f32 = 24.0;
    /// 32px - Extra large
    pub const XL: f32 = 32.0;
    /// 40px - 2x large
    pub const XL2: f32 = 40.0;
    /// 48px - 3x large
    pub const XL3: f32 = 48.0;
    /// 56px - 4x large
    pub const XL4: f32 = 56.0;
    /// 64px - 5x large
    pub const XL5: f32 = 64.0;
    /// 72px - 6x large
    pub const XL6: f32 = 72.0;
    /// 80px - 7x large
    pub const XL7: f32 = 80.0;
    /// 96px - 8x large
    pub const XL8: f32 = 96.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "none" => Some(NONE),
            "xxs" => Some(XXS),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "2xl" => Some(XL2),
            "3xl" => Some(XL3),
            "4xl" => Some(XL4),
            "5xl" => Some(XL5),
            "6xl" => Some(XL6),
            "7xl" => Some(XL7),
            "8xl" => Some(XL8),
            _ => None,
        }
    }
}

// =============================================================================
// Border Tokens
// =============================================================================

/// Border tokens: corner radius, stroke width and stroke style
pub mod borders {
    /// Border radius tokens
    pub mod radius {
        /// No radius (0px)
        pub const NONE: f32 = 0.0;
        /// Extra small radius (2px)
        pub const XS: f32 = 2.0;
        /// Small radius (4px)
        pub const SM: f32 = 4.0;
        /// Medium radius (8px)
        pub const MD: f32 = 8.0;
        /// Large radius (12px)
        pub const LG: f32 = 12.0;
        /// Extra large radius (16px)
        pub const XL: f32 = 16.0;
        /// 2x large radius (24px)
        pub const XXL: f32 = 24.0;
        /// Full/round radius (9999px)
        pub const FULL: f32 = 9999.0;

        /// Get radius by name
        pub fn get(name: &str) -> Option<f32> {
            match name {
                "none" => Some(NONE),
                "xs" => Some(XS),
                "sm" => Some(SM),
                "md" => Some(MD),
                "lg" => Some(LG),
                "xl" => Some(XL),
                "2xl" => Some(XXL),
                "full" => Some(FULL),
                _ => None,
            }
        }
    }

    /// Border width tokens
    pub mod width {
        /// No border (0px)
        pub const NONE: f32 = 0.0;
        /// Thin border (1px)
        pub const THIN: f32 = 1.0;
        /// Regular border (2px)
        pub const REGULAR: f32 = 2.0;
        /// Thick border (4px), used for accent edges
        pub const THICK: f32 = 4.0;

        /// Get width by name
        pub fn get(name: &str) -> Option<f32> {
            match name {
                "none" => Some(NONE),
                "thin" => Some(THIN),
                "regular" => Some(REGULAR),
                "thick" => Some(THICK),
                _ => None,
            }
        }
    }

    /// Border style names
    pub mod style {
        /// No stroke
        pub const NONE: &str = "none";
        /// Solid stroke
        pub const SOLID: &str = "solid";
        /// Dashed stroke
        pub const DASHED: &str = "dashed";
        /// Dotted stroke
        pub const DOTTED: &str = "dotted";

        /// Get style by name
        pub fn get(name: &str) -> Option<&'static str> {
            match name {
                "none" => Some(NONE),
                "solid" => Some(SOLID),
                "dashed" => Some(DASHED),
                "dotted" => Some(DOTTED),
                _ => None,
            }
        }
    }
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

/// Shadow definitions
///
/// Mirrors the native shadow model: iOS reads color/offset/opacity/radius,
/// Android reads `elevation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    /// Shadow color (with alpha)
    pub color: Color,
    /// Offset from the casting surface
    pub offset: ShadowOffset,
    /// Opacity multiplier
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android elevation
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub const fn new(
        color: Color,
        offset_y: f32,
        opacity: f32,
        radius: f32,
        elevation: f32,
    ) -> Self {
        Self {
            color,
            offset: ShadowOffset {
                width: 0.0,
                height: offset_y,
            },
            opacity,
            radius,
            elevation,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::{glass, Shadow};

    /// No shadow
    pub const NONE: Shadow = Shadow::new("transparent", 0.0, 0.0, 0.0, 0.0);
    /// Extra small shadow
    pub const XS: Shadow = Shadow::new(glass::SHADOW, 1.0, 0.18, 1.0, 1.0);
    /// Small shadow
    pub const SM: Shadow = Shadow::new(glass::SHADOW, 2.0, 0.23, 2.62, 2.0);
    /// Medium shadow
    pub const MD: Shadow = Shadow::new(glass::SHADOW, 3.0, 0.27, 4.65, 3.0);
    /// Large shadow
    pub const LG: Shadow = Shadow::new(glass::SHADOW, 5.0, 0.34, 6.27, 5.0);
    /// Extra large shadow
    pub const XL: Shadow = Shadow::new(glass::SHADOW, 8.0, 0.44, 10.32, 8.0);
    /// 2x large shadow
    pub const XXL: Shadow = Shadow::new(glass::SHADOW, 12.0, 0.58, 16.0, 12.0);

    /// Get a shadow preset by name
    pub fn get(name: &str) -> Option<Shadow> {
        match name {
            "none" => Some(NONE),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "2xl" => Some(XXL),
            _ => None,
        }
    }
}

// =============================================================================
// Component Dimensions
// =============================================================================

/// Fixed component dimensions in pixels
pub mod dimension {
    /// Text input height
    pub const INPUT_HEIGHT: f32 = 48.0;
    /// Tab bar and header height
    pub const BAR_HEIGHT: f32 = 60.0;
    /// Drawer width
    pub const DRAWER_WIDTH: f32 = 280.0;
    /// Modal max width
    pub const MODAL_MAX_WIDTH: f32 = 500.0;
    /// Tooltip max width
    pub const TOOLTIP_MAX_WIDTH: f32 = 200.0;
    /// Toggle track width
    pub const TOGGLE_WIDTH: f32 = 50.0;
    /// Toggle track height
    pub const TOGGLE_HEIGHT: f32 = 28.0;
    /// Toggle thumb diameter
    pub const TOGGLE_THUMB: f32 = 24.0;
    /// Checkbox box size
    pub const CHECKBOX: f32 = 22.0;
    /// Progress track height
    pub const PROGRESS_HEIGHT: f32 = 8.0;
    /// Tooltip arrow size
    pub const TOOLTIP_ARROW: f32 = 10.0;
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Fast (150ms)
    pub const FAST: u32 = 150;
    /// Normal (250ms)
    pub const NORMAL: u32 = 250;
    /// Slow (400ms)
    pub const SLOW: u32 = 400;
}
