//! Typography tokens
//!
//! Font families, the font size scale, line heights, weights and letter
//! spacing used by text-bearing component parts.

// =============================================================================
// Font Families
// =============================================================================

/// Font family names (Inter, one face per weight)
pub mod font_family {
    /// Light face
    pub const LIGHT: &str = "Inter-Light";
    /// Regular face
    pub const REGULAR: &str = "Inter-Regular";
    /// Medium face
    pub const MEDIUM: &str = "Inter-Medium";
    /// Semi-bold face
    pub const SEMI_BOLD: &str = "Inter-SemiBold";
    /// Bold face
    pub const BOLD: &str = "Inter-Bold";

    /// Get a family by weight name
    pub fn get(name: &str) -> Option<&'static str> {
        match name {
            "light" => Some(LIGHT),
            "regular" => Some(REGULAR),
            "medium" => Some(MEDIUM),
            "semiBold" => Some(SEMI_BOLD),
            "bold" => Some(BOLD),
            _ => None,
        }
    }
}

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Extra small (10px)
    pub const XS: f32 = 10.0;
    /// Small (12px)
    pub const SM: f32 = 12.0;
    /// Medium (14px)
    pub const MD: f32 = 14.0;
    /// Large (16px)
    pub const LG: f32 = 16.0;
    /// Extra large (18px)
    pub const XL: f32 = 18.0;
    /// 2x large (20px)
    pub const XL2: f32 = 20.0;
    /// 3x large (24px)
    pub const XL3: f32 = 24.0;
    /// 4x large (30px)
    pub const XL4: f32 = 30.0;
    /// 5x large (36px)
    pub const XL5: f32 = 36.0;
    /// 6x large (48px)
    pub const XL6: f32 = 48.0;

    /// Get font size by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
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
            _ => None,
        }
    }
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.2)
    pub const TIGHT: f32 = 1.2;
    /// Normal (1.5)
    pub const NORMAL: f32 = 1.5;
    /// Relaxed (1.75)
    pub const RELAXED: f32 = 1.75;
    /// Loose (2.0)
    pub const LOOSE: f32 = 2.0;
}

/// Font weight values
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Letter spacing in pixels
pub mod letter_spacing {
    /// Tighter (-0.8)
    pub const TIGHTER: f32 = -0.8;
    /// Tight (-0.4)
    pub const TIGHT: f32 = -0.4;
    /// Normal (0)
    pub const NORMAL: f32 = 0.0;
    /// Wide (0.4)
    pub const WIDE: f32 = 0.4;
    /// Wider (0.8)
    pub const WIDER: f32 = 0.8;
}
