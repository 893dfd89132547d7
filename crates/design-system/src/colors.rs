//! Color tokens for the SpringBok glass design system
//!
//! Every color carries its own alpha channel so that surfaces stacked on top
//! of the app's gradient background read as translucent glass.
//!
//! # Usage
//!
//! ```rust
//! use design_system::colors::{self, primary};
//!
//! let accent = primary::GLASS;
//! let ramp = colors::ramp("error").unwrap();
//! assert_eq!(ramp.border, "rgba(231, 76, 60, 0.4)");
//! assert!(colors::parse_rgba(accent).is_some());
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color token: a CSS-style `rgba(...)` string or `transparent`
pub type Color = &'static str;

/// RGBA components parsed from a color token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0.0 - 1.0)
    pub a: f32,
}

/// Parse an `rgba(r, g, b, a)` or `transparent` color string
pub fn parse_rgba(value: &str) -> Option<Rgba> {
    let value = value.trim();
    if value == "transparent" {
        return Some(Rgba { r: 0, g: 0, b: 0, a: 0.0 });
    }

    let inner = value.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    let a = parts.next()?.parse::<f32>().ok()?;
    if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some(Rgba { r, g, b, a })
}

// =============================================================================
// Semantic Ramps
// =============================================================================

/// Five-stop ramp shared by every semantic color (primary, error, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRamp {
    /// Solid-ish main tone
    pub main: Color,
    /// Lighter tone
    pub light: Color,
    /// Darker tone
    pub dark: Color,
    /// Translucent fill used for glass surfaces
    pub glass: Color,
    /// Border drawn around glass surfaces
    pub border: Color,
}

impl ColorRamp {
    /// Get a stop by name (main, light, dark, glass, border)
    pub fn get(&self, stop: &str) -> Option<Color> {
        match stop {
            "main" => Some(self.main),
            "light" => Some(self.light),
            "dark" => Some(self.dark),
            "glass" => Some(self.glass),
            "border" => Some(self.border),
            _ => None,
        }
    }
}

macro_rules! ramp_module {
    ($(#[$doc:meta])* $name:ident, $r:literal, $g:literal, $b:literal,
     light = ($lr:literal, $lg:literal, $lb:literal),
     dark = ($dr:literal, $dg:literal, $db:literal)) => {
        $(#[$doc])*
        pub mod $name {
            use super::{Color, ColorRamp};

            /// Main tone (85% alpha)
            pub const MAIN: Color = concat!("rgba(", $r, ", ", $g, ", ", $b, ", 0.85)");
            /// Light tone (75% alpha)
            pub const LIGHT: Color = concat!("rgba(", $lr, ", ", $lg, ", ", $lb, ", 0.75)");
            /// Dark tone (90% alpha)
            pub const DARK: Color = concat!("rgba(", $dr, ", ", $dg, ", ", $db, ", 0.9)");
            /// Glass fill (25% alpha)
            pub const GLASS: Color = concat!("rgba(", $r, ", ", $g, ", ", $b, ", 0.25)");
            /// Glass border (40% alpha)
            pub const BORDER: Color = concat!("rgba(", $r, ", ", $g, ", ", $b, ", 0.4)");

            /// The whole ramp
            pub const RAMP: ColorRamp = ColorRamp {
                main: MAIN,
                light: LIGHT,
                dark: DARK,
                glass: GLASS,
                border: BORDER,
            };
        }
    };
}

ramp_module!(
    /// Primary brand blue
    primary, 74, 144, 226, light = (126, 182, 246), dark = (45, 100, 180)
);
ramp_module!(
    /// Secondary purple
    secondary, 155, 89, 182, light = (187, 143, 206), dark = (125, 60, 152)
);
ramp_module!(
    /// Success green
    success, 46, 204, 113, light = (88, 214, 141), dark = (30, 132, 73)
);
ramp_module!(
    /// Warning yellow
    warning, 241, 196, 15, light = (247, 220, 111), dark = (183, 149, 11)
);
ramp_module!(
    /// Error red
    error, 231, 76, 60, light = (239, 132, 120), dark = (169, 50, 38)
);
ramp_module!(
    /// Informational blue
    info, 52, 152, 219, light = (108, 178, 235), dark = (31, 97, 141)
);

/// Get a semantic ramp by name
pub fn ramp(name: &str) -> Option<ColorRamp> {
    match name {
        "primary" => Some(primary::RAMP),
        "secondary" => Some(secondary::RAMP),
        "success" => Some(success::RAMP),
        "warning" => Some(warning::RAMP),
        "error" => Some(error::RAMP),
        "info" => Some(info::RAMP),
        _ => None,
    }
}

/// Names of every semantic ramp, in display order
pub const RAMP_NAMES: [&str; 6] = ["primary", "secondary", "success", "warning", "error", "info"];

// =============================================================================
// Neutral & Glass Colors
// =============================================================================

/// Neutral colors for text and inactive chrome
pub mod neutral {
    use super::Color;

    /// Near-white text
    pub const WHITE: Color = "rgba(255, 255, 255, 0.95)";
    /// Light gray
    pub const LIGHT: Color = "rgba(236, 240, 241, 0.75)";
    /// Medium gray (placeholders, helper text)
    pub const MEDIUM: Color = "rgba(189, 195, 199, 0.65)";
    /// Dark slate
    pub const DARK: Color = "rgba(52, 73, 94, 0.85)";
    /// Near-black slate
    pub const BLACK: Color = "rgba(44, 62, 80, 0.9)";
    /// Fully transparent
    pub const TRANSPARENT: Color = "transparent";

    /// Get a neutral color by name
    pub fn get(name: &str) -> Option<Color> {
        match name {
            "white" => Some(WHITE),
            "light" => Some(LIGHT),
            "medium" => Some(MEDIUM),
            "dark" => Some(DARK),
            "black" => Some(BLACK),
            "transparent" => Some(TRANSPARENT),
            _ => None,
        }
    }
}

/// Glassmorphism surface colors
pub mod glass {
    use super::Color;

    /// Faint panel fill
    pub const BACKGROUND: Color = "rgba(255, 255, 255, 0.15)";
    /// Card fill
    pub const CARD: Color = "rgba(255, 255, 255, 0.25)";
    /// Overlay fill (modals, alerts)
    pub const OVERLAY: Color = "rgba(255, 255, 255, 0.35)";
    /// Hairline glass edge
    pub const BORDER: Color = "rgba(255, 255, 255, 0.2)";
    /// Tinted drop shadow
    pub const SHADOW: Color = "rgba(31, 38, 135, 0.37)";
    /// Specular highlight edge
    pub const HIGHLIGHT: Color = "rgba(255, 255, 255, 0.8)";
    /// Divider lines
    pub const DIVIDER: Color = "rgba(255, 255, 255, 0.12)";

    /// Get a glass color by name
    pub fn get(name: &str) -> Option<Color> {
        match name {
            "background" => Some(BACKGROUND),
            "card" => Some(CARD),
            "overlay" => Some(OVERLAY),
            "border" => Some(BORDER),
            "shadow" => Some(SHADOW),
            "highlight" => Some(HIGHLIGHT),
            "divider" => Some(DIVIDER),
            _ => None,
        }
    }
}

// =============================================================================
// Gradients
// =============================================================================

/// A two-stop background gradient (start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    /// Start color
    pub start: Color,
    /// End color
    pub end: Color,
}

/// Background gradient presets
pub mod gradients {
    use super::Gradient;

    /// Primary blue fade
    pub const PRIMARY: Gradient = Gradient {
        start: "rgba(74, 144, 226, 0.8)",
        end: "rgba(74, 144, 226, 0.4)",
    };
    /// Secondary purple fade
    pub const SECONDARY: Gradient = Gradient {
        start: "rgba(155, 89, 182, 0.8)",
        end: "rgba(155, 89, 182, 0.4)",
    };
    /// Success green fade
    pub const SUCCESS: Gradient = Gradient {
        start: "rgba(46, 204, 113, 0.8)",
        end: "rgba(46, 204, 113, 0.4)",
    };
    /// Error red fade
    pub const ERROR: Gradient = Gradient {
        start: "rgba(231, 76, 60, 0.8)",
        end: "rgba(231, 76, 60, 0.4)",
    };
    /// Neutral gray fade
    pub const NEUTRAL: Gradient = Gradient {
        start: "rgba(236, 240, 241, 0.8)",
        end: "rgba(189, 195, 199, 0.4)",
    };
    /// Clear glass fade
    pub const GLASS: Gradient = Gradient {
        start: "rgba(255, 255, 255, 0.4)",
        end: "rgba(255, 255, 255, 0.1)",
    };

    /// Get a gradient by name
    pub fn get(name: &str) -> Option<Gradient> {
        match name {
            "primary" => Some(PRIMARY),
            "secondary" => Some(SECONDARY),
            "success" => Some(SUCCESS),
            "error" => Some(ERROR),
            "neutral" => Some(NEUTRAL),
            "glass" => Some(GLASS),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_rgba() {
        let rgba = parse_rgba("rgba(74, 144, 226, 0.85)").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (74, 144, 226));
        assert!((rgba.a - 0.85).abs() < f32::EPSILON);

        assert_eq!(parse_rgba("transparent").unwrap().a, 0.0);
        assert!(parse_rgba("#FFFFFF").is_none());
        assert!(parse_rgba("rgba(300, 0, 0, 1)").is_none());
        assert!(parse_rgba("rgba(0, 0, 0, 1.5)").is_none());
        assert!(parse_rgba("rgba(0, 0, 0, 0.5, 1)").is_none());
    }

    // ==========================================================================
    // Ramp Tests
    // ==========================================================================

    #[test]
    fn test_ramp_macro_output() {
        assert_eq!(primary::MAIN, "rgba(74, 144, 226, 0.85)");
        assert_eq!(primary::LIGHT, "rgba(126, 182, 246, 0.75)");
        assert_eq!(primary::DARK, "rgba(45, 100, 180, 0.9)");
        assert_eq!(primary::GLASS, "rgba(74, 144, 226, 0.25)");
        assert_eq!(primary::BORDER, "rgba(74, 144, 226, 0.4)");
        assert_eq!(error::GLASS, "rgba(231, 76, 60, 0.25)");
    }

    #[test]
    fn test_ramp_lookup() {
        assert_eq!(ramp("warning"), Some(warning::RAMP));
        assert_eq!(ramp("info").unwrap().get("glass"), Some(info::GLASS));
        assert!(ramp("magenta").is_none());
        assert!(primary::RAMP.get("shadow").is_none());
    }

    #[test]
    fn test_glass_alpha_below_main() {
        for name in RAMP_NAMES {
            let ramp = ramp(name).unwrap();
            let main = parse_rgba(ramp.main).unwrap();
            let glass = parse_rgba(ramp.glass).unwrap();
            assert!(glass.a < main.a, "{} glass should be more translucent", name);
        }
    }

    #[test]
    fn test_all_colors_parse() {
        let mut all: Vec<Color> = Vec::new();
        for name in RAMP_NAMES {
            let ramp = ramp(name).unwrap();
            all.extend([ramp.main, ramp.light, ramp.dark, ramp.glass, ramp.border]);
        }
        for name in ["white", "light", "medium", "dark", "black", "transparent"] {
            all.push(neutral::get(name).unwrap());
        }
        for name in ["background", "card", "overlay", "border", "shadow", "highlight", "divider"] {
            all.push(glass::get(name).unwrap());
        }
        for name in ["primary", "secondary", "success", "error", "neutral", "glass"] {
            let gradient = gradients::get(name).unwrap();
            all.extend([gradient.start, gradient.end]);
        }

        for color in all {
            assert!(parse_rgba(color).is_some(), "unparseable color token: {}", color);
        }
    }

    #[test]
    fn test_gradients_fade_out() {
        let gradient = gradients::get("glass").unwrap();
        let start = parse_rgba(gradient.start).unwrap();
        let end = parse_rgba(gradient.end).unwrap();
        assert!(start.a > end.a);
        assert!(gradients::get("sunset").is_none());
    }
}
