//! Hex Color Value Object
//!
//! The color override applied to `currentColor` strokes and fills.

use std::fmt;

/// A validated `#RRGGBB` color literal.
///
/// Three-digit input is expanded by doubling each channel. Letter case is
/// preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Label used in manifests and output paths when no override is set
    pub const CURRENT_COLOR: &'static str = "currentColor";

    /// Directory label used when no override is set
    pub const DEFAULT_DIR_LABEL: &'static str = "#000000";

    /// Parse `#rgb` or `#rrggbb`. Anything else yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Some(Self(format!("#{}", expanded)))
            }
            6 => Some(Self(format!("#{}", hex))),
            _ => None,
        }
    }

    /// Full `#rrggbb` string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace `currentColor` stroke and fill attributes in SVG markup.
    pub fn apply_to_svg(&self, svg: &str) -> String {
        svg.replace(
            "stroke=\"currentColor\"",
            &format!("stroke=\"{}\"", self.0),
        )
        .replace("fill=\"currentColor\"", &format!("fill=\"{}\"", self.0))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
