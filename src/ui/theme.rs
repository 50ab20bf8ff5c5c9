use crossterm::style::Color;

/// Design tokens for the portal-nav CLI.
///
/// All colors and glyphs used in text output come from this module.
pub mod colors {
    use super::Color;

    /// Allowed locations
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    /// Redirects
    pub const WARNING: Color = Color::Yellow;
    /// Active branch
    pub const INFO: Color = Color::Cyan;
    /// Navigation targets, containers
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const ACTIVE: &str = "●";
    pub const LEAF: &str = "·";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const ACTIVE: &str = "*";
    pub const LEAF: &str = "-";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
}

/// Pick the unicode or ascii variant of a glyph
pub fn glyph(unicode: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        plain
    }
}
