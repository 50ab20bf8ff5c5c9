//! Icon descriptor
//!
//! Structured form of the SVG markup the menu service embeds in each entry.

use std::collections::BTreeMap;

use serde::Serialize;

/// A parsed menu icon, or the default glyph when markup was absent or unusable
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconDescriptor {
    /// Render the application's default glyph
    #[default]
    Default,
    /// Render the described SVG element
    Svg(SvgIcon),
}

impl IconDescriptor {
    pub fn is_default(&self) -> bool {
        matches!(self, IconDescriptor::Default)
    }

    pub fn as_svg(&self) -> Option<&SvgIcon> {
        match self {
            IconDescriptor::Svg(svg) => Some(svg),
            IconDescriptor::Default => None,
        }
    }
}

/// Root `<svg>` element with its direct children
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SvgIcon {
    /// Root attributes, names converted to camelCase
    pub root_attributes: BTreeMap<String, String>,
    /// Direct children in document order
    pub children: Vec<IconShape>,
}

/// One direct child of the root element (path, circle, g, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconShape {
    pub tag_name: String,
    pub attributes: BTreeMap<String, String>,
}

impl IconShape {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: BTreeMap::new(),
        }
    }
}
