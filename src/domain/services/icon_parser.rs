//! Icon markup parser
//!
//! Turns the SVG markup embedded in menu descriptors into an
//! [`IconDescriptor`]. Parsing is total: anything that is empty, holds no
//! element or is not rooted at an `<svg>` element degrades to
//! [`IconDescriptor::Default`].
//!
//! Markup goes through the html5ever tree builder, so recovery follows the
//! browser rules: text (even a bare `<`), comments and CDATA are kept out
//! of the element list, unclosed elements are closed at end of input and
//! a tag cut off by end of input is dropped.

use std::collections::BTreeMap;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

use crate::domain::entities::{IconDescriptor, IconShape, SvgIcon};

/// Tag name the root element must carry
const ROOT_TAG: &str = "svg";

/// Parse icon markup into a descriptor. Never fails.
pub fn parse_icon(markup: &str) -> IconDescriptor {
    if markup.trim().is_empty() {
        return IconDescriptor::Default;
    }

    let normalized = unescape_quotes(markup);
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(normalized.as_str());

    let Some(root) = body(&dom.document).and_then(|body| element_children(&body).next()) else {
        debug!("icon markup holds no element, using default glyph");
        return IconDescriptor::Default;
    };
    let NodeData::Element { name, attrs, .. } = &root.data else {
        return IconDescriptor::Default;
    };
    // The tokenizer lowercases tag names
    if &*name.local != ROOT_TAG {
        debug!(tag = %name.local, "icon root is not an svg element, using default glyph");
        return IconDescriptor::Default;
    }

    let root_attributes = attribute_map(&attrs.borrow());
    let children = element_children(&root)
        .filter_map(|child| match &child.data {
            NodeData::Element { name, attrs, .. } => Some(IconShape {
                tag_name: name.local.to_string(),
                attributes: attribute_map(&attrs.borrow()),
            }),
            _ => None,
        })
        .collect();

    IconDescriptor::Svg(SvgIcon {
        root_attributes,
        children,
    })
}

/// Convert a kebab-case attribute name to camelCase (`stroke-width` ->
/// `strokeWidth`). Only a dash followed by a lowercase ASCII letter is
/// folded; other dashes are kept.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// The backend ships markup with escaped quotes (`\"`)
fn unescape_quotes(markup: &str) -> String {
    markup.replace("\\\"", "\"").replace("\\'", "'")
}

/// `<body>` of the parsed document; the tree builder always creates one
fn body(document: &Handle) -> Option<Handle> {
    let html = element_children(document).next()?;
    element_children(&html).find(|node| is_element(node, "body"))
}

fn element_children(node: &Handle) -> impl Iterator<Item = Handle> {
    let children: Vec<Handle> = node
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect();
    children.into_iter()
}

fn is_element(node: &Handle, local: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == local)
}

/// Entity references are already decoded by the tokenizer, which also
/// drops repeated attributes after the first.
fn attribute_map(attrs: &[Attribute]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for attr in attrs {
        map.entry(camel_case(&qualified_name(&attr.name)))
            .or_insert_with(|| attr.value.to_string());
    }
    map
}

fn qualified_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.to_string(),
    }
}
