//! Property tests for icon markup parsing.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use portal_nav::domain::services::camel_case;
use portal_nav::{parse_icon, IconDescriptor};

/// The `q` lead keeps clear of names the svg tree builder re-cases (`refx`)
fn attribute_names() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("q[a-z]{0,5}(-[a-z]{1,6})?", 0..6)
}

fn attribute_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 .]{0,8}").unwrap()
}

fn render_attrs(names: &BTreeSet<String>, values: &[String]) -> String {
    names
        .iter()
        .zip(values.iter().cycle())
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_icon_is_total(markup in any::<String>()) {
        let _ = parse_icon(&markup);
    }

    /// PROPERTY: parsing never panics on svg-looking fragments.
    #[test]
    fn property_parse_icon_is_total_on_fragments(
        body in "[<>/=\"' a-z!?-]{0,40}"
    ) {
        let _ = parse_icon(&format!("<svg{body}"));
    }

    /// PROPERTY: a well-formed svg keeps its root attribute count and its
    /// direct child count.
    #[test]
    fn property_well_formed_svg_round_trips_counts(
        root_names in attribute_names(),
        values in proptest::collection::vec(attribute_value(), 1..4),
        shapes in proptest::collection::vec(
            (prop_oneof![Just("path"), Just("circle"), Just("rect"), Just("g")], attribute_names()),
            0..6,
        ),
    ) {
        let mut markup = format!("<svg{}>", render_attrs(&root_names, &values));
        for (tag, names) in &shapes {
            markup.push_str(&format!("<{tag}{}/>", render_attrs(names, &values)));
        }
        markup.push_str("</svg>");

        let icon = parse_icon(&markup);
        let IconDescriptor::Svg(svg) = icon else {
            return Err(TestCaseError::fail(format!("expected svg for {markup}")));
        };

        let expected_root: HashSet<String> = root_names.iter().map(|n| camel_case(n)).collect();
        prop_assert_eq!(svg.root_attributes.len(), expected_root.len());
        prop_assert_eq!(svg.children.len(), shapes.len());
        for (shape, (tag, _)) in svg.children.iter().zip(&shapes) {
            prop_assert_eq!(shape.tag_name.as_str(), *tag);
        }
    }
}
