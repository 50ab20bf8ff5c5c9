//! Property tests for route flattening and validation.

use proptest::prelude::*;

use portal_nav::domain::services::flatten_routes;
use portal_nav::{MenuNode, MenuTree, RedirectReason, RouteDecision, RoutePolicy, RouteSet, RouteValidator};

/// Distinct routes; `true` nests the route under the previous top entry
fn nested_tree(flags: &[bool]) -> MenuTree {
    let mut tops: Vec<MenuNode> = Vec::new();
    for (i, nest) in flags.iter().enumerate() {
        let node = MenuNode::leaf(format!("R{i}"), format!("/app/r{i}"));
        match tops.pop() {
            Some(last) if *nest => tops.push(last.with_child(node)),
            Some(last) => {
                tops.push(last);
                tops.push(node);
            }
            None => tops.push(node),
        }
    }
    MenuTree::new(tops)
}

fn validator() -> RouteValidator {
    RouteValidator::new(RoutePolicy {
        skip_prefixes: vec!["/app/skip".to_string()],
        ..RoutePolicy::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: flattening N route-bearing nodes with distinct routes yields N entries.
    #[test]
    fn property_flatten_yields_one_entry_per_route(
        flags in proptest::collection::vec(any::<bool>(), 0..24)
    ) {
        let tree = nested_tree(&flags);

        prop_assert_eq!(flatten_routes(tree.top_level()).len(), flags.len());
        prop_assert_eq!(RouteSet::from_tree(&tree).len(), flags.len());
    }

    /// PROPERTY: a reserved path matching neither the tree nor the skip list
    /// is redirected to the fallback.
    #[test]
    fn property_unreachable_reserved_path_redirects(
        flags in proptest::collection::vec(any::<bool>(), 1..12),
        segment in "[a-z]{1,8}",
        rest in "(/[a-z0-9]{1,4}){0,2}",
    ) {
        let tree = nested_tree(&flags);
        let routes = RouteSet::from_tree(&tree);
        let path = format!("/app/zz-{segment}{rest}");

        prop_assert_eq!(
            validator().validate(&routes, &path),
            RouteDecision::Redirect {
                to: "/app/dashboard".to_string(),
                reason: RedirectReason::Unreachable,
            }
        );
    }

    /// PROPERTY: a tree that does not list the fallback still bounces a
    /// location equal to the fallback, back to the fallback.
    #[test]
    fn property_fallback_location_outside_tree_redirects_to_itself(
        flags in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let tree = nested_tree(&flags);
        let routes = RouteSet::from_tree(&tree);

        let decision = validator().validate(&routes, "/app/dashboard");

        prop_assert_eq!(
            &decision,
            &RouteDecision::Redirect {
                to: "/app/dashboard".to_string(),
                reason: RedirectReason::Unreachable,
            }
        );
        prop_assert!(decision.redirects_to("/app/dashboard"));
    }

    /// PROPERTY: every route of the tree (and anything below it) is allowed.
    #[test]
    fn property_reachable_paths_are_allowed(
        flags in proptest::collection::vec(any::<bool>(), 1..12),
        pick in any::<prop::sample::Index>(),
        rest in "(/[a-z0-9]{1,4}){0,2}",
    ) {
        let tree = nested_tree(&flags);
        let routes = RouteSet::from_tree(&tree);
        let route = format!("/app/r{}", pick.index(flags.len()));

        prop_assert_eq!(
            validator().validate(&routes, &format!("{route}{rest}")),
            RouteDecision::Allow
        );
    }

    /// PROPERTY: skip-listed paths are always allowed, even with an empty tree.
    #[test]
    fn property_skip_list_always_allows(rest in "(/[a-z0-9]{1,4}){0,3}") {
        let routes = RouteSet::from_tree(&MenuTree::empty());
        prop_assert_eq!(
            validator().validate(&routes, &format!("/app/skip{rest}")),
            RouteDecision::Allow
        );
    }
}
