//! Property tests for active branch resolution.

use proptest::prelude::*;

use portal_nav::{resolve_active_branch, MenuNode, MenuTree};

/// `tops` sections, each with `children` categories holding one leaf
fn sectioned_tree(tops: usize, children: usize) -> MenuTree {
    MenuTree::new(
        (0..tops)
            .map(|t| {
                MenuNode::leaf(format!("Section {t}"), format!("/s{t}")).with_children(
                    (0..children)
                        .map(|c| {
                            MenuNode::new(format!("Category {c}")).with_child(MenuNode::leaf(
                                "Leaf",
                                format!("/s{t}/c{c}/leaf"),
                            ))
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

fn tree_and_target() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (1usize..8, 1usize..6).prop_flat_map(|(tops, children)| {
        (Just(tops), Just(children), 0..tops, 0..children)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a path under a leaf two levels deep activates the top entry
    /// and the immediate child that contain it.
    #[test]
    fn property_two_deep_leaf_resolves_both_levels(
        (tops, children, top, child) in tree_and_target(),
        suffix in proptest::option::of("[a-z0-9]{1,8}"),
    ) {
        let tree = sectioned_tree(tops, children);
        let mut path = format!("/s{top}/c{child}/leaf");
        if let Some(suffix) = suffix {
            path = format!("{path}/{suffix}");
        }

        let branch = resolve_active_branch(&tree, &path);

        prop_assert_eq!(branch.top(), Some(top));
        prop_assert_eq!(branch.child(), Some(child));
        prop_assert_eq!(branch.chain(), &[top, child, 0][..]);
    }

    /// PROPERTY: resolution never panics and every chain points at real nodes.
    #[test]
    fn property_chain_points_at_existing_nodes(
        (tops, children, _, _) in tree_and_target(),
        path in "(/[a-z0-9]{0,4}){0,4}",
    ) {
        let tree = sectioned_tree(tops, children);
        let branch = resolve_active_branch(&tree, &path);

        for depth in 1..=branch.chain().len() {
            prop_assert!(tree.node_at(&branch.chain()[..depth]).is_some());
        }
    }
}
