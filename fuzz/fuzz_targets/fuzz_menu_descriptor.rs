#![no_main]

use libfuzzer_sys::fuzz_target;
use portal_nav::{build_menu_tree, resolve_active_branch, MenuDescriptor, RouteSet};

fuzz_target!(|data: &[u8]| {
    let Ok(descriptors) = serde_json::from_slice::<Vec<MenuDescriptor>>(data) else {
        return;
    };
    let tree = build_menu_tree(&descriptors);
    let routes = RouteSet::from_tree(&tree);

    // Every route must resolve to a branch that exists in the tree
    for route in routes.iter() {
        let branch = resolve_active_branch(&tree, route);
        assert!(branch.is_none() || tree.node_at(branch.chain()).is_some());
    }
});
