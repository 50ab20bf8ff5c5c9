//! Menu tree construction from raw descriptors.

use tracing::debug;

use crate::domain::entities::{MenuDescriptor, MenuNode, MenuTree};

use super::icon_parser::parse_icon;

/// Build an immutable menu tree from the descriptor array.
///
/// Display order is delivered order. Icons are parsed per node; blank
/// routes become containers.
pub fn build_menu_tree(descriptors: &[MenuDescriptor]) -> MenuTree {
    let nodes: Vec<MenuNode> = descriptors.iter().map(build_node).collect();
    let tree = MenuTree::new(nodes);
    debug!(
        top_level = tree.top_level().len(),
        nodes = tree.node_count(),
        "built menu tree"
    );
    tree
}

fn build_node(descriptor: &MenuDescriptor) -> MenuNode {
    MenuNode::new(descriptor.name.clone())
        .with_route(descriptor.route.clone())
        .with_icon(parse_icon(&descriptor.icon))
        .with_embedded(descriptor.embedded_menu, descriptor.url.clone())
        .with_permissions(descriptor.permission.clone())
        .with_children(descriptor.sub_menus.iter().map(build_node).collect())
}
