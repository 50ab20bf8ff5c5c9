//! Routes command handler

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::services::{build_menu_tree, flatten_routes, RouteSet};
use crate::infrastructure::load_descriptors;
use crate::presentation::output::print_json;
use crate::ui::context::UiContext;
use crate::ui::views::render_routes;

pub fn cmd_routes(ui: &UiContext, menu: &Path) -> Result<()> {
    let descriptors = load_descriptors(menu)
        .with_context(|| format!("failed to load menu {}", menu.display()))?;
    let tree = build_menu_tree(&descriptors);
    let routes = RouteSet::from_tree(&tree);

    if ui.json {
        print_json(&serde_json::json!({
            "count": routes.len(),
            "routes": routes,
            "display_order": flatten_routes(tree.top_level()),
        }))?;
        return Ok(());
    }

    println!("{}", render_routes(&routes, ui));
    Ok(())
}
