//! Icon command handler

use anyhow::Result;

use crate::domain::services::parse_icon;
use crate::presentation::output::print_json;
use crate::ui::context::UiContext;
use crate::ui::views::render_icon;

pub fn cmd_icon(ui: &UiContext, markup: &str) -> Result<()> {
    let icon = parse_icon(markup);

    if ui.json {
        print_json(&icon)?;
        return Ok(());
    }

    println!("{}", render_icon(&icon, ui));
    Ok(())
}
