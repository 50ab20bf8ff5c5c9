//! Fetch command handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::application::{FetchedMenu, MenuRequest};
use crate::config::Config;
use crate::domain::entities::MenuTree;
use crate::error::NavError;
use crate::infrastructure::save_descriptors;
use crate::presentation::output::print_json;
use crate::presentation::{create_menu_fetch_use_case, create_session};
use crate::ui::context::UiContext;
use crate::ui::views::{render_decision, render_menu};

use super::resolve::ResolveReport;

#[derive(Debug, Clone, Default)]
pub struct FetchArgs {
    pub product: Option<String>,
    pub package: Option<String>,
    pub token: Option<String>,
    pub path: Option<String>,
    pub save: Option<PathBuf>,
    pub from_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FetchReport<'a> {
    product: &'a str,
    package: Option<&'a str>,
    entry_count: usize,
    tree: &'a MenuTree,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution: Option<ResolveReport<'a>>,
}

pub fn cmd_fetch(ui: &UiContext, config: &Config, args: FetchArgs) -> Result<()> {
    let product = args
        .product
        .or_else(|| config.api.product.clone())
        .filter(|p| !p.trim().is_empty())
        .ok_or(NavError::MissingProduct)?;
    let package = args.package.or_else(|| config.api.package.clone());

    // Local files need no credentials
    let token = match args.token.or_else(|| config.api.token.clone()) {
        Some(token) => token,
        None if args.from_dir.is_some() => String::new(),
        None => return Err(NavError::MissingToken.into()),
    };

    let use_case = create_menu_fetch_use_case(config, args.from_dir.as_deref())?;
    let menu: FetchedMenu = use_case.fetch(
        MenuRequest::new(&token, &product).with_package(package.as_deref()),
    )?;

    if let Some(save) = &args.save {
        save_descriptors(save, &menu.descriptors)
            .with_context(|| format!("failed to save menu to {}", save.display()))?;
        info!(path = %save.display(), "saved raw descriptor");
    }

    let location = args.path.clone().unwrap_or_default();
    let (mut session, _reader) = create_session(config, &location);
    let ticket = session.begin_fetch();
    session.apply_fetch(ticket, menu.clone());

    if ui.json {
        let report = FetchReport {
            product: &menu.product,
            package: menu.package.as_deref(),
            entry_count: menu.descriptors.len(),
            tree: session.tree(),
            resolution: args.path.as_ref().map(|_| ResolveReport::from_session(&session)),
        };
        print_json(&report)?;
        return Ok(());
    }

    println!(
        "{} / {}",
        menu.product,
        menu.package.as_deref().unwrap_or("(no package)")
    );
    println!("{}", render_menu(&session.visible_entries(), ui));
    if let Some(path) = &args.path {
        println!();
        println!("{}", render_decision(path, session.decision(), ui));
    }
    Ok(())
}
