//! Resolve command handler

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::application::{FetchedMenu, NavigationSession};
use crate::config::Config;
use crate::domain::services::{RouteDecision, VisibleEntry};
use crate::infrastructure::load_descriptors;
use crate::presentation::create_session;
use crate::presentation::output::print_json;
use crate::ui::context::UiContext;
use crate::ui::views::{render_decision, render_menu};

/// Exit status when `--strict` is given and the location is redirected
pub const REDIRECT_EXIT_CODE: i32 = 2;

#[derive(Debug, Serialize)]
pub struct ResolveReport<'a> {
    pub path: &'a str,
    pub active_chain: &'a [usize],
    pub active_top: Option<usize>,
    pub active_child: Option<usize>,
    pub decision: &'a RouteDecision,
    pub route_count: usize,
    pub entries: Vec<VisibleEntry>,
}

impl<'a> ResolveReport<'a> {
    pub fn from_session(session: &'a NavigationSession) -> Self {
        let active = session.active_branch();
        Self {
            path: session.location(),
            active_chain: active.chain(),
            active_top: active.top(),
            active_child: active.child(),
            decision: session.decision(),
            route_count: session.routes().len(),
            entries: session.visible_entries(),
        }
    }
}

pub fn cmd_resolve(
    ui: &UiContext,
    config: &Config,
    menu: &Path,
    path: &str,
    toggles: &[String],
    strict: bool,
) -> Result<()> {
    let descriptors = load_descriptors(menu)
        .with_context(|| format!("failed to load menu {}", menu.display()))?;

    let (mut session, _reader) = create_session(config, path);
    let ticket = session.begin_fetch();
    session.apply_fetch(
        ticket,
        FetchedMenu::new(menu.display().to_string(), None, descriptors),
    );

    for toggle in toggles {
        let index_path = parse_index_path(toggle)?;
        if let Some((&last, parent)) = index_path.split_last() {
            session.toggle_nested(parent, last);
        }
    }

    let report = ResolveReport::from_session(&session);
    if ui.json {
        print_json(&report)?;
    } else {
        println!("{}", render_menu(&report.entries, ui));
        println!();
        println!("{}", render_decision(path, report.decision, ui));
    }

    if strict && report.decision.is_redirect() {
        std::process::exit(REDIRECT_EXIT_CODE);
    }
    Ok(())
}

/// Parse a dotted index path such as `1.0.2`
pub fn parse_index_path(raw: &str) -> Result<Vec<usize>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("empty index path");
    }
    trimmed
        .split('.')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid index path '{raw}'"))
        })
        .collect()
}
