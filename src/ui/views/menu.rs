//! Text rendering of the visible menu and of route decisions.

use crate::domain::services::{RedirectReason, RouteDecision, VisibleEntry};
use crate::ui::context::UiContext;
use crate::ui::primitives::{Styled, Tone};
use crate::ui::theme::{glyph, icons, icons_ascii};

/// Render one visible entry per line, indented by depth
pub fn render_menu(entries: &[VisibleEntry], ctx: &UiContext) -> String {
    if entries.is_empty() {
        return Styled::new("(no menu entries)", Tone::Dim).render(ctx.color);
    }

    entries
        .iter()
        .map(|entry| render_entry(entry, ctx))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_entry(entry: &VisibleEntry, ctx: &UiContext) -> String {
    let cursor = if entry.active {
        format!("{} ", glyph(ctx.unicode, icons::ACTIVE, icons_ascii::ACTIVE))
    } else {
        "  ".to_string()
    };
    let indent = "  ".repeat(entry.depth);

    let marker = match (entry.has_children, entry.expanded) {
        (true, true) => glyph(ctx.unicode, icons::EXPAND, icons_ascii::EXPAND),
        (true, false) => glyph(ctx.unicode, icons::COLLAPSE, icons_ascii::COLLAPSE),
        (false, _) => glyph(ctx.unicode, icons::LEAF, icons_ascii::LEAF),
    };

    let title = if entry.active {
        Styled::new(&entry.title, Tone::Info).bold().render(ctx.color)
    } else {
        Styled::new(&entry.title, Tone::Plain).render(ctx.color)
    };

    let target = match &entry.target {
        Some(target) => format!(
            " {} {}",
            glyph(ctx.unicode, icons::ARROW, icons_ascii::ARROW),
            Styled::new(target, Tone::Dim).render(ctx.color)
        ),
        None => String::new(),
    };

    format!("{cursor}{indent}{marker} {title}{target}")
}

/// One-line summary of a validation decision for `path`
pub fn render_decision(path: &str, decision: &RouteDecision, ctx: &UiContext) -> String {
    match decision {
        RouteDecision::Allow => format!(
            "{} {} allowed",
            Styled::new(glyph(ctx.unicode, icons::SUCCESS, icons_ascii::SUCCESS), Tone::Success)
                .render(ctx.color),
            path
        ),
        RouteDecision::Redirect { to, reason } => {
            let reason = match reason {
                RedirectReason::Unreachable => "not reachable from the menu",
                RedirectReason::NoMenu => "menu is empty",
            };
            format!(
                "{} {} redirect {} {} ({})",
                Styled::new(glyph(ctx.unicode, icons::WARNING, icons_ascii::WARNING), Tone::Warning)
                    .render(ctx.color),
                path,
                glyph(ctx.unicode, icons::ARROW, icons_ascii::ARROW),
                Styled::new(to, Tone::Warning).bold().render(ctx.color),
                reason
            )
        }
    }
}
