use crate::domain::services::RouteSet;
use crate::ui::context::UiContext;
use crate::ui::primitives::{Styled, Tone};

pub fn render_routes(routes: &RouteSet, ctx: &UiContext) -> String {
    let mut out: Vec<String> = routes.iter().map(str::to_string).collect();
    out.push(
        Styled::new(&format!("{} routes", routes.len()), Tone::Dim).render(ctx.color),
    );
    out.join("\n")
}
