use crate::domain::entities::{IconDescriptor, SvgIcon};
use crate::ui::context::UiContext;
use crate::ui::primitives::{Styled, Tone};

pub fn render_icon(icon: &IconDescriptor, ctx: &UiContext) -> String {
    match icon {
        IconDescriptor::Default => Styled::new("default glyph", Tone::Dim).render(ctx.color),
        IconDescriptor::Svg(svg) => render_svg(svg, ctx),
    }
}

fn render_svg(svg: &SvgIcon, ctx: &UiContext) -> String {
    let mut lines = vec![format!(
        "{}{}",
        Styled::new("svg", Tone::Info).bold().render(ctx.color),
        attributes(svg.root_attributes.iter())
    )];
    for shape in &svg.children {
        lines.push(format!(
            "  {}{}",
            Styled::new(&shape.tag_name, Tone::Info).render(ctx.color),
            attributes(shape.attributes.iter())
        ));
    }
    lines.join("\n")
}

fn attributes<'a>(attrs: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    attrs.map(|(k, v)| format!(" {k}=\"{v}\"")).collect()
}
