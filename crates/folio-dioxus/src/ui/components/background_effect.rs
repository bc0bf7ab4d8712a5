use dioxus::prelude::*;
use folio_engine::{BackgroundKind, StyleTokens, theme::Point};

/// Glyphs scattered over the design-code background.
const CODE_GLYPHS: [&str; 8] = ["</>", "{ }", "#", "=>", "px", "fn", "()", "::"];

fn point_style(point: &Point) -> String {
    format!(
        "left: {}%; top: {}%; width: {}px; height: {}px; animation-duration: {}s; animation-delay: {}s;",
        point.x, point.y, point.size, point.size, point.duration, point.delay
    )
}

#[component]
pub fn BackgroundEffect(tokens: StyleTokens) -> Element {
    let kind = tokens.background;
    if kind == BackgroundKind::None {
        return rsx! {};
    }

    let particles = match kind {
        BackgroundKind::Particles => BackgroundKind::points(BackgroundKind::PARTICLE_COUNT),
        _ => Vec::new(),
    };
    let glyphs = match kind {
        BackgroundKind::DesignCode => BackgroundKind::points(CODE_GLYPHS.len()),
        _ => Vec::new(),
    };
    let stars = match kind {
        BackgroundKind::Gradient => BackgroundKind::points(tokens.stars),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "{kind.class()}",
            aria_hidden: "true",
            for (index, point) in particles.iter().enumerate() {
                span { key: "p{index}", class: "bg-particle", style: point_style(point) }
            }
            for (index, (point, glyph)) in glyphs.iter().zip(CODE_GLYPHS).enumerate() {
                span {
                    key: "g{index}",
                    class: "bg-glyph",
                    style: "left: {point.x}%; top: {point.y}%;",
                    "{glyph}"
                }
            }
            for (index, point) in stars.iter().enumerate() {
                span { key: "s{index}", class: "bg-star", style: point_style(point) }
            }
        }
    }
}
