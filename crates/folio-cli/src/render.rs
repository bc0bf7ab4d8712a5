//! Turns formatted blocks into styled terminal lines.

use folio_engine::{Block, Theme};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal colours standing in for a site theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub code: Color,
    pub quote: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                text: Color::Black,
                accent: Color::Blue,
                muted: Color::DarkGray,
                code: Color::Magenta,
                quote: Color::DarkGray,
                highlight_bg: Color::Blue,
                highlight_fg: Color::White,
            },
            Theme::Dark => Palette {
                text: Color::Gray,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                code: Color::Green,
                quote: Color::Gray,
                highlight_bg: Color::Yellow,
                highlight_fg: Color::Black,
            },
            Theme::Colorful => Palette {
                text: Color::White,
                accent: Color::LightMagenta,
                muted: Color::LightBlue,
                code: Color::LightGreen,
                quote: Color::LightYellow,
                highlight_bg: Color::Magenta,
                highlight_fg: Color::White,
            },
        }
    }
}

/// Renders blocks in order, with a blank line after each block.
pub fn render_blocks(blocks: &[Block], palette: Palette) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.text);
    let accent = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text: heading } => {
                let prefix = "#".repeat((*level).max(1) as usize);
                lines.push(Line::from(Span::styled(format!("{prefix} {heading}"), accent)));
            }
            Block::Paragraph { text: body } => {
                lines.extend(body.lines().map(|l| Line::from(Span::styled(l.to_string(), text))));
            }
            Block::List { items } => {
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("• ", Style::default().fg(palette.accent)),
                        Span::styled(item.clone(), text),
                    ]));
                }
            }
            Block::NumberedPoint { label, text: body } => {
                lines.push(Line::from(Span::styled(label.clone(), accent)));
                lines.extend(
                    body.lines()
                        .map(|l| Line::from(Span::styled(format!("   {l}"), text))),
                );
            }
            Block::CodeBlock { text: code, language } => {
                let fence = Style::default().fg(palette.muted);
                let code_style = Style::default().fg(palette.code);
                lines.push(Line::from(Span::styled(
                    format!("```{}", language.as_deref().unwrap_or("")),
                    fence,
                )));
                lines.extend(
                    code.lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), code_style))),
                );
                lines.push(Line::from(Span::styled("```", fence)));
            }
            Block::Quote { text: quote } => {
                let style = Style::default()
                    .fg(palette.quote)
                    .add_modifier(Modifier::ITALIC);
                lines.extend(quote.lines().map(|l| Line::from(Span::styled(format!("│ {l}"), style))));
            }
            Block::SectionBreak { title, .. } => {
                lines.push(Line::from(Span::styled(format!("── {title} ──"), accent)));
            }
            Block::Subheading { text: sub } => {
                lines.push(Line::from(Span::styled(
                    sub.clone(),
                    text.add_modifier(Modifier::BOLD),
                )));
            }
        }
        lines.push(Line::default());
    }

    lines
}
