//! Fixed top navigation bar.

use folio_protocol::{Point, Rect, RenderCommand, TextAlign, TextStyle, ThemeMode, ThemeToken};

use crate::content::PageContent;
use crate::state::PageState;

/// Bar height in page units. Two rows: items, then a separator rule.
pub const NAV_HEIGHT: f64 = 40.0;

const EDGE_PAD: f64 = 2.0;
const ITEM_GAP: f64 = 3.0;

/// Emit the nav bar in screen coordinates (callers render it with a
/// zero scroll offset).
pub fn render_nav(content: &PageContent, state: &PageState, width: f64) -> Vec<RenderCommand> {
    let mut out = Vec::with_capacity(content.nav.len() * 2 + 5);
    out.push(RenderCommand::BeginGroup { id: "nav".to_owned(), label: None });
    out.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, width, NAV_HEIGHT),
        fill: Some(ThemeToken::Background),
        border: None,
    });
    out.push(RenderCommand::DrawLine {
        from: Point::new(0.0, NAV_HEIGHT - 10.0),
        to: Point::new(width, NAV_HEIGHT - 10.0),
        color: ThemeToken::Border,
        width: 1.0,
    });

    out.push(RenderCommand::DrawText {
        position: Point::new(EDGE_PAD, 0.0),
        text: content.monogram.clone(),
        color: ThemeToken::TextPrimary,
        style: TextStyle::Emphasis,
        align: TextAlign::Left,
    });

    let indicator = match state.theme {
        ThemeMode::Dark => "[t] \u{263e} dark",
        ThemeMode::Light => "[t] \u{2600} light",
    };
    out.push(RenderCommand::DrawText {
        position: Point::new(width - EDGE_PAD, 0.0),
        text: indicator.to_owned(),
        color: ThemeToken::TextMuted,
        style: TextStyle::Caption,
        align: TextAlign::Right,
    });

    // Numbered items, right-aligned against the theme indicator. On
    // narrow pages the items are dropped and only the monogram and
    // indicator remain.
    let items_w: f64 = content
        .nav
        .iter()
        .map(|item| 4.0 + item.label.chars().count() as f64 + ITEM_GAP)
        .sum();
    let indicator_w = indicator.chars().count() as f64;
    let items_start = width - EDGE_PAD - indicator_w - ITEM_GAP - items_w;
    let monogram_end = EDGE_PAD + content.monogram.chars().count() as f64 + 4.0;
    if items_start >= monogram_end {
        let mut x = items_start;
        for (i, item) in content.nav.iter().enumerate() {
            out.push(RenderCommand::DrawText {
                position: Point::new(x, 0.0),
                text: format!("{:02}.", i + 1),
                color: ThemeToken::Accent,
                style: TextStyle::Caption,
                align: TextAlign::Left,
            });
            let color = if state.active == item.target {
                ThemeToken::Accent
            } else {
                ThemeToken::TextSecondary
            };
            out.push(RenderCommand::DrawText {
                position: Point::new(x + 4.0, 0.0),
                text: item.label.clone(),
                color,
                style: TextStyle::Caption,
                align: TextAlign::Left,
            });
            x += 4.0 + item.label.chars().count() as f64 + ITEM_GAP;
        }
    }

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use folio_protocol::SectionId;

    use super::*;

    fn texts(cmds: &[RenderCommand]) -> Vec<(String, ThemeToken)> {
        cmds.iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, color, .. } => Some((text.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn active_item_is_accented() {
        let content = PageContent::builtin();
        let mut state = PageState::new();
        state.active = SectionId::About;
        let texts = texts(&render_nav(&content, &state, 120.0));

        let color_of = |label: &str| {
            texts
                .iter()
                .find(|(t, _)| t == label)
                .map(|(_, c)| *c)
                .unwrap_or_else(|| panic!("{label} not in nav"))
        };
        assert_eq!(color_of("About"), ThemeToken::Accent);
        assert_eq!(color_of("Experience"), ThemeToken::TextSecondary);
        assert_eq!(color_of("Contact"), ThemeToken::TextSecondary);
    }

    #[test]
    fn items_are_numbered_in_nav_order() {
        let content = PageContent::builtin();
        let texts = texts(&render_nav(&content, &PageState::new(), 120.0));
        let numbers: Vec<_> =
            texts.iter().filter(|(t, _)| t.ends_with('.') && t.len() == 3).collect();
        assert_eq!(numbers.len(), 4);
        assert_eq!(numbers[0].0, "01.");
        assert_eq!(numbers[3].0, "04.");
        assert!(numbers.iter().all(|(_, c)| *c == ThemeToken::Accent));
    }

    #[test]
    fn indicator_follows_the_theme() {
        let content = PageContent::builtin();
        let mut state = PageState::new();
        let dark = render_nav(&content, &state, 120.0);
        assert!(texts(&dark).iter().any(|(t, _)| t.contains("dark")));
        state.toggle_theme();
        let light = render_nav(&content, &state, 120.0);
        assert!(texts(&light).iter().any(|(t, _)| t.contains("light")));
    }

    #[test]
    fn narrow_bar_keeps_monogram_and_indicator_only() {
        let content = PageContent::builtin();
        let texts = texts(&render_nav(&content, &PageState::new(), 40.0));
        assert!(texts.iter().any(|(t, _)| t == "IW"));
        assert!(!texts.iter().any(|(t, _)| t == "01."));
        assert!(texts.iter().any(|(t, _)| t.contains("dark")));
    }

    #[test]
    fn bar_stays_inside_its_band() {
        let content = PageContent::builtin();
        let cmds = render_nav(&content, &PageState::new(), 160.0);
        for cmd in &cmds {
            match cmd {
                RenderCommand::DrawText { position, .. } => assert!(position.y < NAV_HEIGHT),
                RenderCommand::DrawRect { rect, .. } => {
                    assert!((rect.h - NAV_HEIGHT).abs() < f64::EPSILON);
                }
                RenderCommand::DrawLine { from, to, .. } => {
                    assert!(from.y < NAV_HEIGHT && to.y < NAV_HEIGHT);
                }
                _ => {}
            }
        }
    }
}
