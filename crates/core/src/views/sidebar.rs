//! Fixed link rail along the left edge.

use folio_protocol::{Point, RenderCommand, TextAlign, TextStyle, ThemeToken, Viewport};

use crate::content::Links;

/// The rail is hidden on pages narrower than this.
pub const SIDEBAR_MIN_WIDTH: f64 = 100.0;
/// And on viewports too short to fit it above the bottom margin.
pub const SIDEBAR_MIN_HEIGHT: f64 = 240.0;

const RAIL_X: f64 = 3.0;

/// Emit the link rail in screen coordinates. Each link glyph is
/// wrapped in a group whose label carries the target, so consumers
/// that can follow links know where they go.
pub fn render_sidebar(links: &Links, viewport: &Viewport) -> Vec<RenderCommand> {
    if viewport.width < SIDEBAR_MIN_WIDTH || viewport.height < SIDEBAR_MIN_HEIGHT {
        return Vec::new();
    }
    let h = viewport.height;
    let glyph = |y: f64, text: &str| RenderCommand::DrawText {
        position: Point::new(RAIL_X, y),
        text: text.to_owned(),
        color: ThemeToken::TextSecondary,
        style: TextStyle::Caption,
        align: TextAlign::Left,
    };
    vec![
        RenderCommand::BeginGroup { id: "sidebar".to_owned(), label: None },
        RenderCommand::BeginGroup {
            id: "link:linkedin".to_owned(),
            label: Some(links.linkedin.clone()),
        },
        glyph(h - 200.0, "in"),
        RenderCommand::EndGroup,
        RenderCommand::BeginGroup {
            id: "link:email".to_owned(),
            label: Some(format!("mailto:{}", links.email)),
        },
        glyph(h - 180.0, "@"),
        RenderCommand::EndGroup,
        RenderCommand::DrawLine {
            from: Point::new(RAIL_X, h - 140.0),
            to: Point::new(RAIL_X, h - 20.0),
            color: ThemeToken::Rule,
            width: 1.0,
        },
        RenderCommand::EndGroup,
    ]
}
