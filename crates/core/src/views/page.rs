//! The scrollable page body.

use folio_protocol::{LINE_HEIGHT, Point, RenderCommand, SectionId, ThemeToken, Viewport};

use crate::layout::{PageLayout, PanelRun, TextRun};
use crate::state::PageState;

/// How far the hero copy sits below its resting position before the
/// first frame has been committed. Two text lines.
pub const MOUNT_SHIFT: f64 = 40.0;

/// Emit the page for one viewport.
///
/// Sections come out in page order, each bracketed by a group carrying
/// its anchor. Runs outside the viewport band are culled; group
/// markers are kept so consumers always see the full document
/// structure.
pub fn render_page(
    layout: &PageLayout,
    viewport: &Viewport,
    state: &PageState,
) -> Vec<RenderCommand> {
    let upper: usize = layout
        .sections
        .iter()
        .map(|p| p.texts.len() + p.panels.len() + 2)
        .sum::<usize>()
        + layout.footer.len()
        + 2;
    let mut out = Vec::with_capacity(upper);

    for plan in &layout.sections {
        out.push(RenderCommand::BeginGroup {
            id: format!("section:{}", plan.id),
            label: plan.title.clone(),
        });
        // The hero eases up into place on the first committed frame.
        let entering = plan.id == SectionId::Home && !state.mounted;
        // Sections fully outside the viewport keep their group markers
        // but skip the per-run walk. The band gets MOUNT_SHIFT of slack
        // since entering runs sit below their layout position.
        if viewport.intersects_band(plan.rect.top(), plan.rect.bottom() + MOUNT_SHIFT) {
            for panel in &plan.panels {
                push_panel(&mut out, panel, viewport);
            }
            for run in &plan.texts {
                push_text(&mut out, run, viewport, entering);
            }
        }
        out.push(RenderCommand::EndGroup);
    }

    out.push(RenderCommand::BeginGroup { id: "footer".to_owned(), label: None });
    for run in &layout.footer {
        push_text(&mut out, run, viewport, false);
    }
    out.push(RenderCommand::EndGroup);
    out
}

fn push_panel(out: &mut Vec<RenderCommand>, panel: &PanelRun, viewport: &Viewport) {
    if !viewport.intersects_band(panel.rect.top(), panel.rect.bottom()) {
        return;
    }
    out.push(RenderCommand::DrawRect {
        rect: panel.rect,
        fill: panel.fill,
        border: panel.border,
    });
}

fn push_text(out: &mut Vec<RenderCommand>, run: &TextRun, viewport: &Viewport, entering: bool) {
    let (y, color) = if entering {
        (run.pos.y + MOUNT_SHIFT, ThemeToken::TextMuted)
    } else {
        (run.pos.y, run.color)
    };
    if !viewport.intersects_band(y, y + LINE_HEIGHT) {
        return;
    }
    out.push(RenderCommand::DrawText {
        position: Point::new(run.pos.x, y),
        text: run.text.clone(),
        color,
        style: run.style,
        align: run.align,
    });
}
