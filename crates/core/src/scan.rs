//! Scroll position to active section mapping.

use folio_protocol::SectionId;

use crate::layout::SectionBox;

/// The scan line sits this far below the top of the viewport, so a
/// section counts as active while its heading is near the top of the
/// screen rather than only when its very first row is.
pub const SCAN_LINE_OFFSET: f64 = 100.0;

/// First section, in fixed page order, whose box spans the scan line.
///
/// Sections missing from `boxes` are skipped. `None` means no box
/// spans the line; callers keep their previous active section in that
/// case rather than clearing it.
pub fn active_section(boxes: &[SectionBox], scan_line: f64) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|id| {
        boxes
            .iter()
            .find(|b| b.id == *id)
            .is_some_and(|b| b.rect.spans_line(scan_line))
    })
}
