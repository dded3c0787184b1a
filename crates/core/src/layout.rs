//! Absolute page layout.
//!
//! [`PageLayout::compute`] turns [`PageContent`] into positioned text
//! and panel runs for a given page width and viewport height. The
//! result is independent of scroll position and of
//! [`crate::state::PageState`]; the view layer applies both
//! afterwards. Keeping layout state-free means the section boxes the
//! scroll scan reads are exactly the boxes the renderer draws.
//!
//! Coordinates are page units: one column horizontally, and
//! [`LINE_HEIGHT`] units per text line vertically.

use folio_protocol::{LINE_HEIGHT, Point, Rect, SectionId, TextAlign, TextStyle, ThemeToken};

use crate::content::{
    About, Contact, ExperienceEntry, Hero, PageContent, ProjectEntry, section_number,
};

/// Body column is capped at this many columns on wide pages.
pub const CONTENT_MAX_WIDTH: f64 = 88.0;
/// Margin kept on each side when the page is narrower than the cap.
pub const MIN_MARGIN: f64 = 6.0;

const SECTION_PAD: f64 = 60.0;
const HEADING_GAP: f64 = 20.0;
const HERO_TAIL: f64 = 120.0;
const ENTRY_GAP: f64 = 40.0;
const CARD_GAP: f64 = 40.0;
const CARD_PAD_X: f64 = 3.0;
const CARD_PAD_Y: f64 = 20.0;
const FOOTER_PAD: f64 = 40.0;
const INTRO_MAX_COLS: usize = 64;
const BLURB_MAX_COLS: usize = 52;

#[derive(Debug, Clone)]
pub(crate) struct TextRun {
    pub pos: Point,
    pub text: String,
    pub color: ThemeToken,
    pub style: TextStyle,
    pub align: TextAlign,
}

#[derive(Debug, Clone)]
pub(crate) struct PanelRun {
    pub rect: Rect,
    pub fill: Option<ThemeToken>,
    pub border: Option<ThemeToken>,
}

/// One section's share of the laid-out page.
#[derive(Debug, Clone)]
pub(crate) struct SectionPlan {
    pub id: SectionId,
    pub rect: Rect,
    pub title: Option<String>,
    pub texts: Vec<TextRun>,
    pub panels: Vec<PanelRun>,
}

/// Vertical band a section occupies, in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub id: SectionId,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    width: f64,
    view_h: f64,
    pub(crate) sections: Vec<SectionPlan>,
    pub(crate) footer: Vec<TextRun>,
    boxes: Vec<SectionBox>,
    total_height: f64,
}

impl PageLayout {
    /// Lay the page out at `width` columns for a viewport `view_h`
    /// units tall. Sections shorter than the viewport stretch to fill
    /// it, with their content centered in the stretched band, so each
    /// section occupies at least one full screen and the last one's
    /// top stays within [`PageLayout::max_scroll`].
    pub fn compute(content: &PageContent, width: f64, view_h: f64) -> Self {
        let width = width.max(40.0).floor();
        let view_h = view_h.max(0.0);
        let content_w = (width - 2.0 * MIN_MARGIN).min(CONTENT_MAX_WIDTH).floor();
        let content_x = ((width - content_w) / 2.0).floor();

        let mut flow = Flow::new(content_x, content_w);
        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut boxes = Vec::with_capacity(SectionId::ALL.len());

        for id in SectionId::ALL {
            let top = flow.y;
            flow.gap(SECTION_PAD);
            if let (Some(n), Some(title)) = (section_number(id), content.section_title(id)) {
                if id == SectionId::Contact {
                    flow.centered_heading(n, title);
                } else {
                    flow.heading(n, title);
                }
            }
            match id {
                SectionId::Home => hero(&mut flow, &content.hero),
                SectionId::About => about(&mut flow, &content.about),
                SectionId::Experience => experience(&mut flow, &content.experience),
                SectionId::Projects => projects(&mut flow, &content.projects),
                SectionId::Contact => contact(&mut flow, &content.contact),
            }
            flow.gap(SECTION_PAD);
            flow.stretch_to(top, view_h);
            let rect = Rect::new(0.0, top, width, flow.y - top);
            sections.push(SectionPlan {
                id,
                rect,
                title: content.section_title(id).map(str::to_owned),
                texts: std::mem::take(&mut flow.texts),
                panels: std::mem::take(&mut flow.panels),
            });
            boxes.push(SectionBox { id, rect });
        }

        flow.gap(LINE_HEIGHT);
        flow.centered(&content.footer, ThemeToken::TextMuted, TextStyle::Caption);
        flow.gap(FOOTER_PAD);
        let footer = std::mem::take(&mut flow.texts);
        let total_height = flow.y;

        Self { width, view_h, sections, footer, boxes, total_height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height the layout was computed for.
    pub fn view_height(&self) -> f64 {
        self.view_h
    }

    pub fn section_boxes(&self) -> &[SectionBox] {
        &self.boxes
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Height of the whole page, footer included.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Largest scroll offset that still shows a full viewport of page.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.total_height - viewport_height).max(0.0)
    }
}

/// Greedy word wrap by column count.
pub fn wrap_text(text: &str, cols: usize) -> Vec<String> {
    let cols = cols.max(8);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut len = 0usize;
    for word in text.split_whitespace() {
        let wlen = word.chars().count();
        if len == 0 {
            line.push_str(word);
            len = wlen;
        } else if len + 1 + wlen <= cols {
            line.push(' ');
            line.push_str(word);
            len += 1 + wlen;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            len = wlen;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Cursor that lays runs down the page one line band at a time.
struct Flow {
    x: f64,
    w: f64,
    y: f64,
    texts: Vec<TextRun>,
    panels: Vec<PanelRun>,
}

impl Flow {
    fn new(x: f64, w: f64) -> Self {
        Self { x, w, y: 0.0, texts: Vec::new(), panels: Vec::new() }
    }

    fn gap(&mut self, units: f64) {
        self.y += units;
    }

    /// Place a run on the current line without advancing.
    fn put(&mut self, dx: f64, text: &str, color: ThemeToken, style: TextStyle) {
        self.texts.push(TextRun {
            pos: Point::new(self.x + dx, self.y),
            text: text.to_owned(),
            color,
            style,
            align: TextAlign::Left,
        });
    }

    fn next_line(&mut self) {
        self.y += LINE_HEIGHT;
    }

    fn line(&mut self, dx: f64, text: &str, color: ThemeToken, style: TextStyle) {
        self.put(dx, text, color, style);
        self.next_line();
    }

    fn centered(&mut self, text: &str, color: ThemeToken, style: TextStyle) {
        self.texts.push(TextRun {
            pos: Point::new(self.x + self.w / 2.0, self.y),
            text: text.to_owned(),
            color,
            style,
            align: TextAlign::Center,
        });
        self.next_line();
    }

    fn wrapped(&mut self, dx: f64, cols: usize, text: &str, color: ThemeToken, style: TextStyle) {
        for part in wrap_text(text, cols) {
            self.line(dx, &part, color, style);
        }
    }

    fn wrapped_centered(&mut self, cols: usize, text: &str, color: ThemeToken, style: TextStyle) {
        for part in wrap_text(text, cols) {
            self.centered(&part, color, style);
        }
    }

    /// Section heading with its accent number, e.g. `01. About Me`.
    fn heading(&mut self, n: usize, title: &str) {
        self.put(0.0, &format!("{n:02}."), ThemeToken::Accent, TextStyle::Heading);
        self.put(4.0, title, ThemeToken::TextPrimary, TextStyle::Heading);
        self.next_line();
        self.gap(HEADING_GAP);
    }

    fn centered_heading(&mut self, n: usize, title: &str) {
        let combined = 4.0 + title.chars().count() as f64;
        let dx = ((self.w - combined) / 2.0).floor().max(0.0);
        self.put(dx, &format!("{n:02}."), ThemeToken::Accent, TextStyle::Heading);
        self.put(dx + 4.0, title, ThemeToken::TextPrimary, TextStyle::Heading);
        self.next_line();
        self.gap(HEADING_GAP);
    }

    /// Pad the band started at `top` out to at least `min_h` units,
    /// recentering the runs placed since then inside it. The pending
    /// run lists hold exactly the current section's runs.
    fn stretch_to(&mut self, top: f64, min_h: f64) {
        let extra = min_h - (self.y - top);
        if extra <= 0.0 {
            return;
        }
        let shift = (extra / 2.0 / LINE_HEIGHT).floor() * LINE_HEIGHT;
        for run in &mut self.texts {
            run.pos.y += shift;
        }
        for panel in &mut self.panels {
            panel.rect.y += shift;
        }
        self.y += extra;
    }
}

fn hero(flow: &mut Flow, hero: &Hero) {
    flow.line(0.0, &hero.greeting, ThemeToken::Accent, TextStyle::Body);
    flow.line(0.0, &hero.name, ThemeToken::TextPrimary, TextStyle::Display);
    flow.line(0.0, &hero.tagline, ThemeToken::TextSecondary, TextStyle::Title);
    flow.gap(LINE_HEIGHT);
    let cols = (flow.w as usize).min(INTRO_MAX_COLS);
    flow.wrapped(0.0, cols, &hero.intro, ThemeToken::TextMuted, TextStyle::Body);
    flow.gap(HERO_TAIL);
}

fn about(flow: &mut Flow, about: &About) {
    let cols = flow.w as usize;
    for para in &about.paragraphs {
        flow.wrapped(0.0, cols, para, ThemeToken::TextMuted, TextStyle::Body);
        flow.gap(LINE_HEIGHT);
    }
    flow.wrapped(0.0, cols, &about.skills_intro, ThemeToken::TextMuted, TextStyle::Body);
    flow.gap(LINE_HEIGHT);

    let grid_cols = if flow.w >= 60.0 { 3 } else { 2 };
    let col_w = (flow.w / grid_cols as f64).floor();
    for (i, skill) in about.skills.iter().enumerate() {
        let dx = (i % grid_cols) as f64 * col_w;
        flow.put(dx, "\u{25b9}", ThemeToken::Accent, TextStyle::Body);
        flow.put(dx + 2.0, skill, ThemeToken::TextSecondary, TextStyle::Body);
        if (i + 1) % grid_cols == 0 {
            flow.next_line();
        }
    }
    if about.skills.len() % grid_cols != 0 {
        flow.next_line();
    }
}

fn experience(flow: &mut Flow, entries: &[ExperienceEntry]) {
    let cols = (flow.w as usize).saturating_sub(2);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            flow.gap(ENTRY_GAP);
        }
        flow.line(0.0, &entry.role, ThemeToken::TextPrimary, TextStyle::Emphasis);
        flow.line(0.0, &format!("@ {}", entry.organization), ThemeToken::Accent, TextStyle::Body);
        flow.line(0.0, &entry.date_range, ThemeToken::TextMuted, TextStyle::Caption);
        flow.gap(LINE_HEIGHT);
        for bullet in &entry.bullets {
            for (j, part) in wrap_text(bullet, cols).iter().enumerate() {
                if j == 0 {
                    flow.put(0.0, "\u{25b9}", ThemeToken::Accent, TextStyle::Body);
                }
                flow.put(2.0, part, ThemeToken::TextSecondary, TextStyle::Body);
                flow.next_line();
            }
        }
    }
}

fn projects(flow: &mut Flow, entries: &[ProjectEntry]) {
    let cols = (flow.w - 2.0 * CARD_PAD_X) as usize;
    for (i, project) in entries.iter().enumerate() {
        if i > 0 {
            flow.gap(CARD_GAP);
        }
        let card_top = flow.y;
        flow.gap(CARD_PAD_Y);
        flow.line(CARD_PAD_X, "Featured Project", ThemeToken::Accent, TextStyle::Caption);
        flow.line(CARD_PAD_X, &project.name, ThemeToken::TextPrimary, TextStyle::Emphasis);
        flow.wrapped(
            CARD_PAD_X,
            cols,
            &project.description,
            ThemeToken::TextMuted,
            TextStyle::Body,
        );
        flow.gap(LINE_HEIGHT);
        flow.line(
            CARD_PAD_X,
            &project.tags.join(" \u{00b7} "),
            ThemeToken::TextSecondary,
            TextStyle::Caption,
        );
        flow.gap(CARD_PAD_Y);
        flow.panels.push(PanelRun {
            rect: Rect::new(flow.x, card_top, flow.w, flow.y - card_top),
            fill: Some(ThemeToken::Surface),
            border: None,
        });
    }
}

fn contact(flow: &mut Flow, contact: &Contact) {
    flow.centered(&contact.headline, ThemeToken::TextPrimary, TextStyle::Title);
    flow.gap(LINE_HEIGHT);
    let cols = (flow.w as usize).min(BLURB_MAX_COLS);
    flow.wrapped_centered(cols, &contact.blurb, ThemeToken::TextMuted, TextStyle::Body);
    flow.gap(ENTRY_GAP);

    // Button is three rows tall with the label on the middle one.
    let label_w = contact.cta_label.chars().count() as f64;
    let btn_w = (label_w + 8.0).min(flow.w);
    let btn_x = flow.x + ((flow.w - btn_w) / 2.0).floor().max(0.0);
    flow.panels.push(PanelRun {
        rect: Rect::new(btn_x, flow.y, btn_w, 3.0 * LINE_HEIGHT),
        fill: Some(ThemeToken::AccentSoft),
        border: Some(ThemeToken::Accent),
    });
    flow.gap(LINE_HEIGHT);
    flow.centered(&contact.cta_label, ThemeToken::Accent, TextStyle::Body);
    flow.gap(LINE_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_at(width: f64) -> PageLayout {
        PageLayout::compute(&PageContent::builtin(), width, 480.0)
    }

    #[test]
    fn boxes_cover_page_in_order() {
        let layout = layout_at(120.0);
        let boxes = layout.section_boxes();
        assert_eq!(boxes.len(), SectionId::ALL.len());
        for (b, id) in boxes.iter().zip(SectionId::ALL) {
            assert_eq!(b.id, id);
        }
        assert!((boxes[0].rect.top() - 0.0).abs() < f64::EPSILON);
        for pair in boxes.windows(2) {
            assert!(
                (pair[0].rect.bottom() - pair[1].rect.top()).abs() < f64::EPSILON,
                "gap between {} and {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn every_section_has_real_height() {
        let layout = layout_at(80.0);
        for b in layout.section_boxes() {
            assert!(b.rect.h >= LINE_HEIGHT, "{} is too short", b.id);
        }
    }

    #[test]
    fn short_sections_stretch_to_the_viewport_height() {
        let layout = PageLayout::compute(&PageContent::builtin(), 120.0, 660.0);
        for b in layout.section_boxes() {
            assert!(b.rect.h >= 660.0, "{} is shorter than the viewport", b.id);
        }
        assert!(layout.total_height() >= 5.0 * 660.0);

        let about = layout
            .sections
            .iter()
            .find(|p| p.id == SectionId::About)
            .unwrap_or_else(|| panic!("about plan missing"));
        let first_y = about.texts.iter().map(|r| r.pos.y).fold(f64::INFINITY, f64::min);
        assert!(
            first_y > about.rect.top() + SECTION_PAD,
            "stretched content should sit centered, not at the top of the band"
        );
    }

    #[test]
    fn every_section_top_stays_reachable() {
        for view_h in [480.0, 660.0, 900.0] {
            let layout = PageLayout::compute(&PageContent::builtin(), 120.0, view_h);
            let max = layout.max_scroll(view_h);
            for b in layout.section_boxes() {
                assert!(
                    b.rect.top() <= max,
                    "{} top is past max scroll for a {view_h}-unit viewport",
                    b.id
                );
            }
        }
    }

    #[test]
    fn footer_sits_below_the_last_section() {
        let layout = layout_at(120.0);
        let contact_bottom = layout
            .section(SectionId::Contact)
            .map(|b| b.rect.bottom())
            .unwrap_or_default();
        assert!(!layout.footer.is_empty());
        for run in &layout.footer {
            assert!(run.pos.y >= contact_bottom);
        }
        assert!(layout.total_height() >= contact_bottom + LINE_HEIGHT);
    }

    #[test]
    fn runs_stay_inside_their_section() {
        let layout = layout_at(100.0);
        for plan in &layout.sections {
            for run in &plan.texts {
                assert!(run.pos.y >= plan.rect.top(), "{}: run above box", plan.id);
                assert!(
                    run.pos.y + LINE_HEIGHT <= plan.rect.bottom() + f64::EPSILON,
                    "{}: run below box",
                    plan.id
                );
            }
            for panel in &plan.panels {
                assert!(panel.rect.top() >= plan.rect.top());
                assert!(panel.rect.bottom() <= plan.rect.bottom() + f64::EPSILON);
            }
        }
    }

    #[test]
    fn max_scroll_clamps_at_zero_for_tall_viewports() {
        let layout = layout_at(120.0);
        assert!((layout.max_scroll(layout.total_height() + 500.0) - 0.0).abs() < f64::EPSILON);
        assert!(layout.max_scroll(480.0) > 0.0);
    }

    #[test]
    fn compute_is_deterministic() {
        let a = layout_at(96.0);
        let b = layout_at(96.0);
        assert_eq!(a.section_boxes(), b.section_boxes());
        assert!((a.total_height() - b.total_height()).abs() < f64::EPSILON);
    }

    #[test]
    fn narrow_page_grows_taller() {
        let narrow = layout_at(48.0);
        let wide = layout_at(140.0);
        assert!(narrow.total_height() > wide.total_height());
        assert_eq!(narrow.section_boxes().len(), SectionId::ALL.len());
    }

    #[test]
    fn project_cards_carry_surface_panels() {
        let layout = layout_at(120.0);
        let plan = layout
            .sections
            .iter()
            .find(|p| p.id == SectionId::Projects)
            .unwrap_or_else(|| panic!("projects plan missing"));
        let cards: Vec<_> =
            plan.panels.iter().filter(|p| p.fill == Some(ThemeToken::Surface)).collect();
        assert_eq!(cards.len(), PageContent::builtin().projects.len());
        for card in cards {
            assert!(card.rect.h >= 5.0 * LINE_HEIGHT);
        }
    }

    #[test]
    fn wrap_respects_column_limit() {
        let lines = wrap_text("one two three four five six seven eight nine ten", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 12, "{line:?} too wide");
        }
    }

    #[test]
    fn wrap_keeps_every_word() {
        let text = "a bb ccc dddd eeeee ffffff";
        let joined = wrap_text(text, 10).join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn wrap_gives_oversized_words_their_own_line() {
        let lines = wrap_text("short extraordinarily-long-token end", 10);
        assert!(lines.iter().any(|l| l == "extraordinarily-long-token"));
    }

    #[test]
    fn text_never_starts_outside_the_page() {
        let layout = layout_at(64.0);
        for plan in &layout.sections {
            for run in &plan.texts {
                assert!(run.pos.x >= 0.0);
                assert!(run.pos.x < layout.width());
            }
        }
    }
}
