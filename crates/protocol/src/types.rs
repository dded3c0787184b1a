use serde::{Deserialize, Serialize};

/// Height of one text line in page units.
///
/// The page uses an abstract coordinate space: one terminal column per unit
/// horizontally, `LINE_HEIGHT` units per text line vertically. Renderers map
/// a page-space `y` to a terminal row by dividing by this constant; the HTML
/// export treats one unit as one CSS pixel (20 px line height).
pub const LINE_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Whether the horizontal line at `y` intersects this rect
    /// (`top ≤ y ≤ bottom`, both edges inclusive).
    pub fn spans_line(&self, y: f64) -> bool {
        self.top() <= y && self.bottom() >= y
    }
}

/// The visible window onto the page.
///
/// `y` is the scroll offset in page units; `width` is in columns and
/// `height` in page units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(y: f64, width: f64, height: f64) -> Self {
        Self { y, width, height }
    }

    /// Page-space coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the vertical band `[top, bottom]` overlaps the viewport.
    pub fn intersects_band(&self, top: f64, bottom: f64) -> bool {
        bottom >= self.y && top <= self.bottom()
    }
}

/// One of the five named content regions of the page.
///
/// The variant order is the fixed scan order used by the scroll tracker and
/// the top-to-bottom layout order of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in scan order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The in-page anchor name (`#about` etc.).
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Parse an anchor name back into a section id.
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(4.0, 100.0, 80.0, 60.0);
        assert!((r.top() - 100.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 160.0).abs() < f64::EPSILON);
        assert!((r.right() - 84.0).abs() < f64::EPSILON);
    }

    #[test]
    fn spans_line_is_edge_inclusive() {
        let r = Rect::new(0.0, 100.0, 10.0, 50.0);
        assert!(r.spans_line(100.0));
        assert!(r.spans_line(125.0));
        assert!(r.spans_line(150.0));
        assert!(!r.spans_line(99.9));
        assert!(!r.spans_line(150.1));
    }

    #[test]
    fn viewport_band_overlap() {
        let vp = Viewport::new(200.0, 80.0, 400.0);
        assert!(vp.intersects_band(100.0, 250.0));
        assert!(vp.intersects_band(550.0, 700.0));
        assert!(!vp.intersects_band(0.0, 199.0));
        assert!(!vp.intersects_band(601.0, 800.0));
    }

    #[test]
    fn section_order_is_fixed() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(SectionId::anchor).collect();
        assert_eq!(
            anchors,
            vec!["home", "about", "experience", "projects", "contact"]
        );
    }

    #[test]
    fn anchor_roundtrip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("blog"), None);
    }

    #[test]
    fn serializes_as_anchor_string() {
        let json = serde_json::to_string(&SectionId::Experience).unwrap_or_default();
        assert_eq!(json, "\"experience\"");
        let back: SectionId = serde_json::from_str("\"projects\"").unwrap_or(SectionId::Home);
        assert_eq!(back, SectionId::Projects);
    }
}
