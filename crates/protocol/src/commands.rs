use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each view (page, nav bar,
/// sidebar rail). Renderers consume the list in order. Each command
/// carries all the data it needs, with colors left as semantic tokens for
/// the active palette to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled and/or outlined rectangle.
    DrawRect {
        rect: Rect,
        fill: Option<ThemeToken>,
        border: Option<ThemeToken>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        style: TextStyle,
        align: TextAlign,
    },

    /// Draw a line segment (horizontal or vertical).
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Begin a logical group (a page section, the nav bar, the sidebar).
    /// Renderers may ignore groups; exporters use them for document
    /// structure.
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

/// Typography scale for text commands.
///
/// The terminal renderer has a single glyph size and maps styles to
/// emphasis; the HTML export maps them back to pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextStyle {
    /// The hero name.
    Display,
    /// The hero tagline and the contact headline.
    Title,
    /// Numbered section headings.
    Heading,
    /// Job titles and project names.
    Emphasis,
    /// Body copy.
    Body,
    /// Dates, tags, nav items, the footer.
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}
