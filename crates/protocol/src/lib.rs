pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{RenderCommand, TextAlign, TextStyle};
pub use theme::{ThemeMode, ThemeToken};
pub use types::{LINE_HEIGHT, Point, Rect, SectionId, Viewport};
