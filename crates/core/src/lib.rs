//! folio-core: the page behind every renderer.
//!
//! ```text
//!   PageContent ──compute──▶ PageLayout ──render_*──▶ Vec<RenderCommand>
//!        │                       │                         ▲
//!        │                  SectionBox[]                   │
//!        │                       │                         │
//!        └──────────▶ PageState ◀┴── observe_scroll ───────┘
//! ```
//!
//! Content is immutable data, layout is a pure function of content and
//! page width, and the views are pure functions of layout, viewport,
//! and state. Renderers only ever consume
//! [`folio_protocol::RenderCommand`] lists, so the terminal front end
//! and the wasm bridge cannot drift apart.

pub mod content;
pub mod html;
pub mod layout;
pub mod scan;
pub mod state;
pub mod views;

pub use content::{ContentError, PageContent};
pub use layout::{PageLayout, SectionBox};
pub use scan::{SCAN_LINE_OFFSET, active_section};
pub use state::PageState;
