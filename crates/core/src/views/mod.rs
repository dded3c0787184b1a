//! View transforms.
//!
//! Each view is a pure function from model and state to a list of
//! [`folio_protocol::RenderCommand`]s. The page view scrolls; the nav
//! bar and sidebar are fixed overlays rendered in screen coordinates.

pub mod nav;
pub mod page;
pub mod sidebar;

pub use nav::{NAV_HEIGHT, render_nav};
pub use page::{MOUNT_SHIFT, render_page};
pub use sidebar::{SIDEBAR_MIN_WIDTH, render_sidebar};
