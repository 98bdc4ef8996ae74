//! UI Components
//!
//! Page chrome shared by all three pages.

mod site_header;
mod offcanvas_menu;

pub use site_header::SiteHeader;
pub use offcanvas_menu::OffcanvasMenu;
