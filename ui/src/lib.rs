//! This crate contains all shared UI for the workspace.

mod branding;
pub use branding::*;

mod navbar;
pub use navbar::{NavLink, Navbar, NAV_LINKS};

mod layout;
pub use layout::Layout;

mod components;
pub use components::*;
