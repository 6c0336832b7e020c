//! Fixed product strings shown in the site chrome.

pub const PRODUCT_NAME: &str = "VALORANT Analysis Tool";

pub const COPYRIGHT_YEAR: u16 = 2024;

/// Footer line, rendered verbatim.
pub const COPYRIGHT: &str = "© 2024 VALORANT Analysis Tool";
