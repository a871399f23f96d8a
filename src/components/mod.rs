// Shared chrome drawn around screens

pub mod bottom_nav;
pub mod footer;
pub mod header;
pub mod help_overlay;

pub use bottom_nav::BottomNav;
pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
