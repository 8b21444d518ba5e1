pub mod nav;
pub mod scroll;

pub use nav::wire_nav_links;
pub use scroll::wire_scroll_effects;
