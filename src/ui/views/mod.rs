pub mod icon;
pub mod menu;
pub mod routes;

pub use icon::render_icon;
pub use menu::{render_decision, render_entry, render_menu};
pub use routes::render_routes;
