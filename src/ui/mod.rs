// UI module
// Contains layout, pages, sidebar and reusable components

pub mod components;
pub mod create_agent;
pub mod layout;
pub mod sidebar;
pub mod sign_in;

pub use components::render_notices;
pub use layout::{render_dashboard, render_loading, DashboardAction};
pub use sign_in::render_sign_in;
