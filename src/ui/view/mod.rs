//! Sidebar and tab panels shown once the splash screen is gone
//!
//! Split into state, update logic and rendering

pub mod components;
pub mod renderer;
pub mod state;
pub mod tabs;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_view;
pub use state::ViewState;
pub use tabs::{ActiveTab, SidebarEntry};
