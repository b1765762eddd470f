// Module declarations
mod app;
pub mod splash;
pub mod view;
// Re-exports for external use
pub use app::{App, Navigation, UIConfig, run};
