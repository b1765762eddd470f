//! View component modules
//!
//! Contains all individual rendering components

pub mod dashboard;
pub mod footer;
pub mod header;
pub mod reports;
pub mod roster;
pub mod sidebar;
pub mod upload;
