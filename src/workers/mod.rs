//! Background work spawned on behalf of the UI loop

pub mod core;
pub mod fetcher;

pub use fetcher::SummaryFetcher;
