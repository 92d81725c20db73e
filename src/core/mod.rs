//! Core domain types and calculations

pub mod cache;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod log;
pub mod planner;
pub mod quote;

// Re-export main types for cleaner imports
pub use catalog::{FundCatalog, FundRecord};
pub use filter::FilterRange;
pub use quote::{FundQuote, FundQuoteProvider};
