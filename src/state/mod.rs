//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `VisitedSet`: URLs the crawler has already entered during a run
//! - `LinkCollection`: discovered links keyed by `LinkType`, deduplicated and
//!   kept in discovery order

mod links;
mod visited;

// Re-export main types
pub use links::{LinkCollection, LinkType};
pub use visited::VisitedSet;
