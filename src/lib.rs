//! Insight Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod insight;
pub mod server;

// Re-export commonly used types for convenience
pub use insight::{
    generate_insight, generate_insight_with_rng, Insight, Recommendation, Stats, Track,
};
pub use server::{run_server, RequestsLoggingLevel};
