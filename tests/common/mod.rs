//! Shared test infrastructure for end-to-end tests

pub mod client;
pub mod server;

pub use client::TestClient;
pub use server::TestServer;
