//! monoreport-ingest: Monobank personal API client and wire types.

pub mod client;
pub mod types;

pub use client::{DEFAULT_BASE_URL, MonoClient};
pub use types::{AccountInfo, ClientInfo, StatementItem};
