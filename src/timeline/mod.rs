//! Weather timeline API client.
//!
//! One outbound GET per submission; no retries, no caching. The response
//! is reduced to the first hourly interval's values.

pub mod client;
pub mod response;

pub use client::TimelineClient;
