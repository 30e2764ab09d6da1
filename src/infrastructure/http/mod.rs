//! Outbound HTTP clients.

pub mod nws_client;

pub use nws_client::{NwsClient, NwsClientConfig};
