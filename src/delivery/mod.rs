//! Authenticated delivery of rendered payloads to channel uris.

pub mod dispatcher;

pub use dispatcher::WnsClient;
