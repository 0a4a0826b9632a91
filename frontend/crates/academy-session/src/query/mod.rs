//! Identity-keyed query cache with targeted invalidation.

pub mod error;
pub mod query_client;
pub mod query_key;
pub mod query_options;
pub mod query_status;
