//! Client side of the academy backend data service.
//!
//! [`BackendService`] is the remote contract; [`HttpBackend`] speaks it over
//! the REST API. A [`BackendFactory`] binds a backend handle ("actor") to the
//! caller identity.

pub mod backend_factory;
pub mod backend_service;
pub mod error;
pub mod http_backend;
pub mod retry;


pub use backend_factory::{BackendFactory, HttpBackendFactory};
pub use backend_service::BackendService;
pub use error::{ClientError, Result as ClientResult};
pub use http_backend::{HttpBackend, PRINCIPAL_HEADER};
pub use retry::{IsRetryable, RetryPolicy, with_retry};
