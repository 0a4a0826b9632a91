use crate::{BackendService, ClientResult, HttpBackend};

use std::sync::Arc;
use std::time::Duration;

use academy_core::Principal;
use async_trait::async_trait;
use log::debug;

/// Creates backend handles bound to a caller identity.
#[async_trait]
pub trait BackendFactory: Send + Sync {
    async fn connect(&self, caller: Option<&Principal>) -> ClientResult<Arc<dyn BackendService>>;
}

pub struct HttpBackendFactory {
    base_url: String,
    timeout: Duration,
}

impl HttpBackendFactory {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl BackendFactory for HttpBackendFactory {
    async fn connect(&self, caller: Option<&Principal>) -> ClientResult<Arc<dyn BackendService>> {
        debug!(
            "Connecting backend at {} as {}",
            self.base_url,
            caller.map(Principal::as_str).unwrap_or("anonymous")
        );
        let backend = HttpBackend::new(&self.base_url, caller, self.timeout)?;
        Ok(Arc::new(backend))
    }
}
