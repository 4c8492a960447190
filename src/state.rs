//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AllocationService, LifecycleService, ResolutionService};
use crate::domain::repositories::ShortUrlRepository;

/// Services backed by a type-erased repository, so the same router serves
/// the PostgreSQL and in-memory stores.
#[derive(Clone)]
pub struct AppState {
    pub allocation_service: Arc<AllocationService<dyn ShortUrlRepository>>,
    pub resolution_service: Arc<ResolutionService<dyn ShortUrlRepository>>,
    pub lifecycle_service: Arc<LifecycleService<dyn ShortUrlRepository>>,
}

impl AppState {
    /// Builds all services over one repository.
    ///
    /// `base_url` is the public origin used to build `shortUrl` fields.
    pub fn new(repository: Arc<dyn ShortUrlRepository>, base_url: impl Into<String>) -> Self {
        Self {
            allocation_service: Arc::new(AllocationService::new(repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(repository.clone())),
            lifecycle_service: Arc::new(LifecycleService::new(repository, base_url)),
        }
    }
}
