//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::ShortUrlRepository`]
//! trait and provide a clean API for HTTP handlers and the admin CLI. They hold
//! no mutable state of their own: all shared state lives in the store.
//!
//! # Available Services
//!
//! - [`services::allocation_service::AllocationService`] - Short URL creation
//! - [`services::resolution_service::ResolutionService`] - Redirect lookup and click accounting
//! - [`services::lifecycle_service::LifecycleService`] - Lookup, update, delete and listing

pub mod services;
