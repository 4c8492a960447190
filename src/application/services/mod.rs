//! Business logic services for the application layer.

pub mod allocation_service;
pub mod lifecycle_service;
pub mod resolution_service;

pub use allocation_service::AllocationService;
pub use lifecycle_service::LifecycleService;
pub use resolution_service::ResolutionService;
