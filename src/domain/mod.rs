// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod group;
pub mod person;
pub mod repositories;

pub use errors::ValidationError;
