// Repository interfaces (ports)
// Infrastructure adapters implement these traits

pub mod errors;
pub mod group_repository;
pub mod roster_repository;

pub use errors::StorageError;
pub use group_repository::GroupRepository;
pub use roster_repository::RosterRepository;
