// Person domain module
// Contains the person entity and its value objects

#![allow(clippy::module_inception)]

pub mod person;
pub mod value_objects;

// Re-export main types for convenience
pub use person::Person;
pub use value_objects::{PersonName, Team};
