// Group domain module
// Contains the group entity and its name value object

#![allow(clippy::module_inception)]

pub mod group;
pub mod value_objects;

pub use group::Group;
pub use value_objects::GroupName;
