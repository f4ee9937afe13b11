//! Pickup Roster Library
//!
//! This library provides the core functionality for managing pickup-game
//! rosters: group and person domain types, the roster coordinator that
//! drives a roster view, storage adapters, and the HTTP API.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod roster;
