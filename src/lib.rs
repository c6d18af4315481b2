//! Predefined expected-data templates and the check that keeps them readable.

pub mod cli;
pub mod commands;
pub mod config;
pub mod registry;
pub mod resource;
pub mod templates;
pub mod verification;
