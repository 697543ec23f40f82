//! Core domain types

pub mod project;

pub use project::*;
