//! Storage layer
//!
//! Uses SQLite (embedded) through a small sqlx connection pool.

pub mod db;

pub use db::Database;
