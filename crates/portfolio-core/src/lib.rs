//! Portfolio Core Library
//!
//! Domain types, the error type and the storage port for the portfolio site.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{PortfolioError, Result};
pub use ports::ProjectStore;
pub use types::*;
