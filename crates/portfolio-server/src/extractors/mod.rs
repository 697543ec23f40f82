//! Request extractors

pub mod page_context;

pub use page_context::PageContext;
