//! HTML views
//!
//! Pages are plain strings wrapped in a shared layout. Anything that came
//! from a user is escaped first.

mod layout;
mod pages;
mod projects;

pub use pages::{about, contact, home, resume, thank_you};
pub use projects::{add_project_form, project_list};
