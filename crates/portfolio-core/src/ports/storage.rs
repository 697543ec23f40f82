//! Storage traits for persistence

use crate::types::{NewProject, Project, ProjectId};
use crate::Result;
use async_trait::async_trait;

/// Project store
///
/// Every method runs exactly one statement. Mutations are committed before
/// the call returns.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Create the `projects` table if it does not exist yet.
    async fn init_schema(&self) -> Result<()>;

    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>>;

    /// Insert a project and return the id assigned to that row.
    async fn insert_project(&self, project: &NewProject) -> Result<ProjectId>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_project(&self, id: ProjectId) -> Result<u64>;

    /// Replace the text fields of a project. `created_at` is left as is.
    /// Returns the number of rows affected (0 or 1).
    async fn update_project(&self, id: ProjectId, project: &NewProject) -> Result<u64>;
}
