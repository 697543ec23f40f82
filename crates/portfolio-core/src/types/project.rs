//! Project types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProjectId = i64;

/// A portfolio project as stored in the `projects` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Name of an image under the static directory. Not checked for existence.
    pub image_filename: String,
    pub created_at: DateTime<Utc>,
}

/// The mutable fields of a project, used for inserts and updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_filename: String,
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_filename: image_filename.into(),
        }
    }

    /// Build a project from submitted form fields.
    ///
    /// Returns `None` if any field is missing or empty. Whitespace counts as
    /// content.
    pub fn from_fields(
        title: Option<String>,
        description: Option<String>,
        image_filename: Option<String>,
    ) -> Option<Self> {
        let present = |field: Option<String>| field.filter(|value| !value.is_empty());

        Some(Self {
            title: present(title)?,
            description: present(description)?,
            image_filename: present(image_filename)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_from_fields_accepts_complete_input() {
        let project = NewProject::from_fields(some("Title"), some("Body"), some("image.svg"));
        assert_eq!(
            project,
            Some(NewProject::new("Title", "Body", "image.svg"))
        );
    }

    #[test]
    fn test_from_fields_rejects_missing_field() {
        assert!(NewProject::from_fields(None, some("Body"), some("image.svg")).is_none());
        assert!(NewProject::from_fields(some("Title"), None, some("image.svg")).is_none());
        assert!(NewProject::from_fields(some("Title"), some("Body"), None).is_none());
    }

    #[test]
    fn test_from_fields_rejects_empty_field() {
        assert!(NewProject::from_fields(some(""), some("Body"), some("image.svg")).is_none());
        assert!(NewProject::from_fields(some("Title"), some(""), some("image.svg")).is_none());
        assert!(NewProject::from_fields(some("Title"), some("Body"), some("")).is_none());
    }

    #[test]
    fn test_from_fields_keeps_whitespace() {
        let project = NewProject::from_fields(some(" "), some("Body"), some("image.svg"));
        assert_eq!(project.map(|p| p.title), Some(" ".to_string()));
    }
}
