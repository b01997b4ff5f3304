// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::store::StoreFailure;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Listing is always newest first by creation date; the filter only narrows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub featured_only: bool,
}

impl ProjectListFilter {
    pub fn featured() -> Self {
        Self {
            featured_only: true,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl StoreFailure for ProjectQueryError {
    fn is_store_failure(&self) -> bool {
        !matches!(self, ProjectQueryError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, implemented by the store and by the fallback set)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Sorted by creation date, newest first.
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError>;

    /// Exact identifier match.
    async fn get_by_id(&self, id: &str) -> Result<Project, ProjectQueryError>;
}
