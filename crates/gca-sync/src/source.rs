//! Collaborator seams
//!
//! The core consumes two narrow capabilities: fetching the "new" tree and
//! committing the reconciled "old" one. Network, scraping, and storage
//! mechanics live behind these traits, outside this workspace.

use crate::error::{FetchError, PersistError};
use async_trait::async_trait;
use gca_model::{Course, Trimestre};

/// Supplies freshly fetched course trees for one trimester
///
/// Fetching a trimester is expensive (network plus parsing), which is why
/// [`SyncService`](crate::SyncService) memoizes whole snapshots rather than
/// individual courses.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch every course offered in `trimestre`, in domain form
    async fn fetch_schedule(&self, trimestre: Trimestre) -> Result<Vec<Course>, FetchError>;
}

/// Commits a reconciled course tree
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Persist the course, staged changes included
    async fn persist(&self, course: &Course) -> Result<(), PersistError>;
}
