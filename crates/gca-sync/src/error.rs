//! Error types for synchronization

/// Failure while fetching the upstream schedule
///
/// Never cached; a caller hitting one of these may simply retry.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure against the upstream source
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// Upstream responded with something the adapter could not interpret
    #[error("malformed upstream payload: {0}")]
    Malformed(String),
}

/// Failure while committing a reconciled course
#[derive(Debug, thiserror::Error)]
#[error("persist failed: {0}")]
pub struct PersistError(pub String);

/// Either side of a sync round trip
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Fetch side failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Persistence side failed
    #[error(transparent)]
    Persist(#[from] PersistError),
}
