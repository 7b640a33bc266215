//! Error types for approval operations

/// Failures while applying a staged change
#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    /// No session with the requested groupe
    #[error("seance {groupe} not found")]
    SessionNotFound {
        /// Requested groupe
        groupe: String,
    },

    /// No activity with the requested schedule key
    #[error("activite {key} not found")]
    ActivityNotFound {
        /// Display form of the requested key
        key: String,
    },

    /// Staged diff names a field the node does not have
    #[error("unknown field {field} in staged diff")]
    UnknownField {
        /// Offending field name
        field: String,
    },

    /// Staged value does not deserialize into the field's type
    #[error("invalid staged value for field {field}")]
    InvalidFieldValue {
        /// Offending field name
        field: String,
        /// Deserialization failure
        #[source]
        source: serde_json::Error,
    },
}
