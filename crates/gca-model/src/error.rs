//! Error types for the domain model

use crate::keys::Trimestre;

/// Domain model errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Campaign opened too far ahead of the current trimester
    #[error("campagne for {trimestre} is more than {max_ahead} trimesters ahead")]
    TrimestreTooFarAhead {
        /// Requested trimester
        trimestre: Trimestre,
        /// Allowed lead, in trimesters
        max_ahead: i64,
    },
}
