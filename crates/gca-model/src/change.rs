//! Per-node change classification
//!
//! Every node of the schedule tree carries a [`Change`] describing how the
//! last reconciliation classified it. The payload is a sum type: only the
//! `Modified` variant carries field diffs, so interpreting a change never
//! requires inspecting a loosely typed map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names used in `Modified` payloads
///
/// Shared between the reconciliation engine (which writes diffs) and the
/// approval operation (which applies them back).
pub mod fields {
    /// Course title
    pub const TITRE: &str = "titre";
    /// Course cycle (1-3)
    pub const CYCLE: &str = "cycle";
    /// Session campus list
    pub const CAMPUS: &str = "campus";
    /// Session instructor descriptors
    pub const RESSOURCE: &str = "ressource";
}

/// Discriminant of a [`Change`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Node matches the latest snapshot
    Unchanged,
    /// Node exists only in the new snapshot
    Added,
    /// Node no longer exists in the new snapshot
    Removed,
    /// Node matched but with differing scalar fields
    Modified,
}

/// Old and new value of one modified field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiff {
    /// Value currently persisted
    pub old: Value,
    /// Value observed upstream
    pub new: Value,
}

/// Staged classification of one tree node
///
/// `Modified` carries a field → diff map that is non-empty by construction:
/// the only way to reach the variant is [`Change::mark_modified`] with two
/// values that actually differ. `Added` and `Removed` never carry a payload,
/// the whole node is the diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "change_type", content = "value", rename_all = "lowercase")]
pub enum Change {
    /// No staged change
    #[default]
    Unchanged,
    /// Whole node is new
    Added,
    /// Whole node disappeared upstream
    Removed,
    /// Scalar fields differ
    Modified(IndexMap<String, FieldDiff>),
}

impl Change {
    /// Discriminant of this change
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Unchanged => ChangeKind::Unchanged,
            Self::Added => ChangeKind::Added,
            Self::Removed => ChangeKind::Removed,
            Self::Modified(_) => ChangeKind::Modified,
        }
    }

    /// True when nothing is staged
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Field diffs, present only for `Modified`
    #[inline]
    #[must_use]
    pub fn field_diffs(&self) -> Option<&IndexMap<String, FieldDiff>> {
        match self {
            Self::Modified(diffs) => Some(diffs),
            _ => None,
        }
    }

    /// Record a field difference, switching to `Modified`
    ///
    /// Calling with `old == new` is a no-op since that is not a real
    /// difference. Repeated calls accumulate distinct fields; re-reporting
    /// the same field replaces its entry (the most recent diff wins).
    pub fn mark_modified(&mut self, field: &str, old: Value, new: Value) {
        if old == new {
            return;
        }
        let diff = FieldDiff { old, new };
        match self {
            Self::Modified(diffs) => {
                diffs.insert(field.to_string(), diff);
            }
            _ => {
                let mut diffs = IndexMap::new();
                diffs.insert(field.to_string(), diff);
                *self = Self::Modified(diffs);
            }
        }
    }

    /// Stage the node as wholly new, dropping any field payload
    #[inline]
    pub fn mark_added(&mut self) {
        *self = Self::Added;
    }

    /// Stage the node as removed upstream, dropping any field payload
    #[inline]
    pub fn mark_removed(&mut self) {
        *self = Self::Removed;
    }

    /// Clear any staged change
    ///
    /// Re-diffing is authoritative: the engine resets a node before
    /// re-evaluating it, so markers from a previous sync cycle never leak
    /// into the next classification.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::Unchanged;
    }
}
