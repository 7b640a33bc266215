//! Applying staged changes
//!
//! A staged change stays on its node until a human approves it: a MODIFIED
//! node takes its fields' new values, an ADDED node is finalized, a REMOVED
//! node is deleted from its parent. Every operation takes the [`ChangeKind`]
//! the caller last saw and re-reads the node's current state first; a
//! mismatch is reported as a conflict instead of being silently applied.

use crate::error::ApprovalError;
use gca_model::{fields, ActivityKey, Change, ChangeKind, Course, Session};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of applying one approval
#[derive(Debug, Clone, PartialEq)]
pub enum ApprovalOutcome {
    /// The staged change was applied; carries the change as it was approved
    Applied(Change),
    /// Nothing to do for the node's current state
    NoOp,
    /// The node's state moved since the caller read it
    Conflict {
        /// Kind the caller expected to approve
        expected: ChangeKind,
        /// Kind currently staged on the node
        actual: ChangeKind,
    },
}

/// Approve the staged change on the course node itself
///
/// MODIFIED writes each diffed field's new value back and resets the marker.
/// Course-level ADDED/REMOVED never originate from reconciliation (the
/// campaign's course list governs course membership), so any other kind is a
/// no-op.
///
/// # Errors
/// [`ApprovalError::UnknownField`] / [`ApprovalError::InvalidFieldValue`] for
/// a malformed staged payload.
pub fn approve_course(
    course: &mut Course,
    expected: ChangeKind,
) -> Result<ApprovalOutcome, ApprovalError> {
    let actual = course.change.kind();
    if actual != expected {
        return Ok(ApprovalOutcome::Conflict { expected, actual });
    }

    match course.change.clone() {
        Change::Modified(diffs) => {
            for (field, diff) in &diffs {
                match field.as_str() {
                    fields::TITRE => course.titre = decode(field, &diff.new)?,
                    fields::CYCLE => course.cycle = decode(field, &diff.new)?,
                    _ => {
                        return Err(ApprovalError::UnknownField {
                            field: field.clone(),
                        })
                    }
                }
            }
            course.change.reset();
            tracing::info!(sigle = %course.sigle, "approved course modification");
            Ok(ApprovalOutcome::Applied(Change::Modified(diffs)))
        }
        _ => Ok(ApprovalOutcome::NoOp),
    }
}

/// Approve the staged change on one session of a course
///
/// MODIFIED applies campus/ressource values, ADDED finalizes the session,
/// REMOVED deletes it together with its activity subtree.
///
/// # Errors
/// [`ApprovalError::SessionNotFound`] for an unknown groupe, and payload
/// errors as for [`approve_course`].
pub fn approve_seance(
    course: &mut Course,
    groupe: &str,
    expected: ChangeKind,
) -> Result<ApprovalOutcome, ApprovalError> {
    let pos = course
        .seances
        .iter()
        .position(|s| s.groupe == groupe)
        .ok_or_else(|| ApprovalError::SessionNotFound {
            groupe: groupe.to_string(),
        })?;

    let actual = course.seances[pos].change.kind();
    if actual != expected {
        return Ok(ApprovalOutcome::Conflict { expected, actual });
    }

    match course.seances[pos].change.clone() {
        Change::Modified(diffs) => {
            let seance = &mut course.seances[pos];
            for (field, diff) in &diffs {
                match field.as_str() {
                    fields::CAMPUS => seance.campus = decode(field, &diff.new)?,
                    fields::RESSOURCE => seance.ressources = decode(field, &diff.new)?,
                    _ => {
                        return Err(ApprovalError::UnknownField {
                            field: field.clone(),
                        })
                    }
                }
            }
            seance.change.reset();
            tracing::info!(sigle = %course.sigle, groupe, "approved seance modification");
            Ok(ApprovalOutcome::Applied(Change::Modified(diffs)))
        }
        Change::Added => {
            course.seances[pos].change.reset();
            tracing::info!(sigle = %course.sigle, groupe, "finalized added seance");
            Ok(ApprovalOutcome::Applied(Change::Added))
        }
        Change::Removed => {
            course.seances.remove(pos);
            tracing::info!(sigle = %course.sigle, groupe, "removed seance approved");
            Ok(ApprovalOutcome::Applied(Change::Removed))
        }
        Change::Unchanged => Ok(ApprovalOutcome::NoOp),
    }
}

/// Approve the staged change on one activity of a session
///
/// ADDED finalizes the activity, REMOVED deletes it from the session - the
/// candidature association list is dropped with it, the candidature records
/// themselves are untouched. Activities never stage MODIFIED (their scalars
/// are all identity), so MODIFIED is a no-op like UNCHANGED.
///
/// # Errors
/// [`ApprovalError::ActivityNotFound`] for an unknown key.
pub fn approve_activite(
    seance: &mut Session,
    key: &ActivityKey,
    expected: ChangeKind,
) -> Result<ApprovalOutcome, ApprovalError> {
    let pos = seance
        .activites
        .iter()
        .position(|a| &a.key == key)
        .ok_or_else(|| ApprovalError::ActivityNotFound {
            key: key.to_string(),
        })?;

    let actual = seance.activites[pos].change.kind();
    if actual != expected {
        return Ok(ApprovalOutcome::Conflict { expected, actual });
    }

    match actual {
        ChangeKind::Added => {
            seance.activites[pos].change.reset();
            tracing::info!(groupe = %seance.groupe, %key, "finalized added activite");
            Ok(ApprovalOutcome::Applied(Change::Added))
        }
        ChangeKind::Removed => {
            seance.activites.remove(pos);
            tracing::info!(groupe = %seance.groupe, %key, "removed activite approved");
            Ok(ApprovalOutcome::Applied(Change::Removed))
        }
        ChangeKind::Unchanged | ChangeKind::Modified => Ok(ApprovalOutcome::NoOp),
    }
}

fn decode<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T, ApprovalError> {
    serde_json::from_value(value.clone()).map_err(|source| ApprovalError::InvalidFieldValue {
        field: field.to_string(),
        source,
    })
}
