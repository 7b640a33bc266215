//! The tree-diff engine
//!
//! Walks the persisted ("old") and freshly fetched ("new") hierarchies level
//! by level - course scalars, then sessions keyed by groupe, then activities
//! keyed by their schedule tuple. Matching is purely key-based: a renamed
//! groupe or a time-shifted activity is reported as a removal plus an
//! addition, never as a modification.

use gca_model::{fields, Activity, Course, Session};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Counts of what one reconciliation staged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Course-level scalar fields differed
    pub course_modified: bool,
    /// Sessions present only upstream, moved under the old course
    pub seances_added: usize,
    /// Sessions no longer present upstream
    pub seances_removed: usize,
    /// Matched sessions with scalar differences
    pub seances_modified: usize,
    /// Activities present only upstream
    pub activites_added: usize,
    /// Activities no longer present upstream
    pub activites_removed: usize,
}

impl ReconcileReport {
    /// True when the diff staged nothing at any level
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Reconcile a persisted course against a fresh snapshot of the same course
///
/// `old` is mutated in place: every node's change is re-classified and the
/// snapshot's unmatched subtrees are moved under `old`'s ownership, so
/// externally held references to the persisted tree stay valid. The caller
/// guarantees both trees carry the same (sigle, trimestre) identity; the
/// engine does not verify it.
///
/// Re-diffing is authoritative. Every matched node is reset before
/// re-evaluation, so a node staged ADDED by a previous cycle and now matched
/// without differences comes out UNCHANGED.
///
/// Duplicate keys within one input collection are a precondition violation;
/// the last duplicate silently wins.
pub fn reconcile(old: &mut Course, new: Course) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    old.change.reset();
    old.change
        .mark_modified(fields::TITRE, field_value(&old.titre), field_value(&new.titre));
    old.change
        .mark_modified(fields::CYCLE, field_value(&old.cycle), field_value(&new.cycle));
    report.course_modified = !old.change.is_unchanged();

    diff_seances(old, new.seances, &mut report);

    tracing::debug!(
        sigle = %old.sigle,
        trimestre = %old.trimestre,
        seances_added = report.seances_added,
        seances_removed = report.seances_removed,
        seances_modified = report.seances_modified,
        activites_added = report.activites_added,
        activites_removed = report.activites_removed,
        "reconciled course"
    );
    report
}

fn diff_seances(old: &mut Course, new_seances: Vec<Session>, report: &mut ReconcileReport) {
    let mut incoming: IndexMap<String, Session> = new_seances
        .into_iter()
        .map(|seance| (seance.groupe.clone(), seance))
        .collect();

    for seance in &mut old.seances {
        match incoming.swap_remove(&seance.groupe) {
            Some(new_seance) => diff_seance_pair(seance, new_seance, report),
            None => {
                // Subtree stays as last observed; the REMOVED marker on the
                // session subsumes it.
                seance.change.mark_removed();
                report.seances_removed += 1;
            }
        }
    }

    for (_, mut added) in incoming {
        // Wholly new: re-parent under the old course, children keep their
        // default UNCHANGED markers.
        added.change.mark_added();
        report.seances_added += 1;
        old.seances.push(added);
    }
}

fn diff_seance_pair(old: &mut Session, new: Session, report: &mut ReconcileReport) {
    old.change.reset();
    old.change.mark_modified(
        fields::CAMPUS,
        field_value(&old.campus),
        field_value(&new.campus),
    );
    old.change.mark_modified(
        fields::RESSOURCE,
        field_value(&old.ressources),
        field_value(&new.ressources),
    );
    if !old.change.is_unchanged() {
        report.seances_modified += 1;
    }

    diff_activites(old, new.activites, report);
}

fn diff_activites(old: &mut Session, new_activites: Vec<Activity>, report: &mut ReconcileReport) {
    let mut incoming: IndexMap<_, Activity> = new_activites
        .into_iter()
        .map(|act| (act.key.clone(), act))
        .collect();

    for act in &mut old.activites {
        if incoming.swap_remove(&act.key).is_some() {
            // Every scalar is folded into the key, so a match has nothing
            // left to diff. Local staffing state (assignments, counts) is
            // kept as-is.
            act.change.reset();
        } else {
            act.change.mark_removed();
            report.activites_removed += 1;
        }
    }

    for (_, mut added) in incoming {
        added.change.mark_added();
        report.activites_added += 1;
        old.activites.push(added);
    }
}

/// Serialize a scalar field into a diff payload value
///
/// Plain domain scalars and vectors cannot fail to serialize.
fn field_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
