//! GCA Reconciliation
//!
//! Compares a persisted course tree against a freshly fetched snapshot and
//! stages the outcome for human approval.
//!
//! # Core Concepts
//!
//! - [`reconcile`]: three-level key-matched tree diff; the persisted tree is
//!   mutated in place and the snapshot's unmatched subtrees are moved under it
//! - [`ReconcileReport`]: per-level counts of what the diff staged
//! - [`approve_course`] / [`approve_seance`] / [`approve_activite`]: commit,
//!   finalize, or eliminate one staged change
//! - [`ApprovalOutcome`]: applied, no-op, or stale-state conflict

mod approval;
mod engine;
mod error;

pub use approval::{approve_activite, approve_course, approve_seance, ApprovalOutcome};
pub use engine::{reconcile, ReconcileReport};
pub use error::ApprovalError;
