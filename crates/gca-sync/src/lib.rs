//! GCA Sync
//!
//! Drives a campaign's courses through fetch → reconcile → persist against
//! the authoritative upstream schedule.
//!
//! # Core Concepts
//!
//! - [`ScheduleSource`]: the expensive upstream fetch, already parsed into
//!   domain form by an external adapter
//! - [`CourseStore`]: the persistence collaborator committing reconciled trees
//! - [`SyncService`]: memoizes whole-trimester snapshots through the dogpile
//!   safe cache and reconciles each campaign course in turn; one course's
//!   failure never aborts the batch
//! - [`SyncConfig`]: cache sizing knobs, loadable from TOML

mod config;
mod error;
mod service;
mod source;

pub use config::SyncConfig;
pub use error::{FetchError, PersistError, SyncError};
pub use service::{SyncReport, SyncService};
pub use source::{CourseStore, ScheduleSource};
