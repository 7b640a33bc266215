//! GCA Domain Model
//!
//! Typed domain objects for teaching-assistant staffing campaigns.
//!
//! # Core Concepts
//!
//! - [`Course`] / [`Session`] / [`Activity`]: the three-level schedule tree,
//!   each level exclusively owned by its parent
//! - [`Change`]: per-node classification of a reconciliation outcome
//!   (unchanged / added / removed / modified with field diffs)
//! - [`ActivityKey`]: structural identity of an activity - the schedule
//!   tuple itself, not a surrogate id
//! - [`Campaign`]: a staffing campaign for one trimester, owning the courses
//!   under recruitment
//! - [`Candidature`]: a student's application, referenced (not owned) by the
//!   activities it is assigned to

mod campaign;
mod candidature;
mod change;
mod enums;
mod error;
mod keys;
mod tree;

pub use campaign::{ActivityHours, Campaign, CampaignConfig, CampaignStats, MAX_TRIMESTRES_AHEAD};
pub use candidature::{Candidature, CandidatureId, Student};
pub use change::{fields, Change, ChangeKind, FieldDiff};
pub use enums::{
    ActivityMode, ActivityStatus, ActivityType, CampaignStatus, Campus, CourseStatus, Jour, Note,
};
pub use error::ModelError;
pub use keys::{ActivityKey, CourseId, Trimestre};
pub use tree::{Activity, Course, Ressource, Session};
