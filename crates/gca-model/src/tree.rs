//! The course → session → activity tree
//!
//! Each level exclusively owns its children; moving a subtree between trees
//! is a plain move of the owned value. Activities reference candidatures by
//! id only - the records themselves live with the campaign.

use crate::candidature::CandidatureId;
use crate::change::Change;
use crate::enums::{ActivityStatus, Campus, CourseStatus};
use crate::keys::{ActivityKey, CourseId, Trimestre};
use serde::{Deserialize, Serialize};

/// Instructor descriptor attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ressource {
    /// Family name
    pub nom: Option<String>,
    /// Given name
    pub prenom: Option<String>,
    /// Email address
    pub courriel: Option<String>,
}

/// One course inside a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code
    pub sigle: String,
    /// Academic term
    pub trimestre: Trimestre,
    /// Course title
    pub titre: String,
    /// Cycle (1-3)
    pub cycle: u8,
    /// Whether the latest sync found the course upstream
    pub status: CourseStatus,
    /// Staged classification from the latest reconciliation
    pub change: Change,
    /// Sessions (groupes) of the course
    pub seances: Vec<Session>,
}

impl Course {
    /// Create a course with no sessions and no staged change
    #[must_use]
    pub fn new(sigle: impl Into<String>, trimestre: Trimestre, titre: impl Into<String>) -> Self {
        Self {
            sigle: sigle.into(),
            trimestre,
            titre: titre.into(),
            cycle: 1,
            status: CourseStatus::default(),
            change: Change::default(),
            seances: Vec::new(),
        }
    }

    /// Identity of this course
    #[inline]
    #[must_use]
    pub fn id(&self) -> CourseId {
        CourseId::new(self.sigle.clone(), self.trimestre)
    }

    /// Look up a session by groupe
    #[must_use]
    pub fn seance(&self, groupe: &str) -> Option<&Session> {
        self.seances.iter().find(|s| s.groupe == groupe)
    }

    /// Look up a session by groupe, mutably
    pub fn seance_mut(&mut self, groupe: &str) -> Option<&mut Session> {
        self.seances.iter_mut().find(|s| s.groupe == groupe)
    }
}

/// One session (groupe) of a course
///
/// Identity within the course is the `groupe` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Section identifier within the course
    pub groupe: String,
    /// Campuses the session is taught on
    pub campus: Vec<Campus>,
    /// Instructors
    pub ressources: Vec<Ressource>,
    /// Staged classification from the latest reconciliation
    pub change: Change,
    /// Weekly activity blocks
    pub activites: Vec<Activity>,
}

impl Session {
    /// Create a session with no activities
    #[must_use]
    pub fn new(groupe: impl Into<String>) -> Self {
        Self {
            groupe: groupe.into(),
            campus: Vec::new(),
            ressources: Vec::new(),
            change: Change::default(),
            activites: Vec::new(),
        }
    }

    /// Look up an activity by its structural key
    #[must_use]
    pub fn activite(&self, key: &ActivityKey) -> Option<&Activity> {
        self.activites.iter().find(|a| &a.key == key)
    }

    /// Look up an activity by its structural key, mutably
    pub fn activite_mut(&mut self, key: &ActivityKey) -> Option<&mut Activity> {
        self.activites.iter_mut().find(|a| &a.key == key)
    }
}

/// One weekly scheduled meeting block of a session
///
/// The schedule tuple in `key` is the activity's whole identity; the
/// remaining fields are local staffing state invisible to reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Structural identity (schedule tuple)
    #[serde(flatten)]
    pub key: ActivityKey,
    /// Number of meetings over the term
    pub nombre_seances: u32,
    /// Staffing confirmation status
    pub status: ActivityStatus,
    /// Assigned candidatures (non-owning references)
    pub responsables: Vec<CandidatureId>,
    /// Staged classification from the latest reconciliation
    pub change: Change,
}

impl Activity {
    /// Create an unassigned activity from its key
    #[must_use]
    pub fn new(key: ActivityKey) -> Self {
        Self {
            key,
            nombre_seances: 0,
            status: ActivityStatus::default(),
            responsables: Vec::new(),
            change: Change::default(),
        }
    }
}
