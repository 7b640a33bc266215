//! Candidates and their applications
//!
//! Candidatures are owned by the campaign side of the system; activities
//! only reference them by [`CandidatureId`]. Deleting an activity severs the
//! association without touching the candidature itself.

use crate::enums::{Campus, Note};
use crate::keys::Trimestre;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate id of a candidature record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidatureId(pub i64);

impl fmt::Display for CandidatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student eligible to apply for TA positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Institutional permanent code
    pub code_permanent: String,
    /// Contact email
    pub email: String,
    /// Family name
    pub nom: String,
    /// Given name
    pub prenom: String,
    /// Study cycle (1-3), drives the salary scale
    pub cycle: u8,
    /// Home campus
    pub campus: Campus,
    /// Enrolled program
    pub programme: String,
    /// Term the student applies for
    pub trimestre: Trimestre,
}

/// A student's application to assist one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidature {
    /// Record id, referenced by assigned activities
    pub id: CandidatureId,
    /// The applying student
    pub etudiant: Student,
    /// Grade the student obtained in the course
    pub note: Note,
}
