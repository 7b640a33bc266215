//! Domain enumerations
//!
//! String spellings match the upstream source's vocabulary so serialized
//! trees stay interchangeable with previously persisted data.

use serde::{Deserialize, Serialize};

/// Kind of scheduled activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Tutorial (travaux dirigés)
    #[serde(rename = "TD")]
    Td,
    /// Lab (travaux pratiques)
    #[serde(rename = "TP")]
    Tp,
    /// Regular lecture
    #[serde(rename = "COURS")]
    Cours,
}

/// Delivery mode of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityMode {
    /// On campus
    #[serde(rename = "PRESENTIEL")]
    Presentiel,
    /// Remote
    #[serde(rename = "DISTANCIEL")]
    Distanciel,
}

/// Day of week, 1 = Monday through 7 = Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jour {
    /// Monday
    Lundi = 1,
    /// Tuesday
    Mardi = 2,
    /// Wednesday
    Mercredi = 3,
    /// Thursday
    Jeudi = 4,
    /// Friday
    Vendredi = 5,
    /// Saturday
    Samedi = 6,
    /// Sunday
    Dimanche = 7,
}

/// Campus where a session is taught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Campus {
    /// Gatineau campus
    #[serde(rename = "gatineau")]
    Gatineau,
    /// Saint-Jérôme campus
    #[serde(rename = "st-jerome")]
    StJerome,
    /// Unknown or not yet assigned
    #[serde(rename = "non-specifie")]
    NonSpecifie,
}

/// Confirmation status of a course within a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CourseStatus {
    /// Confirmed against the upstream schedule
    #[serde(rename = "confirmee")]
    Confirmee,
    /// Not (or no longer) found upstream
    #[default]
    #[serde(rename = "non_confirmee")]
    NonConfirmee,
}

/// Confirmation status of an activity's staffing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityStatus {
    /// Staffing confirmed
    #[serde(rename = "confirmee")]
    Confirmee,
    /// Staffing pending
    #[default]
    #[serde(rename = "non_confirmee")]
    NonConfirmee,
}

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CampaignStatus {
    /// Recruitment in progress
    #[default]
    #[serde(rename = "en_cours")]
    EnCours,
    /// Closed
    #[serde(rename = "cloturee")]
    Cloturee,
    /// Cancelled
    #[serde(rename = "annulee")]
    Annulee,
}

/// Grade obtained by a candidate in the course they apply to assist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Note {
    /// A+
    #[serde(rename = "A+")]
    APlus,
    /// A
    #[serde(rename = "A")]
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    #[serde(rename = "B")]
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// Not provided
    #[default]
    #[serde(rename = "non-specifie")]
    NonSpecifie,
}
