//! Testing utilities for the GCA workspace
//!
//! Shared fixtures for building schedule trees in tests.

#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use gca_model::{
    Activity, ActivityKey, ActivityMode, ActivityType, Campus, Course, Jour, Ressource, Session,
    Trimestre,
};

pub fn term_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 12)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn term_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 4, 24)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn activity_key(kind: ActivityType, jour: Jour, hr_debut: u16, hr_fin: u16) -> ActivityKey {
    ActivityKey {
        kind,
        mode: ActivityMode::Presentiel,
        jour,
        hr_debut,
        hr_fin,
        date_debut: term_start(),
        date_fin: term_end(),
    }
}

pub fn activity(kind: ActivityType, jour: Jour, hr_debut: u16, hr_fin: u16) -> Activity {
    let mut act = Activity::new(activity_key(kind, jour, hr_debut, hr_fin));
    act.nombre_seances = 13;
    act
}

pub fn session(groupe: &str, campus: Campus) -> Session {
    let mut seance = Session::new(groupe);
    seance.campus = vec![campus];
    seance.ressources = vec![Ressource {
        nom: Some("Tremblay".to_string()),
        prenom: Some("Marie".to_string()),
        courriel: Some("marie.tremblay@example.org".to_string()),
    }];
    seance
}

/// The canonical test course: one session (groupe 20, Gatineau) with one TD
/// and one TP block.
pub fn course_inf1573() -> Course {
    let mut course = Course::new("INF1573", Trimestre::new(20261), "Programmation II");
    course.cycle = 1;

    let mut seance = session("20", Campus::Gatineau);
    seance
        .activites
        .push(activity(ActivityType::Td, Jour::Lundi, 8, 10));
    seance
        .activites
        .push(activity(ActivityType::Tp, Jour::Mercredi, 13, 16));
    course.seances.push(seance);
    course
}
