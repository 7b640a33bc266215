//! Staffing campaigns
//!
//! A campaign covers one trimester and owns the courses being staffed, the
//! pay configuration, and the aggregate statistics shown to coordinators.

use crate::candidature::{Candidature, CandidatureId};
use crate::enums::{ActivityType, CampaignStatus};
use crate::error::ModelError;
use crate::keys::Trimestre;
use crate::tree::Course;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A campaign may not be opened further ahead than this many trimesters
pub const MAX_TRIMESTRES_AHEAD: i64 = 3;

/// Paid hours per weekly meeting, by activity kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityHours {
    /// Preparation hours, paid once per weekly activity of a kind
    pub preparation: f64,
    /// Contact/work hours, paid for every meeting
    pub travail: f64,
}

/// Pay configuration of a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Hourly salary by study cycle (index 0 = cycle 1)
    pub echelle_salariale: [f64; 3],
    /// Paid hours per activity kind
    pub activite_heure: HashMap<ActivityType, ActivityHours>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        let mut activite_heure = HashMap::new();
        activite_heure.insert(
            ActivityType::Td,
            ActivityHours {
                preparation: 2.0,
                travail: 2.0,
            },
        );
        activite_heure.insert(
            ActivityType::Tp,
            ActivityHours {
                preparation: 1.0,
                travail: 3.0,
            },
        );
        Self {
            echelle_salariale: [18.85, 24.49, 26.48],
            activite_heure,
        }
    }
}

/// Aggregate campaign statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CampaignStats {
    /// Projected total salary cost
    pub cout_total: f64,
    /// Number of courses in the campaign
    pub nb_cours: usize,
    /// TD activities across all courses
    pub nbr_td_total: usize,
    /// TP activities across all courses
    pub nbr_tp_total: usize,
    /// Distinct candidates per cycle (index 0 = cycle 1)
    pub nbr_candidats_par_cycle: [usize; 3],
    /// Distinct assigned assistants per cycle
    pub nbr_assistants_par_cycle: [usize; 3],
}

/// A TA staffing campaign for one trimester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Term the campaign staffs
    pub trimestre: Trimestre,
    /// Lifecycle status
    pub status: CampaignStatus,
    /// Pay configuration
    pub config: CampaignConfig,
    /// Courses under recruitment
    pub cours: Vec<Course>,
}

impl Campaign {
    /// Open a campaign for `trimestre`
    ///
    /// # Errors
    /// [`ModelError::TrimestreTooFarAhead`] when the trimester lies more than
    /// [`MAX_TRIMESTRES_AHEAD`] trimesters after the one containing `today`.
    pub fn create(
        trimestre: Trimestre,
        config: CampaignConfig,
        today: NaiveDate,
    ) -> Result<Self, ModelError> {
        let current = Trimestre::current(today);
        if trimestre.trimestres_after(current) > MAX_TRIMESTRES_AHEAD {
            return Err(ModelError::TrimestreTooFarAhead {
                trimestre,
                max_ahead: MAX_TRIMESTRES_AHEAD,
            });
        }
        Ok(Self {
            trimestre,
            status: CampaignStatus::default(),
            config,
            cours: Vec::new(),
        })
    }

    /// Add a course unless its sigle is already present
    ///
    /// Returns whether the course was added.
    pub fn add_course(&mut self, sigle: impl Into<String>, titre: impl Into<String>) -> bool {
        let sigle = sigle.into();
        if self.cours.iter().any(|c| c.sigle == sigle) {
            return false;
        }
        self.cours.push(Course::new(sigle, self.trimestre, titre));
        true
    }

    /// Reconcile the course list against a desired `(sigle, titre)` set
    ///
    /// Courses absent from `desired` are dropped with their whole subtree;
    /// unseen sigles are added empty. Existing courses are left untouched so
    /// staged changes and assignments survive. Duplicate sigles in `desired`
    /// are ignored after the first occurrence.
    pub fn apply_course_list(&mut self, desired: &[(String, String)]) {
        let wanted: HashSet<&str> = desired.iter().map(|(sigle, _)| sigle.as_str()).collect();
        self.cours.retain(|c| wanted.contains(c.sigle.as_str()));

        let mut seen: HashSet<String> = self.cours.iter().map(|c| c.sigle.clone()).collect();
        for (sigle, titre) in desired {
            if seen.insert(sigle.clone()) {
                self.cours
                    .push(Course::new(sigle.clone(), self.trimestre, titre.clone()));
            }
        }
    }

    /// Compute aggregate statistics
    ///
    /// `candidatures` is the campaign's candidature pool keyed by id; an
    /// assignment referencing an unknown id is skipped. Preparation hours are
    /// charged once per activity kind a student covers weekly within one
    /// session; work hours are charged for every meeting.
    #[must_use]
    pub fn stats(&self, candidatures: &HashMap<CandidatureId, Candidature>) -> CampaignStats {
        let mut stats = CampaignStats {
            nb_cours: self.cours.len(),
            ..CampaignStats::default()
        };

        let mut candidats: [HashSet<&str>; 3] = Default::default();
        for cand in candidatures.values() {
            if cand.etudiant.trimestre == self.trimestre {
                if let Some(set) = candidats.get_mut(cycle_index(cand.etudiant.cycle)) {
                    set.insert(cand.etudiant.code_permanent.as_str());
                }
            }
        }

        let mut assistants: [HashSet<&str>; 3] = Default::default();
        for course in &self.cours {
            for seance in &course.seances {
                // Weekly activity counts reset per session
                let mut weekly: HashMap<(&str, ActivityType), u32> = HashMap::new();
                for act in &seance.activites {
                    match act.key.kind {
                        ActivityType::Td => stats.nbr_td_total += 1,
                        ActivityType::Tp => stats.nbr_tp_total += 1,
                        ActivityType::Cours => {}
                    }
                    let Some(hours) = self.config.activite_heure.get(&act.key.kind) else {
                        continue;
                    };
                    for id in &act.responsables {
                        let Some(cand) = candidatures.get(id) else {
                            continue;
                        };
                        let idx = cycle_index(cand.etudiant.cycle);
                        let code = cand.etudiant.code_permanent.as_str();
                        assistants[idx].insert(code);

                        let count = weekly.entry((code, act.key.kind)).or_insert(0);
                        *count += 1;

                        let salaire = self.config.echelle_salariale[idx];
                        let n = f64::from(act.nombre_seances);
                        if *count == 1 {
                            stats.cout_total += n * hours.preparation * salaire;
                        }
                        stats.cout_total += n * hours.travail * salaire;
                    }
                }
            }
        }

        for idx in 0..3 {
            stats.nbr_candidats_par_cycle[idx] = candidats[idx].len();
            stats.nbr_assistants_par_cycle[idx] = assistants[idx].len();
        }
        stats
    }
}

/// Clamp a 1-based study cycle into a scale index
fn cycle_index(cycle: u8) -> usize {
    usize::from(cycle.clamp(1, 3) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ActivityMode, Campus, Jour, Note};
    use crate::keys::ActivityKey;
    use crate::tree::{Activity, Session};
    use crate::Student;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn key(kind: ActivityType, hr_debut: u16) -> ActivityKey {
        let date = NaiveDate::from_ymd_opt(2026, 9, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ActivityKey {
            kind,
            mode: ActivityMode::Presentiel,
            jour: Jour::Lundi,
            hr_debut,
            hr_fin: hr_debut + 2,
            date_debut: date,
            date_fin: date,
        }
    }

    fn candidature(id: i64, cycle: u8, trimestre: Trimestre) -> Candidature {
        Candidature {
            id: CandidatureId(id),
            etudiant: Student {
                code_permanent: format!("ETU{id}"),
                email: format!("etu{id}@example.org"),
                nom: "Tremblay".into(),
                prenom: "Alex".into(),
                cycle,
                campus: Campus::Gatineau,
                programme: "INF".into(),
                trimestre,
            },
            note: Note::A,
        }
    }

    #[test]
    fn create_rejects_far_future_trimestre() {
        // Today is 20262; 20273 is four trimesters ahead
        let err = Campaign::create(Trimestre::new(20273), CampaignConfig::default(), today());
        assert!(matches!(err, Err(ModelError::TrimestreTooFarAhead { .. })));

        let ok = Campaign::create(Trimestre::new(20272), CampaignConfig::default(), today());
        assert!(ok.is_ok());
    }

    #[test]
    fn add_course_deduplicates_sigles() {
        let mut campaign =
            Campaign::create(Trimestre::new(20263), CampaignConfig::default(), today()).unwrap();
        assert!(campaign.add_course("INF1573", "Programmation II"));
        assert!(!campaign.add_course("INF1573", "Programmation II"));
        assert_eq!(campaign.cours.len(), 1);
    }

    #[test]
    fn apply_course_list_adds_and_removes() {
        let mut campaign =
            Campaign::create(Trimestre::new(20263), CampaignConfig::default(), today()).unwrap();
        campaign.add_course("INF1573", "Programmation II");
        campaign.add_course("INF1563", "Programmation I");

        campaign.apply_course_list(&[
            ("INF1573".into(), "Programmation II".into()),
            ("INF4173".into(), "Systèmes".into()),
            ("INF4173".into(), "Systèmes".into()),
        ]);

        let sigles: Vec<&str> = campaign.cours.iter().map(|c| c.sigle.as_str()).collect();
        assert_eq!(sigles, vec!["INF1573", "INF4173"]);
    }

    #[test]
    fn stats_charges_preparation_once_per_weekly_kind() {
        let trimestre = Trimestre::new(20263);
        let mut campaign =
            Campaign::create(trimestre, CampaignConfig::default(), today()).unwrap();
        campaign.add_course("INF1573", "Programmation II");

        let mut seance = Session::new("20");
        // Two TD blocks covered by the same cycle-1 student, 10 meetings each
        for hr in [8, 13] {
            let mut act = Activity::new(key(ActivityType::Td, hr));
            act.nombre_seances = 10;
            act.responsables.push(CandidatureId(1));
            seance.activites.push(act);
        }
        campaign.cours[0].seances.push(seance);

        let mut pool = HashMap::new();
        pool.insert(CandidatureId(1), candidature(1, 1, trimestre));

        let stats = campaign.stats(&pool);
        assert_eq!(stats.nbr_td_total, 2);
        assert_eq!(stats.nbr_tp_total, 0);
        assert_eq!(stats.nbr_assistants_par_cycle, [1, 0, 0]);
        assert_eq!(stats.nbr_candidats_par_cycle, [1, 0, 0]);

        // Default TD hours: 2.0 prep (once) + 2.0 work (both blocks), 18.85/h
        let expected = 10.0 * 2.0 * 18.85 + 2.0 * (10.0 * 2.0 * 18.85);
        assert!((stats.cout_total - expected).abs() < 1e-9);
    }
}
