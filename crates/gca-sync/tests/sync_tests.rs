use async_trait::async_trait;
use chrono::NaiveDate;
use gca_model::{Campaign, CampaignConfig, ChangeKind, Course, CourseStatus, Trimestre};
use gca_sync::{CourseStore, FetchError, PersistError, ScheduleSource, SyncConfig, SyncService};
use gca_test_utils::course_inf1573;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

struct StubSource {
    calls: AtomicU32,
    fail_first: bool,
    schedule: Vec<Course>,
}

impl StubSource {
    fn new(schedule: Vec<Course>) -> Self {
        Self {
            calls: AtomicU32::new(0),
            fail_first: false,
            schedule,
        }
    }

    fn failing_once(schedule: Vec<Course>) -> Self {
        Self {
            calls: AtomicU32::new(0),
            fail_first: true,
            schedule,
        }
    }
}

#[async_trait]
impl ScheduleSource for StubSource {
    async fn fetch_schedule(&self, _trimestre: Trimestre) -> Result<Vec<Course>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_first && call == 0 {
            return Err(FetchError::Upstream("connection reset".to_string()));
        }
        Ok(self.schedule.clone())
    }
}

#[derive(Default)]
struct RecordingStore {
    persisted: Mutex<Vec<String>>,
    reject: Option<String>,
}

#[async_trait]
impl CourseStore for RecordingStore {
    async fn persist(&self, course: &Course) -> Result<(), PersistError> {
        if self.reject.as_deref() == Some(course.sigle.as_str()) {
            return Err(PersistError("disk full".to_string()));
        }
        self.persisted.lock().unwrap().push(course.sigle.clone());
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn campaign_with(sigles: &[(&str, &str)]) -> Campaign {
    let today = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let mut campaign =
        Campaign::create(Trimestre::new(20261), CampaignConfig::default(), today).unwrap();
    for (sigle, titre) in sigles {
        campaign.add_course(*sigle, *titre);
    }
    campaign
}

#[tokio::test]
async fn sync_reconciles_found_courses_and_flags_missing_ones() {
    init_tracing();
    let mut upstream = course_inf1573();
    upstream.titre = "Programmation avancée".to_string();
    let source = Arc::new(StubSource::new(vec![upstream]));
    let service = SyncService::new(Arc::clone(&source), &SyncConfig::default());

    let mut campaign = campaign_with(&[
        ("INF1573", "Programmation II"),
        ("INF9999", "Cours fantôme"),
    ]);
    // Give the stored course the same tree the fixture has
    campaign.cours[0] = course_inf1573();

    let report = service.sync_campaign(&mut campaign).await;

    assert!(report.is_complete());
    assert_eq!(report.synced, vec!["INF1573".to_string()]);
    assert_eq!(report.unconfirmed, vec!["INF9999".to_string()]);

    let inf1573 = &campaign.cours[0];
    assert_eq!(inf1573.status, CourseStatus::Confirmee);
    assert_eq!(inf1573.change.kind(), ChangeKind::Modified);

    let ghost = &campaign.cours[1];
    assert_eq!(ghost.status, CourseStatus::NonConfirmee);
}

#[tokio::test]
async fn trimester_snapshot_is_fetched_once_per_pass() {
    let source = Arc::new(StubSource::new(vec![course_inf1573()]));
    let service = SyncService::new(Arc::clone(&source), &SyncConfig::default());

    let mut campaign = campaign_with(&[
        ("INF1573", "Programmation II"),
        ("INF1563", "Programmation I"),
    ]);

    service.sync_campaign(&mut campaign).await;
    service.sync_campaign(&mut campaign).await;

    // Two passes over two courses, one upstream fetch
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_failure_skips_the_course_and_is_not_cached() {
    let source = Arc::new(StubSource::failing_once(vec![course_inf1573()]));
    let service = SyncService::new(Arc::clone(&source), &SyncConfig::default());

    let mut campaign = campaign_with(&[
        ("INF9999", "Cours fantôme"),
        ("INF1573", "Programmation II"),
    ]);
    campaign.cours[1] = course_inf1573();

    let report = service.sync_campaign(&mut campaign).await;

    // First course hit the failing fetch and was skipped; the retry for the
    // second course succeeded because the failure was not cached.
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "INF9999");
    assert_eq!(report.synced, vec!["INF1573".to_string()]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn concurrent_snapshots_share_one_fetch() {
    init_tracing();
    let source = Arc::new(StubSource::new(vec![course_inf1573()]));
    let service = Arc::new(SyncService::new(Arc::clone(&source), &SyncConfig::default()));
    let trimestre = Trimestre::new(20261);

    let calls = (0..8).map(|_| {
        let service = Arc::clone(&service);
        async move { service.snapshot(trimestre).await.unwrap() }
    });
    let snapshots = futures::future::join_all(calls).await;

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert!(snapshots.iter().all(|s| s.len() == 1));
}

#[tokio::test]
async fn invalidate_snapshot_forces_refetch() {
    let source = Arc::new(StubSource::new(vec![course_inf1573()]));
    let service = SyncService::new(Arc::clone(&source), &SyncConfig::default());
    let trimestre = Trimestre::new(20261);

    service.fetch_course(trimestre, "INF1573").await.unwrap();
    service.invalidate_snapshot(trimestre);
    service.fetch_course(trimestre, "INF1573").await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn sync_and_persist_commits_every_course() {
    let source = Arc::new(StubSource::new(vec![course_inf1573()]));
    let service = SyncService::new(source, &SyncConfig::default());
    let store = RecordingStore::default();

    let mut campaign = campaign_with(&[
        ("INF1573", "Programmation II"),
        ("INF9999", "Cours fantôme"),
    ]);
    campaign.cours[0] = course_inf1573();

    let report = service.sync_and_persist(&mut campaign, &store).await;

    assert!(report.is_complete());
    assert_eq!(
        *store.persisted.lock().unwrap(),
        vec!["INF1573".to_string(), "INF9999".to_string()]
    );
}

#[tokio::test]
async fn persist_failure_is_reported_per_course() {
    let source = Arc::new(StubSource::new(vec![course_inf1573()]));
    let service = SyncService::new(source, &SyncConfig::default());
    let store = RecordingStore {
        persisted: Mutex::new(Vec::new()),
        reject: Some("INF1573".to_string()),
    };

    let mut campaign = campaign_with(&[
        ("INF1573", "Programmation II"),
        ("INF9999", "Cours fantôme"),
    ]);
    campaign.cours[0] = course_inf1573();

    let report = service.sync_and_persist(&mut campaign, &store).await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "INF1573");
    assert_eq!(*store.persisted.lock().unwrap(), vec!["INF9999".to_string()]);
}
