//! Campaign synchronization
//!
//! One sync pass walks the campaign's courses, pulls the trimester snapshot
//! through the cache, reconciles each course found upstream, and flips the
//! confirmation status of the ones that are not. A fetch or persist failure
//! is recorded against its course and the loop moves on.

use crate::config::SyncConfig;
use crate::error::FetchError;
use crate::source::{CourseStore, ScheduleSource};
use gca_cache::AsyncCache;
use gca_model::{Campaign, Course, CourseStatus, Trimestre};
use gca_reconcile::reconcile;
use std::sync::Arc;
use tokio::time::Duration;

/// Outcome of one sync pass over a campaign
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Courses found upstream and reconciled
    pub synced: Vec<String>,
    /// Courses absent upstream, flipped to non-confirmed
    pub unconfirmed: Vec<String>,
    /// Courses skipped with the error that hit them
    pub failed: Vec<(String, String)>,
}

impl SyncReport {
    /// True when no course was skipped
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Cache-backed synchronization front of the reconciliation engine
pub struct SyncService<S> {
    source: Arc<S>,
    cache: AsyncCache<Arc<Vec<Course>>>,
}

impl<S: ScheduleSource> SyncService<S> {
    /// Create a service over an upstream source
    #[must_use]
    pub fn new(source: Arc<S>, config: &SyncConfig) -> Self {
        Self {
            source,
            cache: AsyncCache::new(
                Duration::from_secs(config.cache_ttl_secs),
                config.cache_capacity,
            ),
        }
    }

    /// Whole-trimester snapshot, memoized
    ///
    /// Concurrent callers for the same trimester share a single upstream
    /// fetch.
    ///
    /// # Errors
    /// Propagates the source's [`FetchError`]; failures are not cached.
    pub async fn snapshot(&self, trimestre: Trimestre) -> Result<Arc<Vec<Course>>, FetchError> {
        let source = Arc::clone(&self.source);
        self.cache
            .get_or_create(&trimestre.to_string(), || async move {
                source.fetch_schedule(trimestre).await.map(Arc::new)
            })
            .await
    }

    /// One course out of the trimester snapshot, if offered upstream
    ///
    /// # Errors
    /// Propagates the snapshot's [`FetchError`].
    pub async fn fetch_course(
        &self,
        trimestre: Trimestre,
        sigle: &str,
    ) -> Result<Option<Course>, FetchError> {
        let snapshot = self.snapshot(trimestre).await?;
        Ok(snapshot.iter().find(|c| c.sigle == sigle).cloned())
    }

    /// Drop the cached snapshot so the next sync refetches
    pub fn invalidate_snapshot(&self, trimestre: Trimestre) {
        self.cache.invalidate(&trimestre.to_string());
    }

    /// Reconcile every course of the campaign against upstream
    ///
    /// Courses whose fetch fails are recorded and skipped; the batch never
    /// aborts.
    pub async fn sync_campaign(&self, campaign: &mut Campaign) -> SyncReport {
        let trimestre = campaign.trimestre;
        let mut report = SyncReport::default();

        for course in &mut campaign.cours {
            match self.fetch_course(trimestre, &course.sigle).await {
                Err(err) => {
                    tracing::warn!(sigle = %course.sigle, error = %err, "skipping course, fetch failed");
                    report.failed.push((course.sigle.clone(), err.to_string()));
                }
                Ok(None) => {
                    course.status = CourseStatus::NonConfirmee;
                    report.unconfirmed.push(course.sigle.clone());
                }
                Ok(Some(new)) => {
                    course.status = CourseStatus::Confirmee;
                    let staged = reconcile(course, new);
                    tracing::info!(sigle = %course.sigle, clean = staged.is_clean(), "course reconciled");
                    report.synced.push(course.sigle.clone());
                }
            }
        }

        tracing::info!(
            %trimestre,
            synced = report.synced.len(),
            unconfirmed = report.unconfirmed.len(),
            failed = report.failed.len(),
            "campaign sync pass finished"
        );
        report
    }

    /// Sync the campaign, then commit every course through `store`
    ///
    /// Persist failures are per-course too, appended to the report's failed
    /// list.
    pub async fn sync_and_persist<P: CourseStore>(
        &self,
        campaign: &mut Campaign,
        store: &P,
    ) -> SyncReport {
        let mut report = self.sync_campaign(campaign).await;

        for course in &campaign.cours {
            if let Err(err) = store.persist(course).await {
                tracing::warn!(sigle = %course.sigle, error = %err, "persist failed");
                report.failed.push((course.sigle.clone(), err.to_string()));
            }
        }
        report
    }
}
