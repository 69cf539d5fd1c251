//! Daily target cache
//!
//! Holds the target for one UTC date. Guesses share the same immutable
//! `Arc` snapshot until the date rolls over.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::core::catalog::{Catalog, CatalogError};
use crate::types::CharacterRecord;

/// Today's date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Debug, Default)]
pub struct DailyTarget {
    cached: RwLock<Option<(NaiveDate, Arc<CharacterRecord>)>>,
}

impl DailyTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target for `date`, selecting and caching it on first request
    pub async fn get(
        &self,
        catalog: &Catalog,
        date: NaiveDate,
    ) -> Result<Arc<CharacterRecord>, CatalogError> {
        {
            let cached = self.cached.read().await;
            if let Some((day, target)) = cached.as_ref() {
                if *day == date {
                    return Ok(Arc::clone(target));
                }
            }
        }

        let mut cached = self.cached.write().await;
        // Another request may have filled it while we waited for the lock
        if let Some((day, target)) = cached.as_ref() {
            if *day == date {
                return Ok(Arc::clone(target));
            }
        }

        let target = Arc::new(catalog.daily_target(date)?.clone());
        info!(%date, name = target.display_name(), "daily target selected");
        *cached = Some((date, Arc::clone(&target)));
        Ok(target)
    }

    /// Date currently cached, if any
    pub async fn cached_date(&self) -> Option<NaiveDate> {
        self.cached.read().await.as_ref().map(|(day, _)| *day)
    }
}
