//! Per-page visit analytics kept in local storage
//!
//! A [`PageVisit`] follows one visit (start time and deepest scroll) and
//! [`PageAnalytics`] merges its summary into the `pageAnalytics` record as
//! `<page>StartTime`, `<page>MaxScroll` and `<page>TimeSpent`.

use serde_json::{Map, Value};

use super::scroll::{ScrollDepth, ScrollMetrics};
use super::storage::{KeyValueStore, StorageError, keys, read_json_or_default, write_json};

/// What one finished visit amounts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitSummary {
    pub max_scroll: u8,
    pub time_spent_ms: u64,
}

/// One visit to a page, from mount to leave or unload
#[derive(Debug, Clone)]
pub struct PageVisit {
    page: &'static str,
    started_ms: f64,
    depth: ScrollDepth,
    finished: bool,
}

impl PageVisit {
    pub fn start(page: &'static str, now_ms: f64) -> Self {
        Self {
            page,
            started_ms: now_ms,
            depth: ScrollDepth::default(),
            finished: false,
        }
    }

    pub fn page(&self) -> &'static str {
        self.page
    }

    pub fn started_ms(&self) -> f64 {
        self.started_ms
    }

    pub fn record(&mut self, metrics: &ScrollMetrics) -> u8 {
        self.depth.record(metrics)
    }

    /// End the visit. Only the first call yields a summary, so leaving the
    /// page and unloading the document do not count it twice.
    pub fn finish(&mut self, now_ms: f64) -> Option<VisitSummary> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(VisitSummary {
            max_scroll: self.depth.max_percent(),
            time_spent_ms: (now_ms - self.started_ms).max(0.0) as u64,
        })
    }
}

/// The `pageAnalytics` record
#[derive(Debug)]
pub struct PageAnalytics<S> {
    store: S,
}

impl<S: KeyValueStore> PageAnalytics<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whole record; missing or corrupt data reads as empty
    pub fn record(&self) -> Map<String, Value> {
        read_json_or_default(&self.store, keys::PAGE_ANALYTICS)
    }

    /// Store the start time of a visit
    pub fn start(&self, visit: &PageVisit) -> Result<(), StorageError> {
        let mut record = self.record();
        record.insert(format!("{}StartTime", visit.page()), Value::from(visit.started_ms()));
        write_json(&self.store, keys::PAGE_ANALYTICS, &record)
    }

    /// Store the outcome of a finished visit, keeping other pages' entries
    pub fn save(&self, page: &str, summary: &VisitSummary) -> Result<(), StorageError> {
        let mut record = self.record();
        record.insert(format!("{page}MaxScroll"), Value::from(summary.max_scroll));
        record.insert(format!("{page}TimeSpent"), Value::from(summary.time_spent_ms));
        write_json(&self.store, keys::PAGE_ANALYTICS, &record)?;
        tracing::debug!(page, max_scroll = summary.max_scroll, time_spent_ms = summary.time_spent_ms, "page visit saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_visit_keeps_deepest_scroll() {
        let mut visit = PageVisit::start("specialties", 1_000.0);
        visit.record(&ScrollMetrics::new(750.0, 2000.0, 1000.0));
        visit.record(&ScrollMetrics::new(200.0, 2000.0, 1000.0));

        assert_eq!(
            visit.finish(31_000.0),
            Some(VisitSummary {
                max_scroll: 75,
                time_spent_ms: 30_000
            })
        );
    }

    #[test]
    fn test_visit_finishes_once() {
        let mut visit = PageVisit::start("about", 0.0);
        assert!(visit.finish(10.0).is_some());
        assert_eq!(visit.finish(20.0), None);
    }

    #[test]
    fn test_clock_going_backwards_counts_as_zero() {
        let mut visit = PageVisit::start("home", 5_000.0);
        assert_eq!(visit.finish(4_000.0).map(|s| s.time_spent_ms), Some(0));
    }

    #[test]
    fn test_record_merges_pages() {
        let store = MemoryStore::new();
        let analytics = PageAnalytics::new(&store);

        let mut specialties = PageVisit::start("specialties", 100.0);
        analytics.start(&specialties).unwrap();
        specialties.record(&ScrollMetrics::new(1000.0, 2000.0, 1000.0));
        let summary = specialties.finish(2_100.0).unwrap();
        analytics.save("specialties", &summary).unwrap();

        analytics
            .save("about", &VisitSummary { max_scroll: 10, time_spent_ms: 5 })
            .unwrap();

        assert_eq!(
            Value::Object(analytics.record()),
            json!({
                "specialtiesStartTime": 100.0,
                "specialtiesMaxScroll": 100,
                "specialtiesTimeSpent": 2000,
                "aboutMaxScroll": 10,
                "aboutTimeSpent": 5,
            })
        );
    }

    #[test]
    fn test_corrupt_record_is_replaced() {
        let store = MemoryStore::new();
        store.set_item(keys::PAGE_ANALYTICS, "[1, 2").unwrap();

        let analytics = PageAnalytics::new(&store);
        assert!(analytics.record().is_empty());
        analytics
            .save("contact", &VisitSummary { max_scroll: 40, time_spent_ms: 900 })
            .unwrap();
        assert_eq!(analytics.record().get("contactMaxScroll"), Some(&json!(40)));
    }
}
