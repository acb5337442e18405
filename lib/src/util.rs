// lib/src/util.rs

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use models::{Record, RecordId};

/// Source of the current time. The store takes one so that record timestamps
/// and "today" can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date in the process-local timezone.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

/// Draws a random id not already used in `records`.
pub fn next_record_id<T: Record>(records: &[T]) -> RecordId {
    loop {
        let id = RecordId::generate();
        if !records.iter().any(|r| r.id() == &id) {
            return id;
        }
    }
}

pub fn position_by_id<T: Record>(records: &[T], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id().as_str() == id)
}

pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id().as_str() == id)
}
