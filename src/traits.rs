//! Abstractions for time and host callbacks to enable testing.
//!
//! This module provides traits for:
//! - `Clock`: Abstracting "today" detection for deterministic testing
//! - `PickerObserver`: Abstracting the host notifications emitted when a day
//!   is selected or another month is presented

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};

// ==================== Clock Trait ====================

/// Trait for abstracting time access.
///
/// The picker never calls `Local::now()` directly; all today-detection goes
/// through a `Clock` so tests can pin the calendar to a fixed day.
pub trait Clock: Send + Sync {
    /// Get the current time in UTC.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Get the current time in the local timezone.
    fn now_local(&self) -> DateTime<Local>;

    /// Today's date with the time of day stripped.
    fn today(&self) -> NaiveDate {
        self.now_local().date_naive()
    }
}

/// System clock implementation using real time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Mock clock for testing with controllable time.
#[derive(Debug, Clone)]
pub struct MockClock {
    utc_time: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a new mock clock set to the given UTC time.
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            utc_time: Arc::new(Mutex::new(time)),
        }
    }

    /// Set the mock clock to a new time.
    pub fn set_time(&self, time: DateTime<Utc>) {
        *self.utc_time.lock().unwrap() = time;
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, duration: chrono::Duration) {
        let mut time = self.utc_time.lock().unwrap();
        *time = *time + duration;
    }
}

impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.utc_time.lock().unwrap()
    }

    fn now_local(&self) -> DateTime<Local> {
        self.now_utc().with_timezone(&Local)
    }
}

// ==================== PickerObserver Trait ====================

/// Trait for host notifications.
///
/// The picker calls these after committing a selection or presenting a
/// different month. A failing observer is logged and otherwise ignored; it
/// must not disturb picker state.
pub trait PickerObserver: Send + Sync {
    /// A day was committed as the selected date.
    fn day_selected(&self, date: NaiveDate) -> Result<()>;

    /// Another month was presented; `description` is its display label,
    /// e.g. "June 2026".
    fn month_presented(&self, description: &str) -> Result<()>;
}

/// Observer that ignores all notifications.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl PickerObserver for NoopObserver {
    fn day_selected(&self, _date: NaiveDate) -> Result<()> {
        Ok(())
    }

    fn month_presented(&self, _description: &str) -> Result<()> {
        Ok(())
    }
}

/// Notification recorded by [`MockObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    DaySelected(NaiveDate),
    MonthPresented(String),
}

/// Mock observer for testing that records all notifications.
#[derive(Debug, Clone, Default)]
pub struct MockObserver {
    events: Arc<Mutex<Vec<PickerEvent>>>,
}

impl MockObserver {
    /// Create a new mock observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all events that have been recorded.
    pub fn events(&self) -> Vec<PickerEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Get the dates of all recorded selection events, in order.
    pub fn selected_dates(&self) -> Vec<NaiveDate> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PickerEvent::DaySelected(d) => Some(d),
                PickerEvent::MonthPresented(_) => None,
            })
            .collect()
    }

    /// Get the labels of all recorded month presentations, in order.
    pub fn presented_months(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PickerEvent::MonthPresented(m) => Some(m),
                PickerEvent::DaySelected(_) => None,
            })
            .collect()
    }

    /// Get the count of recorded events.
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl PickerObserver for MockObserver {
    fn day_selected(&self, date: NaiveDate) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(PickerEvent::DaySelected(date));
        Ok(())
    }

    fn month_presented(&self, description: &str) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(PickerEvent::MonthPresented(description.to_string()));
        Ok(())
    }
}

/// Observer that always fails, for exercising the swallow-and-log path.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct FailingObserver;

#[cfg(test)]
impl PickerObserver for FailingObserver {
    fn day_selected(&self, _date: NaiveDate) -> Result<()> {
        anyhow::bail!("observer rejected day_selected")
    }

    fn month_presented(&self, _description: &str) -> Result<()> {
        anyhow::bail!("observer rejected month_presented")
    }
}
