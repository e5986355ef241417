use chrono::{NaiveDate, Utc};

/// Source of "today" for domain date logic.
///
/// This is the single source of truth for the current date. Business
/// methods never read the ambient clock directly; they receive a `Clock`
/// at construction so target-date validation and allocation counting stay
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, in UTC.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests.
#[derive(Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
