//! Engine parameters
//!
//! One `ViewParams` value per page invocation; the engine holds no state
//! of its own between calls.

use chrono::{DateTime, NaiveDate, Utc};

/// Entries kept by the top/less product rankings unless overridden
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// Time-range mode for the window filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// No window: every bill passes
    #[default]
    All,
    Year,
    Month,
    Week,
    Day,
    /// Explicit inclusive date pair; a missing bound disables the filter
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// Payment status filter
///
/// `Pending` means the bill still carries an unpaid remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Paid,
}

/// View parameters, one field per page-level control
#[derive(Debug, Clone)]
pub struct ViewParams {
    /// Reference "now" the relative ranges resolve against
    pub now: DateTime<Utc>,
    pub range: TimeRange,
    /// Case-insensitive substring query; empty means no text filter
    pub query: String,
    pub status: Option<StatusFilter>,
    /// Exact-match filter on the bill's effective counter
    pub counter: Option<String>,
    pub ranking_limit: usize,
}

impl ViewParams {
    /// Create parameters with no filtering against the given reference time
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            range: TimeRange::All,
            query: String::new(),
            status: None,
            counter: None,
            ranking_limit: DEFAULT_RANKING_LIMIT,
        }
    }

    /// Set the time-range mode
    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }

    /// Set the text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the payment status filter
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the counter filter
    pub fn with_counter(mut self, counter: impl Into<String>) -> Self {
        self.counter = Some(counter.into());
        self
    }

    /// Set how many entries the product rankings keep
    pub fn with_ranking_limit(mut self, limit: usize) -> Self {
        self.ranking_limit = limit;
        self
    }
}
