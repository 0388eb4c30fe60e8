use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

/// Source of the current date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock each time it is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Clock handle that can be put into Leptos context.
#[derive(Clone)]
pub struct SiteClock(Arc<dyn Clock>);

impl SiteClock {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }

    /// Clock pinned to January 1st of `year`.
    pub fn fixed_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(|d| Self::new(FixedClock(d)))
    }

    pub fn current_year(&self) -> i32 {
        self.0.today().year()
    }
}

impl Default for SiteClock {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl std::fmt::Debug for SiteClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SiteClock").field(&self.0.today()).finish()
    }
}
