//! Source of "today" for the services.
//!
//! The timeline engine never reads the clock itself; services ask a [`Clock`]
//! and pass the date down, which lets tests pin the date.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the backend
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
