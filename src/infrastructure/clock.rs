// src/infrastructure/clock.rs
//
// Wall-clock implementation of the domain clock.

use chrono::{Local, NaiveDate};

use crate::domain::Clock;

/// System clock - uses the local calendar date.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
