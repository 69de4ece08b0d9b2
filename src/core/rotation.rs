// src/core/rotation.rs
use chrono::{Duration, Local, NaiveDateTime};

use crate::models::RotationAdvice;

pub const DEFAULT_ROTATION_DAYS: u32 = 90;

#[derive(Debug, Clone, Copy)]
pub struct RotationAdvisor {
    rotate_after_days: u32,
}

impl Default for RotationAdvisor {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_DAYS)
    }
}

impl RotationAdvisor {
    pub fn new(rotate_after_days: u32) -> Self {
        Self { rotate_after_days }
    }

    pub fn advise(&self) -> RotationAdvice {
        self.advise_at(Local::now().naive_local())
    }

    /// Advice relative to `now`; only the calendar date is kept.
    pub fn advise_at(&self, now: NaiveDateTime) -> RotationAdvice {
        let created = now.date();
        RotationAdvice {
            created,
            rotate_by: created + Duration::days(i64::from(self.rotate_after_days)),
        }
    }
}
