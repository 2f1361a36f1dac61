// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use portfolio_blog::application::ports::{time::Clock, util::SlugGenerator};
use portfolio_blog::infrastructure::util::slugify;
use std::sync::atomic::{AtomicI64, Ordering};

use super::time::fixed_now;

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Starts at [`fixed_now`] and advances one second per call, so successive
/// writes get strictly increasing timestamps.
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

pub const FIXED_SUFFIX: &str = "abc123";

/// Real slug rules with a predictable collision suffix.
#[derive(Clone)]
pub struct FixedSuffixSlug;

impl SlugGenerator for FixedSuffixSlug {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }

    fn collision_suffix(&self) -> String {
        FIXED_SUFFIX.to_string()
    }
}
