use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Wall clock truncated to microseconds, the precision SQLite round-trips.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
