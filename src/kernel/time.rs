use chrono::{Local, NaiveTime};

/// 12-hour clock as spoken back to the driver, e.g. "03:07 PM".
pub const SPOKEN_TIME_FORMAT: &str = "%I:%M %p";

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;

    fn spoken(&self) -> String {
        self.now().format(SPOKEN_TIME_FORMAT).to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Frozen clock for replayable sessions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
