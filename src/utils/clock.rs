use chrono::{DateTime, Local};

/// Source of the current instant. The engine never reads the wall clock
/// itself; callers pass `now` explicitly and only the outermost layer asks a
/// `Clock` for it.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant. Used by tests and by `--at` overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
