use chrono::{DateTime, Utc};

/// Elapsed time split the way the workout header shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_seconds: u64,
}

impl Elapsed {
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
            total_seconds,
        }
    }

    /// `MM:SS`, minutes keep counting past the hour
    pub fn clock_display(&self) -> String {
        format!("{:02}:{:02}", self.total_seconds / 60, self.seconds)
    }
}

/// Wall clock stopwatch for the active workout
///
/// Every operation has an `_at` variant taking the current time so callers
/// (and tests) can drive it without sleeping.
#[derive(Debug, Clone, Default)]
pub struct DurationClock {
    started_at: Option<DateTime<Utc>>,
    stopped_at: Option<DateTime<Utc>>,
}

impl DurationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn start(&mut self) {
        self.start_at(Utc::now())
    }

    /// No-op while running. A stopped clock starts again from zero
    pub fn start_at(&mut self, now: DateTime<Utc>) {
        if !self.is_running() {
            self.reset_at(now);
        }
    }

    pub fn reset(&mut self) {
        self.reset_at(Utc::now())
    }

    /// Zero and keep running
    pub fn reset_at(&mut self, now: DateTime<Utc>) {
        self.started_at = Some(now);
        self.stopped_at = None;
    }

    pub fn stop(&mut self) {
        self.stop_at(Utc::now())
    }

    pub fn stop_at(&mut self, now: DateTime<Utc>) {
        if self.is_running() {
            self.stopped_at = Some(now);
        }
    }

    pub fn elapsed(&self) -> Elapsed {
        self.elapsed_at(Utc::now())
    }

    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Elapsed {
        let Some(started_at) = self.started_at else {
            return Elapsed::default();
        };
        let end = self.stopped_at.unwrap_or(now);
        let seconds = (end - started_at).num_seconds().max(0) as u64;
        Elapsed::from_seconds(seconds)
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[test]
    fn test_elapsed_split() {
        let elapsed = Elapsed::from_seconds(3725);
        assert_eq!((elapsed.hours, elapsed.minutes, elapsed.seconds), (1, 2, 5));
        assert_eq!(elapsed.clock_display(), "62:05");
        assert_eq!(Elapsed::from_seconds(59).clock_display(), "00:59");
    }

    #[test]
    fn test_start_reset_stop() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let mut clock = DurationClock::new();
        assert_eq!(clock.elapsed_at(t0).total_seconds, 0);

        clock.start_at(t0);
        assert!(clock.is_running());
        // Starting again doesn't restart
        clock.start_at(t0 + Duration::seconds(30));
        assert_eq!(clock.elapsed_at(t0 + Duration::seconds(90)).total_seconds, 90);

        clock.reset_at(t0 + Duration::seconds(100));
        assert_eq!(clock.elapsed_at(t0 + Duration::seconds(110)).total_seconds, 10);

        clock.stop_at(t0 + Duration::seconds(120));
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_at(t0 + Duration::seconds(500)).total_seconds, 20);
    }

    #[test]
    fn test_clock_going_backwards_is_zero() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let mut clock = DurationClock::new();
        clock.start_at(t0);
        assert_eq!(clock.elapsed_at(t0 - Duration::seconds(5)), Elapsed::default());
    }
}
