use chrono::{Local, Timelike};

use horo_dial::{ClockTime, TimeSource, TimeSourceError};

/// Local civil time from the operating system, at one-second resolution.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&mut self) -> Result<ClockTime, TimeSourceError> {
        reading_from(&Local::now())
    }
}

/// Converts any `chrono` time-of-day into a validated reading.
///
/// Sub-second parts are dropped. Leap seconds are carried in chrono's
/// nanosecond field, so `second()` never exceeds 59.
pub fn reading_from<T: Timelike>(t: &T) -> Result<ClockTime, TimeSourceError> {
    Ok(ClockTime::from_hms(t.hour(), t.minute(), t.second())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn converts_time_of_day() {
        let t = NaiveTime::from_hms_milli_opt(21, 7, 59, 999).unwrap();
        assert_eq!(reading_from(&t).unwrap(), ClockTime::new(21, 7, 59).unwrap());
    }

    #[test]
    fn leap_second_reads_as_59() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(reading_from(&t).unwrap().second(), 59);
    }

    #[test]
    fn system_source_returns_valid_reading() {
        let mut src = SystemTimeSource::new();
        let t = src.now().unwrap();
        assert!(t.hour() < 24 && t.minute() < 60 && t.second() < 60);
    }
}
