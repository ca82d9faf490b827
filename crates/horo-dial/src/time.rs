//! Wall-clock readings and change detection.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{ClockTimeError, TimeField, TimeSourceError};

/// Time of day at one-second granularity.
///
/// Fields are validated on construction, so every `ClockTime` is a real
/// time of day. Equality is field-wise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockTimeError> {
        if hour > 23 {
            return Err(ClockTimeError { field: TimeField::Hour, value: hour.into() });
        }
        if minute > 59 {
            return Err(ClockTimeError { field: TimeField::Minute, value: minute.into() });
        }
        if second > 59 {
            return Err(ClockTimeError { field: TimeField::Second, value: second.into() });
        }
        Ok(Self { hour, minute, second })
    }

    /// Builds a reading from wider integers, as handed out by most clock APIs.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, ClockTimeError> {
        let narrow = |field, v: u32| {
            u8::try_from(v).map_err(|_| ClockTimeError { field, value: v })
        };
        Self::new(
            narrow(TimeField::Hour, hour)?,
            narrow(TimeField::Minute, minute)?,
            narrow(TimeField::Second, second)?,
        )
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of wall-clock readings.
///
/// Implementations return local civil time. Reads are expected to be cheap
/// and free of side effects beyond advancing scripted sources.
pub trait TimeSource {
    fn now(&mut self) -> Result<ClockTime, TimeSourceError>;
}

impl<T: TimeSource + ?Sized> TimeSource for &mut T {
    fn now(&mut self) -> Result<ClockTime, TimeSourceError> {
        (**self).now()
    }
}

/// Gates redraws behind an equality check on successive readings.
#[derive(Debug, Default, Copy, Clone)]
pub struct TickDetector;

impl TickDetector {
    pub fn new() -> Self {
        Self
    }

    /// Reads `source` and returns the reading if it differs from `previous`.
    ///
    /// `previous == None` means nothing has been rendered yet; the first poll
    /// always reports a change.
    pub fn poll<S>(
        &self,
        previous: Option<ClockTime>,
        source: &mut S,
    ) -> Result<Option<ClockTime>, TimeSourceError>
    where
        S: TimeSource + ?Sized,
    {
        let current = source.now()?;
        if previous == Some(current) {
            Ok(None)
        } else {
            log::trace!("tick {current} (previous {previous:?})");
            Ok(Some(current))
        }
    }
}

/// Scripted time source.
///
/// Returns queued readings in order and repeats the last one once the queue
/// drains. An empty source reports [`TimeSourceError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct FixedTimeSource {
    queue: VecDeque<Result<ClockTime, TimeSourceError>>,
    last: Option<ClockTime>,
}

impl FixedTimeSource {
    pub fn new(readings: impl IntoIterator<Item = ClockTime>) -> Self {
        Self {
            queue: readings.into_iter().map(Ok).collect(),
            last: None,
        }
    }

    /// Queues another reading.
    pub fn push(&mut self, reading: ClockTime) {
        self.queue.push_back(Ok(reading));
    }

    /// Queues a failed read.
    pub fn push_error(&mut self, err: TimeSourceError) {
        self.queue.push_back(Err(err));
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&mut self) -> Result<ClockTime, TimeSourceError> {
        match self.queue.pop_front() {
            Some(Ok(t)) => {
                self.last = Some(t);
                Ok(t)
            }
            Some(Err(e)) => Err(e),
            None => self
                .last
                .ok_or_else(|| TimeSourceError::Unavailable("no scripted readings".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    // ── ClockTime ─────────────────────────────────────────────────────────

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(ClockTime::new(24, 0, 0).unwrap_err().field, TimeField::Hour);
        assert_eq!(ClockTime::new(0, 60, 0).unwrap_err().field, TimeField::Minute);
        assert_eq!(ClockTime::new(0, 0, 60).unwrap_err().field, TimeField::Second);
        assert!(ClockTime::new(23, 59, 59).is_ok());
    }

    #[test]
    fn from_hms_rejects_values_wider_than_u8() {
        let err = ClockTime::from_hms(300, 0, 0).unwrap_err();
        assert_eq!(err, ClockTimeError { field: TimeField::Hour, value: 300 });
        assert_eq!(ClockTime::from_hms(7, 8, 9).unwrap(), t(7, 8, 9));
    }

    #[test]
    fn displays_as_hh_mm_ss() {
        assert_eq!(t(9, 5, 0).to_string(), "09:05:00");
    }

    // ── TickDetector ──────────────────────────────────────────────────────

    #[test]
    fn first_poll_always_reports_change() {
        let mut src = FixedTimeSource::new([t(0, 0, 0)]);
        assert_eq!(TickDetector::new().poll(None, &mut src).unwrap(), Some(t(0, 0, 0)));
    }

    #[test]
    fn unchanged_reading_reports_nothing() {
        let mut src = FixedTimeSource::new([t(10, 20, 30)]);
        assert_eq!(TickDetector::new().poll(Some(t(10, 20, 30)), &mut src).unwrap(), None);
    }

    #[test]
    fn any_field_change_reports_new_reading() {
        let det = TickDetector::new();
        let prev = t(10, 20, 30);
        for next in [t(11, 20, 30), t(10, 21, 30), t(10, 20, 31)] {
            let mut src = FixedTimeSource::new([next]);
            assert_eq!(det.poll(Some(prev), &mut src).unwrap(), Some(next));
        }
    }

    #[test]
    fn read_failure_propagates() {
        let mut src = FixedTimeSource::default();
        src.push_error(TimeSourceError::Unavailable("rtc offline".into()));
        let err = TickDetector::new().poll(None, &mut src).unwrap_err();
        assert_eq!(err, TimeSourceError::Unavailable("rtc offline".into()));
    }

    // ── FixedTimeSource ───────────────────────────────────────────────────

    #[test]
    fn fixed_source_repeats_last_reading() {
        let mut src = FixedTimeSource::new([t(1, 2, 3), t(1, 2, 4)]);
        assert_eq!(src.now().unwrap(), t(1, 2, 3));
        assert_eq!(src.now().unwrap(), t(1, 2, 4));
        assert_eq!(src.now().unwrap(), t(1, 2, 4));
    }

    #[test]
    fn empty_fixed_source_is_unavailable() {
        let mut src = FixedTimeSource::default();
        assert!(matches!(src.now(), Err(TimeSourceError::Unavailable(_))));
    }
}
