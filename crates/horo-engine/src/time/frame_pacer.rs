use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Fixed-rate frame scheduler.
///
/// The runtime asks [`FramePacer::deadline`] when to wake up next and calls
/// [`FramePacer::tick`] once per frame it actually runs. Deadlines advance in
/// whole intervals; after a stall the schedule restarts from the stall instead
/// of replaying the missed frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
    last: Option<Instant>,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FramePacer {
    /// Creates a pacer running at `frames_per_second` (at least 1).
    pub fn new(frames_per_second: u32) -> Self {
        let fps = frames_per_second.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            next: None,
            last: None,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next frame is due. `None` before the first tick.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// True if a frame should run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|next| now >= next)
    }

    /// Forgets the schedule so the next frame is due immediately.
    ///
    /// Used after resume or when the window needs an out-of-band redraw.
    pub fn reset(&mut self) {
        self.next = None;
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Records a frame at `now` and schedules the next one.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        let dt = elapsed.clamp(self.dt_min, self.dt_max);

        let next = match self.next {
            Some(prev) if prev + self.interval > now => prev + self.interval,
            _ => now + self.interval,
        };
        self.next = Some(next);
        self.last = Some(now);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_frame_is_due_immediately() {
        let pacer = FramePacer::new(10);
        assert!(pacer.is_due(Instant::now()));
        assert_eq!(pacer.deadline(), None);
    }

    #[test]
    fn interval_follows_rate() {
        assert_eq!(FramePacer::new(10).interval(), 100 * MS);
        assert_eq!(FramePacer::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn deadlines_advance_in_whole_intervals() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(10);

        pacer.tick_at(t0);
        assert_eq!(pacer.deadline(), Some(t0 + 100 * MS));
        assert!(!pacer.is_due(t0 + 50 * MS));
        assert!(pacer.is_due(t0 + 100 * MS));

        // Woken a little late: the schedule does not drift.
        pacer.tick_at(t0 + 103 * MS);
        assert_eq!(pacer.deadline(), Some(t0 + 200 * MS));
    }

    #[test]
    fn stall_restarts_schedule() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(10);
        pacer.tick_at(t0);

        let late = t0 + 2 * Duration::from_secs(1);
        let ft = pacer.tick_at(late);
        assert_eq!(pacer.deadline(), Some(late + 100 * MS));
        // dt is clamped after a long stall.
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::default();
        assert_eq!(pacer.tick_at(t0).frame_index, 0);
        assert_eq!(pacer.tick_at(t0 + 20 * MS).frame_index, 1);
    }

    #[test]
    fn reset_makes_frame_due() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(1);
        pacer.tick_at(t0);
        assert!(!pacer.is_due(t0));
        pacer.reset();
        assert!(pacer.is_due(t0));
    }
}
