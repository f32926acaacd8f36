//! Frame timing utilities

/// Minimum length of one FPS sampling window, in seconds
pub const SAMPLE_INTERVAL: f64 = 1.0;

/// Frames-per-second sampler driven by an external monotonic clock
///
/// The counter is either uninitialized or sampling. Each sample covers at
/// least [`SAMPLE_INTERVAL`] seconds and reports the exact number of frames
/// counted in it, so a sample that overruns the interval slightly undercounts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FpsCounter {
    state: SamplerState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum SamplerState {
    #[default]
    Uninitialized,
    Sampling {
        last_sample_time: f64,
        frame_count: u32,
    },
}

impl FpsCounter {
    /// Create an uninitialized counter
    pub const fn new() -> Self {
        Self {
            state: SamplerState::Uninitialized,
        }
    }

    /// Start (or restart) sampling at time `now`
    pub fn start(&mut self, now: f64) {
        self.state = SamplerState::Sampling {
            last_sample_time: now,
            frame_count: 0,
        };
    }

    /// Count one frame rendered at time `now`
    ///
    /// Returns the frame count of the window that just closed, if `now` is at
    /// least [`SAMPLE_INTERVAL`] past the start of the current window. Frames
    /// counted before [`start`](Self::start) are ignored.
    pub fn frame(&mut self, now: f64) -> Option<u32> {
        let SamplerState::Sampling {
            last_sample_time,
            frame_count,
        } = &mut self.state
        else {
            return None;
        };

        *frame_count += 1;
        if now - *last_sample_time < SAMPLE_INTERVAL {
            return None;
        }

        let fps = *frame_count;
        *last_sample_time = now;
        *frame_count = 0;
        Some(fps)
    }

    /// Whether [`start`](Self::start) has been called
    pub const fn is_sampling(&self) -> bool {
        matches!(self.state, SamplerState::Sampling { .. })
    }

    /// Frames counted in the current window
    pub const fn frame_count(&self) -> Option<u32> {
        match self.state {
            SamplerState::Sampling { frame_count, .. } => Some(frame_count),
            SamplerState::Uninitialized => None,
        }
    }

    /// Start time of the current window
    pub const fn last_sample_time(&self) -> Option<f64> {
        match self.state {
            SamplerState::Sampling { last_sample_time, .. } => Some(last_sample_time),
            SamplerState::Uninitialized => None,
        }
    }
}

/// Caption shown while the FPS overlay is active
pub fn fps_title(title: &str, fps: u32) -> String {
    format!("{title} (FPS: {fps})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uninitialized_ignores_frames() {
        let mut counter = FpsCounter::new();
        assert!(!counter.is_sampling());
        assert_eq!(counter.frame(10.0), None);
        assert_eq!(counter.frame_count(), None);
        assert_eq!(counter.last_sample_time(), None);
    }

    #[test]
    fn test_start_resets_state() {
        let mut counter = FpsCounter::new();
        counter.start(2.5);
        counter.frame(2.6);
        counter.frame(2.7);
        assert_eq!(counter.frame_count(), Some(2));

        counter.start(5.0);
        assert_eq!(counter.frame_count(), Some(0));
        assert_relative_eq!(counter.last_sample_time().unwrap(), 5.0);
    }

    #[test]
    fn test_sixty_frames_in_one_second() {
        let mut counter = FpsCounter::new();
        counter.start(0.0);

        let mut reports = Vec::new();
        for i in 1..=60 {
            if let Some(fps) = counter.frame(f64::from(i) / 60.0) {
                reports.push((i, fps));
            }
        }

        assert_eq!(reports, vec![(60, 60)]);
        assert_eq!(counter.frame_count(), Some(0));
        assert_relative_eq!(counter.last_sample_time().unwrap(), 1.0);
    }

    #[test]
    fn test_single_frame_after_idle() {
        let mut counter = FpsCounter::new();
        counter.start(0.0);
        assert_eq!(counter.frame(2.0), Some(1));
    }

    #[test]
    fn test_window_restarts_at_crossing_frame() {
        let mut counter = FpsCounter::new();
        counter.start(0.0);
        assert_eq!(counter.frame(0.5), None);
        assert_eq!(counter.frame(1.25), Some(2));

        // next window is measured from 1.25, not from 1.0
        assert_eq!(counter.frame(2.0), None);
        assert_eq!(counter.frame(2.25), Some(2));
    }

    #[test]
    fn test_fps_title() {
        assert_eq!(fps_title("Demo", 31), "Demo (FPS: 31)");
    }
}
