use crate::constants::*;

/// Clamp and round a progress value to a whole percent.
#[inline]
pub fn clamp_percent(p: f64) -> u8 {
    if p.is_nan() {
        return 0;
    }
    p.round().clamp(0.0, 100.0) as u8
}

/// Fake-but-honest loading bar: creeps toward a ceiling while the scene loads
/// and jumps to 100% once it is done.
#[derive(Clone, Copy, Debug)]
pub struct LoadingProgress {
    percent: u8,
    done: bool,
    started_ms: Option<f64>,
    last_paint_ms: f64,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self {
            percent: 0,
            done: false,
            started_ms: None,
            last_paint_ms: f64::NEG_INFINITY,
        }
    }
}

impl LoadingProgress {
    #[inline]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Percent shown `elapsed_ms` after the load started.
    #[inline]
    pub fn ramp(elapsed_ms: f64) -> f64 {
        LOADER_CEILING_PERCENT.min(elapsed_ms.max(0.0) / LOADER_RAMP_MS * LOADER_CEILING_PERCENT)
    }

    /// Animation frame tick. Returns the percent to paint when a repaint is
    /// due, `None` when throttled or finished.
    pub fn tick(&mut self, now_ms: f64) -> Option<u8> {
        if self.done {
            return None;
        }
        let start = *self.started_ms.get_or_insert(now_ms);
        if now_ms - self.last_paint_ms <= LOADER_PAINT_INTERVAL_MS {
            return None;
        }
        self.last_paint_ms = now_ms;
        self.percent = clamp_percent(Self::ramp(now_ms - start));
        Some(self.percent)
    }

    /// Mark loaded. Returns true only on the first call.
    pub fn finish(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        self.percent = 100;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_capped_below_complete() {
        assert_eq!(LoadingProgress::ramp(0.0), 0.0);
        assert!((LoadingProgress::ramp(1100.0) - 46.0).abs() < 1e-9);
        assert_eq!(LoadingProgress::ramp(60_000.0), LOADER_CEILING_PERCENT);
    }

    #[test]
    fn ticks_are_throttled() {
        let mut p = LoadingProgress::default();
        assert_eq!(p.tick(1000.0), Some(0));
        assert_eq!(p.tick(1030.0), None);
        assert_eq!(p.tick(1050.0), None);
        assert_eq!(p.tick(2100.0), Some(46));
    }

    #[test]
    fn finish_is_idempotent_and_stops_ticks() {
        let mut p = LoadingProgress::default();
        assert!(p.finish());
        assert!(!p.finish());
        assert_eq!(p.percent(), 100);
        assert_eq!(p.tick(5000.0), None);
    }

    #[test]
    fn clamp_percent_rounds_and_bounds() {
        assert_eq!(clamp_percent(-5.0), 0);
        assert_eq!(clamp_percent(45.5), 46);
        assert_eq!(clamp_percent(130.0), 100);
        assert_eq!(clamp_percent(f64::NAN), 0);
    }
}
