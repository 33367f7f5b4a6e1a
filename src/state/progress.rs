//! Eased progress bar animation

use std::time::{Duration, Instant};

/// Displayed progress that eases toward the engine's value
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started: Instant,
    enabled: bool,
}

impl ProgressAnimation {
    /// Duration of a transition between two values
    const DURATION: Duration = Duration::from_millis(500);

    pub fn new(enabled: bool) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started: Instant::now(),
            enabled,
        }
    }

    /// Start easing toward `target` from whatever is displayed at `now`
    pub fn retarget(&mut self, target: f64, now: Instant) {
        if (target - self.to).abs() < f64::EPSILON {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started = now;
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Displayed value at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        if !self.enabled {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= Self::DURATION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = f64::from(simple_easing::cubic_in_out(t));
        self.from + (self.to - self.from) * eased
    }

    /// Whether a transition is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.enabled && now.saturating_duration_since(self.started) < Self::DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target_after_duration() {
        let now = Instant::now();
        let mut anim = ProgressAnimation::new(true);
        anim.retarget(50.0, now);
        assert_eq!(anim.value_at(now), 0.0);
        assert_eq!(anim.value_at(now + Duration::from_millis(500)), 50.0);
        assert!(!anim.is_animating(now + Duration::from_millis(600)));
    }

    #[test]
    fn test_midway_value_is_between_endpoints() {
        let now = Instant::now();
        let mut anim = ProgressAnimation::new(true);
        anim.retarget(100.0, now);
        let mid = anim.value_at(now + Duration::from_millis(250));
        assert!(mid > 0.0 && mid < 100.0);
        assert!(anim.is_animating(now + Duration::from_millis(250)));
    }

    #[test]
    fn test_disabled_jumps_to_target() {
        let now = Instant::now();
        let mut anim = ProgressAnimation::new(false);
        anim.retarget(75.0, now);
        assert_eq!(anim.value_at(now), 75.0);
        assert!(!anim.is_animating(now));
    }

    #[test]
    fn test_retarget_starts_from_displayed_value() {
        let now = Instant::now();
        let mut anim = ProgressAnimation::new(true);
        anim.retarget(100.0, now);
        let later = now + Duration::from_millis(250);
        let shown = anim.value_at(later);
        anim.retarget(0.0, later);
        assert_eq!(anim.value_at(later), shown);
        assert_eq!(anim.target(), 0.0);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let now = Instant::now();
        let mut anim = ProgressAnimation::new(true);
        anim.retarget(50.0, now);
        anim.retarget(50.0, now + Duration::from_millis(400));
        assert_eq!(anim.value_at(now + Duration::from_millis(500)), 50.0);
    }
}
