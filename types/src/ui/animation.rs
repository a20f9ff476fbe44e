use std::time::Duration;

/// Progress of a timed effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    /// `progress` is normalized to `0.0..1.0`.
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, normalized_progress};
    use std::time::Duration;

    #[test]
    fn zero_duration_is_complete() {
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f32::EPSILON);
        assert_eq!(EffectTimer::new(Duration::ZERO).phase(), AnimPhase::Completed);
    }

    #[test]
    fn progress_is_clamped() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(50));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if (progress - 0.5).abs() < 0.01));
        timer.advance(Duration::from_secs(5));
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
        assert!(timer.is_finished());
    }
}
