//! Slide transition animation state.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

/// Which way the deck moves during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAxis {
    /// Between sections of the deck.
    Vertical,
    /// Between items of a horizontal group.
    Horizontal,
}

/// A running slide animation from one index to another along an axis.
///
/// Indices are sections for [`SlideAxis::Vertical`] and item indices for
/// [`SlideAxis::Horizontal`].
#[derive(Debug, Clone)]
pub struct SlideEffect {
    axis: SlideAxis,
    from: usize,
    to: usize,
    timer: EffectTimer,
}

impl SlideEffect {
    #[must_use]
    pub fn vertical(from: usize, to: usize, duration: Duration) -> Self {
        Self {
            axis: SlideAxis::Vertical,
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn horizontal(from: usize, to: usize, duration: Duration) -> Self {
        Self {
            axis: SlideAxis::Horizontal,
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn axis(&self) -> SlideAxis {
        self.axis
    }

    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> usize {
        self.to
    }

    /// True when moving towards higher indices.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.to > self.from
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, SlideAxis, SlideEffect};
    use std::time::Duration;

    #[test]
    fn vertical_effect_tracks_endpoints() {
        let effect = SlideEffect::vertical(3, 1, Duration::from_millis(800));
        assert_eq!(effect.axis(), SlideAxis::Vertical);
        assert_eq!((effect.from(), effect.to()), (3, 1));
        assert!(!effect.is_forward());
        assert!(matches!(effect.phase(), AnimPhase::Running { .. }));
    }

    #[test]
    fn horizontal_effect_completes_after_duration() {
        let mut effect = SlideEffect::horizontal(0, 1, Duration::from_millis(800));
        effect.advance(Duration::from_millis(799));
        assert!(!effect.is_finished());
        effect.advance(Duration::from_millis(1));
        assert!(effect.is_finished());
        assert_eq!(effect.phase(), AnimPhase::Completed);
    }
}
