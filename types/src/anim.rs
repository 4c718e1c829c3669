//! Delta-driven animation timing for overlay entry effects and confetti.

use std::time::Duration;

/// Where an effect is in its run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

/// A one-shot timer advanced by frame deltas.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Normalized progress in `[0.0, 1.0]`. Zero-duration timers report 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
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
    use super::{AnimPhase, EffectTimer};
    use std::time::Duration;

    #[test]
    fn starts_running() {
        let timer = EffectTimer::new(Duration::from_millis(200));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if progress < 0.1));
    }

    #[test]
    fn completes_after_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(150));
        assert!(matches!(timer.phase(), AnimPhase::Completed));
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert!(timer.is_finished());
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_clamped() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::from_secs(5));
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }
}
