//! Confetti particle state for the envelope reveal.
//!
//! Each particle picks a random horizontal position, theme color, start
//! delay, fall duration, and shape, and self-expires after a fixed lifetime.
//! Particles are pure state; the TUI maps them to glyphs per frame.

use std::time::Duration;

use rand::{Rng, RngExt};

pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_LIFETIME: Duration = Duration::from_millis(4000);

const MAX_START_DELAY_MS: u64 = 500;
const MIN_FALL_MS: u64 = 2000;
const MAX_FALL_MS: u64 = 4000;

#[derive(Debug, Clone)]
pub struct Particle {
    x: f32,
    color: usize,
    delay: Duration,
    fall: Duration,
    round: bool,
    elapsed: Duration,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, color_count: usize) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            color: rng.random_range(0..color_count.max(1)),
            delay: Duration::from_millis(rng.random_range(0..=MAX_START_DELAY_MS)),
            fall: Duration::from_millis(rng.random_range(MIN_FALL_MS..=MAX_FALL_MS)),
            round: rng.random_bool(0.5),
            elapsed: Duration::ZERO,
        }
    }

    /// Horizontal position as a fraction of the container width.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Index into the theme's confetti colors.
    #[must_use]
    pub fn color_index(&self) -> usize {
        self.color
    }

    #[must_use]
    pub fn is_round(&self) -> bool {
        self.round
    }

    /// Fall progress in `[0.0, 1.0]`, or `None` while the start delay has
    /// not elapsed or the fall has completed.
    #[must_use]
    pub fn fall_progress(&self) -> Option<f32> {
        let active = self.elapsed.checked_sub(self.delay)?;
        let progress = active.as_secs_f32() / self.fall.as_secs_f32();
        (progress <= 1.0).then_some(progress)
    }

    fn is_expired(&self) -> bool {
        self.elapsed >= CONFETTI_LIFETIME
    }
}

/// The live particle set for one envelope reveal.
#[derive(Debug, Default)]
pub struct ConfettiBurst {
    particles: Vec<Particle>,
}

impl ConfettiBurst {
    /// Spawn a fresh burst. `color_count` is the number of theme colors the
    /// renderer can index into.
    #[must_use]
    pub fn ignite(color_count: usize) -> Self {
        Self::ignite_with(&mut rand::rng(), CONFETTI_COUNT, color_count)
    }

    #[must_use]
    pub fn ignite_with<R: Rng + ?Sized>(rng: &mut R, count: usize, color_count: usize) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::spawn(rng, color_count)).collect(),
        }
    }

    /// Age all particles and drop the expired ones.
    pub fn advance(&mut self, delta: Duration) {
        for particle in &mut self.particles {
            particle.elapsed = particle.elapsed.saturating_add(delta);
        }
        self.particles.retain(|particle| !particle.is_expired());
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CONFETTI_LIFETIME, ConfettiBurst};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn burst(count: usize) -> ConfettiBurst {
        let mut rng = StdRng::seed_from_u64(9);
        ConfettiBurst::ignite_with(&mut rng, count, 3)
    }

    #[test]
    fn spawns_requested_count() {
        assert_eq!(burst(50).particles().len(), 50);
    }

    #[test]
    fn particles_expire_after_lifetime() {
        let mut burst = burst(50);
        burst.advance(CONFETTI_LIFETIME - Duration::from_millis(1));
        assert!(!burst.is_empty());
        burst.advance(Duration::from_millis(1));
        assert!(burst.is_empty());
    }

    #[test]
    fn fall_progress_respects_start_delay() {
        let mut burst = burst(200);
        // At time zero only zero-delay particles report progress.
        let visible_at_start = burst
            .particles()
            .iter()
            .filter(|p| p.fall_progress().is_some())
            .count();
        burst.advance(Duration::from_millis(600));
        let visible_after_delay_window = burst
            .particles()
            .iter()
            .filter(|p| p.fall_progress().is_some())
            .count();
        assert!(visible_after_delay_window > visible_at_start);
        assert_eq!(visible_after_delay_window, burst.particles().len());
    }

    #[test]
    fn positions_and_colors_are_in_range() {
        let burst = burst(100);
        for particle in burst.particles() {
            assert!((0.0..1.0).contains(&particle.x()));
            assert!(particle.color_index() < 3);
        }
    }
}
