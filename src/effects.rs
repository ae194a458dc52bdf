//! Merge effects
//!
//! A merged value floats up from the target, spinning slowly. Each effect is a
//! small self-stepping task advanced once per animation frame and dropped once
//! it is older than its duration, whether or not it finished drifting.

use glam::Vec2;
use rand::Rng;

use crate::consts::{CELL_WIDTH, EFFECT_DURATION_MS, EFFECT_RISE_PER_FRAME, EFFECT_SPIN_PER_FRAME};

#[derive(Debug, Clone, PartialEq)]
pub struct CombinationEffect {
    /// Text anchor
    pub pos: Vec2,
    /// Rotation in degrees
    pub angle: f32,
    pub value: u32,
    /// Timestamp (ms) when spawned
    pub started_at: f64,
}

impl CombinationEffect {
    /// Effect anchored at a target cell, nudged right by up to one cell width
    pub fn spawn<R: Rng + ?Sized>(at: Vec2, value: u32, now: f64, rng: &mut R) -> Self {
        let jitter = rng.random_range(0.0..CELL_WIDTH);
        Self {
            pos: at + Vec2::new(jitter, 0.0),
            angle: 0.0,
            value,
            started_at: now,
        }
    }

    pub fn expired(&self, now: f64, duration_ms: f64) -> bool {
        now - self.started_at >= duration_ms
    }

    fn step(&mut self) {
        self.pos.y -= EFFECT_RISE_PER_FRAME;
        self.angle += EFFECT_SPIN_PER_FRAME;
    }
}

/// Live merge effects
#[derive(Debug, Clone)]
pub struct Effects {
    active: Vec<CombinationEffect>,
    duration_ms: f64,
    /// Skip drift and spin
    pub reduced_motion: bool,
}

impl Default for Effects {
    fn default() -> Self {
        Self::new(EFFECT_DURATION_MS)
    }
}

impl Effects {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            active: Vec::new(),
            duration_ms,
            reduced_motion: false,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, at: Vec2, value: u32, now: f64, rng: &mut R) {
        self.active.push(CombinationEffect::spawn(at, value, now, rng));
    }

    /// Step every live effect one frame, cancelling expired ones first
    pub fn advance(&mut self, now: f64) {
        let duration = self.duration_ms;
        self.active.retain(|e| !e.expired(now, duration));

        if !self.reduced_motion {
            for effect in &mut self.active {
                effect.step();
            }
        }
    }

    /// Cancel everything (restart)
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombinationEffect> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_jitter_within_cell() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..50 {
            let e = CombinationEffect::spawn(Vec2::new(100.0, 50.0), 8, 0.0, &mut rng);
            assert!(e.pos.x >= 100.0 && e.pos.x < 100.0 + CELL_WIDTH);
            assert_eq!(e.pos.y, 50.0);
        }
    }

    #[test]
    fn test_advance_drifts() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut effects = Effects::default();
        effects.spawn(Vec2::new(0.0, 100.0), 16, 0.0, &mut rng);

        for frame in 1..=3 {
            effects.advance(frame as f64 * 16.0);
        }
        let e = effects.iter().next().unwrap();
        assert_eq!(e.pos.y, 97.0);
        assert_eq!(e.angle, 3.0);
    }

    #[test]
    fn test_force_cancel_after_duration() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut effects = Effects::new(2500.0);
        effects.spawn(Vec2::ZERO, 4, 1000.0, &mut rng);
        effects.spawn(Vec2::ZERO, 8, 2000.0, &mut rng);

        effects.advance(3499.0);
        assert_eq!(effects.len(), 2);
        effects.advance(3500.0);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects.iter().next().unwrap().value, 8);
        effects.advance(4500.0);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_reduced_motion_holds_still() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut effects = Effects::default();
        effects.reduced_motion = true;
        effects.spawn(Vec2::new(0.0, 100.0), 16, 0.0, &mut rng);
        effects.advance(16.0);
        let e = effects.iter().next().unwrap();
        assert_eq!(e.pos.y, 100.0);
        assert_eq!(e.angle, 0.0);
    }

    #[test]
    fn test_clear() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut effects = Effects::default();
        effects.spawn(Vec2::ZERO, 4, 0.0, &mut rng);
        effects.clear();
        assert!(effects.is_empty());
    }
}
