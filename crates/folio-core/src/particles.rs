//! Decaying star trail emitted behind the custom cursor.
//!
//! Particles are spawned at the smoothed cursor position, wobble on a small
//! orbit around that base point and fade out linearly. The trail is a bounded
//! ring: once it holds [`TRAIL_MAX_PARTICLES`] the oldest particles are evicted
//! first.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Particle {
    pub base: Vec2,
    pub radius: f32,
    /// Remaining life in \[0, 1\]; also the draw alpha.
    pub life: f32,
    pub phase: f32,
    pub spin: f32,
    pub orbit: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(base: Vec2, rng: &mut R) -> Self {
        Self {
            base,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            life: 1.0,
            phase: rng.gen::<f32>() * TAU,
            spin: PARTICLE_SPIN_MIN + rng.gen::<f32>() * PARTICLE_SPIN_SPAN,
            orbit: PARTICLE_ORBIT_MIN + rng.gen::<f32>() * PARTICLE_ORBIT_SPAN,
        }
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.life.max(0.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Screen position: base point plus the current orbital offset.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.base + Vec2::new(self.phase.cos(), self.phase.sin()) * self.orbit
    }

    fn advance(&mut self) {
        self.phase += self.spin;
        self.life -= TRAIL_LIFE_STEP;
    }
}

/// What the renderer needs to draw one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Number of particles to emit this frame for a given pointer speed (px/frame).
#[inline]
pub fn spawn_count(pointer_speed: f32) -> usize {
    let speed = if pointer_speed.is_finite() {
        pointer_speed.clamp(0.0, TRAIL_SPEED_CAP)
    } else {
        0.0
    };
    ((speed / TRAIL_SPEED_PER_PARTICLE).floor() as usize).clamp(TRAIL_MIN_SPAWN, TRAIL_MAX_SPAWN)
}

#[derive(Clone, Debug)]
pub struct ParticleTrail {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl Default for ParticleTrail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_MAX_PARTICLES)
    }
}

impl ParticleTrail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Emit particles at `at` for the given pointer speed and evict the oldest
    /// beyond capacity. Returns how many were emitted.
    pub fn emit<R: Rng + ?Sized>(&mut self, at: Vec2, pointer_speed: f32, rng: &mut R) -> usize {
        let batch: SmallVec<[Particle; TRAIL_MAX_SPAWN]> = (0..spawn_count(pointer_speed))
            .map(|_| Particle::spawn(at, rng))
            .collect();
        let emitted = batch.len();
        self.push_all(batch);
        emitted
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push_back(particle);
        self.evict_overflow();
    }

    fn push_all(&mut self, batch: impl IntoIterator<Item = Particle>) {
        self.particles.extend(batch);
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        while self.particles.len() > self.capacity {
            self.particles.pop_front();
        }
    }

    /// Advance every particle one frame and drop the ones that burned out.
    pub fn advance(&mut self) {
        self.particles.retain_mut(|p| {
            p.advance();
            p.is_alive()
        });
    }

    /// Live particles as draw commands, oldest first.
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().map(|p| Sprite {
            center: p.position(),
            radius: p.radius,
            alpha: p.alpha(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_count_respects_floor_and_cap() {
        assert_eq!(spawn_count(0.0), 1);
        assert_eq!(spawn_count(5.9), 1);
        assert_eq!(spawn_count(12.0), 2);
        assert_eq!(spawn_count(17.9), 2);
        assert_eq!(spawn_count(18.0), 3);
        assert_eq!(spawn_count(500.0), 3);
        assert_eq!(spawn_count(f32::NAN), 1);
        assert_eq!(spawn_count(-3.0), 1);
    }

    #[test]
    fn fresh_particle_is_fully_opaque() {
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        let p = Particle::spawn(Vec2::new(10.0, 10.0), &mut rng);
        assert_eq!(p.alpha(), 1.0);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.orbit >= PARTICLE_ORBIT_MIN);
    }
}
