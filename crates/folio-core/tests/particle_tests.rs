// Trail bound and lifecycle over many frames.

use folio_core::constants::{TRAIL_LIFE_STEP, TRAIL_MAX_PARTICLES};
use folio_core::{Particle, ParticleTrail};
use glam::Vec2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tagged(tag: f32) -> Particle {
    Particle {
        base: Vec2::new(tag, 0.0),
        radius: 1.0,
        life: 1.0,
        phase: 0.0,
        spin: 0.0,
        orbit: 0.0,
    }
}

#[test]
fn oldest_particles_are_evicted_first() {
    let mut trail = ParticleTrail::default();
    for i in 0..(TRAIL_MAX_PARTICLES + 20) {
        trail.push(tagged(i as f32));
    }
    assert_eq!(trail.len(), TRAIL_MAX_PARTICLES);
    let first = trail.particles().next().unwrap();
    assert_eq!(first.base.x, 20.0);
    let last = trail.particles().last().unwrap();
    assert_eq!(last.base.x, (TRAIL_MAX_PARTICLES + 19) as f32);
}

#[test]
fn particle_is_removed_once_life_runs_out() {
    let mut trail = ParticleTrail::default();
    trail.push(tagged(0.0));
    let frames_alive = (1.0 / TRAIL_LIFE_STEP).ceil() as usize;
    let mut seen = 0;
    for _ in 0..frames_alive + 5 {
        trail.advance();
        seen += trail.len();
    }
    assert!(trail.is_empty());
    // alive for every frame where life stayed above zero, never again after
    assert!(seen >= frames_alive - 1 && seen <= frames_alive);
}

#[test]
fn a_resting_pointer_still_emits_one_particle() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut trail = ParticleTrail::default();
    assert_eq!(trail.emit(Vec2::ZERO, 0.0, &mut rng), 1);
    assert_eq!(trail.emit(Vec2::ZERO, 100.0, &mut rng), 3);
    assert_eq!(trail.len(), 4);
}

proptest! {
    #[test]
    fn trail_never_exceeds_its_bound(
        seed in any::<u64>(),
        speeds in prop::collection::vec(0.0f32..60.0, 1..400),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut trail = ParticleTrail::default();
        for (i, speed) in speeds.iter().enumerate() {
            trail.emit(Vec2::new(i as f32, 0.0), *speed, &mut rng);
            prop_assert!(trail.len() <= TRAIL_MAX_PARTICLES);
            trail.advance();
            prop_assert!(trail.len() <= TRAIL_MAX_PARTICLES);
        }
    }

    #[test]
    fn life_decreases_by_fixed_step_and_alpha_is_never_negative(
        seed in any::<u64>(),
        frames in 1usize..80,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut trail = ParticleTrail::default();
        trail.emit(Vec2::ZERO, 0.0, &mut rng);
        let mut prev = trail.particles().next().map(|p| p.life);
        for _ in 0..frames {
            trail.advance();
            for s in trail.sprites() {
                prop_assert!(s.alpha > 0.0 && s.alpha <= 1.0);
            }
            let now = trail.particles().next().map(|p| p.life);
            match (prev, now) {
                (Some(a), Some(b)) => prop_assert!((a - b - TRAIL_LIFE_STEP).abs() < 1e-5),
                (Some(a), None) => prop_assert!(a - TRAIL_LIFE_STEP <= 1e-5),
                (None, Some(_)) => prop_assert!(false, "particle resurrected"),
                (None, None) => {}
            }
            prev = now;
        }
    }
}
