// Follower containment and convergence.

use folio_core::{normalize_pointer, FollowRange, Follower, FollowerParams};
use glam::Vec2;
use proptest::prelude::*;

#[test]
fn follower_lags_then_settles_on_target() {
    let range = FollowRange::from_viewport(1600.0, 900.0);
    let target = range.target_for(Vec2::new(0.5, -0.5));
    let mut f = Follower::default();
    f.step(target, &FollowerParams::STARS, &range);
    assert!(f.position.length() < target.length() * 0.01);
    for _ in 0..5000 {
        f.step(target, &FollowerParams::STARS, &range);
    }
    assert!(f.position.distance(target) < 1.0);
}

#[test]
fn tornado_responds_faster_than_stars() {
    let range = FollowRange::from_viewport(1600.0, 900.0);
    let target = range.target_for(Vec2::new(1.0, 1.0));
    let (mut stars, mut tornado) = (Follower::default(), Follower::default());
    for _ in 0..30 {
        stars.step(target, &FollowerParams::STARS, &range);
        tornado.step(target, &FollowerParams::TORNADO, &range);
    }
    assert!(tornado.position.distance(target) < stars.position.distance(target));
}

#[test]
fn output_is_scaled_per_follower() {
    let f = Follower {
        position: Vec2::new(100.0, -50.0),
        velocity: Vec2::ZERO,
    };
    assert!(f.output(&FollowerParams::STARS).distance(Vec2::new(90.0, -45.0)) < 1e-4);
    assert_eq!(f.output(&FollowerParams::TORNADO), f.position);
}

#[test]
fn pointer_normalization_maps_viewport_corners() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(normalize_pointer(Vec2::ZERO, vp), Vec2::new(-1.0, -1.0));
    assert_eq!(normalize_pointer(vp, vp), Vec2::new(1.0, 1.0));
    assert_eq!(normalize_pointer(vp * 0.5, vp), Vec2::ZERO);
}

fn params() -> impl Strategy<Value = FollowerParams> {
    prop_oneof![
        Just(FollowerParams::STARS),
        Just(FollowerParams::TORNADO),
        (0.0001f32..0.05, 0.5f32..0.999).prop_map(|(follow, friction)| FollowerParams {
            follow,
            friction,
            output_scale: 1.0,
        }),
    ]
}

proptest! {
    #[test]
    fn follower_never_leaves_its_range(
        p in params(),
        w in 100.0f32..4000.0,
        h in 100.0f32..3000.0,
        start in (-1.0f32..1.0, -1.0f32..1.0),
        kick in (-500.0f32..500.0, -500.0f32..500.0),
        pointers in prop::collection::vec((-1.5f32..1.5, -1.5f32..1.5), 1..300),
    ) {
        let range = FollowRange::from_viewport(w, h);
        let mut f = Follower {
            position: Vec2::new(start.0 * range.x, start.1 * range.y),
            velocity: Vec2::new(kick.0, kick.1),
        };
        for (nx, ny) in pointers {
            let target = range.target_for(Vec2::new(nx, ny));
            f.step(target, &p, &range);
            prop_assert!(range.contains(f.position), "{:?} escaped {:?}", f.position, range);
        }
    }
}
