//! Randomized and exhaustive checks of the collider invariants

use crate::foundation::math::{Point2, Vec2};
use crate::physics::collision::{CircleCollider, Collider, Ray, RectangleCollider, Shape, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_c011)
}

fn random_circle(rng: &mut StdRng) -> CircleCollider {
    let center = Vec2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
    CircleCollider::new(rng.gen_range(0.0..6.0), center).unwrap()
}

fn random_rect(rng: &mut StdRng) -> RectangleCollider {
    let corner = Vec2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
    let size = Size::new(rng.gen_range(0.0..12.0), rng.gen_range(0.0..12.0));
    RectangleCollider::new(corner, size).unwrap()
}

#[test]
fn test_circle_rectangle_symmetry() {
    let mut rng = rng();
    let mut hits = 0;

    for _ in 0..SAMPLES {
        let circle = random_circle(&mut rng);
        let rect = random_rect(&mut rng);

        let forward = circle.collide_rectangle(&rect);
        assert_eq!(forward, rect.collide_circle(&circle), "{circle:?} vs {rect:?}");
        assert_eq!(forward, Shape::from(rect).intersects(&Shape::from(circle)));
        hits += usize::from(forward);
    }

    // Make sure the sample actually exercised both outcomes
    assert!(hits > 0 && hits < SAMPLES);
}

#[test]
fn test_shape_intersection_is_symmetric() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let a: Shape = if rng.gen_bool(0.5) { random_circle(&mut rng).into() } else { random_rect(&mut rng).into() };
        let b: Shape = if rng.gen_bool(0.5) { random_circle(&mut rng).into() } else { random_rect(&mut rng).into() };
        assert_eq!(a.intersects(&b), b.intersects(&a), "{a:?} vs {b:?}");
    }
}

#[test]
fn test_shapes_collide_with_identical_copy() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let circle = random_circle(&mut rng);
        let rect = random_rect(&mut rng);
        let (circle_copy, rect_copy) = (circle, rect);

        assert!(circle.collide_circle(&circle_copy));
        assert!(rect.collide_rectangle(&rect_copy));
    }
}

#[test]
fn test_point_containment_matches_distance() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let circle = random_circle(&mut rng);
        let point = Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
        let distance = nalgebra::distance(&Point2::from(circle.position()), &Point2::from(point));
        assert_eq!(circle.collide_point(point), distance <= circle.radius());
    }
}

#[test]
fn test_rim_points_are_inside() {
    // Pythagorean triples land exactly on the rim in floating point
    for (a, b, r) in [(3.0, 4.0, 5.0), (5.0, 12.0, 13.0), (8.0, 15.0, 17.0), (0.0, 7.0, 7.0)] {
        let circle = CircleCollider::new(r, Vec2::new(1.0, -2.0)).unwrap();
        for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            let point = circle.position() + Vec2::new(sx * a, sy * b);
            assert!(circle.collide_point(point), "rim point {point:?} of {circle:?}");
        }
    }
}

#[test]
fn test_touching_circles_are_inclusive() {
    for (r1, r2, dx, dy) in [(1.0, 1.0, 2.0, 0.0), (2.0, 3.0, 3.0, 4.0), (0.0, 13.0, 5.0, 12.0)] {
        let a = CircleCollider::new(r1, Vec2::new(0.0, 0.0)).unwrap();
        let b = CircleCollider::new(r2, Vec2::new(dx, dy)).unwrap();
        assert!(a.collide_circle(&b));
        assert!(b.collide_circle(&a));
    }
}

#[test]
fn test_ray_circle_hits_are_forward_and_on_rim() {
    let mut rng = rng();
    let mut hits = 0;

    for _ in 0..SAMPLES {
        let circle = random_circle(&mut rng);
        let origin = Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let Ok(ray) = Ray::new(origin, Vec2::new(angle.cos(), angle.sin())) else {
            continue;
        };

        if let Some(hit) = ray.intersect_circle(&circle) {
            hits += 1;
            assert!(hit.distance >= 0.0);
            let rim_distance = (hit.point - circle.position()).norm();
            let tolerance = 1e-4 * circle.radius().max(1.0);
            assert!(
                (rim_distance - circle.radius()).abs() <= tolerance,
                "hit {hit:?} is {rim_distance} from center of {circle:?}"
            );
        }
    }

    assert!(hits > 0);
}

#[test]
fn test_far_ray_circle_hits_stay_on_rim() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let radius: f32 = rng.gen_range(0.25..4.0);
        let circle = CircleCollider::new(radius, Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))).unwrap();
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance: f32 = rng.gen_range(1.0e3..2.0e4);
        let origin = circle.position() + Vec2::new(angle.cos(), angle.sin()) * distance;

        // Aim at a point inside the disc so the cast cannot miss
        let aim = circle.position() + Vec2::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)) * radius;
        let ray = Ray::new(origin, aim - origin).unwrap();
        let hit = ray.intersect_circle(&circle).unwrap();

        let rim_distance = (hit.point - circle.position()).norm();
        let tolerance = 2e-3 * radius + 1e-6 * distance;
        assert!(
            (rim_distance - radius).abs() <= tolerance,
            "hit {hit:?} is {rim_distance} from center of {circle:?}, origin {origin:?}"
        );
    }
}

#[test]
fn test_ray_rectangle_forward_hits_are_on_boundary() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let rect = random_rect(&mut rng);
        let origin = Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
        if rect.size().width < 0.1 || rect.size().height < 0.1 {
            continue;
        }
        let target = rect.center();
        let Ok(ray) = Ray::new(origin, target - origin) else {
            continue;
        };

        // Aimed at the center, so the ray can never miss
        let hit = ray.intersect_rectangle(&rect).unwrap();
        if hit.origin_inside {
            assert!(rect.collide_point(origin));
            continue;
        }

        let grown = RectangleCollider::new(
            rect.position() - Vec2::new(1e-3, 1e-3),
            Size::new(rect.size().width + 2e-3, rect.size().height + 2e-3),
        )
        .unwrap();
        assert!(hit.distance >= 0.0);
        assert!(grown.collide_point(hit.point), "entry {hit:?} outside {rect:?}");
    }
}

#[test]
fn test_rectangles_separated_on_x_never_collide() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let a = random_rect(&mut rng);
        let gap: f32 = rng.gen_range(0.01..5.0);
        let b = RectangleCollider::new(
            Vec2::new(a.max().x + gap, rng.gen_range(-20.0..20.0)),
            Size::new(rng.gen_range(0.0..12.0), rng.gen_range(0.0..12.0)),
        )
        .unwrap();

        assert!(!a.collide_rectangle(&b));
        assert!(!b.collide_rectangle(&a));
    }
}

#[test]
fn test_geometry_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<CircleCollider>();
    assert_send_sync::<RectangleCollider>();
    assert_send_sync::<Ray>();
    assert_send_sync::<Shape>();

    let wall = RectangleCollider::new(Vec2::new(0.0, 0.0), Size::new(4.0, 4.0)).unwrap();
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let mover = CircleCollider::new(1.0, Vec2::new(f32::from(i) * 2.0, 2.0)).unwrap();
                mover.collide_rectangle(&wall)
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, true, false]);
}
