use collisions::narrow_phase::{balls_touch, ShapeWithPosition};
use collisions::{CollisionDetector, ColliderSet, ThresholdPolicy};
use common::geometry::point_in_circle;
use common::shapes::{Circle, Rectangle};
use quadtree::QuadtreeError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn detector() -> CollisionDetector {
    CollisionDetector::new(Rectangle::from_size(400.0, 400.0)).unwrap()
}

fn set(indices: &[usize]) -> ColliderSet {
    indices.iter().copied().collect()
}

#[test]
fn test_no_entities() {
    let entities: Vec<Circle> = Vec::new();
    assert!(detector().detect(&entities).unwrap().is_empty());
}

#[test]
fn test_single_entity() {
    let entities = vec![Circle::new(100.0, 100.0, 5.0)];
    assert!(detector().detect(&entities).unwrap().is_empty());
}

#[test]
fn test_close_pair_collides() {
    let entities = vec![Circle::new(100.0, 100.0, 5.0), Circle::new(101.0, 100.0, 5.0)];
    assert_eq!(detector().detect(&entities).unwrap(), set(&[0, 1]));
}

#[test]
fn test_distant_pair_does_not_collide() {
    let entities = vec![Circle::new(100.0, 100.0, 5.0), Circle::new(300.0, 300.0, 5.0)];
    assert!(detector().detect(&entities).unwrap().is_empty());
}

#[test]
fn test_square_cluster_all_collide() {
    let entities = vec![
        Circle::new(200.0, 200.0, 5.0),
        Circle::new(202.0, 200.0, 5.0),
        Circle::new(200.0, 202.0, 5.0),
        Circle::new(202.0, 202.0, 5.0),
    ];
    assert_eq!(detector().detect(&entities).unwrap(), set(&[0, 1, 2, 3]));
}

#[test]
fn test_threshold_equal_extents() {
    // Threshold is 2 * 5 = 10.
    for (distance, collides) in [(9.0, true), (10.0, true), (11.0, false)] {
        let entities = vec![
            Circle::new(100.0, 100.0, 5.0),
            Circle::new(100.0 + distance, 100.0, 5.0),
        ];
        let colliders = detector().detect(&entities).unwrap();
        assert_eq!(colliders.len() == 2, collides, "distance {}", distance);
        assert!(colliders.is_empty() || colliders.len() == 2);
    }
}

#[test]
fn test_threshold_uses_larger_extent() {
    // Threshold is 2 * max(5, 3) = 10, whichever entity is the root anchor.
    for (distance, collides) in [(9.0, true), (10.0, true), (11.0, false)] {
        let forward = vec![
            Circle::new(100.0, 100.0, 5.0),
            Circle::new(100.0, 100.0 + distance, 3.0),
        ];
        let backward = vec![forward[1], forward[0]];
        for entities in [forward, backward] {
            let colliders = detector().detect(&entities).unwrap();
            let expected = if collides { set(&[0, 1]) } else { ColliderSet::default() };
            assert_eq!(colliders, expected, "distance {}", distance);
        }
    }
}

#[test]
fn test_overlapping_clusters_reported_once() {
    // 1 touches both 0 and 2; 0 and 2 are out of each other's reach.
    let entities = vec![
        Circle::new(100.0, 100.0, 5.0),
        Circle::new(108.0, 100.0, 5.0),
        Circle::new(116.0, 100.0, 5.0),
        Circle::new(350.0, 350.0, 5.0),
    ];
    assert_eq!(detector().detect(&entities).unwrap(), set(&[0, 1, 2]));
}

#[test]
fn test_invalid_universe() {
    assert!(matches!(
        CollisionDetector::new(Rectangle::new(400.0, 0.0, 0.0, 400.0)),
        Err(QuadtreeError::InvalidBounds { .. })
    ));
}

#[test]
fn test_out_of_universe_entities_still_collide() {
    let entities = vec![
        Circle::new(-1.0, 100.0, 5.0),
        Circle::new(1.0, 100.0, 5.0),
        Circle::new(3.0, 100.0, 5.0),
    ];
    let report = detector().detect_report(&entities).unwrap();
    assert_eq!(report.skipped, vec![0]);
    assert_eq!(report.index_size, 2);
    assert_eq!(report.colliders, set(&[0, 1, 2]));

    let pair = vec![Circle::new(-1.0, 100.0, 5.0), Circle::new(1.0, 100.0, 5.0)];
    for policy in [ThresholdPolicy::DoubledExtent, ThresholdPolicy::ExactContact] {
        let colliders = detector().with_policy(policy).detect(&pair).unwrap();
        assert_eq!(colliders, set(&[0, 1]), "{:?}", policy);
    }
}

#[test]
fn test_entities_outside_universe_pair_with_each_other() {
    let entities = vec![
        Circle::new(200.0, 200.0, 5.0),
        Circle::new(-50.0, -50.0, 5.0),
        Circle::new(-46.0, -50.0, 5.0),
        Circle::new(500.0, 500.0, 5.0),
        Circle::new(f64::NAN, 10.0, 5.0),
    ];
    for policy in [ThresholdPolicy::DoubledExtent, ThresholdPolicy::ExactContact] {
        let report = detector().with_policy(policy).detect_report(&entities).unwrap();
        assert_eq!(report.skipped, vec![1, 2, 3, 4]);
        assert_eq!(report.index_size, 1);
        assert_eq!(report.colliders, set(&[1, 2]), "{:?}", policy);
    }
}

#[test]
fn test_report_counts_queries() {
    let entities = vec![
        Circle::new(10.0, 10.0, 5.0),
        Circle::new(390.0, 390.0, 5.0),
        Circle::new(200.0, 200.0, 5.0),
    ];
    let report = detector().detect_report(&entities).unwrap();
    assert!(report.colliders.is_empty());
    assert!(report.skipped.is_empty());
    assert_eq!(report.index_size, 3);
    assert_eq!(report.stats.queries, 3);
    assert_eq!(report.stats.anchor_hits, 3);
}

#[test]
fn test_exact_contact_policy() {
    let exact = detector().with_policy(ThresholdPolicy::ExactContact);
    assert_eq!(exact.policy(), ThresholdPolicy::ExactContact);

    // Radius sum 6, doubled threshold 10.
    let near = vec![Circle::new(100.0, 100.0, 5.0), Circle::new(105.0, 100.0, 1.0)];
    let between = vec![Circle::new(100.0, 100.0, 5.0), Circle::new(108.0, 100.0, 1.0)];

    assert_eq!(exact.detect(&near).unwrap(), set(&[0, 1]));
    assert!(exact.detect(&between).unwrap().is_empty());
    assert_eq!(detector().detect(&between).unwrap(), set(&[0, 1]));
}

#[test]
fn test_exact_contact_with_mixed_sizes() {
    let exact = detector().with_policy(ThresholdPolicy::ExactContact);
    let entities = vec![
        Circle::new(100.0, 100.0, 1.0),
        Circle::new(150.0, 100.0, 40.0),
        Circle::new(300.0, 300.0, 2.0),
        Circle::new(303.0, 300.0, 2.0),
    ];
    // 0 and 1 are 50 apart with radius sum 41; 2 and 3 are 3 apart with sum 4.
    assert_eq!(exact.detect(&entities).unwrap(), set(&[2, 3]));
}

#[test]
fn test_exact_contact_counts_touching_pair() {
    let exact = detector().with_policy(ThresholdPolicy::ExactContact);

    // 100.3 - 100.0 rounds to just under 0.3 in f64, so these touch.
    let entities = vec![Circle::new(100.0, 100.0, 0.15), Circle::new(100.3, 100.0, 0.15)];
    assert!(point_in_circle(100.3, 100.0, 100.0, 100.0, 0.15 + 0.15));
    assert_eq!(exact.detect(&entities).unwrap(), set(&[0, 1]));

    // Distance 0.75 equals the radius sum exactly.
    let entities = vec![Circle::new(10.25, 20.5, 0.5), Circle::new(11.0, 20.5, 0.25)];
    assert_eq!(exact.detect(&entities).unwrap(), set(&[0, 1]));
    let entities = vec![Circle::new(10.25, 20.5, 0.5), Circle::new(11.0, 20.5, 0.249)];
    assert!(exact.detect(&entities).unwrap().is_empty());
}

#[test]
fn test_exact_contact_matches_brute_force() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(1_000_003);
    let entities: Vec<Circle> = (0..300)
        .map(|_| {
            Circle::new(
                rng.gen_range(0.0..400.0),
                rng.gen_range(0.0..400.0),
                rng.gen_range(0.1..8.0),
            )
        })
        .collect();

    let mut expected = ColliderSet::default();
    for (i, a) in entities.iter().enumerate() {
        for (j, b) in entities.iter().enumerate().skip(i + 1) {
            if point_in_circle(b.x, b.y, a.x, a.y, a.radius + b.radius) {
                expected.insert(i);
                expected.insert(j);
            }
        }
    }

    let exact = detector().with_policy(ThresholdPolicy::ExactContact);
    assert!(!expected.is_empty());
    assert_eq!(exact.detect(&entities).unwrap(), expected);
}

#[test]
fn test_balls_touch() {
    let a = ShapeWithPosition::from_entity(&Circle::new(0.0, 0.0, 1.0));
    let b = ShapeWithPosition::from_entity(&Circle::new(1.5, 0.0, 1.0));
    let c = ShapeWithPosition::from_entity(&Circle::new(2.5, 0.0, 1.0));
    assert!(balls_touch(&a, &b));
    assert!(!balls_touch(&a, &c));
}

#[test]
fn test_doubled_extent_matches_brute_force() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(36207250);
    let entities: Vec<Circle> = (0..400)
        .map(|_| {
            Circle::new(
                rng.gen_range(0.0..400.0),
                rng.gen_range(0.0..400.0),
                rng.gen_range(1.0..6.0),
            )
        })
        .collect();

    let mut expected = ColliderSet::default();
    for (i, entity) in entities.iter().enumerate() {
        let hits: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, other)| {
                point_in_circle(other.x, other.y, entity.x, entity.y, 2.0 * entity.radius)
            })
            .map(|(j, _)| j)
            .collect();
        assert!(hits.contains(&i));
        if hits.len() > 1 {
            expected.extend(hits);
        }
    }

    let colliders = detector().detect(&entities).unwrap();
    assert!(!colliders.is_empty());
    assert_eq!(colliders, expected);
}
