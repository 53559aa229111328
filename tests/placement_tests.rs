// Host-side tests for rejection-sampled star placement.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::constants::*;
use starfield_core::*;

fn palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn margins(count: usize, min_distance: f32) -> RegionSpec {
    RegionSpec {
        key: "margin-stars".into(),
        policy: RegionPolicy::Margins {
            band_width: MARGIN_BAND_WIDTH,
        },
        count,
        min_distance,
    }
}

fn header(count: usize) -> RegionSpec {
    let [x0, y0, x1, y1] = HEADER_EXCLUSION;
    RegionSpec {
        key: "header-stars".into(),
        policy: RegionPolicy::ExcludeCenter {
            exclusion: Rect::new(x0, y0, x1, y1),
        },
        count,
        min_distance: 100.0,
    }
}

fn edges(count: usize) -> RegionSpec {
    RegionSpec {
        key: "floating-decorations".into(),
        policy: RegionPolicy::PreferEdges {
            band: EDGE_BAND_WIDTH,
        },
        count,
        min_distance: 100.0,
    }
}

fn assert_separated(markers: &[Marker], min_sep: f32) {
    for (i, a) in markers.iter().enumerate() {
        for b in &markers[i + 1..] {
            let d = a.position.distance(b.position);
            assert!(
                d >= min_sep,
                "markers {} and {} are {} apart (min {})",
                a.index,
                b.index,
                d,
                min_sep
            );
        }
    }
}

#[test]
fn margin_scenario_respects_sides_and_separation() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let spec = margins(8, 60.0);
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let placement = engine.place(&mut rng, &spec, 0);

        let left: Vec<_> = placement
            .markers
            .iter()
            .filter(|m| m.position.x < 50.0)
            .collect();
        let right: Vec<_> = placement
            .markers
            .iter()
            .filter(|m| m.position.x >= 50.0)
            .collect();
        assert!(placement.markers.len() <= 8, "{} markers", placement.markers.len());
        assert!(left.len() <= 4);
        assert!(right.len() <= 4);
        for m in &left {
            assert!(m.position.x >= 0.0 && m.position.x < 20.0, "left x={}", m.position.x);
        }
        for m in &right {
            assert!(m.position.x > 80.0 && m.position.x <= 100.0, "right x={}", m.position.x);
        }
        for m in &placement.markers {
            assert!(m.position.y >= MARGIN_Y_MIN && m.position.y <= MARGIN_Y_MAX);
        }
        assert_separated(&placement.markers, 6.0);
    }
}

#[test]
fn every_policy_keeps_minimum_separation() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    for spec in [margins(10, 80.0), header(6), edges(12)] {
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placement = engine.place(&mut rng, &spec, 0);
            assert!(placement.markers.len() <= spec.requested());
            assert_separated(&placement.markers, spec.min_separation());
        }
    }
}

#[test]
fn header_markers_avoid_the_title_area() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let spec = header(8);
    let RegionPolicy::ExcludeCenter { exclusion } = spec.policy else {
        unreachable!()
    };
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        for m in engine.place(&mut rng, &spec, 0).markers {
            assert!(!exclusion.contains(m.position), "{:?} inside title area", m.position);
            assert!((0.0..100.0).contains(&m.position.x));
            assert!((0.0..100.0).contains(&m.position.y));
        }
    }
}

#[test]
fn edge_markers_stay_near_an_edge() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let spec = edges(12);
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        for m in engine.place(&mut rng, &spec, 0).markers {
            let Vec2 { x, y } = m.position;
            let near = |v: f32| v < EDGE_BAND_WIDTH || v >= 100.0 - EDGE_BAND_WIDTH;
            assert!(near(x) || near(y), "{:?} is not in an edge band", m.position);
        }
    }
}

#[test]
fn indices_continue_from_start_and_colors_cycle() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let mut rng = StdRng::seed_from_u64(7);
    let placement = engine.place(&mut rng, &margins(6, 60.0), 5);

    assert_eq!(placement.next_index, 5 + placement.markers.len());
    for (offset, m) in placement.markers.iter().enumerate() {
        assert_eq!(m.index, 5 + offset);
        assert_eq!(m.color, palette[m.index % palette.len()]);
        assert_eq!(m.region, "margin-stars");
        assert!(m.body.is_at_rest());
        assert_eq!(m.body.offset, Vec2::ZERO);
        assert_eq!(m.body.velocity, Vec2::ZERO);
    }
}

#[test]
fn exhausted_slots_are_skipped_not_errors() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, 50, ViewportClass::Regular);
    let mut rng = StdRng::seed_from_u64(3);
    // 200% separation: only the first candidate can ever fit.
    let mut spec = header(5);
    spec.min_distance = 2000.0;

    let placement = engine.place(&mut rng, &spec, 10);
    assert_eq!(placement.markers.len(), 1);
    assert_eq!(placement.skipped(), 4);
    assert_eq!(placement.next_index, 11);
}

#[test]
fn zero_count_and_empty_palette_place_nothing() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let mut rng = StdRng::seed_from_u64(1);
    let placement = engine.place(&mut rng, &margins(0, 60.0), 3);
    assert!(placement.markers.is_empty());
    assert_eq!(placement.next_index, 3);

    let empty: Vec<String> = Vec::new();
    let engine = PlacementEngine::new(&empty, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let placement = engine.place(&mut rng, &header(4), 3);
    assert!(placement.markers.is_empty());
    assert_eq!(placement.next_index, 3);
}

#[test]
fn margin_count_is_split_between_the_sides() {
    assert_eq!(margin_side_count(8, MarginSide::Left), 4);
    assert_eq!(margin_side_count(8, MarginSide::Right), 4);
    assert_eq!(margin_side_count(7, MarginSide::Left), 4);
    assert_eq!(margin_side_count(7, MarginSide::Right), 3);
    assert_eq!(margin_side_count(0, MarginSide::Left), 0);

    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let spec = margins(8, 0.0);
    assert_eq!(spec.requested(), 8);
    let mut rng = StdRng::seed_from_u64(21);
    let placement = engine.place(&mut rng, &spec, 0);
    // With no separation every slot fits on its first candidate.
    assert_eq!(placement.markers.len(), 8);
    let left = placement.markers.iter().filter(|m| m.position.x < 50.0).count();
    assert_eq!(left, 4);
}

#[test]
fn zero_width_bands_place_nothing() {
    let palette = palette();
    let engine = PlacementEngine::new(&palette, MAX_PLACEMENT_ATTEMPTS, ViewportClass::Regular);
    let mut rng = StdRng::seed_from_u64(2);

    let mut flat_edges = edges(4);
    flat_edges.policy = RegionPolicy::PreferEdges { band: 0.0 };
    let mut flat_margins = margins(4, 60.0);
    flat_margins.policy = RegionPolicy::Margins { band_width: 0.0 };
    let mut wide_edges = edges(4);
    wide_edges.policy = RegionPolicy::PreferEdges { band: 80.0 };

    for spec in [flat_edges, flat_margins, wide_edges] {
        assert!(!spec.policy.has_valid_band());
        let placement = engine.place(&mut rng, &spec, 9);
        assert!(placement.markers.is_empty());
        assert_eq!(placement.next_index, 9);
        assert_eq!(placement.skipped(), 4);
    }
    assert!(header(4).policy.has_valid_band());
    assert!(edges(4).policy.has_valid_band());
}

#[test]
fn separation_check_is_inclusive() {
    let accepted = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0)];
    assert!(is_separated(Vec2::new(6.0, 0.0), &accepted, 6.0));
    assert!(!is_separated(Vec2::new(5.9, 0.0), &accepted, 6.0));
    assert!(is_separated(Vec2::new(1.0, 1.0), &[], 6.0));
}

#[test]
fn margin_candidates_follow_slot_spacing() {
    let mut rng = StdRng::seed_from_u64(11);
    let count = 4;
    let spacing = 100.0 / count as f32;
    for ordinal in 0..count {
        for _ in 0..50 {
            let p = margin_candidate(&mut rng, MARGIN_BAND_WIDTH, MarginSide::Left, ordinal, count);
            let center = (ordinal as f32 + 0.5) * spacing;
            assert!((p.y - center).abs() <= spacing * MARGIN_JITTER_FRACTION + 1e-4);
            assert!(p.x >= 0.0 && p.x < MARGIN_BAND_WIDTH);
        }
    }
}
