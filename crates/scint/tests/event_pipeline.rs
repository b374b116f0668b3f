//! Integration test: full step-to-hit pipeline across layouts.
//!
//! Drives the public facade the way a transport engine would: a
//! geometry registry, a stream of steps, and an event boundary. Verifies
//! the decoded crystal ids for several layouts, point/hit bookkeeping,
//! and run-to-run determinism.

use scint::prelude::*;
use scint_test_utils::{FixedBoundaryProbe, MockVolumeRegistry, StepBuilder};

// Test-geometry id convention: crystalLogN -> N, Alveolus_N -> 100+N,
// Alveolus_EC_N -> 200+N.
fn registry() -> MockVolumeRegistry {
    let mut reg = MockVolumeRegistry::new();
    for i in 1..=30 {
        reg.set_volume(&format!("crystalLog{i}"), VolumeId(i));
    }
    for i in 1..=32 {
        reg.set_volume(&format!("Alveolus_{i}"), VolumeId(100 + i));
    }
    for i in 1..=3 {
        reg.set_volume(&format!("Alveolus_EC_{i}"), VolumeId(200 + i));
    }
    reg
}

fn calorimeter(version: i32) -> Calorimeter {
    let config = CalorimeterConfig {
        geometry_version: version,
        ..CalorimeterConfig::default()
    };
    Calorimeter::new(config, &registry()).unwrap()
}

fn barrel_path(alveolus_type: i32, alveolus_copy: i32, crystal_copy: i32) -> VolumePath {
    VolumePath::new("CrystalWithWrapping_1A")
        .with_level(Some(VolumeId(1000)), 0)
        .with_level(None, crystal_copy)
        .with_level(Some(VolumeId(100 + alveolus_type)), alveolus_copy)
}

fn super_path(alveolus_type: i32, super_copy: i32, crystal_copy: i32) -> VolumePath {
    VolumePath::new("CrystalWithWrapping_2")
        .with_level(Some(VolumeId(1000)), 0)
        .with_level(None, crystal_copy)
        .with_level(Some(VolumeId(2000)), 0)
        .with_level(Some(VolumeId(100 + alveolus_type)), super_copy)
}

fn crossing(path: VolumePath, energy: f64, time_s: f64) -> Step {
    StepBuilder::new()
        .path(path)
        .entering()
        .stopped()
        .energy(energy)
        .time(time_s)
        .build()
}

// ── Layout end-to-end checks ─────────────────────────────────────────

#[test]
fn barrel_705_two_crossings_merge_into_one_hit() {
    let mut cal = calorimeter(1);
    let probe = FixedBoundaryProbe::unlocated();

    cal.process_step(&crossing(barrel_path(1, 0, 1), 1.0e-5, 5e-9), &probe)
        .unwrap();
    cal.process_step(&crossing(barrel_path(1, 0, 1), 2.0e-5, 3e-9), &probe)
        .unwrap();

    assert_eq!(cal.points().len(), 2);
    assert_eq!(cal.hits().len(), 1);
    let hit = cal.hit_for(1).unwrap();
    assert_eq!(hit.crystal_type, 1);
    assert_eq!(hit.crystal_copy, 1);
    assert!((hit.energy - 3.0e-5).abs() < 1e-18);
    assert_eq!(hit.time, 3.0);
}

#[test]
fn prototype_endcap_shape_lands_past_the_barrel_block() {
    let mut cal = calorimeter(0);
    let probe = FixedBoundaryProbe::unlocated();
    // Shape 7, first copy: ids 1..=3072 belong to the barrel shapes.
    let path = VolumePath::new("crystalLog7").with_level(Some(VolumeId(7)), 0);
    cal.process_step(&crossing(path, 1.0e-5, 1e-9), &probe)
        .unwrap();
    assert!(cal.hit_for(3073).is_some());
}

#[test]
fn barrel_811_single_crystal_ring() {
    let mut cal = calorimeter(10);
    let probe = FixedBoundaryProbe::unlocated();
    cal.process_step(&crossing(super_path(1, 5, 0), 1.0e-5, 1e-9), &probe)
        .unwrap();
    let hit = cal.hit_for(6).unwrap();
    assert_eq!(hit.crystal_type, 1);
    assert_eq!(hit.crystal_copy, 6);
}

#[test]
fn barrel_811_quad_alveolus_packs_after_the_ring() {
    let mut cal = calorimeter(10);
    let probe = FixedBoundaryProbe::unlocated();
    cal.process_step(&crossing(super_path(5, 2, 3), 1.0e-5, 1e-9), &probe)
        .unwrap();
    // 32 + (5-2)*128 + 2*4 + 3 + 1 = 428.
    assert!(cal.hit_for(428).is_some());
}

#[test]
fn endcap_717_decodes_type_from_the_volume_name() {
    let mut cal = calorimeter(4);
    let probe = FixedBoundaryProbe::unlocated();
    let path = VolumePath::new("Crystal_23")
        .with_level(Some(VolumeId(1000)), 0)
        .with_level(None, 0)
        .with_level(Some(VolumeId(201)), 31);
    cal.process_step(&crossing(path, 1.0e-5, 1e-9), &probe)
        .unwrap();
    // 3000 + 31*23 + (23-1) = 3735, the last end-cap id.
    let hit = cal.hit_for(3735).unwrap();
    assert_eq!(hit.crystal_type, 23);
    assert_eq!(hit.crystal_copy, 32);
}

#[test]
fn combined_707_routes_barrel_and_endcap_steps() {
    let mut cal = calorimeter(5);
    let probe = FixedBoundaryProbe::unlocated();

    cal.process_step(&crossing(barrel_path(3, 10, 2), 1.0e-5, 1e-9), &probe)
        .unwrap();
    // Alveolus id outside the barrel table falls through to the
    // end-cap decode, typed by the volume name.
    let endcap = VolumePath::new("Crystal_5")
        .with_level(Some(VolumeId(1000)), 0)
        .with_level(None, 0)
        .with_level(Some(VolumeId(201)), 4);
    cal.process_step(&crossing(endcap, 1.0e-5, 1e-9), &probe)
        .unwrap();

    // Barrel: (3-1)*128 + 10*4 + 2 = 298. End-cap: 3000 + 4*23 + 4 = 3096.
    assert!(cal.hit_for(298).is_some());
    assert!(cal.hit_for(3096).is_some());
    assert_eq!(cal.hits().len(), 2);
}

// ── Event lifecycle ──────────────────────────────────────────────────

#[test]
fn events_are_independent_after_end_of_event() {
    let mut cal = calorimeter(1);
    let probe = FixedBoundaryProbe::unlocated();

    cal.process_step(&crossing(barrel_path(1, 0, 1), 1.0e-5, 1e-9), &probe)
        .unwrap();
    cal.end_of_event();

    cal.process_step(&crossing(barrel_path(1, 0, 2), 2.0e-5, 2e-9), &probe)
        .unwrap();
    assert_eq!(cal.points().len(), 1);
    assert_eq!(cal.hits().len(), 1);
    assert!(cal.hit_for(1).is_none());
    assert!(cal.hit_for(2).is_some());
}

#[test]
fn reset_matches_a_fresh_instance() {
    let probe = FixedBoundaryProbe::unlocated();
    let steps = [
        crossing(barrel_path(1, 0, 1), 1.0e-5, 1e-9),
        crossing(barrel_path(2, 3, 2), 2.0e-5, 2e-9),
    ];

    let mut reused = calorimeter(1);
    reused
        .process_step(&crossing(barrel_path(4, 4, 4), 5.0e-5, 9e-9), &probe)
        .unwrap();
    reused.reset();
    for step in &steps {
        reused.process_step(step, &probe).unwrap();
    }

    let mut fresh = calorimeter(1);
    for step in &steps {
        fresh.process_step(step, &probe).unwrap();
    }

    assert_eq!(reused.points(), fresh.points());
    let reused_hits: Vec<_> = reused.hits().collect();
    let fresh_hits: Vec<_> = fresh.hits().collect();
    assert_eq!(reused_hits, fresh_hits);
}

#[test]
fn smeared_runs_are_deterministic_per_seed() {
    let probe = FixedBoundaryProbe::unlocated();
    let run = |seed: u64| {
        let config = CalorimeterConfig {
            non_uniformity: 2.0,
            seed,
            ..CalorimeterConfig::default()
        };
        let mut cal = Calorimeter::new(config, &registry()).unwrap();
        let mut energies = Vec::new();
        for event in 0..3 {
            for copy in 1..=3 {
                let step = crossing(barrel_path(1, event, copy), 1.0e-5, 1e-9);
                cal.process_step(&step, &probe).unwrap();
            }
            energies.extend(cal.hits().map(|h| h.energy));
            cal.end_of_event();
        }
        energies
    };
    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}
