//! Tests for the trail buffers and the simulation engine.

use std::f64::consts::FRAC_PI_6;

use glam::DVec3;

use gyrosim_core::config::SimConfig;
use gyrosim_core::error::SimError;
use gyrosim_core::rotation;

use crate::engine::SimulationEngine;
use crate::trail::TrailBuffer;

// ---- Trail buffer ----

#[test]
fn test_trail_starts_and_resets_empty() {
    let mut trail = TrailBuffer::new(5);
    assert_eq!(trail.capacity(), 5);
    assert_eq!(trail.snapshot(), vec![None; 5]);

    trail.push(DVec3::new(1.0, 2.0, 3.0));
    trail.reset();
    assert_eq!(trail.snapshot(), vec![None; 5]);
}

#[test]
fn test_trail_fills_in_push_order() {
    let mut trail = TrailBuffer::new(4);
    for i in 0..4 {
        trail.push(DVec3::splat(i as f64));
    }
    let snapshot = trail.snapshot();
    assert!(snapshot.iter().all(|slot| slot.is_some()));
    for (i, slot) in snapshot.iter().enumerate() {
        assert_eq!(*slot, Some(DVec3::splat(i as f64)), "slot {i} out of order");
    }
}

#[test]
fn test_trail_overwrites_oldest() {
    let mut trail = TrailBuffer::new(4);
    for i in 0..5 {
        trail.push(DVec3::splat(i as f64));
    }
    let snapshot = trail.snapshot();
    // First pushed value (0.0) is gone; window is 1..=4 oldest-first.
    assert!(!snapshot.contains(&Some(DVec3::ZERO)));
    assert_eq!(snapshot[0], Some(DVec3::splat(1.0)));
    assert_eq!(snapshot[3], Some(DVec3::splat(4.0)));
}

#[test]
fn test_trail_partial_fill_keeps_sentinels_oldest_first() {
    let mut trail = TrailBuffer::new(4);
    trail.push(DVec3::X);
    trail.push(DVec3::Y);
    let snapshot = trail.snapshot();
    assert_eq!(snapshot[0], None);
    assert_eq!(snapshot[1], None);
    assert_eq!(snapshot[2], Some(DVec3::X));
    assert_eq!(snapshot[3], Some(DVec3::Y));
}

#[test]
fn test_trail_refills_after_reset_without_jump_entries() {
    let mut trail = TrailBuffer::new(3);
    for i in 0..7 {
        trail.push(DVec3::splat(i as f64));
    }
    trail.reset();
    trail.push(DVec3::splat(100.0));
    let snapshot = trail.snapshot();
    // One fresh entry at the newest end, sentinels everywhere else.
    assert_eq!(snapshot[0], None);
    assert_eq!(snapshot[1], None);
    assert_eq!(snapshot[2], Some(DVec3::splat(100.0)));
}

// ---- Engine construction ----

#[test]
fn test_engine_rejects_invalid_config() {
    let config = SimConfig {
        cone_points: 2,
        ..Default::default()
    };
    assert!(matches!(
        SimulationEngine::new(config),
        Err(SimError::InvalidConfig { field: "cone_points", .. })
    ));

    let config = SimConfig {
        trail_length: 0,
        ..Default::default()
    };
    assert!(matches!(
        SimulationEngine::new(config),
        Err(SimError::InvalidConfig { field: "trail_length", .. })
    ));
}

#[test]
fn test_engine_exposes_initial_state() {
    let engine = SimulationEngine::new(SimConfig::default()).unwrap();
    assert_eq!(engine.geometry().len(), 51);
    assert_eq!(engine.parameters().omega_p, 2.0);
    assert_eq!(engine.config().trail_length, 200);
}

// ---- Frame computation ----

#[test]
fn test_frame_maps_every_point_in_order() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let snapshot = engine.compute_frame(7);

    assert_eq!(snapshot.time.frame, 7);
    assert!((snapshot.time.secs - 0.14).abs() < 1e-12);
    assert_eq!(snapshot.world_points.len(), 51);
    assert_eq!(snapshot.apex, snapshot.world_points[50]);
    assert_eq!(snapshot.base_point, snapshot.world_points[0]);
    assert_eq!(snapshot.axis.start, DVec3::ZERO);
    assert_eq!(snapshot.axis.end, snapshot.apex);
}

#[test]
fn test_frame_time_is_stateless_in_the_index() {
    // Jumping straight to frame 50 must give the same orientation as the
    // closed form at t = 1.0; the engine keeps no clock of its own.
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let snapshot = engine.compute_frame(50);

    let rotation = rotation::rotation_at(&engine.parameters(), 1.0);
    let expected_apex = rotation * engine.geometry().apex();
    assert!((snapshot.apex - expected_apex).length() < 1e-12);
}

#[test]
fn test_frame_pushes_both_trails() {
    let config = SimConfig {
        trail_length: 3,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config).unwrap();

    let first = engine.compute_frame(0);
    assert_eq!(first.apex_trail.iter().flatten().count(), 1);
    assert_eq!(first.base_trail.iter().flatten().count(), 1);
    assert_eq!(first.apex_trail[2], Some(first.apex));
    assert_eq!(first.base_trail[2], Some(first.base_point));

    for frame in 1..5 {
        engine.compute_frame(frame);
    }
    let last = engine.compute_frame(5);
    // Window holds the three newest positions, oldest first.
    assert!(last.apex_trail.iter().all(|slot| slot.is_some()));
    assert_eq!(last.apex_trail[2], Some(last.apex));
}

// ---- End-to-end motion ----

#[test]
fn test_body_at_rest_stays_fixed() {
    let config = SimConfig {
        omega_rot: 0.0,
        omega_p: 0.0,
        omega_n: 0.0,
        theta_0: 0.0,
        a_n: 0.0,
        trail_length: 10,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config).unwrap();

    for frame in 0..50 {
        let snapshot = engine.compute_frame(frame);
        // Identity rotation: world coordinates equal body coordinates exactly.
        assert_eq!(snapshot.apex, DVec3::new(0.0, 0.0, 4.0));
        assert_eq!(snapshot.base_point, DVec3::new(1.0, 0.0, 0.0));
    }

    let snapshot = engine.compute_frame(50);
    let unique: Vec<_> = snapshot
        .apex_trail
        .iter()
        .flatten()
        .filter(|p| **p != DVec3::new(0.0, 0.0, 4.0))
        .collect();
    assert!(unique.is_empty(), "trail of a resting body must be one point");
}

#[test]
fn test_pure_precession_traces_a_circle() {
    let config = SimConfig {
        omega_rot: 0.0,
        omega_p: 2.0,
        a_n: 0.0,
        theta_0: FRAC_PI_6,
        cone_height: 4.0,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config).unwrap();

    let ring_radius = 4.0 * FRAC_PI_6.sin();
    let ring_z = 4.0 * FRAC_PI_6.cos();

    for frame in 0..300 {
        let snapshot = engine.compute_frame(frame);
        let apex = snapshot.apex;

        assert!(
            (apex.truncate().length() - ring_radius).abs() < 1e-12,
            "apex left the precession circle at frame {frame}"
        );
        assert!((apex.z - ring_z).abs() < 1e-12);

        // Angular position advances at omega_p: Rz(phi) applied to the
        // tilted axis (0, -h sin(theta), h cos(theta)).
        let phi = 2.0 * snapshot.time.secs;
        let expected = DVec3::new(
            ring_radius * phi.sin(),
            -ring_radius * phi.cos(),
            ring_z,
        );
        assert!(
            (apex - expected).length() < 1e-12,
            "apex phase drifted at frame {frame}"
        );
    }
}

// ---- Parameter updates ----

#[test]
fn test_set_parameters_resets_both_trails() {
    let config = SimConfig {
        trail_length: 8,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config).unwrap();
    for frame in 0..8 {
        engine.compute_frame(frame);
    }

    engine.set_parameters(1.0, 4.0, 30.0).unwrap();
    assert_eq!(engine.parameters().omega_p, 4.0);

    // The next frame starts a fresh window: one entry, sentinels elsewhere.
    let snapshot = engine.compute_frame(8);
    assert_eq!(snapshot.apex_trail.iter().flatten().count(), 1);
    assert_eq!(snapshot.base_trail.iter().flatten().count(), 1);
}

#[test]
fn test_rejected_update_leaves_state_untouched() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.compute_frame(0);
    let before = engine.parameters();

    let err = engine.set_parameters(0.2, 2.0, 51.0).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidParameterRange { name: "omega_n", .. }
    ));
    assert_eq!(engine.parameters(), before);

    // Trails were not cleared by the failed update.
    let snapshot = engine.compute_frame(1);
    assert_eq!(snapshot.apex_trail.iter().flatten().count(), 2);
}

#[test]
fn test_new_rates_take_effect_from_next_frame() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.set_parameters(0.0, 0.0, 0.0).unwrap();

    // Frozen rates: theta is still theta_0 + a_n (cos 0), but orientation
    // no longer changes between frames.
    let a = engine.compute_frame(10);
    let b = engine.compute_frame(20);
    assert!((a.apex - b.apex).length() < 1e-12);
}

// ---- Determinism ----

#[test]
fn test_same_config_same_snapshots() {
    let mut engine_a = SimulationEngine::new(SimConfig::default()).unwrap();
    let mut engine_b = SimulationEngine::new(SimConfig::default()).unwrap();

    for frame in 0..100 {
        let json_a = serde_json::to_string(&engine_a.compute_frame(frame)).unwrap();
        let json_b = serde_json::to_string(&engine_b.compute_frame(frame)).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at frame {frame}");
    }
}
