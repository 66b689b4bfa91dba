// tests/engine_tests.rs

// Import necessary types from the spinq crate
use spinq::{EnvironmentModel, EnvironmentSnapshot, Gate, SpinEngine, SpinError};

use std::f64::consts::PI;

const TEST_TOLERANCE: f64 = 1e-9;
const NORM_TOLERANCE: f64 = 1e-6;

// Helper to build a snapshot with hand-picked channel constants; the other
// fields are irrelevant to the decoherence step.
fn snapshot_with_channels(t1_seconds: f64, t2_seconds: f64, thermal: f64) -> EnvironmentSnapshot {
    EnvironmentSnapshot {
        temperature_milli_kelvin: 20.0,
        magnetic_field_tesla: 1.0,
        t1_seconds,
        t2_seconds,
        t2_star_seconds: t2_seconds,
        thermal_excitation_prob: thermal,
        zeeman_splitting_joules: 1.85e-23,
        noise_level: 0.0,
    }
}

#[test]
fn test_norm_invariant_under_mixed_call_sequences() -> Result<(), SpinError> {
    let mut env = EnvironmentModel::new();
    env.set_temperature(150.0);
    env.set_field(1.5);
    let snapshot = env.snapshot();

    let mut engine = SpinEngine::with_seed(11);
    let gates = [
        Gate::H,
        Gate::T,
        Gate::Rx(0.3),
        Gate::Ry(1.2),
        Gate::S,
        Gate::Rz(-2.5),
        Gate::X,
        Gate::Y,
        Gate::Z,
    ];

    for (index, gate) in gates.iter().cycle().take(200).enumerate() {
        engine.evolve(0.016, index % 3 == 0);
        assert_normalized(&engine);

        engine.apply_decoherence(0.016, &snapshot);
        assert_normalized(&engine);

        engine.apply_gate(*gate)?;
        assert_normalized(&engine);
    }
    Ok(())
}

// Checks the raw amplitude pair rather than a rebuilt state so the engine's
// own normalization is what gets verified.
fn assert_normalized(engine: &SpinEngine) {
    let (alpha, beta) = engine.state_vector();
    let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
    assert!(
        (norm_sqr - 1.0).abs() < NORM_TOLERANCE,
        "norm² drifted to {norm_sqr}"
    );
}

#[test]
fn test_x_is_an_involution() -> Result<(), SpinError> {
    let mut engine = SpinEngine::with_seed(21);
    assert!((engine.p0() - 1.0).abs() < TEST_TOLERANCE);

    engine.apply_gate(Gate::X)?;
    assert!(engine.p0() < TEST_TOLERANCE);
    assert!((engine.p1() - 1.0).abs() < TEST_TOLERANCE);

    engine.apply_gate(Gate::X)?;
    assert!((engine.p0() - 1.0).abs() < TEST_TOLERANCE);
    assert!(engine.p1() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_h_is_self_inverse() -> Result<(), SpinError> {
    let mut engine = SpinEngine::with_seed(22);

    engine.apply_gate(Gate::H)?;
    assert!((engine.p0() - 0.5).abs() < 1e-12);
    assert!((engine.p1() - 0.5).abs() < 1e-12);

    engine.apply_gate(Gate::H)?;
    assert!((engine.p0() - 1.0).abs() < 1e-12);
    assert!(engine.p1() < 1e-12);
    Ok(())
}

#[test]
fn test_measuring_ground_state_is_deterministic() {
    let mut engine = SpinEngine::with_seed(23);
    for _ in 0..1000 {
        assert_eq!(engine.measure(), 0);
    }
}

#[test]
fn test_measurement_statistics_on_equal_superposition() -> Result<(), SpinError> {
    // 10,000 seeded trials of measure(H|0⟩) land within ±2% of 50/50.
    let trials = 10_000;
    let mut engine = SpinEngine::with_seed(24);
    let mut ones = 0u32;
    for _ in 0..trials {
        engine.reset();
        engine.apply_gate(Gate::H)?;
        ones += u32::from(engine.measure());
    }
    let frequency = f64::from(ones) / f64::from(trials);
    assert!(
        (frequency - 0.5).abs() < 0.02,
        "observed |1⟩ frequency {frequency}"
    );
    Ok(())
}

#[test]
fn test_bloch_angles_at_poles() -> Result<(), SpinError> {
    let mut engine = SpinEngine::with_seed(25);
    let (theta, _) = engine.bloch_angles();
    assert!(theta.abs() < TEST_TOLERANCE);

    engine.apply_gate(Gate::X)?;
    let (theta, _) = engine.bloch_angles();
    assert!((theta - PI).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_disabled_channels_leave_population_unchanged() -> Result<(), SpinError> {
    // Time constants at or above 1e6 s switch the channel off entirely.
    let snapshot = snapshot_with_channels(5.0e6, 5.0e6, 0.5);

    let mut engine = SpinEngine::with_seed(26);
    engine.apply_gate(Gate::Ry(1.1))?;
    let p1_before = engine.p1();

    for _ in 0..10_000 {
        engine.apply_decoherence(1.0, &snapshot);
    }
    assert!((engine.p1() - p1_before).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_relaxation_pulls_population_to_thermal_equilibrium() -> Result<(), SpinError> {
    // A nanosecond-scale T1 equilibrates in a single tick.
    let snapshot = snapshot_with_channels(1.0e-9, 0.0, 0.37);

    let mut engine = SpinEngine::with_seed(27);
    engine.apply_gate(Gate::X)?;
    engine.apply_decoherence(1.0, &snapshot);
    assert!((engine.p1() - 0.37).abs() < 1e-6, "p1 = {}", engine.p1());
    Ok(())
}

#[test]
fn test_dephasing_changes_phase_but_not_population() -> Result<(), SpinError> {
    let snapshot = snapshot_with_channels(0.0, 1.0e-7, 0.0);

    let mut engine = SpinEngine::with_seed(28);
    engine.apply_gate(Gate::H)?;
    let p1_before = engine.p1();
    let (_, phi_before) = engine.bloch_angles();

    for _ in 0..50 {
        engine.apply_decoherence(1.0, &snapshot);
    }

    assert!((engine.p1() - p1_before).abs() < TEST_TOLERANCE);
    let (_, phi_after) = engine.bloch_angles();
    assert!(
        (phi_after - phi_before).abs() > 1e-6,
        "phase kick expected, φ stayed at {phi_after}"
    );
    Ok(())
}

#[test]
fn test_reset_restores_ground_state() -> Result<(), SpinError> {
    let mut engine = SpinEngine::with_seed(29);
    engine.apply_gate(Gate::Ry(2.7))?;
    engine.evolve(1.0, true);
    engine.reset();
    assert!((engine.p0() - 1.0).abs() < TEST_TOLERANCE);
    assert!(engine.p1() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_non_finite_rotation_angle_is_an_error() {
    let mut engine = SpinEngine::with_seed(30);
    let result = engine.apply_gate(Gate::Rx(f64::NAN));

    assert!(result.is_err(), "Expected an error for a non-finite angle");
    match result.err().unwrap() {
        SpinError::InvalidOperation { message } => {
            assert!(
                message.contains("finite angle"),
                "Incorrect error message: {}",
                message
            );
        }
        e => panic!("Expected InvalidOperation error, got {:?}", e),
    }
    // The failed gate left no trace: state and log are untouched.
    assert!((engine.p0() - 1.0).abs() < TEST_TOLERANCE);
    assert!(engine.log().is_empty());
}
