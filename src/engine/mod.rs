// src/engine/mod.rs

//! The spin engine: continuous-state evolution of one qubit with discrete
//! jumps at gate applications and measurements.
//!
//! A driving loop owns the tick cadence and calls, in order,
//! [`SpinEngine::evolve`], [`SpinEngine::apply_decoherence`] with the
//! current [`EnvironmentSnapshot`], and any pending gate or measurement
//! request. The engine never calls back into the environment model; it
//! consumes snapshots passed in by value. All mutation goes through
//! `&mut self`, so one writer at a time is enforced by the borrow checker,
//! and readers get the amplitude pair as a single snapshot.

mod log;

pub use log::{GateLog, GateLogEntry};

use crate::core::physics::{DRIVE_FIELD_TESLA, GYROMAGNETIC_RATIO, TIME_SCALE};
use crate::core::{QubitState, SpinError};
use crate::environment::EnvironmentSnapshot;
use crate::gates::Gate;
use num_complex::Complex64;
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::f64::consts::PI;

/// Default retention of the engine's gate log.
const DEFAULT_LOG_CAPACITY: usize = 256;

/// Time constants at or above this value (seconds) mean the corresponding
/// decay channel is switched off.
const CHANNEL_DISABLE_SECONDS: f64 = 1.0e6;

fn channel_enabled(time_constant_seconds: f64) -> bool {
    time_constant_seconds > 0.0 && time_constant_seconds < CHANNEL_DISABLE_SECONDS
}

/// Simulates a single spin qubit under precession, resonant driving,
/// discrete gates, measurement collapse, and environment-driven
/// decoherence.
///
/// Each engine owns its [`QubitState`], its random generator, and its
/// [`GateLog`]; independent qubits are independent engine values. The
/// generator is seedable via [`SpinEngine::with_seed`], which makes
/// measurement statistics and dephasing reproducible.
#[derive(Debug)]
pub struct SpinEngine {
    state: QubitState,
    rng: StdRng,
    log: GateLog,
    static_field_tesla: f64,
    drive_amplitude_tesla: f64,
}

impl SpinEngine {
    /// Creates an engine at `|0⟩` with an OS-seeded random generator,
    /// a 1 T static field, and the default drive amplitude.
    pub fn new() -> Self {
        Self::from_rng(rand::make_rng())
    }

    /// Creates an engine with a deterministic random generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: QubitState::new(),
            rng,
            log: GateLog::bounded(DEFAULT_LOG_CAPACITY),
            static_field_tesla: 1.0,
            drive_amplitude_tesla: DRIVE_FIELD_TESLA,
        }
    }

    /// Replaces the gate log, e.g. with [`GateLog::unbounded`] when the
    /// caller wants full history.
    pub fn with_log(mut self, log: GateLog) -> Self {
        self.log = log;
        self
    }

    // --- Per-tick continuous evolution ---

    /// Integrates one tick of coherent dynamics.
    ///
    /// While `driving` is set, the resonant pulse rotates the state about
    /// the drive axis by the half-angle `π·f_Rabi·dt·TIME_SCALE`:
    /// `α' = α·cos a − i·β·sin a`, `β' = −i·α·sin a + β·cos a`. Free Larmor
    /// precession then advances the relative phase,
    /// `α ← α·e^{+i·ω_L·dt·TIME_SCALE/2}`, `β ← β·e^{−i·ω_L·dt·TIME_SCALE/2}`.
    ///
    /// A non-finite or non-positive `dt` is a no-op.
    pub fn evolve(&mut self, dt: f64, driving: bool) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let (mut alpha, mut beta) = self.state.amplitudes();

        if driving {
            let half_angle = PI * self.rabi_frequency() * dt * TIME_SCALE;
            let cos_a = half_angle.cos();
            let sin_a = half_angle.sin();
            let i = Complex64::i();
            let alpha_driven = alpha * cos_a - i * beta * sin_a;
            let beta_driven = -i * alpha * sin_a + beta * cos_a;
            alpha = alpha_driven;
            beta = beta_driven;
        }

        // ω_L·dt·TIME_SCALE/2 with ω_L = 2π·f_Larmor.
        let half_turn = PI * self.larmor_frequency() * dt * TIME_SCALE;
        alpha *= Complex64::cis(half_turn);
        beta *= Complex64::cis(-half_turn);

        self.state.set_amplitudes(alpha, beta);
    }

    /// Applies one tick of the open-system channels from an environment
    /// snapshot.
    ///
    /// T1 relaxation pulls the excited population toward the snapshot's
    /// thermal occupation, `p1' = p_eq + (p1 − p_eq)·e^{−dt·TIME_SCALE/T1}`,
    /// rescaling both amplitude magnitudes while preserving their phases.
    /// T2 dephasing applies a random phase kick to β with magnitude
    /// proportional to `1 − e^{−dt·TIME_SCALE/T2}`, a stochastic stand-in
    /// for ensemble dephasing rather than an exact open-system evolution.
    /// A channel whose time constant is ≤ 0 or ≥ 1e6 s is disabled.
    pub fn apply_decoherence(&mut self, dt: f64, env: &EnvironmentSnapshot) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let elapsed_seconds = dt * TIME_SCALE;
        let (mut alpha, mut beta) = self.state.amplitudes();

        if channel_enabled(env.t1_seconds) {
            let p1 = beta.norm_sqr();
            let p_eq = env.thermal_excitation_prob.clamp(0.0, 1.0);
            let decay = (-elapsed_seconds / env.t1_seconds).exp();
            let p1_relaxed = (p_eq + (p1 - p_eq) * decay).clamp(0.0, 1.0);
            alpha = Complex64::from_polar((1.0 - p1_relaxed).sqrt(), alpha.arg());
            beta = Complex64::from_polar(p1_relaxed.sqrt(), beta.arg());
        }

        if channel_enabled(env.t2_seconds) {
            let strength = 1.0 - (-elapsed_seconds / env.t2_seconds).exp();
            let kick = (self.rng.random::<f64>() * 2.0 - 1.0) * PI * strength;
            beta *= Complex64::cis(kick);
        }

        self.state.set_amplitudes(alpha, beta);
    }

    // --- Discrete events ---

    /// Applies one exact unitary from the gate catalogue and records the
    /// resulting probabilities and Bloch angles in the log.
    pub fn apply_gate(&mut self, gate: Gate) -> Result<(), SpinError> {
        let matrix = gate.matrix()?;
        let (alpha, beta) = self.state.amplitudes();
        let alpha_out = matrix[0][0] * alpha + matrix[0][1] * beta;
        let beta_out = matrix[1][0] * alpha + matrix[1][1] * beta;
        self.state.set_amplitudes(alpha_out, beta_out);

        let (theta, phi) = self.state.bloch_angles();
        self.log.push(GateLogEntry::Gate {
            gate,
            p0: self.state.p0(),
            p1: self.state.p1(),
            theta,
            phi,
        });
        Ok(())
    }

    /// Performs a projective measurement in the computational basis.
    ///
    /// Draws the outcome with `P(1) = |β|²` from the engine's generator,
    /// collapses the state to the observed basis state, records the
    /// outcome, and returns it.
    pub fn measure(&mut self) -> u8 {
        let result = if self.rng.random::<f64>() < self.state.p1() {
            1
        } else {
            0
        };
        if result == 1 {
            self.state
                .set_amplitudes(Complex64::zero(), Complex64::one());
        } else {
            self.state.reset();
        }
        self.log.push(GateLogEntry::Measurement { result });
        result
    }

    /// Returns the state to `|0⟩`. The gate log is kept; use
    /// [`SpinEngine::clear_log`] to discard it.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Discards all retained log entries.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    // --- Field and drive controls ---

    /// Sets the static field the qubit precesses under, tesla.
    /// Non-finite inputs are ignored; negative fields are floored to zero.
    pub fn set_static_field(&mut self, tesla: f64) {
        if tesla.is_finite() {
            self.static_field_tesla = tesla.max(0.0);
        }
    }

    /// Sets the resonant drive amplitude B1, tesla.
    /// Non-finite inputs are ignored; negative amplitudes are floored to zero.
    pub fn set_drive_amplitude(&mut self, tesla: f64) {
        if tesla.is_finite() {
            self.drive_amplitude_tesla = tesla.max(0.0);
        }
    }

    // --- Read-only queries ---

    /// Probability of measuring `|0⟩`.
    pub fn p0(&self) -> f64 {
        self.state.p0()
    }

    /// Probability of measuring `|1⟩`.
    pub fn p1(&self) -> f64 {
        self.state.p1()
    }

    /// Bloch sphere coordinates `(θ, φ)` of the current state.
    pub fn bloch_angles(&self) -> (f64, f64) {
        self.state.bloch_angles()
    }

    /// Both amplitudes captured from the same mutation event.
    pub fn state_vector(&self) -> (Complex64, Complex64) {
        self.state.amplitudes()
    }

    /// Summary label built from `√p0` and `√p1`; relative phase is not
    /// shown.
    pub fn state_label(&self) -> String {
        self.state.to_string()
    }

    /// Larmor precession frequency `γ·B_z`, hertz.
    pub fn larmor_frequency(&self) -> f64 {
        GYROMAGNETIC_RATIO * self.static_field_tesla
    }

    /// Rabi frequency `γ·B1`, hertz.
    pub fn rabi_frequency(&self) -> f64 {
        GYROMAGNETIC_RATIO * self.drive_amplitude_tesla
    }

    /// The engine's discrete-event log.
    pub fn log(&self) -> &GateLog {
        &self.log
    }
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}
