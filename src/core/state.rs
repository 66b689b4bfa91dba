// src/core/state.rs

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::f64::consts::TAU;
use std::fmt;

/// Norm-squared below which a state is considered degenerate and snapped
/// back to `|0⟩` instead of being divided by a vanishing norm.
const NORM_FLOOR: f64 = 1e-12;

/// The pure state of a single spin qubit, `ψ = α|0⟩ + β|1⟩`.
///
/// The amplitudes are kept normalized (`|α|² + |β|² = 1`) by every mutation
/// path; external code reads the pair through [`QubitState::amplitudes`] so
/// that α and β are always captured from the same mutation event.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitState {
    alpha: Complex64,
    beta: Complex64,
}

impl QubitState {
    /// Creates the ground state `|0⟩` (α = 1, β = 0).
    pub fn new() -> Self {
        Self {
            alpha: Complex64::one(),
            beta: Complex64::zero(),
        }
    }

    /// Creates a state from raw amplitudes, normalizing them.
    ///
    /// A degenerate pair (both amplitudes near zero or non-finite) yields
    /// `|0⟩` rather than an invalid state.
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Self {
        let mut state = Self { alpha, beta };
        state.normalize();
        state
    }

    /// Amplitude of the `|0⟩` basis state.
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of the `|1⟩` basis state.
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Both amplitudes as one consistent snapshot.
    pub fn amplitudes(&self) -> (Complex64, Complex64) {
        (self.alpha, self.beta)
    }

    /// Probability of measuring `|0⟩`.
    pub fn p0(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probability of measuring `|1⟩`.
    pub fn p1(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Sum of squared amplitude magnitudes (1.0 for a normalized state).
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Bloch sphere coordinates `(θ, φ)` of the state.
    ///
    /// `θ` is the polar angle from `|0⟩` (`θ = 2·acos(√p0)`), `φ` the
    /// relative phase `arg β − arg α` wrapped into `[0, 2π)`.
    pub fn bloch_angles(&self) -> (f64, f64) {
        let p0 = (1.0 - self.p1()).clamp(0.0, 1.0);
        let theta = 2.0 * p0.sqrt().acos();
        let phi = (self.beta.arg() - self.alpha.arg()).rem_euclid(TAU);
        (theta, phi)
    }

    /// Returns the state to `|0⟩`.
    pub fn reset(&mut self) {
        self.alpha = Complex64::one();
        self.beta = Complex64::zero();
    }

    /// Overwrites both amplitudes and renormalizes.
    pub(crate) fn set_amplitudes(&mut self, alpha: Complex64, beta: Complex64) {
        self.alpha = alpha;
        self.beta = beta;
        self.normalize();
    }

    /// Rescales the amplitudes to unit norm.
    ///
    /// A degenerate or non-finite pair cannot be rescaled meaningfully and
    /// is snapped back to `|0⟩`; the state stays valid under all inputs.
    pub(crate) fn normalize(&mut self) {
        let norm_sqr = self.norm_sqr();
        if !norm_sqr.is_finite() || norm_sqr < NORM_FLOOR {
            self.reset();
            return;
        }
        let inv_norm = 1.0 / norm_sqr.sqrt();
        self.alpha = self.alpha.scale(inv_norm);
        self.beta = self.beta.scale(inv_norm);
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QubitState {
    /// Renders a `√p0·|0⟩ + √p1·|1⟩` summary label.
    ///
    /// The label reports magnitudes only; the relative phase is not shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c0 = self.p0().clamp(0.0, 1.0).sqrt();
        let c1 = self.p1().clamp(0.0, 1.0).sqrt();
        if c1 < 1e-4 {
            write!(f, "|0⟩")
        } else if c0 < 1e-4 {
            write!(f, "|1⟩")
        } else {
            write!(f, "{:.3}|0⟩ + {:.3}|1⟩", c0, c1)
        }
    }
}
