// src/gates/mod.rs

//! The discrete gate catalogue: exact 2×2 unitary transforms applied to the
//! qubit amplitude pair.
//!
//! The gate set is closed by construction. An ill-formed gate identifier
//! cannot be expressed with this enum; the only invalid input left is a
//! non-finite rotation angle, which [`Gate::matrix`] rejects with
//! [`SpinError::InvalidOperation`].

use crate::core::SpinError;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};
use std::fmt;

/// A single-qubit gate from the fixed catalogue.
///
/// Rotation gates carry their angle in radians; the conventional default of
/// π/2 is available through [`Gate::rx_default`] and friends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Pauli X (bit flip): swaps α and β.
    X,
    /// Pauli Y: `α' = −iβ`, `β' = iα`.
    Y,
    /// Pauli Z (phase flip): `β' = −β`.
    Z,
    /// Hadamard: maps the poles onto the equator.
    H,
    /// Phase gate: `β' = iβ`.
    S,
    /// π/8 gate: `β' = e^{iπ/4}·β`.
    T,
    /// Rotation about the x axis by the given angle.
    Rx(f64),
    /// Rotation about the y axis by the given angle.
    Ry(f64),
    /// Rotation about the z axis by the given angle.
    Rz(f64),
}

impl Gate {
    /// Default rotation angle for the parameterized gates.
    pub const DEFAULT_ROTATION_ANGLE: f64 = FRAC_PI_2;

    /// `Rx` at the default π/2 angle.
    pub fn rx_default() -> Self {
        Gate::Rx(Self::DEFAULT_ROTATION_ANGLE)
    }

    /// `Ry` at the default π/2 angle.
    pub fn ry_default() -> Self {
        Gate::Ry(Self::DEFAULT_ROTATION_ANGLE)
    }

    /// `Rz` at the default π/2 angle.
    pub fn rz_default() -> Self {
        Gate::Rz(Self::DEFAULT_ROTATION_ANGLE)
    }

    /// Short identifier used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::T => "T",
            Gate::Rx(_) => "Rx",
            Gate::Ry(_) => "Ry",
            Gate::Rz(_) => "Rz",
        }
    }

    /// Rotation angle, for the parameterized gates.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => Some(*theta),
            _ => None,
        }
    }

    /// The 2×2 unitary matrix of this gate, row-major over the
    /// `{|0⟩, |1⟩}` basis.
    pub fn matrix(&self) -> Result<[[Complex64; 2]; 2], SpinError> {
        if let Some(theta) = self.angle()
            && !theta.is_finite()
        {
            return Err(SpinError::InvalidOperation {
                message: format!("{} gate requires a finite angle, got {}", self.name(), theta),
            });
        }

        let i = Complex64::i();
        let matrix = match self {
            Gate::X => [
                [Complex64::zero(), Complex64::one()],
                [Complex64::one(), Complex64::zero()],
            ],
            Gate::Y => [[Complex64::zero(), -i], [i, Complex64::zero()]],
            Gate::Z => [
                [Complex64::one(), Complex64::zero()],
                [Complex64::zero(), -Complex64::one()],
            ],
            Gate::H => [
                [
                    Complex64::new(FRAC_1_SQRT_2, 0.0),
                    Complex64::new(FRAC_1_SQRT_2, 0.0),
                ],
                [
                    Complex64::new(FRAC_1_SQRT_2, 0.0),
                    Complex64::new(-FRAC_1_SQRT_2, 0.0),
                ],
            ],
            Gate::S => [
                [Complex64::one(), Complex64::zero()],
                [Complex64::zero(), i],
            ],
            Gate::T => [
                [Complex64::one(), Complex64::zero()],
                [Complex64::zero(), Complex64::cis(FRAC_PI_4)],
            ],
            Gate::Rx(theta) => {
                let half = theta / 2.0;
                let cos_a = Complex64::new(half.cos(), 0.0);
                let sin_a = half.sin();
                [[cos_a, -i * sin_a], [-i * sin_a, cos_a]]
            }
            Gate::Ry(theta) => {
                let half = theta / 2.0;
                let cos_a = Complex64::new(half.cos(), 0.0);
                let sin_a = Complex64::new(half.sin(), 0.0);
                [[cos_a, -sin_a], [sin_a, cos_a]]
            }
            Gate::Rz(theta) => {
                let half = theta / 2.0;
                [
                    [Complex64::cis(-half), Complex64::zero()],
                    [Complex64::zero(), Complex64::cis(half)],
                ]
            }
        };
        Ok(matrix)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({:.4})", self.name(), theta),
            None => write!(f, "{}", self.name()),
        }
    }
}
