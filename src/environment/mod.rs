// src/environment/mod.rs

//! Phenomenological model of the qubit's thermal and magnetic environment.
//!
//! [`EnvironmentModel`] maps a (temperature, magnetic field) setting to the
//! derived quantities the engine needs each tick: relaxation and dephasing
//! time constants, equilibrium excited-state population, Zeeman splitting,
//! and a dimensionless noise severity. The model is a pure function of its
//! two inputs; it never reads the qubit state. Derived values are cached in
//! an [`EnvironmentSnapshot`] and recomputed only when a setter changes an
//! input, so per-tick reads are a plain copy.

use crate::core::physics::{
    BOHR_MAGNETON, BOLTZMANN, G_FACTOR, T_REF_KELVIN, T1_REF_SECONDS, T2_REF_SECONDS,
    T2_STAR_REF_SECONDS, VALLEY_SPLITTING_JOULES,
};
use std::fmt;

/// Lowest representable temperature, kelvin. Inputs below this are floored
/// so the `1/T` rate terms stay finite.
const TEMPERATURE_FLOOR_KELVIN: f64 = 1.0e-3;

/// Bounds on the relaxation time constant, seconds.
const T1_FLOOR_SECONDS: f64 = 1.0e-9;
const T1_CEILING_SECONDS: f64 = 100.0;

/// Floors for the coherence time constants, seconds.
const T2_FLOOR_SECONDS: f64 = 1.0e-9;
const T2_STAR_FLOOR_SECONDS: f64 = 1.0e-10;

/// Exponent guards: `exp(x)` underflows to 0 below −500 and would overflow
/// the Boltzmann ratio above +500.
const EXP_UNDERFLOW: f64 = -500.0;
const BETA_OVERFLOW: f64 = 500.0;

/// Temperature at which the noise severity proxy saturates, kelvin.
const NOISE_SATURATION_KELVIN: f64 = 4.0;

/// Derived environment quantities for one (temperature, field) setting.
///
/// The invariant `t2_seconds ≤ 2·t1_seconds` holds for every snapshot the
/// model produces, and all fields are finite for any floored input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentSnapshot {
    /// Temperature after flooring, millikelvin.
    pub temperature_milli_kelvin: f64,
    /// Static magnetic field, tesla.
    pub magnetic_field_tesla: f64,
    /// Energy-relaxation time constant, seconds.
    pub t1_seconds: f64,
    /// Echo coherence time constant, seconds.
    pub t2_seconds: f64,
    /// Free-induction dephasing time constant, seconds.
    pub t2_star_seconds: f64,
    /// Equilibrium excited-state population from Boltzmann statistics.
    pub thermal_excitation_prob: f64,
    /// Zeeman splitting `g·μB·B`, joules.
    pub zeeman_splitting_joules: f64,
    /// Dimensionless noise severity in `[0, 1]`, saturating at 4 K.
    pub noise_level: f64,
}

impl fmt::Display for EnvironmentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T = {:.1} mK, B = {:.2} T, T1 = {:.3e} s, T2 = {:.3e} s, T2* = {:.3e} s, p_th = {:.3e}, noise = {:.2}",
            self.temperature_milli_kelvin,
            self.magnetic_field_tesla,
            self.t1_seconds,
            self.t2_seconds,
            self.t2_star_seconds,
            self.thermal_excitation_prob,
            self.noise_level,
        )
    }
}

/// Computes relaxation/dephasing time constants and thermal populations
/// from temperature and magnetic field.
///
/// Rate model: `1/T1` sums a Johnson-noise term linear in `T/T_ref`, a
/// single-phonon direct term `∝ T·B⁴`, a two-phonon Raman term `∝ T⁷`, and
/// an Orbach term activated across the valley splitting. `T2` follows a
/// `(T_ref/T)³` power law capped by the `2·T1` relaxation limit; `T2*`
/// follows `(T_ref/T)` capped by `T2`. Reference values are calibrated at
/// 20 mK and 1 T.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentModel {
    temperature_kelvin: f64,
    magnetic_field_tesla: f64,
    snapshot: EnvironmentSnapshot,
}

impl EnvironmentModel {
    /// Creates a model at the 20 mK / 1 T calibration point.
    pub fn new() -> Self {
        let mut model = Self {
            temperature_kelvin: T_REF_KELVIN,
            magnetic_field_tesla: 1.0,
            snapshot: EnvironmentSnapshot {
                temperature_milli_kelvin: 0.0,
                magnetic_field_tesla: 0.0,
                t1_seconds: 0.0,
                t2_seconds: 0.0,
                t2_star_seconds: 0.0,
                thermal_excitation_prob: 0.0,
                zeeman_splitting_joules: 0.0,
                noise_level: 0.0,
            },
        };
        model.recompute();
        model
    }

    /// Sets the temperature in millikelvin and recomputes the snapshot.
    ///
    /// Non-finite inputs are ignored; values below 1 mK are floored.
    pub fn set_temperature(&mut self, milli_kelvin: f64) {
        if !milli_kelvin.is_finite() {
            return;
        }
        self.temperature_kelvin = (milli_kelvin / 1000.0).max(TEMPERATURE_FLOOR_KELVIN);
        self.recompute();
    }

    /// Sets the static magnetic field in tesla and recomputes the snapshot.
    ///
    /// Non-finite inputs are ignored; negative fields are floored to zero.
    pub fn set_field(&mut self, tesla: f64) {
        if !tesla.is_finite() {
            return;
        }
        self.magnetic_field_tesla = tesla.max(0.0);
        self.recompute();
    }

    /// Returns the memoized snapshot.
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        self.snapshot
    }

    /// Recomputes every derived quantity from the stored inputs.
    fn recompute(&mut self) {
        let t = self.temperature_kelvin;
        let b = self.magnetic_field_tesla;
        let r = t / T_REF_KELVIN;

        let rate_johnson = r / T1_REF_SECONDS;
        let rate_direct = 1.0e-3 * r * b.powi(4);
        let rate_raman = 1.0e-8 * r.powi(7);
        let orbach_exponent = -VALLEY_SPLITTING_JOULES / (BOLTZMANN * t);
        let rate_orbach = if orbach_exponent >= EXP_UNDERFLOW {
            1.0e3 * orbach_exponent.exp()
        } else {
            0.0
        };

        let total_rate = rate_johnson + rate_direct + rate_raman + rate_orbach;
        let t1 = (1.0 / total_rate).clamp(T1_FLOOR_SECONDS, T1_CEILING_SECONDS);

        // The relaxation limit T2 <= 2*T1 is enforced here, not left to the caller.
        let t2 = (T2_REF_SECONDS * (T_REF_KELVIN / t).powi(3))
            .min(2.0 * t1)
            .max(T2_FLOOR_SECONDS);
        let t2_star = (T2_STAR_REF_SECONDS * (T_REF_KELVIN / t))
            .min(t2)
            .max(T2_STAR_FLOOR_SECONDS);

        let zeeman = G_FACTOR * BOHR_MAGNETON * b;
        let beta = zeeman / (BOLTZMANN * t);
        let thermal_excitation = if beta > BETA_OVERFLOW {
            0.0
        } else {
            1.0 / (1.0 + beta.exp())
        };

        let noise_level = ((t / T_REF_KELVIN).log10()
            / (NOISE_SATURATION_KELVIN / T_REF_KELVIN).log10())
        .clamp(0.0, 1.0);

        self.snapshot = EnvironmentSnapshot {
            temperature_milli_kelvin: t * 1000.0,
            magnetic_field_tesla: b,
            t1_seconds: t1,
            t2_seconds: t2,
            t2_star_seconds: t2_star,
            thermal_excitation_prob: thermal_excitation,
            zeeman_splitting_joules: zeeman,
            noise_level,
        };
    }
}

impl Default for EnvironmentModel {
    fn default() -> Self {
        Self::new()
    }
}
