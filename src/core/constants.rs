//! Physical constants and model tunables.

/// Fundamental constants and calibrated reference values used by the
/// spin dynamics and the environment model.
pub mod physics {
    /// Electron g-factor for a silicon spin qubit (dimensionless).
    pub const G_FACTOR: f64 = 2.0;

    /// Bohr magneton, J/T.
    pub const BOHR_MAGNETON: f64 = 9.274_010_078_3e-24;

    /// Boltzmann constant, J/K.
    pub const BOLTZMANN: f64 = 1.380_649e-23;

    /// Gyromagnetic ratio `g·μB/h`, Hz/T (≈ 28 GHz/T for g = 2).
    pub const GYROMAGNETIC_RATIO: f64 = 2.799_249e10;

    /// Lab seconds represented by one unit of tick time.
    ///
    /// GHz-order Larmor and Rabi frequencies would alias hopelessly at
    /// frame-rate time steps; every `dt` passed to the engine is scaled by
    /// this constant before entering a rotation or decay exponent. 50 ns
    /// per tick unit keeps the precession numerically tractable while the
    /// decay channels act on their physical time constants.
    pub const TIME_SCALE: f64 = 5.0e-8;

    /// Default resonant drive field amplitude B1, tesla.
    pub const DRIVE_FIELD_TESLA: f64 = 1.0e-3;

    /// Reference temperature for the rate model, kelvin (20 mK).
    pub const T_REF_KELVIN: f64 = 0.020;

    /// Energy-relaxation time at the reference point (20 mK, 1 T), seconds.
    pub const T1_REF_SECONDS: f64 = 6.0;

    /// Echo coherence time at the reference point, seconds.
    pub const T2_REF_SECONDS: f64 = 0.028;

    /// Free-induction dephasing time at the reference point, seconds.
    pub const T2_STAR_REF_SECONDS: f64 = 120.0e-6;

    /// Valley splitting entering the Orbach relaxation channel, J (0.1 meV).
    pub const VALLEY_SPLITTING_JOULES: f64 = 1.602_176_634e-23;
}
