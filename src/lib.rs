// src/lib.rs

//! `spinq` - single spin-qubit simulation with environment-driven
//! decoherence
//!
//! The crate pairs two physics modules. [`EnvironmentModel`] derives
//! relaxation and dephasing time constants, thermal occupation, and Zeeman
//! splitting from a temperature and magnetic-field setting, caching them as
//! an [`EnvironmentSnapshot`]. [`SpinEngine`] owns the qubit amplitudes and
//! consumes those snapshots once per tick: [`SpinEngine::evolve`]
//! integrates Larmor precession and resonant Rabi driving,
//! [`SpinEngine::apply_decoherence`] applies the T1/T2 channels, and
//! [`SpinEngine::apply_gate`] / [`SpinEngine::measure`] handle discrete
//! events, each of which is recorded in a [`GateLog`].
//!
//! # Example: a driving loop tick
//!
//! ```
//! use spinq::{EnvironmentModel, Gate, SpinEngine};
//!
//! let mut env = EnvironmentModel::new();
//! env.set_temperature(20.0); // millikelvin
//! env.set_field(1.0);        // tesla
//!
//! let mut engine = SpinEngine::with_seed(42);
//! engine.apply_gate(Gate::H)?;
//!
//! // One environment snapshot per tick, evolve then decohere.
//! for _ in 0..600 {
//!     let snapshot = env.snapshot();
//!     engine.evolve(1.0, false);
//!     engine.apply_decoherence(1.0, &snapshot);
//! }
//!
//! let (theta, _phi) = engine.bloch_angles();
//! assert!(theta.is_finite());
//! let outcome = engine.measure();
//! assert!(outcome <= 1);
//! # Ok::<(), spinq::SpinError>(())
//! ```
//!
//! # Example: exact gate algebra
//!
//! ```
//! use spinq::{Gate, SpinEngine};
//!
//! let mut engine = SpinEngine::with_seed(7);
//!
//! // X is an involution: |0⟩ -> |1⟩ -> |0⟩.
//! engine.apply_gate(Gate::X)?;
//! assert!((engine.p1() - 1.0).abs() < 1e-9);
//! engine.apply_gate(Gate::X)?;
//! assert!((engine.p0() - 1.0).abs() < 1e-9);
//!
//! // Measuring a basis state is deterministic.
//! assert_eq!(engine.measure(), 0);
//! # Ok::<(), spinq::SpinError>(())
//! ```

pub mod core;
pub mod engine;
pub mod environment;
pub mod gates;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{QubitState, SpinError, physics};
pub use engine::{GateLog, GateLogEntry, SpinEngine};
pub use environment::{EnvironmentModel, EnvironmentSnapshot};
pub use gates::Gate;
pub use validation::{check_finite, check_normalization, validate_state};
