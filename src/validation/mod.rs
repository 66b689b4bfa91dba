// src/validation/mod.rs

//! Provides functions to validate a [`QubitState`] against the invariants
//! the engine maintains.

use crate::core::{QubitState, SpinError};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;

/// Checks that both amplitudes are finite.
///
/// # Returns
/// * `Ok(())` if finite.
/// * `Err(SpinError::Incoherence)` if either amplitude is NaN or infinite.
pub fn check_finite(state: &QubitState) -> Result<(), SpinError> {
    let (alpha, beta) = state.amplitudes();
    if alpha.is_finite() && beta.is_finite() {
        Ok(())
    } else {
        Err(SpinError::Incoherence {
            message: format!("State amplitudes are not finite: α = {}, β = {}", alpha, beta),
        })
    }
}

/// Checks that the state is normalized (`|α|² + |β|² ≈ 1`).
///
/// # Arguments
/// * `state` - The state to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-6).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(SpinError::Incoherence)` if normalization fails.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), SpinError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(SpinError::Incoherence {
            message: format!(
                "State normalization failed. |α|² + |β|² = {} (Deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Performs all validation checks on the state.
///
/// # Arguments
/// * `state` - The state to validate.
/// * `norm_tolerance` - Optional allowed deviation from 1.0 for normalization.
///
/// # Returns
/// * `Ok(())` if all checks pass.
/// * `Err(SpinError::Incoherence)` if any check fails.
pub fn validate_state(state: &QubitState, norm_tolerance: Option<f64>) -> Result<(), SpinError> {
    check_finite(state)?;
    check_normalization(state, norm_tolerance)?;
    Ok(())
}
