//! Error handling logic

use std::fmt;

/// Error types for spin-state simulation failures.
///
/// The simulation core is designed so that ordinary numerical degeneracy
/// (near-zero norm, extreme time constants) is absorbed by epsilon floors
/// and never surfaces as an error; these variants cover genuine caller
/// mistakes and invariant violations detected by validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinError {
    /// The state vector lost normalization or finiteness beyond tolerance.
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// An applied operation is inconsistent with the engine's rules,
    /// e.g. a rotation gate carrying a non-finite angle.
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::Incoherence { message } => write!(f, "Incoherence Violation: {}", message),
            SpinError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
        }
    }
}

impl std::error::Error for SpinError {}
