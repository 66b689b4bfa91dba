// src/engine/log.rs

use crate::gates::Gate;
use std::collections::VecDeque;
use std::fmt;

/// One discrete event recorded by the engine: a gate application with the
/// resulting probabilities and Bloch angles, or a measurement outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum GateLogEntry {
    /// A gate was applied; the fields capture the state it produced.
    Gate {
        /// The applied gate, including any rotation angle.
        gate: Gate,
        /// Probability of `|0⟩` after the gate.
        p0: f64,
        /// Probability of `|1⟩` after the gate.
        p1: f64,
        /// Bloch polar angle after the gate.
        theta: f64,
        /// Bloch azimuthal angle after the gate.
        phi: f64,
    },
    /// A projective measurement collapsed the state.
    Measurement {
        /// The observed basis state, 0 or 1.
        result: u8,
    },
}

impl fmt::Display for GateLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateLogEntry::Gate {
                gate,
                p0,
                p1,
                theta,
                phi,
            } => write!(
                f,
                "{} -> p0 = {:.3}, p1 = {:.3}, θ = {:.3}, φ = {:.3}",
                gate, p0, p1, theta, phi
            ),
            GateLogEntry::Measurement { result } => write!(f, "measure -> {}", result),
        }
    }
}

/// Append-only record of discrete events with a caller-chosen retention
/// policy.
///
/// A bounded log is a ring buffer: once full, each append drops the oldest
/// entry. An unbounded log retains the full history.
#[derive(Debug, Clone, PartialEq)]
pub struct GateLog {
    entries: VecDeque<GateLogEntry>,
    capacity: Option<usize>,
}

impl GateLog {
    /// Creates a ring buffer holding at most `capacity` entries
    /// (floored at one).
    pub fn bounded(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Creates a log that retains every entry.
    pub fn unbounded() -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: None,
        }
    }

    /// Appends an entry, evicting the oldest one if the buffer is full.
    pub(crate) fn push(&mut self, entry: GateLogEntry) {
        if let Some(capacity) = self.capacity
            && self.entries.len() >= capacity
        {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retention capacity, `None` for an unbounded log.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Iterates over retained entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GateLogEntry> {
        self.entries.iter()
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&GateLogEntry> {
        self.entries.back()
    }

    /// Discards all retained entries; the capacity policy is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for GateLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gate Log ({} entries):", self.len())?;
        for entry in self.iter() {
            writeln!(f, "  {}", entry)?;
        }
        Ok(())
    }
}
