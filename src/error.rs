//! Error types for the enigma library.

use std::fmt;

/// Errors produced by the enigma library.
///
/// Every variant signals an input-validation or construction-time
/// defect; none are transient or retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Configuration string is not exactly 4 uppercase letters.
    InvalidConfig,
    /// Rotor type token is not one of I through VIII.
    InvalidRotorType,
    /// Reflector type token is not B or C.
    InvalidReflectorType,
    /// Position is not a single uppercase letter.
    InvalidPosition,
    /// The same rotor type assigned to more than one rotor slot.
    DuplicateRotor,
    /// Permutation input is not a single uppercase letter.
    InvalidInput,
    /// A shifted letter was absent from the wiring table. The tables
    /// cover the full alphabet, so reaching this is a programming error.
    WiringLookupFailure,
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::InvalidConfig => {
                write!(f, "Configuration must be exactly 4 uppercase letters")
            }
            EnigmaError::InvalidRotorType => {
                write!(f, "Rotor type must be one of I through VIII")
            }
            EnigmaError::InvalidReflectorType => {
                write!(f, "Reflector type must be B or C")
            }
            EnigmaError::InvalidPosition => {
                write!(f, "Position must be a single uppercase letter")
            }
            EnigmaError::DuplicateRotor => {
                write!(f, "Unable to reuse the same rotor type")
            }
            EnigmaError::InvalidInput => {
                write!(f, "Can only permutate a single uppercase letter")
            }
            EnigmaError::WiringLookupFailure => {
                write!(f, "Letter not found in any wiring cycle")
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
