//! Enigma three-rotor cipher machine simulator.
//!
//! Simulates the electromechanical Enigma: a reciprocal substitution
//! cipher built from stepping rotors. A machine is configured with a
//! reflector (B or C), three distinct rotors out of the eight
//! historical types (I-VIII), and a four-letter starting position
//! string; it then encrypts a stream of letters. Run again from the
//! same starting position, the same operation decrypts.
//!
//! # Architecture
//!
//! ```text
//! Wiring tables (static cycle strings + notch letters per type)
//!     ↕
//! Rotor / Reflector (wiring + rotational offset; forward/backward
//!     substitution, notch detection, advance-by-one)
//!     ↕
//! Machine (stepping rule incl. the double-step anomaly, reciprocal
//!     signal path, message-level encrypt with 5-letter grouping)
//! ```
//!
//! # Examples
//!
//! Encrypt a message:
//!
//! ```
//! use enigma::Machine;
//!
//! let mut machine = Machine::new("B", "III", "IV", "I", "AXLE").unwrap();
//! let ciphertext = machine.encrypt("FROM his shoulder Hiawatha").unwrap();
//! assert_eq!(ciphertext, "HYIHL BKOML IUYDC MPPSF SZW");
//! ```
//!
//! Decrypt by configuring a second machine identically:
//!
//! ```
//! use enigma::Machine;
//!
//! let mut decoder = Machine::new("B", "III", "IV", "I", "AXLE").unwrap();
//! let plaintext = decoder.encrypt("HYIHL BKOML IUYDC MPPSF SZW").unwrap();
//! assert_eq!(plaintext, "FROMH ISSHO ULDER HIAWA THA");
//! ```

#![deny(clippy::all)]

pub mod error;

mod machine;
pub(crate) mod rotor;
pub(crate) mod wiring;

pub use machine::Machine;
