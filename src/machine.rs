//! Machine: the assembled three-rotor Enigma.
//!
//! Owns one reflector and three rotors (left, mid, right), drives the
//! stepping rule once per plaintext letter, and routes each letter
//! through the reciprocal signal path: forward through right, mid and
//! left, off the reflector, then backward through left, mid and right.

use crate::error::EnigmaError;
use crate::rotor::{Reflector, Rotor, Scrambler};

/// Output letters per ciphertext group.
const GROUP_LEN: usize = 5;

/// Number of letters in the configuration string: one position for the
/// reflector and one per rotor.
const CONFIG_LEN: usize = 4;

/// An assembled Enigma machine.
///
/// Built once per configuration command; every encrypted letter
/// advances the rotor state, and subsequent [`encrypt`](Self::encrypt)
/// calls continue from that state. Reconfiguring means building a new
/// `Machine`.
///
/// # Examples
///
/// ```
/// use enigma::Machine;
///
/// let mut machine = Machine::new("B", "III", "IV", "I", "AXLE").unwrap();
/// let ciphertext = machine.encrypt("FROM his shoulder Hiawatha").unwrap();
/// assert_eq!(ciphertext, "HYIHL BKOML IUYDC MPPSF SZW");
/// ```
///
/// The cipher is reciprocal: a second machine in the same starting
/// configuration decrypts the ciphertext.
///
/// ```
/// use enigma::Machine;
///
/// let mut encoder = Machine::new("C", "VI", "II", "V", "TEST").unwrap();
/// let ciphertext = encoder.encrypt("attack at dawn").unwrap();
///
/// let mut decoder = Machine::new("C", "VI", "II", "V", "TEST").unwrap();
/// assert_eq!(decoder.encrypt(&ciphertext).unwrap(), "ATTAC KATDA WN");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    reflector: Reflector,
    left: Rotor,
    mid: Rotor,
    right: Rotor,
}

impl Machine {
    /// Assembles a machine from five configuration tokens.
    ///
    /// `config` holds the four starting positions: reflector, left,
    /// mid, right. The three rotor types must be pairwise distinct.
    ///
    /// # Parameters
    /// - `reflector`: Reflector type token, "B" or "C".
    /// - `left`, `mid`, `right`: Rotor type tokens, "I" through "VIII".
    /// - `config`: Exactly 4 uppercase letters.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidConfig`] if `config` is not exactly 4
    /// uppercase letters; [`EnigmaError::InvalidReflectorType`] /
    /// [`EnigmaError::InvalidRotorType`] for unknown type tokens;
    /// [`EnigmaError::DuplicateRotor`] if a rotor type is used twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Machine;
    ///
    /// assert!(Machine::new("B", "I", "II", "III", "AAAA").is_ok());
    /// ```
    ///
    /// ```
    /// use enigma::{error::EnigmaError, Machine};
    ///
    /// let result = Machine::new("B", "I", "II", "I", "AAAA");
    /// assert_eq!(result.unwrap_err(), EnigmaError::DuplicateRotor);
    /// ```
    pub fn new(
        reflector: &str,
        left: &str,
        mid: &str,
        right: &str,
        config: &str,
    ) -> Result<Self, EnigmaError> {
        let positions: Vec<char> = config.chars().collect();
        if positions.len() != CONFIG_LEN || !positions.iter().all(char::is_ascii_uppercase) {
            return Err(EnigmaError::InvalidConfig);
        }

        let reflector = Reflector::new(positions[0], reflector)?;
        let left = Rotor::new(positions[1], left)?;

        let mid = Rotor::new(positions[2], mid)?;
        if mid.kind() == left.kind() {
            return Err(EnigmaError::DuplicateRotor);
        }

        let right = Rotor::new(positions[3], right)?;
        if right.kind() == left.kind() || right.kind() == mid.kind() {
            return Err(EnigmaError::DuplicateRotor);
        }

        Ok(Machine {
            reflector,
            left,
            mid,
            right,
        })
    }

    /// Encrypts (or, by reciprocity, decrypts) a message.
    ///
    /// Non-alphabetic characters are dropped; letters are uppercased,
    /// each stepping the rotors once before substitution. Output is
    /// grouped in blocks of five letters separated by single spaces.
    ///
    /// # Errors
    /// [`EnigmaError::WiringLookupFailure`] on a wiring-table invariant
    /// violation; unreachable with the built-in tables.
    pub fn encrypt(&mut self, message: &str) -> Result<String, EnigmaError> {
        let mut ciphertext = String::with_capacity(message.len() + message.len() / GROUP_LEN);
        let mut group = 0;
        for c in message.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            if group == GROUP_LEN {
                ciphertext.push(' ');
                group = 0;
            }
            self.rotate();
            ciphertext.push(self.perm(c.to_ascii_uppercase())?);
            group += 1;
        }
        Ok(ciphertext)
    }

    /// Steps the rotors for one keypress. Notch state is read before
    /// any wheel moves: a mid rotor on its notch advances itself and
    /// the left rotor (the double-step anomaly), otherwise a right
    /// rotor on its notch advances the mid; the right rotor always
    /// steps.
    fn rotate(&mut self) {
        if self.mid.at_notch() {
            self.mid.advance();
            self.left.advance();
        } else if self.right.at_notch() {
            self.mid.advance();
        }
        self.right.advance();
    }

    /// Routes one letter through the full signal path.
    fn perm(&self, c: char) -> Result<char, EnigmaError> {
        let c = self.right.permutate(c)?;
        let c = self.mid.permutate(c)?;
        let c = self.left.permutate(c)?;
        let c = self.reflector.permutate(c)?;
        let c = self.left.reverse(c)?;
        let c = self.mid.reverse(c)?;
        self.right.reverse(c)
    }
}
