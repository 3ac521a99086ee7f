//! Property tests for machine-level invariants.
//!
//! Random machines and messages exercise the properties the cipher is
//! built on: encrypt-then-decrypt round trips, no letter ever maps to
//! itself, and output always comes in five-letter groups.

use enigma::Machine;
use proptest::prelude::*;

const ROTOR_NAMES: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

/// Regroups a letters-only string into five-letter blocks, the way
/// `encrypt` formats its output.
fn group_in_fives(letters: &str) -> String {
    letters
        .as_bytes()
        .chunks(5)
        .map(|chunk| std::str::from_utf8(chunk).expect("ascii input"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Three pairwise-distinct rotor type tokens in random order.
fn arb_rotor_trio() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(ROTOR_NAMES.to_vec(), 3).prop_shuffle()
}

proptest! {
    #[test]
    fn encrypt_round_trips(
        reflector in proptest::sample::select(&["B", "C"][..]),
        rotors in arb_rotor_trio(),
        config in "[A-Z]{4}",
        message in "[A-Za-z0-9 .,!?]{0,80}",
    ) {
        let mut encoder =
            Machine::new(reflector, rotors[0], rotors[1], rotors[2], &config).unwrap();
        let ciphertext = encoder.encrypt(&message).unwrap();

        let mut decoder =
            Machine::new(reflector, rotors[0], rotors[1], rotors[2], &config).unwrap();
        let decrypted = decoder.encrypt(&ciphertext).unwrap();

        let expected: String = message
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        prop_assert_eq!(decrypted, group_in_fives(&expected));
    }

    #[test]
    fn no_letter_encrypts_to_itself(
        reflector in proptest::sample::select(&["B", "C"][..]),
        rotors in arb_rotor_trio(),
        config in "[A-Z]{4}",
        message in "[A-Z]{1,60}",
    ) {
        let mut machine =
            Machine::new(reflector, rotors[0], rotors[1], rotors[2], &config).unwrap();
        let ciphertext: String = machine
            .encrypt(&message)
            .unwrap()
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .collect();

        prop_assert_eq!(ciphertext.len(), message.len());
        for (plain, cipher) in message.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(plain, cipher);
        }
    }

    #[test]
    fn output_comes_in_five_letter_groups(
        reflector in proptest::sample::select(&["B", "C"][..]),
        rotors in arb_rotor_trio(),
        config in "[A-Z]{4}",
        message in "[A-Za-z ]{0,80}",
    ) {
        let mut machine =
            Machine::new(reflector, rotors[0], rotors[1], rotors[2], &config).unwrap();
        let ciphertext = machine.encrypt(&message).unwrap();

        prop_assert!(!ciphertext.starts_with(' '));
        prop_assert!(!ciphertext.ends_with(' '));

        let groups: Vec<&str> = ciphertext.split(' ').filter(|g| !g.is_empty()).collect();
        for (i, group) in groups.iter().enumerate() {
            prop_assert!(group.chars().all(|c| c.is_ascii_uppercase()));
            if i + 1 < groups.len() {
                prop_assert_eq!(group.len(), 5);
            } else {
                prop_assert!((1..=5).contains(&group.len()));
            }
        }
    }
}
