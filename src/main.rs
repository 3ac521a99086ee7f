//! Line-oriented Enigma session.
//!
//! Reads stdin line by line. A line starting with `*` configures a new
//! machine from five whitespace-separated tokens (reflector, left, mid,
//! right rotor types, and the four starting positions); every other
//! line is encrypted on the current machine and printed. Bad input is
//! reported on stderr and never ends the session.
//!
//! ```text
//! * B III IV I AXLE
//! FROM his shoulder Hiawatha
//! HYIHL BKOML IUYDC MPPSF SZW
//! ```

use std::io::{self, BufRead};

use enigma::Machine;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut machine: Option<Machine> = None;

    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(command) = line.strip_prefix('*') {
            let tokens: Vec<&str> = command.split_whitespace().collect();
            match tokens.as_slice() {
                [reflector, left, mid, right, config] => {
                    match Machine::new(reflector, left, mid, right, config) {
                        Ok(configured) => machine = Some(configured),
                        Err(err) => eprintln!("invalid configuration: {}", err),
                    }
                }
                _ => eprintln!("usage: * <reflector> <left> <mid> <right> <positions>"),
            }
            continue;
        }

        match machine.as_mut() {
            Some(machine) => match machine.encrypt(&line) {
                Ok(ciphertext) => println!("{}", ciphertext),
                Err(err) => eprintln!("{}", err),
            },
            None => eprintln!("no machine configured; start with a '*' line"),
        }
    }

    Ok(())
}
