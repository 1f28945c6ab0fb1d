//! # Console adapter
//!
//! The interactive configurator: prompts for rotor positions and
//! plugboard pairs on a terminal, re-prompting on invalid input.
//! An empty answer keeps the default (positions `AAA`, no plugboard).
//!
//! Runs over any `BufRead`/`Write` pair so it can be driven by tests;
//! the binary points it at stdin and stderr, keeping stdout free for
//! the cipher stream.

use std::io::{self, BufRead, Write};

use crate::engine::Machine;
use crate::ports::ConfigResult;

/// Banner printed before the prompts.
const BANNER: &str = "UNIGMA: THE LITTLE ENIGMA SIMULATOR\n\
                      ROTORS: I, II, III | REFLECTOR: B\n";

/// Prompt for a configuration and apply it to `machine`.
///
/// Invalid answers print the error and re-prompt; end-of-input on the
/// console keeps whatever was configured so far.
pub fn interactive_config<R, W>(machine: &mut Machine, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;

    prompt(
        &mut input,
        &mut output,
        "ROTOR POSITIONS (3 LETTERS A-Z, ENTER FOR AAA): ",
        "USING DEFAULT: AAA",
        |answer| machine.set_positions(answer),
    )?;
    writeln!(output, "POSITIONS SET TO: {}", machine.positions())?;
    writeln!(output)?;

    prompt(
        &mut input,
        &mut output,
        "PLUGBOARD PAIRS (E.G. 'AB CD EF', ENTER FOR NONE): ",
        "NO PLUGBOARD",
        |answer| machine.set_plugboard(answer),
    )?;
    writeln!(output, "PLUGBOARD SET TO: {}", machine.plugboard())?;
    writeln!(output)?;

    writeln!(output, "--- READY TO ENCRYPT/DECRYPT ---")?;
    writeln!(output, "ENTER TEXT (CTRL+D OR CTRL+Z TO END):")?;
    output.flush()
}

/// One prompt loop: re-ask until `apply` accepts the trimmed answer,
/// the answer is empty, or the console reaches end-of-input.
fn prompt<R, W, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default_note: &str,
    mut apply: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> ConfigResult<()>,
{
    let mut line = String::new();
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "{default_note}")?;
            return Ok(());
        }

        let answer = line.trim();
        if answer.is_empty() {
            writeln!(output, "{default_note}")?;
            return Ok(());
        }

        match apply(answer) {
            Ok(()) => return Ok(()),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
