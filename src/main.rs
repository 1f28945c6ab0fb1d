//! Command-line shell around the cipher engine.
//!
//! Flags configure the machine; stdin is enciphered to stdout. With no
//! arguments the console adapter prompts for a configuration first, the
//! way the original teletype build did. Everything human-facing goes to
//! stderr so stdout stays a clean cipher stream.

use std::io;

use anyhow::Result;
use clap::Parser;

use unigma::{encipher_stream, interactive_config, Machine};

/// Simulator of the three-rotor Enigma: rotors I, II, III, reflector B.
#[derive(Parser)]
#[command(name = "unigma", version)]
#[command(about = "Encipher stdin to stdout like a three-rotor Enigma (involutive: run twice to decrypt)")]
struct Cli {
    /// Initial rotor positions, three letters left-middle-right (e.g. XYZ)
    #[arg(short, long, default_value = "AAA")]
    positions: String,

    /// Plugboard pairs, space-separated (e.g. "AB CD EF")
    #[arg(short = 'b', long, default_value = "")]
    plugboard: String,

    /// Print the configuration to stderr and exit
    #[arg(short, long)]
    show: bool,
}

fn main() -> Result<()> {
    // No arguments at all: interactive configuration, like the original.
    let interactive = std::env::args_os().len() == 1;

    let cli = Cli::parse();
    let mut machine = Machine::new(&cli.positions, &cli.plugboard)?;

    if cli.show {
        eprintln!("{}", machine.describe());
        return Ok(());
    }

    let stdin = io::stdin();
    if interactive {
        interactive_config(&mut machine, stdin.lock(), io::stderr().lock())?;
    }

    encipher_stream(&mut machine, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
