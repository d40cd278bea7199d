// File:    main.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The main entry point for the cipher-cli application.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher CLI
//!
//! Command-line front end for `cipher-core`: encrypt, decrypt, show the step
//! trace, generate random keys and check keys for the eight classical ciphers.
#![deny(missing_docs)]

use std::fs;
use std::path::PathBuf;

use cipher_core::engine::{self, Request};
use cipher_core::{CipherKind, Direction, KeyInput, Params, alphabet, keygen};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a cipher
    Encrypt(TransformArgs),
    /// Decrypt text with a cipher
    Decrypt(TransformArgs),
    /// Generate a random key (hill, monoalphabetic, one-time-pad)
    Keygen {
        /// The cipher to generate a key for
        #[arg(value_enum)]
        cipher: CipherArg,

        /// Hill matrix size (2 or 3)
        #[arg(short, long, default_value_t = 2)]
        size: usize,

        /// Text the One-Time Pad must cover
        #[arg(short, long)]
        text: Option<String>,

        /// Print the key as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a key is acceptable for a cipher
    Validate {
        /// The cipher the key is for
        #[arg(value_enum)]
        cipher: CipherArg,

        /// The key to check
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,

        /// Hill matrix size (2 or 3)
        #[arg(long)]
        size: Option<usize>,

        /// Rail Fence rail count
        #[arg(long)]
        rails: Option<usize>,

        /// Text the key will be used with (One-Time Pad length, Rail Fence rails)
        #[arg(short, long)]
        text: Option<String>,
    },
    /// List the supported ciphers
    List,
}

#[derive(Args)]
struct TransformArgs {
    /// The cipher to use
    #[arg(value_enum)]
    cipher: CipherArg,

    /// The text to transform (letters and spaces)
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// The key: shift, alphabet, keyword, matrix numbers, rails, column key or pad
    #[arg(short, long, allow_hyphen_values = true)]
    key: String,

    /// Hill matrix size (2 or 3); inferred from the key when omitted
    #[arg(long)]
    size: Option<usize>,

    /// Rail Fence rail count; overrides the key
    #[arg(long)]
    rails: Option<usize>,

    /// Print every step of the computation after the result
    #[arg(long)]
    trace: bool,

    /// Print the outcome or failure as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CipherArg {
    Caesar,
    Monoalphabetic,
    Polyalphabetic,
    Playfair,
    Hill,
    RailFence,
    RowColumn,
    OneTimePad,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Caesar => Self::Caesar,
            CipherArg::Monoalphabetic => Self::Monoalphabetic,
            CipherArg::Polyalphabetic => Self::Polyalphabetic,
            CipherArg::Playfair => Self::Playfair,
            CipherArg::Hill => Self::Hill,
            CipherArg::RailFence => Self::RailFence,
            CipherArg::RowColumn => Self::RowColumn,
            CipherArg::OneTimePad => Self::OneTimePad,
        }
    }
}

#[derive(Serialize)]
struct GeneratedKey {
    cipher: CipherKind,
    key: String,
}

fn read_text(args: &TransformArgs) -> Result<String, String> {
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map(|content| content.trim_end_matches(['\r', '\n']).to_owned())
            .map_err(|e| format!("Failed to read input file '{}': {e}", path.display()))?,
        (None, None) => return Err("Provide the text as an argument or with --input".into()),
    };
    if text.trim().is_empty() {
        return Err("Text must not be empty".into());
    }
    Ok(text)
}

fn fail(message: &str) -> ! {
    error!("{message}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("Failed to serialize output: {e}")),
    }
}

fn run_transform(direction: Direction, args: &TransformArgs) {
    let cipher = CipherKind::from(args.cipher);
    let text = read_text(args).unwrap_or_else(|message| fail(&message));

    let request = Request {
        cipher,
        direction,
        text,
        key: KeyInput::Text(args.key.clone()),
        params: Params {
            size: args.size,
            rails: args.rails,
        },
    };
    info!("Running {cipher} {direction} on {} characters.", request.text.len());

    match engine::run(&request) {
        Ok(outcome) => {
            if args.json {
                print_json(&outcome);
                return;
            }
            println!("{}", outcome.result);
            if args.trace {
                for (number, step) in outcome.trace.iter().enumerate() {
                    println!("{:>3}. {}", number + 1, step.description);
                }
            }
        }
        Err(failure) => {
            error!(
                "{cipher} {direction} failed ({:?}): {}",
                failure.error_kind, failure.message
            );
            if args.json {
                print_json(&failure);
            }
            std::process::exit(1);
        }
    }
}

fn generate_key(cipher: CipherKind, size: usize, text: Option<&str>) -> Result<String, String> {
    let mut rng = rand::rng();
    match cipher {
        CipherKind::Hill => keygen::hill_matrix(size, &mut rng)
            .map(|matrix| matrix.to_string())
            .map_err(|e| e.to_string()),
        CipherKind::Monoalphabetic => Ok(keygen::substitution_alphabet(&mut rng)),
        CipherKind::OneTimePad => {
            let text = text.ok_or("A One-Time Pad needs --text to size the pad")?;
            alphabet::validate_text(text).map_err(|e| e.to_string())?;
            Ok(keygen::one_time_pad(text, &mut rng))
        }
        other => Err(format!("Random keys are not available for {other}")),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encrypt(args) => run_transform(Direction::Encrypt, args),
        Commands::Decrypt(args) => run_transform(Direction::Decrypt, args),
        Commands::Keygen {
            cipher,
            size,
            text,
            json,
        } => {
            let cipher = CipherKind::from(*cipher);
            info!("Generating a random {cipher} key.");
            let key = generate_key(cipher, *size, text.as_deref())
                .unwrap_or_else(|message| fail(&format!("Failed to generate a key: {message}")));
            if *json {
                print_json(&GeneratedKey { cipher, key });
            } else {
                println!("{key}");
            }
        }
        Commands::Validate {
            cipher,
            key,
            size,
            rails,
            text,
        } => {
            let cipher = CipherKind::from(*cipher);
            let params = Params {
                size: *size,
                rails: *rails,
            };
            let valid = engine::validate_key(
                cipher,
                &KeyInput::Text(key.clone()),
                &params,
                text.as_deref().unwrap_or_default(),
            );
            info!("Key for {cipher} is {}.", if valid { "valid" } else { "invalid" });
            if valid {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        Commands::List => {
            for cipher in CipherKind::ALL {
                println!("{:<16} {cipher}", cipher.id());
            }
        }
    }
}
