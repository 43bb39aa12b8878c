use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use cifra::api::{self, KeyBody, TransposeBody, ValidateBody};
use cifra::{Notation, SongSheet, ValidationPolicy};

#[derive(Parser)]
#[command(name = "cifra", version, about = "Transpose and validate chord charts")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transpose every [Chord] in a chart
    Transpose {
        /// Chart or song sheet file, `-` for stdin
        input: PathBuf,
        /// Semitones to shift, may be negative
        #[arg(short, long, allow_negative_numbers = true)]
        semitones: i32,
        /// Key the chart is written in (defaults to the sheet's `key`)
        #[arg(short, long)]
        key: Option<String>,
        /// Spell transposed roots with flats, overriding the policy
        #[arg(long)]
        flat: bool,
        /// Also transpose slash-chord bass notes
        #[arg(long)]
        bass: bool,
        /// Print the transposed song sheet instead of JSON
        #[arg(long)]
        sheet: bool,
        /// YAML policy supplying the default notation
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the chords in a chart
    Validate {
        /// Chart or song sheet file, `-` for stdin
        input: PathBuf,
        /// YAML validation policy
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Transpose a single key
    Key {
        key: String,
        #[arg(short, long, allow_negative_numbers = true)]
        semitones: i32,
    },
    /// List the canonical key names
    Keys,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Command) -> Result<i32> {
    match command {
        Command::Transpose {
            input,
            semitones,
            key,
            flat,
            bass,
            sheet,
            config,
        } => {
            let policy = load_policy(config.as_deref())?;
            let mut options = policy.transpose_options(bass);
            if flat {
                options.notation = Notation::Flat;
            }

            let source = read_input(&input)?;
            let mut parsed = SongSheet::parse(&source)?;

            if sheet {
                if key.is_some() {
                    parsed.metadata.key = key;
                }
                let transposed = parsed.transpose(semitones, &options)?;
                print!("{}", transposed.render()?);
                return Ok(0);
            }

            let body = TransposeBody {
                cifra: Some(parsed.chart),
                semitones,
                tom_original: key.or(parsed.metadata.key),
                notation: options.notation,
                transpose_bass: options.transpose_bass,
            };
            print_json(&api::transpose_cifra(&body)?)?;
            Ok(0)
        }
        Command::Validate { input, config } => {
            let policy = load_policy(config.as_deref())?;
            let source = read_input(&input)?;
            let parsed = SongSheet::parse(&source)?;
            let response = api::validate_cifra_with(
                &ValidateBody {
                    cifra: Some(parsed.chart),
                },
                &policy,
            )?;
            print_json(&response)?;
            Ok(if response.valid { 0 } else { 1 })
        }
        Command::Key { key, semitones } => {
            let response = api::transpose_tom(&KeyBody {
                original_key: key,
                semitones,
            })?;
            print_json(&response)?;
            Ok(0)
        }
        Command::Keys => {
            print_json(&api::list_keys())?;
            Ok(0)
        }
    }
}

fn load_policy(path: Option<&Path>) -> Result<ValidationPolicy> {
    match path {
        Some(path) => Ok(ValidationPolicy::load(path)?),
        None => Ok(ValidationPolicy::default()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("reading chart from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
