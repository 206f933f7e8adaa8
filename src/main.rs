//! Runa CLI
//!
//! Usage:
//!   runa [OPTIONS] <NUMBER>
//!
//! Options:
//!   --segments             Print segment ids instead of SVG
//!   --digits               Print the decomposed digits
//!   --save                 Write runa-<n>-lines.svg to the output directory
//!   --data-uri             Print the SVG as a base64 data URI
//!   -s, --settings <FILE>  Settings file (TOML format)
//!   -v, --verbose          Enable debug logging
//!   -h, --help             Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use runa::download;
use runa::glyph::decompose;
use runa::{convert, input, render_with_config, save_rune, InputError, RenderConfig, Settings};

/// Shown when there is no number to draw
const EMPTY_STATE: &str = "Enter the correct number (1-9999) to see the rune";

#[derive(Parser)]
#[command(name = "runa")]
#[command(about = "Draw numbers 1-9999 as runic glyphs")]
struct Cli {
    /// Number to draw; non-digit characters are ignored
    number: String,

    /// Print the segment ids instead of SVG
    #[arg(long, conflicts_with_all = ["digits", "data_uri", "save"])]
    segments: bool,

    /// Print the digit in each decimal place
    #[arg(long, conflicts_with_all = ["data_uri", "save"])]
    digits: bool,

    /// Write the SVG to runa-<n>-lines.svg instead of stdout
    #[arg(long, conflicts_with = "data_uri")]
    save: bool,

    /// Print the SVG as a base64 data URI
    #[arg(long)]
    data_uri: bool,

    /// Directory for saved files (overrides settings)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Include the XML declaration
    #[arg(long)]
    standalone: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let mut settings = match &cli.settings {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if cli.compact {
        settings.pretty_print = false;
    }
    if cli.standalone {
        settings.standalone = true;
    }
    if let Some(dir) = &cli.output {
        settings.directory = dir.clone();
    }

    let number = match input::parse_input(&cli.number) {
        Ok(n) => n,
        Err(InputError::Empty) => {
            eprintln!("{}", EMPTY_STATE);
            process::exit(1);
        }
        Err(e) => {
            eprint!("{}", e.format(&cli.number, "<number>"));
            process::exit(1);
        }
    };

    let rune = convert(number);

    if cli.segments {
        let ids: Vec<String> = rune.segments.iter().map(|id| id.to_string()).collect();
        println!("{}", ids.join(" "));
        return;
    }

    if cli.digits {
        println!("{}", decompose(number));
        return;
    }

    if cli.save {
        match save_rune(number, &settings) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let svg = render_with_config(&rune.segments, &RenderConfig::from(&settings));
    if cli.data_uri {
        println!("{}", download::data_uri(&svg));
    } else {
        println!("{}", svg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_modes_conflict() {
        for flags in [
            ["--segments", "--save"],
            ["--digits", "--save"],
            ["--save", "--data-uri"],
            ["--segments", "--digits"],
        ] {
            let args = ["runa", "1991", flags[0], flags[1]];
            assert!(Cli::try_parse_from(args).is_err(), "{:?} accepted", flags);
        }
    }

    #[test]
    fn test_save_with_output_dir() {
        let cli = Cli::try_parse_from(["runa", "1991", "--save", "-o", "runes"]).unwrap();
        assert!(cli.save);
        assert_eq!(cli.output, Some(PathBuf::from("runes")));
    }
}
