use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["style-array", "runs", "spans-json"];

const FORMATS: &[&str] = &["json", "markdown", "plain"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let from = || {
        Arg::new("from")
            .long("from")
            .help("Source format")
            .value_parser(clap::builder::PossibleValuesParser::new(FORMATS))
    };

    let mut cmd = Command::new("stylemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert bold, italic and strikethrough styled text to and from Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a stylemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the style array and runs of a document")
                .arg(input().help("Path to the document"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(from()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats")
                .arg(input())
                .arg(from())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a text file with legacy style codes")
                .arg(input())
                .arg(
                    Arg::new("styles")
                        .long("styles")
                        .help("Comma-separated style codes, one per character")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode Markdown into text and style spans")
                .arg(input()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "stylemark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "stylemark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "stylemark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
