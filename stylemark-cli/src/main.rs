// Command-line interface for stylemark
//
// This binary converts between styled text representations and exposes the Markdown codec
// directly.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  stylemark <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  stylemark convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  stylemark encode <text-file> --styles <codes>  - Encode text with legacy style codes
//  stylemark decode <markdown-file>               - Decode Markdown to text + spans (JSON)
//  stylemark inspect <path> [<transform>]         - Execute a transform (defaults to "runs")
//  stylemark --list-transforms                    - List available transforms
//
// Extra Parameters:
//
// Codec switches can be passed using --extra-<parameter-name> <value>. They override the same
// keys from the configuration files.
// Example:
//  stylemark notes.md --to markdown --extra-pair-policy by-kind

use stylemark_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use stylemark_babel::formats::json::to_json_string;
use stylemark_babel::options::CodecOptions;
use stylemark_babel::transforms::{decode_markdown, encode_style_codes};
use stylemark_babel::FormatRegistry;
use stylemark_config::{Loader, StylemarkConfig};
use tracing::{debug, warn};

/// `--extra-*` keys and the configuration keys they override
const EXTRA_CONFIG_KEYS: &[(&str, &str)] = &[
    ("pair-policy", "extract.pair_policy"),
    ("strikethrough", "encode.strikethrough"),
    ("newline", "encode.newline"),
    ("unmatched", "decode.unmatched"),
    ("newline-sentinel", "codes.newline_sentinel"),
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("stylemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert bold, italic and strikethrough styled text to and from Markdown")
        .long_about(
            "stylemark converts between styled text and Markdown using **bold**, *italic*\n\
            and ~~strikethrough~~ delimiters.\n\n\
            Commands:\n  \
            - convert: Transform between formats (markdown, json, plain)\n  \
            - encode:  Encode a text file with one legacy style code per character\n  \
            - decode:  Strip delimiters from Markdown and print text + spans as JSON\n  \
            - inspect: View the style array or runs of a document\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> to override codec settings for one run:\n  \
            pair-policy (legacy|by-kind), strikethrough (eager|deferred),\n  \
            newline (single|paragraph), unmatched (drop|keep), newline-sentinel <n>.\n\n\
            Examples:\n  \
            stylemark notes.md --to json                    # Markdown to text + spans\n  \
            stylemark spans.json --to markdown -o notes.md  # And back\n  \
            stylemark encode text.txt --styles 1,1,1        # Prints **abc** for 'abc'\n  \
            stylemark inspect notes.md style-array          # Per-character codes",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .value_name("PATH")
                .help("Path to a stylemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the style array and runs of a document")
                .long_about(
                    "View the per-character styling the Markdown encoder works from.\n\n\
                    Transforms:\n  \
                    - style-array: legacy integer codes, one line per text line\n  \
                    - runs:        one line per style run (default)\n  \
                    - spans-json:  text and spans as JSON\n\n\
                    Examples:\n  \
                    stylemark inspect notes.md                # Runs (default)\n  \
                    stylemark inspect notes.md style-array    # Integer codes",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'runs'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown with **, * and ~~ delimiters (.md, .markdown)\n  \
                    - json:     Text with a list of style spans (.json)\n  \
                    - plain:    Unstyled text (.txt)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    stylemark convert notes.md --to json              # To JSON (stdout)\n  \
                    stylemark convert spans.json --to markdown -o a.md\n  \
                    stylemark notes.md --to plain                     # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a text file with one legacy style code per character")
                .long_about(
                    "Encode text with integer style codes into Markdown.\n\n\
                    Codes: 0 plain, 1 bold, 2 italic, 4 strikethrough, summed for\n\
                    combinations (3 = bold+italic, 7 = all three). Newline characters take\n\
                    the newline sentinel (20 unless configured otherwise).\n\n\
                    The text is read verbatim: a trailing newline in the file needs a code.\n\n\
                    Examples:\n  \
                    stylemark encode word.txt --styles 1,1,1,0",
                )
                .arg(
                    Arg::new("input")
                        .help("Text file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("styles")
                        .long("styles")
                        .help("Comma-separated style codes, one per character")
                        .required(true)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode Markdown into text and style spans (JSON)")
                .arg(
                    Arg::new("input")
                        .help("Markdown file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    init_tracing();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["inspect", "convert", "encode", "decode", "help"]
                    .contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );
    for key in extra_params.keys() {
        warn!("ignoring unknown parameter --extra-{key}");
    }
    let options = CodecOptions::from(&config);
    debug!(?options, "codec options");

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            let from = resolve_from(sub_matches.get_one::<String>("from"), path);
            handle_inspect_command(path, &from, transform, &options);
        }
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let to = required_arg(sub_matches, "to");
            let from = resolve_from(sub_matches.get_one::<String>("from"), input);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &options);
        }
        Some(("encode", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let styles = required_arg(sub_matches, "styles");
            handle_encode_command(input, styles, &options);
        }
        Some(("decode", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            handle_decode_command(input, &options);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Clap enforces `required(true)`; this only guards against a mismatch between the
/// command definition and the lookup.
fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        }
    }
}

/// Explicit `--from`, or the format detected from the file extension
fn resolve_from(explicit: Option<&String>, path: &str) -> String {
    if let Some(format) = explicit {
        return format.to_string();
    }
    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(path) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{path}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, from: &str, transform: &str, options: &CodecOptions) {
    let source = read_input(path);
    let registry = FormatRegistry::with_options(*options);
    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&doc, transform, options).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    options: &CodecOptions,
) {
    let registry = FormatRegistry::with_options(*options);

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry.serialize(&doc, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    write_output(output, &result);
}

/// Handle the encode command
fn handle_encode_command(input: &str, styles: &str, options: &CodecOptions) {
    let text = read_input(input);
    let codes = parse_style_codes(styles).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let markdown = encode_style_codes(&text, &codes, options).unwrap_or_else(|e| {
        eprintln!("Encode error: {e}");
        std::process::exit(1);
    });

    print!("{markdown}");
}

/// Handle the decode command
fn handle_decode_command(input: &str, options: &CodecOptions) {
    let markdown = read_input(input);
    let doc = decode_markdown(&markdown, options);
    let json = to_json_string(&doc).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("  style-array  - Legacy integer codes, one line per text line");
    println!("  runs         - One line per style run");
    println!("  spans-json   - Text and spans as JSON\n");

    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Comma and/or whitespace separated integer codes
fn parse_style_codes(raw: &str) -> Result<Vec<u8>, String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u8>()
                .map_err(|_| format!("Invalid style code '{part}'"))
        })
        .collect()
}

/// Load configuration and fold recognized `--extra-*` parameters into it as overrides.
///
/// Recognized keys are removed from `extra_params`.
fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> StylemarkConfig {
    let loader = Loader::new().with_optional_file("stylemark.toml");
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for (extra, key) in EXTRA_CONFIG_KEYS {
        let Some(raw) = extra_params.remove(*extra) else {
            continue;
        };
        let applied = if *extra == "newline-sentinel" {
            let value = raw.parse::<i64>().unwrap_or_else(|_| {
                eprintln!("Invalid integer value '{raw}' for --extra-{extra}");
                std::process::exit(1);
            });
            loader.set_override(key, value)
        } else {
            loader.set_override(key, raw)
        };
        loader = applied.unwrap_or_else(|err| {
            eprintln!("Invalid value for --extra-{extra}: {err}");
            std::process::exit(1);
        });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
