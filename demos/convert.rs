//! Command-line interface for zcolor
//!
//! Converts color components between spaces, e.g.
//! `cargo run --example convert -- srgb hsv 255 191 0`

use std::{env, path::PathBuf, process};
use tracing_subscriber::EnvFilter;
use zcolor::{ColorConverter, ColorSpace, ColorValue, ConverterConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut json_output = false;
    let mut config_path = None;
    let mut positional = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json_output = true,
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --config needs a path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if positional.len() < 3 {
        print_help(&args[0]);
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => ConverterConfig::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => ConverterConfig::default(),
    };
    let converter = ColorConverter::with_config(config);

    let (from, to) = match (positional[0].parse::<ColorSpace>(), positional[1].parse::<ColorSpace>()) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let components = &positional[2..];

    if json_output {
        let color = ColorValue::parse(components, from).and_then(|value| converter.color(value, None));
        match color {
            Ok(color) => match serde_json::to_string_pretty(&color) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing color: {}", e);
                    process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    match converter.convert(components, from, to) {
        Ok(values) => println!("{} -> {}: {}", from, to, values.join(" ")),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    eprintln!("Usage: {} <from> <to> <component>... [--json] [--config <file>]", program);
    eprintln!();
    eprintln!("Spaces: srgb, hsv, cmyk, hex");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json           Print every representation of the color as JSON");
    eprintln!("  --config <file>  Load converter settings from a JSON file");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} srgb hsv 255 191 0", program);
    eprintln!("  {} hex cmyk '#FFBF00'", program);
    eprintln!("  RUST_LOG=zcolor=debug {} hsv hex 200 40 80", program);
}
