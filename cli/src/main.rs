use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use ini_sections::ParseOptions;
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ini", version, about = "Convert INI files to JSON")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Section name whose repeated headers form a list. May be repeated.
    #[arg(short = 'a', long = "array-section", value_name = "name")]
    array_sections: Vec<String>,

    /// Print only this section.
    #[arg(short, long, value_name = "name")]
    section: Option<String>,

    /// JSON indentation size; 0 prints compact JSON (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    fn label(&self) -> &str {
        match self {
            InputSource::Stdin => "stdin",
            InputSource::File(path) => path,
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input, source) = read_input(args.input.as_deref())?;
    tracing::info!(input = source.label(), bytes = input.len(), "read input");

    let options = ParseOptions::new().with_array_sections(args.array_sections.iter().cloned());
    let document = ini_sections::parse_slice_with_options(&input, &options)?;

    let value = match args.section.as_deref() {
        Some(name) => document
            .get(name)
            .map(|section| section.to_value())
            .ok_or_else(|| format!("section not found: {name:?}"))?,
        None => document.to_value(),
    };

    match args.output.as_deref() {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            write_json(&mut file, &value, args.indent)?;
            println!("✔ Parsed {} → {path}", source.label());
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_json(&mut handle, &value, args.indent)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(Vec<u8>, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read(path).map_err(|err| format!("failed to read {path}: {err}"))?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
