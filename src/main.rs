use std::env;
use std::fs;
use std::process;

use env_logger::Env;
use notation::{format_slots, Converter, ConverterConfig, Slot, Value};

const USAGE: &str = "Usage: notation [--no-cache] [--config <file.yaml>] <value>...";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut no_cache = false;
    let mut config_path: Option<&String> = None;
    let mut values: Vec<&String> = Vec::new();

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-cache" => no_cache = true,
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("{}", USAGE);
                    process::exit(1);
                }
            },
            _ => values.push(arg),
        }
    }

    if values.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    // Load config
    let mut config = match config_path {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading config '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match ConverterConfig::from_yaml(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => ConverterConfig::default(),
    };
    if no_cache {
        config.memoize = false;
    }

    let converter = Converter::with_config(config);
    let mut failed = false;

    for raw in values {
        let value = match read_value(raw) {
            Some(value) => value,
            None => {
                eprintln!("{}: not an array of integers", raw);
                failed = true;
                continue;
            }
        };

        match converter.convert(&value) {
            Some(Value::Array(slots)) => println!("{} -> {}", raw, format_slots(&slots)),
            Some(Value::Text(text)) => println!("{} -> {}", raw, text),
            None => {
                eprintln!("{}: no match", raw);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Arguments starting with `[` are arrays, anything else is a notation string.
fn read_value(raw: &str) -> Option<Value> {
    if raw.trim_start().starts_with('[') {
        let slots: Vec<Slot> = serde_yaml::from_str(raw).ok()?;
        Some(Value::Array(slots))
    } else {
        Some(Value::from(raw))
    }
}
