use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use log::error;

use wordgen::config::GeneratorConfig;
use wordgen::query::{LengthInput, RawRequest};
use wordgen::WordService;

struct Args {
    config: Option<PathBuf>,
    request: RawRequest,
}

fn parse_args() -> Option<Args> {
    let mut config = None;
    let mut positional = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "--help" | "-h" => print_help(),
            _ => positional.push(a),
        }
    }
    if positional.is_empty() || positional.len() > 3 {
        return None;
    }
    let mut positional = positional.into_iter();
    let sample = positional.next()?;
    Some(Args {
        config,
        request: RawRequest {
            sample,
            min_length: positional.next().map(LengthInput::from),
            max_length: positional.next().map(LengthInput::from),
        },
    })
}

fn print_help() -> ! {
    println!("Usage: wordgen [--config <config.json>] <letters> [min_length] [max_length]");
    println!("Prints every dictionary word that can be built from <letters> as JSON.");
    println!("Set RUST_LOG=debug for details.");
    std::process::exit(0);
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = parse_args() else {
        eprintln!("Usage: wordgen [--config <config.json>] <letters> [min_length] [max_length]");
        return ExitCode::from(2);
    };

    let config = match args.config {
        Some(path) => match GeneratorConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config {}: {}", path.display(), e);
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };

    let service = match WordService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            error!("Cannot start without a dictionary: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let answer = service.answer(&args.request);
    match serde_json::to_string_pretty(&answer) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
