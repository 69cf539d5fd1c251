//! Yakuzadle CLI
//!
//! Usage:
//!   yakuzadle --serve                          # HTTP API server
//!   yakuzadle --guess "Goro Majima"            # Single guess against today's target
//!   yakuzadle --compare "Goro Majima" "Kazuma Kiryu"
//!   yakuzadle --interactive                    # Keep guessing until solved
//!   yakuzadle --guess "Goro Majima" --json     # JSON output

use chrono::NaiveDate;
use clap::Parser;
use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use yakuzadle::core::{compare, run_server, today_utc, Catalog, ServerConfig};
use yakuzadle::types::{CharacterRecord, FieldTile, FieldValue, Tile, VerdictRecord};
use yakuzadle::{DEFAULT_ADDR, DEFAULT_CATALOG_PATH, DEFAULT_IMAGE_BASE, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "yakuzadle",
    version = VERSION,
    about = "Yakuzadle - guess the daily character",
    long_about = "Yakuzadle compares a guessed character against a hidden daily target\n\
                  and reports, field by field, how close the guess is.\n\n\
                  Tiles:\n  \
                  green   - Exact match\n  \
                  yellow  - Partial match (shared element, same year or birthday)\n  \
                  red     - No match (arrow shows direction for height and birthdate)"
)]
struct Args {
    /// Character to guess against the daily target
    #[arg(short, long)]
    guess: Option<String>,

    /// Compare two catalog characters: CANDIDATE TARGET
    #[arg(short, long, num_args = 2, value_names = ["CANDIDATE", "TARGET"])]
    compare: Option<Vec<String>>,

    /// Interactive mode - read guesses from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Character catalog (JSON object: name -> record)
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: String,

    /// Prefix for character image URLs
    #[arg(long, default_value = DEFAULT_IMAGE_BASE)]
    image_base: String,

    /// Play a specific date (YYYY-MM-DD) instead of today (UTC)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let outcome = if args.serve {
        run_serve(&args).await
    } else if args.interactive {
        run_interactive(&args)
    } else if let Some(ref pair) = args.compare {
        run_compare(&pair[0], &pair[1], &args)
    } else if let Some(ref name) = args.guess {
        run_guess(name, &args)
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args)
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn play_date(args: &Args) -> NaiveDate {
    args.date.unwrap_or_else(today_utc)
}

/// Compare two named characters
fn run_compare(candidate: &str, target: &str, args: &Args) -> CliResult {
    let catalog = Catalog::load(&args.catalog)?;
    let candidate = catalog.require(candidate)?;
    let target = catalog.require(target)?;
    print_result(candidate, target, args)
}

/// Single guess against the daily target
fn run_guess(name: &str, args: &Args) -> CliResult {
    let catalog = Catalog::load(&args.catalog)?;
    let candidate = catalog.require(name)?;
    let target = catalog.daily_target(play_date(args))?;
    print_result(candidate, target, args)
}

/// Keep guessing until the target is found
fn run_interactive(args: &Args) -> CliResult {
    let catalog = Catalog::load(&args.catalog)?;
    let target = catalog.daily_target(play_date(args))?;

    print_header(args.no_color);
    println!("Type a character name and press Enter. Type 'quit' to give up.");
    println!("{} characters in the catalog.", catalog.len());
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut guesses = 0usize;

    loop {
        print!("[guess {}] > ", guesses + 1);
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nThe character was {}.", target.display_name().bold());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let Some(candidate) = catalog.get(line) else {
            println!("{}", "  Character not found".yellow());
            continue;
        };
        guesses += 1;
        debug!(guess = line, guesses, "interactive guess");

        print_result(candidate, target, args)?;

        if candidate.name == target.name {
            println!();
            println!(
                "{}",
                format!("  🎉 You guessed {} in {} tries!", target.display_name(), guesses)
                    .green()
                    .bold()
            );
            break;
        }
    }

    Ok(())
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> CliResult {
    let config = ServerConfig {
        addr: args.addr.clone(),
        catalog_path: args.catalog.clone(),
        image_base: args.image_base.clone(),
        fixed_date: args.date,
    };
    run_server(config).await
}

fn print_result(candidate: &CharacterRecord, target: &CharacterRecord, args: &Args) -> CliResult {
    let verdict = compare(candidate, target);
    if args.json {
        #[derive(serde::Serialize)]
        struct CliOutput<'a> {
            guess: &'a str,
            result: &'a VerdictRecord,
        }
        let output = CliOutput {
            guess: candidate.display_name(),
            result: &verdict,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print_tiles(candidate, &verdict);
    }
    Ok(())
}

fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Yakuzadle v{}", VERSION);
        println!("========================================");
    } else {
        println!("{}", "╔════════════════════════════════════════╗".bold());
        println!("{}", format!("║           Yakuzadle v{}              ║", VERSION).bold());
        println!("{}", "╚════════════════════════════════════════╝".bold());
    }
    println!();
}

/// Print one line per field with the guessed value and its tile
fn print_tiles(candidate: &CharacterRecord, verdict: &VerdictRecord) {
    println!("{}", candidate.display_name().bold());
    for tile in verdict.tiles() {
        let value = display_value(candidate, tile.label);
        let arrow = tile.arrow.map(|a| format!(" {}", a)).unwrap_or_default();
        println!(
            "  {:<15} {:<40} {}",
            tile.label,
            format!("{}{}", value, arrow),
            paint(&tile)
        );
    }
}

fn paint(tile: &FieldTile) -> ColoredString {
    let text = format!("[{}]", tile.tag);
    match tile.tile {
        Tile::Green => text.green(),
        Tile::Yellow => text.yellow(),
        Tile::Red => text.red(),
    }
}

fn display_value(record: &CharacterRecord, label: &str) -> String {
    let join = |v: &Option<Vec<String>>| match v {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => "-".to_string(),
    };
    match label {
        "Affiliation" => join(&record.affiliation),
        "Nationality" => match &record.nationality {
            Some(FieldValue::One(v)) => v.clone(),
            Some(FieldValue::Many(v)) if !v.is_empty() => v.join(", "),
            _ => "-".to_string(),
        },
        "Games" => join(&record.appears_in),
        "Blood Type" => record.blood_type.clone().unwrap_or_else(|| "-".to_string()),
        "Fighting Style" => join(&record.fighting_style),
        "Height" => record.height.clone().unwrap_or_else(|| "-".to_string()),
        "Birthdate" => record.date_of_birth.clone().unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}
