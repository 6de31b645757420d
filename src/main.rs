//! Finite Projective Plane Toolkit - Command Line Interface
//!
//! Usage:
//!   fpp matrix [OPTIONS]         Print the incidence matrix of a plane
//!   fpp info [OPTIONS]           Show plane properties
//!   fpp verify [OPTIONS]         Check every supported order up to a bound
//!   fpp classify <VALUE>         Integer / prime / prime-power classification
//!   fpp deck [OPTIONS]           Lay out a deck of cards
//!   fpp init-config <PATH>       Write a default deck configuration

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::*;

use dobble_planes::prelude::*;
use dobble_planes::verify::testable_orders;

#[derive(Parser)]
#[command(name = "fpp")]
#[command(about = "Finite projective planes and matching-card deck layouts")]
#[command(version)]
struct Cli {
    /// Output results in JSON format (for machine parsing)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the incidence matrix of a plane
    Matrix {
        /// Plane order (prime, or one of 4, 8)
        #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
        order: i64,
    },

    /// Show projective plane information
    Info {
        /// Plane order
        #[arg(short, long, default_value = "7", allow_negative_numbers = true)]
        order: i64,
    },

    /// Build and check every supported order up to a bound
    Verify {
        /// Largest order to check
        #[arg(short, long, default_value = "50")]
        max_order: usize,
    },

    /// Classify a number as integer, prime, prime power
    Classify {
        /// Integer or floating-point literal
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Lay out a deck of cards
    Deck {
        /// TOML deck configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Symbols per card (overrides the configuration)
        #[arg(short, long)]
        emojis_per_card: Option<usize>,

        /// Deck name (overrides the configuration)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Write the default deck configuration as TOML
    InitConfig {
        /// Output path
        path: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_output = cli.json;

    let result = match cli.command {
        Commands::Matrix { order } => show_matrix(order, json_output),
        Commands::Info { order } => show_info(order, json_output),
        Commands::Verify { max_order } => run_verify(max_order, json_output),
        Commands::Classify { value } => run_classify(&value, json_output),
        Commands::Deck { config, emojis_per_card, name } => {
            run_deck(config, emojis_per_card, name, json_output)
        }
        Commands::InitConfig { path } => init_config(&path),
    };

    if let Err(message) = result {
        fail(&message, json_output);
    }
}

fn fail(message: &str, json_output: bool) -> ! {
    if json_output {
        eprintln!("{}", serde_json::json!({ "error": message }));
    } else {
        eprintln!("{}: {}", "Error".red(), message);
    }
    process::exit(1);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

fn banner(title: &str) {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".cyan());
    println!("{}", format!("║ {:<60} ║", title).cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".cyan());
    println!();
}

fn show_matrix(order: i64, json_output: bool) -> Result<(), String> {
    let matrix = compute_incidence_matrix(order).map_err(|e| e.to_string())?;
    if json_output {
        return print_json(&matrix.to_rows());
    }
    print!("{}", matrix);
    Ok(())
}

/// JSON output structure for plane information
#[derive(serde::Serialize)]
struct PlaneInfo {
    order: usize,
    points: usize,
    lines: usize,
    points_per_line: usize,
    lines_per_point: usize,
    construction: &'static str,
    sample_lines: Vec<Vec<usize>>,
}

fn show_info(order: i64, json_output: bool) -> Result<(), String> {
    let plane = ProjectivePlane::new(order).map_err(|e| e.to_string())?;
    let n = plane.size();
    let k = plane.order() + 1;
    let construction = if is_prime(order) { "cyclic (prime order)" } else { "kernel table (prime power)" };
    let sample_lines: Vec<Vec<usize>> =
        (0..n.min(5)).map(|line| plane.points_on_line(line).to_vec()).collect();

    if json_output {
        return print_json(&PlaneInfo {
            order: plane.order(),
            points: n,
            lines: n,
            points_per_line: k,
            lines_per_point: k,
            construction,
            sample_lines,
        });
    }

    banner("Projective Plane Information");
    println!("Projective plane of order {}", plane.order());
    println!("════════════════════════════════════════");
    println!();
    println!("Basic Properties:");
    println!("  • Points: {}", n);
    println!("  • Lines: {}", n);
    println!("  • Points per line: {}", k);
    println!("  • Lines through each point: {}", k);
    println!("  • Construction: {}", construction);
    println!();
    println!("As a deck:");
    println!("  • Cards: {}", n);
    println!("  • Distinct symbols: {}", n);
    println!("  • Symbols per card: {}", k);
    println!();
    println!("Sample Incidence (first {} lines):", sample_lines.len());
    println!("──────────────────────────────────────────");
    for (line, points) in sample_lines.iter().enumerate() {
        println!("  Line {}: points {:?}", line, points);
    }
    Ok(())
}

fn run_verify(max_order: usize, json_output: bool) -> Result<(), String> {
    let orders = testable_orders(max_order);
    let reports = sweep(&orders).map_err(|e| e.to_string())?;
    let failures = reports.iter().filter(|r| !r.is_valid()).count();

    if json_output {
        print_json(&reports)?;
    } else {
        banner("Design Verification");
        for report in &reports {
            let status = if report.is_valid() { "PASS".green() } else { "FAIL".red() };
            println!("  order {:>3} ({:>5} x {:<5}) {}", report.order, report.size, report.size, status);
        }
        println!();
        println!("{} orders checked, {} failed", reports.len(), failures);
    }

    if failures > 0 {
        return Err(format!("{} orders failed verification", failures));
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct Classification {
    value: String,
    integer: bool,
    prime: bool,
    prime_power: bool,
}

fn run_classify(value: &str, json_output: bool) -> Result<(), String> {
    let number = match value.parse::<i64>() {
        Ok(n) => Numeric::Int(n),
        Err(_) => value
            .parse::<f64>()
            .map(Numeric::Float)
            .map_err(|_| format!("'{}' is not a number", value))?,
    };
    let result = Classification {
        value: value.to_string(),
        integer: number.is_integer(),
        prime: is_prime(number),
        prime_power: is_prime_power(number),
    };

    if json_output {
        return print_json(&result);
    }
    let yes_no = |b: bool| if b { "yes".green() } else { "no".red() };
    println!("{}", value.bold());
    println!("  • integer:     {}", yes_no(result.integer));
    println!("  • prime:       {}", yes_no(result.prime));
    println!("  • prime power: {}", yes_no(result.prime_power));
    Ok(())
}

fn run_deck(
    config_path: Option<PathBuf>,
    emojis_per_card: Option<usize>,
    name: Option<String>,
    json_output: bool,
) -> Result<(), String> {
    let mut config = match config_path {
        Some(path) => DeckConfig::load(&path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => DeckConfig::default(),
    };
    if let Some(k) = emojis_per_card {
        config.emojis_per_card = k;
    }
    if let Some(name) = name {
        config.name = name;
    }

    check_symbols_per_card(config.emojis_per_card)?;
    let deck = build_deck(&config).map_err(|e| e.to_string())?;

    if json_output {
        return print_json(&deck);
    }
    banner(&format!("Deck: {}", deck.name));
    println!(
        "{} cards, {} symbols per card, {} distinct symbols",
        deck.num_cards(),
        deck.emojis_per_card,
        deck.symbols.len()
    );
    println!();
    for card in &deck.cards {
        println!("  Card {:>3}: {}", card.index + 1, card.symbols.join(", "));
    }
    Ok(())
}

/// Reject unbuildable decks before touching the plane constructor
fn check_symbols_per_card(symbols_per_card: usize) -> Result<(), String> {
    if dobble_planes::is_supported_deck(symbols_per_card) {
        return Ok(());
    }
    Err(format!(
        "no deck has {} symbols per card: use one more than a prime (3, 4, 6, 8, 12, ...) or 5 or 9",
        symbols_per_card
    ))
}

fn init_config(path: &Path) -> Result<(), String> {
    DeckConfig::default()
        .save(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_symbols_per_card() {
        for k in [3, 5, 8, 9, 12] {
            assert!(check_symbols_per_card(k).is_ok(), "{} rejected", k);
        }
        for k in [0, 1, 7, 10, 17] {
            let message = check_symbols_per_card(k).unwrap_err();
            assert!(message.starts_with(&format!("no deck has {} symbols per card", k)));
        }
    }
}
