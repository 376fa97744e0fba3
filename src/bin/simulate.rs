//! Round balance simulator CLI.
//!
//! Plays many rounds with a scripted player to analyze scoring and pacing.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # Default: 1000 rounds on 17x10
//!   cargo run --bin simulate -- -n 100 --rows 8   # 100 rounds on an 8x10 board
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use std::env;
use std::io;
use std::path::Path;
use tenfold::core::RoundConfig;
use tenfold::simulator::{run_simulation, SimConfig};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              TENFOLD BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!(
        "  Board:          {}x{}",
        config.round.rows, config.round.cols
    );
    println!("  Duration:       {}s", config.round.duration_seconds);
    println!("  Use Skills:     {}", config.use_skills);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let filename = "sim_report.json";
        std::fs::write(filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--rows" => {
                if i + 1 < args.len() {
                    if let Ok(rows) = args[i + 1].parse() {
                        config.round.rows = rows;
                    }
                    i += 1;
                }
            }
            "--cols" => {
                if i + 1 < args.len() {
                    if let Ok(cols) = args[i + 1].parse() {
                        config.round.cols = cols;
                    }
                    i += 1;
                }
            }
            "--duration" => {
                if i + 1 < args.len() {
                    if let Ok(seconds) = args[i + 1].parse() {
                        config.round.duration_seconds = seconds;
                    }
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config.round = match RoundConfig::load_json(Path::new(&args[i + 1])) {
                        Ok(round) => round,
                        Err(e) => {
                            eprintln!("Could not load {}: {}", args[i + 1], e);
                            std::process::exit(1);
                        }
                    };
                    i += 1;
                }
            }
            "--no-skills" => {
                config.use_skills = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Tenfold Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of rounds to simulate (default: 1000)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("        --rows <R>       Board rows (default: 17)");
    println!("        --cols <C>       Board columns (default: 10)");
    println!("        --duration <D>   Round length in seconds (default: 60)");
    println!("        --config <FILE>  Load round settings from a JSON file");
    println!("        --no-skills      Never spend skill charges");
    println!("        --json           Save report to sim_report.json");
    println!("    -v, --verbose        Print every run");
    println!("    -h, --help           Show this help");
}
