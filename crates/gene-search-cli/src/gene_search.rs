//! Codon search CLI
//!
//! Usage: gene_search [GENE] [options]
//!
//! Options:
//!   --key <CODON>    Codon to search for (repeatable; default: ACG and GGC)
//!   --verbose, -v    Enable debug logging
//!   --help, -h       Show help
//!
//! The gene is taken from the GENE argument, then from the GENE_SEARCH_GENE
//! environment variable, then from the embedded example.
//!
//! Example:
//!   gene_search
//!   gene_search GATTACAGATTACA --key GAT --key ACA

use gene_search::app::searcher::{SearchConfig, SearchReport, run_search, verify_report};
use gene_search::constants::GENE_ENV_VAR;
use gene_search::{Codon, SearchStrategy};
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

struct Args {
    gene: Option<String>,
    keys: Vec<Codon>,
    verbose: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [GENE] [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [GENE]           Nucleotide string over A, C, G, T");
    eprintln!("                   (default: ${} or the embedded example)", GENE_ENV_VAR);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --key <CODON>    Codon to search for (repeatable; default: ACG and GGC)");
    eprintln!("  --verbose, -v    Enable debug logging");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut gene: Option<String> = None;
    let mut keys = Vec::new();
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--key" => {
                i += 1;
                let value = args.get(i).ok_or("--key requires a value")?;
                let key = value
                    .parse::<Codon>()
                    .map_err(|e| format!("Invalid key '{}': {}", value, e))?;
                keys.push(key);
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage(args.first().map_or("gene_search", String::as_str));
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if gene.is_some() {
                    return Err(format!("Duplicate gene argument '{}'", arg));
                }
                gene = Some(arg.to_string());
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        gene,
        keys,
        verbose,
    })
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Build the run config from arguments and environment
fn build_config(args: Args) -> SearchConfig {
    SearchConfig::resolve(args.gene, env::var(GENE_ENV_VAR).ok(), args.keys)
}

fn print_report(report: &SearchReport) {
    println!("Decoded {} codon(s).", report.codon_count);
    for outcome in &report.outcomes {
        let results: Vec<String> = SearchStrategy::ALL
            .iter()
            .map(|&strategy| format!("{}={}", strategy, outcome.result(strategy)))
            .collect();
        println!("{}: {}", outcome.key, results.join(" "));
    }
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    let config = build_config(args);
    println!("Gene: {} symbol(s)", config.gene.chars().count());

    let report = match run_search(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_report(&report);

    if let Err(e) = verify_report(&report) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
