// src/main.rs
//
// Command-line checker for Marketplace Web Service payloads.
// `list` browses the shape catalog; `check` validates JSON/JSONL payload files
// against a shape.

use clap::Parser;
use log::{error, info};
use mws_datatypes::catalog::{summarize_fields, Domain, ShapeCatalog, ShapeEntry};
use mws_datatypes::config::{default_config_template, Config};
use mws_datatypes::payload::load_records;
use mws_datatypes::Error;

#[derive(Parser)]
#[command(name = "mws-datatypes")]
#[command(about = "Browse MWS payload shapes and check payloads against them")]
struct Args {
    /// Mode of operation: list or check
    #[arg(long, default_value = "check")]
    mode: String,

    /// Path to configuration file (TOML)
    #[arg(long, short)]
    config: Option<String>,

    /// Shape to check against, e.g. "Order" or "Inbound.Address"
    #[arg(long)]
    shape: Option<String>,

    /// Restrict listing to one API domain
    #[arg(long)]
    domain: Option<String>,

    /// Regex over shape names (case-insensitive) for list mode
    #[arg(long)]
    search: Option<String>,

    /// Payload files (.json or .jsonl) for check mode
    #[arg(long)]
    file: Vec<String>,

    /// Reject payloads carrying undocumented fields. `--strict false`
    /// overrides `strict = true` in the config.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    strict: Option<bool>,

    /// Generate a default configuration file
    #[arg(long)]
    generate_config: bool,
}

fn main() {
    let args = Args::parse();

    // Handle config generation
    if args.generate_config {
        println!("{}", default_config_template());
        return;
    }

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                eprintln!("Use --generate-config to create a template.");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let default_level = config.global.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let catalog = ShapeCatalog::standard();

    let ok = match args.mode.as_str() {
        "list" => run_list_mode(&args, &catalog),
        "check" => run_check_mode(&args, &config, &catalog),
        _ => {
            eprintln!("Unknown mode: {}. Use: list or check", args.mode);
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

// =============================================================================
// List Mode: browse the shape catalog
// =============================================================================

fn run_list_mode(args: &Args, catalog: &ShapeCatalog) -> bool {
    let domain = match args.domain.as_deref().map(|d| (d, Domain::find(d))) {
        Some((_, Some(domain))) => Some(domain),
        Some((name, None)) => {
            eprintln!(
                "Unknown domain: {}. Known domains: {}",
                name,
                Domain::LITERALS.join(", ")
            );
            return false;
        }
        None => None,
    };

    let mut shapes: Vec<&ShapeEntry> = match &args.search {
        Some(pattern) => match catalog.search(pattern) {
            Ok(found) => found,
            Err(e) => {
                eprintln!("{}", e);
                return false;
            }
        },
        None => catalog.iter().collect(),
    };
    if let Some(domain) = domain {
        shapes.retain(|entry| entry.domain == domain);
        println!("# {} ({})", domain, domain.doc_url());
    }

    for entry in &shapes {
        println!("{:<40} {}", entry.name, entry.domain);
    }
    info!("{} of {} shapes listed", shapes.len(), catalog.len());
    true
}

// =============================================================================
// Check Mode: validate payload files against a shape
// =============================================================================

fn run_check_mode(args: &Args, config: &Config, catalog: &ShapeCatalog) -> bool {
    let shape = match args.shape.as_deref().or(config.check.shape.as_deref()) {
        Some(shape) => shape,
        None => {
            eprintln!("--shape is required for check mode (or set [check] shape in the config)");
            return false;
        }
    };
    let Some(entry) = catalog.get(shape) else {
        eprintln!("{}", Error::UnknownShape(shape.to_string()));
        eprintln!("Use --mode list --search <pattern> to find shape names.");
        return false;
    };

    if args.file.is_empty() {
        eprintln!("--file is required for check mode");
        return false;
    }

    let policy = config.check.resolve_policy(args.strict);
    let max_fields = config.check.max_reported_fields;

    let mut checked = 0usize;
    let mut failed = 0usize;

    for path in &args.file {
        let records = match load_records(path) {
            Ok(records) => records,
            Err(e) => {
                error!("{}", e);
                failed += 1;
                continue;
            }
        };

        for record in &records {
            checked += 1;
            let location = format!("{}:{}", path, record.position);
            match entry.check(&record.value, policy) {
                Ok(conformance) if conformance.is_exact() => {
                    println!("{} ok", location);
                }
                Ok(conformance) => {
                    println!(
                        "{} ok, undocumented: {}",
                        location,
                        summarize_fields(&conformance.undocumented_fields, max_fields)
                    );
                }
                Err(Error::UndocumentedFields { shape, fields }) => {
                    failed += 1;
                    println!(
                        "{} FAIL {} carries undocumented fields: {}",
                        location,
                        shape,
                        summarize_fields(&fields, max_fields)
                    );
                }
                Err(e) => {
                    failed += 1;
                    println!("{} FAIL {}", location, e);
                }
            }
        }
    }

    println!(
        "\n{} record(s) checked against {}, {} failure(s)",
        checked, entry.name, failed
    );
    failed == 0
}
