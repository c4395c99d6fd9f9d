use anyhow::Context;
use clap::Parser;
use qala::{Catalog, EngineConfig, Explanation, SearchEngine};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Search an in-memory fashion catalog by keyword
#[derive(Parser, Debug)]
#[command(name = "qala")]
#[command(about = "Keyword and synonym search over brands and products", long_about = None)]
struct Args {
    /// Search query; multiple words are joined with spaces
    #[arg(required = true)]
    query: Vec<String>,

    /// Catalog JSON file (defaults to the built-in demo catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Engine config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show at most this many products and brands
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show scores and per-field contributions
    #[arg(long)]
    explain: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => {
            info!("Using built-in demo catalog");
            Catalog::demo().context("demo catalog is invalid")?
        }
    };

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = SearchEngine::new(config)?;

    let query = args.query.join(" ");
    debug!("Keywords: {:?}", engine.keywords(&query).as_slice());

    let mut explanation = engine.explain(&query, &catalog.products, &catalog.brands);
    if let Some(limit) = args.limit {
        explanation.products.truncate(limit);
        explanation.brands.truncate(limit);
    }
    info!(
        "{} products, {} brands for {:?}",
        explanation.products.len(),
        explanation.brands.len(),
        query
    );

    if args.json {
        let out = if args.explain {
            serde_json::to_string_pretty(&explanation)?
        } else {
            serde_json::to_string_pretty(&qala::SearchResults::from(explanation))?
        };
        println!("{}", out);
    } else {
        print_text(&query, &explanation, args.explain);
    }

    Ok(())
}

fn print_text(query: &str, explanation: &Explanation<'_>, explain: bool) {
    println!("Results for \"{}\"", query);
    if explain {
        println!("Keywords: {}", explanation.keywords.as_slice().join(", "));
    }

    println!();
    println!("Brands");
    if explanation.brands.is_empty() {
        println!("  No brands found.");
    }
    for hit in &explanation.brands {
        let tagline = hit.item.tagline.as_deref().unwrap_or("");
        if explain {
            println!("  [{:>3}] {} - {}  {}", hit.score, hit.item.name, tagline, breakdown(hit.fields.iter()));
        } else {
            println!("  {} - {}", hit.item.name, tagline);
        }
    }

    println!();
    println!("Products");
    if explanation.products.is_empty() {
        println!("  No products found.");
    }
    for hit in &explanation.products {
        if explain {
            println!(
                "  [{:>3}] {} ({})  {}",
                hit.score,
                hit.item.name,
                hit.item.slug,
                breakdown(hit.fields.iter())
            );
        } else {
            println!("  {}  MSRP {}", hit.item.name, hit.item.price);
        }
    }
}

fn breakdown<'a>(fields: impl Iterator<Item = (&'a str, u32)>) -> String {
    fields
        .map(|(field, points)| format!("{}+{}", field, points))
        .collect::<Vec<_>>()
        .join(" ")
}
