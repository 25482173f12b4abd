use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use sla_report::config::DEFAULT_CONFIG_FILE;
use sla_report::{logging, parse_payload, Record, RecordStore};

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("fetch") => run_fetch(args.get(2).map(String::as_str))?,
        Some("config") => run_config(
            args.get(2).map(String::as_str),
            Path::new(DEFAULT_CONFIG_FILE),
        )?,
        Some("help") | Some("--help") | Some("-h") => print_usage(),
        Some(path) => run_file(Path::new(path))?,
        None => print_usage(),
    }

    Ok(())
}

fn print_usage() {
    println!("sla-report {} - purchase order fulfillment report", sla_report::VERSION);
    println!();
    println!("Usage:");
    println!("  sla-report fetch [URL]     fetch records from the endpoint");
    println!("                             (or {} / {})", sla_report::config::ENDPOINT_ENV, DEFAULT_CONFIG_FILE);
    println!("  sla-report config <URL>    persist the endpoint URL to {}", DEFAULT_CONFIG_FILE);
    println!("  sla-report <payload.json>  run the report from a local payload file");
}

/// Persist the endpoint URL for later `fetch` runs.
fn run_config(url_arg: Option<&str>, path: &Path) -> Result<()> {
    let url = url_arg.context("Usage: sla-report config <URL>")?;
    sla_report::EndpointConfig::new(url).save(path)?;
    println!("✓ Endpoint saved to {}", path.display());
    Ok(())
}

/// Run the report from a local JSON payload file.
fn run_file(path: &Path) -> Result<()> {
    println!("📂 Loading payload from {}...", path.display());

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Payload file {} is not valid JSON", path.display()))?;

    let records = parse_payload(&payload);
    println!("✓ Decoded {} records", records.len());

    run_report(records)
}

/// Fetch records from the configured endpoint and run the report.
#[cfg(feature = "fetch")]
fn run_fetch(url_arg: Option<&str>) -> Result<()> {
    let config = sla_report::EndpointConfig::resolve(url_arg, Path::new(DEFAULT_CONFIG_FILE))?;
    println!("🌐 Fetching records from {}...", config.endpoint_url);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let records = runtime.block_on(sla_report::fetch::fetch_records(&config.endpoint_url))?;
    println!("✓ Fetched {} records", records.len());

    run_report(records)
}

#[cfg(not(feature = "fetch"))]
fn run_fetch(_url_arg: Option<&str>) -> Result<()> {
    eprintln!("❌ Fetch mode not available!");
    eprintln!("   Rebuild with: cargo build --features fetch");
    eprintln!("   Or run from a local payload: sla-report <payload.json>");
    std::process::exit(1);
}

/// Pipe records through the store and write the export file.
fn run_report(records: Vec<Record>) -> Result<()> {
    let mut store = RecordStore::new();
    store.set_records(records);

    let summary = store.summary();
    println!();
    println!("📊 Summary");
    println!("   Purchase orders : {}", summary.distinct_order_count);
    println!("   Records         : {}", summary.record_count);
    println!("   Avg fulfillment : {:.2}%", summary.average_fulfillment_ratio);
    println!("   Avg elapsed days: {:.2}", summary.average_elapsed_days);

    // Filename convention lives here, not in the core exporter
    let filename = report_filename(Local::now().date_naive());
    fs::write(&filename, store.export())
        .with_context(|| format!("Failed to write report file {}", filename))?;
    println!();
    println!("✓ Report written to {}", filename);

    Ok(())
}

fn report_filename(date: chrono::NaiveDate) -> String {
    format!("SLA_Report_{}.csv", date)
}
