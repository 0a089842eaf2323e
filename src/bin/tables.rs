use anyhow::{anyhow, Result};
use std::env;
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tz_country::config::{Config, DEFAULT_SOURCE_URL};
use tz_country::services::consistency;
use tz_country::services::generator::{GeneratedTables, MomentMeta};
use tz_country::utils::logging::log_system_event;
use tz_country::{CodeCountryMap, CodeResolver, Table, TimezoneCodeMap, TimezoneCountryMap};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tz_country=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("generate");

    match command {
        "download" | "fetch" => download(),
        "update" => download().and_then(|_| generate()),
        "generate" | "gen" => generate(),
        "check" => check(),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

fn download() -> Result<()> {
    println!("🌍 tz-country - Metadata Download");
    println!("=================================");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("🌐 URL: {}", config.source_url);
    println!("📥 Destination: {}", config.source_path.display());

    let meta = MomentMeta::download(&config.source_url, &config.source_path)?;

    log_system_event("Metadata downloaded", Some(&config.source_path.display().to_string()));
    println!("✅ Downloaded {} zones across {} countries", meta.zones.len(), meta.countries.len());

    Ok(())
}

fn generate() -> Result<()> {
    println!("🌍 tz-country - Table Generator");
    println!("===============================");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📥 Source: {}", config.source_path.display());
    if !config.source_path.exists() {
        return Err(anyhow!(
            "{} not found, run 'tzcountry-tables download' first",
            config.source_path.display()
        ));
    }
    println!("📁 Output: {}", config.output_dir.display());

    let meta = MomentMeta::load(&config.source_path)?;
    let tables = GeneratedTables::from_meta(&meta)?;

    let divergences = tables.divergences();
    if !divergences.is_empty() {
        return Err(anyhow!(
            "Generated tables disagree for {} timezones",
            divergences.len()
        ));
    }

    for path in tables.write_to(&config.output_dir, config.indent)? {
        println!("  • {}", path.display());
    }

    log_system_event("Tables generated", Some(&config.output_dir.display().to_string()));
    println!("✅ Generated {} timezones across {} countries", tables.timezone_code.len(), tables.code_country.len());
    println!("💡 Rebuild the crate to embed the new tables");

    Ok(())
}

fn check() -> Result<()> {
    println!("🔍 Checking tables...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let dir = config.output_dir.as_path();

    println!("📁 Directory: {}", dir.display());

    let codes = TimezoneCodeMap::from_json(&read_table(dir, Table::TimezoneCode)?)?;
    let countries = CodeCountryMap::from_json(&read_table(dir, Table::CodeCountry)?)?;
    let direct = TimezoneCountryMap::from_json(&read_table(dir, Table::TimezoneCountry)?)?;

    println!("📋 Loaded tables:");
    println!("  • {}: {} entries", Table::TimezoneCode, codes.len());
    println!("  • {}: {} entries", Table::CodeCountry, countries.len());
    println!("  • {}: {} entries", Table::TimezoneCountry, direct.len());

    let divergences = consistency::check(&CodeResolver::from_parts(codes, countries), &direct);
    if divergences.is_empty() {
        println!("✅ Both lookup paths agree for every timezone");
        return Ok(());
    }

    println!("⚠️  Found {} divergences:", divergences.len());
    for divergence in &divergences {
        println!("  • {divergence}");
    }
    std::process::exit(1);
}

fn read_table(dir: &Path, table: Table) -> Result<String> {
    let path = dir.join(table.file_name());
    fs::read_to_string(&path).map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))
}

fn print_help() {
    println!("🌍 tz-country - Table Maintenance Tool");
    println!();
    println!("USAGE:");
    println!("    tzcountry-tables [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    download       Fetch moment-timezone metadata into TZCOUNTRY_SOURCE");
    println!("    generate, gen  Build the tables from moment-timezone metadata (default)");
    println!("    update         Download, then generate");
    println!("    check          Decode the tables and compare both lookup paths");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    TZCOUNTRY_SOURCE_URL  Metadata URL (default: {DEFAULT_SOURCE_URL})");
    println!("    TZCOUNTRY_SOURCE      Metadata file (default: ./data/download.json)");
    println!("    TZCOUNTRY_OUTPUT_DIR  Table directory (default: ./data)");
    println!("    TZCOUNTRY_INDENT      JSON indent width, 0-8 (default: 2)");
    println!();
    println!("EXAMPLES:");
    println!("    tzcountry-tables update          # Fetch the latest metadata and regenerate");
    println!("    tzcountry-tables                 # Regenerate data/*.json from data/download.json");
    println!("    tzcountry-tables check           # Verify the tables agree");
    println!();
}
