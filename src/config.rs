use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

/// moment-timezone's published country and zone metadata.
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/moment/moment-timezone/raw/develop/data/meta/latest.json";
const DEFAULT_SOURCE: &str = "./data/download.json";
const DEFAULT_OUTPUT_DIR: &str = "./data";
const DEFAULT_INDENT: usize = 2;
const MAX_INDENT: usize = 8;

/// Settings for the table maintenance tool.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where `download` fetches the metadata from
    pub source_url: String,
    /// moment-timezone metadata file the tables are generated from
    pub source_path: PathBuf,
    /// Directory the tables are written to and checked in
    pub output_dir: PathBuf,
    /// JSON indent width, 0 for compact output
    pub indent: usize,
}

impl Config {
    /// Reads `TZCOUNTRY_SOURCE_URL`, `TZCOUNTRY_SOURCE`, `TZCOUNTRY_OUTPUT_DIR`
    /// and `TZCOUNTRY_INDENT`.
    pub fn from_env() -> Result<Self> {
        let source_url = match env::var("TZCOUNTRY_SOURCE_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => DEFAULT_SOURCE_URL.to_string(),
        };
        if !(source_url.starts_with("https://") || source_url.starts_with("http://")) {
            return Err(anyhow!("Invalid TZCOUNTRY_SOURCE_URL"));
        }

        let source_path = path_var("TZCOUNTRY_SOURCE", DEFAULT_SOURCE);
        let output_dir = path_var("TZCOUNTRY_OUTPUT_DIR", DEFAULT_OUTPUT_DIR);

        let indent = match env::var("TZCOUNTRY_INDENT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|indent| *indent <= MAX_INDENT)
                .ok_or_else(|| anyhow!("Invalid TZCOUNTRY_INDENT"))?,
            Err(_) => DEFAULT_INDENT,
        };

        Ok(Config {
            source_url,
            source_path,
            output_dir,
            indent,
        })
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
