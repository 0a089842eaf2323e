use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::resolver::{CodeCountryMap, CodeResolver, TimezoneCodeMap, TimezoneCountryMap};
use crate::services::consistency::{self, Divergence};
use crate::tables::Table;
use crate::utils::logging::log_skipped_zone;
use crate::utils::text::title_case;

/// Country entry of the moment-timezone metadata file.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaCountry {
    /// Country name as published, before title-casing
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub abbr: String,
}

/// Zone entry of the moment-timezone metadata file.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaZone {
    /// Codes of the countries using the zone, most relevant first
    #[serde(default)]
    pub countries: Vec<String>,
}

/// The parts of moment-timezone's `data/meta/latest.json` the tables are built from.
///
/// Published at [`DEFAULT_SOURCE_URL`](crate::config::DEFAULT_SOURCE_URL);
/// `tzcountry-tables download` saves it to `./data/download.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MomentMeta {
    /// Countries keyed by code
    pub countries: HashMap<String, MetaCountry>,
    /// Zones keyed by IANA identifier
    pub zones: BTreeMap<String, MetaZone>,
}

impl MomentMeta {
    /// Parses metadata from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| anyhow!("Invalid timezone metadata: {}", e))
    }

    /// Reads and parses a metadata file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&raw)
    }

    /// Validates fetched metadata and saves it pretty-printed to `dest`.
    pub fn save(raw: &str, dest: &Path) -> Result<Self> {
        let meta = Self::from_json(raw)?;
        let value: serde_json::Value = serde_json::from_str(raw)?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                info!("Creating directory {}", parent.display());
                fs::create_dir_all(parent)?;
            }
        }

        let mut pretty = serde_json::to_string_pretty(&value)?;
        pretty.push('\n');
        fs::write(dest, pretty).map_err(|e| anyhow!("Failed to write {}: {}", dest.display(), e))?;
        info!(
            "Saved metadata to {} ({} zones, {} countries)",
            dest.display(),
            meta.zones.len(),
            meta.countries.len()
        );
        Ok(meta)
    }

    /// Fetches metadata from `url` and saves it to `dest`.
    pub fn download(url: &str, dest: &Path) -> Result<Self> {
        let raw = fetch(url)?;
        Self::save(&raw, dest)
    }
}

/// Fetches the body of `url` with a blocking client, failing on non-success status.
pub fn fetch(url: &str) -> Result<String> {
    info!("Downloading {}", url);
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("tz-country/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

    client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| anyhow!("Failed to download {}: {}", url, e))
}

/// The three tables, keyed in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedTables {
    /// Timezone to country code
    pub timezone_code: BTreeMap<String, String>,
    /// Country code to title-cased country name
    pub code_country: BTreeMap<String, String>,
    /// Timezone to title-cased country name
    pub timezone_country: BTreeMap<String, String>,
}

impl GeneratedTables {
    /// Builds the tables from metadata.
    ///
    /// Each zone takes its first listed country. Zones without countries are
    /// skipped; a zone naming an unknown country is an error.
    pub fn from_meta(meta: &MomentMeta) -> Result<Self> {
        let mut tables = Self::default();

        for (zone, entry) in &meta.zones {
            let Some(code) = entry.countries.first() else {
                log_skipped_zone(zone, "no countries listed");
                continue;
            };

            let country = meta
                .countries
                .get(code)
                .ok_or_else(|| anyhow!("Zone {} references unknown country {}", zone, code))?;
            let name = title_case(&country.name);

            tables.timezone_code.insert(zone.clone(), country.abbr.clone());
            tables.code_country.insert(country.abbr.clone(), name.clone());
            tables.timezone_country.insert(zone.clone(), name);
        }

        info!(
            "Generated {} timezones across {} countries",
            tables.timezone_code.len(),
            tables.code_country.len()
        );
        Ok(tables)
    }

    /// The entries of one table.
    pub fn table(&self, table: Table) -> &BTreeMap<String, String> {
        match table {
            Table::TimezoneCode => &self.timezone_code,
            Table::CodeCountry => &self.code_country,
            Table::TimezoneCountry => &self.timezone_country,
        }
    }

    /// Compares the generated two-step path with the generated direct table.
    pub fn divergences(&self) -> Vec<Divergence> {
        let owned = |table: Table| -> HashMap<String, String> {
            self.table(table)
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        };
        let resolver = CodeResolver::from_parts(
            TimezoneCodeMap::from(owned(Table::TimezoneCode)),
            CodeCountryMap::from(owned(Table::CodeCountry)),
        );
        consistency::check(&resolver, &TimezoneCountryMap::from(owned(Table::TimezoneCountry)))
    }

    /// Renders one table as pretty JSON with `indent` spaces and a trailing newline.
    pub fn render(&self, table: Table, indent: usize) -> Result<String> {
        let entries = self.table(table);
        let mut out = if indent == 0 {
            serde_json::to_vec(entries)?
        } else {
            let indent = " ".repeat(indent);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut buf = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            serde::Serialize::serialize(entries, &mut serializer)?;
            buf
        };
        out.push(b'\n');
        String::from_utf8(out).map_err(|e| anyhow!("Rendered {} table is not UTF-8: {}", table, e))
    }

    /// Writes all three tables into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path, indent: usize) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            info!("Creating directory {}", dir.display());
            fs::create_dir_all(dir)?;
        }

        let mut written = Vec::with_capacity(Table::ALL.len());
        for table in Table::ALL {
            let path = dir.join(table.file_name());
            fs::write(&path, self.render(table, indent)?)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            info!("Wrote {} ({} entries)", path.display(), self.table(table).len());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: &str = r#"{
        "countries": {
            "US": {"name": "United States", "abbr": "US", "zones": ["America/New_York"]},
            "CI": {"name": "côte d'Ivoire", "abbr": "CI", "zones": ["Africa/Abidjan"]}
        },
        "zones": {
            "America/New_York": {"name": "America/New_York", "lat": 40.71, "long": -74.0, "countries": ["US"], "comments": "Eastern"},
            "Africa/Abidjan": {"name": "Africa/Abidjan", "countries": ["CI", "US"]},
            "Etc/Lonely": {"name": "Etc/Lonely", "countries": []}
        }
    }"#;

    #[test]
    fn test_from_meta_builds_all_tables() {
        let meta = MomentMeta::from_json(META).unwrap();
        let tables = GeneratedTables::from_meta(&meta).unwrap();

        assert_eq!(tables.timezone_code.len(), 2);
        assert_eq!(tables.timezone_code["Africa/Abidjan"], "CI");
        assert_eq!(tables.code_country["CI"], "Côte D'Ivoire");
        assert_eq!(tables.timezone_country["America/New_York"], "United States");
        assert!(!tables.timezone_code.contains_key("Etc/Lonely"));
        assert!(tables.divergences().is_empty());
    }

    #[test]
    fn test_unknown_country_is_an_error() {
        let raw = r#"{"countries": {}, "zones": {"Mars/Olympus": {"countries": ["MA"]}}}"#;
        let meta = MomentMeta::from_json(raw).unwrap();
        let err = GeneratedTables::from_meta(&meta).unwrap_err().to_string();
        assert!(err.contains("Mars/Olympus"));
        assert!(err.contains("MA"));
    }

    #[test]
    fn test_render_indent() {
        let meta = MomentMeta::from_json(META).unwrap();
        let tables = GeneratedTables::from_meta(&meta).unwrap();

        let pretty = tables.render(Table::CodeCountry, 2).unwrap();
        assert_eq!(pretty, "{\n  \"CI\": \"Côte D'Ivoire\",\n  \"US\": \"United States\"\n}\n");

        let compact = tables.render(Table::CodeCountry, 0).unwrap();
        assert_eq!(compact, "{\"CI\":\"Côte D'Ivoire\",\"US\":\"United States\"}\n");
    }
}
