use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};

use super::model::{CountryRow, WorldDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Expected header names, as they appear in the source file.  The density
/// header carries a literal newline (a Pandas artifact the file inherited);
/// the newline-free spelling is accepted as an alias.
const REQUIRED_COLUMNS: &[&str] = &[
    "Country",
    "Population",
    "GDP ($)",
    "Land Area (Km2)",
    "Co2-Emissions (tons)",
    "Forested Area (%)",
    "Birth Rate (per 1000)",
    "Life expectancy",
];

/// Load the world-statistics CSV.
///
/// Rows with any missing or unparsable cell are dropped entirely before the
/// GDP-per-capita column is derived, so every row of the returned dataset is
/// fully populated.
pub fn load_csv(path: &Path) -> Result<WorldDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let dataset = read_records(file).with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "Loaded {} countries from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV records from any reader.  Split out of [`load_csv`] so tests can
/// feed in-memory data.
pub fn read_records(rdr: impl std::io::Read) -> Result<WorldDataset> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }
    if !headers.iter().any(|h| h == "Density\n(P/Km2)" || h == "Density (P/Km2)") {
        bail!("CSV missing 'Density (P/Km2)' column");
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        match record.into_row() {
            Some(row) => rows.push(row),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} rows with missing values");
    }

    Ok(WorldDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// Raw record – one CSV row before the missing-value drop
// ---------------------------------------------------------------------------

/// One CSV row as read, every numeric cell still optional.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Population", deserialize_with = "lenient_f64")]
    population: Option<f64>,
    #[serde(rename = "GDP ($)", deserialize_with = "lenient_f64")]
    gdp: Option<f64>,
    #[serde(rename = "Land Area (Km2)", deserialize_with = "lenient_f64")]
    land_area_km2: Option<f64>,
    #[serde(rename = "Co2-Emissions (tons)", deserialize_with = "lenient_f64")]
    co2_emissions_tons: Option<f64>,
    #[serde(rename = "Forested Area (%)", deserialize_with = "lenient_f64")]
    forested_area_pct: Option<f64>,
    #[serde(rename = "Birth Rate (per 1000)", deserialize_with = "lenient_f64")]
    birth_rate: Option<f64>,
    #[serde(rename = "Life expectancy", deserialize_with = "lenient_f64")]
    life_expectancy: Option<f64>,
    #[serde(
        rename = "Density\n(P/Km2)",
        alias = "Density (P/Km2)",
        deserialize_with = "lenient_f64"
    )]
    density: Option<f64>,
}

impl RawRecord {
    /// The dropna step: keep the row only if every field is present, then
    /// derive GDP per capita.
    fn into_row(self) -> Option<CountryRow> {
        let country = self.country.filter(|c| !c.trim().is_empty())?;
        let population = self.population?;
        let gdp = self.gdp?;

        // Derived after the drop, never from partial rows.
        let gdp_per_capita = gdp / population;

        Some(CountryRow {
            country,
            population,
            gdp,
            land_area_km2: self.land_area_km2?,
            co2_emissions_tons: self.co2_emissions_tons?,
            forested_area_pct: self.forested_area_pct?,
            birth_rate: self.birth_rate?,
            life_expectancy: self.life_expectancy?,
            density: self.density?,
            gdp_per_capita,
        })
    }
}

/// Parse a numeric cell leniently: `$`, `%`, thousands separators and
/// surrounding whitespace are stripped first.  Empty or unparsable cells
/// count as missing.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_numeric))
}

fn parse_numeric(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
