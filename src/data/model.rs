use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CountryRow – one row of the source table
// ---------------------------------------------------------------------------

/// One country's statistics (one fully-populated row of the source CSV).
///
/// A `CountryRow` only exists after the missing-value drop: every field is
/// guaranteed present, and `gdp_per_capita` is derived at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub country: String,
    pub population: f64,
    /// Gross domestic product, in dollars.
    pub gdp: f64,
    pub land_area_km2: f64,
    pub co2_emissions_tons: f64,
    /// Fraction of land area covered by forest, in percent.
    pub forested_area_pct: f64,
    /// Births per 1000 inhabitants per year.
    pub birth_rate: f64,
    pub life_expectancy: f64,
    /// Persons per square kilometer.
    pub density: f64,
    /// GDP / Population, derived once after the drop.
    pub gdp_per_capita: f64,
}

/// Deriving the log column fails on non-positive input; callers must guard.
#[derive(Debug, Error, PartialEq)]
pub enum DeriveError {
    #[error("ln of non-positive GDP per capita ({0}) for {1}")]
    NonPositiveGdpPerCapita(f64, String),
}

impl CountryRow {
    /// Natural log of GDP per capita, used to color the health scatter plot.
    pub fn log_gdp_per_capita(&self) -> Result<f64, DeriveError> {
        if self.gdp_per_capita <= 0.0 {
            return Err(DeriveError::NonPositiveGdpPerCapita(
                self.gdp_per_capita,
                self.country.clone(),
            ));
        }
        Ok(self.gdp_per_capita.ln())
    }
}

// ---------------------------------------------------------------------------
// WorldDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed country and column bounds.
#[derive(Debug, Clone)]
pub struct WorldDataset {
    /// All retained rows (missing-value rows already dropped).
    pub rows: Vec<CountryRow>,
    /// Sorted set of unique country names.
    pub countries: BTreeSet<String>,
    /// Min/max of the derived GDP-per-capita column.
    pub gdp_per_capita_bounds: RangeInclusive<f64>,
    /// Min/max of the life-expectancy column.
    pub life_expectancy_bounds: RangeInclusive<f64>,
    /// Min/max of the population-density column.
    pub density_bounds: RangeInclusive<f64>,
}

impl WorldDataset {
    /// Build the country index and slider bounds from the loaded rows.
    pub fn from_rows(rows: Vec<CountryRow>) -> Self {
        let countries = rows.iter().map(|r| r.country.clone()).collect();
        let gdp_per_capita_bounds = column_bounds(&rows, |r| r.gdp_per_capita);
        let life_expectancy_bounds = column_bounds(&rows, |r| r.life_expectancy);
        let density_bounds = column_bounds(&rows, |r| r.density);

        WorldDataset {
            rows,
            countries,
            gdp_per_capita_bounds,
            life_expectancy_bounds,
            density_bounds,
        }
    }

    /// Number of retained rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn column_bounds(rows: &[CountryRow], col: impl Fn(&CountryRow) -> f64) -> RangeInclusive<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        let v = col(row);
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        // Empty dataset: degenerate but valid bounds.
        return 0.0..=0.0;
    }
    min..=max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, gdp: f64, population: f64) -> CountryRow {
        CountryRow {
            country: country.to_string(),
            population,
            gdp,
            land_area_km2: 100.0,
            co2_emissions_tons: 50.0,
            forested_area_pct: 30.0,
            birth_rate: 12.0,
            life_expectancy: 75.0,
            density: population / 100.0,
            gdp_per_capita: gdp / population,
        }
    }

    #[test]
    fn log_gdp_per_capita_of_positive_value() {
        let r = row("A", 1000.0, 100.0);
        assert_eq!(r.gdp_per_capita, 10.0);
        assert_eq!(r.log_gdp_per_capita().unwrap(), 10.0_f64.ln());
    }

    #[test]
    fn log_gdp_per_capita_rejects_zero_and_negative() {
        let zero = row("B", 0.0, 50.0);
        assert_eq!(zero.gdp_per_capita, 0.0);
        assert!(zero.log_gdp_per_capita().is_err());

        let negative = row("C", -10.0, 50.0);
        assert!(negative.log_gdp_per_capita().is_err());
    }

    #[test]
    fn bounds_cover_all_rows() {
        let ds = WorldDataset::from_rows(vec![
            row("A", 1000.0, 100.0),
            row("B", 4000.0, 100.0),
            row("C", 200.0, 100.0),
        ]);
        assert_eq!(ds.gdp_per_capita_bounds, 2.0..=40.0);
        assert_eq!(ds.countries.len(), 3);
    }

    #[test]
    fn empty_dataset_has_degenerate_bounds() {
        let ds = WorldDataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.gdp_per_capita_bounds, 0.0..=0.0);
    }
}
