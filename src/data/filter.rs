use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::WorldDataset;

// ---------------------------------------------------------------------------
// Filter parameters: country selection plus three numeric ranges
// ---------------------------------------------------------------------------

/// An inclusive numeric range, mutated directly by the slider widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    pub min: f64,
    pub max: f64,
}

impl RangeFilter {
    /// A filter spanning the whole column (i.e. no constraint).
    pub fn full(bounds: &RangeInclusive<f64>) -> Self {
        RangeFilter {
            min: *bounds.start(),
            max: *bounds.end(),
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Keep min <= max after a slider drag.
    pub fn normalize(&mut self) {
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
    }
}

/// The complete filter state driven by the widgets.
///
/// While `select_all_countries` is set, the country multiselect is ignored
/// and every country passes; otherwise only checked countries pass (an empty
/// selection retains nothing).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub select_all_countries: bool,
    pub selected_countries: BTreeSet<String>,
    pub gdp_per_capita: RangeFilter,
    pub life_expectancy: RangeFilter,
    pub density: RangeFilter,
}

/// Initialise a [`FilterParams`] that shows everything: select-all on, all
/// countries checked, ranges at the full column bounds.
pub fn init_filter_params(dataset: &WorldDataset) -> FilterParams {
    FilterParams {
        select_all_countries: true,
        selected_countries: dataset.countries.clone(),
        gdp_per_capita: RangeFilter::full(&dataset.gdp_per_capita_bounds),
        life_expectancy: RangeFilter::full(&dataset.life_expectancy_bounds),
        density: RangeFilter::full(&dataset.density_bounds),
    }
}

impl FilterParams {
    /// The effective country set: with select-all on this is the dataset's
    /// full unique country set, regardless of what the multiselect holds.
    pub fn effective_countries<'a>(&'a self, dataset: &'a WorldDataset) -> &'a BTreeSet<String> {
        if self.select_all_countries {
            &dataset.countries
        } else {
            &self.selected_countries
        }
    }
}

/// Return indices of rows that pass all four filters.
///
/// The predicates are conjunctive and independent, so applying them in any
/// order yields the same row set.
pub fn filtered_indices(dataset: &WorldDataset, params: &FilterParams) -> Vec<usize> {
    let countries = params.effective_countries(dataset);

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            countries.contains(&row.country)
                && params.gdp_per_capita.contains(row.gdp_per_capita)
                && params.life_expectancy.contains(row.life_expectancy)
                && params.density.contains(row.density)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CountryRow, WorldDataset};

    fn row(country: &str, gdp_pc: f64, life: f64, density: f64) -> CountryRow {
        CountryRow {
            country: country.to_string(),
            population: 1000.0,
            gdp: gdp_pc * 1000.0,
            land_area_km2: 100.0,
            co2_emissions_tons: 50.0,
            forested_area_pct: 30.0,
            birth_rate: 12.0,
            life_expectancy: life,
            density,
            gdp_per_capita: gdp_pc,
        }
    }

    fn dataset() -> WorldDataset {
        WorldDataset::from_rows(vec![
            row("A", 10.0, 60.0, 5.0),
            row("B", 20.0, 70.0, 50.0),
            row("C", 30.0, 80.0, 500.0),
            row("D", 40.0, 90.0, 5000.0),
        ])
    }

    #[test]
    fn initial_params_retain_everything() {
        let ds = dataset();
        let params = init_filter_params(&ds);
        assert_eq!(filtered_indices(&ds, &params), vec![0, 1, 2, 3]);
    }

    #[test]
    fn select_all_equals_full_country_set() {
        let ds = dataset();
        let mut params = init_filter_params(&ds);
        // The multiselect contents are irrelevant while select-all is on.
        params.selected_countries.clear();
        assert_eq!(params.effective_countries(&ds), &ds.countries);
        assert_eq!(filtered_indices(&ds, &params).len(), 4);
    }

    #[test]
    fn empty_selection_retains_nothing() {
        let ds = dataset();
        let mut params = init_filter_params(&ds);
        params.select_all_countries = false;
        params.selected_countries.clear();
        assert!(filtered_indices(&ds, &params).is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = dataset();
        let mut params = init_filter_params(&ds);
        params.gdp_per_capita = RangeFilter { min: 20.0, max: 30.0 };
        assert_eq!(filtered_indices(&ds, &params), vec![1, 2]);
    }

    #[test]
    fn filters_are_conjunctive_and_order_independent() {
        let ds = dataset();
        let mut params = init_filter_params(&ds);
        params.select_all_countries = false;
        params.selected_countries =
            ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        params.gdp_per_capita = RangeFilter { min: 15.0, max: 45.0 };
        params.life_expectancy = RangeFilter { min: 65.0, max: 95.0 };
        params.density = RangeFilter { min: 0.0, max: 600.0 };

        // Only B and C satisfy all four predicates.
        let combined = filtered_indices(&ds, &params);
        assert_eq!(combined, vec![1, 2]);

        // Applying each predicate on its own and intersecting, in every
        // order, yields the same row set.
        let neutral = init_filter_params(&ds);
        let mut singles: Vec<FilterParams> = Vec::new();
        for i in 0..4 {
            let mut p = neutral.clone();
            match i {
                0 => {
                    p.select_all_countries = false;
                    p.selected_countries = params.selected_countries.clone();
                }
                1 => p.gdp_per_capita = params.gdp_per_capita.clone(),
                2 => p.life_expectancy = params.life_expectancy.clone(),
                3 => p.density = params.density.clone(),
                _ => unreachable!(),
            }
            singles.push(p);
        }

        for perm in [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1], [1, 3, 0, 2]] {
            let mut surviving: Vec<usize> = (0..ds.len()).collect();
            for &i in &perm {
                let pass = filtered_indices(&ds, &singles[i]);
                surviving.retain(|idx| pass.contains(idx));
            }
            assert_eq!(surviving, combined, "order {perm:?} diverged");
        }
    }

    #[test]
    fn normalize_swaps_inverted_bounds() {
        let mut r = RangeFilter { min: 10.0, max: 3.0 };
        r.normalize();
        assert_eq!(r, RangeFilter { min: 3.0, max: 10.0 });
    }
}
