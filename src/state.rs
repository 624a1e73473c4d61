use std::collections::BTreeSet;
use std::path::Path;

use crate::color::CountryColors;
use crate::data::filter::{FilterParams, filtered_indices, init_filter_params};
use crate::data::model::WorldDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<WorldDataset>,

    /// Country selection and range filters driven by the widgets.
    pub filters: Option<FilterParams>,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Per-country colours for the emissions plot.
    pub country_colors: Option<CountryColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: None,
            visible_indices: Vec::new(),
            country_colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: WorldDataset) {
        self.filters = Some(init_filter_params(&dataset));
        self.visible_indices = (0..dataset.len()).collect();
        self.country_colors = Some(CountryColors::new(&dataset.countries));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Load a CSV from disk into the state, reporting failure on the status
    /// line instead of propagating.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        match crate::data::loader::load_csv(path) {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("{} contains no complete rows", path.display());
                }
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let (Some(ds), Some(params)) = (&self.dataset, &mut self.filters) {
            params.gdp_per_capita.normalize();
            params.life_expectancy.normalize();
            params.density.normalize();
            self.visible_indices = filtered_indices(ds, params);
        }
    }

    /// Toggle one country in the multiselect.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(params) = &mut self.filters {
            if !params.selected_countries.remove(country) {
                params.selected_countries.insert(country.to_string());
            }
        }
        self.refilter();
    }

    /// Check every country in the multiselect.
    pub fn select_all_countries(&mut self) {
        if let (Some(ds), Some(params)) = (&self.dataset, &mut self.filters) {
            params.selected_countries = ds.countries.clone();
        }
        self.refilter();
    }

    /// Clear the multiselect.
    pub fn select_no_countries(&mut self) {
        if let Some(params) = &mut self.filters {
            params.selected_countries = BTreeSet::new();
        }
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CountryRow;

    fn dataset() -> WorldDataset {
        let row = |country: &str, life: f64| CountryRow {
            country: country.to_string(),
            population: 100.0,
            gdp: 1000.0,
            land_area_km2: 10.0,
            co2_emissions_tons: 5.0,
            forested_area_pct: 20.0,
            birth_rate: 10.0,
            life_expectancy: life,
            density: 10.0,
            gdp_per_capita: 10.0,
        };
        WorldDataset::from_rows(vec![row("A", 60.0), row("B", 70.0), row("C", 80.0)])
    }

    #[test]
    fn set_dataset_initialises_filters_and_visibility() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        let params = state.filters.as_ref().unwrap();
        assert!(params.select_all_countries);
        assert_eq!(params.selected_countries.len(), 3);
    }

    #[test]
    fn toggle_country_narrows_visible_set() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.filters.as_mut().unwrap().select_all_countries = false;
        state.select_no_countries();
        assert!(state.visible_indices.is_empty());

        state.toggle_country("B");
        assert_eq!(state.visible_indices, vec![1]);
        state.toggle_country("B");
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn refilter_normalizes_inverted_slider_ranges() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        {
            let params = state.filters.as_mut().unwrap();
            params.life_expectancy.min = 75.0;
            params.life_expectancy.max = 65.0;
        }
        state.refilter();
        let params = state.filters.as_ref().unwrap();
        assert!(params.life_expectancy.min <= params.life_expectancy.max);
        assert_eq!(state.visible_indices, vec![1]);
    }
}
