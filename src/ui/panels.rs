use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: country multiselect plus the three range
/// sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let countries: Vec<String> = dataset.countries.iter().cloned().collect();
    let gdp_bounds = dataset.gdp_per_capita_bounds.clone();
    let life_bounds = dataset.life_expectancy_bounds.clone();
    let density_bounds = dataset.density_bounds.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Country selection ----
            ui.strong("Countries");

            let select_all = state
                .filters
                .as_ref()
                .map(|p| p.select_all_countries)
                .unwrap_or(true);

            let mut select_all_now = select_all;
            if ui
                .checkbox(&mut select_all_now, "Select All Countries")
                .changed()
            {
                if let Some(params) = &mut state.filters {
                    params.select_all_countries = select_all_now;
                }
                if select_all_now {
                    state.select_all_countries();
                } else {
                    // Mirror the original default: nothing picked yet.
                    state.select_no_countries();
                }
            }

            // The multiselect is only active while select-all is off.
            if !select_all_now {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        state.select_all_countries();
                    }
                    if ui.small_button("None").clicked() {
                        state.select_no_countries();
                    }
                });

                let n_selected = state
                    .filters
                    .as_ref()
                    .map(|p| p.selected_countries.len())
                    .unwrap_or(0);
                ui.label(format!("{n_selected}/{} selected", countries.len()));

                for country in &countries {
                    let is_selected = state
                        .filters
                        .as_ref()
                        .map(|p| p.selected_countries.contains(country))
                        .unwrap_or(false);

                    let mut text = RichText::new(country);
                    if let Some(cm) = &state.country_colors {
                        text = text.color(cm.color_for(country));
                    }

                    let mut checked = is_selected;
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_country(country);
                    }
                }
            }

            ui.separator();

            // ---- Range sliders ----
            if let Some(params) = &mut state.filters {
                ui.strong("GDP per Capita");
                ui.add(
                    Slider::new(&mut params.gdp_per_capita.min, gdp_bounds.clone())
                        .text("min"),
                );
                ui.add(Slider::new(&mut params.gdp_per_capita.max, gdp_bounds).text("max"));
                ui.separator();

                ui.strong("Life Expectancy");
                ui.add(
                    Slider::new(&mut params.life_expectancy.min, life_bounds.clone())
                        .text("min"),
                );
                ui.add(Slider::new(&mut params.life_expectancy.max, life_bounds).text("max"));
                ui.separator();

                ui.strong("Population Density (P/Km2)");
                ui.add(
                    Slider::new(&mut params.density.min, density_bounds.clone()).text("min"),
                );
                ui.add(Slider::new(&mut params.density.max, density_bounds).text("max"));
            }
        });

    // Recompute visible indices after any widget changes.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} countries loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open world statistics")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
