use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::{normalize, sunset};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Plot 1 – CO2 emissions vs forested area, sized by land area
// ---------------------------------------------------------------------------

const MIN_MARKER_RADIUS: f32 = 2.0;
const MAX_MARKER_RADIUS: f32 = 14.0;

/// Scatter of CO2 emissions against forested area for the visible rows.
/// Marker size is proportional to land area; each country gets its own
/// colour and legend entry.
pub fn emissions_plot(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        empty_note(ui);
        return;
    };

    // Largest countries first so small markers draw on top.
    let mut visible: Vec<usize> = state.visible_indices.clone();
    visible.sort_by(|&a, &b| {
        dataset.rows[b]
            .land_area_km2
            .total_cmp(&dataset.rows[a].land_area_km2)
    });

    let max_area = visible
        .iter()
        .map(|&i| dataset.rows[i].land_area_km2)
        .fold(0.0_f64, f64::max);

    Plot::new("emissions_plot")
        .legend(Legend::default())
        .x_axis_label("CO2 Emissions (tons)")
        .y_axis_label("Forested Area (%)")
        .height(500.0)
        .show(ui, |plot_ui| {
            for &idx in &visible {
                let row = &dataset.rows[idx];

                let color = state
                    .country_colors
                    .as_ref()
                    .map(|cm| cm.color_for(&row.country))
                    .unwrap_or(eframe::egui::Color32::LIGHT_BLUE);

                // Area scales with land area, so radius scales with its root.
                let radius = if max_area > 0.0 {
                    let t = (row.land_area_km2 / max_area).sqrt() as f32;
                    MIN_MARKER_RADIUS + t * (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS)
                } else {
                    MIN_MARKER_RADIUS
                };

                let points: PlotPoints =
                    vec![[row.co2_emissions_tons, row.forested_area_pct]].into();

                plot_ui.points(
                    Points::new(points)
                        .name(&row.country)
                        .color(color)
                        .radius(radius),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Plot 2 – birth rate vs life expectancy, coloured by log GDP per capita
// ---------------------------------------------------------------------------

/// Scatter of birth rate against life expectancy, coloured on the sunset
/// scale by log GDP per capita.  Rows whose GDP per capita is non-positive
/// cannot be log-transformed and are omitted (and counted below the plot).
pub fn health_plot(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        empty_note(ui);
        return;
    };

    let mut plotted: Vec<(usize, f64)> = Vec::new();
    let mut omitted = 0usize;
    for &idx in &state.visible_indices {
        match dataset.rows[idx].log_gdp_per_capita() {
            Ok(log_gdp) => plotted.push((idx, log_gdp)),
            Err(_) => omitted += 1,
        }
    }

    let log_min = plotted.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let log_max = plotted
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);

    Plot::new("health_plot")
        .x_axis_label("Birth Rate (per 1000)")
        .y_axis_label("Life Expectancy")
        .height(500.0)
        .show(ui, |plot_ui| {
            for &(idx, log_gdp) in &plotted {
                let row = &dataset.rows[idx];
                let color = sunset(normalize(log_gdp, log_min, log_max));

                let points: PlotPoints =
                    vec![[row.birth_rate, row.life_expectancy]].into();

                plot_ui.points(
                    Points::new(points)
                        .name(&row.country)
                        .color(color)
                        .radius(3.5),
                );
            }
        });

    if omitted > 0 {
        ui.label(format!(
            "{omitted} countries omitted: GDP per capita must be positive for the log scale."
        ));
    }
}

fn empty_note(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a CSV to view the dashboard  (File → Open…)");
    });
}
