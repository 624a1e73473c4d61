use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WorldDashApp {
    pub state: AppState,
}

impl WorldDashApp {
    /// Start with an optional CSV already loaded (e.g. from a command-line
    /// path).
    pub fn new(initial_csv: Option<std::path::PathBuf>) -> Self {
        let mut state = AppState::default();
        if let Some(path) = initial_csv {
            state.load_path(&path);
        }
        Self { state }
    }
}

impl eframe::App for WorldDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: narrative + plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a CSV to view the dashboard  (File → Open…)");
                });
                return;
            }
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    dashboard_body(ui, &self.state);
                });
        });
    }
}

// ---------------------------------------------------------------------------
// Dashboard narrative + visualizations
// ---------------------------------------------------------------------------

fn dashboard_body(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("World Data Dashboard");
    });
    ui.add_space(8.0);

    ui.heading("Overview");
    ui.label(
        "This dashboard visualizes key global metrics for the year 2023, sourced from \
         Kaggle. Through interactive visualizations, explore the relationships between \
         economic prosperity, environmental conservation, and health indicators.",
    );
    ui.add_space(12.0);

    ui.heading("Visualizations");
    ui.add_space(4.0);

    ui.strong("CO2 Emissions vs. Forested Area");
    ui.label(
        "This scatter plot visualizes the relationship between CO2 emissions and the \
         percentage of forested area for the selected countries by land area. The size \
         of each point represents the land area of the country.",
    );
    plot::emissions_plot(ui, state);
    ui.add_space(4.0);
    ui.strong("Key Insights");
    ui.label(
        "• The USA, Russia, India, and China distinctly stand out as the major \
         contributors to CO2 emissions, overshadowing the vast majority of other nations.",
    );
    ui.label(
        "• While forests are essential for carbon sequestration, their presence doesn't \
         necessarily correlate with low CO2 emissions for all countries.",
    );
    ui.add_space(12.0);

    ui.strong("Birth Rate & Life Expectancy vs. GDP per Capita");
    ui.label(
        "This scatter plot showcases the correlation between birth rates and life \
         expectancy across the selected countries. The color intensity signifies the \
         GDP per capita, providing an economic context to the health indicators.",
    );
    plot::health_plot(ui, state);
    ui.add_space(4.0);
    ui.strong("Key Insights");
    ui.label(
        "• There's a noticeable trend that countries with higher birth rates tend to \
         have lower life expectancies.",
    );
    ui.label(
        "• The decrease in GDP per capita with increasing birth rate suggests that \
         wealthier countries tend to have lower birth rates.",
    );
    ui.add_space(12.0);

    ui.heading("Glossary");
    ui.label("• GDP per Capita: The total economic output of a country divided by its population.");
    ui.label("• CO2 Emissions: The total carbon dioxide emissions of a country in tons.");
    ui.label("• Forested Area (%): The percentage of a country's land area covered by forests.");
    ui.label(
        "• Population Density: The total number of people divided by the land area of \
         the country, given in persons per square kilometer.",
    );
    ui.add_space(12.0);

    ui.heading("Conclusion");
    ui.label(
        "The dashboard provides insights into the intricate balance between economic \
         prosperity, environmental health, and overall well-being of populations. We \
         encourage users to delve deep, explore the data, and draw their own conclusions.",
    );
    ui.add_space(12.0);

    ui.heading("References");
    ui.hyperlink_to(
        "Kaggle Data Source — 2023 global metrics",
        "https://www.kaggle.com/datasets/nelgiriyewithana/countries-of-the-world-2023",
    );
    ui.add_space(8.0);
}
