/*!
 * Desktop dashboard for findash - country financial indicators
 *
 * - Choose one indicator and countries from per-region pick lists
 * - Line chart of the selected countries plus summary cards
 * - Reset the running selection, export series CSV or the chart
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::{Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use findash::chart::TraceMode;
use findash::config::{DATA_PATH_ENV, Settings};
use findash::{
    Dashboard, Indicator, Region, SelectionState, UpdateRequest, UpdateResponse, cards, series,
    storage, viz,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "findash-gui", version, about = "Country financial indicator dashboard")]
struct Cli {
    /// Cleaned indicator table; defaults to FINDASH_DATA or Cleaned_Data.csv.
    #[arg(long, env = DATA_PATH_ENV)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if let Some(path) = cli.data {
        settings.data_path = path;
    }

    // The table is loaded before any window opens; a bad file stops the process here.
    let dashboard = Dashboard::load(&settings.data_path)
        .map_err(|e| anyhow!("cannot load {}: {e}", settings.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Check Your Country's Finance"),
        ..Default::default()
    };

    eframe::run_native(
        "Country Financial Indicator Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashApp::new(dashboard, settings)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

/// Main application state
struct DashApp {
    dashboard: Dashboard,
    selection: SelectionState,

    // Controls
    indicator: Indicator,
    /// Current picks per group, indexed like `Region::ALL`.
    picks: Vec<Vec<String>>,
    reset_clicks: u64,
    locale: String,

    // Last rendered view
    response: UpdateResponse,

    // UI state
    status_message: String,
    error_message: String,
}

impl DashApp {
    fn new(dashboard: Dashboard, settings: Settings) -> Self {
        let selection = SelectionState::new(settings.initial_countries.iter().cloned());
        let response = dashboard.view(settings.indicator, selection.countries());
        Self {
            dashboard,
            selection,
            indicator: settings.indicator,
            picks: vec![Vec::new(); Region::ALL.len()],
            reset_clicks: 0,
            locale: settings.locale,
            response,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    /// Send the current controls through the dashboard as one update event.
    fn refresh(&mut self) {
        let request = UpdateRequest {
            indicator: self.indicator.label().to_string(),
            picks: self.picks.clone(),
            reset_clicks: (self.reset_clicks > 0).then_some(self.reset_clicks),
        };
        match self.dashboard.update(&self.selection, &request) {
            Ok((selection, response)) => {
                self.selection = selection;
                self.response = response;
                self.error_message.clear();
            }
            Err(err) => self.error_message = format!("Update rejected: {err}"),
        }
    }

    fn reset(&mut self) {
        self.reset_clicks += 1;
        for group in &mut self.picks {
            group.clear();
        }
        self.refresh();
    }

    fn export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(default_dir())
            .set_file_name("findash_series.csv")
            .save_file()
        else {
            return;
        };
        let data = series::extract_indicator(
            self.dashboard.table(),
            self.response.indicator,
            &self.response.selection,
        );
        match storage::save_series_csv(self.response.indicator, &data, &path) {
            Ok(()) => self.status_message = format!("Saved {}", path.display()),
            Err(err) => self.error_message = format!("Failed to save CSV: {err}"),
        }
    }

    fn export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(default_dir())
            .set_file_name("findash_chart.png")
            .add_filter("PNG", &["png"])
            .add_filter("SVG", &["svg"])
            .save_file()
        else {
            return;
        };
        match viz::plot_figure(&self.response.figure, &path, 1000, 600, &self.locale) {
            Ok(()) => self.status_message = format!("Saved {}", path.display()),
            Err(err) => self.error_message = format!("Failed to create chart: {err}"),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Controls");
        ui.add_space(8.0);

        ui.label("Choose Indicator Type:");
        let mut changed = false;
        egui::ComboBox::from_id_salt("indicator")
            .selected_text(self.indicator.label())
            .width(260.0)
            .show_ui(ui, |ui| {
                for i in Indicator::ALL {
                    changed |= ui
                        .selectable_value(&mut self.indicator, i, i.label())
                        .changed();
                }
            });

        ui.add_space(8.0);
        ui.label("Choose Countries:");
        egui::ScrollArea::vertical()
            .max_height(420.0)
            .show(ui, |ui| {
                for (idx, region) in Region::ALL.into_iter().enumerate() {
                    ui.collapsing(region.label(), |ui| {
                        for &country in region.countries() {
                            let group = &mut self.picks[idx];
                            let mut on = group.iter().any(|c| c == country);
                            if ui.checkbox(&mut on, country).changed() {
                                if on {
                                    group.push(country.to_string());
                                } else {
                                    group.retain(|c| c != country);
                                }
                                changed = true;
                            }
                        }
                    });
                }
            });

        if changed {
            self.refresh();
        }

        ui.add_space(8.0);
        if ui.button("Reset Selected Countries").clicked() {
            self.reset();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Export CSV").clicked() {
                self.export_csv();
            }
            if ui.button("Save Chart").clicked() {
                self.export_chart();
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Locale:");
            egui::ComboBox::from_id_salt("locale")
                .selected_text(&self.locale)
                .show_ui(ui, |ui| {
                    for tag in ["en", "de", "fr", "es", "it", "pt", "nl"] {
                        ui.selectable_value(&mut self.locale, tag.to_string(), tag);
                    }
                });
        });

        if !self.status_message.is_empty() {
            ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
        }
        if !self.error_message.is_empty() {
            ui.colored_label(egui::Color32::RED, &self.error_message);
        }
    }

    fn chart(&self, ui: &mut egui::Ui) {
        let figure = &self.response.figure;
        ui.vertical_centered(|ui| {
            ui.heading(&figure.title);
        });

        Plot::new("indicator_plot")
            .legend(Legend::default())
            .x_axis_label(figure.x_axis_title.as_str())
            .y_axis_label(figure.y_axis_title.as_str())
            .allow_drag(true)
            .allow_zoom(true)
            .allow_scroll(true)
            .show(ui, |plot_ui| {
                for (idx, trace) in figure.drawable_traces().enumerate() {
                    let (r, g, b) = viz::office_rgb(idx);
                    let color = egui::Color32::from_rgb(r, g, b);
                    let xy: Vec<[f64; 2]> = trace
                        .x
                        .iter()
                        .zip(&trace.y)
                        .map(|(&x, &y)| [f64::from(x), y])
                        .collect();

                    if trace.mode == TraceMode::LinesMarkers {
                        let line = Line::new(PlotPoints::from(xy.clone()))
                            .name(&trace.name)
                            .color(color)
                            .width(2.0);
                        plot_ui.line(line);
                    }
                    let points = Points::new(PlotPoints::from(xy))
                        .name(&trace.name)
                        .color(color)
                        .radius(3.0);
                    plot_ui.points(points);
                }
            });
    }

    fn cards(&self, ui: &mut egui::Ui) {
        ui.heading("Selected Countries");
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for summary in &self.response.cards {
                ui.group(|ui| {
                    ui.set_min_width(220.0);
                    ui.vertical(|ui| {
                        let lines = cards::card_lines(summary, &self.locale);
                        if let Some((header, rest)) = lines.split_first() {
                            ui.strong(header);
                            for line in rest {
                                ui.label(line);
                            }
                        }
                    });
                });
            }
        });
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(290.0)
            .show(ctx, |ui| self.controls(ui));

        egui::TopBottomPanel::bottom("cards")
            .resizable(true)
            .min_height(140.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.cards(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| self.chart(ui));
    }
}

fn default_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
