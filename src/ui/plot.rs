use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::chart::options::{ChartConfig, ChartType};
use crate::chart::series::{category_label, category_series, palette_groups, xy_series};
use crate::color::Palette;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::pie;

pub const NO_COMPATIBLE_MESSAGE: &str =
    "No compatible chart types available for this data structure";

// ---------------------------------------------------------------------------
// Chart view (central panel)
// ---------------------------------------------------------------------------

/// Render the title and the active chart in the central panel.
pub fn chart_view(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            empty_state(ui, state.loading);
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.config.title);
    });
    ui.add_space(8.0);

    let Some(chart_type) = state.active_chart_type() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(NO_COMPATIBLE_MESSAGE).color(Color32::RED));
        });
        return;
    };

    let palette = state.palette();
    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match chart_type {
            ChartType::Bar => bar_chart(ui, dataset, &state.config, &palette),
            ChartType::Line => line_chart(ui, dataset, &state.config, &palette),
            ChartType::Pie => pie::pie_chart(ui, dataset, &state.config, &palette),
            ChartType::Scatter => scatter_chart(ui, dataset, &state.config, &palette),
        });
}

fn empty_state(ui: &mut Ui, loading: bool) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(ui.available_height() / 3.0);
            if loading {
                ui.spinner();
                return;
            }
            ui.heading("Upload your data to visualize  (File → Open CSV…)");
            ui.add_space(6.0);
            ui.label(
                RichText::new(
                    "Upload a CSV file with headers. For bar/line/pie charts, include 'name' \
                     and 'value' columns. For scatter plots, include 'x' and 'y' columns.",
                )
                .weak(),
            );
        });
    });
}

/// Plot skeleton shared by the cartesian charts: labels, toggles, size.
fn base_plot<'a>(id: &str, config: &ChartConfig) -> Plot<'a> {
    let mut plot = Plot::new(id)
        .x_axis_label(config.x_label.clone())
        .y_axis_label(config.y_label.clone())
        .show_grid(config.show_grid)
        .show_x(config.show_tooltip)
        .show_y(config.show_tooltip)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .height(config.height);

    if let Some(width) = config.width {
        plot = plot.width(width);
    }
    if config.show_legend {
        plot = plot.legend(Legend::default());
    }
    plot
}

// ---------------------------------------------------------------------------
// Bar / line: categorical x axis over `name`, single series over `value`
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, dataset: &Dataset, config: &ChartConfig, palette: &Palette) {
    let points = category_series(dataset);
    let color = palette.primary();

    let bars: Vec<Bar> = points
        .iter()
        .filter_map(|p| {
            Some(
                Bar::new(p.index as f64, p.value?)
                    .name(&p.label)
                    .fill(color)
                    .width(0.6),
            )
        })
        .collect();
    let chart = BarChart::new(bars).color(color).name("value");

    base_plot("bar_chart", config)
        .x_axis_formatter(move |mark, _range| {
            category_label(&points, mark.value).unwrap_or_default().to_string()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn line_chart(ui: &mut Ui, dataset: &Dataset, config: &ChartConfig, palette: &Palette) {
    let points = category_series(dataset);
    let color = palette.primary();

    let coords: Vec<[f64; 2]> = points
        .iter()
        .filter_map(|p| Some([p.index as f64, p.value?]))
        .collect();

    let line = Line::new(PlotPoints::from(coords.clone()))
        .name("value")
        .color(color)
        .width(2.0);
    let markers = Points::new(PlotPoints::from(coords))
        .name("value")
        .color(color)
        .radius(3.5);

    base_plot("line_chart", config)
        .x_axis_formatter(move |mark, _range| {
            category_label(&points, mark.value).unwrap_or_default().to_string()
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

// ---------------------------------------------------------------------------
// Scatter: numeric x / y, per-point colors cycling the palette
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, dataset: &Dataset, config: &ChartConfig, palette: &Palette) {
    let coords = xy_series(dataset);
    let groups = palette_groups(&coords, palette.len());

    base_plot("scatter_chart", config).show(ui, |plot_ui| {
        // Same-named items share one legend entry.
        for (k, group) in groups.into_iter().enumerate() {
            let points = Points::new(PlotPoints::from(group))
                .name("Data Points")
                .color(palette.color_at(k))
                .radius(4.0);
            plot_ui.points(points);
        }
    });
}
