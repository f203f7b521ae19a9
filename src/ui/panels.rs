use eframe::egui::{self, Color32, RichText, Ui};

use crate::chart::options::{ColorScheme, MAX_HEIGHT, MIN_HEIGHT};
use crate::state::AppState;
use crate::ui::plot::NO_COMPATIBLE_MESSAGE;

// ---------------------------------------------------------------------------
// Left side panel – chart controls
// ---------------------------------------------------------------------------

/// Render the chart control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            chart_type_selector(ui, state);
            ui.add_space(6.0);

            ui.strong("Color scheme");
            egui::ComboBox::from_id_salt("color_scheme")
                .selected_text(state.config.color_scheme.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for scheme in ColorScheme::ALL {
                        ui.selectable_value(&mut state.config.color_scheme, scheme, scheme.label());
                    }
                });
            palette_swatches(ui, state);
            ui.separator();

            ui.strong("Chart title");
            ui.text_edit_singleline(&mut state.config.title);
            ui.strong("X-axis label");
            ui.text_edit_singleline(&mut state.config.x_label);
            ui.strong("Y-axis label");
            ui.text_edit_singleline(&mut state.config.y_label);
            ui.separator();

            ui.checkbox(&mut state.config.show_legend, "Show Legend");
            ui.checkbox(&mut state.config.show_tooltip, "Show Tooltip");
            ui.checkbox(&mut state.config.show_grid, "Show Grid");
            ui.separator();

            ui.add(
                egui::Slider::new(&mut state.config.height, MIN_HEIGHT..=MAX_HEIGHT)
                    .text("Height")
                    .suffix(" px"),
            );
            let mut fill_width = state.config.width.is_none();
            if ui.checkbox(&mut fill_width, "Fill available width").changed() {
                state.config.width = if fill_width { None } else { Some(800.0) };
            }
            if let Some(width) = &mut state.config.width {
                ui.add(egui::Slider::new(width, 200.0..=2000.0).text("Width").suffix(" px"));
            }
            ui.separator();

            if let Some(ds) = &state.dataset {
                if !ds.fields.is_empty() {
                    ui.label(format!("Available fields: {}", ds.fields.join(", ")));
                }
            }
        });
}

fn chart_type_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Chart type");
    let current = state.config.chart_type;
    let permitted = state.permitted.clone();
    let selected_text = if permitted.contains(&current) {
        current.label()
    } else {
        "—"
    };

    ui.add_enabled_ui(!permitted.is_empty(), |ui: &mut Ui| {
        egui::ComboBox::from_id_salt("chart_type")
            .selected_text(selected_text)
            .show_ui(ui, |ui: &mut Ui| {
                for chart_type in permitted {
                    if ui
                        .selectable_label(current == chart_type, chart_type.label())
                        .clicked()
                    {
                        state.set_chart_type(chart_type);
                    }
                }
            });
    });

    if state.permitted.is_empty() {
        ui.label(RichText::new(NO_COMPATIBLE_MESSAGE).small().color(Color32::RED));
    }
}

fn palette_swatches(ui: &mut Ui, state: &AppState) {
    let palette = state.palette();
    ui.horizontal(|ui: &mut Ui| {
        for &color in palette.colors() {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.dataset.is_some() && ui.button("Clear Data").clicked() {
            log::info!("Clearing dataset");
            state.clear();
        }

        if let Some(ds) = &state.dataset {
            let source = state.source_name().unwrap_or_else(|| "data".to_string());
            ui.label(format!("{source}: {} rows", ds.len()));
        }

        ui.separator();
        ui.toggle_value(&mut state.show_table, "Data table");

        if state.loading {
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for a CSV file and start reading it; cancelling is a no-op.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.begin_load(path);
    }
}
