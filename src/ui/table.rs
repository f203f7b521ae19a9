use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, Value};

/// Read-only preview of the parsed records, one column per header field.
pub fn data_table(ui: &mut Ui, dataset: &Dataset) {
    if dataset.fields.is_empty() {
        ui.label("The file has no header row.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .columns(Column::auto().at_least(60.0).clip(true), dataset.fields.len())
        .header(20.0, |mut header| {
            for field in &dataset.fields {
                header.col(|ui: &mut Ui| {
                    ui.strong(field);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dataset.len(), |mut row| {
                let record = &dataset.records[row.index()];
                for field in &dataset.fields {
                    row.col(|ui: &mut Ui| match record.get(field) {
                        Some(Value::Number(v)) => {
                            ui.monospace(v.to_string());
                        }
                        Some(Value::Text(s)) => {
                            ui.label(s);
                        }
                        None => {
                            ui.label(RichText::new("—").weak());
                        }
                    });
                }
            });
        });
}
