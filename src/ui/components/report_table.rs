use eframe::egui;
use egui_extras::{Column, TableBuilder};

/// Read-only grid of already formatted report cells
pub struct ReportTable<'a> {
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<String>],
}

impl<'a> ReportTable<'a> {
    pub fn new(headers: &'a [&'a str], rows: &'a [Vec<String>]) -> Self {
        Self { headers, rows }
    }

    /// `id` keeps column widths separate per report, since column sets differ
    pub fn show(&self, ui: &mut egui::Ui, id: impl std::hash::Hash) {
        ui.push_id(id, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(Column::auto().at_least(100.0).clip(true), self.headers.len())
                    .header(22.0, |mut header| {
                        for title in self.headers {
                            header.col(|ui| {
                                ui.strong(*title);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, self.rows.len(), |mut row| {
                            let cells = &self.rows[row.index()];
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(cell.as_str());
                                });
                            }
                        });
                    });
            });
        });
    }
}
