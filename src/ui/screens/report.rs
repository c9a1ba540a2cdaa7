use crate::report::ReportKind;
use crate::ui::{
    components::{FilePicker, ReportTable},
    state::{AppState, MAX_PREVIEW_ROWS, MIN_PREVIEW_ROWS, PREVIEW_ROWS_STEP},
};
use eframe::egui;
use log::info;

pub struct ReportScreen;

impl ReportScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(10.0);

            FilePicker::new("CollectionState.json:", &mut state.collection_path)
                .with_filter("JSON files", &["json"])
                .show(ui);
            ui.add_space(4.0);
            FilePicker::new("CharacterMasteryState.json:", &mut state.mastery_path)
                .with_filter("JSON files", &["json"])
                .show(ui);

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Report:");
                egui::ComboBox::from_id_salt("report_kind")
                    .selected_text(state.report_kind.label())
                    .width(420.0)
                    .show_ui(ui, |ui| {
                        for &kind in ReportKind::all() {
                            ui.selectable_value(&mut state.report_kind, kind, kind.label());
                        }
                    });

                ui.add_space(10.0);

                if ui.button("Load JSON").clicked() {
                    state.load_files(false);
                }
                if ui.button("Generate Preview").clicked() {
                    state.generate_preview();
                }
                let can_export = state.report().is_some();
                if ui
                    .add_enabled(can_export, egui::Button::new("Export CSV…"))
                    .clicked()
                {
                    Self::export_dialog(state);
                }
            });

            ui.add_space(6.0);
            ui.label(state.status.as_str());
            if let Some(ref err) = state.error {
                ui.colored_label(egui::Color32::RED, err.as_str());
            }
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("preview_rows").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Preview rows:");
                let rows = ui.add(
                    egui::DragValue::new(&mut state.preview_rows)
                        .range(MIN_PREVIEW_ROWS..=MAX_PREVIEW_ROWS)
                        .speed(PREVIEW_ROWS_STEP as f64),
                );
                if rows.changed() {
                    state.refresh_preview();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match state.report() {
            Some(report) => {
                ReportTable::new(report.headers(), state.preview()).show(ui, report.kind);
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("No report yet. Load your save files and click Generate Preview.");
                });
            }
        });
    }

    fn export_dialog(state: &mut AppState) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Save CSV")
            .set_file_name(state.export_file_name())
            .add_filter("CSV files", &["csv"])
            .save_file()
        {
            info!("Exporting to {}", path.display());
            state.export_to(&path);
        }
    }
}
