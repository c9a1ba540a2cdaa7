use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{screens::ReportScreen, state::AppState};
use crate::config::SavePaths;

pub struct SnapExtractorApp {
    state: AppState,
}

impl SnapExtractorApp {
    /// Loads `initial` right away, or tries the game's save folder when none was given
    pub fn new(initial: Option<SavePaths>) -> Self {
        let state = match initial {
            Some(paths) => {
                let mut state = AppState::with_paths(&paths);
                state.load_files(false);
                state
            }
            None => {
                let mut state = AppState::default();
                state.autoload();
                state
            }
        };
        Self { state }
    }
}

impl eframe::App for SnapExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ReportScreen::show(ctx, &mut self.state);
    }
}

pub fn launch_gui(initial: Option<SavePaths>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1050.0, 650.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SNAP Save Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(SnapExtractorApp::new(initial)))),
    )
}
