use eframe::egui;

pub struct FilePicker<'a> {
    pub label: &'a str,
    pub path: &'a mut String,
    pub filter_name: Option<&'a str>,
    pub extensions: &'a [&'a str],
}

impl<'a> FilePicker<'a> {
    pub fn new(label: &'a str, path: &'a mut String) -> Self {
        Self {
            label,
            path,
            filter_name: None,
            extensions: &[],
        }
    }

    pub fn with_filter(mut self, name: &'a str, extensions: &'a [&'a str]) -> Self {
        self.filter_name = Some(name);
        self.extensions = extensions;
        self
    }

    /// Shows the label, an editable path and a Browse button. Returns `true` if a file was just picked.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut picked = false;
        ui.horizontal(|ui| {
            ui.add_sized([200.0, 20.0], egui::Label::new(self.label));
            ui.add(egui::TextEdit::singleline(self.path).desired_width(ui.available_width() - 90.0));
            if ui.button("Browse…").clicked() {
                let mut dialog = rfd::FileDialog::new().set_title(format!("Select {}", self.label.trim_end_matches(':')));

                if let Some(name) = self.filter_name {
                    dialog = dialog.add_filter(name, self.extensions);
                }
                dialog = dialog.add_filter("All files", &["*"]);

                if let Some(path) = dialog.pick_file() {
                    *self.path = path.display().to_string();
                    picked = true;
                }
            }
        });
        picked
    }
}
