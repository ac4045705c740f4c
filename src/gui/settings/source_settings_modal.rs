use eframe::egui;

use super::data::SettingsData;
use crate::core::source::{
    DataSource,
    DEFAULT_BASE_URL,
};

#[derive(Clone, Default)]
pub struct SourceSettingsData {
    pub settings: SettingsData,
    pub original_settings: SettingsData,
    pub base_url_input: String,
}

impl SourceSettingsData {
    pub fn is_dirty(&self) -> bool {
        self.base_url_input.trim() != self.original_settings.base_url()
    }

    /// Settings to save, or the reason the input cannot be used.
    pub fn validated(&self) -> Result<SettingsData, String> {
        let input = self.base_url_input.trim();
        DataSource::parse(input).map_err(|e| e.to_string())?;

        let mut settings = self.settings.clone();
        settings.base_url =
            if input == DEFAULT_BASE_URL { None } else { Some(input.to_string()) };
        Ok(settings)
    }
}

/// Lets the user point the app at another server or a local folder.
pub struct SourceSettingsModal {
    open: bool,
    data: SourceSettingsData,
    status: Option<String>,
}

impl SourceSettingsModal {
    pub fn new() -> Self {
        Self { open: false, data: SourceSettingsData::default(), status: None }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.data = SourceSettingsData {
            base_url_input: current_settings.base_url().to_string(),
            settings: current_settings.clone(),
            original_settings: current_settings,
        };
        self.status = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("source_settings_modal")).show(ctx, |ui| {
            ui.set_width(450.0);
            ui.heading("Source des données");
            ui.add_space(10.0);

            ui.label("Adresse du serveur ou dossier local contenant data.json :");
            ui.add(
                egui::TextEdit::singleline(&mut self.data.base_url_input)
                    .desired_width(f32::INFINITY)
                    .hint_text(DEFAULT_BASE_URL),
            );
            ui.add_space(10.0);

            if let Some(status) = &self.status {
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().error_fg_color, "⚠");
                    ui.label(status);
                });
                ui.add_space(5.0);
            }

            ui.separator();

            let is_dirty = self.data.is_dirty();

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Enregistrer")).clicked();
                let cancel_clicked = ui.button("Annuler").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Valeur par défaut").clicked();
                });

                if save_clicked {
                    match self.data.validated() {
                        Ok(settings) => {
                            result = Some(settings);
                            ui.close();
                        }
                        Err(e) => self.status = Some(e),
                    }
                } else if cancel_clicked {
                    ui.close();
                } else if reset_clicked {
                    self.data.base_url_input = DEFAULT_BASE_URL.to_string();
                    self.status = None;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SourceSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(input: &str) -> SourceSettingsData {
        SourceSettingsData { base_url_input: input.to_string(), ..Default::default() }
    }

    #[test]
    fn test_unchanged_input_is_clean() {
        assert!(!data(DEFAULT_BASE_URL).is_dirty());
        assert!(data("https://example.org").is_dirty());
    }

    #[test]
    fn test_default_input_clears_override() {
        let settings = data(DEFAULT_BASE_URL).validated().unwrap();
        assert_eq!(settings.base_url, None);
    }

    #[test]
    fn test_custom_input_is_saved_trimmed() {
        let settings = data("  https://example.org/karamove ").validated().unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("https://example.org/karamove"));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert!(data("").validated().is_err());
        assert!(data("http://").validated().is_err());
    }
}
