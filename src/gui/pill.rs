use eframe::egui::{
    self,
    Color32,
    CornerRadius,
    Margin,
    Response,
    RichText,
    Ui,
    Widget,
};

use super::palette::{
    darker,
    PILL_DARKENING,
};

/// Rounded badge tagging a member with a profile or a technique.
pub struct Pill {
    text: String,
    fill: Color32,
    foreground: Color32,
}

impl Pill {
    pub fn new(text: impl Into<String>, color: Color32) -> Self {
        Self { text: text.into(), fill: darker(color, PILL_DARKENING), foreground: Color32::WHITE }
    }

    pub fn foreground(mut self, foreground: Color32) -> Self {
        self.foreground = foreground;
        self
    }
}

impl Widget for Pill {
    fn ui(self, ui: &mut Ui) -> Response {
        egui::Frame::new()
            .fill(self.fill)
            .corner_radius(CornerRadius::same(u8::MAX))
            .inner_margin(Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.label(RichText::new(self.text).strong().color(self.foreground));
            })
            .response
    }
}
