use eframe::egui::{
    self,
    Color32,
    CursorIcon,
    RichText,
    Sense,
    Stroke,
    Ui,
};

use super::ViewContext;
use crate::{
    core::Group,
    gui::actions::{
        ActionQueue,
        UiAction,
    },
};

/// Bordered, underlined link that opens `href` in the browser.
fn ui_outlined_link(
    ui: &mut Ui,
    color: Color32,
    text: &str,
    href: &str,
    actions: &mut ActionQueue,
) {
    let response = egui::Frame::new()
        .stroke(Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).underline().color(color))
                        .sense(Sense::click()),
                )
            })
            .inner
        })
        .inner
        .on_hover_cursor(CursorIcon::PointingHand)
        .on_hover_text(href);

    if response.clicked() {
        actions.push(UiAction::OpenUrl(href.to_string()));
    }
}

pub fn ui_link(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    text: &str,
    href: &str,
    actions: &mut ActionQueue,
) {
    ui_outlined_link(ui, view.theme.content_foreground(), text, href, actions);
}

pub fn ui_menu_link(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    text: &str,
    href: &str,
    actions: &mut ActionQueue,
) {
    ui_outlined_link(ui, view.theme.menu_foreground(), text, href, actions);
}

pub fn ui_group_drive_link(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    group: &Group,
    actions: &mut ActionQueue,
) {
    ui_link(ui, view, "Cliquez ici pour ouvrir le dossier du groupe.", &group.link, actions);
}
