use eframe::egui::{
    self,
    Align,
    Layout,
    RichText,
    Ui,
};

use super::ViewContext;
use crate::core::{
    Group,
    Member,
};

pub const GROUP_WIDTH: f32 = 300.0;

/// Lays the group cards out in wrapping rows, each card starting with the
/// group header and followed by whatever `group_content` draws.
pub fn ui_groups(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    mut group_content: impl FnMut(&mut Ui, &Group),
) {
    ui_cards(ui, |ui| {
        for group in &view.roster.groups {
            ui.push_id(&group.name, |ui| {
                ui_card(ui, |ui| {
                    ui_group_header(ui, view, group);
                    group_content(ui, group);
                });
            });
        }
    });
}

pub fn ui_groups_with_members(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    mut member_content: impl FnMut(&mut Ui, &Member),
) {
    ui_groups(ui, view, |ui, group| {
        for member in &group.members {
            ui.push_id(member.id, |ui| member_content(ui, member));
        }
    });
}

pub fn ui_cards(ui: &mut Ui, add_cards: impl FnOnce(&mut Ui)) {
    egui::Frame::new().inner_margin(egui::Margin::same(16)).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
            add_cards(ui);
        });
    });
}

pub fn ui_card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    ui.allocate_ui_with_layout(
        egui::vec2(GROUP_WIDTH, 0.0),
        Layout::top_down(Align::Center),
        |ui| {
            ui.set_width(GROUP_WIDTH);
            egui::Frame::new().inner_margin(egui::Margin::same(16)).show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                add_contents(ui);
            });
        },
    );
}

pub fn ui_group_header(ui: &mut Ui, view: &ViewContext<'_>, group: &Group) {
    ui.vertical_centered(|ui| {
        if let Some(interval) = &group.time_interval {
            ui.label(RichText::new(format!("#{}", interval.position)).size(28.0).italics());
        }
        ui.label(view.theme.group_name(&group.name));
        ui.label(RichText::new(group.location.label()).italics());
    });
    ui.add_space(8.0);
}

/// Member name on the left, `content` (pills, buttons) on the right.
pub fn ui_member_row<R>(
    ui: &mut Ui,
    member: &Member,
    content: impl FnOnce(&mut Ui) -> R,
) -> R {
    ui.horizontal(|ui| {
        let width = ui.available_width();
        let name_width = width * 0.4;

        ui.allocate_ui_with_layout(
            egui::vec2(name_width, 0.0),
            Layout::right_to_left(Align::Center),
            |ui| {
                ui.set_width(name_width);
                ui.label(&member.name);
            },
        );

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), 0.0),
            Layout::left_to_right(Align::Center).with_main_wrap(true),
            content,
        )
        .inner
    })
    .inner
}
