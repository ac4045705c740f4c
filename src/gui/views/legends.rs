use eframe::egui::{
    self,
    Align,
    Layout,
    RichText,
    Ui,
};

use super::{
    links::ui_menu_link,
    members::{
        profile_pill,
        technique_pill,
    },
    ViewContext,
};
use crate::{
    core::{
        time::{
            frame_count,
            FRAMES_PER_SECOND,
        },
        models::TimeData,
        Technique,
        TechniqueLabel,
    },
    gui::actions::ActionQueue,
};

/// Shared folder holding every group's drive and the full track.
pub const SHARED_DRIVE_FOLDER: &str =
    "https://drive.google.com/drive/folders/1OOBW6XLta5U27KPlrqay44Zk6sA2fENT?usp=sharing";

fn ui_flex_legend(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new().inner_margin(egui::Margin::same(24)).show(ui, |ui| {
        ui.with_layout(
            Layout::left_to_right(Align::Center).with_main_wrap(true).with_main_align(Align::Center),
            add_contents,
        );
    });
}

fn ui_full_width_legend(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new().inner_margin(egui::Margin::same(24)).show(ui, |ui| {
        ui.with_layout(Layout::top_down_justified(Align::Center), add_contents);
    });
}

fn ui_menu_text(ui: &mut Ui, view: &ViewContext<'_>, text: impl Into<String>) {
    ui.label(RichText::new(text).color(view.theme.menu_foreground()));
}

pub fn ui_profile_legend(ui: &mut Ui, view: &ViewContext<'_>) {
    ui_flex_legend(ui, |ui| {
        for profile in view.roster.profile_ids() {
            ui.add(profile_pill(view, profile));
        }
    });
}

pub fn ui_technique_legend(ui: &mut Ui, view: &ViewContext<'_>, only_knowable: bool) {
    ui_full_width_legend(ui, |ui| {
        let techniques: Vec<Technique> = if only_knowable {
            Technique::knowable_techniques().collect()
        } else {
            Technique::ALL.to_vec()
        };

        for technique in techniques {
            ui.add(technique_pill(view, technique, TechniqueLabel::Long));
        }
    });
}

pub fn ui_discord_legend(ui: &mut Ui, view: &ViewContext<'_>) {
    ui_full_width_legend(ui, |ui| {
        ui_menu_text(ui, view, "Cliquez sur le nom pour le copier dans le presse-papier !");
    });
}

pub fn ui_google_drive_legend(ui: &mut Ui, view: &ViewContext<'_>, actions: &mut ActionQueue) {
    ui_full_width_legend(ui, |ui| {
        ui_menu_link(
            ui,
            view,
            "Cliquez ici pour ouvrir le dossier commun avec la musique entière.",
            SHARED_DRIVE_FOLDER,
            actions,
        );
    });
}

pub fn ui_time_interval_legend(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    time: &TimeData,
    actions: &mut ActionQueue,
) {
    let foreground = view.theme.menu_foreground();
    let strong = |text: String| RichText::new(text).strong().color(foreground);

    ui_full_width_legend(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui_menu_text(ui, view, "Le rendu est de ");
            ui.label(strong(format!("{} secondes", time.group_interval_duration)));
            ui_menu_text(ui, view, ", soit ");
            ui.label(strong(format!("{} frames", frame_count(time))));
            ui_menu_text(ui, view, " exportées en ");
            ui.label(strong("H264 1080p".to_string()));
            ui_menu_text(ui, view, " à ");
            ui.label(strong(format!("{} FPS", FRAMES_PER_SECOND)));
            ui_menu_text(ui, view, ".");
        });

        if view.roster.with_music {
            ui.add_space(8.0);
            ui_menu_text(ui, view, "Cliquez sur un intervalle pour télécharger l'extrait sonore.");
            ui.add_space(8.0);

            match view.source.music() {
                Ok(music) => ui_menu_link(
                    ui,
                    view,
                    "Cliquez ici pour télécharger la musique entière.",
                    &music.href(),
                    actions,
                ),
                Err(e) => {
                    ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                }
            }
        }
    });
}
