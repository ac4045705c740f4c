//! One renderer per route. Each is a plain function of the roster; anything
//! the user triggers is pushed to the action queue.

pub mod groups;
pub mod legends;
pub mod links;
pub mod members;
pub mod time_intervals;

use eframe::egui::Ui;

use super::{
    actions::ActionQueue,
    router::Route,
    theme::Theme,
};
use crate::core::{
    source::DataSource,
    Roster,
};

pub struct ViewContext<'a> {
    pub roster: &'a Roster,
    pub theme: &'a Theme,
    pub source: &'a DataSource,
}

pub fn ui_content(ui: &mut Ui, view: &ViewContext<'_>, route: Route, actions: &mut ActionQueue) {
    match route {
        Route::Constitution => {
            groups::ui_groups_with_members(ui, view, members::ui_member_name);
        }
        Route::Profiles => groups::ui_groups_with_members(ui, view, |ui, member| {
            members::ui_member_profile(ui, view, member)
        }),
        Route::PreferredTechniques => groups::ui_groups_with_members(ui, view, |ui, member| {
            members::ui_member_techniques(ui, view, member, &member.preferred_techniques)
        }),
        Route::KnownTechniques => groups::ui_groups_with_members(ui, view, |ui, member| {
            members::ui_member_techniques(ui, view, member, &member.known_techniques)
        }),
        Route::DiscordNames => groups::ui_groups_with_members(ui, view, |ui, member| {
            members::ui_member_discord(ui, view, member, actions);
        }),
        Route::GoogleDriveLinks => groups::ui_groups(ui, view, |ui, group| {
            links::ui_group_drive_link(ui, view, group, actions)
        }),
        Route::TimeIntervals => {
            if let Some(time) = &view.roster.time {
                time_intervals::ui_groups_with_time_intervals(ui, view, time, actions);
            }
        }
    }
}

/// Legend shown under the menu; the constitution view has none.
pub fn ui_legend(ui: &mut Ui, view: &ViewContext<'_>, route: Route, actions: &mut ActionQueue) {
    match route {
        Route::Constitution => {}
        Route::Profiles => legends::ui_profile_legend(ui, view),
        Route::PreferredTechniques => legends::ui_technique_legend(ui, view, false),
        Route::KnownTechniques => legends::ui_technique_legend(ui, view, true),
        Route::DiscordNames => legends::ui_discord_legend(ui, view),
        Route::GoogleDriveLinks => legends::ui_google_drive_legend(ui, view, actions),
        Route::TimeIntervals => {
            if let Some(time) = &view.roster.time {
                legends::ui_time_interval_legend(ui, view, time, actions);
            }
        }
    }
}
