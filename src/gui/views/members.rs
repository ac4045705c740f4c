use eframe::egui::{
    self,
    CornerRadius,
    CursorIcon,
    Response,
    RichText,
    Ui,
};

use super::{
    groups::ui_member_row,
    ViewContext,
};
use crate::{
    core::{
        catalog::sorted_techniques,
        Member,
        ProfileId,
        Technique,
        TechniqueLabel,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        palette::{
            profile_color,
            technique_color,
        },
        pill::Pill,
    },
};

pub fn ui_member_name(ui: &mut Ui, member: &Member) {
    ui.vertical_centered(|ui| {
        ui.label(&member.name);
    });
}

pub fn profile_pill(view: &ViewContext<'_>, profile: ProfileId) -> Pill {
    Pill::new(
        view.roster.profile_name(profile),
        profile_color(profile, view.roster.profiles.len()),
    )
    .foreground(view.theme.pill_foreground())
}

pub fn technique_pill(view: &ViewContext<'_>, technique: Technique, label: TechniqueLabel) -> Pill {
    Pill::new(technique.label(label), technique_color(technique))
        .foreground(view.theme.pill_foreground())
}

pub fn ui_member_profile(ui: &mut Ui, view: &ViewContext<'_>, member: &Member) {
    ui_member_row(ui, member, |ui| {
        ui.add(profile_pill(view, member.profile));
    });
}

pub fn ui_member_techniques(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    member: &Member,
    techniques: &[Technique],
) {
    ui_member_row(ui, member, |ui| {
        for technique in sorted_techniques(techniques) {
            ui.add(technique_pill(view, technique, TechniqueLabel::Short));
        }
    });
}

/// Copy button for the member's handle. Members without one get no button.
pub fn ui_member_discord(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    member: &Member,
    actions: &mut ActionQueue,
) -> Option<Response> {
    ui_member_row(ui, member, |ui| {
        let discord_name = member.discord_name.as_ref()?;

        let button = egui::Button::new(
            RichText::new(discord_name).size(15.0).color(view.theme.menu_foreground()),
        )
        .fill(view.theme.menu_background())
        .corner_radius(CornerRadius::same(u8::MAX));

        let response = ui.add(button).on_hover_cursor(CursorIcon::PointingHand);
        if response.clicked() {
            actions.push(UiAction::CopyToClipboard(discord_name.clone()));
        }
        Some(response)
    })
}

#[cfg(test)]
mod tests {
    use eframe::egui;

    use super::*;
    use crate::{
        core::{
            roster::tests::sample_roster,
            source::DataSource,
        },
        gui::theme::Theme,
    };

    #[test]
    fn test_discord_button_only_for_members_with_a_handle() {
        let roster = sample_roster();
        let theme = Theme::karamove();
        let source = DataSource::parse("https://example.org/karamove").unwrap();
        let view = ViewContext { roster: &roster, theme: &theme, source: &source };

        let with_handle = roster.groups[0].members[0].clone();
        let mut without_handle = with_handle.clone();
        without_handle.discord_name = None;

        let mut actions = ActionQueue::new();
        let mut drawn = Vec::new();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                drawn = vec![
                    ui_member_discord(ui, &view, &with_handle, &mut actions).is_some(),
                    ui_member_discord(ui, &view, &without_handle, &mut actions).is_some(),
                ];
            });
        });

        assert_eq!(drawn, vec![true, false]);
    }
}
