use eframe::egui::{
    self,
    CursorIcon,
    RichText,
    Sense,
    Ui,
};

use super::{
    groups::{
        ui_card,
        ui_cards,
        ui_group_header,
        GROUP_WIDTH,
    },
    ViewContext,
};
use crate::{
    core::{
        models::TimeData,
        source::DataSource,
        time::{
            bookend_segments,
            to_time,
            Segment,
        },
        Group,
        Roster,
    },
    gui::actions::{
        ActionQueue,
        UiAction,
    },
};

const CLIP_HEIGHT: f32 = 32.0;

/// What the band above a segment's offsets shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Clip {
    /// Music is not published: an empty band with no link.
    Placeholder,
    Link(String),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardHeading<'a> {
    Group(&'a Group),
    Bookend(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCard<'a> {
    pub heading: CardHeading<'a>,
    pub segment: Option<(Segment, Clip)>,
}

/// One card per group, then Intro and Outro when the music is published.
pub fn segment_cards<'a>(
    roster: &'a Roster,
    time: &TimeData,
    source: &DataSource,
) -> Vec<SegmentCard<'a>> {
    let clip = |segment: Segment| {
        let clip = if !roster.with_music {
            Clip::Placeholder
        } else {
            match source.segment(segment.position) {
                Ok(asset) => Clip::Link(asset.href()),
                Err(e) => Clip::Unavailable(e.to_string()),
            }
        };
        (segment, clip)
    };

    let mut cards: Vec<SegmentCard<'a>> = roster
        .groups
        .iter()
        .map(|group| SegmentCard {
            heading: CardHeading::Group(group),
            segment: group.time_interval.as_ref().map(Segment::from_interval).map(clip),
        })
        .collect();

    if roster.with_music {
        for bookend in bookend_segments(time, roster.groups.len()) {
            cards.push(SegmentCard {
                heading: CardHeading::Bookend(bookend.title),
                segment: Some(clip(bookend.segment)),
            });
        }
    }

    cards
}

pub fn ui_groups_with_time_intervals(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    time: &TimeData,
    actions: &mut ActionQueue,
) {
    let cards = segment_cards(view.roster, time, view.source);

    ui_cards(ui, |ui| {
        for card in &cards {
            ui_card(ui, |ui| {
                match &card.heading {
                    CardHeading::Group(group) => ui_group_header(ui, view, group),
                    CardHeading::Bookend(title) => {
                        ui.vertical_centered(|ui| {
                            ui.label(view.theme.group_name(title));
                        });
                    }
                }

                if let Some((segment, clip)) = &card.segment {
                    ui_segment(ui, view, segment, clip, actions);
                }
            });
        }
    });
}

/// Waveform linking to the segment's clip, or an empty band, then the start
/// and end offsets.
fn ui_segment(
    ui: &mut Ui,
    view: &ViewContext<'_>,
    segment: &Segment,
    clip: &Clip,
    actions: &mut ActionQueue,
) {
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(view.theme.menu_background())
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(GROUP_WIDTH / 2.0);
                ui.set_min_height(CLIP_HEIGHT);

                match clip {
                    Clip::Link(href) => {
                        let waveform = egui::Image::new(egui::include_image!(
                            "../../../assets/waveform.svg"
                        ))
                        .fit_to_exact_size(egui::vec2(GROUP_WIDTH / 4.0, CLIP_HEIGHT))
                        .sense(Sense::click());

                        let response = ui
                            .vertical_centered(|ui| ui.add(waveform))
                            .inner
                            .on_hover_cursor(CursorIcon::PointingHand)
                            .on_hover_text(href.as_str());

                        if response.clicked() {
                            actions.push(UiAction::OpenUrl(href.clone()));
                        }
                    }
                    Clip::Unavailable(error) => {
                        ui.vertical_centered(|ui| {
                            ui.colored_label(ui.visuals().error_fg_color, error.as_str());
                        });
                    }
                    Clip::Placeholder => {}
                }
            });
    });

    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui| {
            ui.label(RichText::new(to_time(segment.start)).size(18.0));
        });
        columns[1].vertical_centered(|ui| {
            ui.label(RichText::new(to_time(segment.end)).size(18.0));
        });
    });
}
