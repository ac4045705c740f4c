use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Spacing between pills, legend entries and member rows.
pub const SPACING: f32 = 8.0;

#[derive(Clone)]
pub struct Theme {
    details: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::karamove()
    }
}

impl Theme {
    pub fn karamove() -> Self {
        Theme { details: ThemeDetails::karamove() }
    }

    pub fn title(&self, content: &str) -> RichText {
        RichText::new(content.to_uppercase()).size(30.0).color(self.details.heading)
    }

    pub fn group_name(&self, content: &str) -> RichText {
        RichText::new(content.to_uppercase())
            .size(22.0)
            .strong()
            .color(self.details.content_foreground)
    }

    pub fn content_background(&self) -> Color32 {
        self.details.content_background
    }

    pub fn content_foreground(&self) -> Color32 {
        self.details.content_foreground
    }

    pub fn menu_background(&self) -> Color32 {
        self.details.menu_background
    }

    pub fn menu_foreground(&self) -> Color32 {
        self.details.menu_foreground
    }

    pub fn menu_active(&self) -> Color32 {
        self.details.menu_active
    }

    pub fn pill_foreground(&self) -> Color32 {
        self.details.pill_foreground
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    content_background: Color32,
    content_foreground: Color32,
    heading: Color32,
    menu_active: Color32,
    menu_background: Color32,
    menu_foreground: Color32,
    pill_foreground: Color32,
    selection: Color32,
    faint: Color32,
}

impl ThemeDetails {
    fn karamove() -> Self {
        Self {
            content_background: Color32::WHITE,
            content_foreground: Color32::BLACK,
            heading: Color32::from_rgb(0xf4, 0xd2, 0x10),
            menu_active: Color32::from_rgb(0xd3, 0x2f, 0x00),
            menu_background: Color32::from_rgb(0x69, 0x17, 0x00),
            menu_foreground: Color32::WHITE,
            pill_foreground: Color32::WHITE,
            selection: Color32::from_rgb(0xf4, 0xd2, 0x10).linear_multiply(0.4),
            faint: Color32::from_rgb(0xf2, 0xee, 0xec),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.details);
    ctx.set_theme(egui::Theme::Light);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails) {
    let default = Visuals::light();
    let hover = blend_colors(theme.menu_background, theme.menu_active, 0.5);

    ctx.set_visuals_of(
        egui::Theme::Light,
        Visuals {
            dark_mode: false,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.content_background,
                    weak_bg_fill: theme.faint,
                    fg_stroke: Stroke {
                        color: theme.content_foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.menu_background,
                    weak_bg_fill: theme.menu_background,
                    fg_stroke: Stroke {
                        color: theme.menu_foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: hover,
                    weak_bg_fill: hover,
                    bg_stroke: Stroke { color: theme.heading, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.menu_foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.menu_active,
                    weak_bg_fill: theme.menu_active,
                    bg_stroke: Stroke { color: theme.heading, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.menu_foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.content_foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.content_foreground,
            faint_bg_color: theme.faint,
            window_shadow: Shadow { color: theme.faint, ..default.window_shadow },
            window_fill: theme.content_background,
            panel_fill: theme.content_background,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
        style.spacing.item_spacing = egui::vec2(SPACING, SPACING);
    });
}
