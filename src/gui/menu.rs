use eframe::egui::{
    self,
    Align,
    Color32,
    CornerRadius,
    Layout,
    RichText,
    Ui,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    router::Route,
    theme::Theme,
    views::{
        ui_legend,
        ViewContext,
    },
};

/// Below this width the menu sits above the content instead of beside it.
pub const SMALL_SCREEN_WIDTH: f32 = 768.0;
pub const MENU_WIDTH: f32 = 400.0;

pub struct Menu;

impl Menu {
    pub fn show(
        ctx: &egui::Context,
        view: Option<&ViewContext<'_>>,
        theme: &Theme,
        route: Route,
        actions: &mut ActionQueue,
    ) {
        let frame = egui::Frame::new().fill(theme.menu_background());

        if ctx.screen_rect().width() < SMALL_SCREEN_WIDTH {
            egui::TopBottomPanel::top("menu")
                .frame(frame)
                .resizable(false)
                .max_height(ctx.screen_rect().height() / 2.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        Self::ui_menu(ui, view, theme, route, actions);
                    });
                });
        } else {
            egui::SidePanel::left("menu")
                .frame(frame)
                .resizable(false)
                .exact_width(MENU_WIDTH)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        Self::ui_menu(ui, view, theme, route, actions);
                    });
                });
        }
    }

    fn ui_menu(
        ui: &mut Ui,
        view: Option<&ViewContext<'_>>,
        theme: &Theme,
        route: Route,
        actions: &mut ActionQueue,
    ) {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let title = view
                .map(|view| view.roster.title())
                .unwrap_or_else(|| "Groupes Karamove".to_string());
            ui.label(theme.title(&title));
        });
        ui.add_space(8.0);

        if let Some(view) = view {
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(32, 16))
                .show(ui, |ui| {
                    ui.with_layout(Layout::top_down_justified(Align::Center), |ui| {
                        for available in Route::available(view.roster) {
                            if available.starts_section() {
                                ui.add_space(32.0);
                            }
                            Self::ui_nav_item(ui, theme, available, available == route, actions);
                        }
                    });
                });

            ui_legend(ui, view, route, actions);
        }

        ui.add_space(16.0);
        Self::ui_source_controls(ui, theme, actions);
    }

    fn ui_nav_item(
        ui: &mut Ui,
        theme: &Theme,
        route: Route,
        active: bool,
        actions: &mut ActionQueue,
    ) {
        let mut text = RichText::new(route.label()).size(18.0).color(theme.menu_foreground());
        if active {
            text = text.strong();
        }

        let fill = if active { theme.menu_active() } else { Color32::TRANSPARENT };
        let button = egui::Button::new(text)
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .corner_radius(CornerRadius::same(u8::MAX))
            .min_size(egui::vec2(0.0, 40.0));

        if ui.add(button).clicked() && !active {
            actions.push(UiAction::Navigate(route));
        }
    }

    fn ui_source_controls(ui: &mut Ui, theme: &Theme, actions: &mut ActionQueue) {
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            let small = |text: &str| RichText::new(text).small().color(theme.menu_foreground());

            if ui.button(small("⟳ Recharger")).clicked() {
                actions.push(UiAction::Reload);
            }
            if ui.button(small("Source des données")).clicked() {
                actions.push(UiAction::OpenSourceSettings);
            }
        });
        ui.add_space(16.0);
    }
}
