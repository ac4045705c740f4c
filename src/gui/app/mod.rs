mod modals;

use std::sync::Arc;

use eframe::egui;
use modals::Modals;
use tracing::{
    debug,
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    menu::Menu,
    message_overlay::MessageOverlay,
    router::Route,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    views::{
        ui_content,
        ViewContext,
    },
};
use crate::{
    core::{
        source::DataSource,
        tasks::{
            TaskManager,
            TaskResult,
        },
        Roster,
    },
    persistence::save_json,
};

pub struct KaramoveApp {
    // Roster
    pub roster: Option<Arc<Roster>>,
    pub source: Option<DataSource>,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub route: Route,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,

    // Modals
    pub modals: Modals,

    task_manager: TaskManager,
}

impl KaramoveApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        task_manager: TaskManager,
    ) -> Self {
        let mut app = Self {
            roster: None,
            source: None,
            settings_data,
            route: Route::default(),
            theme: Theme::karamove(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),
            task_manager,
        };

        egui_extras::install_image_loaders(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, &app.theme);
        app.reload(&cc.egui_ctx);

        app
    }

    /// Starts the one fetch of `data.json`. Called at startup and when the user
    /// asks for it, never automatically after a failure.
    fn reload(&mut self, ctx: &egui::Context) {
        match self.settings_data.source() {
            Ok(source) => {
                info!("Loading roster from {}", source);
                self.message_overlay.set_message(format!("Chargement de {}...", source));
                self.source = Some(source.clone());
                self.task_manager.load_roster(source, ctx.clone());
            }
            Err(e) => {
                self.source = None;
                self.roster = None;
                self.modals.error.show_error(
                    "Source invalide",
                    format!("Impossible d'utiliser « {} ».", self.settings_data.base_url()),
                    Some(e.to_string()),
                );
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult, ctx: &egui::Context) {
        match result {
            TaskResult::RosterLoaded(Ok(roster)) => {
                self.message_overlay.clear_message();
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(roster.title()));

                self.route = self
                    .settings_data
                    .last_route
                    .as_deref()
                    .and_then(|path| Route::from_path(path, &roster))
                    .unwrap_or_default();
                self.roster = Some(roster);
            }
            TaskResult::RosterLoaded(Err(error_msg)) => {
                self.message_overlay.clear_message();
                self.roster = None;
                self.modals.error.show_error(
                    "Chargement impossible",
                    "Les données des groupes n'ont pas pu être chargées.",
                    Some(error_msg),
                );
            }
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
        }
    }

    fn handle_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::Navigate(route) => {
                debug!(path = route.path(), "Navigate");
                self.route = route;
                self.settings_data.last_route = Some(route.path().to_string());
                self.save_settings();
            }
            UiAction::CopyToClipboard(text) => {
                debug!("Copied {} to clipboard", text);
                ctx.copy_text(text);
            }
            UiAction::OpenUrl(url) => {
                debug!("Opening {}", url);
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            UiAction::Reload => self.reload(ctx),
            UiAction::OpenSourceSettings => {
                self.modals.source_settings.open_settings(self.settings_data.clone());
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for KaramoveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result, ctx);
        }

        let mut actions = ActionQueue::new();

        {
            let view = match (&self.roster, &self.source) {
                (Some(roster), Some(source)) => {
                    Some(ViewContext { roster: roster.as_ref(), theme: &self.theme, source })
                }
                _ => None,
            };

            Menu::show(ctx, view.as_ref(), &self.theme, self.route, &mut actions);

            egui::CentralPanel::default()
                .frame(egui::Frame::new().fill(self.theme.content_background()))
                .show(ctx, |ui| {
                    if let Some(view) = &view {
                        egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                            ui_content(ui, view, self.route, &mut actions);
                        });
                    }
                });
        }

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);

        if let Some(settings) = self.modals.source_settings.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
            actions.push(UiAction::Reload);
        }

        let pending: Vec<UiAction> = actions.drain().collect();
        for action in pending {
            self.handle_action(action, ctx);
        }
    }
}
