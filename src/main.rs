use eframe::egui;
use karamove::{
    core::tasks::TaskManager,
    gui::{
        settings::{
            SettingsData,
            SETTINGS_FILE,
        },
        KaramoveApp,
    },
    persistence::load_json_or_default,
    KaramoveError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), KaramoveError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,karamove=debug".into()),
        )
        .init();

    let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    info!("Data source: {}", settings_data.base_url());

    let task_manager = TaskManager::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Groupes Karamove")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Groupes Karamove",
        options,
        Box::new(move |cc| Ok(Box::new(KaramoveApp::new(cc, settings_data, task_manager)))),
    )
    .map_err(|e| KaramoveError::Custom(format!("UI error: {e}")))
}
