pub mod data;
pub mod source_settings_modal;

pub use data::{
    SettingsData,
    SETTINGS_FILE,
};
pub use source_settings_modal::SourceSettingsModal;
