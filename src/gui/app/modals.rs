use crate::gui::{
    error_modal::ErrorModal,
    settings::SourceSettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub source_settings: SourceSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { error: ErrorModal::new(), source_settings: SourceSettingsModal::new() }
    }
}
