use super::router::Route;

// Views only describe what the user asked for; the app applies it after the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Navigation
    Navigate(Route),

    // Outside world
    CopyToClipboard(String),
    OpenUrl(String),

    // Data source
    Reload,
    OpenSourceSettings,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
