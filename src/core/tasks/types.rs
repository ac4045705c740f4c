use std::sync::Arc;

use crate::core::Roster;

pub type RosterResult = Result<Arc<Roster>, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    RosterLoaded(RosterResult),
    LoadingMessage(String),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::RosterLoaded(_) => "roster",
            TaskResult::LoadingMessage(_) => "loading_message",
        }
    }
}
