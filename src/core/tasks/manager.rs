use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use eframe::egui;
use tokio::runtime::Runtime;
use tracing::{
    debug,
    error,
};

use super::TaskResult;
use crate::core::{
    fetch::load_roster,
    source::DataSource,
    KaramoveError,
};

/// Runs slow work off the UI thread and hands results back through a channel
/// drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, KaramoveError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!(task = result.task_type(), "Task finished");
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_roster(&self, source: DataSource, ctx: egui::Context) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage(format!("Chargement de {}...", source)));
            ctx.request_repaint();

            let result = runtime.block_on(async { load_roster(&source).await }).map_err(|e| {
                error!("Failed to load roster from {}: {}", source, e);
                e.to_string()
            });

            let _ = sender.send(TaskResult::RosterLoaded(result.map(Arc::new)));
            ctx.request_repaint();
        });
    }
}
