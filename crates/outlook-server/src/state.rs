//! Shared application state handed to every worker.

use std::sync::Arc;

use outlook_core::traits::IStudentStore;
use outlook_predict::classifier::Classify;
use outlook_predict::RecordWorkflow;

pub type SharedStore = Arc<dyn IStudentStore>;
pub type Workflow = RecordWorkflow<SharedStore>;

pub struct AppState {
    pub workflow: Workflow,
}

impl AppState {
    pub fn new(workflow: Workflow) -> Self {
        Self { workflow }
    }

    pub fn classifier_name(&self) -> &'static str {
        self.workflow.scoring().classifier().name()
    }

    pub fn uses_fallback(&self) -> bool {
        self.workflow.scoring().classifier().is_fallback()
    }
}
