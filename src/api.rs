//! HTTP transport for the skill webhook

mod handlers;
mod types;

pub use handlers::create_router;

use crate::dialog::Dialog;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dialog: Arc<Dialog>,
    /// Expected skill application id; `None` accepts any
    pub skill_app_id: Option<Arc<str>>,
}

impl AppState {
    pub fn new(dialog: Dialog, skill_app_id: Option<String>) -> Self {
        Self {
            dialog: Arc::new(dialog),
            skill_app_id: skill_app_id.map(Arc::from),
        }
    }
}
