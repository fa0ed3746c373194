use crate::model::ModelManager;

/// Shared by every handler. Holds nothing but the model manager, requests keep no state.
#[derive(Debug, Clone)]
pub struct AppState {
    mm: ModelManager,
}

impl AppState {
    pub fn new(mm: ModelManager) -> Self {
        Self { mm }
    }

    #[inline]
    pub fn mm(&self) -> &ModelManager {
        &self.mm
    }
}

impl From<ModelManager> for AppState {
    fn from(mm: ModelManager) -> Self {
        Self::new(mm)
    }
}
