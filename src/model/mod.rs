//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//!
//! - **RegistryModel**: pinned files, staged file, busy flags
//! - **UiModel**: inputs, dialogs, notifications, selection
//!
//! No services live here; all I/O is carried out by the runtime from the
//! effects the registry returns.

pub mod registry;
pub mod types;
pub mod ui;

pub use registry::{Effect, RegistryModel};
pub use types::*;
pub use ui::UiModel;

use crate::credentials::Credential;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Saved credential used for every remote call
    pub credential: Credential,

    /// Pinned files and operation state
    pub registry: RegistryModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    pub fn new(
        credential: Credential,
        gateway_base_url: impl Into<String>,
        keep_list_on_error: bool,
        vim_mode: bool,
    ) -> Self {
        Self {
            credential,
            registry: RegistryModel::new(gateway_base_url, keep_list_on_error),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Currently selected file record (if any)
    pub fn selected_record(&self) -> Option<&FileRecord> {
        self.ui
            .selected_index
            .and_then(|idx| self.registry.files.get(idx))
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Keep the selection inside the list after it changed
    pub fn clamp_selection(&mut self) {
        self.ui.selected_index =
            crate::logic::ui::clamp_selection(self.ui.selected_index, self.registry.files.len());
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: id.to_string(),
            size: 1,
            media_type: "unknown".to_string(),
            uploaded_at: Utc::now(),
            remote: crate::logic::records::remote_descriptor("https://gw", id),
        }
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(Credential::default(), "https://gw", false, false);
        assert!(model.registry.files.is_empty());
        assert!(!model.ui.vim_mode);
        assert!(model.selected_record().is_none());
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(Credential::new("k", "s"), "https://gw", false, true);
        let cloned = model.clone();
        assert_eq!(cloned.credential, model.credential);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut model = Model::new(Credential::default(), "https://gw", false, false);
        model.registry.files = vec![record("QmA"), record("QmB")];
        model.ui.selected_index = Some(5);
        model.clamp_selection();
        assert_eq!(model.selected_record().map(|r| r.id.as_str()), Some("QmB"));

        model.registry.files.clear();
        model.clamp_selection();
        assert_eq!(model.ui.selected_index, None);
    }

    #[test]
    fn test_modal_states() {
        let mut model = Model::new(Credential::default(), "https://gw", false, false);

        model.ui.input_mode = InputMode::EditApiKey;
        assert!(!model.has_modal());
        model.ui.input_mode = InputMode::Normal;

        model.ui.confirm_delete = Some(DeleteConfirmation {
            id: "QmA".to_string(),
            name: "a.txt".to_string(),
        });
        assert!(model.has_modal());
        model.ui.confirm_delete = None;

        model.ui.input_mode = InputMode::EnterPath;
        assert!(model.has_modal());
    }
}
