//! Credential form
//!
//! Commits the edited drafts to the store and re-syncs the list with the
//! new credential.

use pintui::credentials::Credential;
use pintui::model::{InputMode, Notification};

use crate::App;

impl App {
    pub(crate) fn start_credential_edit(&mut self) {
        self.model.ui.begin_credential_edit(&self.model.credential);
    }

    /// Tab between the two fields
    pub(crate) fn toggle_credential_field(&mut self) {
        self.model.ui.input_mode = match self.model.ui.input_mode {
            InputMode::EditApiKey => InputMode::EditApiSecret,
            InputMode::EditApiSecret => InputMode::EditApiKey,
            other => other,
        };
    }

    pub(crate) fn save_credentials(&mut self) {
        let credential = self.model.ui.drafted_credential();
        self.model.ui.end_credential_edit();

        if let Err(e) = self.store.save(&credential) {
            tracing::error!(error = %e, "Failed to save credentials");
            self.model.ui.push_notification(Notification::error(
                "Save failed",
                format!("Could not save API keys: {:#}", e),
            ));
            return;
        }

        self.model.credential = credential;
        self.model
            .ui
            .push_notification(Notification::success("Credentials saved", "API keys saved successfully!"));

        self.refresh();
    }

    pub(crate) fn forget_credentials(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear credentials");
            self.model.ui.push_notification(Notification::error(
                "Clear failed",
                format!("Could not remove API keys: {:#}", e),
            ));
            return;
        }

        self.model.credential = Credential::default();
        self.show_toast("API keys removed".to_string());

        // Clears the list without a remote call
        self.refresh();
    }

    pub(crate) fn show_toast(&mut self, message: String) {
        self.model.show_toast(message);
    }
}
