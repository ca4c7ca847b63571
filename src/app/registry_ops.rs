//! Registry operations
//!
//! Thin wrappers that run a registry operation against the current
//! credential and carry out the effects it returns.

use pintui::model::{DeleteConfirmation, Effect};

use crate::App;

impl App {
    /// Send requests to the API worker and queue notifications
    pub(crate) fn dispatch(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Request(request) => {
                    if self.api_tx.send(request).is_err() {
                        tracing::error!("API worker stopped, request dropped");
                    }
                }
                Effect::Notify(notification) => {
                    self.model.ui.push_notification(notification);
                }
            }
        }

        // The list may have been replaced or shortened
        self.model.clamp_selection();
    }

    pub(crate) fn refresh(&mut self) {
        let effects = self.model.registry.refresh(&self.model.credential);
        self.dispatch(effects);
    }

    pub(crate) fn upload(&mut self) {
        let effects = self.model.registry.upload(&self.model.credential);
        self.dispatch(effects);
    }

    pub(crate) fn verify_credentials(&mut self) {
        let effects = self.model.registry.verify(&self.model.credential);
        self.dispatch(effects);
    }

    /// Ask for confirmation before unpinning the selected record
    pub(crate) fn request_delete(&mut self) {
        let Some(record) = self.model.selected_record() else {
            return;
        };

        self.model.ui.confirm_delete = Some(DeleteConfirmation {
            id: record.id.clone(),
            name: record.name.clone(),
        });
    }

    pub(crate) fn confirm_delete(&mut self) {
        let Some(confirmation) = self.model.ui.confirm_delete.take() else {
            return;
        };

        let effects = self
            .model
            .registry
            .delete(&confirmation.id, &self.model.credential);
        self.dispatch(effects);
    }

    pub(crate) fn cancel_delete(&mut self) {
        self.model.ui.confirm_delete = None;
    }
}
