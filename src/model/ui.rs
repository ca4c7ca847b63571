//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, text inputs, dialogs, notifications and selection.

use std::collections::VecDeque;
use std::time::Instant;

use super::types::{DeleteConfirmation, InputMode, Notification, VimCommandState};
use crate::credentials::Credential;
use crate::DisplayMode;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Display mode for file info
    pub display_mode: DisplayMode,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Show credential drafts in clear text while editing
    pub show_secrets: bool,

    // ============================================
    // INPUT
    // ============================================
    pub input_mode: InputMode,

    /// Credential form drafts, committed on save
    pub key_draft: String,
    pub secret_draft: String,

    /// Path prompt for staging a file
    pub path_draft: String,

    // ============================================
    // SELECTION
    // ============================================
    /// Selected row in the file list
    pub selected_index: Option<usize>,

    // ============================================
    // DIALOGS & NOTIFICATIONS
    // ============================================
    /// Confirmation dialog for delete
    pub confirm_delete: Option<DeleteConfirmation>,

    /// Notification modals, oldest first
    pub notifications: VecDeque<Notification>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Config file in use, if any
    pub config_path: Option<String>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            display_mode: DisplayMode::SizeAndDate,
            vim_mode,
            vim_command_state: VimCommandState::None,
            show_secrets: false,
            input_mode: InputMode::Normal,
            key_draft: String::new(),
            secret_draft: String::new(),
            path_draft: String::new(),
            selected_index: None,
            confirm_delete: None,
            notifications: VecDeque::new(),
            toast_message: None,
            config_path: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        !self.notifications.is_empty()
            || self.confirm_delete.is_some()
            || self.input_mode == InputMode::EnterPath
    }

    pub fn is_editing_credentials(&self) -> bool {
        matches!(
            self.input_mode,
            InputMode::EditApiKey | InputMode::EditApiSecret
        )
    }

    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    /// Start editing with the drafts seeded from the saved credential
    pub fn begin_credential_edit(&mut self, credential: &Credential) {
        self.key_draft = credential.api_key.clone();
        self.secret_draft = credential.api_secret.clone();
        self.input_mode = InputMode::EditApiKey;
    }

    /// The drafts exactly as typed
    pub fn drafted_credential(&self) -> Credential {
        Credential::new(self.key_draft.as_str(), self.secret_draft.as_str())
    }

    /// Leave edit mode and wipe the drafts
    pub fn end_credential_edit(&mut self) {
        self.key_draft.clear();
        self.secret_draft.clear();
        self.show_secrets = false;
        self.input_mode = InputMode::Normal;
    }

    /// Text field receiving keystrokes, if any
    pub fn active_input(&mut self) -> Option<&mut String> {
        match self.input_mode {
            InputMode::Normal => None,
            InputMode::EditApiKey => Some(&mut self.key_draft),
            InputMode::EditApiSecret => Some(&mut self.secret_draft),
            InputMode::EnterPath => Some(&mut self.path_draft),
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, at)| crate::logic::ui::should_dismiss_toast(at.elapsed().as_millis()))
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_are_fifo() {
        let mut ui = UiModel::new(false);
        ui.push_notification(Notification::info("first", ""));
        ui.push_notification(Notification::info("second", ""));
        assert!(ui.has_modal());
        assert_eq!(ui.current_notification().unwrap().title, "first");

        ui.dismiss_notification();
        assert_eq!(ui.current_notification().unwrap().title, "second");
        ui.dismiss_notification();
        assert!(!ui.has_modal());
    }

    #[test]
    fn test_credential_edit_seeds_and_wipes_drafts() {
        let mut ui = UiModel::new(false);
        ui.begin_credential_edit(&Credential::new("k", "s"));
        assert!(ui.is_editing_credentials());
        assert_eq!(ui.key_draft, "k");
        assert_eq!(ui.secret_draft, "s");

        ui.end_credential_edit();
        assert!(!ui.is_editing_credentials());
        assert!(ui.key_draft.is_empty());
        assert!(ui.secret_draft.is_empty());
    }

    #[test]
    fn test_active_input_follows_mode() {
        let mut ui = UiModel::new(false);
        assert!(ui.active_input().is_none());

        ui.input_mode = InputMode::EnterPath;
        ui.active_input().unwrap().push_str("/tmp/a");
        assert_eq!(ui.path_draft, "/tmp/a");
        assert!(ui.has_modal());

        ui.input_mode = InputMode::Normal;
        assert!(!ui.has_modal());
    }

    #[test]
    fn test_drafted_credential_keeps_whitespace() {
        let mut ui = UiModel::new(false);
        ui.begin_credential_edit(&Credential::default());
        ui.key_draft.push_str(" pk_1 ");
        ui.secret_draft.push_str("   ");

        let credential = ui.drafted_credential();
        assert_eq!(credential, Credential::new(" pk_1 ", "   "));
        assert!(credential.is_usable());
    }
}
