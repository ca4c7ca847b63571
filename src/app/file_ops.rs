//! File operations
//!
//! This module handles local-file and clipboard side effects:
//! - Stage a file for upload (from the path prompt or `--file`)
//! - Copy the selected record's public link to the clipboard

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use pintui::logic;
use pintui::model::{InputMode, Notification};

use crate::App;

impl App {
    /// Read metadata for `path` and make it the staged file
    pub(crate) fn stage_path(&mut self, path: &Path) -> Result<()> {
        let staged = logic::file::stage_file(path)?;
        self.model.registry.select_file(staged);
        Ok(())
    }

    pub(crate) fn open_path_prompt(&mut self) {
        self.model.ui.path_draft.clear();
        self.model.ui.input_mode = InputMode::EnterPath;
    }

    pub(crate) fn cancel_path_prompt(&mut self) {
        self.model.ui.path_draft.clear();
        self.model.ui.input_mode = InputMode::Normal;
    }

    pub(crate) fn submit_path_prompt(&mut self) {
        let input = self.model.ui.path_draft.trim().to_string();
        self.cancel_path_prompt();

        if input.is_empty() {
            return;
        }

        let path = logic::file::expand_home(&input);
        match self.stage_path(&path) {
            Ok(()) => {
                if let Some(file) = &self.model.registry.selected_file {
                    let msg = format!(
                        "Staged {} ({})",
                        file.name,
                        logic::formatting::format_megabytes(file.size)
                    );
                    self.show_toast(msg);
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot stage file");
                self.model.ui.push_notification(Notification::warning(
                    "Cannot stage file",
                    format!("{}: {}", path.display(), e),
                ));
            }
        }
    }

    pub(crate) fn clear_staged_file(&mut self) {
        if self.model.registry.uploading {
            return;
        }
        self.model.registry.clear_selection();
    }

    /// Copy the selected record's public URL
    pub(crate) fn copy_selected_link(&mut self) {
        let Some(url) = self.model.selected_record().map(|r| r.remote.url.clone()) else {
            return;
        };
        self.copy_link(&url);
    }

    pub(crate) fn copy_link(&mut self, url: &str) {
        let Some(clipboard_cmd) = self.clipboard_command.clone() else {
            tracing::warn!("No clipboard_command configured");
            self.model.ui.push_notification(Notification::warning(
                "Clipboard unavailable",
                format!("Set clipboard_command in config.yaml. Link: {}", url),
            ));
            return;
        };

        // Text is sent via stdin; the command is not waited on
        let result = Command::new(&clipboard_cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(url.as_bytes())?;
                }
                Ok(())
            });

        match result {
            Ok(()) => {
                tracing::info!(command = %clipboard_cmd, %url, "Copied link");
                self.show_toast("Link copied to clipboard!".to_string());
            }
            Err(e) => {
                tracing::error!(command = %clipboard_cmd, error = %e, "Clipboard command failed");
                self.model.ui.push_notification(Notification::error(
                    "Copy failed",
                    format!("Failed to run '{}': {}", clipboard_cmd, e),
                ));
            }
        }
    }
}
