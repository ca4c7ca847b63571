//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Where a pinned file lives remotely
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteDescriptor {
    pub provider: String,
    pub hash: String,
    pub url: String,
    pub gateway: String,
}

/// One pinned file as shown in the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Content hash; unique within the list and stable across refreshes
    pub id: String,
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub remote: RemoteDescriptor,
}

/// A local file staged for upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A titled message shown in the notification modal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }
}

/// Which text field (if any) is receiving keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditApiKey,
    EditApiSecret,
    EnterPath,
}

/// Pending delete awaiting y/n
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub id: String,
    pub name: String,
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}
