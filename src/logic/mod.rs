//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Pinata failure classification and user-facing messages
//! - file: Media type detection and staging of local files
//! - formatting: Sizes, dates, hashes and secrets for display
//! - records: Mapping the remote listing into file records
//! - ui: UI state transitions and selection arithmetic

pub mod errors;
pub mod file;
pub mod formatting;
pub mod records;
pub mod ui;
