//! Pinata TUI Library
//!
//! Exposes the credential store, Pinata client, registry model and pure
//! logic so they can be driven from tests without a terminal.

pub mod api;
pub mod config;
pub mod credentials;
pub mod logic;
pub mod model;
pub mod services;

/// File info display mode for the file list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Off,         // Name only
    SizeOnly,    // Name and size
    SizeAndDate, // Name, size and pin date
}

impl DisplayMode {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayMode::Off => "Name",
            DisplayMode::SizeOnly => "Size",
            DisplayMode::SizeAndDate => "Size+Date",
        }
    }
}
