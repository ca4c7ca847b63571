// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (panels, splits, areas)
// - render: Main orchestration function that coordinates all rendering
// - credentials_panel: API key / secret form
// - upload_panel: Staged file and upload progress
// - file_list: Pinned file list
// - details: Links and metadata of the selected file
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - dialogs: Notification modal, delete confirmation, path prompt
// - toast: Renders toast notifications (brief pop-up messages)

pub mod credentials_panel;
pub mod details;
pub mod dialogs;
pub mod file_list;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;
pub mod upload_panel;

// Re-export main render function for convenience
pub use render::render;
