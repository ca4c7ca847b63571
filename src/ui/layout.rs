use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panels below this width stack the details under the list
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Credential form at the top
    pub credentials_area: Rect,
    /// Staged file and upload progress
    pub upload_area: Rect,
    /// Pinned file list
    pub list_area: Rect,
    /// Selected record details
    pub details_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Credentials (2 lines + borders)
            Constraint::Length(5),             // Upload (staged file + gauge)
            Constraint::Min(5),                // List + details
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[2];
    let content_chunks = if content_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(content_area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(7)])
            .split(content_area)
    };

    LayoutInfo {
        credentials_area: main_chunks[0],
        upload_area: main_chunks[1],
        list_area: content_chunks[0],
        details_area: content_chunks[1],
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}
