use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pintui::api::PROVIDER_NAME;
use pintui::logic::formatting;
use pintui::model::RegistryModel;
use pintui::DisplayMode;

/// Build the status text (extracted for testability)
fn build_status_text(registry: &RegistryModel, display_mode: DisplayMode) -> String {
    let total: u64 = registry.files.iter().map(|f| f.size).sum();

    let activity = if registry.uploading {
        "Uploading"
    } else if registry.deleting.is_some() {
        "Deleting"
    } else if registry.listing() {
        "Refreshing"
    } else if registry.last_error.is_some() {
        "Refresh failed"
    } else {
        "Idle"
    };

    let refreshed = match registry.last_refreshed {
        Some(at) => {
            let secs = (Utc::now() - at).num_seconds().max(0) as u64;
            format!("{} ago", formatting::format_elapsed(secs))
        }
        None => "never".to_string(),
    };

    format!(
        "{} │ {} files │ {} │ {} │ Refreshed: {} │ Info: {}",
        PROVIDER_NAME,
        registry.files.len(),
        formatting::format_bytes(total),
        activity,
        refreshed,
        display_mode.as_str()
    )
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    registry: &RegistryModel,
    display_mode: DisplayMode,
    config_path: Option<&str>,
) {
    let mut spans = vec![Span::raw(build_status_text(registry, display_mode))];
    if let Some(error) = &registry.last_error {
        spans.push(Span::styled(
            format!(" │ {}", error),
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(path) = config_path {
        spans.push(Span::styled(
            format!(" │ {}", path),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_for_empty_registry() {
        let registry = RegistryModel::new("https://gw", false);
        let text = build_status_text(&registry, DisplayMode::Off);
        assert!(text.contains("0 files"));
        assert!(text.contains("Idle"));
        assert!(text.contains("Refreshed: never"));
        assert!(text.ends_with("Info: Name"));
    }

    #[test]
    fn test_status_text_reports_upload() {
        let mut registry = RegistryModel::new("https://gw", false);
        registry.uploading = true;
        assert!(build_status_text(&registry, DisplayMode::SizeOnly).contains("Uploading"));
    }
}
