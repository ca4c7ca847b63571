use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use pintui::logic::{file, formatting};
use pintui::model::RegistryModel;

/// Render the staged file and the upload progress bar
pub fn render_upload_panel(f: &mut Frame, area: Rect, registry: &RegistryModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Upload")
        .border_style(Style::default().fg(if registry.uploading {
            Color::Yellow
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let staged = match &registry.selected_file {
        Some(staged) => vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", file::media_category(&staged.media_type)),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    formatting::truncate_to_width(&staged.name, rows[0].width.saturating_sub(8) as usize),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {}",
                    formatting::format_megabytes(staged.size),
                    staged.media_type,
                    staged.path.display()
                ),
                Style::default().fg(Color::Gray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No file selected. Press o to choose one.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    f.render_widget(Paragraph::new(staged), rows[0]);

    if registry.uploading {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .percent(u16::from(registry.upload_progress.min(100)))
            .label(format!("Uploading to IPFS… {}%", registry.upload_progress));
        f.render_widget(gauge, rows[1]);
    }
}
