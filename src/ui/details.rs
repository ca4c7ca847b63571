use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use pintui::logic::{file, formatting};
use pintui::model::FileRecord;

fn row(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Render the details of the selected record
pub fn render_details(f: &mut Frame, area: Rect, record: Option<&FileRecord>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Details")
        .border_style(Style::default().fg(Color::Cyan));

    let Some(record) = record else {
        let empty = Paragraph::new(Span::styled(
            "Select a file to see its links",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        row("Size:     ", formatting::format_megabytes(record.size)),
        row("Type:     ", record.media_type.clone()),
        row(
            "Pinned:   ",
            formatting::format_pin_timestamp(&record.uploaded_at),
        ),
        row("Provider: ", record.remote.provider.clone()),
        row("IPFS:     ", record.remote.hash.clone()),
        row("Link:     ", record.remote.url.clone()),
    ];

    if record.remote.gateway != record.remote.url {
        lines.push(row("Gateway:  ", record.remote.gateway.clone()));
    }
    if file::is_image_type(&record.media_type) {
        lines.push(Line::from(Span::styled(
            "Image: open the link to view it",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(details, area);
}
