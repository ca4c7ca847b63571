use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use pintui::logic::{file, formatting};
use pintui::model::{FileRecord, RegistryModel};
use pintui::DisplayMode;

/// Build the info suffix for a record according to the display mode
fn record_info(record: &FileRecord, display_mode: DisplayMode) -> String {
    match display_mode {
        DisplayMode::Off => String::new(),
        DisplayMode::SizeOnly => formatting::format_megabytes(record.size),
        DisplayMode::SizeAndDate => format!(
            "{}  {}",
            formatting::format_megabytes(record.size),
            formatting::format_pin_date(&record.uploaded_at)
        ),
    }
}

fn list_title(registry: &RegistryModel) -> String {
    let mut title = format!("Your Files ({})", registry.files.len());
    if registry.listing() {
        title.push_str(" ⟳ loading");
    }
    if registry.stale {
        title.push_str(" [stale]");
    }
    title
}

/// Render the pinned file list
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    registry: &RegistryModel,
    selected: Option<usize>,
    display_mode: DisplayMode,
) {
    let border_color = if registry.stale { Color::Yellow } else { Color::Cyan };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(registry))
        .border_style(Style::default().fg(border_color));

    if registry.files.is_empty() {
        let message = if registry.listing() {
            "Loading pinned files…"
        } else {
            "No files uploaded yet"
        };
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Borders, highlight symbol and category tag
    let name_width = (area.width as usize).saturating_sub(2 + 2 + 6);

    let items: Vec<ListItem> = registry
        .files
        .iter()
        .map(|record| {
            let info = record_info(record, display_mode);
            let available = name_width.saturating_sub(if info.is_empty() { 0 } else { info.len() + 2 });
            let name = formatting::truncate_to_width(&record.name, available);
            let padding = available.saturating_sub(unicode_width::UnicodeWidthStr::width(name.as_str()));

            let mut spans = vec![
                Span::styled(
                    format!("{:<4} ", file::media_category(&record.media_type)),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(name),
            ];
            if !info.is_empty() {
                spans.push(Span::raw(" ".repeat(padding + 2)));
                spans.push(Span::styled(info, Style::default().fg(Color::Gray)));
            }

            let is_deleting = registry.deleting.as_deref() == Some(record.id.as_str());
            let style = if is_deleting {
                Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
