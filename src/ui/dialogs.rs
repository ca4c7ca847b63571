use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use pintui::model::{DeleteConfirmation, Notification, NotificationKind};

/// Centered rect of at most `width` x `height`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn kind_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Info => ("ℹ", Color::Cyan),
        NotificationKind::Success => ("✓", Color::Green),
        NotificationKind::Warning => ("!", Color::Yellow),
        NotificationKind::Error => ("✗", Color::Red),
    }
}

/// Render the notification modal; `pending` counts the ones queued behind it
pub fn render_notification(f: &mut Frame, notification: &Notification, pending: usize) {
    let (icon, color) = kind_style(notification.kind);

    let mut lines = vec![
        Line::from(Span::raw(notification.message.clone())),
        Line::from(""),
    ];
    let footer = if pending > 0 {
        format!("Enter: OK ({} more)", pending)
    } else {
        "Enter: OK".to_string()
    };
    lines.push(Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray))));

    // Leave room for wrapped messages
    let width = 64;
    let text_rows = notification.message.chars().count() as u16 / (width - 4) + 1;
    let area = centered(f.area(), width, text_rows + 5);

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} {} ", icon, notification.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, confirmation: &DeleteConfirmation) {
    let prompt_text = format!(
        "Unpin from Pinata?\n\n\
        File: {}\n\n\
        The file stops being pinned by your account.\n\n\
        Continue? (y/n)",
        confirmation.name
    );

    let area = centered(f.area(), 50, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}

/// Render the path prompt used to stage a file
pub fn render_path_prompt(f: &mut Frame, input: &str) {
    let area = centered(f.area(), 70, 5);

    let lines = vec![
        Line::from(vec![
            Span::raw(input.to_string()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            "Any file type and size is accepted",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Choose file to upload")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered(area, 64, 20);
        assert_eq!(rect, area);

        let rect = centered(Rect::new(0, 0, 100, 30), 50, 10);
        assert_eq!((rect.x, rect.y), (25, 10));
    }
}
