use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pintui::credentials::Credential;
use pintui::logic::formatting::mask_secret;
use pintui::model::{InputMode, UiModel};

fn field_line(
    label: &'static str,
    value: &str,
    revealed: bool,
    active: bool,
) -> Line<'static> {
    let shown = if value.is_empty() {
        "(not set)".to_string()
    } else if revealed {
        value.to_string()
    } else {
        mask_secret(value)
    };

    let label_style = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(label, label_style),
        Span::styled(shown, value_style),
    ];
    if active {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Render the API key / secret form
pub fn render_credentials_panel(f: &mut Frame, area: Rect, credential: &Credential, ui: &UiModel) {
    let editing = ui.is_editing_credentials();

    let (key, secret) = if editing {
        (ui.key_draft.as_str(), ui.secret_draft.as_str())
    } else {
        (credential.api_key.as_str(), credential.api_secret.as_str())
    };

    let lines = vec![
        // The key is an identifier, only the secret stays masked at rest
        field_line(
            "API Key:    ",
            key,
            true,
            ui.input_mode == InputMode::EditApiKey,
        ),
        field_line(
            "Secret Key: ",
            secret,
            editing && ui.show_secrets,
            ui.input_mode == InputMode::EditApiSecret,
        ),
    ];

    let (title, border) = if editing {
        ("Pinata Credentials (editing)", Color::Yellow)
    } else if credential.is_usable() {
        ("Pinata Credentials", Color::Cyan)
    } else {
        ("Pinata Credentials (missing: press e)", Color::Red)
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(panel, area);
}
