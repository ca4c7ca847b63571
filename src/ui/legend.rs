use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pintui::model::InputMode;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    input_mode: InputMode,
    has_selection: bool,
    has_staged_file: bool,
) -> Vec<Span<'static>> {
    match input_mode {
        InputMode::EditApiKey | InputMode::EditApiSecret => {
            return vec![
                key("Tab"),
                Span::raw(":Switch field  "),
                key("^S"),
                Span::raw(":Show/Hide  "),
                key("Enter"),
                Span::raw(":Save  "),
                key("Esc"),
                Span::raw(":Cancel"),
            ];
        }
        InputMode::EnterPath => {
            return vec![
                key("Enter"),
                Span::raw(":Stage file  "),
                key("Esc"),
                Span::raw(":Cancel"),
            ];
        }
        InputMode::Normal => {}
    }

    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("jk"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![key("↑/↓"), Span::raw(":Nav  ")]);
    }

    hotkey_spans.extend(vec![key("o"), Span::raw(":Choose file  ")]);

    if has_staged_file {
        hotkey_spans.extend(vec![
            key("u"),
            Span::raw(":Upload  "),
            key("x"),
            Span::raw(":Unstage  "),
        ]);
    }

    // Record actions only make sense with a selection
    if has_selection {
        hotkey_spans.extend(vec![
            key("c"),
            Span::raw(":Copy link  "),
            key("d"),
            Span::raw(":Delete  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("r"),
        Span::raw(":Refresh  "),
        key("e"),
        Span::raw(":Edit keys  "),
        key("v"),
        Span::raw(":Verify keys  "),
        key("F"),
        Span::raw(":Forget keys  "),
        key("t"),
        Span::raw(":Info  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend (changes with vim mode and input mode)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    input_mode: InputMode,
    has_selection: bool,
    has_staged_file: bool,
) {
    let line = Line::from(build_hotkey_spans(
        vim_mode,
        input_mode,
        has_selection,
        has_staged_file,
    ));

    let legend = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    input_mode: InputMode,
    has_selection: bool,
    has_staged_file: bool,
) -> u16 {
    // line_count() doesn't account for borders, so count without the block
    let line = Line::from(build_hotkey_spans(
        vim_mode,
        input_mode,
        has_selection,
        has_staged_file,
    ));
    let paragraph = Paragraph::new(vec![line]).wrap(ratatui::widgets::Wrap { trim: false });

    let line_count = paragraph.line_count(terminal_width.saturating_sub(2));

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
