//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal state is
//! checked first (notification, delete prompt, text inputs), then the
//! normal-mode bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use pintui::logic;
use pintui::model::{InputMode, VimCommandState};

use crate::App;

const PAGE_SIZE: usize = 10;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.has_modal() {
        handle_modal_key(app, key);
        return;
    }

    match app.model.ui.input_mode {
        InputMode::EditApiKey | InputMode::EditApiSecret => handle_credential_key(app, key),
        _ => handle_normal_key(app, key),
    }
}

/// Modals in precedence order: notification, delete prompt, path prompt
fn handle_modal_key(app: &mut App, key: KeyEvent) {
    // Notifications block everything until acknowledged
    if app.model.ui.current_notification().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.model.ui.dismiss_notification();
        }
        return;
    }

    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            // Ignore other keys while prompt is showing
            _ => {}
        }
        return;
    }

    if app.model.ui.input_mode == InputMode::EnterPath {
        handle_path_key(app, key);
    }
}

fn handle_credential_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.model.ui.end_credential_edit(),
        KeyCode::Enter => app.save_credentials(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.toggle_credential_field()
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.show_secrets = !app.model.ui.show_secrets;
        }
        _ => edit_text(app, key),
    }
}

fn handle_path_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_path_prompt(),
        KeyCode::Enter => app.submit_path_prompt(),
        _ => edit_text(app, key),
    }
}

/// Typing and backspace into whichever field is active
fn edit_text(app: &mut App, key: KeyEvent) {
    let Some(field) = app.model.ui.active_input() else {
        return;
    };

    match key.code {
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.push(c);
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Any key other than 'g' ends a pending 'gg'
    let waiting_for_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    if app.model.ui.vim_mode && key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('r') => {
            app.refresh();
        }
        KeyCode::Char('u') => {
            app.upload();
        }
        KeyCode::Char('o') | KeyCode::Char('a') => {
            app.open_path_prompt();
        }
        KeyCode::Char('x') => {
            app.clear_staged_file();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete();
        }
        KeyCode::Char('c') | KeyCode::Char('y') => {
            app.copy_selected_link();
        }
        KeyCode::Char('e') => {
            app.start_credential_edit();
        }
        KeyCode::Char('v') => {
            app.verify_credentials();
        }
        KeyCode::Char('F') => {
            app.forget_credentials();
        }
        KeyCode::Char('t') => {
            app.model.ui.display_mode = logic::ui::cycle_display_mode(app.model.ui.display_mode);
        }
        // Vim keybindings
        KeyCode::Char('j') if app.model.ui.vim_mode => {
            app.next_item();
        }
        KeyCode::Char('k') if app.model.ui.vim_mode => {
            app.previous_item();
        }
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if waiting_for_g {
                // gg - jump to first
                app.jump_to_first();
                app.model.ui.vim_command_state = VimCommandState::None;
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if app.model.ui.vim_mode => {
            app.jump_to_last();
        }
        // Standard navigation keys
        KeyCode::Up => app.previous_item(),
        KeyCode::Down => app.next_item(),
        KeyCode::PageUp => app.page_up(PAGE_SIZE),
        KeyCode::PageDown => app.page_down(PAGE_SIZE),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        _ => {}
    }
}
