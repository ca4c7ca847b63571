use ratatui::Frame;

use pintui::model::InputMode;

use crate::App;

use super::{
    credentials_panel, details, dialogs, file_list, layout, legend, status_bar, toast,
    upload_panel,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let model = &app.model;
    let size = f.area();

    let selected = model.selected_record();
    let legend_height = legend::calculate_legend_height(
        size.width,
        model.ui.vim_mode,
        model.ui.input_mode,
        selected.is_some(),
        model.registry.selected_file.is_some(),
    );
    let layout_info = layout::calculate_layout(size, legend_height);

    credentials_panel::render_credentials_panel(
        f,
        layout_info.credentials_area,
        &model.credential,
        &model.ui,
    );

    upload_panel::render_upload_panel(f, layout_info.upload_area, &model.registry);

    file_list::render_file_list(
        f,
        layout_info.list_area,
        &model.registry,
        model.ui.selected_index,
        model.ui.display_mode,
    );

    details::render_details(f, layout_info.details_area, selected);

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.input_mode,
        selected.is_some(),
        model.registry.selected_file.is_some(),
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &model.registry,
        model.ui.display_mode,
        model.ui.config_path.as_deref(),
    );

    // Modals on top, most urgent last
    if model.ui.input_mode == InputMode::EnterPath {
        dialogs::render_path_prompt(f, &model.ui.path_draft);
    }

    if let Some(confirmation) = &model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, confirmation);
    }

    if let Some(notification) = model.ui.current_notification() {
        dialogs::render_notification(f, notification, model.ui.notifications.len() - 1);
    }

    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
