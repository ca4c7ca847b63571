//! Navigation Methods
//!
//! Moving the selection through the file list.

use pintui::logic;

use crate::App;

impl App {
    fn move_selection(&mut self, delta: isize) {
        self.model.ui.selected_index = logic::ui::move_selection(
            self.model.ui.selected_index,
            self.model.registry.files.len(),
            delta,
        );
    }

    pub(crate) fn next_item(&mut self) {
        self.move_selection(1);
    }

    pub(crate) fn previous_item(&mut self) {
        self.move_selection(-1);
    }

    pub(crate) fn page_down(&mut self, page_size: usize) {
        self.move_selection(page_size as isize);
    }

    pub(crate) fn page_up(&mut self, page_size: usize) {
        self.move_selection(-(page_size as isize));
    }

    pub(crate) fn jump_to_first(&mut self) {
        if !self.model.registry.files.is_empty() {
            self.model.ui.selected_index = Some(0);
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        let len = self.model.registry.files.len();
        if len > 0 {
            self.model.ui.selected_index = Some(len - 1);
        }
    }
}
