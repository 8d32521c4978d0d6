use crate::domain::{Item, UiMode};
use crate::persistence::Settings;
use crate::store::Store;

/// Text of the entry field that has not been submitted yet
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub text: String,
}

impl EntryForm {
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Main application state
pub struct AppState {
    pub store: Store,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub entry: EntryForm,
    pub status_message: Option<String>,
    pub show_hints: bool,
}

impl AppState {
    pub fn new(store: Store, settings: &Settings) -> Self {
        Self {
            store,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            entry: EntryForm::default(),
            status_message: None,
            show_hints: settings.show_hints,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    /// Selected item, if the list isn't empty
    pub fn selected_item(&self) -> Option<&Item> {
        self.items().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.items().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.items().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Toggle completion of the selected item
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            let result = self.store.complete(&id);
            self.report(result);
        }
    }

    /// Delete the selected item
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            let result = self.store.delete(&id);
            self.report(result);
            self.clamp_selection();
        }
    }

    /// Put the seed list back
    pub fn reset(&mut self) {
        let result = self.store.reset();
        self.report(result);
        self.selected_index = 0;
    }

    /// Move focus to the entry field
    pub fn start_entry(&mut self) {
        self.ui_mode = UiMode::Entry;
    }

    /// Move focus back to the list, keeping any typed text
    pub fn leave_entry(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn entry_add_char(&mut self, c: char) {
        self.entry.push(c);
    }

    pub fn entry_backspace(&mut self) {
        self.entry.backspace();
    }

    /// Submit the entry field. Empty text is refused here, before it reaches
    /// the store.
    pub fn submit_entry(&mut self) {
        if self.entry.is_empty() {
            self.status_message = Some("Please fill out this field.".to_string());
            return;
        }

        let result = self.store.add(&self.entry.text);
        if result.is_ok() {
            self.entry.text.clear();
        }
        self.report(result);
        if !self.items().is_empty() {
            self.selected_index = self.items().len() - 1;
        }
    }

    /// Show the outcome of a store operation on the status line
    fn report(&mut self, result: Result<(), crate::store::StoreError>) {
        match result {
            Ok(()) => self.status_message = None,
            Err(e) => {
                tracing::error!("{}", e);
                self.status_message = Some(format!("Not saved: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::persistence::storage::{MemoryStorage, SharedMemory};

    fn create_test_app() -> AppState {
        let store = Store::initialize(
            "todos",
            Box::new(MemoryStorage::default()),
            Box::new(SequentialIds::default()),
        );
        AppState::new(store, &Settings::default())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.entry_add_char(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.items().len(), 3);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.entry.is_empty());
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();

        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 2);

        // Can't go past the end
        app.move_selection_down();
        assert_eq!(app.selected_index, 2);

        app.move_selection_up();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = create_test_app();
        app.move_selection_down();

        app.toggle_selected();
        assert!(app.items()[1].completed);
        assert!(!app.items()[0].completed);

        app.toggle_selected();
        assert!(!app.items()[1].completed);
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut app = create_test_app();
        app.move_selection_down();
        app.move_selection_down();

        app.delete_selected();
        assert_eq!(app.items().len(), 2);
        assert_eq!(app.selected_index, 1);

        app.delete_selected();
        app.delete_selected();
        assert!(app.items().is_empty());
        assert_eq!(app.selected_index, 0);

        // Nothing left to delete
        app.delete_selected();
        assert!(app.selected_item().is_none());
    }

    #[test]
    fn test_submit_entry() {
        let mut app = create_test_app();
        app.start_entry();
        type_text(&mut app, "Buy milkk");
        app.entry_backspace();

        app.submit_entry();

        assert_eq!(app.items().len(), 4);
        assert_eq!(app.items()[3].text, "Buy milk");
        assert!(app.entry.is_empty());
        assert_eq!(app.selected_index, 3);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_submit_empty_entry_is_refused() {
        let mut app = create_test_app();
        app.start_entry();

        app.submit_entry();

        assert_eq!(app.items().len(), 3);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please fill out this field.")
        );
    }

    #[test]
    fn test_leave_entry_keeps_draft() {
        let mut app = create_test_app();
        app.start_entry();
        type_text(&mut app, "Half");

        app.leave_entry();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.entry.text, "Half");
    }

    #[test]
    fn test_reset() {
        let mut app = create_test_app();
        app.delete_selected();
        app.move_selection_down();

        app.reset();

        assert_eq!(app.items().len(), 3);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_write_failure_shows_status() {
        let memory = SharedMemory::default();
        memory.0.borrow_mut().fail_writes = true;
        let store = Store::initialize(
            "todos",
            Box::new(memory),
            Box::new(SequentialIds::default()),
        );
        let mut app = AppState::new(store, &Settings::default());

        app.toggle_selected();

        assert!(!app.items()[0].completed);
        let status = app.status_message.clone().unwrap();
        assert!(status.starts_with("Not saved:"));
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let memory = SharedMemory::default();
        let store = Store::initialize(
            "todos",
            Box::new(memory.clone()),
            Box::new(SequentialIds::default()),
        );
        let mut app = AppState::new(store, &Settings::default());
        memory.0.borrow_mut().fail_writes = true;

        app.start_entry();
        type_text(&mut app, "Buy milk");
        app.submit_entry();

        assert_eq!(app.items().len(), 3);
        assert_eq!(app.entry.text, "Buy milk");
        assert!(app.status_message.is_some());

        // Once storage works again the same draft goes through
        memory.0.borrow_mut().fail_writes = false;
        app.submit_entry();
        assert_eq!(app.items()[3].text, "Buy milk");
        assert!(app.entry.is_empty());
    }
}
