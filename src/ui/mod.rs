pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod status_bar;
pub mod styles;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::{render_header, render_list_pane};
use ratatui::Frame;
use status_bar::render_status_bar;

/// Main render function - draws the entire UI from the current list snapshot
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size(), app.show_hints);

    render_header(f, app, layout.header_area);
    render_list_pane(f, app, layout.list_area);
    render_input_form(f, app, layout.entry_area);
    render_status_bar(f, app, layout.status_area);

    if let Some(area) = layout.keybindings_area {
        render_keybindings(f, app.ui_mode, area);
    }
}
