use crate::app::AppState;
use crate::domain::{checkbox, remaining_label, Item, UiMode};
use crate::ui::styles::{
    border_style, default_style, delete_style, done_style, focused_border_style, selected_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the title and the count of items left to do
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Simple Todo List", title_style())),
        Line::raw(remaining_label(app.items())),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render the list of items
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::Normal;

    let items: Vec<ListItem> = app
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if focused && idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_item_line(item)).style(style)
        })
        .collect();

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Todos ", title_style())),
    );

    let mut state = ListState::default();
    if focused && !app.items().is_empty() {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Format: [x] Learn JSX  ✕
fn create_item_line(item: &Item) -> Line<'static> {
    let text = if item.completed {
        Span::styled(item.text.clone(), done_style())
    } else {
        Span::raw(item.text.clone())
    };

    Line::from(vec![
        Span::raw(format!("{} ", checkbox(item))),
        text,
        Span::raw("  "),
        Span::styled("✕", delete_style()),
    ])
}
