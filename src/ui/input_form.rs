use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{
    border_style, entry_style, focused_border_style, placeholder_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Take out the trash...";

/// Render the entry field for new items
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::Entry;

    let mut spans = vec![Span::raw("> ")];
    if app.entry.is_empty() && !editing {
        spans.push(Span::styled(PLACEHOLDER, placeholder_style()));
    } else {
        spans.push(Span::styled(app.entry.text.as_str(), entry_style()));
    }
    if editing {
        spans.push(Span::styled("█", entry_style())); // Cursor
    }

    let border = if editing {
        focused_border_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" New todo ", title_style())),
    );

    f.render_widget(paragraph, area);
}
