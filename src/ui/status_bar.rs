use crate::app::AppState;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the mode label and the latest status message
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(format!(" {} ", app.ui_mode.label()), hint_style())];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(message.as_str(), error_style()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
