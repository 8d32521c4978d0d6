use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Space check   "),
            Span::raw("x delete   "),
            Span::raw("a add   "),
            Span::raw("R reset   "),
            Span::raw("q quit"),
        ]),
        UiMode::Entry => Line::from(vec![
            Span::raw(" Enter submit   "),
            Span::raw("Esc/Tab back to list"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
