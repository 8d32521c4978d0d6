use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub entry_area: Rect,
    pub status_area: Rect,
    pub keybindings_area: Option<Rect>,
}

/// Create the main layout
/// - Header: title and remaining count (2 rows)
/// - List pane (fills the rest)
/// - Entry field (3 rows, bordered)
/// - Status line (1 row)
/// - Keybindings bar (1 row, optional)
pub fn create_layout(area: Rect, show_hints: bool) -> MainLayout {
    let hints_height = if show_hints { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(hints_height),
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        list_area: chunks[1],
        entry_area: chunks[2],
        status_area: chunks[3],
        keybindings_area: show_hints.then_some(chunks[4]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 60, 20);
        let layout = create_layout(area, true);

        assert_eq!(layout.header_area.height, 2);
        assert_eq!(layout.entry_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.keybindings_area.map(|r| r.height), Some(1));
        assert_eq!(layout.list_area.y, 2);
        assert!(layout.list_area.height >= 3);
        assert!(layout.entry_area.y >= layout.list_area.y + layout.list_area.height);
    }

    #[test]
    fn test_create_layout_without_hints() {
        let area = Rect::new(0, 0, 60, 20);
        let layout = create_layout(area, false);

        assert!(layout.keybindings_area.is_none());
        assert!(layout.list_area.height >= 3);
    }
}
