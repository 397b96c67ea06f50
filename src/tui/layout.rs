use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Chat screen layout
pub struct AppLayout {
    pub sidebar_area: Rect,
    pub conversation_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Sidebar: 30% width (left)
    /// - Conversation: remaining width, all rows above the input box
    /// - Input box: 3 rows
    /// - Status bar: bottom row, full width
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // Sidebar + main
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(vertical_chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Conversation
                Constraint::Length(3), // Input box with border
            ])
            .split(horizontal_chunks[1]);

        Self {
            sidebar_area: horizontal_chunks[0],
            conversation_area: main_chunks[0],
            input_area: main_chunks[1],
            status_area: vertical_chunks[1],
        }
    }
}
