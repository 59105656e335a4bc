use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if app.view.loading {
        "Loading movies... (Tab/1-4) category, (q) quit"
    } else if app.view.error.is_some() || app.view.movies.is_empty() {
        "(Tab/Shift-Tab) change category, (1-4) pick category, (q) quit"
    } else {
        "(←↑↓→/hjkl) move, (Tab/Shift-Tab) category, (1-4) pick category, (q) quit"
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(app);
    let bottom = Paragraph::new(Text::styled(
        instruction_text,
        Style::default().fg(Color::Gray),
    ))
    .block(bottom_block);

    frame.render_widget(bottom, area);
}
