use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the header/title block at the top of the screen
pub fn render_header(frame: &mut Frame, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let lines = vec![
        Line::from(Span::styled(
            "🎬 TMDB Movie App",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Jelajahi koleksi film dari The Movie Database",
            Style::default().fg(Color::Gray),
        )),
    ];

    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(title_block);

    frame.render_widget(title, area);
}
