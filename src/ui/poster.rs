use crate::app::App;
use crate::app::utils::{format_rating, release_year};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber};

use super::movie_grid::PLACEHOLDER_GLYPH;

/// Renders the selected movie's poster and details next to the grid
pub fn render_poster_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let outer_block = Block::default().title("Detail").borders(Borders::ALL);

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    if app.selected_movie().is_none() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Poster
            Constraint::Min(4),         // Info
        ])
        .split(inner_area);

    render_poster_section(frame, chunks[0], app);
    render_info_section(frame, chunks[1], app);
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, app: &mut App) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");
    let inner_area = poster_block.inner(area);
    frame.render_widget(poster_block, area);

    if app.loading_poster {
        let throbber = Throbber::default()
            .label("Downloading poster...")
            .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .throbber_set(BRAILLE_SIX);

        frame.render_stateful_widget(throbber, inner_area, &mut app.throbber_state);
    } else if let Some(protocol) = &mut app.poster_protocol {
        let image = StatefulImage::<StatefulProtocol>::default()
            .resize(Resize::Fit(None));

        frame.render_stateful_widget(image, inner_area, protocol);
    } else {
        let placeholder_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                PLACEHOLDER_GLYPH,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let placeholder_paragraph = Paragraph::new(placeholder_text)
            .alignment(Alignment::Center);

        frame.render_widget(placeholder_paragraph, inner_area);
    }
}

/// Renders title, rating, year and overview of the selected movie
fn render_info_section(frame: &mut Frame, area: Rect, app: &App) {
    let Some(movie) = app.selected_movie() else {
        return;
    };

    let mut content = vec![
        Line::from(Span::styled(
            movie.title.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format_rating(movie.vote_average),
                Style::default()
                    .fg(get_rating_color(movie.vote_average))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                release_year(movie.release_date.as_deref()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    if !movie.overview.is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            movie.overview.as_str(),
            Style::default().fg(Color::White),
        )));
    }

    let content_paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true });

    frame.render_widget(content_paragraph, area);
}

/// Helper function to get color based on the average vote
fn get_rating_color(rating: f64) -> Color {
    if rating >= 7.0 {
        Color::Green
    } else if rating >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
