use crate::app::App;
use crate::app::utils::{MovieCard, Poster};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::poster::render_poster_panel;

const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 5;
const MAX_COLUMNS: usize = 5;
/// Below this width the preview panel is dropped and the grid gets everything.
const PREVIEW_MIN_WIDTH: u16 = 80;

pub const PLACEHOLDER_GLYPH: &str = "🎞";
pub const POSTER_GLYPH: &str = "▣";

/// Number of card columns that fit in `width`, between 1 and 5.
pub fn grid_columns(width: u16) -> usize {
    usize::from(width / CARD_WIDTH).clamp(1, MAX_COLUMNS)
}

/// Renders the movie grid and, when there is room, the poster preview
pub fn render_movie_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let (grid_area, preview_area) = if area.width >= PREVIEW_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let category = app.view.category;
    let cards = app.cards();

    let grid_block = Block::default()
        .title(format!(
            "{} {} ({})",
            category.icon(),
            category.label(),
            cards.len()
        ))
        .borders(Borders::ALL);

    if cards.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Tidak ada film",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
        .block(grid_block);
        frame.render_widget(empty, grid_area);
    } else {
        let inner = grid_block.inner(grid_area);
        frame.render_widget(grid_block, grid_area);

        let columns = grid_columns(inner.width);
        app.grid_columns = columns;
        render_cards(frame, &cards, app.selected_movie_index, columns, inner);
    }

    if let Some(preview_area) = preview_area {
        render_poster_panel(frame, app, preview_area);
    }
}

fn render_cards(
    frame: &mut Frame,
    cards: &[MovieCard],
    selected: usize,
    columns: usize,
    area: Rect,
) {
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= cards.len() {
            break;
        }

        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (offset, card) in cards[start..].iter().take(columns).enumerate() {
            render_card(frame, card, start + offset == selected, cell_areas[offset]);
        }
    }
}

fn render_card(frame: &mut Frame, card: &MovieCard, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let poster_glyph = match card.poster {
        Poster::Image(_) => Span::styled(POSTER_GLYPH, Style::default().fg(Color::Magenta)),
        Poster::Placeholder => {
            Span::styled(PLACEHOLDER_GLYPH, Style::default().fg(Color::DarkGray))
        }
    };

    let content = vec![
        Line::from(vec![
            poster_glyph,
            Span::raw("  "),
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                card.rating.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.year.clone(), Style::default().fg(Color::Gray))),
    ];

    let card_widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(card_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(48), 2);
        assert_eq!(grid_columns(100), 4);
        assert_eq!(grid_columns(500), 5);
    }
}
