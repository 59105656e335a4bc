use crate::app::{App, ViewBranch};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::categories::render_categories;
use super::error_banner::render_error_banner;
use super::footer::render_footer;
use super::header::render_header;
use super::loading::render_loading;
use super::movie_grid::render_movie_grid;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Create the main layout: header, category tabs, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(3),  // Categories
            Constraint::Min(1),     // Content
            Constraint::Length(3),  // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_categories(frame, app.view.category, chunks[1]);

    // Exactly one of spinner, banner or grid
    match app.view.branch() {
        ViewBranch::Loading => {
            render_loading(frame, &mut app.throbber_state, app.view.category, chunks[2]);
        }
        ViewBranch::Error(message) => {
            render_error_banner(frame, message, chunks[2]);
        }
        ViewBranch::Grid(_) => {
            render_movie_grid(frame, app, chunks[2]);
        }
    }

    render_footer(frame, app, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::category::Category;
    use crate::app::tmdb::{Movie, MovieCatalog};
    use crate::error::FetchError;
    use crate::ui::movie_grid::{PLACEHOLDER_GLYPH, POSTER_GLYPH};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    struct NoCatalog;

    impl MovieCatalog for NoCatalog {
        fn fetch_listing(&self, _category: Category) -> Result<Vec<Movie>, FetchError> {
            Ok(Vec::new())
        }

        fn fetch_poster(&self, _url: &str) -> Result<image::DynamicImage, FetchError> {
            Err(FetchError::EmptyBody)
        }
    }

    fn app() -> App {
        App::new(Arc::new(NoCatalog), "https://img", None)
    }

    fn movie(id: u64, title: &str, poster_path: Option<&str>) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: poster_path.map(str::to_string),
            vote_average: 8.0,
            release_date: Some("2021-01-01".to_string()),
            overview: String::new(),
        }
    }

    fn rendered(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| ui(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn header_and_tabs_are_always_drawn() {
        let screen = rendered(&mut app());
        assert!(screen.contains("TMDB Movie App"));
        for category in Category::ALL {
            assert!(screen.contains(category.label()));
        }
    }

    #[test]
    fn loading_hides_grid_and_banner() {
        let mut app = app();
        app.view.movies = vec![movie(1, "Stale Title", None)];
        app.view.error = Some("old failure".to_string());

        let screen = rendered(&mut app);
        assert!(screen.contains("Memuat film"));
        assert!(!screen.contains("Stale Title"));
        assert!(!screen.contains("old failure"));
    }

    #[test]
    fn error_banner_replaces_grid() {
        let mut app = app();
        app.view.loading = false;
        app.view.movies = vec![movie(1, "Stale Title", None)];
        app.view.error = Some("Request failed with status code 401".to_string());

        let screen = rendered(&mut app);
        assert!(screen.contains("Request failed with status code 401"));
        assert!(!screen.contains("Stale Title"));
    }

    #[test]
    fn grid_shows_card_details() {
        let mut app = app();
        app.view.loading = false;
        app.view.movies = vec![movie(1, "Arrival", Some("/a.jpg"))];

        let screen = rendered(&mut app);
        assert!(screen.contains("Arrival"));
        assert!(screen.contains("8.0"));
        assert!(screen.contains("2021"));
        assert!(screen.contains(POSTER_GLYPH));
    }

    #[test]
    fn missing_poster_draws_placeholder() {
        let mut app = app();
        app.view.loading = false;
        app.view.movies = vec![movie(1, "Arrival", None)];

        let screen = rendered(&mut app);
        assert!(screen.contains(PLACEHOLDER_GLYPH));
        assert!(!screen.contains(POSTER_GLYPH));
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let mut app = app();
        app.view.loading = false;

        let screen = rendered(&mut app);
        assert!(screen.contains("Tidak ada film"));
        assert!(!screen.contains("ERROR"));
    }

    #[test]
    fn grid_render_records_column_count() {
        let mut app = app();
        app.view.loading = false;
        app.view.movies = (1..=6).map(|id| movie(id, "M", None)).collect();

        rendered(&mut app);
        assert!(app.grid_columns >= 2);
    }
}
