use std::sync::{Arc, mpsc};
use std::thread;

use image::DynamicImage;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info, warn};

use crate::app::category::Category;
use crate::app::tmdb::{Movie, MovieCatalog};
use crate::app::utils::{MovieCard, Poster, movie_card};
use crate::error::FetchError;

pub enum CatalogMessage {
    Listing {
        request_id: u64,
        category: Category,
        result: Result<Vec<Movie>, FetchError>,
    },
    Poster {
        movie_id: u64,
        result: Result<DynamicImage, FetchError>,
    },
}

/// Everything the main screen renders from.
#[derive(Debug)]
pub struct ViewState {
    pub category: Category,
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the content area shows. Loading wins over error, error over grid.
#[derive(Debug, PartialEq)]
pub enum ViewBranch<'a> {
    Loading,
    Error(&'a str),
    Grid(&'a [Movie]),
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: Category::Popular,
            movies: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl ViewState {
    pub fn branch(&self) -> ViewBranch<'_> {
        if self.loading {
            ViewBranch::Loading
        } else if let Some(error) = &self.error {
            ViewBranch::Error(error)
        } else {
            ViewBranch::Grid(&self.movies)
        }
    }

    fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn apply_listing(&mut self, result: Result<Vec<Movie>, FetchError>) {
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.error = None;
            }
            Err(err) => {
                // Previous movies stay; the banner hides them.
                self.error = Some(err.banner_message());
            }
        }
        self.loading = false;
    }
}

pub struct App {
    pub view: ViewState,
    pub selected_movie_index: usize,
    /// Columns used by the last grid render; vertical moves step by this.
    pub grid_columns: usize,
    pub throbber_state: ThrobberState,
    pub loading_poster: bool,
    pub poster_protocol: Option<StatefulProtocol>,
    pub exit: bool,
    poster_movie_id: Option<u64>,
    catalog: Arc<dyn MovieCatalog>,
    image_base_url: String,
    picker: Option<Picker>,
    sender: mpsc::Sender<CatalogMessage>,
    receiver: mpsc::Receiver<CatalogMessage>,
    latest_request: u64,
}

impl App {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        image_base_url: impl Into<String>,
        picker: Option<Picker>,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            view: ViewState::default(),
            selected_movie_index: 0,
            grid_columns: 1,
            throbber_state: ThrobberState::default(),
            loading_poster: false,
            poster_protocol: None,
            exit: false,
            poster_movie_id: None,
            catalog,
            image_base_url: image_base_url.into(),
            picker,
            sender,
            receiver,
            latest_request: 0,
        }
    }

    /// Initial fetch for the default category.
    pub fn mount(&mut self) {
        self.fetch_movies();
    }

    /// Switches category and refetches. Re-selecting the current category is a no-op.
    pub fn select_category(&mut self, category: Category) -> bool {
        if category == self.view.category {
            return false;
        }
        self.view.category = category;
        self.fetch_movies();
        true
    }

    pub fn next_category(&mut self) {
        self.select_category(self.view.category.next());
    }

    pub fn previous_category(&mut self) {
        self.select_category(self.view.category.previous());
    }

    pub fn fetch_movies(&mut self) {
        self.latest_request += 1;
        let request_id = self.latest_request;
        let category = self.view.category;
        self.view.begin_fetch();

        info!(request_id, category = category.slug(), "fetching movies");

        let catalog = Arc::clone(&self.catalog);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = catalog.fetch_listing(category);
            let _ = sender.send(CatalogMessage::Listing {
                request_id,
                category,
                result,
            });
        });
    }

    /// Applies every message the workers have sent since the last frame.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: CatalogMessage) {
        match message {
            CatalogMessage::Listing {
                request_id,
                category,
                result,
            } => {
                if request_id != self.latest_request {
                    debug!(
                        request_id,
                        latest = self.latest_request,
                        category = category.slug(),
                        "discarding stale listing"
                    );
                    return;
                }

                match &result {
                    Ok(movies) => {
                        info!(count = movies.len(), category = category.slug(), "listing loaded")
                    }
                    Err(err) => warn!(error = %err, category = category.slug(), "listing failed"),
                }

                let loaded = result.is_ok();
                self.view.apply_listing(result);

                // The grid is hidden behind the banner on failure; keep the selection.
                if loaded {
                    self.selected_movie_index = 0;
                    self.poster_movie_id = None;
                    self.request_poster();
                }
            }
            CatalogMessage::Poster { movie_id, result } => {
                if self.poster_movie_id != Some(movie_id) {
                    debug!(movie_id, "discarding poster for unselected movie");
                    return;
                }
                self.loading_poster = false;

                match result {
                    Ok(image) => {
                        if let Some(picker) = &self.picker {
                            self.poster_protocol = Some(picker.new_resize_protocol(image));
                        }
                    }
                    Err(err) => warn!(movie_id, error = %err, "poster download failed"),
                }
            }
        }
    }

    pub fn cards(&self) -> Vec<MovieCard> {
        self.view
            .movies
            .iter()
            .map(|movie| movie_card(movie, &self.image_base_url))
            .collect()
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.view.movies.get(self.selected_movie_index)
    }

    pub fn next_movie(&mut self) {
        let movie_count = self.view.movies.len();
        if movie_count == 0 {
            return;
        }

        self.select_movie((self.selected_movie_index + 1) % movie_count);
    }

    pub fn previous_movie(&mut self) {
        let movie_count = self.view.movies.len();
        if movie_count == 0 {
            return;
        }

        if self.selected_movie_index == 0 {
            self.select_movie(movie_count - 1);
        } else {
            self.select_movie(self.selected_movie_index - 1);
        }
    }

    pub fn movie_down(&mut self) {
        let target = self.selected_movie_index + self.grid_columns.max(1);
        if target < self.view.movies.len() {
            self.select_movie(target);
        }
    }

    pub fn movie_up(&mut self) {
        if let Some(target) = self.selected_movie_index.checked_sub(self.grid_columns.max(1)) {
            self.select_movie(target);
        }
    }

    pub fn on_tick(&mut self) {
        if self.view.loading || self.loading_poster {
            self.throbber_state.calc_next();
        }
    }

    fn select_movie(&mut self, index: usize) {
        if index == self.selected_movie_index {
            return;
        }
        self.selected_movie_index = index;
        self.request_poster();
    }

    /// Starts a poster download for the selected movie unless it is already
    /// shown or in flight.
    fn request_poster(&mut self) {
        let Some((movie_id, poster)) = self
            .selected_movie()
            .map(|movie| (movie.id, movie_card(movie, &self.image_base_url).poster))
        else {
            self.poster_movie_id = None;
            self.poster_protocol = None;
            self.loading_poster = false;
            return;
        };

        if self.poster_movie_id == Some(movie_id) {
            return;
        }
        self.poster_movie_id = Some(movie_id);
        self.poster_protocol = None;
        self.loading_poster = false;

        let Poster::Image(url) = poster else {
            return;
        };
        if self.picker.is_none() {
            return;
        }

        self.loading_poster = true;
        let catalog = Arc::clone(&self.catalog);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = catalog.fetch_poster(&url);
            let _ = sender.send(CatalogMessage::Poster { movie_id, result });
        });
    }
}
