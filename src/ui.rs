mod categories;
mod error_banner;
mod footer;
mod header;
mod loading;
mod movie_grid;
mod poster;
mod ui;

pub use ui::ui;
