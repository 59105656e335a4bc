use chrono::{Datelike, NaiveDate};

use crate::app::tmdb::{Movie, poster_url};

/// Shown in place of a missing release year.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum Poster {
    Image(String),
    Placeholder,
}

/// Display form of one movie in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub poster: Poster,
    pub rating: String,
    pub year: String,
}

pub fn movie_card(movie: &Movie, image_base_url: &str) -> MovieCard {
    let poster = match movie.poster_path.as_deref() {
        Some(path) if !path.is_empty() => Poster::Image(poster_url(image_base_url, path)),
        _ => Poster::Placeholder,
    };

    MovieCard {
        title: movie.title.clone(),
        poster,
        rating: format_rating(movie.vote_average),
        year: release_year(movie.release_date.as_deref()),
    }
}

/// One decimal, halves rounded away from zero (7.85 -> "7.9").
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", (vote_average * 10.0).round() / 10.0)
}

pub fn release_year(release_date: Option<&str>) -> String {
    let Some(date) = release_date.map(str::trim).filter(|d| !d.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return parsed.year().to_string();
    }

    match date.get(..4) {
        Some(year) if year.chars().all(|c| c.is_ascii_digit()) => year.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
