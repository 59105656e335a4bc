mod app;
pub mod category;
pub mod tmdb;
pub mod utils;

pub use app::{App, ViewBranch};
