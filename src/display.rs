use std::fmt::Display;

use crate::models::{CatalogMovie, RecommendedMovie};

pub const NO_TRAILER: &str = "No trailer available";
pub const NO_POSTER: &str = "No poster available";
pub const NO_PROVIDERS: &str = "Streaming Availability: Not available";

/// One movie as the user sees it
///
/// Every optional field renders as either its value or an explicit
/// "unavailable" line, so a sparse movie never produces a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub heading: String,
    pub lines: Vec<String>,
}

impl MovieCard {
    pub fn from_recommended(movie: &RecommendedMovie) -> Self {
        let trailer = match movie.trailer_url() {
            Some(url) => format!("Trailer: {}", url),
            None => NO_TRAILER.to_string(),
        };
        let poster = match movie.poster_url() {
            Some(url) => format!("Poster: {}", url),
            None => NO_POSTER.to_string(),
        };
        let providers = if movie.providers().is_empty() {
            NO_PROVIDERS.to_string()
        } else {
            format!("Available on: {}", movie.providers().join(", "))
        };

        Self {
            heading: format!("{} ({})", movie.title(), movie.year()),
            lines: vec![
                format!("Rating: {}", movie.rating()),
                format!("Genre: {}", movie.genre()),
                trailer,
                poster,
                providers,
            ],
        }
    }

    pub fn from_catalog(movie: &CatalogMovie) -> Self {
        let poster = match movie.poster_url() {
            Some(url) => format!("Poster: {}", url),
            None => NO_POSTER.to_string(),
        };

        Self {
            heading: format!("{} ({})", movie.title(), movie.year()),
            lines: vec![format!("Rating: {}", movie.rating()), poster],
        }
    }
}

impl Display for MovieCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heading)?;
        for line in &self.lines {
            write!(f, ", {}", line)?;
        }
        Ok(())
    }
}

impl From<&RecommendedMovie> for MovieCard {
    fn from(movie: &RecommendedMovie) -> Self {
        Self::from_recommended(movie)
    }
}

impl From<&CatalogMovie> for MovieCard {
    fn from(movie: &CatalogMovie) -> Self {
        Self::from_catalog(movie)
    }
}
