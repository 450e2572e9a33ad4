//! Search flow state, independent of the DOM.
//!
//! The UI controller feeds events in (submit, response, retry, reset) and
//! renders whatever [`SearchPhase`] results.
use crate::api::{MovieDetail, RecommendationResponse};
use crate::constants::CARD_STAGGER_SEC;
use crate::error::ApiError;
use crate::poster;

/// Everything a result card displays, already formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub poster_url: String,
    pub fallback_poster_url: String,
    pub match_badge: String,
    pub year: String,
    pub rating: String,
    pub animation_delay_sec: f64,
}

impl MovieCard {
    pub fn from_detail(movie: &MovieDetail, index: usize) -> Self {
        Self {
            title: movie.title.clone(),
            poster_url: poster::poster_for(
                movie.poster_url.as_deref(),
                movie.genres.as_deref(),
                &movie.title,
            ),
            fallback_poster_url: poster::default_poster_url().to_owned(),
            match_badge: format!("{}% Match", movie.match_percentage),
            year: format_year(movie.year.as_deref()),
            rating: format_rating(movie.rating),
            animation_delay_sec: index as f64 * CARD_STAGGER_SEC,
        }
    }

    pub fn animation_delay_css(&self) -> String {
        format!("{}s", self.animation_delay_sec)
    }
}

pub fn format_year(year: Option<&str>) -> String {
    match year.map(str::trim) {
        Some(y) if !y.is_empty() => y.to_owned(),
        _ => "N/A".to_owned(),
    }
}

/// One decimal place; a zero rating means "unrated".
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r != 0.0 && r.is_finite() => format!("{:.1}", r),
        _ => "N/A".to_owned(),
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    Loaded {
        matched_movie: String,
        cards: Vec<MovieCard>,
    },
    Failed {
        message: String,
    },
}

/// Identifies one submitted search. Responses carrying an outdated ticket
/// are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
pub struct SearchState {
    phase: SearchPhase,
    results_visible: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Start a search for the trimmed input. Blank input starts nothing.
    pub fn submit(&mut self, raw_query: &str) -> Option<SearchTicket> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }
        self.generation += 1;
        self.results_visible = true;
        self.phase = SearchPhase::Loading {
            query: query.to_owned(),
        };
        Some(SearchTicket(self.generation))
    }

    /// Apply the outcome of the search identified by `ticket`. Returns false
    /// when the ticket is stale and nothing changed.
    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<RecommendationResponse, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation || !matches!(self.phase, SearchPhase::Loading { .. }) {
            return false;
        }
        self.phase = match outcome {
            Ok(response) => SearchPhase::Loaded {
                cards: response
                    .recommendations
                    .iter()
                    .enumerate()
                    .map(|(i, m)| MovieCard::from_detail(m, i))
                    .collect(),
                matched_movie: response.matched_movie,
            },
            Err(e) => SearchPhase::Failed {
                message: e.user_message(),
            },
        };
        true
    }

    /// Retry button: clear the error and let the user edit the query.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, SearchPhase::Failed { .. }) {
            self.phase = SearchPhase::Idle;
        }
    }

    /// Logo click: back to the empty page. Any search in flight is orphaned.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.results_visible = false;
        self.phase = SearchPhase::Idle;
    }
}
