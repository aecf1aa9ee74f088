use crate::{
    display::MovieCard,
    error::{ClientError, ClientResult, ErrorKind},
    models::{ApiResult, Credentials, PasswordChange, RecommendationQuery},
    services::validate_search_query,
};

use super::{Outcome, Redirect, Region, UiState, View};

const NO_RECOMMENDATIONS: &str = "No movies found. Try a different query.";
const NO_MOVIES: &str = "No movies found.";

// Movie handlers

/// Recommendation form submitted
pub async fn recommend(state: &UiState, query: RecommendationQuery) -> Outcome {
    let view = match state.api.recommend_movies(&query).await {
        Ok(movies) => movie_list(
            "Recommended Movies:",
            movies.iter().map(MovieCard::from).collect(),
            NO_RECOMMENDATIONS,
        ),
        Err(e) => failure_view(&e),
    };
    Outcome::new(Region::Results, view)
}

/// Top-rated button clicked
pub async fn top_rated(state: &UiState) -> Outcome {
    let view = match state.api.fetch_top_rated().await {
        Ok(movies) => movie_list(
            "Top-Rated Movies:",
            movies.iter().map(MovieCard::from).collect(),
            NO_MOVIES,
        ),
        Err(e) => failure_view(&e),
    };
    Outcome::new(Region::AdditionalResults, view)
}

/// Now-playing button clicked
pub async fn now_playing(state: &UiState) -> Outcome {
    let view = match state.api.fetch_now_playing().await {
        Ok(movies) => movie_list(
            "Now Playing Movies:",
            movies.iter().map(MovieCard::from).collect(),
            NO_MOVIES,
        ),
        Err(e) => failure_view(&e),
    };
    Outcome::new(Region::AdditionalResults, view)
}

/// Search button clicked
///
/// A blank query is answered here and never reaches the api.
pub async fn search(state: &UiState, raw_query: &str) -> Outcome {
    let query = match validate_search_query(raw_query) {
        Ok(query) => query,
        Err(e) => return Outcome::new(Region::AdditionalResults, failure_view(&e)),
    };

    let view = match state.api.search_movies(query).await {
        Ok(movies) => movie_list(
            &format!("Search Results for \"{}\":", query),
            movies.iter().map(MovieCard::from).collect(),
            NO_MOVIES,
        ),
        Err(e) => failure_view(&e),
    };
    Outcome::new(Region::AdditionalResults, view)
}

// Account handlers

/// Create-account form submitted; success schedules the one redirect
pub async fn create_account(state: &UiState, credentials: Credentials) -> Outcome {
    let result = state.api.create_account(&credentials).await;
    let outcome = account_outcome(
        Region::CreateAccountFeedback,
        &result,
        "Account created successfully!",
    );

    match result {
        Ok(ApiResult { ok: true, .. }) => outcome.with_redirect(Redirect {
            to: state.redirect_target.clone(),
            after: state.redirect_delay,
        }),
        _ => outcome,
    }
}

/// Login form submitted
pub async fn login(state: &UiState, credentials: Credentials) -> Outcome {
    let result = state.api.login(&credentials).await;
    let mut outcome = account_outcome(Region::LoginFeedback, &result, "Login successful!");

    if let (Ok(result), View::Feedback { details, .. }) = (&result, &mut outcome.view) {
        details.extend(
            result
                .previous_recommendations()
                .iter()
                .map(|rec| format!("Previously recommended: {}", rec.title())),
        );
    }

    outcome
}

/// Update-password form submitted
pub async fn update_password(state: &UiState, change: PasswordChange) -> Outcome {
    let result = state.api.update_password(&change).await;
    account_outcome(
        Region::UpdatePasswordFeedback,
        &result,
        "Password updated successfully!",
    )
}

// Helpers

fn movie_list(heading: &str, cards: Vec<MovieCard>, empty_message: &str) -> View {
    if cards.is_empty() {
        return View::Empty {
            heading: heading.to_string(),
            message: empty_message.to_string(),
        };
    }

    View::Movies {
        heading: heading.to_string(),
        entries: cards.iter().map(MovieCard::to_string).collect(),
    }
}

fn failure_view(error: &ClientError) -> View {
    match error.kind() {
        ErrorKind::Validation => View::Notice(error.user_message()),
        ErrorKind::Transport | ErrorKind::Server => {
            tracing::warn!(error = %error, "Action failed");
            View::error(error.user_message())
        }
    }
}

fn account_outcome(region: Region, result: &ClientResult<ApiResult>, success: &str) -> Outcome {
    let view = match result {
        Ok(result) if result.ok => View::success(success),
        Ok(result) => View::error(format!(
            "Error: {}",
            result.error.as_deref().unwrap_or_default()
        )),
        Err(e) => failure_view(e),
    };
    Outcome::new(region, view)
}
