use crate::models::{Credentials, PasswordChange, RecommendationQuery};

use super::{handlers, Outcome, Region, UiState};

/// One user interaction with a control, carrying the values it submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RecommendSubmitted(RecommendationQuery),
    TopRatedClicked,
    NowPlayingClicked,
    SearchClicked(String),
    CreateAccountSubmitted(Credentials),
    LoginSubmitted(Credentials),
    UpdatePasswordSubmitted(PasswordChange),
}

impl Event {
    /// Region the event's handler writes to
    pub fn region(&self) -> Region {
        match self {
            Event::RecommendSubmitted(_) => Region::Results,
            Event::TopRatedClicked | Event::NowPlayingClicked | Event::SearchClicked(_) => {
                Region::AdditionalResults
            }
            Event::CreateAccountSubmitted(_) => Region::CreateAccountFeedback,
            Event::LoginSubmitted(_) => Region::LoginFeedback,
            Event::UpdatePasswordSubmitted(_) => Region::UpdatePasswordFeedback,
        }
    }
}

/// Routes an event to its handler and puts the result on screen
///
/// Never fails: every error has already become a view by the time this
/// returns.
pub async fn dispatch(state: &UiState, event: Event) -> Outcome {
    tracing::debug!(region = ?event.region(), "Dispatching event");

    let outcome = match event {
        Event::RecommendSubmitted(query) => handlers::recommend(state, query).await,
        Event::TopRatedClicked => handlers::top_rated(state).await,
        Event::NowPlayingClicked => handlers::now_playing(state).await,
        Event::SearchClicked(query) => handlers::search(state, &query).await,
        Event::CreateAccountSubmitted(credentials) => {
            handlers::create_account(state, credentials).await
        }
        Event::LoginSubmitted(credentials) => handlers::login(state, credentials).await,
        Event::UpdatePasswordSubmitted(change) => handlers::update_password(state, change).await,
    };

    state
        .surface
        .show(outcome.region, outcome.view.clone())
        .await;

    outcome
}
