use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movierec_client::{
    config::Config,
    error::ClientResult,
    models::{Credentials, HealthStatus, PasswordChange, RecommendationQuery},
    services::{HttpMovieApi, MovieApi},
    ui::{dispatch, Event, UiState},
};

#[derive(Parser, Debug)]
#[command(name = "movierec")]
#[command(about = "Movie recommendations and accounts from the command line")]
struct Cli {
    /// Backend base URL, overrides API_BASE_URL
    #[arg(long)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend movies matching the given filters
    Recommend {
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value = "")]
        rating: String,
        #[arg(long, default_value = "")]
        recency: String,
    },
    /// List top-rated movies
    TopRated,
    /// List movies now in theaters
    NowPlaying,
    /// Search movies by title
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Create a new account
    CreateAccount {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log in
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Change a password
    UpdatePassword {
        #[arg(short, long)]
        username: String,
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        new_password: String,
    },
    /// Check that the backend is up
    Health,
}

impl Command {
    fn into_event(self) -> Option<Event> {
        let event = match self {
            Command::Recommend {
                genre,
                rating,
                recency,
            } => Event::RecommendSubmitted(RecommendationQuery::new(genre, rating, recency)),
            Command::TopRated => Event::TopRatedClicked,
            Command::NowPlaying => Event::NowPlayingClicked,
            Command::Search { query } => Event::SearchClicked(query),
            Command::CreateAccount { username, password } => {
                Event::CreateAccountSubmitted(Credentials::new(username, password))
            }
            Command::Login { username, password } => {
                Event::LoginSubmitted(Credentials::new(username, password))
            }
            Command::UpdatePassword {
                username,
                old_password,
                new_password,
            } => Event::UpdatePasswordSubmitted(PasswordChange::new(
                username,
                old_password,
                new_password,
            )),
            Command::Health => return None,
        };
        Some(event)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movierec_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_base_url) = cli.api_base_url {
        config.api_base_url = api_base_url;
    }

    let api = Arc::new(HttpMovieApi::from_config(&config)?);

    let Some(event) = cli.command.into_event() else {
        let result = api.health().await;
        println!("{}", health_report(&result));
        if result.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    };

    let state = UiState::new(api, &config);
    let outcome = dispatch(&state, event).await;
    println!("{}", outcome.view);

    if let Some(redirect) = outcome.redirect {
        tracing::info!(to = %redirect.to, after = ?redirect.after, "Redirect scheduled");
        let target = redirect.follow().await;
        println!("Redirecting to {}", target);
    }

    if outcome.view.is_error() {
        std::process::exit(1);
    }

    Ok(())
}

/// One line describing the backend's health, or why it could not be checked
fn health_report(result: &ClientResult<HealthStatus>) -> String {
    match result {
        Ok(health) => format!("Backend status: {}", health.status),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            e.user_message()
        }
    }
}
