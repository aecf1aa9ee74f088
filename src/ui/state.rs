use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::MovieApi;

use super::View;

/// Places on screen a handler can write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Output of the recommendation form
    Results,
    /// Output of the top-rated, now-playing, and search controls
    AdditionalResults,
    CreateAccountFeedback,
    LoginFeedback,
    UpdatePasswordFeedback,
}

/// What is currently shown in each region
///
/// Writes replace the previous view wholesale. Two actions racing for the same
/// region end with whichever response landed last.
#[derive(Clone, Default)]
pub struct DisplaySurface {
    inner: Arc<RwLock<HashMap<Region, View>>>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn show(&self, region: Region, view: View) {
        self.inner.write().await.insert(region, view);
    }

    pub async fn current(&self, region: Region) -> Option<View> {
        self.inner.read().await.get(&region).cloned()
    }

    pub async fn clear(&self, region: Region) {
        self.inner.write().await.remove(&region);
    }
}

/// Everything a handler needs
#[derive(Clone)]
pub struct UiState {
    pub api: Arc<dyn MovieApi>,
    pub surface: DisplaySurface,
    pub redirect_target: String,
    pub redirect_delay: Duration,
}

impl UiState {
    pub fn new(api: Arc<dyn MovieApi>, config: &Config) -> Self {
        Self {
            api,
            surface: DisplaySurface::new(),
            redirect_target: config.redirect_target.clone(),
            redirect_delay: config.redirect_delay(),
        }
    }
}
