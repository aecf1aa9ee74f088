use std::fmt::Display;
use std::time::Duration;

use super::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Content of one display region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A heading followed by one rendered entry per movie
    Movies { heading: String, entries: Vec<String> },
    /// The request worked but nothing matched
    Empty { heading: String, message: String },
    /// Input rejected before anything was sent
    Notice(String),
    /// Result of an action, good or bad
    Feedback {
        tone: Tone,
        message: String,
        details: Vec<String>,
    },
}

impl View {
    pub fn success(message: impl Into<String>) -> Self {
        View::Feedback {
            tone: Tone::Success,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        View::Feedback {
            tone: Tone::Error,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            View::Feedback {
                tone: Tone::Error,
                ..
            }
        )
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Movies { heading, entries } => {
                write!(f, "{}", heading)?;
                for entry in entries {
                    write!(f, "\n- {}", entry)?;
                }
                Ok(())
            }
            View::Empty { heading, message } => write!(f, "{}\n{}", heading, message),
            View::Notice(message) => write!(f, "{}", message),
            View::Feedback {
                message, details, ..
            } => {
                write!(f, "{}", message)?;
                for detail in details {
                    write!(f, "\n  {}", detail)?;
                }
                Ok(())
            }
        }
    }
}

/// A navigation to perform once, after a delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub after: Duration,
}

impl Redirect {
    /// Waits out the delay and hands back the target
    pub async fn follow(self) -> String {
        tokio::time::sleep(self.after).await;
        self.to
    }
}

/// What a handler produced and where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub region: Region,
    pub view: View,
    pub redirect: Option<Redirect>,
}

impl Outcome {
    pub fn new(region: Region, view: View) -> Self {
        Self {
            region,
            view,
            redirect: None,
        }
    }

    pub fn with_redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = Some(redirect);
        self
    }
}
