pub mod events;
pub mod handlers;
pub mod state;
pub mod view;

pub use events::{dispatch, Event};
pub use state::{DisplaySurface, Region, UiState};
pub use view::{Outcome, Redirect, Tone, View};
