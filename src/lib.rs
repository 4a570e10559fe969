pub mod render_cmd;
pub mod timeline;

use thiserror::Error;

pub use timeline::{Dataset, Event, EventKind, EventType, render_timeline_html};

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("{0}")]
    Message(String),
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type TimelineResult<T> = Result<T, TimelineError>;
