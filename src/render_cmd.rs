//! CLI command handler for rendering a timeline.
//!
//! Reads the whole dataset, renders the whole page in memory, then writes it
//! in one go. Nothing is written when decoding fails.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::TimelineResult;
use crate::timeline::{
    Dataset, EventType, filter_description, render_timeline_html, select_events,
    write_timeline_html,
};

/// Decode a JSON dataset and render it to an HTML document.
pub fn render(raw: &str, types: &[EventType]) -> TimelineResult<String> {
    let data = Dataset::from_json(raw)?;
    info!(
        period = %data.period,
        events = data.events.len(),
        factions = data.factions.len(),
        "decoded dataset"
    );

    let kept = select_events(&data.events, types).len();
    info!(
        filter = %filter_description(types),
        kept,
        dropped = data.events.len() - kept,
        "applied filter"
    );

    let html = render_timeline_html(&data, types);
    debug!(bytes = html.len(), "rendered timeline");
    Ok(html)
}

/// Run the render command.
///
/// # Arguments
/// * `input` - dataset JSON file, or stdin when `None`
/// * `output` - destination HTML file, or stdout when `None`
/// * `types` - event types to keep; empty keeps all
pub fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    types: Vec<EventType>,
) -> TimelineResult<()> {
    let raw = read_input(input.as_deref())?;
    let html = render(&raw, &types)?;

    match output {
        Some(path) => {
            write_timeline_html(&path, &html)?;
            info!(path = %path.display(), bytes = html.len(), "wrote timeline");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write timeline to stdout")?;
            debug!(bytes = html.len(), "wrote timeline to stdout");
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> TimelineResult<String> {
    let raw = match path {
        Some(path) => {
            debug!(path = %path.display(), "reading dataset");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset from {}", path.display()))?
        }
        None => {
            debug!("reading dataset from stdin");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read dataset from stdin")?;
            raw
        }
    };
    Ok(raw)
}
