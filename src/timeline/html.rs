//! HTML document assembly for the timeline page.
//!
//! Produces a single self-contained file: inline CSS, inline SVG emblems and
//! a small static script for expanding cards and filtering by type.
//! Output is deterministic for a given dataset and filter.

use std::fs;
use std::path::Path;

use super::card::{html_escape, render_event_card};
use super::schema::{Dataset, Event, EventType};
use super::style::{badge_style, faction_emblem};
use crate::{TimelineError, TimelineResult};

/// Subtitle text used when no type filter is given.
pub const ALL_EVENTS: &str = "All Events";

/// Factions shown in the legend, in display order.
const LEGEND_FACTIONS: [(&str, &str); 3] = [
    ("york", "York"),
    ("lancaster", "Lancaster"),
    ("tudor", "Tudor"),
];

/// Client-side filter buttons after "All", in display order.
const FILTER_BUTTONS: [EventType; 4] = [
    EventType::Battle,
    EventType::Coronation,
    EventType::Death,
    EventType::Treaty,
];

/// Events that pass the type filter, in input order.
///
/// An empty filter keeps everything. Events with an unrecognized type never
/// match a non-empty filter.
pub fn select_events<'a>(events: &'a [Event], types: &[EventType]) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| {
            types.is_empty()
                || e.kind
                    .event_type()
                    .is_some_and(|ty| types.contains(&ty))
        })
        .collect()
}

/// Subtitle description of the active filter, e.g. "Battles, Treaties".
pub fn filter_description(types: &[EventType]) -> String {
    if types.is_empty() {
        return ALL_EVENTS.to_string();
    }
    types
        .iter()
        .map(|ty| ty.plural_label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_legend() -> String {
    let mut html = String::new();
    html.push_str(
        r#"<div class="legend">
<div class="legend-section">
<span class="legend-title">Factions</span>
<div class="legend-items">
"#,
    );
    for (key, label) in LEGEND_FACTIONS {
        html.push_str(&format!(
            "<div class=\"legend-item\">{}<span>{label}</span></div>\n",
            faction_emblem(key, 28)
        ));
    }
    html.push_str(
        r#"</div>
</div>
<div class="legend-section">
<span class="legend-title">Filter by Event Type</span>
<div class="filter-buttons">
<button class="filter-btn active" data-type="all">All</button>
"#,
    );
    for ty in FILTER_BUTTONS {
        let style = badge_style(Some(ty));
        let text_var = if style.foreground == "#fff" {
            String::new()
        } else {
            format!(" --btn-text: {};", style.foreground)
        };
        html.push_str(&format!(
            "<button class=\"filter-btn\" data-type=\"{tag}\" style=\"--btn-color: {bg};{text_var}\">{label}</button>\n",
            tag = ty.as_str(),
            bg = style.background,
            label = title_label(ty),
        ));
    }
    html.push_str("</div>\n</div>\n</div>\n");
    html
}

fn title_label(ty: EventType) -> &'static str {
    match ty {
        EventType::Battle => "Battle",
        EventType::Death => "Death",
        EventType::Coronation => "Coronation",
        EventType::Treaty => "Treaty",
    }
}

/// Render the full timeline document.
///
/// `types` restricts the rendered events to the given types; an empty slice
/// renders every event. The in-page filter buttons only act on the cards
/// that survive this step.
pub fn render_timeline_html(data: &Dataset, types: &[EventType]) -> String {
    let events = select_events(&data.events, types);

    let mut html = String::with_capacity(16 * 1024 + events.len() * 4 * 1024);
    html.push_str(PAGE_HEAD);
    html.push_str(&format!(
        r#"<body>
<div class="container">
<header>
<h1>&#9876;&#65039; Wars of the Roses</h1>
<p class="subtitle">{} &bull; {}</p>
"#,
        html_escape(&data.period),
        filter_description(types),
    ));
    html.push_str(&render_legend());
    html.push_str("</header>\n\n<div class=\"timeline\">\n");
    for event in events {
        html.push_str(&render_event_card(event, &data.factions));
    }
    html.push_str(
        r#"</div>

<footer>
<p>Wars of the Roses Timeline &bull; Data Visualization</p>
</footer>
</div>
"#,
    );
    html.push_str(PAGE_SCRIPT);
    html
}

/// Write a rendered timeline document to a file.
pub fn write_timeline_html(output_path: &Path, html: &str) -> TimelineResult<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| TimelineError::Message(format!("failed to create directory: {e}")))?;
        }
    }

    fs::write(output_path, html).map_err(|e| {
        TimelineError::Message(format!(
            "failed to write {}: {e}",
            output_path.display()
        ))
    })?;

    Ok(())
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Wars of the Roses - Timeline</title>
<style>
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
  min-height: 100vh;
  color: #e0e0e0;
  line-height: 1.6;
}
.container { max-width: 700px; margin: 0 auto; padding: 40px 20px; }
header { text-align: center; margin-bottom: 50px; }
h1 { font-size: 2.5rem; color: #fff; margin-bottom: 10px; text-shadow: 2px 2px 4px rgba(0,0,0,0.3); }
.subtitle { font-size: 1.2rem; color: #aaa; }

/* Legend and filters */
.legend { display: flex; justify-content: center; gap: 40px; margin: 30px 0; flex-wrap: wrap; }
.legend-section { display: flex; flex-direction: column; align-items: center; gap: 10px; }
.legend-title { font-size: 0.75rem; color: #888; text-transform: uppercase; letter-spacing: 1px; }
.legend-items { display: flex; gap: 15px; flex-wrap: wrap; justify-content: center; }
.legend-item { display: flex; align-items: center; gap: 6px; font-size: 0.9rem; }
.filter-buttons { display: flex; gap: 8px; flex-wrap: wrap; justify-content: center; }
.filter-btn {
  --btn-color: #555;
  --btn-text: #fff;
  background: transparent;
  border: 2px solid var(--btn-color);
  color: #aaa;
  padding: 6px 14px;
  border-radius: 20px;
  font-size: 0.85rem;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.2s ease;
}
.filter-btn:hover, .filter-btn.active { background: var(--btn-color); color: var(--btn-text); }
.filter-btn.active { box-shadow: 0 2px 8px rgba(0,0,0,0.3); }

/* Timeline */
.timeline { position: relative; padding-left: 30px; }
.timeline::before {
  content: '';
  position: absolute;
  left: 0; top: 0; bottom: 0;
  width: 3px;
  background: linear-gradient(to bottom, #DC143C, #FFFFFF, #228B22);
  border-radius: 3px;
}

/* Cards */
.event-card {
  background: rgba(255,255,255,0.05);
  border-radius: 8px;
  margin-bottom: 8px;
  border-left: 4px solid;
  position: relative;
  transition: transform 0.2s, box-shadow 0.2s;
  overflow: hidden;
}
.event-card:hover { transform: translateX(5px); box-shadow: 0 10px 30px rgba(0,0,0,0.3); }
.event-card::before {
  content: '';
  position: absolute;
  left: -38px; top: 15px;
  width: 10px; height: 10px;
  background: #fff;
  border-radius: 50%;
  border: 3px solid #1a1a2e;
}
.event-header { display: flex; justify-content: space-between; align-items: center; padding: 8px 15px; cursor: pointer; user-select: none; }
.event-summary { flex: 1; display: flex; align-items: center; gap: 10px; flex-wrap: wrap; }
.expand-icon { font-size: 1rem; color: #888; transition: transform 0.3s ease; margin-left: 15px; }
.event-card.expanded .expand-icon { transform: rotate(180deg); }
.event-details { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; padding: 0 15px; }
.event-card.expanded .event-details { max-height: 1000px; padding: 0 15px 15px 15px; }
.event-date { font-size: 0.85rem; color: #888; font-family: monospace; min-width: 80px; }
.event-name { font-size: 1rem; color: #fff; font-weight: 500; flex: 1; min-width: 120px; }
.type-victor-group { display: flex; align-items: center; gap: 6px; }
.type-badge { padding: 2px 8px; border-radius: 4px; font-size: 0.7rem; font-weight: bold; text-transform: uppercase; letter-spacing: 0.5px; }
.victor-badge {
  display: inline-flex;
  align-items: center;
  gap: 5px;
  padding: 3px 10px 3px 3px;
  border: 1px solid transparent;
  border-radius: 12px;
  font-weight: bold;
  font-size: 0.8rem;
  white-space: nowrap;
  background: rgba(255,255,255,0.1);
}

/* Details */
.commanders-section { margin-bottom: 15px; }
.commanders-section h3 { font-size: 0.85rem; text-transform: uppercase; color: #888; margin-bottom: 10px; letter-spacing: 1px; }
.faction-group { margin-bottom: 10px; }
.faction-badge {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 3px 10px 3px 3px;
  border-radius: 4px;
  font-size: 0.8rem;
  font-weight: bold;
  margin-bottom: 5px;
  background: rgba(255,255,255,0.1);
}
.commander-list { list-style: none; padding-left: 15px; }
.commander-list li { font-size: 0.95rem; padding: 2px 0; color: #ccc; }
.cmd-note { font-size: 0.8rem; color: #f0ad4e; font-style: italic; }
.event-details-section { margin-bottom: 15px; }
.event-details-section p { margin: 5px 0; color: #ccc; }
.event-details-section strong { color: #aaa; }
.battle-notes { font-style: italic; color: #aaa; border-top: 1px solid rgba(255,255,255,0.1); padding-top: 15px; margin-top: 10px; }
footer { text-align: center; margin-top: 50px; padding-top: 20px; border-top: 1px solid rgba(255,255,255,0.1); color: #666; }

@media (max-width: 768px) {
  .container { padding: 20px 15px; }
  header { margin-bottom: 30px; }
  h1 { font-size: 1.8rem; }
  .subtitle { font-size: 1rem; }
  .timeline { padding-left: 20px; }
  .event-card::before { left: -28px; width: 8px; height: 8px; }
  .event-summary { gap: 6px; }
  .event-date { font-size: 0.75rem; min-width: 70px; }
  .event-name { font-size: 0.9rem; min-width: 100px; }
  .victor-badge { padding: 3px; gap: 0; }
  .victor-badge .victor-name { display: none; }
}
</style>
</head>
"#;

const PAGE_SCRIPT: &str = r#"<script>
function toggleEvent(headerElement) {
  var card = headerElement.closest('.event-card');
  card.classList.toggle('expanded');
}

document.querySelectorAll('.filter-btn').forEach(function(btn) {
  btn.addEventListener('click', function() {
    document.querySelectorAll('.filter-btn').forEach(function(b) { b.classList.remove('active'); });
    btn.classList.add('active');

    var filterType = btn.dataset.type;
    document.querySelectorAll('.event-card').forEach(function(card) {
      card.style.display = (filterType === 'all' || card.dataset.type === filterType) ? '' : 'none';
    });
  });
});
</script>
</body>
</html>
"#;
