//! Timeline rendering: dataset schema, style tables, card fragments and the
//! assembled HTML page.
//!
//! Rendering is a pure function of the dataset and the type filter; nothing
//! here touches stdin/stdout.

pub mod card;
pub mod html;
pub mod schema;
pub mod style;

pub use card::{faction_display_name, html_escape, render_event_card, title_case};
pub use html::{filter_description, render_timeline_html, select_events, write_timeline_html};
pub use schema::{Commander, Dataset, Event, EventKind, EventType};
pub use style::{BadgeStyle, Faction, badge_style, faction_color, faction_emblem};
