//! Per-event card fragments.
//!
//! Each event becomes one collapsible `<div class="event-card">`. The header
//! (date, type badge, name) is always visible; the type-specific details sit
//! in a body the page script expands on click.
//! All dataset strings are HTML-escaped before insertion.

use std::collections::HashMap;

use super::schema::{Commander, Event, EventKind};
use super::style::{badge_style, border_color, faction_color, faction_emblem};

/// Shown for optional location/cause fields that are absent.
pub const UNKNOWN: &str = "Unknown";

/// HTML-escape a string for safe insertion into HTML content.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Upper-case the first letter of each whitespace-separated word and
/// lower-case the rest ("house of york" -> "House Of York").
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            result.push(c);
        } else if word_start {
            word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Display name for a faction key, falling back to the title-cased key.
pub fn faction_display_name(factions: &HashMap<String, String>, key: &str) -> String {
    factions
        .get(key)
        .cloned()
        .unwrap_or_else(|| title_case(key))
}

/// Group commanders by allegiance.
///
/// Groups are ordered by first appearance of the allegiance; commanders keep
/// their input order within a group.
pub fn group_by_allegiance(commanders: &[Commander]) -> Vec<(&str, Vec<&Commander>)> {
    let mut groups: Vec<(&str, Vec<&Commander>)> = Vec::new();
    for cmd in commanders {
        match groups
            .iter_mut()
            .find(|(allegiance, _)| *allegiance == cmd.allegiance)
        {
            Some((_, members)) => members.push(cmd),
            None => groups.push((cmd.allegiance.as_str(), vec![cmd])),
        }
    }
    groups
}

fn render_notes(notes: Option<&str>) -> String {
    format!(
        r#"<p class="battle-notes">{}</p>"#,
        html_escape(notes.unwrap_or(""))
    )
}

fn render_field(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {}</p>\n", html_escape(value))
}

fn render_commander(cmd: &Commander) -> String {
    let mut item = format!("<li>{}", html_escape(&cmd.name));
    if let Some(notes) = &cmd.notes {
        item.push_str(&format!(
            r#" <span class="cmd-note">({})</span>"#,
            html_escape(notes)
        ));
    }
    item.push_str("</li>");
    item
}

fn render_commanders(commanders: &[Commander], factions: &HashMap<String, String>) -> String {
    let mut html = String::new();
    for (allegiance, members) in group_by_allegiance(commanders) {
        let items: String = members.iter().map(|cmd| render_commander(cmd)).collect();
        html.push_str(&format!(
            r#"<div class="faction-group">
<span class="faction-badge">{emblem} {name}</span>
<ul class="commander-list">{items}</ul>
</div>
"#,
            emblem = faction_emblem(allegiance, 24),
            name = html_escape(&faction_display_name(factions, allegiance)),
        ));
    }
    html
}

/// Victor badge shown next to the type badge of a battle.
fn render_victor_badge(victor: &str, factions: &HashMap<String, String>) -> String {
    format!(
        r#"<span class="victor-badge" style="border-color: {color}">{emblem}<span class="victor-name"> {name}</span></span>"#,
        color = faction_color(victor),
        emblem = faction_emblem(victor, 20),
        name = html_escape(&faction_display_name(factions, victor)),
    )
}

/// Render the type-specific body of a card.
fn render_details(event: &Event, factions: &HashMap<String, String>) -> String {
    let notes = render_notes(event.notes.as_deref());
    match &event.kind {
        EventKind::Battle { commanders, .. } => format!(
            r#"<div class="commanders-section">
<h3>Commanders</h3>
{}</div>
{notes}"#,
            render_commanders(commanders, factions)
        ),
        EventKind::Death {
            person,
            location,
            cause,
        } => format!(
            r#"<div class="event-details-section">
{}{}{}</div>
{notes}"#,
            render_field("Person", person),
            render_field("Location", location.as_deref().unwrap_or(UNKNOWN)),
            render_field("Cause", cause.as_deref().unwrap_or(UNKNOWN)),
        ),
        EventKind::Coronation { monarch, location } => format!(
            r#"<div class="event-details-section">
{}{}</div>
{notes}"#,
            render_field("Monarch", monarch),
            render_field("Location", location.as_deref().unwrap_or(UNKNOWN)),
        ),
        EventKind::Treaty { parties } => format!(
            r#"<div class="event-details-section">
{}</div>
{notes}"#,
            render_field("Parties", &parties.join(", ")),
        ),
        EventKind::Other { .. } => notes,
    }
}

/// Render one event as a collapsed card fragment.
pub fn render_event_card(event: &Event, factions: &HashMap<String, String>) -> String {
    let tag = event.kind.tag();
    let badge = badge_style(event.kind.event_type());
    let victor_badge = match &event.kind {
        EventKind::Battle { victor, .. } => render_victor_badge(victor, factions),
        _ => String::new(),
    };

    format!(
        r#"<div class="event-card" data-type="{tag_attr}" style="border-left-color: {border}">
<div class="event-header" onclick="toggleEvent(this)">
<div class="event-summary">
<span class="event-date">{date}</span>
<div class="type-victor-group">
<span class="type-badge" style="background-color: {bg}; color: {fg}">{label}</span>
{victor_badge}
</div>
<span class="event-name">{name}</span>
</div>
<div class="expand-icon">&#9660;</div>
</div>
<div class="event-details">
{details}
</div>
</div>
"#,
        tag_attr = html_escape(tag),
        border = border_color(&event.kind),
        date = html_escape(&event.date),
        bg = badge.background,
        fg = badge.foreground,
        label = html_escape(&title_case(tag)),
        name = html_escape(&event.name),
        details = render_details(event, factions),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factions() -> HashMap<String, String> {
        HashMap::from([
            ("york".to_string(), "House of York".to_string()),
            ("lancaster".to_string(), "House of Lancaster".to_string()),
        ])
    }

    fn event(json: &str) -> Event {
        serde_json::from_str(json).expect("parse event")
    }

    fn commander(name: &str, allegiance: &str) -> Commander {
        Commander {
            name: name.to_string(),
            allegiance: allegiance.to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("uncertain"), "Uncertain");
        assert_eq!(title_case("house of NEVILLE"), "House Of Neville");
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_faction_display_name_fallback() {
        let factions = factions();
        assert_eq!(faction_display_name(&factions, "york"), "House of York");
        assert_eq!(faction_display_name(&factions, "neville"), "Neville");
        assert_eq!(faction_display_name(&factions, "uncertain"), "Uncertain");
    }

    #[test]
    fn test_group_by_allegiance_preserves_order() {
        let commanders = vec![
            commander("Warwick", "york"),
            commander("Somerset", "lancaster"),
            commander("Edward", "york"),
            commander("Stanley", "uncertain"),
            commander("Exeter", "lancaster"),
        ];
        let groups = group_by_allegiance(&commanders);
        let shape: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|(a, members)| (*a, members.iter().map(|c| c.name.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("york", vec!["Warwick", "Edward"]),
                ("lancaster", vec!["Somerset", "Exeter"]),
                ("uncertain", vec!["Stanley"]),
            ]
        );
    }

    #[test]
    fn test_battle_card() {
        let e = event(
            r#"{
                "type": "battle", "date": "1461-03-29", "name": "Towton", "victor": "york",
                "commanders": [
                    { "name": "Edward IV", "allegiance": "york" },
                    { "name": "Henry Beaufort", "allegiance": "lancaster", "notes": "escaped" },
                    { "name": "Lord Fauconberg", "allegiance": "york" }
                ],
                "notes": "Fought in a snowstorm"
            }"#,
        );
        let html = render_event_card(&e, &factions());

        assert!(html.starts_with(r#"<div class="event-card" data-type="battle" style="border-left-color: #FFFFFF">"#));
        assert!(html.contains(">Battle</span>"), "type badge label");
        assert!(html.contains(r#"<span class="event-name">Towton</span>"#));
        assert!(html.contains(r#"<span class="event-date">1461-03-29</span>"#));
        assert!(html.contains(r#"<span class="victor-name"> House of York</span>"#));
        assert!(html.contains(r#"<li>Henry Beaufort <span class="cmd-note">(escaped)</span></li>"#));
        assert!(html.contains(r#"<p class="battle-notes">Fought in a snowstorm</p>"#));
        assert_eq!(html.matches(r#"<div class="faction-group">"#).count(), 2);

        let edward = html.find("Edward IV").unwrap();
        let fauconberg = html.find("Lord Fauconberg").unwrap();
        let beaufort = html.find("Henry Beaufort").unwrap();
        assert!(edward < fauconberg, "york commanders keep input order");
        assert!(fauconberg < beaufort, "york group comes first");
        assert!(!html.contains("expanded"), "cards start collapsed");
    }

    #[test]
    fn test_battle_with_unknown_victor() {
        let e = event(
            r#"{ "type": "battle", "date": "1469", "name": "Edgecote Moor", "victor": "neville", "commanders": [] }"#,
        );
        let html = render_event_card(&e, &factions());
        assert!(html.contains("border-left-color: #666666"));
        assert!(html.contains(r#"<span class="victor-name"> Neville</span>"#));
        assert!(html.contains(r#"<p class="battle-notes"></p>"#));
    }

    #[test]
    fn test_death_defaults_to_unknown() {
        let e = event(r#"{ "type": "death", "date": "1483", "name": "Princes in the Tower", "person": "Edward V" }"#);
        let html = render_event_card(&e, &factions());
        assert!(html.contains("<p><strong>Person:</strong> Edward V</p>"));
        assert!(html.contains("<p><strong>Location:</strong> Unknown</p>"));
        assert!(html.contains("<p><strong>Cause:</strong> Unknown</p>"));
        assert!(html.contains("border-left-color: #2c2c2c"));
        assert!(!html.contains("victor-badge"));
    }

    #[test]
    fn test_coronation_card() {
        let e = event(
            r#"{ "type": "coronation", "date": "1485-10-30", "name": "Henry VII crowned", "monarch": "Henry VII", "location": "Westminster Abbey" }"#,
        );
        let html = render_event_card(&e, &factions());
        assert!(html.contains("<p><strong>Monarch:</strong> Henry VII</p>"));
        assert!(html.contains("<p><strong>Location:</strong> Westminster Abbey</p>"));
        assert!(html.contains("border-left-color: #FFD700"));
        assert!(html.contains("background-color: #FFD700; color: #000"));
    }

    #[test]
    fn test_treaty_parties() {
        let e = event(
            r#"{ "type": "treaty", "date": "1475", "name": "Picquigny", "parties": ["Edward IV", "Louis XI"] }"#,
        );
        let html = render_event_card(&e, &factions());
        assert!(html.contains("<p><strong>Parties:</strong> Edward IV, Louis XI</p>"));

        let empty = event(r#"{ "type": "treaty", "date": "1475", "name": "Picquigny" }"#);
        let html = render_event_card(&empty, &factions());
        assert!(html.contains("<p><strong>Parties:</strong> </p>"));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
    }

    #[test]
    fn test_unknown_type_renders_notes_only() {
        let e = event(r#"{ "type": "siege", "date": "1468", "name": "Harlech", "notes": "Long siege" }"#);
        let html = render_event_card(&e, &factions());
        assert!(html.contains(r#"data-type="siege""#));
        assert!(html.contains(">Siege</span>"));
        assert!(html.contains("border-left-color: #666\""));
        assert!(html.contains(r#"<div class="event-details">
<p class="battle-notes">Long siege</p>
</div>"#));
    }

    #[test]
    fn test_card_escapes_dataset_strings() {
        let e = event(
            r#"{ "type": "death", "date": "1478", "name": "<script>alert(1)</script>", "person": "Clarence & co", "cause": "\"malmsey\"" }"#,
        );
        let html = render_event_card(&e, &factions());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Clarence &amp; co"));
        assert!(html.contains("&quot;malmsey&quot;"));
    }
}
