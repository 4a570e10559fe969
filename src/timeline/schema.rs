//! Input schema for the timeline dataset.
//!
//! Events arrive tagged by a `type` string. They are decoded through a
//! permissive raw record so that unrecognized types survive as
//! [`EventKind::Other`] and a missing type-specific field is reported with
//! the name of the event that lacks it. Type-specific fields are only
//! checked for the type that uses them.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{TimelineError, TimelineResult};

/// Parsed input document.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Free-text period label shown in the subtitle (e.g. "1455-1487")
    pub period: String,

    /// Faction key to display name (e.g. "york" -> "House of York")
    pub factions: HashMap<String, String>,

    /// Events in display order
    pub events: Vec<Event>,
}

impl Dataset {
    /// Decode a dataset from a JSON string.
    pub fn from_json(raw: &str) -> TimelineResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One commander listed on a battle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Commander {
    pub name: String,
    pub allegiance: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Event types that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EventType {
    Battle,
    Death,
    Coronation,
    Treaty,
}

impl EventType {
    /// The `type` tag used in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Battle => "battle",
            EventType::Death => "death",
            EventType::Coronation => "coronation",
            EventType::Treaty => "treaty",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "battle" => Some(EventType::Battle),
            "death" => Some(EventType::Death),
            "coronation" => Some(EventType::Coronation),
            "treaty" => Some(EventType::Treaty),
            _ => None,
        }
    }

    /// Plural label used in the page subtitle.
    pub fn plural_label(&self) -> &'static str {
        match self {
            EventType::Battle => "Battles",
            EventType::Death => "Deaths",
            EventType::Coronation => "Coronations",
            EventType::Treaty => "Treaties",
        }
    }
}

/// One dated occurrence on the timeline.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    pub date: String,
    pub name: String,
    pub notes: Option<String>,
    pub kind: EventKind,
}

/// Type-specific payload of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Battle {
        victor: String,
        commanders: Vec<Commander>,
    },
    Death {
        person: String,
        location: Option<String>,
        cause: Option<String>,
    },
    Coronation {
        monarch: String,
        location: Option<String>,
    },
    Treaty {
        parties: Vec<String>,
    },
    /// Any tag outside the known set; only notes are rendered.
    Other { tag: String },
}

impl EventKind {
    /// The `type` tag this event was decoded from.
    pub fn tag(&self) -> &str {
        match self {
            EventKind::Battle { .. } => EventType::Battle.as_str(),
            EventKind::Death { .. } => EventType::Death.as_str(),
            EventKind::Coronation { .. } => EventType::Coronation.as_str(),
            EventKind::Treaty { .. } => EventType::Treaty.as_str(),
            EventKind::Other { tag } => tag,
        }
    }

    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventKind::Battle { .. } => Some(EventType::Battle),
            EventKind::Death { .. } => Some(EventType::Death),
            EventKind::Coronation { .. } => Some(EventType::Coronation),
            EventKind::Treaty { .. } => Some(EventType::Treaty),
            EventKind::Other { .. } => None,
        }
    }
}

/// Wire shape of an event before the `type` tag is resolved.
///
/// Only the fields shared by every type are typed here. The rest is kept
/// as raw JSON and decoded against the resolved type, so a key that
/// belongs to another type never affects this one.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    tag: String,
    date: String,
    name: String,
    #[serde(default)]
    notes: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct BattleFields {
    #[serde(default)]
    victor: Option<String>,
    #[serde(default)]
    commanders: Option<Vec<Commander>>,
}

#[derive(Debug, Deserialize)]
struct DeathFields {
    #[serde(default)]
    person: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    cause: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CoronationFields {
    #[serde(default)]
    monarch: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TreatyFields {
    #[serde(default)]
    parties: Option<Vec<String>>,
}

fn type_fields<T: DeserializeOwned>(
    rest: Map<String, Value>,
    tag: &str,
    name: &str,
) -> Result<T, TimelineError> {
    serde_json::from_value(Value::Object(rest))
        .map_err(|e| TimelineError::Message(format!("{tag} event {name:?}: {e}")))
}

fn require<T>(value: Option<T>, tag: &str, name: &str, field: &str) -> Result<T, TimelineError> {
    value.ok_or_else(|| {
        TimelineError::Message(format!(
            "{tag} event {name:?} is missing required field `{field}`"
        ))
    })
}

impl TryFrom<RawEvent> for Event {
    type Error = TimelineError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let (tag, name) = (raw.tag.as_str(), raw.name.as_str());
        let kind = match EventType::from_tag(tag) {
            Some(EventType::Battle) => {
                let f: BattleFields = type_fields(raw.rest, tag, name)?;
                EventKind::Battle {
                    victor: require(f.victor, tag, name, "victor")?,
                    commanders: require(f.commanders, tag, name, "commanders")?,
                }
            }
            Some(EventType::Death) => {
                let f: DeathFields = type_fields(raw.rest, tag, name)?;
                EventKind::Death {
                    person: require(f.person, tag, name, "person")?,
                    location: f.location,
                    cause: f.cause,
                }
            }
            Some(EventType::Coronation) => {
                let f: CoronationFields = type_fields(raw.rest, tag, name)?;
                EventKind::Coronation {
                    monarch: require(f.monarch, tag, name, "monarch")?,
                    location: f.location,
                }
            }
            Some(EventType::Treaty) => {
                let f: TreatyFields = type_fields(raw.rest, tag, name)?;
                EventKind::Treaty {
                    parties: f.parties.unwrap_or_default(),
                }
            }
            // Unrecognized types render notes only; their extra keys are ignored
            None => EventKind::Other { tag: tag.to_string() },
        };

        Ok(Event {
            date: raw.date,
            name: raw.name,
            notes: raw.notes,
            kind,
        })
    }
}
