//! Color tables and faction emblems.
//!
//! All lookups are total: unknown faction keys and unknown event types fall
//! back to gray instead of failing.

use super::schema::{EventKind, EventType};

/// Border/badge color used for faction keys outside the known set.
pub const DEFAULT_FACTION_COLOR: &str = "#666666";

/// Card border color for events of an unrecognized type.
pub const DEFAULT_BORDER_COLOR: &str = "#666";

/// Factions with a dedicated color and emblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    York,
    Lancaster,
    Tudor,
    Uncertain,
    Unknown,
}

impl Faction {
    /// Resolve a faction key. Matching is case-sensitive.
    pub fn from_key(key: &str) -> Self {
        match key {
            "york" => Faction::York,
            "lancaster" => Faction::Lancaster,
            "tudor" => Faction::Tudor,
            "uncertain" => Faction::Uncertain,
            _ => Faction::Unknown,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Faction::York => "#FFFFFF",
            Faction::Lancaster => "#DC143C",
            Faction::Tudor => "#228B22",
            Faction::Uncertain => "#808080",
            Faction::Unknown => DEFAULT_FACTION_COLOR,
        }
    }

    fn rose(&self) -> &'static RoseDesign {
        match self {
            Faction::York => &YORK_ROSE,
            Faction::Lancaster => &LANCASTER_ROSE,
            Faction::Tudor => &TUDOR_ROSE,
            Faction::Uncertain | Faction::Unknown => &GRAY_ROSE,
        }
    }
}

/// Color for a faction key.
pub fn faction_color(key: &str) -> &'static str {
    Faction::from_key(key).color()
}

/// Inline SVG rose for a faction key, `size` pixels square.
pub fn faction_emblem(key: &str, size: u32) -> String {
    Faction::from_key(key).rose().to_svg(size)
}

/// Background/foreground pair for a type badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Badge colors for an event type; `None` is any unrecognized tag.
pub fn badge_style(event_type: Option<EventType>) -> BadgeStyle {
    let (background, foreground) = match event_type {
        Some(EventType::Battle) => ("#8B0000", "#fff"),
        Some(EventType::Death) => ("#2c2c2c", "#fff"),
        Some(EventType::Coronation) => ("#FFD700", "#000"),
        Some(EventType::Treaty) => ("#4169E1", "#fff"),
        None => ("#666", "#fff"),
    };
    BadgeStyle {
        background,
        foreground,
    }
}

/// Left border color of an event card.
///
/// Battles take the victor's faction color; every other type uses its
/// badge background.
pub fn border_color(kind: &EventKind) -> &'static str {
    match kind {
        EventKind::Battle { victor, .. } => faction_color(victor),
        EventKind::Other { .. } => DEFAULT_BORDER_COLOR,
        _ => badge_style(kind.event_type()).background,
    }
}

/// One ring of five petals, 72 degrees apart.
struct PetalRing {
    rx: u32,
    ry: u32,
    fill: &'static str,
    stroke: &'static str,
    offset_deg: u32,
}

struct RoseDesign {
    gradient_id: &'static str,
    center_stops: (&'static str, &'static str),
    center_r: u32,
    rings: &'static [PetalRing],
}

const GOLD_CENTER: (&str, &str) = ("#FFD700", "#DAA520");

const WHITE_PETALS: PetalRing = PetalRing {
    rx: 22,
    ry: 38,
    fill: "#FFFFFF",
    stroke: "#DDD",
    offset_deg: 0,
};

const RED_PETALS: PetalRing = PetalRing {
    rx: 22,
    ry: 38,
    fill: "#DC143C",
    stroke: "#8B0000",
    offset_deg: 0,
};

static YORK_ROSE: RoseDesign = RoseDesign {
    gradient_id: "yorkCenter",
    center_stops: GOLD_CENTER,
    center_r: 12,
    rings: &[WHITE_PETALS],
};

static LANCASTER_ROSE: RoseDesign = RoseDesign {
    gradient_id: "lancasterCenter",
    center_stops: GOLD_CENTER,
    center_r: 12,
    rings: &[RED_PETALS],
};

// Red outer ring with a smaller white ring set between its petals.
static TUDOR_ROSE: RoseDesign = RoseDesign {
    gradient_id: "tudorCenter",
    center_stops: GOLD_CENTER,
    center_r: 10,
    rings: &[
        PetalRing {
            ry: 40,
            ..RED_PETALS
        },
        PetalRing {
            rx: 14,
            ry: 26,
            offset_deg: 36,
            ..WHITE_PETALS
        },
    ],
};

static GRAY_ROSE: RoseDesign = RoseDesign {
    gradient_id: "uncertainCenter",
    center_stops: ("#999", "#666"),
    center_r: 12,
    rings: &[PetalRing {
        rx: 22,
        ry: 38,
        fill: "#808080",
        stroke: "#666",
        offset_deg: 0,
    }],
};

impl RoseDesign {
    fn to_svg(&self, size: u32) -> String {
        let mut svg = String::with_capacity(1024);
        svg.push_str(&format!(
            r#"<svg width="{size}" height="{size}" viewBox="0 0 100 100" style="vertical-align: middle;">"#
        ));
        svg.push_str(&format!(
            r#"<defs><radialGradient id="{id}" cx="50%" cy="50%" r="50%"><stop offset="0%" style="stop-color:{inner}"/><stop offset="100%" style="stop-color:{outer}"/></radialGradient></defs>"#,
            id = self.gradient_id,
            inner = self.center_stops.0,
            outer = self.center_stops.1,
        ));
        svg.push_str(r#"<g transform="translate(50,50)">"#);
        for ring in self.rings {
            for i in 0..5 {
                svg.push_str(&format!(
                    r#"<ellipse rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="1" transform="rotate({})"/>"#,
                    ring.rx,
                    ring.ry,
                    ring.fill,
                    ring.stroke,
                    ring.offset_deg + 72 * i,
                ));
            }
        }
        svg.push_str(&format!(
            r#"<circle r="{}" fill="url(#{})"/></g></svg>"#,
            self.center_r, self.gradient_id
        ));
        svg
    }
}
