//! Formation presets: named bundles of default player starting positions
//! used to bulk-populate a play.

use crate::foundation::geom::FieldPosition;
use crate::scene::document::PlayDocument;
use crate::scene::play::{EntityId, Player, TeamSide};

/// One slot of a formation template.
#[derive(Clone, Copy, Debug)]
pub struct FormationSlot {
    pub jersey_number: &'static str,
    pub label: &'static str,
    pub team_side: TeamSide,
    pub x: f64,
    pub y: f64,
}

const fn slot(jersey_number: &'static str, label: &'static str, x: f64, y: f64) -> FormationSlot {
    FormationSlot {
        jersey_number,
        label,
        team_side: TeamSide::Offense,
        x,
        y,
    }
}

/// The default 11-man offensive alignment.
pub const DEFAULT_OFFENSE: &[FormationSlot] = &[
    slot("C", "C", 50.0, 55.0),
    slot("LG", "LG", 44.0, 55.0),
    slot("RG", "RG", 56.0, 55.0),
    slot("LT", "LT", 38.0, 55.0),
    slot("RT", "RT", 62.0, 55.0),
    slot("QB", "QB", 50.0, 62.0),
    slot("RB", "RB", 50.0, 70.0),
    slot("WR", "WR1", 15.0, 55.0),
    slot("WR", "WR2", 85.0, 55.0),
    slot("TE", "TE", 68.0, 55.0),
    slot("FB", "FB", 45.0, 67.0),
];

/// Known formation names offered by the authoring UI.
pub const FORMATION_NAMES: &[&str] = &[
    "Shotgun",
    "I-Formation",
    "Pro Set",
    "Single Back",
    "Pistol",
    "Spread",
    "Wishbone",
    "Goal Line",
    "4-3 Defense",
    "3-4 Defense",
    "Nickel",
    "Dime",
    "Cover 2",
    "Cover 3",
];

/// Replace the document's players (and any routes/annotations they anchored)
/// with a formation template. Each slot gets a fresh id and the side-default
/// color.
pub fn apply_formation(document: &mut PlayDocument, slots: &[FormationSlot]) {
    document.play.players = slots
        .iter()
        .map(|s| Player {
            id: EntityId::generate(),
            jersey_number: Some(s.jersey_number.to_string()),
            label: Some(s.label.to_string()),
            team_side: s.team_side,
            start_position: FieldPosition::new(s.x, s.y).clamped(),
            path: Vec::new(),
            color: Some(s.team_side.default_color().to_string()),
            notes: None,
        })
        .collect();
    document.play.routes.clear();
    document.play.annotations.clear();
    document.clear_selection();
}
