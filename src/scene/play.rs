//! The `Play` document and its entity types. Field names serialize
//! camelCase to keep the persisted wire shape stable (`startPosition`, ...).

use crate::foundation::geom::FieldPosition;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, generated entity id shared by players, routes and annotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh id. Entities are only ever created with fresh ids,
    /// which is why unknown-id mutations can be absorbed as no-ops.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A timestamped position along a player's animated path.
///
/// Timestamps are seconds from play start and strictly ascending within one
/// player's path. The path implicitly starts at the player's
/// `start_position` at `t = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    #[serde(flatten)]
    pub position: FieldPosition,
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_keyframe: Option<bool>,
}

impl PathPoint {
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        Self {
            position: FieldPosition::new(x, y),
            timestamp,
            is_keyframe: None,
        }
    }
}

/// Offense/defense/special grouping driving default color and field marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Offense,
    Defense,
    Special,
}

impl TeamSide {
    /// Default fill color for players on this side.
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Offense => "#3b82f6",
            Self::Defense => "#ef4444",
            Self::Special => "#a855f7",
        }
    }

    /// Marker letter drawn in the middle of the player circle.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Offense => "O",
            Self::Defense | Self::Special => "X",
        }
    }
}

/// One diagrammed player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
    /// Position label such as QB or WR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub team_side: TeamSide,
    pub start_position: FieldPosition,
    #[serde(default)]
    pub path: Vec<PathPoint>,
    /// Explicit color override; may diverge from the team-side default and is
    /// never re-validated against it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Player {
    /// The color this player renders with.
    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or(self.team_side.default_color())
    }
}

/// Stroke style of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Solid,
    Dashed,
    Curved,
}

/// A directional route arrow between two field positions.
///
/// `player_id` is an association, not ownership; it is kept consistent by
/// cascade delete rather than validated at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<EntityId>,
    pub start_position: FieldPosition,
    pub end_position: FieldPosition,
    /// 1-2 control points, meaningful for `RouteKind::Curved`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_points: Option<Vec<FieldPosition>>,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Type-specific payload of an annotation.
///
/// The tag keeps half-typed shapes (a text annotation with a width, say)
/// unrepresentable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnnotationShape {
    Text { text: String },
    /// `width` is the circle radius in pixels.
    Circle { width: f64 },
    Rectangle { width: f64, height: f64 },
    Freehand { points: Vec<FieldPosition> },
}

/// A static markup element on the field (text, circle, rectangle, freehand).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: EntityId,
    pub position: FieldPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub shape: AnnotationShape,
}

/// Which stretch of the field the picture shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSection {
    Full,
    Redzone,
    Custom,
}

/// Field rendering toggles carried inside the play document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub show_yard_lines: bool,
    pub show_hash_marks: bool,
    pub field_section: FieldSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_start_yard: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_end_yard: Option<u32>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            show_yard_lines: true,
            show_hash_marks: true,
            field_section: FieldSection::Full,
            custom_start_yard: None,
            custom_end_yard: None,
        }
    }
}

/// The aggregate play document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<String>,
    /// Run, Pass, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_type: Option<String>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub field_config: FieldConfig,
}

impl Play {
    pub fn player(&self, id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn route(&self, id: EntityId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn annotation(&self, id: EntityId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }
}
