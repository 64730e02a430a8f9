//! Mutation API over a [`Play`] plus the single-selection state. All
//! operations are infallible: unknown ids no-op and positions clamp.

use crate::foundation::geom::FieldPosition;
use crate::scene::play::{
    Annotation, AnnotationShape, EntityId, PathPoint, Play, Player, Route, RouteKind, TeamSide,
};
use tracing::debug;

/// At most one entity is selected at a time: one player or one route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Player(EntityId),
    Route(EntityId),
}

impl Selection {
    pub fn player(self) -> Option<EntityId> {
        match self {
            Self::Player(id) => Some(id),
            _ => None,
        }
    }

    pub fn route(self) -> Option<EntityId> {
        match self {
            Self::Route(id) => Some(id),
            _ => None,
        }
    }
}

/// Partial update for a player; `Some` fields are shallow-merged in.
#[derive(Clone, Debug, Default)]
pub struct PlayerPatch {
    pub jersey_number: Option<Option<String>>,
    pub label: Option<Option<String>>,
    pub team_side: Option<TeamSide>,
    pub start_position: Option<FieldPosition>,
    pub path: Option<Vec<PathPoint>>,
    pub color: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

/// Partial update for a route.
#[derive(Clone, Debug, Default)]
pub struct RoutePatch {
    pub player_id: Option<Option<EntityId>>,
    pub start_position: Option<FieldPosition>,
    pub end_position: Option<FieldPosition>,
    pub control_points: Option<Option<Vec<FieldPosition>>>,
    pub kind: Option<RouteKind>,
    pub color: Option<Option<String>>,
    pub label: Option<Option<String>>,
}

/// Partial update for an annotation.
#[derive(Clone, Debug, Default)]
pub struct AnnotationPatch {
    pub position: Option<FieldPosition>,
    pub color: Option<Option<String>>,
    pub shape: Option<AnnotationShape>,
}

/// A [`Play`] under edit, together with the current selection.
#[derive(Clone, Debug, Default)]
pub struct PlayDocument {
    pub play: Play,
    selection: Selection,
}

impl PlayDocument {
    pub fn new(play: Play) -> Self {
        Self {
            play,
            selection: Selection::None,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select_player(&mut self, id: EntityId) {
        self.selection = Selection::Player(id);
    }

    pub fn select_route(&mut self, id: EntityId) {
        self.selection = Selection::Route(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Create a player at `pos` with the side-default color and an empty
    /// path, insert it, select it, and return its id.
    pub fn add_player(&mut self, pos: FieldPosition, side: TeamSide) -> EntityId {
        let player = Player {
            id: EntityId::generate(),
            jersey_number: None,
            label: None,
            team_side: side,
            start_position: pos.clamped(),
            path: Vec::new(),
            color: Some(side.default_color().to_string()),
            notes: None,
        };
        let id = player.id;
        self.play.players.push(player);
        self.selection = Selection::Player(id);
        id
    }

    /// Insert a fully-formed route (the editor commits these after the second
    /// click of a route draw) and select it.
    pub fn add_route(&mut self, route: Route) -> EntityId {
        let id = route.id;
        self.play.routes.push(route);
        self.selection = Selection::Route(id);
        id
    }

    /// Insert an annotation. Annotations are never selectable.
    pub fn add_annotation(&mut self, annotation: Annotation) -> EntityId {
        let id = annotation.id;
        self.play.annotations.push(annotation);
        id
    }

    /// Shallow-merge `patch` into the player with `id`; no-op when absent.
    pub fn update_player(&mut self, id: EntityId, patch: PlayerPatch) {
        let Some(player) = self.play.players.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "update_player on unknown id ignored");
            return;
        };
        if let Some(v) = patch.jersey_number {
            player.jersey_number = v;
        }
        if let Some(v) = patch.label {
            player.label = v;
        }
        if let Some(v) = patch.team_side {
            // The color override survives a side change untouched.
            player.team_side = v;
        }
        if let Some(v) = patch.start_position {
            player.start_position = v.clamped();
        }
        if let Some(v) = patch.path {
            player.path = v;
        }
        if let Some(v) = patch.color {
            player.color = v;
        }
        if let Some(v) = patch.notes {
            player.notes = v;
        }
    }

    /// Shallow-merge `patch` into the route with `id`; no-op when absent.
    pub fn update_route(&mut self, id: EntityId, patch: RoutePatch) {
        let Some(route) = self.play.routes.iter_mut().find(|r| r.id == id) else {
            debug!(%id, "update_route on unknown id ignored");
            return;
        };
        if let Some(v) = patch.player_id {
            route.player_id = v;
        }
        if let Some(v) = patch.start_position {
            route.start_position = v.clamped();
        }
        if let Some(v) = patch.end_position {
            route.end_position = v.clamped();
        }
        if let Some(v) = patch.control_points {
            route.control_points = v;
        }
        if let Some(v) = patch.kind {
            route.kind = v;
        }
        if let Some(v) = patch.color {
            route.color = v;
        }
        if let Some(v) = patch.label {
            route.label = v;
        }
    }

    /// Shallow-merge `patch` into the annotation with `id`; no-op when absent.
    pub fn update_annotation(&mut self, id: EntityId, patch: AnnotationPatch) {
        let Some(annotation) = self.play.annotations.iter_mut().find(|a| a.id == id) else {
            debug!(%id, "update_annotation on unknown id ignored");
            return;
        };
        if let Some(v) = patch.position {
            annotation.position = v.clamped();
        }
        if let Some(v) = patch.color {
            annotation.color = v;
        }
        if let Some(v) = patch.shape {
            annotation.shape = v;
        }
    }

    /// Remove the player and cascade-delete every route associated with it.
    /// Clears the selection if it referenced the player or a removed route.
    pub fn delete_player(&mut self, id: EntityId) {
        let before = self.play.players.len();
        self.play.players.retain(|p| p.id != id);
        if self.play.players.len() == before {
            debug!(%id, "delete_player on unknown id ignored");
            return;
        }
        let mut removed_routes = Vec::new();
        self.play.routes.retain(|r| {
            if r.player_id == Some(id) {
                removed_routes.push(r.id);
                false
            } else {
                true
            }
        });
        match self.selection {
            Selection::Player(sel) if sel == id => self.selection = Selection::None,
            Selection::Route(sel) if removed_routes.contains(&sel) => {
                self.selection = Selection::None;
            }
            _ => {}
        }
    }

    /// Remove a route. No cascade.
    pub fn delete_route(&mut self, id: EntityId) {
        let before = self.play.routes.len();
        self.play.routes.retain(|r| r.id != id);
        if self.play.routes.len() == before {
            debug!(%id, "delete_route on unknown id ignored");
            return;
        }
        if self.selection == Selection::Route(id) {
            self.selection = Selection::None;
        }
    }

    /// Remove an annotation. No cascade.
    pub fn delete_annotation(&mut self, id: EntityId) {
        let before = self.play.annotations.len();
        self.play.annotations.retain(|a| a.id != id);
        if self.play.annotations.len() == before {
            debug!(%id, "delete_annotation on unknown id ignored");
        }
    }

    /// Assign an externally tracked `{x, y, timestamp}` sequence as the
    /// player's path. Only shape is enforced: positions are clamped and the
    /// sequence is ordered by timestamp; semantics are the tracker's problem.
    pub fn set_tracked_path(&mut self, id: EntityId, mut points: Vec<PathPoint>) {
        let Some(player) = self.play.players.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "set_tracked_path on unknown id ignored");
            return;
        };
        for p in &mut points {
            p.position = p.position.clamped();
        }
        points.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        player.path = points;
    }
}
