//! The interactive editor: a tool state machine translating pixel-space
//! pointer events into document mutations.

use crate::foundation::geom::{CanvasSize, FieldPosition, to_normalized, to_pixel};
use crate::scene::document::{PlayDocument, PlayerPatch, Selection};
use crate::scene::play::{
    Annotation, AnnotationShape, EntityId, Route, RouteKind, TeamSide,
};
use kurbo::Point;

/// Pixel radius within which a pointer-down grabs a player.
pub const HIT_RADIUS_PX: f64 = 20.0;

/// The palette offered by the color selector.
pub const COLOR_PALETTE: [&str; 8] = [
    "#fbbf24", "#ef4444", "#3b82f6", "#22c55e", "#a855f7", "#f97316", "#ffffff", "#000000",
];

/// The active editor tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Select,
    Move,
    RouteSolid,
    RouteDashed,
    RouteCurved,
    Text,
    Circle,
    Rectangle,
}

impl Tool {
    fn route_kind(self) -> Option<RouteKind> {
        match self {
            Self::RouteSolid => Some(RouteKind::Solid),
            Self::RouteDashed => Some(RouteKind::Dashed),
            Self::RouteCurved => Some(RouteKind::Curved),
            _ => None,
        }
    }
}

/// Route drawing is two-phase; the half-drawn state is explicit so "pending
/// route with the wrong tool" cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PendingRoute {
    #[default]
    Idle,
    AwaitingSecondClick {
        start: FieldPosition,
        kind: RouteKind,
    },
}

/// A live drag of one player. Exists only between pointer-down and
/// pointer-up, so move handling cannot outlive its session.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    player_id: EntityId,
}

/// Editor state machine over a [`PlayDocument`].
#[derive(Debug)]
pub struct Editor {
    document: PlayDocument,
    tool: Tool,
    pending: PendingRoute,
    drag: Option<DragSession>,
    selected_color: String,
    canvas: CanvasSize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(PlayDocument::default())
    }
}

impl Editor {
    pub fn new(document: PlayDocument) -> Self {
        Self {
            document,
            tool: Tool::default(),
            pending: PendingRoute::default(),
            drag: None,
            selected_color: COLOR_PALETTE[0].to_string(),
            canvas: CanvasSize::DEFAULT,
        }
    }

    pub fn document(&self) -> &PlayDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut PlayDocument {
        &mut self.document
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn pending_route(&self) -> PendingRoute {
        self.pending
    }

    pub fn selected_color(&self) -> &str {
        &self.selected_color
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    /// Adopt a new canvas measurement. The caller re-renders; pointer math
    /// uses the new size from here on.
    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        self.canvas = size;
    }

    /// Switch tools. Any half-drawn route is discarded, never committed.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.pending = PendingRoute::Idle;
    }

    /// Set the palette color applied to newly drawn routes and annotations.
    /// Players are unaffected; their color defaults from team side.
    pub fn set_selected_color(&mut self, color: impl Into<String>) {
        self.selected_color = color.into();
    }

    /// Add a player at `pos` (side-default color, empty path), select it and
    /// drop back to the select tool.
    pub fn add_player(&mut self, pos: FieldPosition, side: TeamSide) -> EntityId {
        let id = self.document.add_player(pos, side);
        self.set_tool(Tool::Select);
        id
    }

    /// Pointer pressed at pixel position `px`.
    pub fn pointer_down(&mut self, px: Point) {
        match self.tool {
            Tool::Select | Tool::Move => {
                if let Some(id) = self.hit_test_player(px) {
                    self.drag = Some(DragSession { player_id: id });
                    self.document.select_player(id);
                } else if self.tool == Tool::Select {
                    self.document.clear_selection();
                    self.field_click(to_normalized(px, self.canvas));
                }
            }
            _ => self.field_click(to_normalized(px, self.canvas)),
        }
    }

    /// Pointer moved; only meaningful during a drag session.
    pub fn pointer_move(&mut self, px: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        self.document.update_player(
            drag.player_id,
            PlayerPatch {
                start_position: Some(to_normalized(px, self.canvas)),
                ..PlayerPatch::default()
            },
        );
    }

    /// Pointer released: the drag session ends, selection persists.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// A click on open field, in normalized coordinates.
    pub fn field_click(&mut self, pos: FieldPosition) {
        let pos = pos.clamped();

        if let Some(kind) = self.tool.route_kind() {
            match self.pending {
                PendingRoute::Idle => {
                    self.pending = PendingRoute::AwaitingSecondClick { start: pos, kind };
                }
                PendingRoute::AwaitingSecondClick { start, kind } => {
                    self.document.add_route(Route {
                        id: EntityId::generate(),
                        player_id: None,
                        start_position: start,
                        end_position: pos,
                        control_points: None,
                        kind,
                        color: Some(self.selected_color.clone()),
                        label: None,
                    });
                    // Tool stays active for consecutive draws.
                    self.pending = PendingRoute::Idle;
                }
            }
            return;
        }

        let shape = match self.tool {
            Tool::Text => AnnotationShape::Text {
                text: "Label".to_string(),
            },
            Tool::Circle => AnnotationShape::Circle { width: 30.0 },
            Tool::Rectangle => AnnotationShape::Rectangle {
                width: 30.0,
                height: 20.0,
            },
            _ => return,
        };
        self.document.add_annotation(Annotation {
            id: EntityId::generate(),
            position: pos,
            color: Some(self.selected_color.clone()),
            shape,
        });
        self.set_tool(Tool::Select);
    }

    /// Delete whichever entity is selected (player cascades to its routes).
    pub fn delete_selected(&mut self) {
        match self.document.selection() {
            Selection::Player(id) => self.document.delete_player(id),
            Selection::Route(id) => self.document.delete_route(id),
            Selection::None => {}
        }
    }

    fn hit_test_player(&self, px: Point) -> Option<EntityId> {
        self.document
            .play
            .players
            .iter()
            .find(|p| to_pixel(p.start_position, self.canvas).distance(px) < HIT_RADIUS_PX)
            .map(|p| p.id)
    }
}
