//! playchalk: authoring, rendering and replaying football play diagrams on
//! a normalized 100x100 field plane.

#![forbid(unsafe_code)]

pub mod anim;
pub mod editor;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod session;

pub use anim::path::position_at;
pub use anim::playback::{DEFAULT_DURATION_SECS, Playback, PlaybackSpeed};
pub use editor::tools::{COLOR_PALETTE, Editor, PendingRoute, Tool};
pub use foundation::error::{PlaychalkError, PlaychalkResult};
pub use foundation::geom::{
    CanvasSize, FIELD_EXTENT, FieldPosition, to_normalized, to_pixel,
};
pub use render::backend::{DrawSurface, Rgba8, TextAnchor};
pub use render::display_list::{DisplayList, DrawOp};
pub use render::field::{RenderMode, render};
pub use render::raster::RasterSurface;
pub use scene::document::{
    AnnotationPatch, PlayDocument, PlayerPatch, RoutePatch, Selection,
};
pub use scene::formation::{DEFAULT_OFFENSE, FORMATION_NAMES, FormationSlot, apply_formation};
pub use scene::play::{
    Annotation, AnnotationShape, EntityId, FieldConfig, FieldSection, PathPoint, Play, Player,
    Route, RouteKind, TeamSide,
};
pub use session::animation::AnimationSession;
