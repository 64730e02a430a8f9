//! The layered field renderer: a pure function of a [`Play`] snapshot,
//! selection, render mode and canvas size, emitted back-to-front.

use crate::anim::path::position_at;
use crate::foundation::geom::{CanvasSize, to_pixel};
use crate::render::backend::{DrawSurface, Rgba8, TextAnchor};
use crate::scene::document::Selection;
use crate::scene::play::{Annotation, AnnotationShape, Play, Player, Route, RouteKind};
use kurbo::{CubicBez, ParamCurve, Point, QuadBez, Vec2};

const FIELD_GREEN: Rgba8 = Rgba8::rgb(0x2d, 0x50, 0x16);
const FIELD_GREEN_ALT: Rgba8 = Rgba8::rgb(0x3a, 0x6b, 0x1d);
const LINE_WHITE: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
const HASH_GRAY: Rgba8 = Rgba8::rgb(0xcc, 0xcc, 0xcc);
const LABEL_GRAY: Rgba8 = Rgba8::rgb(0x94, 0xa3, 0xb8);
const SELECTION_GOLD: Rgba8 = Rgba8::rgb(0xfb, 0xbf, 0x24);
const END_ZONE_TINT: Rgba8 = Rgba8::rgba(0xff, 0x00, 0x00, 26);

const DEFAULT_ROUTE_COLOR: &str = "#fbbf24";

const STRIPE_COUNT: usize = 10;
const YARD_LABELS: [&str; 11] = ["G", "10", "20", "30", "40", "50", "40", "30", "20", "10", "G"];

const PLAYER_RADIUS: f64 = 15.0;
const PLAYER_RADIUS_SELECTED: f64 = 18.0;

/// Fraction of a route that must be revealed before its arrowhead appears.
const ARROWHEAD_THRESHOLD: f64 = 0.1;
const ARROWHEAD_LEN: f64 = 12.0;

/// Samples used to flatten a curved route into a polyline.
const CURVE_SAMPLES: usize = 32;

/// How a frame is parameterized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderMode {
    /// Edit-time picture: routes complete, players at their start positions.
    Static,
    /// Playback picture at `time` seconds of a `duration`-second play.
    Animated { time: f64, duration: f64 },
}

impl RenderMode {
    /// Revealed fraction of routes/trails, `min(t/duration, 1)`.
    fn progress(self) -> f64 {
        match self {
            Self::Static => 1.0,
            Self::Animated { time, duration } => {
                if duration <= 0.0 {
                    1.0
                } else {
                    (time / duration).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// Render one frame of `play` into `surface`.
pub fn render(
    play: &Play,
    selection: Selection,
    mode: RenderMode,
    size: CanvasSize,
    surface: &mut dyn DrawSurface,
) {
    draw_field(play, size, surface);
    if let RenderMode::Animated { time, duration } = mode {
        draw_trails(play, time, duration, size, surface);
    }
    for route in &play.routes {
        draw_route(route, selection, mode.progress(), size, surface);
    }
    for player in &play.players {
        draw_player(player, selection, mode, size, surface);
    }
    for annotation in &play.annotations {
        draw_annotation(annotation, size, surface);
    }
}

fn draw_field(play: &Play, size: CanvasSize, surface: &mut dyn DrawSurface) {
    let (w, h) = (size.width, size.height);

    // Alternating turf stripes.
    let stripe_w = w / STRIPE_COUNT as f64;
    for i in 0..STRIPE_COUNT {
        let color = if i % 2 == 0 { FIELD_GREEN } else { FIELD_GREEN_ALT };
        surface.fill_rect(Point::new(i as f64 * stripe_w, 0.0), stripe_w, h, color);
    }

    if play.field_config.show_yard_lines {
        for i in 0..=10 {
            let x = f64::from(i) * (w / 10.0);
            surface.stroke_line(Point::new(x, 0.0), Point::new(x, h), 2.0, LINE_WHITE);
        }
        // Yard numbers mirrored around midfield, along both sidelines.
        for (i, label) in YARD_LABELS.iter().enumerate() {
            let x = i as f64 * (w / 10.0);
            surface.draw_text(label, Point::new(x, 20.0), 14.0, TextAnchor::Above, LINE_WHITE);
            surface.draw_text(label, Point::new(x, h - 10.0), 14.0, TextAnchor::Above, LINE_WHITE);
        }
    }

    if play.field_config.show_hash_marks {
        for &hash_y in &[h * 0.35, h * 0.65] {
            for i in 0..=100 {
                let x = f64::from(i) / 100.0 * w;
                surface.stroke_line(
                    Point::new(x, hash_y - 3.0),
                    Point::new(x, hash_y + 3.0),
                    1.0,
                    HASH_GRAY,
                );
            }
        }
    }

    // End-zone tint over the outer 10% on each side.
    surface.fill_rect(Point::ORIGIN, w / 10.0, h, END_ZONE_TINT);
    surface.fill_rect(Point::new(w - w / 10.0, 0.0), w / 10.0, h, END_ZONE_TINT);

    surface.stroke_rect(Point::new(1.0, 1.0), w - 2.0, h - 2.0, 3.0, LINE_WHITE);
}

/// Dashed, reduced-opacity guide along each player's already-traversed path.
fn draw_trails(play: &Play, time: f64, duration: f64, size: CanvasSize, surface: &mut dyn DrawSurface) {
    let progress = if duration <= 0.0 {
        1.0
    } else {
        (time / duration).clamp(0.0, 1.0)
    };
    for player in &play.players {
        if player.path.is_empty() {
            continue;
        }
        let color = Rgba8::from_hex(player.effective_color()).with_alpha(128);
        let mut points = vec![to_pixel(player.start_position, size)];
        for point in &player.path {
            if duration > 0.0 && point.timestamp / duration <= progress {
                points.push(to_pixel(point.position, size));
            }
        }
        if points.len() > 1 {
            draw_dashed_polyline(surface, &points, 4.0, 4.0, 2.0, color);
        }
    }
}

fn draw_route(
    route: &Route,
    selection: Selection,
    progress: f64,
    size: CanvasSize,
    surface: &mut dyn DrawSurface,
) {
    if progress <= 0.0 {
        return;
    }
    let selected = selection.route() == Some(route.id);
    let color = Rgba8::from_hex(route.color.as_deref().unwrap_or(DEFAULT_ROUTE_COLOR));
    let stroke = if selected { 4.0 } else { 3.0 };

    let points = route_polyline(route, progress, size);
    if points.len() < 2 {
        return;
    }

    if route.kind == RouteKind::Dashed {
        draw_dashed_polyline(surface, &points, 8.0, 4.0, stroke, color);
    } else {
        surface.stroke_polyline(&points, stroke, color);
    }

    if progress > ARROWHEAD_THRESHOLD {
        let tip = points[points.len() - 1];
        let back = points[points.len() - 2];
        draw_arrowhead(surface, tip, tip - back, stroke, color);
    }

    if let Some(label) = route.label.as_deref() {
        let start = to_pixel(route.start_position, size);
        let end = to_pixel(route.end_position, size);
        let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0 - 10.0);
        surface.draw_text(label, mid, 11.0, TextAnchor::Above, LINE_WHITE);
    }
}

/// Pixel polyline of a route truncated at `progress` of its parameter range.
fn route_polyline(route: &Route, progress: f64, size: CanvasSize) -> Vec<Point> {
    let start = to_pixel(route.start_position, size);
    let end = to_pixel(route.end_position, size);

    let control = route
        .control_points
        .as_deref()
        .filter(|_| route.kind == RouteKind::Curved)
        .unwrap_or(&[]);
    match control {
        [] => {
            let tip = start.lerp(end, progress);
            vec![start, tip]
        }
        [c0] => {
            let curve = QuadBez::new(start, to_pixel(*c0, size), end);
            sample_curve(|t| curve.eval(t), progress)
        }
        [c0, c1, ..] => {
            let curve = CubicBez::new(start, to_pixel(*c0, size), to_pixel(*c1, size), end);
            sample_curve(|t| curve.eval(t), progress)
        }
    }
}

fn sample_curve(eval: impl Fn(f64) -> Point, progress: f64) -> Vec<Point> {
    (0..=CURVE_SAMPLES)
        .map(|i| eval(i as f64 / CURVE_SAMPLES as f64 * progress))
        .collect()
}

fn draw_arrowhead(surface: &mut dyn DrawSurface, tip: Point, dir: Vec2, stroke: f64, color: Rgba8) {
    let angle = dir.y.atan2(dir.x);
    for barb in [angle - std::f64::consts::FRAC_PI_6, angle + std::f64::consts::FRAC_PI_6] {
        let p = Point::new(
            tip.x - ARROWHEAD_LEN * barb.cos(),
            tip.y - ARROWHEAD_LEN * barb.sin(),
        );
        surface.stroke_line(tip, p, stroke, color);
    }
}

fn draw_player(
    player: &Player,
    selection: Selection,
    mode: RenderMode,
    size: CanvasSize,
    surface: &mut dyn DrawSurface,
) {
    let position = match mode {
        RenderMode::Static => player.start_position,
        RenderMode::Animated { time, duration } => position_at(player, time, duration),
    };
    let center = to_pixel(position, size);
    let selected = selection.player() == Some(player.id);
    let radius = if selected { PLAYER_RADIUS_SELECTED } else { PLAYER_RADIUS };

    surface.fill_circle(center, radius, Rgba8::from_hex(player.effective_color()));
    if selected {
        surface.stroke_circle(center, radius, 3.0, SELECTION_GOLD);
    }

    surface.draw_text(
        player.team_side.marker(),
        center,
        14.0,
        TextAnchor::Middle,
        LINE_WHITE,
    );
    if let Some(jersey) = player.jersey_number.as_deref() {
        let above = Point::new(center.x, center.y - radius - 8.0);
        surface.draw_text(jersey, above, 10.0, TextAnchor::Above, LINE_WHITE);
    }
    if let Some(label) = player.label.as_deref() {
        let below = Point::new(center.x, center.y + radius + 10.0);
        surface.draw_text(label, below, 9.0, TextAnchor::Below, LABEL_GRAY);
    }
}

fn draw_annotation(annotation: &Annotation, size: CanvasSize, surface: &mut dyn DrawSurface) {
    let color = Rgba8::from_hex(annotation.color.as_deref().unwrap_or("#ffffff"));
    let pos = to_pixel(annotation.position, size);

    match &annotation.shape {
        AnnotationShape::Text { text } => {
            surface.draw_text(text, pos, 12.0, TextAnchor::Above, color);
        }
        AnnotationShape::Circle { width } => {
            surface.stroke_circle(pos, *width, 2.0, color);
        }
        AnnotationShape::Rectangle { width, height } => {
            let origin = Point::new(pos.x - width / 2.0, pos.y - height / 2.0);
            surface.stroke_rect(origin, *width, *height, 2.0, color);
        }
        AnnotationShape::Freehand { points } => {
            if points.len() > 1 {
                let px: Vec<Point> = points.iter().map(|p| to_pixel(*p, size)).collect();
                surface.stroke_polyline(&px, 2.0, color);
            }
        }
    }
}

/// Break a polyline into an on/off dash pattern (pixel lengths) and stroke
/// the "on" pieces.
fn draw_dashed_polyline(
    surface: &mut dyn DrawSurface,
    points: &[Point],
    dash_on: f64,
    dash_off: f64,
    stroke: f64,
    color: Rgba8,
) {
    let period = dash_on + dash_off;
    // Distance already travelled along the polyline, modulo the pattern.
    let mut phase = 0.0;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg = b - a;
        let len = seg.hypot();
        if len <= 0.0 {
            continue;
        }
        let dir = seg / len;
        let mut travelled = 0.0;
        while travelled < len {
            let pos_in_period = (phase + travelled) % period;
            if pos_in_period < dash_on {
                // Inside an "on" stretch; draw to its end or the segment end.
                let run = (dash_on - pos_in_period).min(len - travelled);
                let from = a + dir * travelled;
                let to = a + dir * (travelled + run);
                surface.stroke_line(from, to, stroke, color);
                travelled += run;
            } else {
                let skip = (period - pos_in_period).min(len - travelled);
                travelled += skip;
            }
        }
        phase = (phase + len) % period;
    }
}
