use playchalk::{
    Annotation, AnnotationShape, CanvasSize, DisplayList, DrawOp, EntityId, FieldPosition,
    PathPoint, Play, Player, RenderMode, Route, RouteKind, Selection, TeamSide, render,
};

fn sample_play() -> Play {
    let player = Player {
        id: EntityId::generate(),
        jersey_number: Some("12".to_string()),
        label: Some("QB".to_string()),
        team_side: TeamSide::Offense,
        start_position: FieldPosition::new(20.0, 60.0),
        path: vec![PathPoint::new(80.0, 40.0, 5.0)],
        color: None,
        notes: None,
    };
    let route = Route {
        id: EntityId::generate(),
        player_id: Some(player.id),
        start_position: FieldPosition::new(20.0, 60.0),
        end_position: FieldPosition::new(80.0, 40.0),
        control_points: None,
        kind: RouteKind::Solid,
        color: Some("#fbbf24".to_string()),
        label: None,
    };
    let annotation = Annotation {
        id: EntityId::generate(),
        position: FieldPosition::new(50.0, 20.0),
        color: Some("#ffffff".to_string()),
        shape: AnnotationShape::Text {
            text: "Cover 2".to_string(),
        },
    };
    Play {
        players: vec![player],
        routes: vec![route],
        annotations: vec![annotation],
        ..Play::default()
    }
}

fn rendered(play: &Play, mode: RenderMode) -> Vec<DrawOp> {
    let mut dl = DisplayList::new();
    render(play, Selection::None, mode, CanvasSize::DEFAULT, &mut dl);
    dl.into_ops()
}

#[test]
fn layers_draw_back_to_front() {
    let ops = rendered(&sample_play(), RenderMode::Static);

    // The field border closes the field layer.
    let border = ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::StrokeRect { .. }))
        .unwrap();
    let player_circle = ops
        .iter()
        .position(|op| matches!(op, DrawOp::FillCircle { .. }))
        .unwrap();
    let route_line = ops
        .iter()
        .enumerate()
        .position(|(i, op)| i > border && matches!(op, DrawOp::StrokeLine { .. }))
        .unwrap();
    let annotation_text = ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Text { text, .. } if text == "Cover 2"))
        .unwrap();

    assert!(border < route_line, "routes draw over the field");
    assert!(route_line < player_circle, "players draw over routes");
    assert!(player_circle < annotation_text, "annotations draw last");
}

#[test]
fn yard_labels_mirror_around_midfield() {
    let ops = rendered(&Play::default(), RenderMode::Static);
    let labels: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    // Each label appears along both sidelines.
    assert_eq!(labels.len(), 22);
    assert_eq!(
        &labels[..11],
        &["G", "10", "20", "30", "40", "50", "40", "30", "20", "10", "G"]
    );
}

#[test]
fn field_config_toggles_suppress_lines_and_hashes() {
    let mut play = Play::default();
    play.field_config.show_yard_lines = false;
    play.field_config.show_hash_marks = false;
    let ops = rendered(&play, RenderMode::Static);

    assert!(
        ops.iter().all(|op| !matches!(op, DrawOp::Text { .. })),
        "no yard numbers without yard lines"
    );
    // Only the border remains as stroke geometry.
    assert!(ops.iter().all(|op| !matches!(op, DrawOp::StrokeLine { .. })));
}

#[test]
fn trails_appear_only_during_animation() {
    let play = sample_play();
    let trail_color_lines = |ops: &[DrawOp]| {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::StrokeLine { color, .. } if color.a == 128))
            .count()
    };

    let static_ops = rendered(&play, RenderMode::Static);
    assert_eq!(trail_color_lines(&static_ops), 0);

    let animated = rendered(
        &play,
        RenderMode::Animated {
            time: 5.0,
            duration: 5.0,
        },
    );
    assert!(trail_color_lines(&animated) > 0, "traversed path leaves a dashed trail");
}

#[test]
fn routes_hidden_at_time_zero_and_full_at_the_end() {
    let play = sample_play();
    let solid_gold_lines = |ops: &[DrawOp]| {
        ops.iter()
            .filter(|op| {
                matches!(op, DrawOp::StrokeLine { color, stroke_px, .. }
                    if color.a == 255 && *stroke_px == 3.0)
            })
            .count()
    };

    let at_start = rendered(
        &play,
        RenderMode::Animated {
            time: 0.0,
            duration: 5.0,
        },
    );
    assert_eq!(solid_gold_lines(&at_start), 0);

    let at_end = rendered(
        &play,
        RenderMode::Animated {
            time: 5.0,
            duration: 5.0,
        },
    );
    assert!(solid_gold_lines(&at_end) >= 3, "full shaft plus arrowhead barbs");
}

#[test]
fn animated_player_moves_along_its_path() {
    let play = sample_play();
    let circle_center = |ops: &[DrawOp]| {
        ops.iter()
            .find_map(|op| match op {
                DrawOp::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap()
    };

    let start = circle_center(&rendered(
        &play,
        RenderMode::Animated {
            time: 0.0,
            duration: 5.0,
        },
    ));
    let mid = circle_center(&rendered(
        &play,
        RenderMode::Animated {
            time: 2.5,
            duration: 5.0,
        },
    ));
    let size = CanvasSize::DEFAULT;
    assert_eq!(start, playchalk::to_pixel(FieldPosition::new(20.0, 60.0), size));
    assert_eq!(mid, playchalk::to_pixel(FieldPosition::new(50.0, 50.0), size));
}

#[test]
fn rectangle_and_freehand_annotations_render_geometry() {
    let mut play = Play::default();
    play.field_config.show_yard_lines = false;
    play.field_config.show_hash_marks = false;
    play.annotations = vec![
        Annotation {
            id: EntityId::generate(),
            position: FieldPosition::new(50.0, 50.0),
            color: Some("#22c55e".to_string()),
            shape: AnnotationShape::Rectangle {
                width: 30.0,
                height: 20.0,
            },
        },
        Annotation {
            id: EntityId::generate(),
            position: FieldPosition::new(10.0, 10.0),
            color: None,
            shape: AnnotationShape::Freehand {
                points: vec![
                    FieldPosition::new(10.0, 10.0),
                    FieldPosition::new(20.0, 10.0),
                    FieldPosition::new(20.0, 20.0),
                ],
            },
        },
    ];
    let ops = rendered(&play, RenderMode::Static);

    // Border plus the rectangle annotation.
    let rects: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokeRect {
                origin,
                width,
                height,
                ..
            } => Some((*origin, *width, *height)),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 2);
    let center = playchalk::to_pixel(FieldPosition::new(50.0, 50.0), CanvasSize::DEFAULT);
    let (origin, w, h) = rects[1];
    assert_eq!(w, 30.0);
    assert_eq!(h, 20.0);
    assert_eq!(origin.x, center.x - 15.0);
    assert_eq!(origin.y, center.y - 10.0);

    let lines = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeLine { .. }))
        .count();
    assert_eq!(lines, 2, "three freehand points stroke two segments");
}

#[test]
fn selected_player_gets_ring_and_larger_radius() {
    let play = sample_play();
    let id = play.players[0].id;
    let mut dl = DisplayList::new();
    render(
        &play,
        Selection::Player(id),
        RenderMode::Static,
        CanvasSize::DEFAULT,
        &mut dl,
    );
    let ops = dl.into_ops();

    let radius = ops
        .iter()
        .find_map(|op| match op {
            DrawOp::FillCircle { radius, .. } => Some(*radius),
            _ => None,
        })
        .unwrap();
    assert_eq!(radius, 18.0);
    assert!(ops
        .iter()
        .any(|op| matches!(op, DrawOp::StrokeCircle { color, .. }
            if *color == playchalk::Rgba8::rgb(0xfb, 0xbf, 0x24))));
}
