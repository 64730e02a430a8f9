use kurbo::Point;
use playchalk::{
    AnnotationShape, Editor, FieldPosition, PendingRoute, RouteKind, Selection, TeamSide, Tool,
    to_pixel,
};

#[test]
fn two_clicks_commit_a_solid_route() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::RouteSolid);

    editor.field_click(FieldPosition::new(10.0, 10.0));
    assert!(matches!(
        editor.pending_route(),
        PendingRoute::AwaitingSecondClick { .. }
    ));
    assert!(editor.document().play.routes.is_empty());

    editor.field_click(FieldPosition::new(90.0, 90.0));
    let routes = &editor.document().play.routes;
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].start_position, FieldPosition::new(10.0, 10.0));
    assert_eq!(routes[0].end_position, FieldPosition::new(90.0, 90.0));
    assert_eq!(routes[0].kind, RouteKind::Solid);
    assert_eq!(routes[0].color.as_deref(), Some("#fbbf24"));

    // Committed route is selected and the tool stays armed for another draw.
    assert_eq!(editor.document().selection(), Selection::Route(routes[0].id));
    assert_eq!(editor.tool(), Tool::RouteSolid);
    assert_eq!(editor.pending_route(), PendingRoute::Idle);
}

#[test]
fn switching_tools_discards_a_pending_route() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::RouteDashed);
    editor.field_click(FieldPosition::new(30.0, 30.0));

    editor.set_tool(Tool::Select);
    assert_eq!(editor.pending_route(), PendingRoute::Idle);

    editor.set_tool(Tool::RouteDashed);
    editor.field_click(FieldPosition::new(60.0, 60.0));
    editor.field_click(FieldPosition::new(70.0, 70.0));
    let routes = &editor.document().play.routes;
    assert_eq!(routes.len(), 1, "the discarded first click must not commit");
    assert_eq!(routes[0].start_position, FieldPosition::new(60.0, 60.0));
}

#[test]
fn routes_drawn_with_the_palette_color() {
    let mut editor = Editor::default();
    editor.set_selected_color("#22c55e");
    editor.set_tool(Tool::RouteCurved);
    editor.field_click(FieldPosition::new(20.0, 80.0));
    editor.field_click(FieldPosition::new(40.0, 20.0));
    let route = &editor.document().play.routes[0];
    assert_eq!(route.kind, RouteKind::Curved);
    assert_eq!(route.color.as_deref(), Some("#22c55e"));
}

#[test]
fn annotation_tools_place_defaults_and_revert_to_select() {
    let mut editor = Editor::default();

    editor.set_tool(Tool::Text);
    editor.field_click(FieldPosition::new(50.0, 20.0));
    assert_eq!(editor.tool(), Tool::Select);

    editor.set_tool(Tool::Circle);
    editor.field_click(FieldPosition::new(30.0, 40.0));
    editor.set_tool(Tool::Rectangle);
    editor.field_click(FieldPosition::new(70.0, 40.0));

    let annotations = &editor.document().play.annotations;
    assert_eq!(annotations.len(), 3);
    assert_eq!(
        annotations[0].shape,
        AnnotationShape::Text {
            text: "Label".to_string()
        }
    );
    assert_eq!(annotations[1].shape, AnnotationShape::Circle { width: 30.0 });
    assert_eq!(
        annotations[2].shape,
        AnnotationShape::Rectangle {
            width: 30.0,
            height: 20.0
        }
    );
    assert_eq!(editor.tool(), Tool::Select);
}

#[test]
fn empty_canvas_click_clears_selection() {
    let mut editor = Editor::default();
    editor.add_player(FieldPosition::new(50.0, 50.0), TeamSide::Offense);
    assert!(editor.document().selection().player().is_some());

    // Far from any player.
    editor.pointer_down(Point::new(5.0, 5.0));
    assert_eq!(editor.document().selection(), Selection::None);
}

#[test]
fn delete_selected_cascades_from_a_player() {
    let mut editor = Editor::default();
    let id = editor.add_player(FieldPosition::new(50.0, 50.0), TeamSide::Offense);
    editor.set_tool(Tool::RouteSolid);
    editor.field_click(FieldPosition::new(50.0, 50.0));
    editor.field_click(FieldPosition::new(80.0, 20.0));
    let route_id = editor.document().play.routes[0].id;
    editor
        .document_mut()
        .update_route(route_id, playchalk::RoutePatch {
            player_id: Some(Some(id)),
            ..playchalk::RoutePatch::default()
        });

    editor.set_tool(Tool::Select);
    editor.pointer_down(to_pixel(FieldPosition::new(50.0, 50.0), editor.canvas_size()));
    editor.pointer_up();
    assert_eq!(editor.document().selection(), Selection::Player(id));

    editor.delete_selected();
    assert!(editor.document().play.players.is_empty());
    assert!(editor.document().play.routes.is_empty());
    assert_eq!(editor.document().selection(), Selection::None);
}

#[test]
fn delete_selected_route_leaves_players_alone() {
    let mut editor = Editor::default();
    editor.add_player(FieldPosition::new(20.0, 20.0), TeamSide::Defense);
    editor.set_tool(Tool::RouteSolid);
    editor.field_click(FieldPosition::new(60.0, 60.0));
    editor.field_click(FieldPosition::new(80.0, 80.0));

    editor.delete_selected();
    assert!(editor.document().play.routes.is_empty());
    assert_eq!(editor.document().play.players.len(), 1);
}
