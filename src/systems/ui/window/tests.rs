use std::time::Duration;

use bevy::{prelude::*, state::app::StatesPlugin};

use crate::{data::states::AppState, startup::cursor::CursorTracker};

use super::registry::{PaneId, PaneRegistry};
use super::{
    ActivePaneGesture, Pane, PaneGeometry, PanePhase, PanePlugin, PaneTilt, DEFAULT_PANE_SIZE,
};

/* ─────────────────────────  REGISTRY  ───────────────────────── */

#[test]
fn at_most_one_record_per_identity() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Profile);
    registry.open(PaneId::Profile);
    registry.minimize(PaneId::Profile);
    registry.open(PaneId::Profile);
    registry.focus(PaneId::Profile);
    registry.open(PaneId::Skills);
    registry.close(PaneId::Skills);
    registry.open(PaneId::Skills);

    for id in PaneId::ALL {
        let count = registry
            .records()
            .iter()
            .filter(|record| record.id == id)
            .count();
        assert!(count <= 1, "{id:?} has {count} records");
    }
}

#[test]
fn z_pool_is_strictly_monotonic_and_most_recent_is_top() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Profile);
    registry.open(PaneId::Experience);
    assert_eq!(registry.top_pane(), Some(PaneId::Experience));

    registry.focus(PaneId::Profile);
    assert_eq!(registry.top_pane(), Some(PaneId::Profile));

    registry.open(PaneId::Skills);
    assert_eq!(registry.top_pane(), Some(PaneId::Skills));

    let mut seen = Vec::new();
    for record in registry.records() {
        assert!(
            !seen.contains(&record.z_index),
            "duplicate z {}",
            record.z_index
        );
        seen.push(record.z_index);
    }
}

#[test]
fn z_values_are_never_reused_after_close() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Profile);
    let first_z = registry.record_of(PaneId::Profile).unwrap().z_index;

    registry.close(PaneId::Profile);
    registry.tick(Duration::from_millis(400));
    assert!(registry.record_of(PaneId::Profile).is_none());

    registry.open(PaneId::Profile);
    assert!(registry.record_of(PaneId::Profile).unwrap().z_index > first_z);
}

#[test]
fn close_reports_active_until_the_delay_elapses() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Contact);
    registry.close(PaneId::Contact);

    assert!(registry.status_of(PaneId::Contact).active);
    registry.tick(Duration::from_millis(299));
    assert!(registry.status_of(PaneId::Contact).active);
    registry.tick(Duration::from_millis(2));
    assert!(!registry.status_of(PaneId::Contact).active);
}

#[test]
fn repeated_close_is_a_no_op_and_keeps_the_original_deadline() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Security);
    registry.close(PaneId::Security);
    registry.tick(Duration::from_millis(150));
    registry.close(PaneId::Security);
    registry.tick(Duration::from_millis(151));
    assert!(!registry.status_of(PaneId::Security).active);
}

#[test]
fn minimize_then_open_restores_the_same_record() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Experience);
    let z_before = registry.record_of(PaneId::Experience).unwrap().z_index;

    registry.minimize(PaneId::Experience);
    let minimized = registry.record_of(PaneId::Experience).unwrap();
    assert!(minimized.minimized);
    assert_eq!(minimized.z_index, z_before, "minimize must not change z");

    registry.open(PaneId::Experience);
    assert_eq!(registry.records().len(), 1);
    let restored = registry.record_of(PaneId::Experience).unwrap();
    assert!(!restored.minimized);
    assert!(restored.z_index > z_before, "restore advances the z lineage");
}

#[test]
fn open_during_close_cancels_the_pending_removal() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Profile);
    registry.close(PaneId::Profile);
    registry.tick(Duration::from_millis(100));

    registry.open(PaneId::Profile);
    let record = registry.record_of(PaneId::Profile).unwrap();
    assert!(!record.closing);

    registry.tick(Duration::from_secs(2));
    assert!(registry.status_of(PaneId::Profile).active);
}

#[test]
fn lifecycle_calls_on_missing_identities_are_no_ops() {
    let mut registry = PaneRegistry::default();
    registry.close(PaneId::Skills);
    registry.minimize(PaneId::Skills);
    registry.focus(PaneId::Skills);
    assert!(registry.records().is_empty());
    assert_eq!(
        registry.status_of(PaneId::Skills),
        super::PaneStatus {
            active: false,
            minimized: false
        }
    );
}

#[test]
fn ordered_ids_ranks_records_by_ascending_z() {
    let mut registry = PaneRegistry::default();
    registry.open(PaneId::Profile);
    registry.open(PaneId::Experience);
    registry.open(PaneId::Skills);
    registry.focus(PaneId::Profile);
    assert_eq!(
        registry.ordered_ids(),
        vec![PaneId::Experience, PaneId::Skills, PaneId::Profile]
    );
}

/* ─────────────────────────  HIT REGIONS  ───────────────────────── */

fn geometry() -> PaneGeometry {
    PaneGeometry::new(Vec2::new(100.0, 50.0), Vec2::new(400.0, 300.0))
}

#[test]
fn header_region_excludes_the_button_cluster() {
    let geometry = geometry();
    assert!(!geometry.header_contains(Vec2::new(120.0, 60.0)));
    assert!(geometry.header_contains(Vec2::new(300.0, 60.0)));
    assert!(!geometry.header_contains(Vec2::new(300.0, 90.0)));
}

#[test]
fn button_and_handle_regions_hit_where_expected() {
    let geometry = geometry();
    assert!(geometry.close_button_contains(Vec2::new(116.0, 67.0)));
    assert!(!geometry.close_button_contains(Vec2::new(130.0, 67.0)));
    assert!(geometry.minimize_button_contains(Vec2::new(134.0, 67.0)));
    assert!(geometry.resize_handle_contains(Vec2::new(495.0, 345.0)));
    assert!(!geometry.resize_handle_contains(Vec2::new(470.0, 345.0)));
}

#[test]
fn narrow_viewports_get_fixed_full_screen_geometry() {
    let narrow = PaneGeometry::default_for(0, Vec2::new(400.0, 800.0));
    assert_eq!(narrow.position, Vec2::new(5.0, 60.0));
    assert_eq!(narrow.size, Vec2::new(390.0, 680.0));

    let wide = PaneGeometry::default_for(1, Vec2::new(1280.0, 720.0));
    assert_eq!(wide.position, Vec2::new(380.0, 130.0));
    assert_eq!(wide.size, DEFAULT_PANE_SIZE);
}

/* ─────────────────────────  SURFACES  ───────────────────────── */

fn make_pane_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.init_resource::<Time>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<CursorTracker>();
    app.insert_state(AppState::Desktop);
    app.add_plugins(PanePlugin);
    app
}

fn advance(app: &mut App, millis: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(millis));
    app.update();
}

fn open(app: &mut App, id: PaneId) {
    app.world_mut().resource_mut::<PaneRegistry>().open(id);
    app.update();
}

fn surface_of(app: &mut App, id: PaneId) -> Option<Entity> {
    app.world_mut()
        .query::<(Entity, &Pane)>()
        .iter(app.world())
        .find(|(_, pane)| pane.id == id)
        .map(|(entity, _)| entity)
}

fn geometry_of(app: &mut App, id: PaneId) -> PaneGeometry {
    let entity = surface_of(app, id).expect("surface exists");
    *app.world().entity(entity).get::<PaneGeometry>().unwrap()
}

fn set_geometry(app: &mut App, id: PaneId, geometry: PaneGeometry) {
    let entity = surface_of(app, id).expect("surface exists");
    *app.world_mut()
        .entity_mut(entity)
        .get_mut::<PaneGeometry>()
        .unwrap() = geometry;
}

fn press_at(app: &mut App, screen: Vec2) {
    app.world_mut().resource_mut::<CursorTracker>().screen = Some(screen);
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear_just_pressed(MouseButton::Left);
}

fn move_to(app: &mut App, screen: Vec2) {
    app.world_mut().resource_mut::<CursorTracker>().screen = Some(screen);
    app.update();
}

fn release(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
    app.update();
}

#[test]
fn open_spawns_a_surface_and_minimize_tears_it_down() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    assert!(surface_of(&mut app, PaneId::Profile).is_some());

    app.world_mut()
        .resource_mut::<PaneRegistry>()
        .minimize(PaneId::Profile);
    app.update();

    assert!(surface_of(&mut app, PaneId::Profile).is_none());
    assert!(
        app.world()
            .resource::<PaneRegistry>()
            .status_of(PaneId::Profile)
            .active
    );
}

#[test]
fn drag_applies_the_pointer_delta_through_the_captured_offset() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(&mut app, PaneId::Profile, geometry());

    // Press on the title bar, clear of the button cluster.
    press_at(&mut app, Vec2::new(300.0, 80.0));
    assert!(matches!(
        *app.world().resource::<ActivePaneGesture>(),
        ActivePaneGesture::Drag { .. }
    ));

    // Pointer moves +50/+40; the pane moves by exactly the same delta.
    move_to(&mut app, Vec2::new(350.0, 120.0));
    assert_eq!(
        geometry_of(&mut app, PaneId::Profile).position,
        Vec2::new(150.0, 90.0)
    );

    release(&mut app);
    assert!(matches!(
        *app.world().resource::<ActivePaneGesture>(),
        ActivePaneGesture::None
    ));
}

#[test]
fn resize_clamps_to_the_minimum_floor() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(&mut app, PaneId::Profile, geometry());

    press_at(&mut app, Vec2::new(495.0, 345.0));
    assert!(matches!(
        *app.world().resource::<ActivePaneGesture>(),
        ActivePaneGesture::Resize { .. }
    ));

    // Pointer above and left of the origin: both axes clamp at the floor.
    move_to(&mut app, Vec2::new(50.0, 30.0));
    assert_eq!(
        geometry_of(&mut app, PaneId::Profile).size,
        Vec2::new(300.0, 200.0)
    );

    move_to(&mut app, Vec2::new(600.0, 500.0));
    assert_eq!(
        geometry_of(&mut app, PaneId::Profile).size,
        Vec2::new(500.0, 450.0)
    );
    release(&mut app);
}

#[test]
fn press_focuses_only_the_topmost_overlapping_pane() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    open(&mut app, PaneId::Experience);
    let shared = PaneGeometry::new(Vec2::new(200.0, 100.0), Vec2::new(400.0, 300.0));
    set_geometry(&mut app, PaneId::Profile, shared);
    set_geometry(&mut app, PaneId::Experience, shared);

    let profile_z_before = app
        .world()
        .resource::<PaneRegistry>()
        .record_of(PaneId::Profile)
        .unwrap()
        .z_index;

    // Body press over both panes; the later-opened pane is on top.
    press_at(&mut app, Vec2::new(400.0, 250.0));
    release(&mut app);

    let registry = app.world().resource::<PaneRegistry>();
    assert_eq!(registry.top_pane(), Some(PaneId::Experience));
    assert_eq!(
        registry.record_of(PaneId::Profile).unwrap().z_index,
        profile_z_before,
        "the occluded pane must not receive the press"
    );
}

#[test]
fn close_button_marks_closing_and_the_surface_outlives_the_delay() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(&mut app, PaneId::Profile, geometry());

    press_at(&mut app, Vec2::new(116.0, 67.0));
    release(&mut app);
    assert!(
        app.world()
            .resource::<PaneRegistry>()
            .record_of(PaneId::Profile)
            .unwrap()
            .closing
    );
    // Still rendered while the exit transition plays.
    assert!(surface_of(&mut app, PaneId::Profile).is_some());

    advance(&mut app, 350);
    assert!(surface_of(&mut app, PaneId::Profile).is_none());
    assert!(
        !app.world()
            .resource::<PaneRegistry>()
            .status_of(PaneId::Profile)
            .active
    );
}

#[test]
fn minimize_button_hides_without_touching_z() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(&mut app, PaneId::Profile, geometry());
    let z_before = app
        .world()
        .resource::<PaneRegistry>()
        .record_of(PaneId::Profile)
        .unwrap()
        .z_index;

    press_at(&mut app, Vec2::new(134.0, 67.0));
    release(&mut app);

    let record = *app
        .world()
        .resource::<PaneRegistry>()
        .record_of(PaneId::Profile)
        .unwrap();
    assert!(record.minimized);
    assert_eq!(record.z_index, z_before);
    assert!(surface_of(&mut app, PaneId::Profile).is_none());
}

#[test]
fn minimize_mid_drag_clears_the_gesture() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(&mut app, PaneId::Profile, geometry());

    press_at(&mut app, Vec2::new(300.0, 80.0));
    assert!(matches!(
        *app.world().resource::<ActivePaneGesture>(),
        ActivePaneGesture::Drag { .. }
    ));

    // Closed out from under the drag, e.g. from the launcher.
    app.world_mut()
        .resource_mut::<PaneRegistry>()
        .minimize(PaneId::Profile);
    app.update();

    assert!(matches!(
        *app.world().resource::<ActivePaneGesture>(),
        ActivePaneGesture::None
    ));
    assert!(surface_of(&mut app, PaneId::Profile).is_none());
    release(&mut app);
}

#[test]
fn geometry_survives_a_minimize_restore_cycle() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    let custom = PaneGeometry::new(Vec2::new(42.0, 24.0), Vec2::new(640.0, 480.0));
    set_geometry(&mut app, PaneId::Profile, custom);

    app.world_mut()
        .resource_mut::<PaneRegistry>()
        .minimize(PaneId::Profile);
    app.update();
    open(&mut app, PaneId::Profile);

    assert_eq!(geometry_of(&mut app, PaneId::Profile), custom);
    let entity = surface_of(&mut app, PaneId::Profile).unwrap();
    assert_eq!(
        app.world().entity(entity).get::<PaneTilt>().unwrap().degrees,
        Vec2::ZERO,
        "interaction state does not survive the cycle"
    );
}

#[test]
fn a_completed_close_resets_geometry_to_defaults() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(
        &mut app,
        PaneId::Profile,
        PaneGeometry::new(Vec2::new(42.0, 24.0), Vec2::new(640.0, 480.0)),
    );

    app.world_mut()
        .resource_mut::<PaneRegistry>()
        .close(PaneId::Profile);
    advance(&mut app, 350);
    assert!(surface_of(&mut app, PaneId::Profile).is_none());

    open(&mut app, PaneId::Profile);
    assert_eq!(
        geometry_of(&mut app, PaneId::Profile),
        PaneGeometry::default_for(0, Vec2::new(1280.0, 720.0))
    );
}

#[test]
fn reopen_during_the_exit_animation_resurrects_the_surface() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    app.world_mut()
        .resource_mut::<PaneRegistry>()
        .close(PaneId::Profile);
    app.update();

    let entity = surface_of(&mut app, PaneId::Profile).unwrap();
    assert!(matches!(
        app.world().entity(entity).get::<PanePhase>().unwrap(),
        PanePhase::Closing
    ));

    open(&mut app, PaneId::Profile);
    advance(&mut app, 400);

    let entity = surface_of(&mut app, PaneId::Profile).expect("survived the stale close");
    assert!(matches!(
        app.world().entity(entity).get::<PanePhase>().unwrap(),
        PanePhase::Idle
    ));
}

#[test]
fn hover_tilts_within_bounds_and_drag_resets_it() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(&mut app, PaneId::Profile, geometry());
    advance(&mut app, 100); // past the mount delay

    // Hover the upper-right quadrant of the pane body.
    move_to(&mut app, Vec2::new(450.0, 120.0));
    let entity = surface_of(&mut app, PaneId::Profile).unwrap();
    let tilt = app.world().entity(entity).get::<PaneTilt>().unwrap().degrees;
    assert!(tilt.x.abs() <= 2.0 && tilt.y.abs() <= 2.0);
    assert!(tilt != Vec2::ZERO);
    assert!(tilt.x > 0.0, "pointer above center tips the pane back");
    assert!(tilt.y > 0.0, "pointer right of center tips it rightward");

    press_at(&mut app, Vec2::new(300.0, 80.0));
    let tilt = app.world().entity(entity).get::<PaneTilt>().unwrap().degrees;
    assert_eq!(tilt, Vec2::ZERO);
    release(&mut app);
}

#[test]
fn mounting_settles_to_idle_after_the_entrance_delay() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    let entity = surface_of(&mut app, PaneId::Profile).unwrap();
    assert!(matches!(
        app.world().entity(entity).get::<PanePhase>().unwrap(),
        PanePhase::Mounting(_)
    ));

    advance(&mut app, 60);
    assert!(matches!(
        app.world().entity(entity).get::<PanePhase>().unwrap(),
        PanePhase::Idle
    ));
}

#[test]
fn presses_on_the_launcher_strip_never_reach_panes() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    set_geometry(
        &mut app,
        PaneId::Profile,
        PaneGeometry::new(Vec2::new(0.0, 50.0), Vec2::new(400.0, 300.0)),
    );
    let z_before = app
        .world()
        .resource::<PaneRegistry>()
        .record_of(PaneId::Profile)
        .unwrap()
        .z_index;

    press_at(&mut app, Vec2::new(60.0, 70.0));
    release(&mut app);

    assert_eq!(
        app.world()
            .resource::<PaneRegistry>()
            .record_of(PaneId::Profile)
            .unwrap()
            .z_index,
        z_before
    );
}

#[test]
fn render_depth_follows_focus_order() {
    let mut app = make_pane_test_app();
    open(&mut app, PaneId::Profile);
    open(&mut app, PaneId::Experience);
    app.update();

    let profile = surface_of(&mut app, PaneId::Profile).unwrap();
    let experience = surface_of(&mut app, PaneId::Experience).unwrap();
    let z = |app: &App, entity: Entity| {
        app.world()
            .entity(entity)
            .get::<Transform>()
            .unwrap()
            .translation
            .z
    };
    assert!(z(&app, experience) > z(&app, profile));

    app.world_mut()
        .resource_mut::<PaneRegistry>()
        .focus(PaneId::Profile);
    app.update();
    assert!(z(&app, profile) > z(&app, experience));
}
