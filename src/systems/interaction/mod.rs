use bevy::prelude::*;

use crate::startup::cursor::CursorTracker;

pub struct InteractionPlugin;
impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Clicked>().add_systems(
            Update,
            (Clickable::update_hover, Clickable::emit_clicks)
                .chain()
                .in_set(InteractionSystem),
        );
    }
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InteractionSystem;

/// Axis-aligned hit region centered on the entity's global translation.
/// Deliberately ignores rotation: cosmetic tilt must never affect
/// hit-testing.
#[derive(Component)]
#[require(Transform, Visibility)]
pub struct Clickable {
    pub region: Vec2,
    pub hovered: bool,
}

/// Fired for the topmost hovered `Clickable` on a left press.
#[derive(Message, Clone, Copy, Debug)]
pub struct Clicked {
    pub target: Entity,
}

impl Clickable {
    pub fn new(region: Vec2) -> Self {
        Self {
            region,
            hovered: false,
        }
    }

    fn update_hover(
        cursor: Res<CursorTracker>,
        mut query: Query<(&mut Clickable, &GlobalTransform, &InheritedVisibility)>,
    ) {
        for (mut clickable, global, visibility) in query.iter_mut() {
            clickable.hovered = match cursor.world {
                Some(world) if visibility.get() => {
                    point_in_region(world, global.translation().truncate(), clickable.region)
                }
                _ => false,
            };
        }
    }

    fn emit_clicks(
        mouse: Res<ButtonInput<MouseButton>>,
        query: Query<(Entity, &Clickable, &GlobalTransform)>,
        mut clicks: MessageWriter<Clicked>,
    ) {
        if !mouse.just_pressed(MouseButton::Left) {
            return;
        }

        let mut top: Option<(Entity, f32)> = None;
        for (entity, clickable, global) in query.iter() {
            if !clickable.hovered {
                continue;
            }
            let z = global.translation().z;
            let replace = match top {
                None => true,
                Some((current, current_z)) => {
                    z > current_z || (z == current_z && entity.index() > current.index())
                }
            };
            if replace {
                top = Some((entity, z));
            }
        }

        if let Some((target, _)) = top {
            clicks.write(Clicked { target });
        }
    }
}

pub fn point_in_region(point: Vec2, center: Vec2, region: Vec2) -> bool {
    (point.x - center.x).abs() <= region.x * 0.5 && (point.y - center.y).abs() <= region.y * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Captured(Vec<Entity>);

    fn capture(mut rx: MessageReader<Clicked>, mut captured: ResMut<Captured>) {
        captured.0.extend(rx.read().map(|click| click.target));
    }

    fn make_interaction_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app.init_resource::<CursorTracker>();
        app.init_resource::<Captured>();
        app.add_plugins(InteractionPlugin);
        app.add_systems(Update, capture.after(InteractionSystem));
        app
    }

    fn spawn_clickable(app: &mut App, center: Vec2, z: f32, region: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Clickable::new(region),
                GlobalTransform::from(Transform::from_xyz(center.x, center.y, z)),
            ))
            .id()
    }

    fn put_cursor(app: &mut App, world: Vec2) {
        app.world_mut().resource_mut::<CursorTracker>().world = Some(world);
    }

    #[test]
    fn hover_tracks_cursor_inside_region() {
        let mut app = make_interaction_test_app();
        let entity = spawn_clickable(&mut app, Vec2::ZERO, 0.0, Vec2::new(40.0, 20.0));

        put_cursor(&mut app, Vec2::new(19.0, 9.0));
        app.update();
        assert!(app.world().entity(entity).get::<Clickable>().unwrap().hovered);

        put_cursor(&mut app, Vec2::new(21.0, 0.0));
        app.update();
        assert!(!app.world().entity(entity).get::<Clickable>().unwrap().hovered);
    }

    #[test]
    fn press_clicks_only_the_topmost_overlapping_region() {
        let mut app = make_interaction_test_app();
        let below = spawn_clickable(&mut app, Vec2::ZERO, 1.0, Vec2::splat(50.0));
        let above = spawn_clickable(&mut app, Vec2::ZERO, 2.0, Vec2::splat(50.0));

        put_cursor(&mut app, Vec2::ZERO);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let captured = app.world().resource::<Captured>();
        assert_eq!(captured.0, vec![above]);
        assert_ne!(captured.0.first(), Some(&below));
    }

    #[test]
    fn no_click_without_hover() {
        let mut app = make_interaction_test_app();
        spawn_clickable(&mut app, Vec2::new(500.0, 500.0), 0.0, Vec2::splat(10.0));

        put_cursor(&mut app, Vec2::ZERO);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert!(app.world().resource::<Captured>().0.is_empty());
    }
}
