pub mod content;

use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    data::states::AppState,
    startup::cursor::CursorTracker,
    systems::{
        motion::Pulse,
        ui::window::{PaneId, PaneRegistry},
    },
};

pub struct DesktopPlugin;
impl Plugin for DesktopPlugin {
    fn build(&self, app: &mut App) {
        content::register(app);
        app.add_systems(
            OnEnter(AppState::Desktop),
            (Desktop::setup, Desktop::open_default),
        )
        .add_systems(
            Update,
            Desktop::parallax.run_if(in_state(AppState::Desktop)),
        );
    }
}

const GRID_SPACING: f32 = 50.0;
/// Total pointer-driven travel of the background grid, in pixels.
const PARALLAX_RANGE: f32 = 20.0;
const GRID_Z: f32 = 1.0;

const GRID_LINE: Color = Color::Srgba(Srgba::new(0.133, 0.773, 0.369, 0.07));
const ORB_GREEN: Color = Color::Srgba(Srgba::new(0.133, 0.773, 0.369, 0.05));
const ORB_BLUE: Color = Color::Srgba(Srgba::new(0.231, 0.510, 0.965, 0.05));

#[derive(Component)]
struct GridParallax;

struct Desktop;

impl Desktop {
    fn setup(
        mut commands: Commands,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
    ) {
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => Vec2::new(1280.0, 720.0),
        };
        // Oversized so the parallax shift never exposes an edge.
        let extent = viewport * 1.1 + Vec2::splat(PARALLAX_RANGE * 2.0);

        commands
            .spawn((
                GridParallax,
                Transform::from_xyz(0.0, 0.0, GRID_Z),
                Visibility::default(),
                DespawnOnExit(AppState::Desktop),
            ))
            .with_children(|grid| {
                let mut x = -extent.x * 0.5;
                while x <= extent.x * 0.5 {
                    grid.spawn((
                        Sprite::from_color(GRID_LINE, Vec2::new(1.0, extent.y)),
                        Transform::from_xyz(x, 0.0, 0.0),
                    ));
                    x += GRID_SPACING;
                }
                let mut y = -extent.y * 0.5;
                while y <= extent.y * 0.5 {
                    grid.spawn((
                        Sprite::from_color(GRID_LINE, Vec2::new(extent.x, 1.0)),
                        Transform::from_xyz(0.0, y, 0.0),
                    ));
                    y += GRID_SPACING;
                }
            });

        commands.spawn((
            Sprite::from_color(ORB_GREEN, Vec2::splat(256.0)),
            Transform::from_xyz(-viewport.x * 0.25, viewport.y * 0.15, GRID_Z + 1.0),
            Pulse::new(0.15, 4.0),
            DespawnOnExit(AppState::Desktop),
        ));
        commands.spawn((
            Sprite::from_color(ORB_BLUE, Vec2::splat(384.0)),
            Transform::from_xyz(viewport.x * 0.25, -viewport.y * 0.2, GRID_Z + 1.0),
            Pulse::new(0.15, 5.0),
            DespawnOnExit(AppState::Desktop),
        ));
    }

    fn open_default(mut registry: ResMut<PaneRegistry>) {
        registry.open(PaneId::Profile);
    }

    fn parallax(
        cursor: Res<CursorTracker>,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
        mut grids: Query<&mut Transform, With<GridParallax>>,
    ) {
        let Some(screen) = cursor.screen else {
            return;
        };
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => Vec2::new(1280.0, 720.0),
        };
        let normalized = (screen / viewport - Vec2::splat(0.5)) * PARALLAX_RANGE;
        for mut transform in grids.iter_mut() {
            transform.translation.x = -normalized.x;
            transform.translation.y = normalized.y;
        }
    }
}
