use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    data::states::AppState,
    systems::{
        colors::{STATUS_MINIMIZED, STATUS_OPEN, TERMINAL_GREEN, TEXT_MUTED},
        interaction::{Clickable, Clicked, InteractionSystem},
    },
};

use super::window::{PaneId, PaneRegistry, PaneSystem};

/// The launcher column owns pointer events over this strip; panes dragged
/// underneath it are not clickable there.
pub const LAUNCHER_STRIP_WIDTH: f32 = 128.0;

const ICON_SPACING: f32 = 96.0;
const ICON_TILE_SIZE: f32 = 52.0;
const LAUNCHER_Z: f32 = 500.0;

const TILE_ACTIVE: Color = Color::Srgba(Srgba::new(0.110, 0.160, 0.130, 1.0));
const TILE_IDLE: Color = Color::Srgba(Srgba::new(0.0, 0.0, 0.0, 0.8));
const TILE_HOVERED: Color = Color::Srgba(Srgba::new(0.160, 0.210, 0.180, 1.0));

pub struct LauncherPlugin;
impl Plugin for LauncherPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Desktop), LauncherIcon::spawn_column)
            .add_systems(
                Update,
                (
                    LauncherIcon::open_on_click
                        .in_set(PaneSystem::Input)
                        .after(InteractionSystem),
                    LauncherIcon::sync_indicators.in_set(PaneSystem::Layout),
                ),
            );
    }
}

#[derive(Component)]
pub struct LauncherIcon {
    pub id: PaneId,
}

#[derive(Component)]
struct IconTile {
    id: PaneId,
}

#[derive(Component)]
struct StatusDot {
    id: PaneId,
}

fn icon_glyph(id: PaneId) -> &'static str {
    match id {
        PaneId::Profile => "@",
        PaneId::Experience => "$",
        PaneId::Skills => "#",
        PaneId::Security => "!",
        PaneId::Contact => "&",
    }
}

impl LauncherIcon {
    fn spawn_column(
        mut commands: Commands,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
    ) {
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => Vec2::new(1280.0, 720.0),
        };
        let column_x = -viewport.x * 0.5 + LAUNCHER_STRIP_WIDTH * 0.5;
        let top_y = viewport.y * 0.5 - 90.0;

        for (index, id) in PaneId::ALL.into_iter().enumerate() {
            commands
                .spawn((
                    LauncherIcon { id },
                    Clickable::new(Vec2::new(96.0, 84.0)),
                    Transform::from_xyz(column_x, top_y - index as f32 * ICON_SPACING, LAUNCHER_Z),
                    DespawnOnExit(AppState::Desktop),
                ))
                .with_children(|icon| {
                    icon.spawn((
                        IconTile { id },
                        Sprite::from_color(TILE_IDLE, Vec2::splat(ICON_TILE_SIZE)),
                        Transform::from_xyz(0.0, 12.0, 0.1),
                    ));
                    icon.spawn((
                        Text2d::new(icon_glyph(id)),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(TERMINAL_GREEN),
                        Transform::from_xyz(0.0, 12.0, 0.3),
                    ));
                    icon.spawn((
                        Text2d::new(id.launcher_label()),
                        TextFont {
                            font_size: 11.0,
                            ..default()
                        },
                        TextColor(TEXT_MUTED),
                        Transform::from_xyz(0.0, -26.0, 0.3),
                    ));
                    icon.spawn((
                        StatusDot { id },
                        Sprite::from_color(STATUS_OPEN, Vec2::splat(7.0)),
                        Transform::from_xyz(ICON_TILE_SIZE * 0.5 - 2.0, 12.0 + ICON_TILE_SIZE * 0.5 - 2.0, 0.4),
                        Visibility::Hidden,
                    ));
                });
        }
    }

    fn open_on_click(
        mut clicks: MessageReader<Clicked>,
        icons: Query<&LauncherIcon>,
        mut registry: ResMut<PaneRegistry>,
    ) {
        for click in clicks.read() {
            if let Ok(icon) = icons.get(click.target) {
                registry.open(icon.id);
                log::info!("launcher opened {:?}", icon.id);
            }
        }
    }

    /// Presence dot per tile: green while open, amber while minimized,
    /// hidden while absent. Tiles brighten on hover and tint while their
    /// pane is active.
    fn sync_indicators(
        registry: Res<PaneRegistry>,
        icons: Query<(&LauncherIcon, &Clickable)>,
        mut parts: ParamSet<(
            Query<(&StatusDot, &mut Sprite, &mut Visibility)>,
            Query<(&IconTile, &mut Sprite)>,
        )>,
    ) {
        for (dot, mut sprite, mut visibility) in parts.p0().iter_mut() {
            let status = registry.status_of(dot.id);
            *visibility = if status.active {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
            sprite.color = if status.minimized {
                STATUS_MINIMIZED
            } else {
                STATUS_OPEN
            };
        }

        for (tile, mut sprite) in parts.p1().iter_mut() {
            let hovered = icons
                .iter()
                .any(|(icon, clickable)| icon.id == tile.id && clickable.hovered);
            let active = registry.status_of(tile.id).active;
            sprite.color = if hovered {
                TILE_HOVERED
            } else if active {
                TILE_ACTIVE
            } else {
                TILE_IDLE
            };
        }
    }
}
