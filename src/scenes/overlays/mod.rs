use bevy::{prelude::*, sprite::Anchor, window::PrimaryWindow};

use crate::{
    data::resume::RESUME,
    startup::cursor::{screen_to_world, CursorTracker},
    systems::{
        colors::{
            BREACH_BACKDROP, DANGER_RED, PANE_CHROME, TERMINAL_GREEN, TEXT_DIM, TEXT_MUTED,
        },
        interaction::{Clickable, Clicked, InteractionSystem},
        motion::{Blink, Shake},
    },
};

pub struct OverlayPlugin;
impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MenuAction>().add_systems(
            Update,
            (
                ContextMenu::act.after(InteractionSystem),
                ContextMenu::toggle,
                SecurityBreach::trigger,
                SecurityBreach::tick,
            )
                .chain(),
        );
    }
}

/* ─────────────────────────  CONTEXT MENU  ───────────────────────── */

pub const MENU_SIZE: Vec2 = Vec2::new(220.0, 200.0);
const MENU_ROW_SIZE: Vec2 = Vec2::new(212.0, 36.0);
const MENU_Z: f32 = 900.0;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    InspectElement,
    ViewSource,
    SystemDiagnostics,
    OverrideSecurity,
}

const MENU_ENTRIES: [(&str, MenuAction); 4] = [
    ("Inspect Element", MenuAction::InspectElement),
    ("View Source Code", MenuAction::ViewSource),
    ("System Diagnostics", MenuAction::SystemDiagnostics),
    ("Override Security", MenuAction::OverrideSecurity),
];

#[derive(Component)]
struct ContextMenu;

#[derive(Component)]
struct MenuRow {
    action: MenuAction,
}

/// Keeps the menu's top-left corner inside the viewport by flipping it to
/// the other side of the pointer when it would overflow.
pub fn clamp_menu_origin(pointer: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        if pointer.x > viewport.x - MENU_SIZE.x {
            pointer.x - MENU_SIZE.x
        } else {
            pointer.x
        },
        if pointer.y > viewport.y - MENU_SIZE.y {
            pointer.y - MENU_SIZE.y
        } else {
            pointer.y
        },
    )
}

impl ContextMenu {
    /// A right press (re)opens the menu at the pointer; any left press
    /// dismisses it, whether or not it hit a row.
    fn toggle(
        mut commands: Commands,
        mouse: Res<ButtonInput<MouseButton>>,
        cursor: Res<CursorTracker>,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
        menus: Query<Entity, With<ContextMenu>>,
    ) {
        if mouse.just_pressed(MouseButton::Left) {
            for menu in menus.iter() {
                commands.entity(menu).despawn();
            }
            return;
        }
        if !mouse.just_pressed(MouseButton::Right) {
            return;
        }
        for menu in menus.iter() {
            commands.entity(menu).despawn();
        }
        let Some(pointer) = cursor.screen else {
            return;
        };
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => Vec2::new(1280.0, 720.0),
        };

        let origin = clamp_menu_origin(pointer, viewport);
        let center = screen_to_world(origin + MENU_SIZE * 0.5, viewport);

        commands
            .spawn((
                ContextMenu,
                Transform::from_translation(center.extend(MENU_Z)),
                Visibility::default(),
            ))
            .with_children(|menu| {
                menu.spawn((
                    Sprite::from_color(PANE_CHROME, MENU_SIZE),
                    Transform::from_xyz(0.0, 0.0, 0.0),
                ));
                menu.spawn((
                    Text2d::new("CTX_MENU_V1"),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(TERMINAL_GREEN),
                    Anchor::CENTER_LEFT,
                    Transform::from_xyz(-MENU_SIZE.x * 0.5 + 8.0, MENU_SIZE.y * 0.5 - 12.0, 0.2),
                ));
                for (index, (label, action)) in MENU_ENTRIES.into_iter().enumerate() {
                    let row_y = MENU_SIZE.y * 0.5 - 42.0 - index as f32 * MENU_ROW_SIZE.y;
                    menu.spawn((
                        MenuRow { action },
                        Clickable::new(MENU_ROW_SIZE),
                        Transform::from_xyz(0.0, row_y, 0.1),
                    ))
                    .with_children(|row| {
                        row.spawn((
                            Text2d::new(label),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(TEXT_MUTED),
                            Anchor::CENTER_LEFT,
                            Transform::from_xyz(-MENU_ROW_SIZE.x * 0.5 + 10.0, 0.0, 0.1),
                        ));
                    });
                }
                menu.spawn((
                    Text2d::new("satnam@root:~$ _"),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(TEXT_DIM),
                    Transform::from_xyz(0.0, -MENU_SIZE.y * 0.5 + 10.0, 0.2),
                ));
            });
    }

    fn act(
        mut clicks: MessageReader<Clicked>,
        rows: Query<&MenuRow>,
        mut actions: MessageWriter<MenuAction>,
    ) {
        for click in clicks.read() {
            if let Ok(row) = rows.get(click.target) {
                actions.write(row.action);
            }
        }
    }
}

/* ─────────────────────────  SECURITY BREACH  ───────────────────────── */

const BREACH_Z: f32 = 950.0;
const BREACH_RESET_SECS: f32 = 3.5;
const TRACE_TICK_SECS: f32 = 0.1;

#[derive(Component)]
struct BreachOverlay {
    reset: Timer,
    trace: Timer,
    count: u32,
}

#[derive(Component)]
struct TraceReadout;

struct SecurityBreach;

impl SecurityBreach {
    fn trigger(
        mut commands: Commands,
        mut actions: MessageReader<MenuAction>,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
        existing: Query<(), With<BreachOverlay>>,
    ) {
        for action in actions.read() {
            match action {
                MenuAction::OverrideSecurity => {
                    if existing.is_empty() {
                        let viewport = match &window {
                            Some(window) => Vec2::new(window.width(), window.height()),
                            None => Vec2::new(1280.0, 720.0),
                        };
                        Self::spawn(&mut commands, viewport);
                        log::warn!("security override engaged, lockdown splash up");
                    }
                }
                MenuAction::InspectElement | MenuAction::ViewSource => {
                    log::info!("source requested: {}", RESUME.personal.github);
                }
                MenuAction::SystemDiagnostics => {
                    log::info!("system diagnostics requested");
                }
            }
        }
    }

    fn spawn(commands: &mut Commands, viewport: Vec2) {
        commands
            .spawn((
                BreachOverlay {
                    reset: Timer::from_seconds(BREACH_RESET_SECS, TimerMode::Once),
                    trace: Timer::from_seconds(TRACE_TICK_SECS, TimerMode::Repeating),
                    count: 0,
                },
                Shake::new(5.0, 0.06),
                Transform::from_xyz(0.0, 0.0, BREACH_Z),
                Visibility::default(),
            ))
            .with_children(|overlay| {
                overlay.spawn((
                    Sprite::from_color(BREACH_BACKDROP, viewport * 1.2),
                    Transform::from_xyz(0.0, 0.0, 0.0),
                ));
                overlay.spawn((
                    Sprite::from_color(DANGER_RED, Vec2::new(640.0, 8.0)),
                    Transform::from_xyz(0.0, 150.0, 0.2),
                ));
                overlay.spawn((
                    Text2d::new("ACCESS DENIED"),
                    TextFont {
                        font_size: 72.0,
                        ..default()
                    },
                    TextColor(DANGER_RED),
                    Blink::new(0.6),
                    Transform::from_xyz(0.0, 80.0, 0.3),
                ));
                overlay.spawn((
                    Text2d::new("⚠ SECURITY PROTOCOL VIOLATION ⚠"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, 10.0, 0.3),
                ));
                overlay.spawn((
                    Text2d::new("SYSTEM LOCKDOWN INITIATED"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, -20.0, 0.3),
                ));
                overlay.spawn((
                    TraceReadout,
                    Text2d::new("TRACING IP ADDRESS... [192.168.1.0]"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, -50.0, 0.3),
                ));
                overlay.spawn((
                    Sprite::from_color(DANGER_RED, Vec2::new(640.0, 8.0)),
                    Transform::from_xyz(0.0, -110.0, 0.2),
                ));
            });
    }

    /// Advances the fake IP trace every 100 ms and tears the whole splash
    /// down after the reset delay; despawning cancels both timers.
    fn tick(
        mut commands: Commands,
        time: Res<Time>,
        mut overlays: Query<(Entity, &mut BreachOverlay, &Children)>,
        mut readouts: Query<&mut Text2d, With<TraceReadout>>,
    ) {
        for (entity, mut breach, children) in overlays.iter_mut() {
            breach.trace.tick(time.delta());
            breach.reset.tick(time.delta());

            if breach.trace.just_finished() {
                breach.count += breach.trace.times_finished_this_tick();
                for child in children.iter() {
                    if let Ok(mut text) = readouts.get_mut(child) {
                        text.0 = format!(
                            "TRACING IP ADDRESS... [{}.{}.1.{}]",
                            192 + breach.count % 50,
                            168 + breach.count % 20,
                            breach.count % 255
                        );
                    }
                }
            }

            if breach.reset.is_finished() {
                commands.entity(entity).despawn();
                log::info!("security lockdown reset");
            }
        }
    }
}
