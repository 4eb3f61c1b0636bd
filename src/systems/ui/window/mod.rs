pub mod registry;

#[cfg(test)]
mod tests;

use bevy::{ecs::hierarchy::ChildSpawnerCommands, prelude::*, window::PrimaryWindow};
use enum_map::{enum_map, EnumMap};

use crate::{
    data::states::AppState,
    startup::cursor::{screen_to_world, CursorTracker},
    systems::colors::{
        CLOSE_BUTTON, MAXIMIZE_BUTTON, MINIMIZE_BUTTON, PANE_BODY, PANE_BORDER, PANE_CHROME,
        PANE_CHROME_DRAGGING, TERMINAL_GREEN, TEXT_DIM, TEXT_MUTED,
    },
    systems::ui::launcher::LAUNCHER_STRIP_WIDTH,
};

pub use registry::{PaneId, PaneRecord, PaneRegistry, PaneStatus, CLOSE_DELAY_SECS};

/* ─────────────────────────  PLUGIN  ───────────────────────── */

pub struct PanePlugin;
impl Plugin for PanePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaneRegistry>()
            .init_resource::<ActivePaneGesture>()
            .init_resource::<GeometryMemory>()
            .init_resource::<ContentRegistry>()
            .configure_sets(
                Update,
                (PaneSystem::Input, PaneSystem::Resolve, PaneSystem::Layout).chain(),
            )
            .add_systems(Update, Pane::begin_gestures.in_set(PaneSystem::Input))
            .add_systems(
                Update,
                (
                    Pane::tick_registry,
                    Pane::enact_gestures,
                    Pane::advance_phase,
                    Pane::despawn_surfaces,
                    Pane::spawn_surfaces,
                    Pane::update_tilt,
                )
                    .chain()
                    .in_set(PaneSystem::Resolve),
            )
            .add_systems(
                Update,
                (Pane::sync_transforms, Pane::sync_chrome)
                    .chain()
                    .in_set(PaneSystem::Layout),
            );
    }
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PaneSystem {
    Input,
    Resolve,
    Layout,
}

/* ─────────────────────────  CONSTANTS  ───────────────────────── */

pub const MIN_PANE_SIZE: Vec2 = Vec2::new(300.0, 200.0);
pub const DEFAULT_PANE_SIZE: Vec2 = Vec2::new(800.0, 600.0);
/// Viewports narrower than this get fixed full-screen panes and no
/// drag/resize gestures.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

const SPAWN_ORIGIN: Vec2 = Vec2::new(350.0, 100.0);
const SPAWN_STAGGER: Vec2 = Vec2::new(30.0, 30.0);
const MOUNT_DELAY_SECS: f32 = 0.05;
const TRANSITION_SECS: f32 = 0.3;
const TILT_MAX_DEGREES: f32 = 2.0;

const HEADER_HEIGHT: f32 = 34.0;
const FOOTER_HEIGHT: f32 = 22.0;
/// Width of the close/minimize/static dot cluster on the left of the
/// header; presses there never start a drag.
const BUTTON_CLUSTER_WIDTH: f32 = 62.0;
const BUTTON_HIT_RADIUS: f32 = 8.0;
const RESIZE_HANDLE_SIZE: f32 = 18.0;

const PANE_BASE_Z: f32 = 100.0;
const PANE_Z_STEP: f32 = 10.0;
const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/* ─────────────────────────  DATA  ───────────────────────── */

/// Root marker of one pane surface. One surface exists per open,
/// non-minimized registry record.
#[derive(Component)]
#[require(Transform, Visibility)]
pub struct Pane {
    pub id: PaneId,
}

/// Authoritative interactive geometry in logical screen pixels, top-left
/// origin, y down. A layout pass maps it to world transforms; nothing
/// else reads the transforms back.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PaneGeometry {
    pub position: Vec2,
    pub size: Vec2,
}

impl PaneGeometry {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Placement for a freshly created record: staggered on desktop,
    /// fixed full-viewport-minus-chrome on narrow viewports.
    pub fn default_for(index: usize, viewport: Vec2) -> Self {
        if viewport.x < MOBILE_BREAKPOINT {
            Self {
                position: Vec2::new(5.0, 60.0),
                size: Vec2::new(viewport.x - 10.0, viewport.y - 120.0),
            }
        } else {
            Self {
                position: SPAWN_ORIGIN + SPAWN_STAGGER * index as f32,
                size: DEFAULT_PANE_SIZE,
            }
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.y
    }

    /// The draggable part of the title bar: the full header minus the
    /// button cluster, so there is no dead zone between drag and close.
    pub fn header_contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x + BUTTON_CLUSTER_WIDTH
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + HEADER_HEIGHT
    }

    fn button_contains(&self, point: Vec2, button_center: Vec2) -> bool {
        let center = self.position + button_center;
        (point.x - center.x).abs() <= BUTTON_HIT_RADIUS
            && (point.y - center.y).abs() <= BUTTON_HIT_RADIUS
    }

    pub fn close_button_contains(&self, point: Vec2) -> bool {
        self.button_contains(point, Vec2::new(16.0, 17.0))
    }

    pub fn minimize_button_contains(&self, point: Vec2) -> bool {
        self.button_contains(point, Vec2::new(34.0, 17.0))
    }

    pub fn resize_handle_contains(&self, point: Vec2) -> bool {
        let corner = self.position + self.size;
        point.x >= corner.x - RESIZE_HANDLE_SIZE
            && point.x <= corner.x
            && point.y >= corner.y - RESIZE_HANDLE_SIZE
            && point.y <= corner.y
    }
}

/// Per-surface lifecycle. The mount delay exists so entrance and exit
/// transitions never collide: a pane closed mid-mount still runs a full
/// exit transition from wherever its scale got to.
#[derive(Component)]
pub enum PanePhase {
    Mounting(Timer),
    Idle,
    Closing,
}

impl PanePhase {
    fn mounting() -> Self {
        PanePhase::Mounting(Timer::from_seconds(MOUNT_DELAY_SECS, TimerMode::Once))
    }
}

/// Entrance/exit transition progress, 0 = fully retracted, 1 = at rest.
#[derive(Component, Default)]
pub struct PaneFx {
    pub progress: f32,
}

/// Cosmetic hover rotation in degrees (x tips forward/back, y left/right).
/// Never consulted by hit-testing or geometry.
#[derive(Component, Default)]
pub struct PaneTilt {
    pub degrees: Vec2,
}

/// The single pointer gesture allowed at a time, process-wide. Cleared
/// unconditionally on release and whenever the target surface goes away,
/// so a minimize or close mid-drag can never leave a stale gesture
/// behind.
#[derive(Resource, Default)]
pub enum ActivePaneGesture {
    #[default]
    None,
    Drag {
        pane: Entity,
        offset: Vec2,
    },
    Resize {
        pane: Entity,
    },
}

impl ActivePaneGesture {
    pub fn target(&self) -> Option<Entity> {
        match self {
            ActivePaneGesture::None => None,
            ActivePaneGesture::Drag { pane, .. } | ActivePaneGesture::Resize { pane } => {
                Some(*pane)
            }
        }
    }
}

/// Last-known geometry per id, written when a surface is torn down for a
/// minimize and handed back as the restore default. A close clears the
/// entry: a fresh open starts from default placement. Interaction state
/// (tilt, gestures) never survives the cycle.
#[derive(Resource, Default)]
pub struct GeometryMemory {
    remembered: EnumMap<PaneId, Option<PaneGeometry>>,
}

impl GeometryMemory {
    pub fn remember(&mut self, id: PaneId, geometry: PaneGeometry) {
        self.remembered[id] = Some(geometry);
    }

    pub fn forget(&mut self, id: PaneId) {
        self.remembered[id] = None;
    }

    pub fn recall(&self, id: PaneId) -> Option<PaneGeometry> {
        self.remembered[id]
    }
}

/// What a pane renders inside its body. The core is agnostic to the
/// content: adding a pane type means registering a provider here, not
/// extending a branch.
pub type ContentProvider = fn(&mut ChildSpawnerCommands);

fn blank_content(_: &mut ChildSpawnerCommands) {}

#[derive(Resource)]
pub struct ContentRegistry {
    providers: EnumMap<PaneId, ContentProvider>,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self {
            providers: enum_map! { _ => blank_content as ContentProvider },
        }
    }
}

impl ContentRegistry {
    pub fn register(&mut self, id: PaneId, provider: ContentProvider) {
        self.providers[id] = provider;
    }

    pub fn provider(&self, id: PaneId) -> ContentProvider {
        self.providers[id]
    }
}

/// Explicit ownership marker tying a chrome child to its pane root.
#[derive(Component, Clone, Copy)]
pub struct Chrome {
    pub pane: Entity,
    pub part: ChromePart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromePart {
    Panel,
    Border,
    Body,
    Header,
    Title,
    CloseDot,
    MinimizeDot,
    StaticDot,
    Footer,
    FooterLeft,
    FooterRight,
    ResizeHandle,
    ContentRoot,
}

/* ─────────────────────────  SYSTEMS  ───────────────────────── */

impl Pane {
    fn tick_registry(time: Res<Time>, mut registry: ResMut<PaneRegistry>) {
        registry.tick(time.delta());
    }

    /// Routes a fresh left press: resolves the topmost pane under the
    /// cursor, then button > resize handle > header drag > plain focus.
    fn begin_gestures(
        mouse: Res<ButtonInput<MouseButton>>,
        cursor: Res<CursorTracker>,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
        mut registry: ResMut<PaneRegistry>,
        mut gesture: ResMut<ActivePaneGesture>,
        mut panes: Query<(Entity, &Pane, &PaneGeometry, &PanePhase, &mut PaneTilt)>,
    ) {
        if !mouse.just_pressed(MouseButton::Left) {
            return;
        }
        let Some(cursor_position) = cursor.screen else {
            return;
        };
        // The launcher strip owns pointer events over its column.
        if cursor_position.x < LAUNCHER_STRIP_WIDTH {
            return;
        }

        let mut top: Option<(Entity, u32)> = None;
        for (entity, pane, geometry, phase, _) in panes.iter() {
            if matches!(phase, PanePhase::Closing) {
                continue;
            }
            if !geometry.contains(cursor_position) {
                continue;
            }
            let Some(record) = registry.record_of(pane.id) else {
                continue;
            };
            if top.is_none_or(|(_, z)| record.z_index > z) {
                top = Some((entity, record.z_index));
            }
        }
        let Some((target, _)) = top else {
            return;
        };
        let Ok((_, pane, geometry, _, mut tilt)) = panes.get_mut(target) else {
            return;
        };

        if geometry.close_button_contains(cursor_position) {
            registry.close(pane.id);
            return;
        }
        if geometry.minimize_button_contains(cursor_position) {
            registry.minimize(pane.id);
            return;
        }

        registry.focus(pane.id);

        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => DEFAULT_VIEWPORT,
        };
        if viewport.x < MOBILE_BREAKPOINT {
            return;
        }

        if geometry.resize_handle_contains(cursor_position) {
            tilt.degrees = Vec2::ZERO;
            *gesture = ActivePaneGesture::Resize { pane: target };
        } else if geometry.header_contains(cursor_position) {
            tilt.degrees = Vec2::ZERO;
            *gesture = ActivePaneGesture::Drag {
                pane: target,
                offset: cursor_position - geometry.position,
            };
        }
    }

    /// Applies the active gesture every frame the button stays down; the
    /// drag offset captured at press time keeps the math free of
    /// per-frame recomputation error. Release ends the gesture
    /// unconditionally, wherever the pointer is.
    fn enact_gestures(
        mouse: Res<ButtonInput<MouseButton>>,
        cursor: Res<CursorTracker>,
        mut gesture: ResMut<ActivePaneGesture>,
        mut geometries: Query<&mut PaneGeometry, With<Pane>>,
    ) {
        if !mouse.pressed(MouseButton::Left) {
            *gesture = ActivePaneGesture::None;
            return;
        }
        let Some(cursor_position) = cursor.screen else {
            return;
        };

        match *gesture {
            ActivePaneGesture::None => {}
            ActivePaneGesture::Drag { pane, offset } => match geometries.get_mut(pane) {
                // No viewport clamping: a pane may follow the pointer
                // partially or fully off-screen.
                Ok(mut geometry) => geometry.position = cursor_position - offset,
                Err(_) => *gesture = ActivePaneGesture::None,
            },
            ActivePaneGesture::Resize { pane } => match geometries.get_mut(pane) {
                Ok(mut geometry) => {
                    geometry.size = (cursor_position - geometry.position).max(MIN_PANE_SIZE);
                }
                Err(_) => *gesture = ActivePaneGesture::None,
            },
        }
    }

    fn advance_phase(
        time: Res<Time>,
        registry: Res<PaneRegistry>,
        mut gesture: ResMut<ActivePaneGesture>,
        mut panes: Query<(Entity, &Pane, &mut PanePhase, &mut PaneTilt)>,
    ) {
        for (entity, pane, mut phase, mut tilt) in panes.iter_mut() {
            let closing = registry
                .record_of(pane.id)
                .is_some_and(|record| record.closing);

            if closing {
                if !matches!(*phase, PanePhase::Closing) {
                    *phase = PanePhase::Closing;
                    tilt.degrees = Vec2::ZERO;
                    if gesture.target() == Some(entity) {
                        *gesture = ActivePaneGesture::None;
                    }
                }
                continue;
            }

            let settled = match &mut *phase {
                PanePhase::Mounting(timer) => {
                    timer.tick(time.delta());
                    timer.is_finished()
                }
                // Re-opened during the exit animation: full reset
                // straight to rest; the fx progress animates back up.
                PanePhase::Closing => true,
                PanePhase::Idle => false,
            };
            if settled {
                *phase = PanePhase::Idle;
            }
        }
    }

    /// Tears down surfaces whose record vanished (close delay elapsed) or
    /// went minimized. Minimize remembers geometry for the restore
    /// default; a completed close forgets it.
    fn despawn_surfaces(
        mut commands: Commands,
        registry: Res<PaneRegistry>,
        mut memory: ResMut<GeometryMemory>,
        mut gesture: ResMut<ActivePaneGesture>,
        panes: Query<(Entity, &Pane, &PaneGeometry)>,
    ) {
        for (entity, pane, geometry) in panes.iter() {
            match registry.record_of(pane.id) {
                Some(record) if !record.minimized => continue,
                Some(_) => memory.remember(pane.id, *geometry),
                None => memory.forget(pane.id),
            }
            if gesture.target() == Some(entity) {
                *gesture = ActivePaneGesture::None;
            }
            commands.entity(entity).despawn();
        }
    }

    fn spawn_surfaces(
        mut commands: Commands,
        registry: Res<PaneRegistry>,
        content: Res<ContentRegistry>,
        memory: Res<GeometryMemory>,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
        existing: Query<&Pane>,
    ) {
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => DEFAULT_VIEWPORT,
        };

        for (index, record) in registry.records().iter().enumerate() {
            if record.minimized {
                continue;
            }
            if existing.iter().any(|pane| pane.id == record.id) {
                continue;
            }
            let geometry = memory
                .recall(record.id)
                .unwrap_or_else(|| PaneGeometry::default_for(index, viewport));
            Self::spawn_surface(&mut commands, record.id, geometry, content.provider(record.id));
        }
    }

    fn spawn_surface(
        commands: &mut Commands,
        id: PaneId,
        geometry: PaneGeometry,
        provider: ContentProvider,
    ) {
        let half = geometry.size * 0.5;
        let pid = (rand::random::<f32>() * 9000.0) as u32 + 1000;
        let mem = (rand::random::<f32>() * 50.0) as u32 + 10;

        let pane = commands
            .spawn((
                Pane { id },
                geometry,
                PanePhase::mounting(),
                PaneFx::default(),
                PaneTilt::default(),
                DespawnOnExit(AppState::Desktop),
            ))
            .id();

        commands.entity(pane).with_children(|root| {
            root.spawn((
                Chrome {
                    pane,
                    part: ChromePart::Panel,
                },
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::Border,
                    },
                    Sprite::from_color(PANE_BORDER, geometry.size + 2.0),
                    Transform::from_xyz(0.0, 0.0, 0.01),
                ));
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::Body,
                    },
                    Sprite::from_color(
                        PANE_BODY,
                        geometry.size - Vec2::new(0.0, HEADER_HEIGHT + FOOTER_HEIGHT),
                    ),
                    Transform::from_xyz(0.0, (FOOTER_HEIGHT - HEADER_HEIGHT) * 0.5, 0.05),
                ));
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::Header,
                    },
                    Sprite::from_color(PANE_CHROME, Vec2::new(geometry.size.x, HEADER_HEIGHT)),
                    Transform::from_xyz(0.0, half.y - HEADER_HEIGHT * 0.5, 0.1),
                ));
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::Title,
                    },
                    Text2d::new(id.title()),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(TEXT_MUTED),
                    Transform::from_xyz(0.0, half.y - HEADER_HEIGHT * 0.5, 0.3),
                ));

                for (part, offset_x, color) in [
                    (ChromePart::CloseDot, 16.0, CLOSE_BUTTON),
                    (ChromePart::MinimizeDot, 34.0, MINIMIZE_BUTTON),
                    (ChromePart::StaticDot, 52.0, MAXIMIZE_BUTTON),
                ] {
                    panel.spawn((
                        Chrome { pane, part },
                        Sprite::from_color(color, Vec2::splat(12.0)),
                        Transform::from_xyz(-half.x + offset_x, half.y - 17.0, 0.3),
                    ));
                }

                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::Footer,
                    },
                    Sprite::from_color(PANE_CHROME, Vec2::new(geometry.size.x, FOOTER_HEIGHT)),
                    Transform::from_xyz(0.0, -half.y + FOOTER_HEIGHT * 0.5, 0.1),
                ));
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::FooterLeft,
                    },
                    Text2d::new(format!("PID: {pid}   MEM: {mem}%")),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(TEXT_DIM),
                    bevy::sprite::Anchor::CENTER_LEFT,
                    Transform::from_xyz(-half.x + 12.0, -half.y + FOOTER_HEIGHT * 0.5, 0.3),
                ));
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::FooterRight,
                    },
                    Text2d::new("TYPE: BASH"),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(TEXT_DIM),
                    bevy::sprite::Anchor::CENTER_RIGHT,
                    Transform::from_xyz(half.x - 26.0, -half.y + FOOTER_HEIGHT * 0.5, 0.3),
                ));
                panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::ResizeHandle,
                    },
                    Sprite::from_color(TEXT_DIM, Vec2::splat(10.0)),
                    Transform::from_xyz(half.x - 9.0, -half.y + 9.0, 0.3),
                ));

                let mut content_root = panel.spawn((
                    Chrome {
                        pane,
                        part: ChromePart::ContentRoot,
                    },
                    Transform::from_xyz(-half.x + 24.0, half.y - HEADER_HEIGHT - 18.0, 0.2),
                    Visibility::default(),
                ));
                content_root.with_children(|body| provider(body));
            });
        });

        log::debug!("surface for {:?} spawned", id);
    }

    /// Recomputes the hover tilt for the topmost pane under the cursor;
    /// every other pane returns to rest. Dragging, resizing, and closing
    /// panes never tilt.
    fn update_tilt(
        cursor: Res<CursorTracker>,
        registry: Res<PaneRegistry>,
        gesture: Res<ActivePaneGesture>,
        mut panes: Query<(Entity, &Pane, &PaneGeometry, &PanePhase, &mut PaneTilt)>,
    ) {
        let hovered = cursor.screen.and_then(|cursor_position| {
            let mut top: Option<(Entity, u32)> = None;
            for (entity, pane, geometry, phase, _) in panes.iter() {
                if !matches!(phase, PanePhase::Idle) {
                    continue;
                }
                if !geometry.contains(cursor_position) {
                    continue;
                }
                let Some(record) = registry.record_of(pane.id) else {
                    continue;
                };
                if top.is_none_or(|(_, z)| record.z_index > z) {
                    top = Some((entity, record.z_index));
                }
            }
            top.map(|(entity, _)| entity)
        });

        for (entity, _, geometry, _, mut tilt) in panes.iter_mut() {
            let tilting = hovered == Some(entity) && gesture.target() != Some(entity);
            tilt.degrees = match (tilting, cursor.screen) {
                (true, Some(cursor_position)) => {
                    let half = geometry.size * 0.5;
                    let offset = cursor_position - geometry.center();
                    Vec2::new(
                        (-offset.y / half.y) * TILT_MAX_DEGREES,
                        (offset.x / half.x) * TILT_MAX_DEGREES,
                    )
                }
                _ => Vec2::ZERO,
            };
        }
    }

    /// Maps screen geometry to world transforms. Depth comes from the
    /// record's rank in ascending z order, so the render z stays bounded
    /// while the registry's counter grows monotonically.
    fn sync_transforms(
        time: Res<Time>,
        registry: Res<PaneRegistry>,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
        mut panes: Query<(&Pane, &PaneGeometry, &PanePhase, &mut PaneFx, &mut Transform)>,
    ) {
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => DEFAULT_VIEWPORT,
        };
        let order = registry.ordered_ids();
        let rate = time.delta_secs() / TRANSITION_SECS;

        for (pane, geometry, phase, mut fx, mut transform) in panes.iter_mut() {
            let target = match phase {
                PanePhase::Mounting(_) | PanePhase::Closing => 0.0,
                PanePhase::Idle => 1.0,
            };
            fx.progress = if fx.progress < target {
                (fx.progress + rate).min(target)
            } else {
                (fx.progress - rate).max(target)
            };

            let rank = order.iter().position(|id| *id == pane.id).unwrap_or(0);
            let world = screen_to_world(geometry.center(), viewport);
            transform.translation = world.extend(PANE_BASE_Z + rank as f32 * PANE_Z_STEP);
            transform.scale = Vec3::splat(0.92 + 0.08 * fx.progress);
        }
    }

    /// Keeps chrome children sized and positioned against the current
    /// geometry and applies the cosmetic tilt and drag highlight.
    fn sync_chrome(
        gesture: Res<ActivePaneGesture>,
        panes: Query<(Entity, &PaneGeometry, &PaneTilt), With<Pane>>,
        mut chrome: Query<(&Chrome, &mut Transform, Option<&mut Sprite>), Without<Pane>>,
    ) {
        for (binding, mut transform, sprite) in chrome.iter_mut() {
            let Ok((pane_entity, geometry, tilt)) = panes.get(binding.pane) else {
                continue;
            };
            let half = geometry.size * 0.5;
            let dragging =
                matches!(*gesture, ActivePaneGesture::Drag { pane, .. } if pane == pane_entity);

            match binding.part {
                ChromePart::Panel => {
                    transform.rotation = Quat::from_euler(
                        EulerRot::XYZ,
                        tilt.degrees.x.to_radians(),
                        tilt.degrees.y.to_radians(),
                        0.0,
                    );
                }
                ChromePart::Border => {
                    if let Some(mut sprite) = sprite {
                        sprite.custom_size = Some(geometry.size + 2.0);
                        sprite.color = if dragging { TERMINAL_GREEN } else { PANE_BORDER };
                    }
                }
                ChromePart::Body => {
                    if let Some(mut sprite) = sprite {
                        sprite.custom_size = Some(
                            geometry.size - Vec2::new(0.0, HEADER_HEIGHT + FOOTER_HEIGHT),
                        );
                    }
                    transform.translation.x = 0.0;
                    transform.translation.y = (FOOTER_HEIGHT - HEADER_HEIGHT) * 0.5;
                }
                ChromePart::Header => {
                    if let Some(mut sprite) = sprite {
                        sprite.custom_size = Some(Vec2::new(geometry.size.x, HEADER_HEIGHT));
                        sprite.color = if dragging {
                            PANE_CHROME_DRAGGING
                        } else {
                            PANE_CHROME
                        };
                    }
                    transform.translation.y = half.y - HEADER_HEIGHT * 0.5;
                }
                ChromePart::Title => {
                    transform.translation.y = half.y - HEADER_HEIGHT * 0.5;
                }
                ChromePart::CloseDot => {
                    transform.translation.x = -half.x + 16.0;
                    transform.translation.y = half.y - 17.0;
                }
                ChromePart::MinimizeDot => {
                    transform.translation.x = -half.x + 34.0;
                    transform.translation.y = half.y - 17.0;
                }
                ChromePart::StaticDot => {
                    transform.translation.x = -half.x + 52.0;
                    transform.translation.y = half.y - 17.0;
                }
                ChromePart::Footer => {
                    if let Some(mut sprite) = sprite {
                        sprite.custom_size = Some(Vec2::new(geometry.size.x, FOOTER_HEIGHT));
                    }
                    transform.translation.y = -half.y + FOOTER_HEIGHT * 0.5;
                }
                ChromePart::FooterLeft => {
                    transform.translation.x = -half.x + 12.0;
                    transform.translation.y = -half.y + FOOTER_HEIGHT * 0.5;
                }
                ChromePart::FooterRight => {
                    transform.translation.x = half.x - 26.0;
                    transform.translation.y = -half.y + FOOTER_HEIGHT * 0.5;
                }
                ChromePart::ResizeHandle => {
                    transform.translation.x = half.x - 9.0;
                    transform.translation.y = -half.y + 9.0;
                }
                ChromePart::ContentRoot => {
                    transform.translation.x = -half.x + 24.0;
                    transform.translation.y = half.y - HEADER_HEIGHT - 18.0;
                }
            }
        }
    }
}
