use bevy::{prelude::*, window::PrimaryWindow};

use super::MainCamera;

pub struct CursorPlugin;
impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorTracker>()
            .add_systems(PreUpdate, CursorTracker::update_position);
    }
}

/// Pointer position sampled once per frame, before any interaction system
/// runs, so every consumer within one frame sees the same snapshot.
#[derive(Resource, Default)]
pub struct CursorTracker {
    /// Logical window coordinates, top-left origin, y down. `None` while
    /// the pointer is outside the window.
    pub screen: Option<Vec2>,
    /// The same position projected into 2D world space.
    pub world: Option<Vec2>,
}

impl CursorTracker {
    fn update_position(
        mut tracker: ResMut<CursorTracker>,
        window: Option<Single<&Window, With<PrimaryWindow>>>,
        camera: Option<Single<(&Camera, &GlobalTransform), With<MainCamera>>>,
    ) {
        let Some(window) = window else {
            tracker.screen = None;
            tracker.world = None;
            return;
        };

        tracker.screen = window.cursor_position();
        tracker.world = match (tracker.screen, camera) {
            (Some(screen), Some(camera)) => {
                let (camera, camera_transform) = *camera;
                camera.viewport_to_world_2d(camera_transform, screen).ok()
            }
            _ => None,
        };
    }
}

/// Maps logical window coordinates (top-left origin, y down) to world
/// coordinates for a camera centered on the viewport.
pub fn screen_to_world(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(screen.x - viewport.x * 0.5, viewport.y * 0.5 - screen.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_to_world_maps_viewport_center_to_origin() {
        let viewport = Vec2::new(1280.0, 720.0);
        assert_eq!(screen_to_world(viewport * 0.5, viewport), Vec2::ZERO);
    }

    #[test]
    fn screen_to_world_flips_y() {
        let viewport = Vec2::new(1280.0, 720.0);
        let world = screen_to_world(Vec2::new(0.0, 0.0), viewport);
        assert_eq!(world, Vec2::new(-640.0, 360.0));
    }
}
