use bevy::prelude::*;

mod data;
mod scenes;
mod startup;
mod systems;

use data::states::AppStatesPlugin;
use scenes::{boot::BootPlugin, desktop::DesktopPlugin, overlays::OverlayPlugin};
use startup::{cursor::CursorPlugin, StartupPlugin};
use systems::{
    interaction::InteractionPlugin,
    motion::MotionPlugin,
    particles::ParticlePlugin,
    time::SequencePlugin,
    ui::{launcher::LauncherPlugin, window::PanePlugin},
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(bevy::window::WindowPlugin {
            primary_window: Some(bevy::window::Window {
                title: "root@satnam:~".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(HackdeskPlugin)
        .run();
}

struct HackdeskPlugin;

impl Plugin for HackdeskPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((AppStatesPlugin, StartupPlugin, CursorPlugin))
            .add_plugins((SequencePlugin, MotionPlugin, InteractionPlugin))
            .add_plugins((PanePlugin, LauncherPlugin, ParticlePlugin))
            .add_plugins((BootPlugin, DesktopPlugin, OverlayPlugin));
    }
}
