use bevy::prelude::*;

pub struct AppStatesPlugin;
impl Plugin for AppStatesPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>();
    }
}

/// Top-level flow: the scripted boot log plays first, then the desktop
/// (launcher + panes) mounts and stays for the rest of the session.
#[derive(Default, States, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    Booting,
    Desktop,
}
