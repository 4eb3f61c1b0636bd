use bevy::prelude::*;

// GitHub-dark chrome with a terminal-green accent. All values are plain
// sRGB; the app renders without HDR so nothing exceeds 1.0.

pub const TERMINAL_GREEN: Color = Color::Srgba(Srgba::new(0.133, 0.773, 0.369, 1.0));
pub const BRIGHT_GREEN: Color = Color::Srgba(Srgba::new(0.290, 0.871, 0.502, 1.0));
pub const DIM_GREEN: Color = Color::Srgba(Srgba::new(0.133, 0.773, 0.369, 0.35));

pub const DESKTOP_BACKGROUND: Color = Color::Srgba(Srgba::new(0.051, 0.067, 0.090, 1.0));
pub const PANE_BODY: Color = Color::Srgba(Srgba::new(0.051, 0.067, 0.090, 0.95));
pub const PANE_CHROME: Color = Color::Srgba(Srgba::new(0.086, 0.106, 0.133, 1.0));
pub const PANE_BORDER: Color = Color::Srgba(Srgba::new(0.188, 0.212, 0.239, 1.0));
pub const PANE_CHROME_DRAGGING: Color = Color::Srgba(Srgba::new(0.086, 0.180, 0.120, 1.0));

pub const TEXT_PRIMARY: Color = Color::Srgba(Srgba::new(0.839, 0.855, 0.886, 1.0));
pub const TEXT_MUTED: Color = Color::Srgba(Srgba::new(0.612, 0.639, 0.686, 1.0));
pub const TEXT_DIM: Color = Color::Srgba(Srgba::new(0.420, 0.447, 0.502, 1.0));

pub const CLOSE_BUTTON: Color = Color::Srgba(Srgba::new(1.0, 0.373, 0.337, 1.0));
pub const MINIMIZE_BUTTON: Color = Color::Srgba(Srgba::new(1.0, 0.741, 0.180, 1.0));
pub const MAXIMIZE_BUTTON: Color = Color::Srgba(Srgba::new(0.153, 0.788, 0.247, 1.0));

pub const STATUS_OPEN: Color = TERMINAL_GREEN;
pub const STATUS_MINIMIZED: Color = MINIMIZE_BUTTON;

pub const DANGER_RED: Color = Color::Srgba(Srgba::new(0.863, 0.149, 0.149, 1.0));
pub const BREACH_BACKDROP: Color = Color::Srgba(Srgba::new(0.270, 0.040, 0.040, 0.97));

pub const ACCENT_BLUE: Color = Color::Srgba(Srgba::new(0.380, 0.647, 0.980, 1.0));
pub const ACCENT_YELLOW: Color = Color::Srgba(Srgba::new(0.980, 0.800, 0.082, 1.0));
pub const ACCENT_PURPLE: Color = Color::Srgba(Srgba::new(0.659, 0.333, 0.969, 1.0));
