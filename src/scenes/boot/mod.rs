use std::time::Duration;

use bevy::{prelude::*, sprite::Anchor, window::PrimaryWindow};

use crate::{
    data::states::AppState,
    systems::{
        colors::{TERMINAL_GREEN, TEXT_DIM, TEXT_MUTED},
        motion::Blink,
        time::{SequenceFinished, SequenceStep, SequenceStepFired, StepSequence},
    },
};

pub struct BootPlugin;
impl Plugin for BootPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Booting), BootLog::setup)
            .add_systems(
                Update,
                (BootLog::append_lines, BootLog::finish).run_if(in_state(AppState::Booting)),
            );
    }
}

const BOOT_SEQUENCE: [&str; 30] = [
    "[    0.000000] Linux version 6.8.11-amd64 (satnam@kali) (gcc-13)",
    "[    0.000000] Command line: BOOT_IMAGE=/boot/vmlinuz-6.8.11-amd64 root=UUID=1337-cafe ro quiet splash",
    "[    0.081253] KERNEL: Arch: x86_64, CPU: AMD Ryzen 9 7950X, MHz: 4500.00",
    "[    0.122210] console [tty0] enabled",
    "[    0.452110] ACPI: Core revision 20230628",
    "[    0.912333] input: Power Button as /devices/LNXSYSTM:00/LNXSYBUS:00/PNP0C0C:00/input/input0",
    "[ OK ] Reached target System Initialization.",
    "[ OK ] Started CUPS Scheduler.",
    "[ OK ] Started Network Manager Script Dispatcher Service.",
    "[ OK ] Found device /dev/nvme0n1 (2TB SSD).",
    "[ OK ] Mounted /boot/efi.",
    " ",
    "$ systemctl start docker.service",
    "[ OK ] Started Docker Application Container Engine.",
    "$ service postgresql start",
    "[ OK ] Started PostgreSQL RDBMS.",
    " ",
    "$ whoami",
    "root",
    "$ uname -r",
    "6.8.11-kali-amd64",
    " ",
    "$ ./init_portfolio_env.sh",
    "[+] Verifying system integrity...",
    "[+] Loading components: [Experience, Projects, Skills]",
    "[+] Starting display manager...",
    "[+] Initializing graphical interface (X11)...",
    " ",
    "Login successful. Welcome, Satnam.",
    "Starting Desktop Environment...",
];

const LEAD_IN_MILLIS: u64 = 100;
const GRACE_MILLIS: u64 = 800;
const FAST_SCROLL_MILLIS: u64 = 20;
const COMMAND_MILLIS: u64 = 500;
const LOADER_MILLIS: u64 = 250;
const BLANK_MILLIS: u64 = 300;
const FINAL_MILLIS: u64 = 1000;

const LINE_HEIGHT: f32 = 18.0;
const MAX_VISIBLE_LINES: usize = 40;

/// Pacing mimics a real boot: kernel spam scrolls fast, typed commands
/// take a beat, loaders a shorter one, and the final line lingers before
/// the desktop takes over.
fn line_hold(line: &str) -> Duration {
    let millis = if line.starts_with('$') {
        COMMAND_MILLIS
    } else if line.starts_with("[+]") {
        LOADER_MILLIS
    } else if line.trim().is_empty() {
        BLANK_MILLIS
    } else if line.contains("Starting Desktop") {
        FINAL_MILLIS
    } else {
        FAST_SCROLL_MILLIS
    };
    Duration::from_millis(millis)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineClass {
    Command,
    Success,
    Kernel,
    Plain,
}

fn classify(line: &str) -> LineClass {
    if line.starts_with('$') {
        LineClass::Command
    } else if line.contains("[ OK ]") || line.starts_with("[+]") {
        LineClass::Success
    } else if line.starts_with('[') {
        LineClass::Kernel
    } else {
        LineClass::Plain
    }
}

fn line_color(class: LineClass) -> Color {
    match class {
        LineClass::Command => Color::WHITE,
        LineClass::Success => TERMINAL_GREEN,
        LineClass::Kernel => TEXT_DIM,
        LineClass::Plain => TEXT_MUTED,
    }
}

#[derive(Component)]
struct BootLog {
    lines: Vec<Entity>,
}

#[derive(Component)]
struct BootExit {
    grace: Timer,
}

impl BootLog {
    fn setup(
        mut commands: Commands,
        window: Option<Single<&bevy::window::Window, With<PrimaryWindow>>>,
    ) {
        let viewport = match &window {
            Some(window) => Vec2::new(window.width(), window.height()),
            None => Vec2::new(1280.0, 720.0),
        };
        let left = -viewport.x.min(900.0) * 0.5 + 16.0;

        commands
            .spawn((
                BootLog { lines: Vec::new() },
                StepSequence::new(
                    Duration::from_millis(LEAD_IN_MILLIS),
                    BOOT_SEQUENCE
                        .iter()
                        .map(|line| SequenceStep::new(*line, line_hold(line))),
                ),
                Transform::from_xyz(left, -viewport.y * 0.5 + 48.0, 10.0),
                Visibility::default(),
                DespawnOnExit(AppState::Booting),
            ))
            .with_children(|root| {
                root.spawn((
                    Blink::new(1.0),
                    Text2d::new("_"),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(TERMINAL_GREEN),
                    Anchor::BOTTOM_LEFT,
                    Transform::from_xyz(0.0, 0.0, 0.1),
                ));
            });
    }

    /// Appends each fired line at the tail and scrolls the backlog up;
    /// lines past the cap fall off the top.
    fn append_lines(
        mut commands: Commands,
        mut fired: MessageReader<SequenceStepFired>,
        mut logs: Query<(Entity, &mut BootLog)>,
        mut transforms: Query<&mut Transform>,
    ) {
        for message in fired.read() {
            let Ok((root, mut log)) = logs.get_mut(message.source) else {
                continue;
            };

            for &line in log.lines.iter() {
                if let Ok(mut transform) = transforms.get_mut(line) {
                    transform.translation.y += LINE_HEIGHT;
                }
            }

            let class = classify(&message.payload);
            let line = commands
                .spawn((
                    Text2d::new(message.payload.clone()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(line_color(class)),
                    Anchor::BOTTOM_LEFT,
                    Transform::from_xyz(0.0, LINE_HEIGHT, 0.1),
                    ChildOf(root),
                ))
                .id();
            log.lines.push(line);

            if log.lines.len() > MAX_VISIBLE_LINES {
                let oldest = log.lines.remove(0);
                commands.entity(oldest).despawn();
            }
        }
    }

    /// The sequence's completion arms a short grace timer; when it fires
    /// the desktop mounts and the boot scene (sequence included) is torn
    /// down by the state transition.
    fn finish(
        mut commands: Commands,
        time: Res<Time>,
        mut finished: MessageReader<SequenceFinished>,
        mut exits: Query<&mut BootExit>,
        mut next: ResMut<NextState<AppState>>,
    ) {
        for message in finished.read() {
            commands.entity(message.source).insert(BootExit {
                grace: Timer::new(Duration::from_millis(GRACE_MILLIS), TimerMode::Once),
            });
        }

        for mut exit in exits.iter_mut() {
            exit.grace.tick(time.delta());
            if exit.grace.just_finished() {
                log::info!("boot sequence complete, mounting desktop");
                next.set(AppState::Desktop);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::systems::time::SequencePlugin;

    #[test]
    fn pacing_matches_the_reference_table() {
        assert_eq!(line_hold("$ whoami"), Duration::from_millis(500));
        assert_eq!(
            line_hold("[+] Verifying system integrity..."),
            Duration::from_millis(250)
        );
        assert_eq!(line_hold(" "), Duration::from_millis(300));
        assert_eq!(
            line_hold("Starting Desktop Environment..."),
            Duration::from_millis(1000)
        );
        assert_eq!(
            line_hold("[ OK ] Mounted /boot/efi."),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn lines_classify_by_prefix() {
        assert_eq!(classify("$ uname -r"), LineClass::Command);
        assert_eq!(classify("[ OK ] Started CUPS Scheduler."), LineClass::Success);
        assert_eq!(classify("[+] Starting display manager..."), LineClass::Success);
        assert_eq!(classify("[    0.122210] console [tty0] enabled"), LineClass::Kernel);
        assert_eq!(classify("root"), LineClass::Plain);
    }

    fn make_boot_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_resource::<Time>();
        app.init_state::<AppState>();
        app.add_plugins((SequencePlugin, BootPlugin));
        app
    }

    fn advance(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        app.update();
    }

    #[test]
    fn playback_appends_lines_and_hands_off_to_the_desktop() {
        let mut app = make_boot_test_app();
        app.update(); // OnEnter(Booting) spawns the log

        advance(&mut app, 200);
        let lines = app
            .world_mut()
            .query::<&BootLog>()
            .single(app.world())
            .unwrap()
            .lines
            .len();
        assert!(lines > 0, "early boot lines render promptly");
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Booting
        );

        // The whole script plus the grace period; one extra frame for the
        // queued state transition to apply.
        advance(&mut app, 10_000);
        advance(&mut app, 1_000);
        app.update();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Desktop
        );
    }
}
