use std::f32::consts::TAU;

use bevy::prelude::*;

pub struct MotionPlugin;
impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (Pulse::enact, Blink::enact, Shake::enact));
    }
}

/// Continuous scale breathing around the scale the entity spawned with.
#[derive(Component)]
pub struct Pulse {
    pub amplitude: f32,
    pub period: f32,
    elapsed: f32,
    base_scale: Option<Vec3>,
}

impl Pulse {
    pub fn new(amplitude: f32, period: f32) -> Self {
        Self {
            amplitude,
            period: period.max(0.01),
            elapsed: 0.0,
            base_scale: None,
        }
    }

    fn enact(time: Res<Time>, mut query: Query<(&mut Pulse, &mut Transform)>) {
        for (mut pulse, mut transform) in query.iter_mut() {
            let base = *pulse.base_scale.get_or_insert(transform.scale);
            pulse.elapsed += time.delta_secs();
            let phase = (TAU * pulse.elapsed / pulse.period).sin();
            transform.scale = base * (1.0 + pulse.amplitude * 0.5 * (1.0 + phase));
        }
    }
}

/// Square-wave visibility toggle, used for terminal cursor underscores
/// and warning text.
#[derive(Component)]
pub struct Blink {
    timer: Timer,
}

impl Blink {
    pub fn new(period: f32) -> Self {
        Self {
            timer: Timer::from_seconds(period * 0.5, TimerMode::Repeating),
        }
    }

    fn enact(time: Res<Time>, mut query: Query<(&mut Blink, &mut Visibility)>) {
        for (mut blink, mut visibility) in query.iter_mut() {
            blink.timer.tick(time.delta());
            if blink.timer.just_finished() {
                *visibility = match *visibility {
                    Visibility::Hidden => Visibility::Inherited,
                    _ => Visibility::Hidden,
                };
            }
        }
    }
}

/// Bounded positional jitter around the spawn translation.
#[derive(Component)]
pub struct Shake {
    pub magnitude: f32,
    timer: Timer,
    base: Option<Vec3>,
}

impl Shake {
    pub fn new(magnitude: f32, interval: f32) -> Self {
        Self {
            magnitude,
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
            base: None,
        }
    }

    fn enact(time: Res<Time>, mut query: Query<(&mut Shake, &mut Transform)>) {
        for (mut shake, mut transform) in query.iter_mut() {
            let base = *shake.base.get_or_insert(transform.translation);
            shake.timer.tick(time.delta());
            if shake.timer.just_finished() {
                let jitter = Vec3::new(
                    (rand::random::<f32>() - 0.5) * 2.0 * shake.magnitude,
                    (rand::random::<f32>() - 0.5) * 2.0 * shake.magnitude,
                    0.0,
                );
                transform.translation = base + jitter;
            }
        }
    }
}
