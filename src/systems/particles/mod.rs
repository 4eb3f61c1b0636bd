use bevy::prelude::*;

use crate::{
    startup::cursor::CursorTracker,
    systems::colors::{BRIGHT_GREEN, TERMINAL_GREEN},
};

pub struct ParticlePlugin;
impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailSampler>().add_systems(
            Update,
            (
                GlyphParticle::spawn_trail,
                GlyphParticle::spawn_burst,
                GlyphParticle::advance,
            )
                .chain(),
        );
    }
}

/// Minimum pointer displacement between trail spawns. Rate-limits fast
/// continuous movement to one glyph per threshold crossing.
const SPAWN_DISTANCE: f32 = 10.0;
const BURST_COUNT: usize = 15;
const LIFE_DECAY: f32 = 0.02;
const FIELD_Z: f32 = 800.0;

const TRAIL_GLYPHS: [char; 2] = ['0', '1'];
const BURST_GLYPHS: [char; 2] = ['{', '}'];

/// A short-lived decorative glyph. Life starts at 1.0, decays by a fixed
/// step every tick, and the entity is despawned on the same tick the
/// value reaches zero, so the live set stays bounded by
/// spawn rate x lifetime.
#[derive(Component)]
pub struct GlyphParticle {
    pub velocity: Vec2,
    pub life: f32,
}

/// Last pointer position a trail glyph was emitted at.
#[derive(Resource, Default)]
pub struct TrailSampler {
    pub last: Option<Vec2>,
}

fn pick(glyphs: [char; 2]) -> char {
    if rand::random::<f32>() > 0.5 {
        glyphs[0]
    } else {
        glyphs[1]
    }
}

impl GlyphParticle {
    fn spawn(commands: &mut Commands, at: Vec2, velocity: Vec2, glyph: char, size: f32, color: Color) {
        commands.spawn((
            GlyphParticle {
                velocity,
                life: 1.0,
            },
            Text2d::new(glyph.to_string()),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(color),
            Transform::from_translation(at.extend(FIELD_Z)),
        ));
    }

    fn spawn_trail(
        mut commands: Commands,
        cursor: Res<CursorTracker>,
        mut sampler: ResMut<TrailSampler>,
    ) {
        let Some(position) = cursor.world else {
            return;
        };
        let Some(last) = sampler.last else {
            sampler.last = Some(position);
            return;
        };
        if position.distance(last) <= SPAWN_DISTANCE {
            return;
        }

        let velocity = Vec2::new(
            (rand::random::<f32>() - 0.5) * 0.5,
            -((rand::random::<f32>() - 0.5) * 0.5 + 1.0),
        );
        Self::spawn(
            &mut commands,
            position,
            velocity,
            pick(TRAIL_GLYPHS),
            rand::random::<f32>() * 10.0 + 8.0,
            TERMINAL_GREEN,
        );
        sampler.last = Some(position);
    }

    fn spawn_burst(
        mut commands: Commands,
        cursor: Res<CursorTracker>,
        mouse: Res<ButtonInput<MouseButton>>,
    ) {
        if !mouse.just_pressed(MouseButton::Left) {
            return;
        }
        let Some(position) = cursor.world else {
            return;
        };

        for _ in 0..BURST_COUNT {
            let velocity = Vec2::new(
                (rand::random::<f32>() - 0.5) * 10.0,
                (rand::random::<f32>() - 0.5) * 10.0,
            );
            Self::spawn(
                &mut commands,
                position,
                velocity,
                pick(BURST_GLYPHS),
                rand::random::<f32>() * 15.0 + 10.0,
                BRIGHT_GREEN,
            );
        }
    }

    fn advance(
        mut commands: Commands,
        mut particles: Query<(Entity, &mut GlyphParticle, &mut Transform, &mut TextColor)>,
    ) {
        for (entity, mut particle, mut transform, mut color) in particles.iter_mut() {
            particle.life -= LIFE_DECAY;
            if particle.life <= 0.0 {
                commands.entity(entity).despawn();
                continue;
            }
            transform.translation.x += particle.velocity.x;
            transform.translation.y += particle.velocity.y;
            color.0 = color.0.with_alpha(particle.life);
        }
    }
}
