use std::{collections::VecDeque, time::Duration};

use bevy::prelude::*;

pub struct SequencePlugin;
impl Plugin for SequencePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SequenceStepFired>()
            .add_message::<SequenceFinished>()
            .add_systems(Update, StepSequence::tick);
    }
}

/// One step of a scripted sequence: a payload plus the pause held after
/// the payload fires, before the next step is considered.
#[derive(Clone, Debug)]
pub struct SequenceStep {
    pub payload: String,
    pub hold: Duration,
}

impl SequenceStep {
    pub fn new(payload: impl Into<String>, hold: Duration) -> Self {
        Self {
            payload: payload.into(),
            hold,
        }
    }
}

#[derive(Message, Clone, Debug)]
pub struct SequenceStepFired {
    pub source: Entity,
    pub index: usize,
    pub payload: String,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SequenceFinished {
    pub source: Entity,
}

/// A finite `(payload, delay)` script consumed by a single timer. Every
/// payload fires exactly once, in order; despawning the owning entity
/// cancels the remainder, so no step can fire against torn-down state.
#[derive(Component)]
pub struct StepSequence {
    steps: VecDeque<SequenceStep>,
    timer: Timer,
    fired: usize,
    finished: bool,
}

impl StepSequence {
    pub fn new(lead_in: Duration, steps: impl IntoIterator<Item = SequenceStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            timer: Timer::new(lead_in, TimerMode::Once),
            fired: 0,
            finished: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    fn tick(
        time: Res<Time>,
        mut sequences: Query<(Entity, &mut StepSequence)>,
        mut step_tx: MessageWriter<SequenceStepFired>,
        mut done_tx: MessageWriter<SequenceFinished>,
    ) {
        for (entity, mut sequence) in sequences.iter_mut() {
            if sequence.finished {
                continue;
            }

            // A `Once` timer discards overshoot, so the frame's delta is
            // spent hold by hold: one oversized tick drains every step
            // whose deadline it covers.
            let mut budget = time.delta();
            loop {
                let remaining = sequence.timer.remaining();
                if budget < remaining {
                    sequence.timer.tick(budget);
                    break;
                }
                budget -= remaining;
                sequence.timer.tick(remaining);

                match sequence.steps.pop_front() {
                    Some(step) => {
                        let index = sequence.fired;
                        sequence.fired += 1;
                        step_tx.write(SequenceStepFired {
                            source: entity,
                            index,
                            payload: step.payload,
                        });
                        sequence.timer = Timer::new(step.hold, TimerMode::Once);
                    }
                    None => {
                        sequence.finished = true;
                        done_tx.write(SequenceFinished { source: entity });
                        break;
                    }
                }
            }
        }
    }
}
