use std::time::Duration;

use bevy::prelude::*;
use enum_map::Enum;

/// Fixed identity of each pane. At most one live record exists per id.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaneId {
    Profile,
    Experience,
    Skills,
    Security,
    Contact,
}

impl PaneId {
    pub const ALL: [PaneId; 5] = [
        PaneId::Profile,
        PaneId::Experience,
        PaneId::Skills,
        PaneId::Security,
        PaneId::Contact,
    ];

    /// The in-fiction program name shown on the launcher tile.
    pub fn codename(self) -> &'static str {
        match self {
            PaneId::Profile => "WHOAMI",
            PaneId::Experience => "HISTORY",
            PaneId::Skills => "MAN SKILLS",
            PaneId::Security => "MSFCONSOLE",
            PaneId::Contact => "NC -LVNP",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            PaneId::Profile => "whoami",
            PaneId::Experience => "history",
            PaneId::Skills => "man_skills",
            PaneId::Security => "msfconsole",
            PaneId::Contact => "nc_-lvnp",
        }
    }

    pub fn title(self) -> String {
        format!("root@satnam:~/{}", self.slug())
    }

    pub fn launcher_label(self) -> &'static str {
        match self {
            PaneId::Profile => "whoami",
            PaneId::Experience => "history",
            PaneId::Skills => "skills",
            PaneId::Security => "exploits",
            PaneId::Contact => "connect",
        }
    }
}

/// Seconds between `close` and the record actually leaving the registry,
/// matching the pane's exit transition.
pub const CLOSE_DELAY_SECS: f32 = 0.3;

#[derive(Clone, Copy, Debug)]
pub struct PaneRecord {
    pub id: PaneId,
    pub minimized: bool,
    pub closing: bool,
    /// Drawn from a strictly increasing pool; never reused, even after
    /// the pane closes.
    pub z_index: u32,
}

/// Launcher-facing projection of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneStatus {
    pub active: bool,
    pub minimized: bool,
}

/// Authoritative pane lifecycle state. Pure data: no rendering, no
/// pointer handling. Surfaces call back into it; it never reaches into a
/// surface. Lifecycle calls on an id with no record are no-ops.
#[derive(Resource)]
pub struct PaneRegistry {
    records: Vec<PaneRecord>,
    top_z: u32,
    removals: Vec<(PaneId, Timer)>,
}

impl Default for PaneRegistry {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            top_z: 10,
            removals: Vec::new(),
        }
    }
}

impl PaneRegistry {
    fn next_z(&mut self) -> u32 {
        self.top_z += 1;
        self.top_z
    }

    /// Opens `id`, reusing any existing record: restore-and-focus rather
    /// than duplicate. Opening during the closing delay fully resets the
    /// record and cancels the pending removal, so a restored pane can
    /// never be yanked away by a stale close.
    pub fn open(&mut self, id: PaneId) {
        let z_index = self.next_z();
        self.removals.retain(|(pending, _)| *pending != id);

        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.minimized = false;
                record.closing = false;
                record.z_index = z_index;
                log::debug!("pane {:?} restored at z {}", id, z_index);
            }
            None => {
                self.records.push(PaneRecord {
                    id,
                    minimized: false,
                    closing: false,
                    z_index,
                });
                log::debug!("pane {:?} opened at z {}", id, z_index);
            }
        }
    }

    /// Marks the record closing and arms the deferred removal. The record
    /// stays queryable until the delay elapses; a repeated close during
    /// the delay is a no-op.
    pub fn close(&mut self, id: PaneId) {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return;
        };
        if record.closing {
            return;
        }
        record.closing = true;
        self.removals
            .push((id, Timer::from_seconds(CLOSE_DELAY_SECS, TimerMode::Once)));
        log::debug!("pane {:?} closing", id);
    }

    /// Hides the surface while keeping the record; stacking order is
    /// untouched.
    pub fn minimize(&mut self, id: PaneId) {
        if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
            record.minimized = true;
            log::debug!("pane {:?} minimized", id);
        }
    }

    /// Raises `id` to the top of the stack; no other field changes.
    pub fn focus(&mut self, id: PaneId) {
        if !self.records.iter().any(|record| record.id == id) {
            return;
        }
        let z_index = self.next_z();
        if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
            record.z_index = z_index;
        }
    }

    pub fn status_of(&self, id: PaneId) -> PaneStatus {
        match self.record_of(id) {
            Some(record) => PaneStatus {
                active: true,
                minimized: record.minimized,
            },
            None => PaneStatus {
                active: false,
                minimized: false,
            },
        }
    }

    pub fn record_of(&self, id: PaneId) -> Option<&PaneRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[PaneRecord] {
        &self.records
    }

    /// The id holding the numerically highest z — the exclusive target of
    /// pointer events on overlapping panes.
    pub fn top_pane(&self) -> Option<PaneId> {
        self.records
            .iter()
            .max_by_key(|record| record.z_index)
            .map(|record| record.id)
    }

    /// Records in ascending z order. Render depth derives from the rank
    /// in this list, so world z never drifts upward while the z pool
    /// stays a pure monotonic counter.
    pub fn ordered_ids(&self) -> Vec<PaneId> {
        let mut ordered: Vec<&PaneRecord> = self.records.iter().collect();
        ordered.sort_by_key(|record| record.z_index);
        ordered.into_iter().map(|record| record.id).collect()
    }

    /// Advances the deferred-removal timers; records whose delay elapsed
    /// are removed within the same call.
    pub fn tick(&mut self, delta: Duration) {
        if self.removals.is_empty() {
            return;
        }
        let mut expired = Vec::new();
        for (id, timer) in self.removals.iter_mut() {
            timer.tick(delta);
            if timer.is_finished() {
                expired.push(*id);
            }
        }
        if expired.is_empty() {
            return;
        }
        self.removals.retain(|(_, timer)| !timer.is_finished());
        self.records.retain(|record| !expired.contains(&record.id));
        for id in expired {
            log::debug!("pane {:?} removed", id);
        }
    }
}
