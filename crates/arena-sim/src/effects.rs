//! Scheduled presentational flashes.
//!
//! Each entry is "show this until T". Entries are pruned during the frame;
//! nothing here ever calls back into simulation state.

use arena_core::enums::FlashKind;

#[derive(Debug, Clone, Default)]
pub struct ScheduledEffects {
    entries: Vec<(FlashKind, f64)>,
}

impl ScheduledEffects {
    /// Show `kind` for `duration` seconds from `now`. Rescheduling an active
    /// kind moves its expiry rather than adding a second entry.
    pub fn schedule(&mut self, kind: FlashKind, now: f64, duration: f64) {
        let until = now + duration;
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = entry.1.max(until),
            None => self.entries.push((kind, until)),
        }
    }

    /// Drop everything that has expired by `now`.
    pub fn prune(&mut self, now: f64) {
        self.entries.retain(|&(_, until)| until > now);
    }

    pub fn active(&self) -> Vec<FlashKind> {
        self.entries.iter().map(|&(kind, _)| kind).collect()
    }

    pub fn is_active(&self, kind: FlashKind) -> bool {
        self.entries.iter().any(|&(k, _)| k == kind)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
