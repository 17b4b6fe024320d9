//! Auto-fire: a periodic shot request scheduled on the host clock,
//! independent of the frame stepper.
//!
//! The task only runs while it is enabled, the host has focus, and the
//! run is playing. Any of those dropping cancels the pending deadline;
//! when all hold again the schedule restarts one interval later, so a
//! resume never releases a burst of stale shots.

use galaxian_core::state::AutoFireView;

#[derive(Debug, Clone)]
pub struct AutoFire {
    interval_ms: f64,
    enabled: bool,
    focused: bool,
    playing: bool,
    next_due_ms: Option<f64>,
}

impl AutoFire {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            enabled: false,
            focused: true,
            playing: false,
            next_due_ms: None,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool, now_ms: f64) {
        self.enabled = enabled;
        self.reschedule(now_ms);
    }

    pub fn set_focused(&mut self, focused: bool, now_ms: f64) {
        self.focused = focused;
        self.reschedule(now_ms);
    }

    pub fn set_playing(&mut self, playing: bool, now_ms: f64) {
        self.playing = playing;
        self.reschedule(now_ms);
    }

    pub fn is_running(&self) -> bool {
        self.enabled && self.focused && self.playing
    }

    pub fn is_scheduled(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// True if a shot came due since the last poll. Several missed
    /// deadlines collapse into one request; shooting is cooldown-gated.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let missed = ((now_ms - due) / self.interval_ms).floor() + 1.0;
        self.next_due_ms = Some(due + missed * self.interval_ms);
        true
    }

    pub fn view(&self) -> AutoFireView {
        AutoFireView {
            enabled: self.enabled,
            suspended: self.enabled && !self.is_running(),
        }
    }

    fn reschedule(&mut self, now_ms: f64) {
        if !self.is_running() {
            self.next_due_ms = None;
        } else if self.next_due_ms.is_none() {
            self.next_due_ms = Some(now_ms + self.interval_ms);
        }
    }
}
