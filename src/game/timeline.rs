//! Single logical timeline for delayed UI commands
//!
//! Fire-and-forget: nothing is ever cancelled. Commands due at the same
//! instant come out in the order they were scheduled.

use super::{Effect, UiCommand};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending {
    due: Instant,
    seq: u64,
    command: UiCommand,
}

/// Queue of commands waiting for their due time
#[derive(Debug, Default)]
pub struct Timeline {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue effects relative to `now`
    pub fn schedule(&mut self, now: Instant, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.pending.push(Pending {
                due: now + effect.delay,
                seq: self.next_seq,
                command: effect.command,
            });
            self.next_seq += 1;
        }
    }

    /// Remove and return every command due at or before `now`
    pub fn take_due(&mut self, now: Instant) -> Vec<UiCommand> {
        let (mut due, waiting): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.command).collect()
    }

    /// Time until the next command is due, if any
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_duration_since(now))
            .min()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ALERT_DURATION, OVERLAY_DELAY};

    #[test]
    fn immediate_effects_are_due_now() {
        let mut timeline = Timeline::new();
        let now = Instant::now();
        timeline.schedule(
            now,
            [
                Effect::now(UiCommand::ShowAlert("hi".into())),
                Effect::after(ALERT_DURATION, UiCommand::HideAlert),
            ],
        );

        assert_eq!(timeline.take_due(now), vec![UiCommand::ShowAlert("hi".into())]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.time_until_next(now), Some(ALERT_DURATION));
    }

    #[test]
    fn delayed_effects_release_in_due_order() {
        let mut timeline = Timeline::new();
        let now = Instant::now();
        timeline.schedule(
            now,
            [
                Effect::after(ALERT_DURATION, UiCommand::HideAlert),
                Effect::after(OVERLAY_DELAY, UiCommand::ShowEndOverlay("won".into())),
            ],
        );

        assert!(timeline.take_due(now).is_empty());
        assert_eq!(
            timeline.take_due(now + OVERLAY_DELAY),
            vec![UiCommand::ShowEndOverlay("won".into())]
        );
        assert_eq!(
            timeline.take_due(now + ALERT_DURATION),
            vec![UiCommand::HideAlert]
        );
        assert!(timeline.is_empty());
        assert_eq!(timeline.time_until_next(now), None);
    }

    #[test]
    fn same_due_time_keeps_schedule_order() {
        let mut timeline = Timeline::new();
        let now = Instant::now();
        timeline.schedule(now, [Effect::now(UiCommand::HideEndOverlay)]);
        timeline.schedule(now, [Effect::now(UiCommand::ClearBoard)]);

        assert_eq!(
            timeline.take_due(now),
            vec![UiCommand::HideEndOverlay, UiCommand::ClearBoard]
        );
    }

    #[test]
    fn overdue_reports_zero_wait() {
        let mut timeline = Timeline::new();
        let now = Instant::now();
        timeline.schedule(now, [Effect::after(OVERLAY_DELAY, UiCommand::HideAlert)]);
        assert_eq!(
            timeline.time_until_next(now + ALERT_DURATION),
            Some(Duration::ZERO)
        );
    }
}
