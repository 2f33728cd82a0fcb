//! Collaborator ports - the seams where the host plugs in
//!
//! The engine never draws, plays audio, or keeps score itself; it talks to
//! the host through these traits. The presentation contract is the only one
//! with a completion obligation: every `begin` call must eventually produce
//! exactly one matching `task_done` on the engine, or the cascade stalls at
//! its barrier. Score and feedback calls are fire-and-forget.

use triad_types::{CellId, Coord};

use crate::tasks::TaskTicket;

/// Target visual state for one cell's presentation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Slide an existing tile to its new coordinate (drop-fall).
    Move { to: Coord },
    /// Shrink/remove a matched tile.
    Remove,
    /// Introduce a freshly refilled tile at its coordinate (spawn-fall).
    Spawn { at: Coord },
}

/// Animation service. Implementations perform the transition and arrange for
/// the ticket to be completed exactly once, even if they redraw every frame.
pub trait Presenter {
    fn begin(&mut self, ticket: TaskTicket, cell: CellId, transition: Transition);
}

/// Scoring collaborator. `combo` starts at 1 and never decreases within one
/// cascade episode. The engine consumes no return value.
pub trait ScoreSink {
    fn increment_score(&mut self, matched: usize, combo: u32);
}

/// Audio/feedback collaborator, notified of swap outcomes. Observational
/// only; must not reach back into the engine.
pub trait FeedbackSink {
    fn swap_accepted(&mut self);
    fn swap_rejected(&mut self);
}

/// Headless presenter: every task completes the moment it is begun. Hosts
/// without a display (tests, the demo driver, simulations) drain the
/// completions after each tick and feed them back to the engine.
#[derive(Debug, Default)]
pub struct InstantFx {
    done: Vec<TaskTicket>,
    transitions: Vec<(CellId, Transition)>,
}

impl InstantFx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the tickets completed since the last drain.
    pub fn drain_done(&mut self) -> Vec<TaskTicket> {
        std::mem::take(&mut self.done)
    }

    /// Every transition requested so far, in request order.
    pub fn transitions(&self) -> &[(CellId, Transition)] {
        &self.transitions
    }

    pub fn clear_transitions(&mut self) {
        self.transitions.clear();
    }
}

impl Presenter for InstantFx {
    fn begin(&mut self, ticket: TaskTicket, cell: CellId, transition: Transition) {
        self.transitions.push((cell, transition));
        self.done.push(ticket);
    }
}

/// Reference score sink: accumulates `matched x combo` and keeps the raw
/// call log for assertions.
#[derive(Debug, Default)]
pub struct TallyScore {
    pub total: u64,
    pub calls: Vec<(usize, u32)>,
}

impl TallyScore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreSink for TallyScore {
    fn increment_score(&mut self, matched: usize, combo: u32) {
        self.total += matched as u64 * combo as u64;
        self.calls.push((matched, combo));
    }
}

/// Feedback sink that only counts outcomes.
#[derive(Debug, Default)]
pub struct CountingFeedback {
    pub accepted: u32,
    pub rejected: u32,
}

impl CountingFeedback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackSink for CountingFeedback {
    fn swap_accepted(&mut self) {
        self.accepted += 1;
    }

    fn swap_rejected(&mut self) {
        self.rejected += 1;
    }
}

/// Feedback sink that ignores everything.
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn swap_accepted(&mut self) {}
    fn swap_rejected(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskSet;

    #[test]
    fn test_instant_fx_completes_immediately() {
        let mut tasks = TaskSet::new();
        let mut fx = InstantFx::new();

        let t = tasks.issue();
        fx.begin(t, CellId(3), Transition::Remove);

        let done = fx.drain_done();
        assert_eq!(done, vec![t]);
        assert!(fx.drain_done().is_empty());
        assert_eq!(fx.transitions(), &[(CellId(3), Transition::Remove)]);
    }

    #[test]
    fn test_tally_score_accumulates_with_combo() {
        let mut score = TallyScore::new();
        score.increment_score(3, 1);
        score.increment_score(4, 2);
        assert_eq!(score.total, 3 + 8);
        assert_eq!(score.calls, vec![(3, 1), (4, 2)]);
    }

    #[test]
    fn test_counting_feedback() {
        let mut feedback = CountingFeedback::new();
        feedback.swap_accepted();
        feedback.swap_rejected();
        feedback.swap_rejected();
        assert_eq!(feedback.accepted, 1);
        assert_eq!(feedback.rejected, 2);
    }
}
