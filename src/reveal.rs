//! Paced playback of shot outcomes.
//!
//! One response cycle becomes an ordered queue of timed steps: the player's
//! reveal immediately, the computer's reveal after a fixed gap, then a commit
//! that swaps in the full authoritative snapshot. The pacing is fixed on
//! purpose: how fast the engine answered has no bearing on how the story is
//! told, and even an instant reply keeps its dramatic pause.

use std::collections::VecDeque;

use tokio::time::Instant;

use crate::config::{REVEAL_COMMIT_GAP, REVEAL_SHOT_GAP};
use crate::domain::ShotOutcome;
use crate::session::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// Mark one cell and append its log line.
    Shot(ShotOutcome),
    /// Re-render wholesale from the staged snapshot and check for game over.
    Commit,
}

#[derive(Debug, Clone)]
pub struct RevealStep {
    pub session: SessionId,
    pub due: Instant,
    pub event: RevealEvent,
}

/// Ordered queue of tagged, timed reveal steps.
///
/// Steps release strictly front-first: a step is never handed out before its
/// due time, and never before every step staged ahead of it. The queue is not
/// cancellable mid-cycle; the only way to drop steps is [`begin_session`],
/// which discards everything tagged for another session.
///
/// [`begin_session`]: RevealScheduler::begin_session
#[derive(Debug)]
pub struct RevealScheduler {
    session: Option<SessionId>,
    queue: VecDeque<RevealStep>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self {
            session: None,
            queue: VecDeque::new(),
        }
    }

    /// Switch to a new session, flushing steps any prior session left behind
    /// so a late timer cannot touch the new board.
    pub fn begin_session(&mut self, id: SessionId) {
        self.session = Some(id);
        self.queue.retain(|step| step.session == id);
    }

    /// Stage the steps for one response cycle, starting at `now`.
    pub fn stage(&mut self, now: Instant, outcomes: &[ShotOutcome]) {
        let Some(session) = self.session else {
            return;
        };
        let mut due = now;
        for (i, outcome) in outcomes.iter().enumerate() {
            if i > 0 {
                due += REVEAL_SHOT_GAP;
            }
            self.queue.push_back(RevealStep {
                session,
                due,
                event: RevealEvent::Shot(outcome.clone()),
            });
        }
        due += REVEAL_COMMIT_GAP;
        self.queue.push_back(RevealStep {
            session,
            due,
            event: RevealEvent::Commit,
        });
    }

    /// Pop the front step if its time has come. Stale-tagged steps are
    /// silently dropped on the way.
    pub fn pop_due(&mut self, now: Instant) -> Option<RevealStep> {
        loop {
            let front = self.queue.front()?;
            if Some(front.session) != self.session {
                self.queue.pop_front();
                continue;
            }
            if front.due <= now {
                return self.queue.pop_front();
            }
            return None;
        }
    }

    /// When the next step becomes due, if any are pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue
            .iter()
            .find(|step| Some(step.session) == self.session)
            .map(|step| step.due)
    }

    pub fn is_idle(&self) -> bool {
        !self
            .queue
            .iter()
            .any(|step| Some(step.session) == self.session)
    }

    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|step| Some(step.session) == self.session)
            .count()
    }
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new()
    }
}
