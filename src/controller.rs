//! Turn controller: the state machine that owns the session, gates intents
//! and drives the reveal playback.

use tokio::time::Instant;

use crate::common::ApiError;
use crate::config::BOARD_SIZE;
use crate::domain::{Actor, CellState, GameSnapshot, ShotOutcome};
use crate::engine_api::GameApi;
use crate::event_log::{EventLog, LogKind};
use crate::reveal::{RevealEvent, RevealScheduler, RevealStep};
use crate::session::{ClientSession, SessionId};
use crate::ui::coord_label;

/// Externally observable controller phase.
///
/// The computer's move arrives bundled in the same response as the player's,
/// so there is no separate waiting-for-computer phase; the pair is handled as
/// one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active game.
    Idle,
    /// Committed and waiting for the player to pick a target.
    AwaitingPlayerInput,
    /// A request is in flight.
    ResolvingShot,
    /// Staged reveal steps are playing back.
    Revealing,
    /// Terminal; only a new game leaves this phase.
    GameOver,
}

pub struct TurnController {
    api: Box<dyn GameApi>,
    phase: Phase,
    session: Option<ClientSession>,
    scheduler: RevealScheduler,
    log: EventLog,
    next_session: u64,
}

impl TurnController {
    pub fn new(api: Box<dyn GameApi>) -> Self {
        Self {
            api,
            phase: Phase::Idle,
            session: None,
            scheduler: RevealScheduler::new(),
            log: EventLog::new(),
            next_session: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&ClientSession> {
        self.session.as_ref()
    }

    /// The snapshot the renderer should draw right now.
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.session.as_ref().map(|s| &s.snapshot)
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// When the next reveal step becomes due, if playback is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// True iff a fire intent would pass the turn gate right now: it is the
    /// player's turn, the game is live, and no request or reveal is pending.
    pub fn input_enabled(&self) -> bool {
        self.phase == Phase::AwaitingPlayerInput
            && self.scheduler.is_idle()
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.snapshot.current_turn == Actor::Player && !s.snapshot.game_over)
    }

    /// Start a brand-new game, replacing any prior session wholesale.
    ///
    /// On failure the prior session, phase and pending reveal steps are left
    /// exactly as they were and a notice is logged; the returned error lets
    /// the caller decide whether a first start failing is fatal.
    pub async fn start_new_game(&mut self) -> Result<(), ApiError> {
        let prev_phase = self.phase;
        self.phase = Phase::ResolvingShot;
        match self.api.new_game().await {
            Ok(resp) => {
                // Best-effort cleanup of the superseded game on the engine.
                if let Some(old) = self.session.take() {
                    if let Err(err) = self.api.delete_game(&old.game_id).await {
                        log::debug!("could not delete superseded game {}: {}", old.game_id, err);
                    }
                }
                let id = SessionId::new(self.next_session);
                self.next_session += 1;
                // Flush stale reveal steps before the new session can render.
                self.scheduler.begin_session(id);
                let game_over = resp.game_state.game_over;
                log::info!("game {} started", resp.game_id);
                self.session = Some(ClientSession::new(id, resp.game_id, resp.game_state));
                self.phase = if game_over {
                    Phase::GameOver
                } else {
                    Phase::AwaitingPlayerInput
                };
                let text = if resp.message.is_empty() {
                    "New game started! Fire at enemy waters.".to_string()
                } else {
                    resp.message
                };
                self.log.push(LogKind::Info, text);
                Ok(())
            }
            Err(err) => {
                self.phase = prev_phase;
                self.log
                    .push(LogKind::Error, format!("Error starting new game: {}", err));
                Err(err)
            }
        }
    }

    /// Attempt to fire at `(row, col)`.
    ///
    /// Precondition violations (gate closed, off-board coordinate, cell
    /// already shot) never reach the network; they log one advisory line and
    /// return `Ok`. Engine failures are logged, leave the session untouched
    /// and are returned for callers that care.
    ///
    /// The reveal schedule is anchored at the moment the response arrives,
    /// so the fixed pauses play out in full no matter how long the round
    /// trip took.
    pub async fn fire(&mut self, row: u8, col: u8) -> Result<(), ApiError> {
        if !self.input_enabled() {
            self.log.push(LogKind::Advisory, "Not your turn!");
            return Ok(());
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            self.log.push(LogKind::Advisory, "That cell is off the board!");
            return Ok(());
        }
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        // Gate on the rendered value: hits and misses are spent, while a
        // leaked enemy ship cell renders as water and stays targetable.
        let cell = session.snapshot.computer_board[row as usize][col as usize];
        if matches!(cell, CellState::Hit | CellState::Miss) {
            self.log.push(
                LogKind::Advisory,
                format!("Already fired at {}!", coord_label(row, col)),
            );
            return Ok(());
        }

        let game_id = session.game_id.clone();
        self.phase = Phase::ResolvingShot;
        let result = self.api.fire(&game_id, row, col).await;
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.phase = Phase::AwaitingPlayerInput;
                self.log.push(LogKind::Error, format!("Error: {}", err));
                return Err(err);
            }
        };
        let outcomes = match response.outcomes((row, col)) {
            Ok(outcomes) => outcomes,
            Err(err) => {
                self.phase = Phase::AwaitingPlayerInput;
                self.log.push(LogKind::Error, format!("Error: {}", err));
                return Err(err);
            }
        };
        log::debug!(
            "shot at ({}, {}) resolved with {} outcome(s)",
            row,
            col,
            outcomes.len()
        );
        if let Some(session) = self.session.as_mut() {
            session.stage(response.game_state);
        }
        self.scheduler.stage(Instant::now(), &outcomes);
        self.phase = Phase::Revealing;
        Ok(())
    }

    /// Release every reveal step due at `now`, in order. Returns true when
    /// anything changed and the view should be redrawn.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(step) = self.scheduler.pop_due(now) {
            self.apply(step);
            changed = true;
        }
        changed
    }

    fn apply(&mut self, step: RevealStep) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // The scheduler already filters stale tags; re-checked here so no
        // path can ever mutate a session the step was not staged for.
        if step.session != session.id {
            return;
        }
        match step.event {
            RevealEvent::Shot(outcome) => {
                session.mark_shot(outcome.actor, outcome.position, outcome.hit);
                self.log.push(outcome_kind(&outcome), outcome.headline());
            }
            RevealEvent::Commit => {
                session.commit();
                if session.snapshot.game_over {
                    self.phase = Phase::GameOver;
                    let text = match session.snapshot.winner {
                        Some(Actor::Player) => "Victory! You sunk the entire enemy fleet!",
                        Some(Actor::Computer) => "Defeat! The enemy sunk all your ships.",
                        None => "Game over.",
                    };
                    self.log.push(LogKind::Info, text);
                } else {
                    self.phase = Phase::AwaitingPlayerInput;
                }
            }
        }
    }
}

fn outcome_kind(outcome: &ShotOutcome) -> LogKind {
    if outcome.hit && outcome.sunk {
        LogKind::Sunk
    } else if outcome.hit {
        LogKind::Hit
    } else {
        LogKind::Miss
    }
}
