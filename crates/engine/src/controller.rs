//! Game loop controller.
//!
//! Owns the current [`GameState`], the pending-direction queue and the two
//! deadlines (simulation tick and live-status heartbeat). Input handlers call
//! [`GameController::queue_direction`] / [`GameController::apply_action`];
//! the front-end calls [`GameController::update`] whenever its poll times out.
//!
//! Every state replacement goes through one place so that entering or leaving
//! `Playing` always arms or cancels both deadlines and notifies the sinks.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::core::{GameState, SimpleRng};
use crate::scheduler::{earliest, Deadline};
use crate::sink::{LiveStatusSink, NullSink, ScoreSink};
use crate::types::{
    Direction, GameAction, GameMode, GameStatus, PlayerIdentity, LIVE_STATUS_INTERVAL_MS,
};

pub struct GameController {
    state: GameState,
    pending: VecDeque<Direction>,
    tick_timer: Deadline,
    heartbeat: Deadline,
    /// Increments on every start/reset/mode change.
    session_id: u32,
    seeds: SimpleRng,
    player: Option<PlayerIdentity>,
    clock: Box<dyn Clock>,
    score_sink: Box<dyn ScoreSink>,
    live_sink: Box<dyn LiveStatusSink>,
}

impl GameController {
    /// Create an idle controller. `seed` drives food placement for every
    /// session this controller starts.
    pub fn new(mode: GameMode, seed: u32, clock: Box<dyn Clock>) -> Self {
        let mut seeds = SimpleRng::new(seed);
        let state = GameState::new(mode, seeds.next_u32());

        Self {
            state,
            pending: VecDeque::new(),
            tick_timer: Deadline::new(),
            heartbeat: Deadline::new(),
            session_id: 0,
            seeds,
            player: None,
            clock,
            score_sink: Box::new(NullSink),
            live_sink: Box::new(NullSink),
        }
    }

    /// Authenticate the session. Without a player nothing is sent to the sinks.
    pub fn with_player(mut self, player: PlayerIdentity) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_score_sink(mut self, sink: impl ScoreSink + 'static) -> Self {
        self.score_sink = Box::new(sink);
        self
    }

    pub fn with_live_status_sink(mut self, sink: impl LiveStatusSink + 'static) -> Self {
        self.live_sink = Box::new(sink);
        self
    }

    /// Current published snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn player(&self) -> Option<&PlayerIdentity> {
        self.player.as_ref()
    }

    /// Requests waiting for upcoming ticks, oldest first.
    pub fn pending_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }

    /// Earliest armed deadline (tick or heartbeat), in clock milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        earliest(&[self.tick_timer, self.heartbeat])
    }

    /// Begin a new session in the current mode. Restarts a running one.
    pub fn start(&mut self) {
        let next = self.fresh_state(self.mode()).with_status(GameStatus::Playing);
        self.pending.clear();
        self.session_id = self.session_id.wrapping_add(1);
        debug!(session = self.session_id, mode = self.mode().as_str(), "session started");
        self.publish(next);
    }

    /// Toggle between playing and paused. Other statuses are left alone.
    pub fn pause(&mut self) {
        let next = match self.state.status() {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            _ => return,
        };
        debug!(session = self.session_id, status = next.as_str(), "pause toggled");
        let next = self.state.clone().with_status(next);
        self.publish(next);
    }

    /// Back to an idle session in the current mode.
    pub fn reset(&mut self) {
        let next = self.fresh_state(self.mode());
        self.pending.clear();
        self.session_id = self.session_id.wrapping_add(1);
        self.publish(next);
    }

    /// Switch boundary policy. Always resets, whatever the current status.
    pub fn set_mode(&mut self, mode: GameMode) {
        let next = self.fresh_state(mode);
        self.pending.clear();
        self.session_id = self.session_id.wrapping_add(1);
        debug!(session = self.session_id, mode = mode.as_str(), "mode changed");
        self.publish(next);
    }

    /// Append a direction request. Validation happens when a tick applies it.
    pub fn queue_direction(&mut self, dir: Direction) {
        self.pending.push_back(dir);
    }

    /// One simulation step: apply at most one queued direction, then advance.
    ///
    /// Does nothing unless playing, so requests queued while paused survive
    /// until play resumes.
    pub fn tick(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let next = match self.pending.pop_front() {
            Some(dir) => self.state.apply_direction(dir).advance(),
            None => self.state.advance(),
        };
        self.publish(next);
    }

    /// Dispatch a mapped input action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(dir) => self.queue_direction(dir),
            GameAction::StartOrPause => match self.state.status() {
                GameStatus::Idle | GameStatus::GameOver => self.start(),
                GameStatus::Playing | GameStatus::Paused => self.pause(),
            },
            GameAction::Reset => self.reset(),
            GameAction::ToggleMode => self.set_mode(self.mode().toggled()),
        }
    }

    /// Run whatever is due on the clock.
    ///
    /// Returns true when the snapshot changed.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now_ms();
        let mut changed = false;

        if self.tick_timer.fire(now) {
            self.tick();
            changed = true;
        }

        if self.heartbeat.fire(now) && self.state.is_playing() {
            self.send_live_status(&self.state, true);
            self.heartbeat.arm(now, LIVE_STATUS_INTERVAL_MS);
        }

        changed
    }

    /// Tear down: a running session is paused so the sinks see it stop.
    pub fn shutdown(&mut self) {
        if self.state.is_playing() {
            let next = self.state.clone().with_status(GameStatus::Paused);
            self.publish(next);
        }
    }

    fn fresh_state(&mut self, mode: GameMode) -> GameState {
        GameState::new(mode, self.seeds.next_u32())
    }

    fn publish(&mut self, next: GameState) {
        let now = self.clock.now_ms();
        let previous = std::mem::replace(&mut self.state, next);

        match (previous.is_playing(), self.state.is_playing()) {
            (false, true) => {
                self.tick_timer.arm(now, self.state.speed() as u64);
                self.heartbeat.arm(now, LIVE_STATUS_INTERVAL_MS);
                self.send_live_status(&self.state, true);
            }
            (true, true) => {
                if previous.speed() != self.state.speed() {
                    debug!(speed_ms = self.state.speed(), "tick interval changed");
                }
                self.tick_timer.arm(now, self.state.speed() as u64);
            }
            (true, false) => {
                self.tick_timer.cancel();
                self.heartbeat.cancel();
                self.send_live_status(&previous, false);
                if self.state.status() == GameStatus::GameOver {
                    info!(
                        session = self.session_id,
                        score = self.state.score(),
                        length = self.state.snake().len(),
                        "game over"
                    );
                    self.submit_final_score();
                }
            }
            (false, false) => {
                self.tick_timer.cancel();
                self.heartbeat.cancel();
            }
        }
    }

    fn send_live_status(&self, state: &GameState, is_playing: bool) {
        if self.player.is_none() {
            return;
        }
        let status = state.live_status(is_playing);
        if let Err(e) = self.live_sink.update_live_status(&status) {
            warn!(error = %e, "failed to update live status");
        }
    }

    fn submit_final_score(&self) {
        let score = self.state.score();
        if self.player.is_none() || score == 0 {
            return;
        }
        if let Err(e) = self.score_sink.submit_score(score, self.state.mode()) {
            warn!(error = %e, score, "failed to submit score");
        }
    }
}

/// Dropping a running controller reports the stop, so an early return or a
/// panic in the front-end still leaves the arena consistent.
impl Drop for GameController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
