//! Session - one game plus its gravity timer.
//!
//! All stimuli go through [`Session::dispatch`] (commands) or
//! [`Session::advance`] (elapsed time), and each runs to completion before
//! the next. After every stimulus the timer is brought back in line with the
//! game: armed at the current cadence while running, disarmed otherwise.

use std::time::Duration;

use tracing::debug;

use crate::core::{GameSnapshot, GameState};
use crate::timer::GravityTimer;
use crate::types::{GameAction, GameStatus, LockEvent};

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    timer: GravityTimer,
    events: Vec<LockEvent>,
}

impl Session {
    /// Wrap a game; the timer is armed right away if it is already running.
    pub fn new(game: GameState) -> Self {
        let mut session = Self {
            game,
            timer: GravityTimer::new(),
            events: Vec::new(),
        };
        session.sync_timer();
        session
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    /// Apply one command, then resync the timer.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let accepted = self.game.apply_action(action);
        if accepted && matches!(action, GameAction::Start | GameAction::Restart) {
            // A new game always gets a fresh interval.
            self.timer.disarm();
        }
        self.collect_event();
        self.sync_timer();
        accepted
    }

    /// Report elapsed time; delivers every gravity tick that falls due.
    ///
    /// Ticks are delivered one at a time and the timer is resynced after each,
    /// so a line clear mid-way switches to the new cadence for the rest of the
    /// elapsed time. Returns the number of ticks delivered.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let mut left = elapsed_ms;
        let mut ticks = 0;

        while let Some(remaining) = self.timer.remaining_ms() {
            if left < remaining {
                self.timer.elapse(left);
                break;
            }
            left -= remaining;
            self.timer.rewind();

            self.game.gravity_tick();
            ticks += 1;
            self.collect_event();
            self.sync_timer();
        }

        ticks
    }

    /// How long the host may wait before the next tick is due
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.timer
            .remaining_ms()
            .map(|ms| Duration::from_millis(ms as u64))
    }

    /// Lock-in events produced since the last drain, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, LockEvent> {
        self.events.drain(..)
    }

    fn collect_event(&mut self) {
        if let Some(event) = self.game.take_last_event() {
            self.events.push(event);
        }
    }

    fn sync_timer(&mut self) {
        if self.game.status().is_running() {
            let cadence = self.game.gravity_cadence_ms();
            if !self.timer.is_armed() || self.timer.cadence_ms() != cadence {
                self.timer.arm(cadence);
                debug!(cadence_ms = cadence, "gravity timer armed");
            }
        } else if self.timer.is_armed() {
            self.timer.disarm();
            debug!(status = self.game.status().as_str(), "gravity timer disarmed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::types::PieceKind;

    fn started() -> Session {
        let mut session = Session::new(GameState::new(12345));
        assert!(session.dispatch(GameAction::Start));
        session
    }

    #[test]
    fn idle_session_has_no_timer() {
        let mut session = Session::new(GameState::new(1));
        assert_eq!(session.until_next_tick(), None);
        assert_eq!(session.advance(10_000), 0);
    }

    #[test]
    fn start_arms_at_base_cadence() {
        let session = started();
        assert_eq!(session.until_next_tick(), Some(Duration::from_millis(900)));
    }

    #[test]
    fn ticks_fire_on_cadence() {
        let mut session = started();
        assert_eq!(session.advance(899), 0);
        assert_eq!(session.advance(1), 1);
        assert_eq!(session.game().active().unwrap().y, 1);
        assert_eq!(session.advance(2700), 3);
        assert_eq!(session.game().active().unwrap().y, 4);
    }

    #[test]
    fn moves_do_not_reset_the_interval() {
        let mut session = started();
        session.advance(600);
        session.dispatch(GameAction::MoveLeft);
        assert_eq!(session.advance(300), 1);
    }

    #[test]
    fn rearm_when_new_game_starts() {
        let mut session = started();
        session.advance(600);
        assert!(session.dispatch(GameAction::Restart));
        assert_eq!(session.until_next_tick(), Some(Duration::from_millis(900)));
    }

    #[test]
    fn events_are_collected_per_lock() {
        let mut session = started();
        session.dispatch(GameAction::HardDrop);
        session.dispatch(GameAction::HardDrop);
        let events: Vec<_> = session.drain_events().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(session.drain_events().count(), 0);
    }

    #[test]
    fn line_clear_mid_advance_uses_new_cadence() {
        // O at spawn lands on the gap after 18 ticks and clears the row.
        let board = Board::from_rows(&["ZZZZ..ZZZZ", "ZZZZ..ZZZZ"]);
        let game = GameState::from_position(1, board, PieceKind::O, PieceKind::T);
        let mut session = Session::new(game);

        // 18 descents, the 19th tick locks and clears two rows.
        assert_eq!(session.advance(900 * 19), 19);
        assert_eq!(session.game().lines_cleared(), 2);
        assert_eq!(session.timer().cadence_ms(), 860);
        assert_eq!(session.until_next_tick(), Some(Duration::from_millis(860)));
    }
}
