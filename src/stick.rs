//! # Stick Task
//!
//! Samples the thumb stick's horizontal axis and publishes the player's
//! movement intent. Runs on a two-tick cadence — a `Wait` frame that clears
//! the intent, then a `Sample` frame that reads the axis — so the player
//! task sees a stable "no intent" frame between samples and a single
//! deflection is never consumed twice.

use crate::board::Board;
use crate::config::{STICK_LEFT_MAX, STICK_RIGHT_MIN};
use crate::session::{Intent, Session};

/// Stick sampler states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Init,
    Wait,
    Sample,
}

pub(crate) fn step<B: Board>(state: State, session: &mut Session, board: &mut B) -> State {
    let next = transition(state);
    act(next, session, board);
    next
}

fn transition(state: State) -> State {
    match state {
        State::Init => State::Wait,
        State::Wait => State::Sample,
        State::Sample => State::Wait,
    }
}

fn act<B: Board>(state: State, session: &mut Session, board: &mut B) {
    match state {
        State::Init => {}
        State::Wait => session.last_intent = Intent::None,
        State::Sample => {
            let x = board.sample_stick();
            if x > STICK_RIGHT_MIN {
                session.last_intent = Intent::Right;
            } else if x < STICK_LEFT_MAX {
                session.last_intent = Intent::Left;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::mock::MockBoard;

    #[test]
    fn init_settles_into_wait() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        assert_eq!(step(State::Init, &mut session, &mut board), State::Wait);
    }

    #[test]
    fn hard_right_deflection_sets_right_intent() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        board.stick = 1000;
        let state = step(State::Wait, &mut session, &mut board);
        assert_eq!(state, State::Sample);
        assert_eq!(session.last_intent, Intent::Right);
    }

    #[test]
    fn hard_left_deflection_sets_left_intent() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        board.stick = 40;
        step(State::Wait, &mut session, &mut board);
        assert_eq!(session.last_intent, Intent::Left);
    }

    #[test]
    fn centered_stick_leaves_intent_cleared() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        board.stick = 512;
        step(State::Wait, &mut session, &mut board);
        assert_eq!(session.last_intent, Intent::None);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        // Exactly at a threshold is still the dead zone.
        board.stick = STICK_RIGHT_MIN;
        step(State::Wait, &mut session, &mut board);
        assert_eq!(session.last_intent, Intent::None);
        board.stick = STICK_LEFT_MAX;
        step(State::Wait, &mut session, &mut board);
        assert_eq!(session.last_intent, Intent::None);
    }

    #[test]
    fn wait_frame_clears_a_stale_sample() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        board.stick = 1000;
        let state = step(State::Wait, &mut session, &mut board);
        assert_eq!(session.last_intent, Intent::Right);
        // The next activation is the wait frame.
        step(state, &mut session, &mut board);
        assert_eq!(session.last_intent, Intent::None);
    }
}
