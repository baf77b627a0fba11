//! # Music Task
//!
//! Loops the background melody, one note per activation. Cosmetic, but it
//! runs under the same scheduler and state-machine contract as everything
//! else. The tone generator deduplicates repeated frequencies, so held
//! notes don't glitch.

use crate::board::Board;
use crate::levels::MELODY;
use crate::session::Session;

/// Music task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Wait,
    Play,
}

pub(crate) fn step<B: Board>(state: State, session: &mut Session, board: &mut B) -> State {
    let next = transition(state);
    act(next, session, board);
    next
}

fn transition(state: State) -> State {
    match state {
        State::Wait | State::Play => State::Play,
    }
}

fn act<B: Board>(state: State, session: &mut Session, board: &mut B) {
    match state {
        State::Wait => {
            board.set_tone(0.0);
            session.note_index = 0;
        }
        State::Play => {
            board.set_tone(MELODY[session.note_index as usize]);
            session.note_index = (session.note_index + 1) % MELODY.len() as u8;
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
