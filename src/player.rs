//! # Player Task
//!
//! Translates the player cell along its fixed row according to the latest
//! stick intent. Horizontal movement wraps: right off column 7 re-enters at
//! column 0, left off column 0 re-enters at column 7.

use crate::config::{GRID_COLS, PLAYER_ROW};
use crate::grid::Cell;
use crate::session::{Intent, Session};

/// Player movement states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Init,
    Wait,
    MoveRight,
    MoveLeft,
}

pub(crate) fn step(state: State, session: &mut Session) -> State {
    let next = transition(state, session);
    act(next, session);
    next
}

fn transition(state: State, session: &Session) -> State {
    match state {
        State::Init => State::Wait,
        State::Wait => match session.last_intent {
            Intent::Right => State::MoveRight,
            Intent::Left => State::MoveLeft,
            Intent::None => State::Wait,
        },
        State::MoveRight | State::MoveLeft => State::Wait,
    }
}

fn act(state: State, session: &mut Session) {
    match state {
        State::Init | State::Wait => {}
        State::MoveRight => slide(session, 1),
        State::MoveLeft => slide(session, GRID_COLS - 1),
    }
}

/// Move the player one column, wrapping, and resolve whatever occupies the
/// destination. Stepping into a wall ends the game; stepping onto a pickup
/// consumes it and arms the power-up.
fn slide(session: &mut Session, offset: usize) {
    session.grid.set(PLAYER_ROW, session.player_col, Cell::Empty);
    session.player_col = (session.player_col + offset) % GRID_COLS;

    match session.grid.get(PLAYER_ROW, session.player_col) {
        Cell::Wall => {
            session.game_over = true;
            #[cfg(feature = "defmt")]
            defmt::info!("player walked into a wall at column {}", session.player_col);
        }
        Cell::Pickup => {
            session.powerup_active = true;
            session.grid.set(PLAYER_ROW, session.player_col, Cell::Player);
            #[cfg(feature = "defmt")]
            defmt::debug!("pickup grabbed at column {}", session.player_col);
        }
        _ => {
            session.grid.set(PLAYER_ROW, session.player_col, Cell::Player);
        }
    }

    // Every move feeds the wall generator fresh entropy.
    session.refresh_entropy();
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
