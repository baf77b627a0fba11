//! # Shot Task
//!
//! The power-up's time-boxed projectile. Arms when the player consumes a
//! pickup, then sweeps a white shot up the player's column one row per
//! activation, knocking out one wall cell per step it lands on. Reaching
//! the far row just starts another sweep; only spending the whole step
//! budget disarms the power-up.
//!
//! The shot and the walls task both mutate rows above the player within
//! the same dispatch cycle; ordering comes from the task list, not from
//! any per-cell locking.

use crate::board::Board;
use crate::config::{GRID_COLS, GRID_ROWS, PLAYER_ROW, SHOT_BUDGET, SPAWN_ROW};
use crate::grid::Cell;
use crate::session::Session;

/// Shot task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Wait,
    Generate,
    Shoot,
}

pub(crate) fn step<B: Board>(state: State, session: &mut Session, board: &mut B) -> State {
    let next = transition(state, session);
    act(next, session, board);
    next
}

/// Next state from the current one. Arming the budget and disarming the
/// power-up flag happen here; the grid is only touched in the action phase.
fn transition(state: State, session: &mut Session) -> State {
    match state {
        State::Wait => {
            if session.powerup_active {
                session.shot.budget = SHOT_BUDGET;
                State::Generate
            } else {
                State::Wait
            }
        }
        State::Generate => {
            if session.shot.budget > 0 {
                State::Shoot
            } else {
                session.powerup_active = false;
                #[cfg(feature = "defmt")]
                defmt::debug!("shot budget spent, power-up disarmed");
                State::Wait
            }
        }
        State::Shoot => {
            if session.shot.row == SPAWN_ROW || session.shot.budget == 0 {
                State::Generate
            } else {
                State::Shoot
            }
        }
    }
}

fn act<B: Board>(state: State, session: &mut Session, board: &mut B) {
    match state {
        State::Wait => {}
        State::Generate => {
            // Each sweep re-targets the player's current column.
            session.shot.col = session.player_col;

            // Sweep any stray shot cell off the grid, wherever the last
            // sweep left it.
            for row in 0..GRID_ROWS {
                for col in 0..GRID_COLS {
                    if session.grid.get(row, col) == Cell::Shot {
                        session.grid.set(row, col, Cell::Empty);
                    }
                }
            }

            if session.shot.budget > 0 {
                session.shot.row = PLAYER_ROW + 1;
                fire_at(session, session.shot.row, session.shot.col);
            }
            board.render(&session.grid);
        }
        State::Shoot => {
            session
                .grid
                .set(session.shot.row, session.shot.col, Cell::Empty);
            session.shot.row += 1;
            fire_at(session, session.shot.row, session.shot.col);
            session.shot.budget -= 1;
            board.render(&session.grid);
        }
    }
}

/// Land the shot on a cell: a wall there is destroyed (one cell per step),
/// anything else is overlaid with the shot itself.
fn fire_at(session: &mut Session, row: usize, col: usize) {
    if session.grid.get(row, col) == Cell::Wall {
        session.grid.set(row, col, Cell::Empty);
    } else {
        session.grid.set(row, col, Cell::Shot);
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
