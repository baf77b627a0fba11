//! # Walls Task
//!
//! Spawns wall silhouettes on the far row and marches them down toward the
//! player, one row per activation. This is where the game gets decided:
//! collision detection against the player, pass-through gap tracking for
//! shot-destroyed cells, pickup spawning and carry, and scoring all happen
//! here.
//!
//! ## Descent mechanics
//!
//! A descent starts with [`State::Generate`] stamping one of the ten
//! silhouettes onto the spawn row, then seven [`State::Descend`]
//! activations move it down a row at a time. Before the wall leaves its
//! current row, every marked column whose cell is already empty — a shot
//! destroyed it — is flagged as a pass-through gap and stays open for the
//! rest of the descent. When the wall lands on the player row, any non-gap
//! column holding the player ends the game; otherwise the wall paints over
//! the row and the player cell is re-asserted afterwards.
//!
//! A pickup spawned into one of the silhouette's gaps rides down with it
//! and is consumed on contact with the player.

use crate::board::Board;
use crate::config::{GRID_COLS, PICKUP_SPAWN_PERCENT, PLAYER_ROW, SPAWN_ROW};
use crate::grid::Cell;
use crate::levels::WALL_MASKS;
use crate::session::Session;

/// Wall task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Init,
    Wait,
    Generate,
    Descend,
}

pub(crate) fn step<B: Board>(state: State, session: &mut Session, board: &mut B) -> State {
    let next = transition(state, session);
    act(next, session, board);
    next
}

/// Next state from the current one. Completing a descent scores the point
/// and discards the stale pickup draw, so the next generation makes a fresh
/// spawn decision; the grid itself is untouched here.
fn transition(state: State, session: &mut Session) -> State {
    match state {
        State::Init => State::Wait,
        State::Wait => State::Generate,
        State::Generate => State::Descend,
        State::Descend => {
            if session.descent.counter == 0 {
                session.score += 1;
                session.descent.pickup_col = None;
                #[cfg(feature = "defmt")]
                defmt::debug!("wall cleared, score {}", session.score);
                State::Generate
            } else {
                State::Descend
            }
        }
    }
}

fn act<B: Board>(state: State, session: &mut Session, board: &mut B) {
    match state {
        State::Init | State::Wait => {}
        State::Generate => generate(session, board),
        State::Descend => descend(session, board),
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Stamp a fresh silhouette on the spawn row, possibly with a pickup in one
/// of its gaps.
fn generate<B: Board>(session: &mut Session, board: &mut B) {
    session.descent.counter = SPAWN_ROW as u8;
    session.descent.gaps = 0;

    // Sweep residue from the previous wall: anything it left on the player
    // row (the player cell itself is untouched) and the whole spawn row.
    for col in 0..GRID_COLS {
        if matches!(session.grid.get(PLAYER_ROW, col), Cell::Wall | Cell::Pickup) {
            session.grid.set(PLAYER_ROW, col, Cell::Empty);
        }
        session.grid.set(SPAWN_ROW, col, Cell::Empty);
    }

    session.refresh_entropy();
    let pick = session.rng.range(WALL_MASKS.len() as u32) as usize;
    let mask = WALL_MASKS[pick];
    session.descent.mask = mask;
    for col in 0..GRID_COLS {
        if mask & (1 << col) != 0 {
            session.grid.set(SPAWN_ROW, col, Cell::Wall);
        }
    }

    session.descent.pickup_col = None;
    if !session.powerup_active && session.rng.chance(PICKUP_SPAWN_PERCENT) {
        // Redraw until the column lands in one of the silhouette's gaps;
        // every mask leaves at least two.
        loop {
            session.refresh_entropy();
            let col = session.rng.range(GRID_COLS as u32) as usize;
            if session.grid.get(SPAWN_ROW, col) == Cell::Empty {
                session.grid.set(SPAWN_ROW, col, Cell::Pickup);
                session.descent.pickup_col = Some(col as u8);
                break;
            }
        }
    }

    board.render(&session.grid);
}

// ---------------------------------------------------------------------------
// Descent
// ---------------------------------------------------------------------------

/// Move the active wall down one row, carrying its pickup and checking for
/// a collision with the player.
fn descend<B: Board>(session: &mut Session, board: &mut B) {
    let mask = session.descent.mask;
    let from = session.descent.counter as usize;

    // Flag pass-through gaps before mutating: a marked column whose cell is
    // already empty lost its wall to a shot and stays open from here on.
    for col in 0..GRID_COLS {
        if mask & (1 << col) != 0 && session.grid.get(from, col) == Cell::Empty {
            session.descent.gaps |= 1 << col;
        }
    }

    // Vacate the source row.
    for col in 0..GRID_COLS {
        if mask & (1 << col) != 0 {
            session.grid.set(from, col, Cell::Empty);
        }
    }
    if let Some(pickup) = session.descent.pickup_col {
        session.grid.set(from, pickup as usize, Cell::Empty);
    }

    session.descent.counter -= 1;
    let to = session.descent.counter as usize;

    // A wall cell landing on the player ends the game. Checked against the
    // destination's pre-move contents, over every non-gap marked column.
    let mut collided = false;
    for col in 0..GRID_COLS {
        let marked = mask & (1 << col) != 0;
        let open = session.descent.gaps & (1 << col) != 0;
        if marked && !open && session.grid.get(to, col) == Cell::Player {
            collided = true;
        }
    }

    if collided {
        session.game_over = true;
        #[cfg(feature = "defmt")]
        defmt::info!("wall landed on the player at row {}", to);
    } else {
        for col in 0..GRID_COLS {
            if mask & (1 << col) != 0 {
                let open = session.descent.gaps & (1 << col) != 0;
                session
                    .grid
                    .set(to, col, if open { Cell::Empty } else { Cell::Wall });
            }
        }

        // Re-assert the player cell; the wall rows above never include it.
        session
            .grid
            .set(PLAYER_ROW, session.player_col, Cell::Player);

        // Carry the pickup down with the wall, consuming it on contact.
        if !session.powerup_active {
            if let Some(pickup) = session.descent.pickup_col {
                let pickup = pickup as usize;
                if session.grid.get(to, pickup) == Cell::Player {
                    session.powerup_active = true;
                    session.descent.pickup_col = None;
                    #[cfg(feature = "defmt")]
                    defmt::debug!("pickup caught by the descending wall contact");
                } else {
                    session.grid.set(to, pickup, Cell::Pickup);
                }
            }
        }
    }

    board.render(&session.grid);
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
