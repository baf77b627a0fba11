//! # Session State
//!
//! All state shared between the task state machines, gathered into one
//! explicit struct instead of a pile of globals. Every task's step function
//! receives `&mut Session`; by convention each field has a single writing
//! task, and later tasks in a dispatch cycle observe mutations made by
//! earlier tasks in the same cycle.

use crate::config::{PLAYER_ROW, PLAYER_START_COL, SPAWN_ROW};
use crate::grid::{Cell, Grid};
use crate::rng::Rng;

// ---------------------------------------------------------------------------
// Movement intent
// ---------------------------------------------------------------------------

/// The most recent stick reading, as seen by the player task. The stick
/// task clears this back to `None` on its wait frames, so one deflection is
/// never consumed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Intent {
    #[default]
    None,
    Left,
    Right,
}

// ---------------------------------------------------------------------------
// Wall descent bookkeeping
// ---------------------------------------------------------------------------

/// State of the wall currently descending. Owned by the walls task.
#[derive(Debug, Clone, Copy)]
pub struct Descent {
    /// Row the wall currently occupies, counting down from the spawn row.
    /// Reaching 0 completes the descent and scores a point.
    pub counter: u8,

    /// The active silhouette: bit `c` set means column `c` is a wall cell.
    pub mask: u8,

    /// Columns of the active silhouette that have become pass-through gaps,
    /// either destroyed by a shot or open from the start. Once flagged, a
    /// column stays open for the rest of the descent.
    pub gaps: u8,

    /// Column of the pickup riding down with this wall, if one spawned.
    pub pickup_col: Option<u8>,
}

impl Descent {
    pub const fn new() -> Self {
        Self {
            counter: SPAWN_ROW as u8,
            mask: 0,
            gaps: 0,
            pickup_col: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Power-up shot bookkeeping
// ---------------------------------------------------------------------------

/// State of the power-up shot. Owned by the shot task.
#[derive(Debug, Clone, Copy)]
pub struct ShotPath {
    /// Remaining shot steps. Armed to the full budget when a pickup is
    /// consumed; one step is spent per `Shoot` activation.
    pub budget: u8,

    /// Row the shot currently occupies.
    pub row: usize,

    /// Target column, captured from the player's position each time a sweep
    /// starts.
    pub col: usize,
}

impl ShotPath {
    pub const fn new() -> Self {
        Self {
            budget: 0,
            row: PLAYER_ROW + 1,
            col: PLAYER_START_COL,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The complete shared game state for one session.
pub struct Session {
    /// The shared cell grid. Mutated only from task action phases.
    pub grid: Grid,

    /// Walls fully dodged this session. 60 wins.
    pub score: u8,

    /// Set when a wall cell lands on the player or the player steps into a
    /// wall. Checked by the top-level mode machine once per cycle; also
    /// aborts the remainder of the dispatch cycle that set it.
    pub game_over: bool,

    /// True from the moment a pickup is consumed until the shot budget is
    /// exhausted. While set, no new pickup spawns.
    pub powerup_active: bool,

    /// The player's current column on [`PLAYER_ROW`].
    pub player_col: usize,

    /// Latest stick intent. Written by the stick task, consumed by the
    /// player task later in the same cycle.
    pub last_intent: Intent,

    /// Wall descent bookkeeping.
    pub descent: Descent,

    /// Power-up shot bookkeeping.
    pub shot: ShotPath,

    /// Index of the next melody note.
    pub note_index: u8,

    /// Entropy counter fed to the RNG. Bumped on every player move so the
    /// wall sequence depends on play.
    pub entropy: u32,

    /// The session's random source.
    pub rng: Rng,
}

impl Session {
    /// A fresh session: empty grid with the player at its start cell, all
    /// counters zeroed.
    pub fn new() -> Self {
        let mut session = Self {
            grid: Grid::new(),
            score: 0,
            game_over: false,
            powerup_active: false,
            player_col: PLAYER_START_COL,
            last_intent: Intent::None,
            descent: Descent::new(),
            shot: ShotPath::new(),
            note_index: 0,
            entropy: 0,
            rng: Rng::new(0),
        };
        session.reset();
        session
    }

    /// Restore the canonical initial state. Invoked on every restart edge,
    /// from any mode.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.game_over = false;
        self.powerup_active = false;
        self.player_col = PLAYER_START_COL;
        self.last_intent = Intent::None;
        self.descent = Descent::new();
        self.shot = ShotPath::new();
        self.note_index = 0;
        self.entropy = 0;
        self.rng.reseed(0);
        self.grid.set(PLAYER_ROW, self.player_col, Cell::Player);
    }

    /// Bump the entropy counter and restart the RNG from it. Called after
    /// every player move and before every wall generation.
    pub fn refresh_entropy(&mut self) {
        self.entropy = self.entropy.wrapping_add(1);
        let seed = self.entropy;
        self.rng.reseed(seed);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_COLS;

    #[test]
    fn fresh_session_has_player_at_start() {
        let session = Session::new();
        assert_eq!(session.grid.get(PLAYER_ROW, PLAYER_START_COL), Cell::Player);
        assert_eq!(session.grid.count(Cell::Player), 1);
        assert_eq!(session.score, 0);
        assert!(!session.game_over);
        assert!(!session.powerup_active);
    }

    #[test]
    fn reset_restores_canonical_state() {
        let mut session = Session::new();
        session.score = 33;
        session.game_over = true;
        session.powerup_active = true;
        session.player_col = 6;
        session.last_intent = Intent::Right;
        session.note_index = 9;
        session.entropy = 1234;
        for col in 0..GRID_COLS {
            session.grid.set(4, col, Cell::Wall);
        }

        session.reset();

        assert_eq!(session.score, 0);
        assert!(!session.game_over);
        assert!(!session.powerup_active);
        assert_eq!(session.player_col, PLAYER_START_COL);
        assert_eq!(session.last_intent, Intent::None);
        assert_eq!(session.note_index, 0);
        assert_eq!(session.entropy, 0);
        assert_eq!(session.descent.counter, SPAWN_ROW as u8);
        assert_eq!(session.grid.count(Cell::Player), 1);
        assert_eq!(session.grid.count(Cell::Wall), 0);
        assert_eq!(session.grid.get(PLAYER_ROW, PLAYER_START_COL), Cell::Player);
    }

    #[test]
    fn entropy_refresh_changes_the_draw() {
        let mut session = Session::new();
        session.refresh_entropy();
        let a = session.rng.next_u32();
        session.refresh_entropy();
        let b = session.rng.next_u32();
        assert_ne!(a, b);
    }
}
