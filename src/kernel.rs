//! # Kernel
//!
//! The top-level mode machine and the per-tick loop. Three superstates —
//! Playing, Won, Lost — all driven by the same hardware tick; the terminal
//! modes are ordinary states, not blocking loops, so the restart button is
//! polled the same way everywhere.
//!
//! ## Per-cycle sequence
//!
//! ```text
//! wait_for_tick
//!   └─► cycle()
//!         ├─► render(grid)        ← every cycle, regardless of mode:
//!         │                         the matrix is multiplexed faster
//!         │                         than the game logic advances
//!         ├─► restart poll        ← edge from any mode → full reset
//!         └─► mode dispatch
//!               ├─ Playing: win/lose checks, then scheduler dispatch
//!               ├─ Won:     nothing (face already staged)
//!               └─ Lost:    nothing
//! ```
//!
//! The win check runs before the lose check, so a session that somehow
//! finishes its 60th wall in the same breath as a collision still counts
//! as a win.

use crate::board::Board;
use crate::config::{GRID_COLS, GRID_ROWS, WIN_SCORE};
use crate::grid::Cell;
use crate::levels::{LOSS_FACE, WIN_FACE};
use crate::scheduler::Scheduler;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Top-level superstate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Normal scheduler dispatch.
    Playing,
    /// Score reached 60. Celebration face, audio off, waiting for restart.
    Won,
    /// The player was hit. Frown face, audio off, waiting for restart.
    Lost,
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// The whole game: mode, task table, and shared session state. Constructed
/// once; everything is initialized before the first tick can be accepted,
/// so no cycle ever observes a half-built grid or task table.
pub struct Game {
    pub mode: Mode,
    pub scheduler: Scheduler,
    pub session: Session,
}

impl Game {
    pub fn new() -> Self {
        Self {
            mode: Mode::Playing,
            scheduler: Scheduler::new(),
            session: Session::new(),
        }
    }

    /// Full restart: task table, session, grid, and mode all return to the
    /// canonical initial state. Reachable from every mode via the restart
    /// button.
    pub fn reset<B: Board>(&mut self, board: &mut B) {
        self.scheduler.reset();
        self.session.reset();
        self.mode = Mode::Playing;
        board.set_tone(0.0);
        #[cfg(feature = "defmt")]
        defmt::info!("session restarted");
    }

    /// One cycle, to be run per hardware tick.
    pub fn cycle<B: Board>(&mut self, board: &mut B) {
        // Refresh first, every cycle, whatever the mode — persistence of
        // vision depends on the fixed render rate, not on game logic.
        board.render(&self.session.grid);

        if board.restart_pressed() {
            self.reset(board);
            return;
        }

        match self.mode {
            Mode::Playing => {
                if self.session.score >= WIN_SCORE {
                    self.enter_terminal(Mode::Won, &WIN_FACE, board);
                } else if self.session.game_over {
                    self.enter_terminal(Mode::Lost, &LOSS_FACE, board);
                } else {
                    self.scheduler.run_cycle(&mut self.session, board);
                }
            }
            // The face is staged and the tone is off; nothing to do but
            // keep rendering and polling for restart.
            Mode::Won | Mode::Lost => {}
        }
    }

    /// Run forever: block on the tick source, then cycle.
    pub fn run<B: Board>(mut self, board: &mut B) -> ! {
        loop {
            board.wait_for_tick();
            self.cycle(board);
        }
    }

    fn enter_terminal<B: Board>(&mut self, mode: Mode, face: &[u8; GRID_ROWS], board: &mut B) {
        self.session.grid.clear();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if face[row] & (1 << col) != 0 {
                    self.session.grid.set(row, col, Cell::Wall);
                }
            }
        }
        board.set_tone(0.0);
        self.mode = mode;
        #[cfg(feature = "defmt")]
        match self.mode {
            Mode::Won => defmt::info!("session won at score {}", self.session.score),
            _ => defmt::info!("session lost at score {}", self.session.score),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
