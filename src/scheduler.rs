//! # Scheduler
//!
//! The cooperative fixed-period dispatcher. Holds the five task records in
//! dispatch order and runs one cycle per hardware tick: every task whose
//! elapsed time has reached its period is stepped once, everyone's elapsed
//! time then advances by the tick unit.
//!
//! ## Ordering rules
//!
//! - List order is significant: a task stepped later in a cycle observes
//!   every mutation made by earlier tasks in the *same* cycle. The player
//!   task deliberately follows the stick task so a sampled intent is
//!   consumed the cycle it was produced.
//! - No task runs more than once per cycle, and no task blocks — each step
//!   runs to completion before the next task is considered.
//! - If a step leaves the game-over flag set, the rest of the cycle's
//!   dispatch is abandoned: later tasks neither step nor accumulate
//!   elapsed time that cycle. The top-level mode machine picks the flag up
//!   at the next cycle boundary.

use crate::board::Board;
use crate::config::{
    MUSIC_PERIOD_MS, PLAYER_PERIOD_MS, RAMP_SCORE_FAST, RAMP_SCORE_TOP, SHOT_PERIOD_MS,
    STICK_PERIOD_MS, TICK_UNIT_MS, WALLS_PERIOD_FAST_MS, WALLS_PERIOD_MS, WALLS_PERIOD_TOP_MS,
};
use crate::session::Session;
use crate::task::{Task, TaskState};
use crate::{music, player, shot, stick, task, walls};

/// Number of scheduled tasks.
pub const TASK_COUNT: usize = 5;

/// Index of the walls task in the dispatch order; its period is the one
/// the difficulty ramp rewrites.
const WALLS_SLOT: usize = 2;

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// The task table plus the dispatch loop. Owned by the top-level game;
/// stepped once per hardware tick while the game is in play.
pub struct Scheduler {
    /// Task records in dispatch order: stick, player, walls, shot, music.
    pub tasks: [Task; TASK_COUNT],
}

impl Scheduler {
    /// Build the task table in its canonical initial configuration. Every
    /// task starts with `elapsed == period`, so the whole table activates
    /// on the first cycle.
    pub const fn new() -> Self {
        Self {
            tasks: [
                Task::new(TaskState::Stick(stick::State::Init), STICK_PERIOD_MS),
                Task::new(TaskState::Player(player::State::Init), PLAYER_PERIOD_MS),
                Task::new(TaskState::Walls(walls::State::Init), WALLS_PERIOD_MS),
                Task::new(TaskState::Shot(shot::State::Wait), SHOT_PERIOD_MS),
                Task::new(TaskState::Music(music::State::Wait), MUSIC_PERIOD_MS),
            ],
        }
    }

    /// Reassign every task record to its initial state, period, and
    /// elapsed time. Part of the full restart sequence.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One dispatch cycle, driven by one hardware tick.
    pub fn run_cycle<B: Board>(&mut self, session: &mut Session, board: &mut B) {
        for i in 0..TASK_COUNT {
            if self.tasks[i].ready() {
                self.tasks[i].state = task::step(self.tasks[i].state, session, board);
                self.tasks[i].elapsed = 0;

                // Abandon the rest of the cycle the moment the game ends.
                if session.game_over {
                    return;
                }

                board.show_score(session.score);
                self.ramp_difficulty(session.score);
            }
            self.tasks[i].elapsed += TICK_UNIT_MS;
        }
    }

    /// Shorten the wall period at the score thresholds. The score passes
    /// each threshold exactly once per session, so matching on equality is
    /// enough.
    fn ramp_difficulty(&mut self, score: u8) {
        if score == RAMP_SCORE_FAST {
            self.tasks[WALLS_SLOT].period = WALLS_PERIOD_FAST_MS;
        } else if score == RAMP_SCORE_TOP {
            self.tasks[WALLS_SLOT].period = WALLS_PERIOD_TOP_MS;
        }
    }

    /// The walls task's current period — exposed for the difficulty tests.
    pub fn walls_period(&self) -> u32 {
        self.tasks[WALLS_SLOT].period
    }
}

impl Default for Scheduler {
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
    use crate::board::mock::MockBoard;
    use crate::config::{PLAYER_ROW, PLAYER_START_COL};
    use crate::grid::Cell;
    use crate::session::Intent;

    #[test]
    fn every_task_activates_on_the_first_cycle() {
        let mut scheduler = Scheduler::new();
        let mut session = Session::new();
        let mut board = MockBoard::new();

        scheduler.run_cycle(&mut session, &mut board);

        assert_eq!(
            scheduler.tasks[0].state,
            TaskState::Stick(stick::State::Wait)
        );
        assert_eq!(
            scheduler.tasks[1].state,
            TaskState::Player(player::State::Wait)
        );
        assert_eq!(
            scheduler.tasks[2].state,
            TaskState::Walls(walls::State::Wait)
        );
        assert_eq!(scheduler.tasks[3].state, TaskState::Shot(shot::State::Wait));
        assert_eq!(
            scheduler.tasks[4].state,
            TaskState::Music(music::State::Play)
        );
        // The first melody note sounded and the score indicator was fed.
        assert_eq!(board.tones_issued, 1);
        assert_eq!(board.last_score, Some(0));
    }

    #[test]
    fn stick_period_is_hit_exactly() {
        let mut scheduler = Scheduler::new();
        let mut session = Session::new();
        let mut board = MockBoard::new();

        scheduler.run_cycle(&mut session, &mut board);
        let state_after_first = scheduler.tasks[0].state;

        // 45 ms period at a 5 ms tick unit: the next activation is 9
        // cycles after the first.
        for _ in 0..8 {
            scheduler.run_cycle(&mut session, &mut board);
            assert_eq!(scheduler.tasks[0].state, state_after_first);
        }
        scheduler.run_cycle(&mut session, &mut board);
        assert_ne!(scheduler.tasks[0].state, state_after_first);
    }

    #[test]
    fn intent_is_consumed_in_the_same_cycle_it_is_sampled() {
        let mut scheduler = Scheduler::new();
        let mut session = Session::new();
        let mut board = MockBoard::new();
        board.stick = 1000; // held hard right

        // Cycle 1 initializes both machines; cycle 10 samples Right and the
        // player task, running later in that same cycle, consumes it.
        for _ in 0..10 {
            scheduler.run_cycle(&mut session, &mut board);
        }

        assert_eq!(session.player_col, PLAYER_START_COL + 1);
        assert_eq!(session.last_intent, Intent::Right);
    }

    #[test]
    fn game_over_aborts_the_rest_of_the_cycle() {
        let mut scheduler = Scheduler::new();
        let mut session = Session::new();
        let mut board = MockBoard::new();

        // Stage: only the player task is due, with a fatal move queued; the
        // music task is also due and would sound a note if reached.
        scheduler.tasks[0].elapsed = 0;
        scheduler.tasks[2].elapsed = 0;
        scheduler.tasks[3].elapsed = 0;
        scheduler.tasks[1].state = TaskState::Player(player::State::Wait);
        session.last_intent = Intent::Right;
        session.grid.set(PLAYER_ROW, PLAYER_START_COL + 1, Cell::Wall);

        let music_elapsed = scheduler.tasks[4].elapsed;
        scheduler.run_cycle(&mut session, &mut board);

        assert!(session.game_over);
        assert_eq!(board.tones_issued, 0, "music must not run after the abort");
        assert_eq!(
            scheduler.tasks[4].elapsed, music_elapsed,
            "aborted tasks do not accumulate elapsed time"
        );
    }

    #[test]
    fn difficulty_ramps_at_the_score_thresholds() {
        let mut scheduler = Scheduler::new();
        let mut session = Session::new();
        let mut board = MockBoard::new();
        assert_eq!(scheduler.walls_period(), WALLS_PERIOD_MS);

        // The ramp is evaluated after each activation, so make sure at
        // least one task is due each time.
        session.score = RAMP_SCORE_FAST;
        scheduler.tasks[0].elapsed = STICK_PERIOD_MS;
        scheduler.run_cycle(&mut session, &mut board);
        assert_eq!(scheduler.walls_period(), WALLS_PERIOD_FAST_MS);

        session.score = RAMP_SCORE_TOP;
        scheduler.tasks[0].elapsed = STICK_PERIOD_MS;
        scheduler.run_cycle(&mut session, &mut board);
        assert_eq!(scheduler.walls_period(), WALLS_PERIOD_TOP_MS);
    }

    #[test]
    fn reset_restores_initial_periods_and_states() {
        let mut scheduler = Scheduler::new();
        let mut session = Session::new();
        let mut board = MockBoard::new();
        for _ in 0..40 {
            scheduler.run_cycle(&mut session, &mut board);
        }
        scheduler.tasks[WALLS_SLOT].period = WALLS_PERIOD_TOP_MS;

        scheduler.reset();

        for (task, fresh) in scheduler.tasks.iter().zip(Scheduler::new().tasks.iter()) {
            assert_eq!(task.state, fresh.state);
            assert_eq!(task.period, fresh.period);
            assert_eq!(task.elapsed, fresh.elapsed);
        }
    }
}
