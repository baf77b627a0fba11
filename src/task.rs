//! # Task Model
//!
//! One scheduled unit of game logic: an opaque finite-state-machine state,
//! a period, and an elapsed-time counter. Five tasks exist for the life of
//! the firmware — they are created once at startup, fully reassigned on
//! restart, and never destroyed.
//!
//! ## Two-phase step contract
//!
//! Every task's step function runs two phases per activation:
//!
//! 1. **Transition** — compute the next state from the current state and
//!    any fresh inputs (stick intent, flags, counters). Transitions may
//!    update non-grid session fields (scoring a completed descent, arming
//!    the shot budget) but never touch the grid, which keeps them
//!    independently testable.
//! 2. **Action** — perform the grid, counter, and tone mutations that
//!    belong to *entering* the new state.
//!
//! Splitting the phases keeps an action from re-running against stale
//! preconditions: the state the action sees is always the one the
//! transition just chose.

use crate::board::Board;
use crate::session::Session;
use crate::{music, player, shot, stick, walls};

// ---------------------------------------------------------------------------
// Task state union
// ---------------------------------------------------------------------------

/// Current FSM state of any of the five tasks. The variant doubles as the
/// task's identity for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskState {
    Stick(stick::State),
    Player(player::State),
    Walls(walls::State),
    Shot(shot::State),
    Music(music::State),
}

/// Run one activation of whichever task the state belongs to.
pub fn step<B: Board>(state: TaskState, session: &mut Session, board: &mut B) -> TaskState {
    match state {
        TaskState::Stick(s) => TaskState::Stick(stick::step(s, session, board)),
        TaskState::Player(s) => TaskState::Player(player::step(s, session)),
        TaskState::Walls(s) => TaskState::Walls(walls::step(s, session, board)),
        TaskState::Shot(s) => TaskState::Shot(shot::step(s, session, board)),
        TaskState::Music(s) => TaskState::Music(music::step(s, session, board)),
    }
}

// ---------------------------------------------------------------------------
// Task record
// ---------------------------------------------------------------------------

/// One entry in the scheduler's task table.
#[derive(Debug, Clone, Copy)]
pub struct Task {
    /// The task FSM's current state.
    pub state: TaskState,

    /// Milliseconds between activations.
    pub period: u32,

    /// Milliseconds since the last activation. Reset to 0 on activation,
    /// advanced by the tick unit every dispatch cycle.
    pub elapsed: u32,
}

impl Task {
    /// A fresh task record. `elapsed` starts at the full period so the
    /// task activates on the very first dispatch cycle.
    pub const fn new(state: TaskState, period: u32) -> Self {
        Self {
            state,
            period,
            elapsed: period,
        }
    }

    /// Due for activation this cycle. `>=` rather than `==`: if the loop
    /// ever stalls past a period boundary the task still activates
    /// eventually instead of being skipped forever.
    #[inline]
    pub fn ready(&self) -> bool {
        self.elapsed >= self.period
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::mock::MockBoard;
    use crate::config::TICK_UNIT_MS;

    #[test]
    fn new_task_is_immediately_ready() {
        let task = Task::new(TaskState::Music(music::State::Wait), 250);
        assert!(task.ready());
    }

    #[test]
    fn ready_after_exactly_one_period_of_ticks() {
        let mut task = Task::new(TaskState::Stick(stick::State::Init), 45);
        task.elapsed = 0;
        let mut cycles = 0;
        while !task.ready() {
            task.elapsed += TICK_UNIT_MS;
            cycles += 1;
        }
        assert_eq!(cycles as u32 * TICK_UNIT_MS, 45);
    }

    #[test]
    fn overshoot_still_counts_as_ready() {
        let mut task = Task::new(TaskState::Stick(stick::State::Init), 45);
        task.elapsed = 50;
        assert!(task.ready());
    }

    #[test]
    fn step_dispatches_to_the_owning_machine() {
        let mut session = Session::new();
        let mut board = MockBoard::new();
        let next = step(
            TaskState::Stick(stick::State::Init),
            &mut session,
            &mut board,
        );
        assert_eq!(next, TaskState::Stick(stick::State::Wait));

        let next = step(
            TaskState::Music(music::State::Wait),
            &mut session,
            &mut board,
        );
        assert_eq!(next, TaskState::Music(music::State::Play));
    }
}
