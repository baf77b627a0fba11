//! # Gridfall
//!
//! The real-time control core of a single-board dodge game: an 8×8
//! tri-color LED matrix, a two-axis thumb stick, a piezo speaker, and a
//! restart button. One cooperative scheduler loop dispatches five
//! independently-periodic tasks — stick sampling, player translation, wall
//! descent, the power-up shot, and background music — over one shared cell
//! grid, while the display is refreshed at a fixed rate every tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              Top Level (kernel.rs)                      │
//! │   Mode: Playing · Won · Lost   render · restart poll    │
//! ├────────────────────────────────────────────────────────┤
//! │              Scheduler (scheduler.rs)                   │
//! │   [Task; 5] in dispatch order · elapsed/period clock    │
//! ├───────────┬───────────┬──────────┬──────────┬──────────┤
//! │ stick.rs  │ player.rs │ walls.rs │ shot.rs  │ music.rs │
//! │ intent    │ translate │ spawn/   │ power-up │ melody   │
//! │ sampling  │ + wrap    │ descend/ │ sweep    │ loop     │
//! │           │           │ collide  │          │          │
//! ├───────────┴───────────┴──────────┴──────────┴──────────┤
//! │        Session (session.rs) · Grid (grid.rs)            │
//! │   score · flags · intent · descent/shot bookkeeping     │
//! ├────────────────────────────────────────────────────────┤
//! │              Board contract (board.rs)                  │
//! │   render · set_tone · sample_stick · restart · tick     │
//! ├────────────────────────────────────────────────────────┤
//! │        Port (arch/) — SysTick tick source on ARM        │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Scheduling model
//!
//! Single-threaded, cooperative, no preemption and no priorities. One
//! hardware tick (every [`config::TICK_UNIT_MS`]) unblocks exactly one
//! dispatch cycle. A task activates when its elapsed time reaches its
//! period; each step runs to completion; later tasks in the list observe
//! earlier tasks' mutations from the same cycle. Fairness is purely a
//! function of declared period and list position.
//!
//! Each task is a small finite state machine stepped in two phases —
//! side-effect-bounded transition, then action — described in [`task`].
//!
//! ## Memory model
//!
//! - **No heap**: all state is statically sized
//! - **No `alloc`**: pure `core`
//! - **One owner**: the [`kernel::Game`] struct holds the grid, the task
//!   table, and every shared counter; tasks receive `&mut Session`
//!
//! ## Getting started
//!
//! Implement [`board::Board`] for your hardware, then:
//!
//! ```rust,ignore
//! let game = gridfall::Game::new();
//! game.run(&mut board)
//! ```

#![no_std]

pub mod arch;
pub mod board;
pub mod config;
pub mod grid;
pub mod kernel;
pub mod levels;
pub mod music;
pub mod player;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod shot;
pub mod stick;
pub mod task;
pub mod walls;

pub use board::Board;
pub use grid::{Cell, Grid};
pub use kernel::{Game, Mode};
pub use session::{Intent, Session};
