//! # Gridfall Configuration
//!
//! Compile-time constants governing the grid geometry, task periods, and
//! game tuning. All limits are fixed at compile time — no dynamic allocation.

// ---------------------------------------------------------------------------
// Grid geometry
// ---------------------------------------------------------------------------

/// Number of rows in the LED matrix.
pub const GRID_ROWS: usize = 8;

/// Number of columns in the LED matrix.
pub const GRID_COLS: usize = 8;

/// The player's fixed row. The player only ever translates horizontally
/// along this row.
pub const PLAYER_ROW: usize = 0;

/// Column the player occupies at power-up and after every restart.
pub const PLAYER_START_COL: usize = 3;

/// Row where new wall silhouettes are stamped (the far edge, opposite the
/// player). Walls descend from here toward [`PLAYER_ROW`].
pub const SPAWN_ROW: usize = GRID_ROWS - 1;

// ---------------------------------------------------------------------------
// Task periods
// ---------------------------------------------------------------------------
//
// All periods are in milliseconds of hardware-tick time. The scheduler's
// cycle granularity is the GCD of this set, so every period is hit exactly.

/// Thumb-stick sampling period.
pub const STICK_PERIOD_MS: u32 = 45;

/// Player translation period. Equal to the stick period on purpose: the
/// player task runs later in the same dispatch cycle and consumes the
/// intent sampled moments earlier.
pub const PLAYER_PERIOD_MS: u32 = 45;

/// Wall descent period at score 0. Shortened as the score climbs — see
/// [`WALLS_PERIOD_FAST_MS`] and [`WALLS_PERIOD_TOP_MS`].
pub const WALLS_PERIOD_MS: u32 = 200;

/// Power-up shot period.
pub const SHOT_PERIOD_MS: u32 = 75;

/// Melody advance period.
pub const MUSIC_PERIOD_MS: u32 = 250;

/// Wall descent period once the score reaches [`RAMP_SCORE_FAST`].
pub const WALLS_PERIOD_FAST_MS: u32 = 150;

/// Wall descent period once the score reaches [`RAMP_SCORE_TOP`].
pub const WALLS_PERIOD_TOP_MS: u32 = 100;

// ---------------------------------------------------------------------------
// Scheduler tick unit
// ---------------------------------------------------------------------------

/// Greatest common divisor of two periods. Iterative Euclid so it is usable
/// in const context.
const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn gcd_all(periods: &[u32]) -> u32 {
    let mut unit = periods[0];
    let mut i = 1;
    while i < periods.len() {
        unit = gcd(unit, periods[i]);
        i += 1;
    }
    unit
}

/// The scheduler's cycle granularity in milliseconds: the true GCD of every
/// task period, including the ramped wall periods. One hardware tick is
/// delivered every `TICK_UNIT_MS`, and each dispatch cycle advances every
/// task's elapsed time by this amount.
pub const TICK_UNIT_MS: u32 = gcd_all(&[
    STICK_PERIOD_MS,
    PLAYER_PERIOD_MS,
    WALLS_PERIOD_MS,
    WALLS_PERIOD_FAST_MS,
    WALLS_PERIOD_TOP_MS,
    SHOT_PERIOD_MS,
    MUSIC_PERIOD_MS,
]);

// ---------------------------------------------------------------------------
// Game tuning
// ---------------------------------------------------------------------------

/// Score at which the wall task first speeds up.
pub const RAMP_SCORE_FAST: u8 = 20;

/// Score at which the wall task reaches its top speed.
pub const RAMP_SCORE_TOP: u8 = 40;

/// Score that ends the session in a win.
pub const WIN_SCORE: u8 = 60;

/// Stick samples strictly above this 10-bit value mean "move right".
pub const STICK_RIGHT_MIN: u16 = 900;

/// Stick samples strictly below this 10-bit value mean "move left".
pub const STICK_LEFT_MAX: u16 = 100;

/// Percent chance that a freshly generated wall carries a pickup in one of
/// its gap columns.
pub const PICKUP_SPAWN_PERCENT: u32 = 20;

/// Number of shot steps granted per pickup. Each `Shoot` activation spends
/// one step; the shot sub-machine disarms when the budget runs out.
pub const SHOT_BUDGET: u8 = 96;

// ---------------------------------------------------------------------------
// Hardware port
// ---------------------------------------------------------------------------

/// System clock frequency in Hz (default for STM32F4 at 16 MHz HSI). Used
/// by the Cortex-M port to derive the SysTick reload value.
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

// ---------------------------------------------------------------------------
// Compile-time sanity checks
// ---------------------------------------------------------------------------

const _: () = assert!(TICK_UNIT_MS > 0);
const _: () = assert!(STICK_PERIOD_MS % TICK_UNIT_MS == 0);
const _: () = assert!(PLAYER_PERIOD_MS % TICK_UNIT_MS == 0);
const _: () = assert!(WALLS_PERIOD_MS % TICK_UNIT_MS == 0);
const _: () = assert!(WALLS_PERIOD_FAST_MS % TICK_UNIT_MS == 0);
const _: () = assert!(WALLS_PERIOD_TOP_MS % TICK_UNIT_MS == 0);
const _: () = assert!(SHOT_PERIOD_MS % TICK_UNIT_MS == 0);
const _: () = assert!(MUSIC_PERIOD_MS % TICK_UNIT_MS == 0);
const _: () = assert!(PLAYER_START_COL < GRID_COLS);
const _: () = assert!(SPAWN_ROW > PLAYER_ROW);
// SysTick reload is a 24-bit register.
const _: () = assert!((SYSTEM_CLOCK_HZ / 1_000) * TICK_UNIT_MS <= 0x0100_0000);

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
