//! Space Patrol - a vertical arcade shooter core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (sprites, collisions, spawning, gestures, game state)
//! - `surface`: Draw-surface capability and asset table supplied by the host
//! - `ui`: HUD and dialog layout, button hit regions
//! - `settings`: Runtime configuration
//! - `error`: Configuration errors surfaced by `start()` and settings loading

pub mod error;
pub mod settings;
pub mod sim;
pub mod surface;
pub mod ui;

pub use error::GameError;
pub use settings::Settings;
pub use sim::{GameStatus, Session, World};

/// Game configuration constants
pub mod consts {
    /// Spawner runs on frames divisible by this
    pub const SPAWN_INTERVAL_FRAMES: u64 = 30;
    /// Every Nth spawn call drops a reward instead of an enemy
    pub const REWARD_CADENCE: u64 = 25;
    /// Every Nth spawn call drops a bomb reward (otherwise a bullet reward)
    pub const BOMB_REWARD_CADENCE: u64 = 50;

    /// Weighted enemy table: 0 = small, 1 = middle, 2 = big
    pub const ENEMY_TABLE: [u8; 20] = [0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 2, 1, 1, 2, 1, 2, 1, 2, 2];
    /// Chance that a small/middle enemy uses the fast speed
    pub const FAST_ENEMY_CHANCE: f64 = 0.33;

    /// Downward speeds (pixels/frame before density scaling)
    pub const BASE_SPEED: f32 = 2.0;
    pub const FAST_SPEED: f32 = 4.0;

    /// Player bullets travel upward
    pub const BULLET_SPEED: f32 = -10.0;
    /// Damage dealt by one bullet hit
    pub const BULLET_DAMAGE: i32 = 1;
    /// Gap between the craft's nose and a freshly fired bullet
    pub const BULLET_GAP: f32 = 5.0;

    /// Craft fires once every N of its own frames
    pub const FIRE_INTERVAL_FRAMES: u64 = 7;
    /// Volleys fired in double-bullet mode before reverting to single
    pub const DOUBLE_BULLET_VOLLEYS: u32 = 140;

    /// Enemy tiers: (power, score value)
    pub const SMALL_ENEMY: (i32, u64) = (1, 1000);
    pub const MIDDLE_ENEMY: (i32, u64) = (4, 6000);
    pub const BIG_ENEMY: (i32, u64) = (10, 30000);

    /// Reward flight: turn-around height (fraction of canvas), climb and dive speeds
    pub const REWARD_TURN_FRACTION: f32 = 0.25;
    pub const REWARD_CLIMB_SPEED: f32 = -5.0;
    pub const REWARD_DIVE_SPEED: f32 = 13.0;

    /// Explosion sheet cells and ticks per cell
    pub const EXPLOSION_CELLS: u32 = 14;
    pub const EXPLOSION_TICKS_PER_CELL: u32 = 2;

    /// Gesture timing (milliseconds)
    pub const SINGLE_CLICK_MAX_MS: u64 = 200;
    pub const DOUBLE_CLICK_WINDOW_MS: u64 = 300;

    /// Number of asset slots `start()` requires
    pub const REQUIRED_ASSETS: usize = 12;
}
