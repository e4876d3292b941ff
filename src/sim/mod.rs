//! Frame-driven simulation module
//!
//! All gameplay logic lives here. Drawing goes through the host's
//! [`DrawSurface`](crate::surface::DrawSurface); nothing here owns a window or
//! a timer.
//! - One frame per `advance` call, never re-entrant
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the live set)

pub mod collision;
pub mod craft;
pub mod gesture;
pub mod rect;
pub mod session;
pub mod spawner;
pub mod sprite;
pub mod state;
pub mod tick;

pub use craft::Craft;
pub use gesture::{ClickState, Gesture, GestureClassifier, TouchEvent, TouchPhase};
pub use rect::Rect;
pub use session::Session;
pub use spawner::{SpawnKind, Spawner};
pub use sprite::{AwardKind, AwardPhase, BulletTier, EnemyTier, Sprite, SpriteIds, SpriteKind};
pub use state::{GameStatus, World};
