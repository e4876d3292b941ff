//! Periodic enemy and reward spawning
//!
//! The spawner runs on every `SPAWN_INTERVAL_FRAMES`th frame. Its "call
//! index" (frame / interval) decides between a reward and an enemy; enemy
//! tiers come from a weighted table. All randomness comes from a seeded
//! `Pcg32` so runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::sprite::{AwardKind, EnemyTier, Sprite, SpriteIds};
use crate::consts::*;
use crate::surface::AssetTable;

/// What one spawner call produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Enemy(EnemyTier),
    Award(AwardKind),
}

/// Is `frame` a spawn frame?
#[inline]
pub fn is_spawn_frame(frame: u64) -> bool {
    frame % SPAWN_INTERVAL_FRAMES == 0
}

/// Reward scheduled for a call index, if any
pub fn reward_for_call(call_index: u64) -> Option<AwardKind> {
    let n = call_index + 1;
    if n % REWARD_CADENCE != 0 {
        return None;
    }
    if n % BOMB_REWARD_CADENCE == 0 {
        Some(AwardKind::Bomb)
    } else {
        Some(AwardKind::Bullet)
    }
}

/// Seeded spawner
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Pick what to spawn for a call index
    pub fn choose(&mut self, call_index: u64) -> SpawnKind {
        match reward_for_call(call_index) {
            Some(award) => SpawnKind::Award(award),
            None => {
                let entry = ENEMY_TABLE[self.rng.random_range(0..ENEMY_TABLE.len())];
                SpawnKind::Enemy(EnemyTier::from_table(entry))
            }
        }
    }

    /// Spawn for `frame` (which must be a spawn frame) on a canvas `canvas_width` wide.
    ///
    /// The sprite starts fully above the canvas at a random x in
    /// `[0, canvas_width - sprite_width]`.
    pub fn spawn(
        &mut self,
        frame: u64,
        canvas_width: f32,
        assets: &AssetTable,
        ids: &mut SpriteIds,
    ) -> Sprite {
        let call_index = frame / SPAWN_INTERVAL_FRAMES;
        let kind = self.choose(call_index);

        let mut sprite = match kind {
            SpawnKind::Award(award) => Sprite::award(ids.next_id(), award, assets),
            SpawnKind::Enemy(tier) => {
                let mut enemy = Sprite::enemy(ids.next_id(), tier, assets);
                if tier != EnemyTier::Big && self.rng.random_bool(FAST_ENEMY_CHANCE) {
                    enemy.speed = FAST_SPEED;
                }
                enemy
            }
        };

        let max_x = (canvas_width - sprite.size.x).max(0.0);
        let x = (max_x * self.rng.random::<f32>()).clamp(0.0, max_x);
        sprite.pos = Vec2::new(x, -sprite.size.y);

        log::debug!("Spawn call {}: {:?} at x={:.1}", call_index, kind, x);
        sprite
    }
}
