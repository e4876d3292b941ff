//! Collision rules between sprite kinds
//!
//! All checks are axis-aligned box overlaps on the sprites' current
//! rectangles. Destroyed sprites never take part. Explosions spawned here
//! are staged into `pending` and only appear from the next frame on.

use super::craft::Craft;
use super::sprite::{Sprite, SpriteIds};
use crate::consts::BULLET_DAMAGE;
use crate::surface::AssetTable;

/// Shared context for rules that can spawn explosions
pub struct Spawns<'a> {
    pub assets: &'a AssetTable,
    pub ids: &'a mut SpriteIds,
    pub pending: &'a mut Vec<Sprite>,
}

impl Spawns<'_> {
    fn explode(&mut self, sprite: &Sprite) {
        let center = sprite.rect().center();
        self.pending
            .push(Sprite::explosion(self.ids.next_id(), self.assets, center));
    }
}

/// Destroy every live bullet at or below the craft's top edge.
///
/// Horizontal position is ignored: once the craft has overtaken
/// a bullet, the bullet is gone wherever it is.
pub fn destroy_passed_bullets(sprites: &mut [Sprite], craft: Option<&Craft>) -> usize {
    let Some(craft) = craft else {
        return 0;
    };
    let craft_y = craft.pos.y;
    let mut destroyed = 0;
    for bullet in sprites
        .iter_mut()
        .filter(|s| s.is_bullet() && !s.is_destroyed())
    {
        if craft_y <= bullet.pos.y {
            bullet.destroy();
            destroyed += 1;
        }
    }
    destroyed
}

/// Run every live bullet against the enemy at `enemy_idx`, in slice order.
///
/// Each overlapping bullet is consumed and deals one hit; the enemy may die
/// from several hits in one call. Returns the score earned (0 unless it died).
pub fn resolve_bullet_hits(sprites: &mut [Sprite], enemy_idx: usize, spawns: &mut Spawns) -> u64 {
    let enemy_rect = match sprites.get(enemy_idx) {
        Some(enemy) if enemy.is_enemy() && !enemy.is_destroyed() => enemy.rect(),
        _ => return 0,
    };

    for i in 0..sprites.len() {
        let bullet = &mut sprites[i];
        if !bullet.is_bullet() || bullet.is_destroyed() || !bullet.rect().intersects(&enemy_rect) {
            continue;
        }
        bullet.destroy();

        let enemy = &mut sprites[enemy_idx];
        if enemy.take_hit(BULLET_DAMAGE) {
            let value = enemy.value().unwrap_or(0);
            spawns.explode(enemy);
            log::debug!("Enemy {} destroyed (+{})", enemy.id, value);
            return value;
        }
        log::trace!("Enemy {} hit, power {:?}", enemy.id, enemy.power());
    }
    0
}

/// Destroy every live enemy on screen (bomb). Returns the score earned.
pub fn detonate_all_enemies(sprites: &mut [Sprite], spawns: &mut Spawns) -> u64 {
    let mut gained = 0;
    for enemy in sprites
        .iter_mut()
        .filter(|s| s.is_enemy() && !s.is_destroyed())
    {
        enemy.destroy();
        gained += enemy.value().unwrap_or(0);
        spawns.explode(enemy);
    }
    gained
}

/// Craft against enemies and rewards.
///
/// Touching enemies destroys the craft and every enemy it touches (no score).
/// Touching a reward applies it to the craft and consumes the reward.
pub fn resolve_craft(craft: &mut Craft, sprites: &mut [Sprite], spawns: &mut Spawns) {
    if craft.is_destroyed() {
        return;
    }
    let craft_rect = craft.rect();

    let mut crashed = false;
    for enemy in sprites
        .iter_mut()
        .filter(|s| s.is_enemy() && !s.is_destroyed() && s.rect().intersects(&craft_rect))
    {
        enemy.destroy();
        spawns.explode(enemy);
        log::debug!("Craft crashed into enemy {}", enemy.id);
        crashed = true;
    }
    if crashed {
        craft.destroy();
        let center = craft_rect.center();
        spawns
            .pending
            .push(Sprite::explosion(spawns.ids.next_id(), spawns.assets, center));
        return;
    }

    for award in sprites.iter_mut().filter(|s| !s.is_destroyed()) {
        let Some(kind) = award.award_kind() else {
            continue;
        };
        if award.rect().intersects(&craft_rect) {
            award.destroy();
            craft.collect(kind);
            log::debug!("Collected {:?} reward", kind);
        }
    }
}
